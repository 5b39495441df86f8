use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// On-disk encodings accepted for seed files.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedFormat {
    Toml,
    Yaml,
    Json,
}

impl SeedFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);

        match extension.as_deref() {
            Some("toml") => Ok(Self::Toml),
            Some("yaml" | "yml") => Ok(Self::Yaml),
            Some("json") => Ok(Self::Json),
            _ => Err(BookshelfError::Seed(format!(
                "Unsupported seed file extension: {} (expected .toml, .yaml, .yml or .json)",
                path.display()
            ))),
        }
    }
}

/// Initial contents of a library.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeedData {
    #[serde(default)]
    pub authors: Vec<Author>,

    #[serde(default)]
    pub books: Vec<Book>,
}

impl SeedData {
    pub fn new(authors: Vec<Author>, books: Vec<Book>) -> Self {
        Self { authors, books }
    }

    pub fn empty() -> Self {
        Self::new(Vec::new(), Vec::new())
    }

    pub fn load(path: &Path) -> Result<Self> {
        let format = SeedFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)?;
        let seed = Self::parse(&content, format)?;

        tracing::info!(
            path = %path.display(),
            authors = seed.authors.len(),
            books = seed.books.len(),
            "Loaded seed data"
        );
        Ok(seed)
    }

    pub fn parse(content: &str, format: SeedFormat) -> Result<Self> {
        let seed = match format {
            SeedFormat::Toml => toml::from_str(content)?,
            SeedFormat::Yaml => serde_yaml::from_str(content)?,
            SeedFormat::Json => serde_json::from_str(content)?,
        };
        Ok(seed)
    }

    /// Load from `path` when given, otherwise fall back to the built-in dataset.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

impl Default for SeedData {
    fn default() -> Self {
        Self::new(
            vec![
                Author::new(1, "J. K. Rowling"),
                Author::new(2, "J. R. R. Tolkien"),
                Author::new(3, "Brent Weeks"),
            ],
            vec![
                Book::new(1, "Harry Potter and the Chamber of Secrets", 1),
                Book::new(2, "Harry Potter and the Prisoner of Azkaban", 1),
                Book::new(3, "Harry Potter and the Goblet of Fire", 1),
                Book::new(4, "The Fellowship of the Ring", 2),
                Book::new(5, "The Two Towers", 2),
                Book::new(6, "The Return of the King", 2),
                Book::new(7, "The Way of Shadows", 3),
                Book::new(8, "Beyond the Shadows", 3),
            ],
        )
    }
}
