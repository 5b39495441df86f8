mod init;
mod mutate;
mod query;
mod schema;
mod serve;

pub use init::handle_init;
pub use mutate::handle_mutate;
pub use query::handle_query;
pub use schema::handle_schema;
pub use serve::handle_serve;

use crate::config::BookshelfConfig;
use crate::graphql::{BookshelfSchema, build_schema};
use crate::storage::{InMemoryLibrary, SeedData, SharedLibrary};
use anyhow::{Context, Result};
use std::path::PathBuf;
use std::sync::Arc;

/// Common context passed to all command handlers
pub struct CommandContext {
    pub config: BookshelfConfig,
    pub root: PathBuf,
}

impl CommandContext {
    pub fn new(config: BookshelfConfig, root: PathBuf) -> Self {
        Self { config, root }
    }

    /// Seed file to use: the CLI override, else the configured one.
    pub fn seed_path(&self, seed_override: Option<PathBuf>) -> Option<PathBuf> {
        seed_override.or_else(|| self.config.seed_path(&self.root))
    }

    pub fn library(&self, seed_override: Option<PathBuf>) -> Result<SharedLibrary> {
        let seed_path = self.seed_path(seed_override);
        let seed = SeedData::load_or_default(seed_path.as_deref())
            .with_context(|| match &seed_path {
                Some(p) => format!("Failed to load seed data from {}", p.display()),
                None => "Failed to load seed data".to_string(),
            })?;
        Ok(Arc::new(InMemoryLibrary::new(seed)))
    }

    pub fn schema(&self, seed_override: Option<PathBuf>) -> Result<BookshelfSchema> {
        Ok(build_schema(self.library(seed_override)?))
    }
}
