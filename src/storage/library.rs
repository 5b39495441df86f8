use std::sync::Arc;

use crate::{
    error::Result,
    model::{Author, Book, NewBook},
};

/// Repository of authors and books.
///
/// Lookups that find nothing return `None` or an empty list, never an error.
/// Ids are compared with exact integer equality.
pub trait Library: Send + Sync {
    /// All authors in insertion order.
    fn authors(&self) -> Result<Vec<Author>>;

    /// All books in insertion order.
    fn books(&self) -> Result<Vec<Book>>;

    /// First author whose id matches.
    fn author(&self, id: i32) -> Result<Option<Author>>;

    /// First book whose id matches.
    fn book(&self, id: i32) -> Result<Option<Book>>;

    /// Every book pointing at `author_id`, in insertion order.
    fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>>;

    /// Append a book, assigning it a fresh id.
    fn add_book(&self, new_book: NewBook) -> Result<Book>;
}

/// Handle resolvers use to reach the library.
pub type SharedLibrary = Arc<dyn Library>;
