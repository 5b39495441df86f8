//! Data models for the bookshelf.
//!
//! - [`Author`]: a writer, identified by an integer id
//! - [`Book`]: a title pointing at its author by id
//! - [`NewBook`]: the fields a client supplies when adding a book

mod author;
mod book;

pub use author::Author;
pub use book::{Book, NewBook};
