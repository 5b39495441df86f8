//! GraphQL schema and resolvers for the bookshelf.
//!
//! ## Usage
//!
//! ```bash
//! # Start the GraphQL server
//! bookshelf serve --port 3000
//!
//! # Execute a query from the CLI
//! bookshelf query '{ books { id name author { name } } }'
//!
//! # Execute a mutation from the CLI
//! bookshelf mutate 'addBook(name: "Dune", authorId: 1) { id }'
//! ```
//!
//! ## Schema
//!
//! - **Queries**: `book`, `books`, `authors`
//! - **Mutations**: `addBook`
//!
//! `Book.author` and `Author.books` are resolved only when a query asks
//! for them, by looking up the [`Library`](crate::storage::Library) held in
//! the request context.

mod schema;
mod types;

pub use schema::{BookshelfSchema, MutationRoot, QueryRoot, build_schema};
pub use types::*;
