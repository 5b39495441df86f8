//! # Bookshelf - a small GraphQL API over authors and books
//!
//! Authors and books live in process memory, seeded at startup, and are
//! exposed through a GraphQL schema served over HTTP with axum.
//!
//! ## Quick Start
//!
//! ```bash
//! # Serve on http://127.0.0.1:3000/graphql with GraphiQL
//! bookshelf serve
//!
//! # One-off query against the built-in dataset
//! bookshelf query '{ authors { name books { name } } }'
//!
//! # Print the schema
//! bookshelf schema
//! ```
//!
//! ## Modules
//!
//! - [`cli`]: Command-line interface definitions and handlers
//! - [`config`]: Configuration loading
//! - [`error`]: Error types and result aliases
//! - [`graphql`]: GraphQL schema and resolvers
//! - [`model`]: Data models (Author, Book)
//! - [`server`]: HTTP adapter
//! - [`storage`]: Library repository and seed data

/// Command-line interface using clap.
pub mod cli;

/// Configuration loading and management.
///
/// Handles `.bookshelf.toml` discovery and defaults.
pub mod config;

/// Error types and result aliases.
///
/// Defines `BookshelfError` enum and `Result<T>` type alias.
pub mod error;

/// GraphQL schema and resolvers.
///
/// Provides the async-graphql schema for querying and adding books.
pub mod graphql;

pub mod logging;

/// Data models for authors and books.
pub mod model;

/// Axum router serving the schema at `/graphql`.
pub mod server;

/// Library repository abstraction, in-memory backend and seed data.
pub mod storage;
