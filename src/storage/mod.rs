//! Storage layer for authors and books.
//!
//! Resolvers never touch the collections directly; they go through the
//! [`Library`] trait found in the GraphQL context. The only backend today
//! is [`InMemoryLibrary`], which lives for the lifetime of the process and
//! is populated from [`SeedData`] at startup.
//!
//! ## Components
//!
//! - [`Library`]: read and append operations over authors and books
//! - [`InMemoryLibrary`]: `RwLock`-guarded vectors with a monotonic book id
//! - [`SeedData`]: the initial dataset, built in or loaded from a file

mod library;
mod memory;
mod seed;

pub use library::{Library, SharedLibrary};
pub use memory::InMemoryLibrary;
pub use seed::{SeedData, SeedFormat};
