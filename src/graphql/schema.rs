use std::sync::Arc;

use async_graphql::{Context, EmptySubscription, Object, Schema};

use crate::model::NewBook;
use crate::storage::{Library, SharedLibrary};

use super::types::*;

pub type BookshelfSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema over `library`.
///
/// A request may carry its own `SharedLibrary` in its data; it takes
/// precedence over the one registered here.
pub fn build_schema(library: SharedLibrary) -> BookshelfSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(library)
        .finish()
}

pub(crate) fn library<'a>(ctx: &Context<'a>) -> async_graphql::Result<&'a Arc<dyn Library>> {
    ctx.data::<SharedLibrary>()
}

pub struct QueryRoot;

/// Root query for books and authors
#[Object(name = "RootQuery")]
impl QueryRoot {
    /// A single book
    async fn book(&self, ctx: &Context<'_>, id: Option<i32>) -> async_graphql::Result<Option<Book>> {
        let Some(id) = id else {
            return Ok(None);
        };
        Ok(library(ctx)?.book(id)?.map(Into::into))
    }

    /// List of all books
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = library(ctx)?.books()?;
        Ok(books.into_iter().map(Into::into).collect())
    }

    /// List of all authors
    async fn authors(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Author>> {
        let authors = library(ctx)?.authors()?;
        Ok(authors.into_iter().map(Into::into).collect())
    }
}

pub struct MutationRoot;

/// Root mutation
#[Object(name = "RootMutation")]
impl MutationRoot {
    /// Add a new book
    async fn add_book(
        &self,
        ctx: &Context<'_>,
        name: String,
        author_id: i32,
    ) -> async_graphql::Result<Book> {
        let book = library(ctx)?.add_book(NewBook::new(name, author_id))?;
        Ok(book.into())
    }
}
