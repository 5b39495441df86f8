use crate::model::{Author as ModelAuthor, Book as ModelBook};
use async_graphql::{ComplexObject, Context, SimpleObject};

use super::schema::library;

/// This represents a book written by author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Book {
    pub id: i32,
    pub name: String,
    pub author_id: i32,
}

#[ComplexObject]
impl Book {
    /// The author this book points at, or null when no author has that id
    async fn author(&self, ctx: &Context<'_>) -> async_graphql::Result<Option<Author>> {
        let author = library(ctx)?.author(self.author_id)?;
        Ok(author.map(Into::into))
    }
}

impl From<ModelBook> for Book {
    fn from(b: ModelBook) -> Self {
        Self {
            id: b.id,
            name: b.name,
            author_id: b.author_id,
        }
    }
}

/// An Author
#[derive(SimpleObject, Clone)]
#[graphql(complex)]
pub struct Author {
    pub id: i32,
    pub name: String,
}

#[ComplexObject]
impl Author {
    /// Books written by this author, in the order they were added
    async fn books(&self, ctx: &Context<'_>) -> async_graphql::Result<Vec<Book>> {
        let books = library(ctx)?.books_by_author(self.id)?;
        Ok(books.into_iter().map(Into::into).collect())
    }
}

impl From<ModelAuthor> for Author {
    fn from(a: ModelAuthor) -> Self {
        Self {
            id: a.id,
            name: a.name,
        }
    }
}
