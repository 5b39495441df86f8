use super::{Library, SeedData};
use crate::{
    error::{BookshelfError, Result},
    model::{Author, Book, NewBook},
};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

#[derive(Default)]
struct Collections {
    authors: Vec<Author>,
    books: Vec<Book>,
    /// Id handed to the next appended book. Only ever grows; `None` once
    /// the id space is exhausted.
    next_book_id: Option<i32>,
}

/// Process-local library backed by two vectors.
///
/// Authors are read-only after construction, books are append-only.
pub struct InMemoryLibrary {
    collections: RwLock<Collections>,
}

impl InMemoryLibrary {
    pub fn new(seed: SeedData) -> Self {
        let next_book_id = seed
            .books
            .iter()
            .map(|b| b.id)
            .max()
            .map_or(Some(1), |max| max.checked_add(1));

        tracing::debug!(
            authors = seed.authors.len(),
            books = seed.books.len(),
            next_book_id = ?next_book_id,
            "Seeding in-memory library"
        );

        Self {
            collections: RwLock::new(Collections {
                authors: seed.authors,
                books: seed.books,
                next_book_id,
            }),
        }
    }

    pub fn empty() -> Self {
        Self::new(SeedData::empty())
    }

    // Collections hold plain data, a poisoned guard still sees a consistent value.
    fn read(&self) -> RwLockReadGuard<'_, Collections> {
        self.collections
            .read()
            .unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Collections> {
        self.collections
            .write()
            .unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryLibrary {
    fn default() -> Self {
        Self::new(SeedData::default())
    }
}

impl Library for InMemoryLibrary {
    fn authors(&self) -> Result<Vec<Author>> {
        Ok(self.read().authors.clone())
    }

    fn books(&self) -> Result<Vec<Book>> {
        Ok(self.read().books.clone())
    }

    fn author(&self, id: i32) -> Result<Option<Author>> {
        Ok(self.read().authors.iter().find(|a| a.id == id).cloned())
    }

    fn book(&self, id: i32) -> Result<Option<Book>> {
        Ok(self.read().books.iter().find(|b| b.id == id).cloned())
    }

    fn books_by_author(&self, author_id: i32) -> Result<Vec<Book>> {
        Ok(self
            .read()
            .books
            .iter()
            .filter(|b| b.is_written_by(author_id))
            .cloned()
            .collect())
    }

    fn add_book(&self, new_book: NewBook) -> Result<Book> {
        let mut collections = self.write();
        let Some(id) = collections.next_book_id else {
            tracing::warn!(name = %new_book.name, "Book id space exhausted");
            return Err(BookshelfError::Storage(
                "No book ids left: the highest id is already in use".to_string(),
            ));
        };
        collections.next_book_id = id.checked_add(1);

        let book = new_book.into_book(id);
        tracing::info!(id = book.id, name = %book.name, author_id = book.author_id, "Adding book");
        collections.books.push(book.clone());
        Ok(book)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn single_pair() -> InMemoryLibrary {
        InMemoryLibrary::new(SeedData::new(
            vec![Author::new(1, "A1")],
            vec![Book::new(1, "B1", 1)],
        ))
    }

    #[test]
    fn test_reads_preserve_seed_order() {
        let seed = SeedData::default();
        let library = InMemoryLibrary::new(seed.clone());

        assert_eq!(library.authors().unwrap(), seed.authors);
        assert_eq!(library.books().unwrap(), seed.books);
    }

    #[test]
    fn test_book_lookup() {
        let library = single_pair();

        assert_eq!(library.book(1).unwrap().unwrap().name, "B1");
        assert!(library.book(42).unwrap().is_none());
    }

    #[test]
    fn test_author_lookup_missing_is_none() {
        let library = single_pair();

        assert_eq!(library.author(1).unwrap().unwrap().name, "A1");
        assert!(library.author(7).unwrap().is_none());
    }

    #[test]
    fn test_books_by_author() {
        let library = InMemoryLibrary::default();

        let tolkien: Vec<_> = library
            .books_by_author(2)
            .unwrap()
            .into_iter()
            .map(|b| b.id)
            .collect();
        assert_eq!(tolkien, vec![4, 5, 6]);
        assert!(library.books_by_author(99).unwrap().is_empty());
    }

    #[test]
    fn test_add_book_appends_with_next_id() {
        let library = single_pair();

        let book = library.add_book(NewBook::new("B2", 1)).unwrap();
        assert_eq!(book, Book::new(2, "B2", 1));

        let books = library.books().unwrap();
        assert_eq!(books.len(), 2);
        assert_eq!(books[1], book);
    }

    #[test]
    fn test_add_book_accepts_unknown_author() {
        let library = single_pair();

        let book = library.add_book(NewBook::new("Orphan", 404)).unwrap();
        assert_eq!(book.author_id, 404);
        assert!(library.author(404).unwrap().is_none());
    }

    #[test]
    fn test_ids_continue_after_sparse_seed() {
        let library = InMemoryLibrary::new(SeedData::new(
            Vec::new(),
            vec![Book::new(1, "One", 1), Book::new(10, "Ten", 1)],
        ));

        assert_eq!(library.add_book(NewBook::new("Next", 1)).unwrap().id, 11);
    }

    #[test]
    fn test_empty_library_starts_at_one() {
        let library = InMemoryLibrary::empty();
        assert_eq!(library.add_book(NewBook::new("First", 1)).unwrap().id, 1);
    }

    #[test]
    fn test_add_book_fails_once_ids_run_out() {
        let library = InMemoryLibrary::new(SeedData::new(
            Vec::new(),
            vec![Book::new(i32::MAX, "Last", 1)],
        ));

        let result = library.add_book(NewBook::new("Overflow", 1));
        assert!(matches!(result, Err(BookshelfError::Storage(_))));
        assert!(matches!(
            library.add_book(NewBook::new("Again", 1)),
            Err(BookshelfError::Storage(_))
        ));
        assert_eq!(library.books().unwrap().len(), 1);
    }

    #[test]
    fn test_last_id_is_handed_out_once() {
        let library = InMemoryLibrary::new(SeedData::new(
            Vec::new(),
            vec![Book::new(i32::MAX - 1, "Penultimate", 1)],
        ));

        let book = library.add_book(NewBook::new("Last", 1)).unwrap();
        assert_eq!(book.id, i32::MAX);
        assert!(library.add_book(NewBook::new("Overflow", 1)).is_err());
    }

    #[test]
    fn test_concurrent_adds_get_unique_ids() {
        let library = Arc::new(single_pair());

        let handles: Vec<_> = (0..8)
            .map(|i| {
                let library = Arc::clone(&library);
                std::thread::spawn(move || {
                    (0..25)
                        .map(|j| {
                            library
                                .add_book(NewBook::new(format!("t{i}-{j}"), 1))
                                .unwrap()
                                .id
                        })
                        .collect::<Vec<_>>()
                })
            })
            .collect();

        let mut ids: Vec<i32> = handles
            .into_iter()
            .flat_map(|h| h.join().unwrap())
            .collect();
        ids.sort_unstable();
        ids.dedup();

        assert_eq!(ids.len(), 200);
        assert_eq!(library.books().unwrap().len(), 201);
    }
}
