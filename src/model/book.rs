use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    pub id: i32,
    pub name: String,
    /// Not checked against the author collection.
    pub author_id: i32,
}

impl Book {
    pub fn new(id: i32, name: impl Into<String>, author_id: i32) -> Self {
        Self {
            id,
            name: name.into(),
            author_id,
        }
    }

    pub fn is_written_by(&self, author_id: i32) -> bool {
        self.author_id == author_id
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewBook {
    pub name: String,
    pub author_id: i32,
}

impl NewBook {
    pub fn new(name: impl Into<String>, author_id: i32) -> Self {
        Self {
            name: name.into(),
            author_id,
        }
    }

    pub(crate) fn into_book(self, id: i32) -> Book {
        Book {
            id,
            name: self.name,
            author_id: self.author_id,
        }
    }
}
