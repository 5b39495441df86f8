use crate::graphql::build_schema;
use crate::storage::InMemoryLibrary;
use anyhow::Result;
use std::sync::Arc;

pub fn handle_schema() -> Result<()> {
    let schema = build_schema(Arc::new(InMemoryLibrary::empty()));
    print!("{}", schema.sdl());
    Ok(())
}
