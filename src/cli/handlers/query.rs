use crate::graphql::BookshelfSchema;
use anyhow::{Context, Result};
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_query(
    ctx: CommandContext,
    query: String,
    variables: Option<String>,
    seed: Option<PathBuf>,
) -> Result<()> {
    let schema = ctx.schema(seed)?;
    execute_and_print(&schema, query, variables)
}

/// Run one request on a throwaway runtime and print the JSON response.
///
/// Fails after printing when the response carries errors.
pub(super) fn execute_and_print(
    schema: &BookshelfSchema,
    query: String,
    variables: Option<String>,
) -> Result<()> {
    let vars: async_graphql::Variables = match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object")?,
        None => async_graphql::Variables::default(),
    };

    let request = async_graphql::Request::new(query).variables(vars);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
