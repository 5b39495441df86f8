use anyhow::Result;
use std::path::PathBuf;

use super::CommandContext;
use super::query::execute_and_print;

pub fn handle_mutate(
    ctx: CommandContext,
    mutation: String,
    variables: Option<String>,
    seed: Option<PathBuf>,
) -> Result<()> {
    let schema = ctx.schema(seed)?;

    // Auto-wrap in mutation { }
    let query = format!("mutation {{ {} }}", mutation);
    execute_and_print(&schema, query, variables)
}
