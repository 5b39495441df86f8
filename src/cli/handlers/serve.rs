use crate::server::{GRAPHQL_PATH, run_server};
use anyhow::{Context, Result};
use colored::Colorize;
use std::path::PathBuf;

use super::CommandContext;

pub fn handle_serve(
    ctx: CommandContext,
    host: Option<String>,
    port: Option<u16>,
    seed: Option<PathBuf>,
    no_graphiql: bool,
) -> Result<()> {
    let settings = ctx.config.server.with_overrides(host, port, no_graphiql);
    let schema = ctx.schema(seed)?;
    let addr = settings.socket_addr()?;

    println!(
        "{} GraphQL server on http://{}{}",
        "Starting".green(),
        addr,
        GRAPHQL_PATH
    );
    if settings.graphiql {
        println!("GraphiQL: http://{}{}", addr, GRAPHQL_PATH);
    }

    tokio::runtime::Runtime::new()?
        .block_on(async { run_server(schema, &settings).await })
        .context("GraphQL server failed")?;
    Ok(())
}
