use anyhow::{Context, Result};
use clap::Parser;

use bookshelf::cli::handlers::{
    CommandContext, handle_init, handle_mutate, handle_query, handle_schema, handle_serve,
};
use bookshelf::cli::{Cli, Commands};
use bookshelf::config::BookshelfConfig;

fn main() -> Result<()> {
    let cli = Cli::parse();
    bookshelf::logging::init(cli.verbose, cli.log_file.clone());

    match cli.command {
        Commands::Init => handle_init(),
        Commands::Schema => handle_schema(),
        Commands::Serve {
            host,
            port,
            seed,
            no_graphiql,
        } => handle_serve(load_context(&cli.config)?, host, port, seed, no_graphiql),
        Commands::Query {
            query,
            variables,
            seed,
        } => handle_query(load_context(&cli.config)?, query, variables, seed),
        Commands::Mutate {
            mutation,
            variables,
            seed,
        } => handle_mutate(load_context(&cli.config)?, mutation, variables, seed),
    }
}

fn load_context(config_path: &Option<std::path::PathBuf>) -> Result<CommandContext> {
    let (config, root) = match config_path {
        Some(path) => BookshelfConfig::load(path)
            .with_context(|| format!("Failed to load configuration from {}", path.display()))?,
        None => {
            let cwd = std::env::current_dir()?;
            BookshelfConfig::load_or_default(&cwd)
                .context("Failed to load bookshelf configuration")?
        }
    };
    Ok(CommandContext::new(config, root))
}
