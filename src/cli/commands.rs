use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about = "A GraphQL API for authors and books")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config file (searches upward for .bookshelf.toml by default)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Also write JSON logs to this file (rotated daily)
    #[arg(long, global = true, env = "BOOKSHELF_LOG_FILE")]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a default .bookshelf.toml in the current directory
    Init,

    /// Start the GraphQL HTTP server
    Serve {
        /// Address to bind
        #[arg(long)]
        host: Option<String>,

        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Seed file (.toml, .yaml, .yml or .json)
        #[arg(long)]
        seed: Option<PathBuf>,

        /// Do not serve GraphiQL on GET /graphql
        #[arg(long)]
        no_graphiql: bool,
    },

    /// Execute a GraphQL query against a freshly seeded library
    Query {
        /// GraphQL query string
        query: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Seed file (.toml, .yaml, .yml or .json)
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Execute a GraphQL mutation (automatically wraps in 'mutation { }')
    Mutate {
        /// Mutation body (without 'mutation' keyword)
        mutation: String,

        /// Variables as JSON
        #[arg(long)]
        variables: Option<String>,

        /// Seed file (.toml, .yaml, .yml or .json)
        #[arg(long)]
        seed: Option<PathBuf>,
    },

    /// Print the schema in SDL form
    Schema,
}
