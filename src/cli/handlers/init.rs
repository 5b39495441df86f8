use crate::config::{BookshelfConfig, CONFIG_FILE_NAME};
use crate::error::BookshelfError;
use anyhow::Result;
use colored::Colorize;

pub fn handle_init() -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config_path = cwd.join(CONFIG_FILE_NAME);

    if config_path.exists() {
        return Err(BookshelfError::AlreadyInitialized(config_path.display().to_string()).into());
    }

    let config = BookshelfConfig::default();
    config.save(&config_path)?;

    println!(
        "{} bookshelf config in {}",
        "Initialized".green(),
        cwd.display()
    );
    println!("  Config: {}", config_path.display());
    println!(
        "  Server: http://{}:{}",
        config.server.host, config.server.port
    );

    Ok(())
}
