//! Command-line arguments

use std::path::PathBuf;

use clap::Parser;
use todde_common::config::ConfigOverrides;

/// Command-line arguments for todde-web; each also reads a `TODDE_*` variable
#[derive(Parser, Debug, Clone, Default)]
#[command(name = "todde-web")]
#[command(about = "Todde car marketplace web service")]
#[command(version)]
pub struct Args {
    /// Path to config.toml
    #[arg(short, long, env = "TODDE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Address to listen on, e.g. 127.0.0.1:5780
    #[arg(short, long, env = "TODDE_BIND_ADDR")]
    pub bind: Option<String>,

    /// SQLite database file
    #[arg(short, long, env = "TODDE_DATABASE")]
    pub database: Option<PathBuf>,

    /// URL of the vehicle placeholder image
    #[arg(long, env = "TODDE_PLACEHOLDER_IMAGE_URL")]
    pub placeholder_image_url: Option<String>,

    /// Create an empty database when the file does not exist
    #[arg(long, env = "TODDE_CREATE_DATABASE")]
    pub create_database: Option<bool>,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            config_path: self.config.clone(),
            bind_addr: self.bind.clone(),
            database_path: self.database.clone(),
            placeholder_image_url: self.placeholder_image_url.clone(),
            create_database_if_missing: self.create_database,
        }
    }
}
