//! SQLite storage: schema creation and read-side loaders

pub mod init;
pub mod queries;

pub use init::init_database;
pub use queries::*;

use crate::{Error, Result};
use sqlx::SqlitePool;
use std::path::Path;
use tracing::info;

/// Open an existing database read-only
///
/// The web service never writes; `mode=ro` makes SQLite reject any attempt.
pub async fn connect_readonly(db_path: &Path) -> Result<SqlitePool> {
    if !db_path.exists() {
        return Err(Error::NotFound(format!(
            "Database not found: {}",
            db_path.display()
        )));
    }

    let db_url = format!("sqlite://{}?mode=ro", db_path.display());
    let pool = SqlitePool::connect(&db_url).await?;
    info!("Connected read-only: {}", db_path.display());

    Ok(pool)
}
