//! # Todde Common Library
//!
//! Core of the Todde car marketplace:
//! - Catalog and listing models
//! - Inventory filter/facet engine
//! - Financing estimator
//! - Display image resolution
//! - Page content assembly (homepage, financing, vehicle detail)
//! - Configuration loading and SQLite storage

pub mod catalog;
pub mod config;
pub mod content;
#[cfg(feature = "sqlx")]
pub mod db;
pub mod detail;
pub mod error;
pub mod financing;
pub mod images;
pub mod inventory;
pub mod models;
pub mod pagination;
pub mod search;

#[cfg(test)]
mod testing;

pub use error::{Error, Result};
