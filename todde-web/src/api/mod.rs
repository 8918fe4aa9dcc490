//! HTTP API handlers for todde-web

pub mod catalog;
pub mod error;
pub mod health;
pub mod inventory;
pub mod pages;
pub mod search;

pub use catalog::{car_manufacturers, car_models, car_variants};
pub use error::ApiError;
pub use health::health_routes;
pub use inventory::{all_cars, foreign_used_cars, registered_cars, vehicle_detail};
pub use pages::{financing, homepage, SitePage};
pub use search::search;
