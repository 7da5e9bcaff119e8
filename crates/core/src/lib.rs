//! Shared building blocks for the WiFi insights showcase: configuration,
//! the error type, and the visitor record model for both venues.

pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{InsightsError, InsightsResult};
pub use types::{Domain, RestaurantVisit, SupermarketVisit, VisitorRecord};
