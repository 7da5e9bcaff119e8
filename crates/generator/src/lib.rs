//! Synthetic visitor generation — seeded, parameter-validated tables of
//! restaurant and supermarket visits.

pub mod distribution;
pub mod generator;

pub use distribution::CategoricalDistribution;
pub use generator::{RestaurantParams, SupermarketParams, SyntheticGenerator, VisitWindow};
