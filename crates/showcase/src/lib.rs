//! End-to-end showcase: per-venue pipelines (generate → classify →
//! summarize) and the narrated presentation built on top of them.

pub mod narrative;
pub mod pipeline;
pub mod presentation;

pub use pipeline::{run_domain, DomainReport, Showcase};
pub use presentation::present;
