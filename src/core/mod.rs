//! Domain types, configuration and the pure parts of the pipeline

pub mod config;
pub mod metrics;
pub mod models;
pub mod validation;
