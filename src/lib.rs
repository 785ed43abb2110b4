//! filter_bench - Iterator pipeline vs. manual loop
//!
//! Measures time and allocation of two equivalent filters (keep even values
//! greater than 500) over one million random integers in `[1, 1000)`.
//!
//! # Modules
//!
//! - [`dataset`] - Seeded dataset generation
//! - [`filter`] - Shared predicate and the two filter implementations
//! - [`benchmark`] - FilterBenchmark: setup, verification, criterion registration
//! - [`config`] - YAML configuration
//! - [`logging`] - tracing subscriber setup
//! - [`error`] - Error types

pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod logging;

// Convenient re-exports at crate root
pub use benchmark::{Equivalence, FilterBenchmark, FilterOp};
pub use config::{AppConfig, BenchConfig};
pub use dataset::{DATASET_LEN, Dataset, VALUE_RANGE};
pub use error::BenchError;
pub use filter::{declarative_filter, is_match, manual_filter};
