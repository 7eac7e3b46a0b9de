//! LLM inference throughput estimator
//!
//! Back-of-envelope tokens/sec for a model of a given size, quantization and
//! GPU memory bandwidth.
//!
//! ## Main Components
//!
//! - `estimator`: The formula, quantization table and heuristic constants
//! - `form`: Input filtering, field minimums and the interactive prompt
//! - `report`: Text, Markdown and JSON rendering of results
//! - `hardware`: GPU bandwidth presets
//! - `config`: Form and output defaults

pub mod config;
pub mod estimator;
pub mod form;
pub mod hardware;
pub mod report;

pub use config::Config;
pub use estimator::{
    estimate, estimate_named, EstimateError, EstimationInput, EstimationResult,
    QuantizationScheme,
};

/// Library errors
pub use anyhow::{Error, Result};
