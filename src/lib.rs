//! Preprocessing for the Fake and Real News dataset: load CSV, map columns,
//! clean text, drop short rows and in-file duplicates, emit NDJSON.

pub mod cleaner;
pub mod config;
pub mod constants;
pub mod error;
pub mod idempotency;
pub mod loader;
pub mod logging;
pub mod mapper;
pub mod metrics;
pub mod pipeline;
pub mod stats;
pub mod types;
pub mod writer;

pub use config::PipelineConfig;
pub use error::{PrepError, Result};
pub use pipeline::Pipeline;
pub use types::{Document, Label};
