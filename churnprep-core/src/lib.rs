//! Core library for preprocessing a customer-churn CSV dataset.
//!
//! The pipeline loads a CSV into a polars `DataFrame`, coerces a numeric
//! column and drops incomplete rows, selects a fixed set of columns, bins one
//! numeric column into ordered categories, encodes the categorical columns as
//! integers and writes the result to a new CSV.
//!
//! ## Usage Example
//!
//! ```rust,no_run
//! use churnprep_core::{EncodingMode, PipelineConfig, run_pipeline};
//! use std::path::PathBuf;
//!
//! let mut config = PipelineConfig::default();
//! config.input = PathBuf::from("Telco-Customer-Churn.csv");
//! config.encoding = EncodingMode::Mapping;
//!
//! let summary = run_pipeline(&config).unwrap();
//! println!("wrote {} rows", summary.rows_written);
//! ```

pub mod config;
pub mod error;
pub mod frame;
pub mod inspect;
pub mod io;
pub mod processing;
pub mod reporting;

// Re-exports for public API
pub use config::{PipelineConfig, PipelineConfigBuilder};
pub use error::{CoreError, CoreResult};
pub use inspect::{ColumnProfile, inspect_table};
pub use io::{LoadOptions, load_csv, save_csv};
pub use processing::{
    BinEdges, EncodingMode, EncodingReport, MappingTable, PreprocessReport, preprocess,
    run_pipeline,
};
pub use reporting::{RunSummary, write_json};
