// ============================================================================
// churnprep-core/src/config/builder.rs
// ============================================================================
//
// CONFIGURATION BUILDER: Builder Pattern for PipelineConfig
//
// Fluent construction of PipelineConfig starting from the built-in defaults.
// `build()` does not validate; call `PipelineConfig::validate` on the result.

use std::path::PathBuf;

use super::PipelineConfig;
use crate::processing::encoding::{EncodingMode, MappingTable};

/// Builder for creating PipelineConfig instances.
///
/// # Examples
///
/// ```rust
/// use churnprep_core::config::PipelineConfigBuilder;
/// use churnprep_core::EncodingMode;
/// use std::path::PathBuf;
///
/// let config = PipelineConfigBuilder::new()
///     .input(PathBuf::from("data/raw.csv"))
///     .output(PathBuf::from("data/clean.csv"))
///     .encoding(EncodingMode::Mapping)
///     .bin_labels(["Low", "Medium", "High"])
///     .build();
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PipelineConfigBuilder {
    config: PipelineConfig,
}

impl PipelineConfigBuilder {
    /// Creates a new builder holding the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn input(mut self, input: PathBuf) -> Self {
        self.config.input = input;
        self
    }

    pub fn output(mut self, output: PathBuf) -> Self {
        self.config.output = output;
        self
    }

    pub fn numeric_column(mut self, column: impl Into<String>) -> Self {
        self.config.numeric_column = column.into();
        self
    }

    /// Sets the selected columns, in output order.
    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn target_column(mut self, column: impl Into<String>) -> Self {
        self.config.target_column = column.into();
        self
    }

    pub fn bin_column(mut self, column: impl Into<String>) -> Self {
        self.config.binning.column = column.into();
        self
    }

    /// Sets the bin labels; the bin count follows the label count.
    pub fn bin_labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.binning.labels = labels.into_iter().map(Into::into).collect();
        self
    }

    pub fn encoding(mut self, encoding: EncodingMode) -> Self {
        self.config.encoding = encoding;
        self
    }

    pub fn mapping(mut self, mapping: MappingTable) -> Self {
        self.config.mapping = mapping;
        self
    }

    pub fn na_values<I, S>(mut self, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.config.na_values = values.into_iter().map(Into::into).collect();
        self
    }

    pub fn build(self) -> PipelineConfig {
        self.config
    }
}
