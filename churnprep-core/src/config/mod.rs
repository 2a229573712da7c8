//! Configuration structures and constants for the churnprep-core library.
//!
//! Settings are layered: built-in defaults, then an optional TOML file, then
//! `CHURNPREP_*` environment variables. The CLI applies its flags last.

mod builder;
mod utils;

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use log::warn;
use serde::{Deserialize, Serialize};

pub use builder::PipelineConfigBuilder;

use crate::error::{CoreError, CoreResult};
use crate::io::{DEFAULT_NA_VALUES, LoadOptions};
use crate::processing::encoding::{EncodingMode, MappingTable};

// ============================================================================
// DEFAULT CONSTANTS
// ============================================================================

/// Raw dataset read when no input is given.
pub const DEFAULT_INPUT_PATH: &str = "Telco-Customer-Churn.csv";

/// Where the preprocessed dataset is written when no output is given.
pub const DEFAULT_OUTPUT_PATH: &str = "preprocessing/Telco-Customer-Churn_preprocessing.csv";

/// Column coerced to numeric during cleaning.
pub const DEFAULT_NUMERIC_COLUMN: &str = "TotalCharges";

/// Column kept last in the output.
pub const DEFAULT_TARGET_COLUMN: &str = "Churn";

/// Columns kept by feature selection, in output order before binning.
pub const DEFAULT_SELECTED_COLUMNS: [&str; 8] = [
    "InternetService",
    "OnlineSecurity",
    "TechSupport",
    "Contract",
    "PaymentMethod",
    "SeniorCitizen",
    "MonthlyCharges",
    "Churn",
];

/// Numeric column replaced by equal-width categories.
pub const DEFAULT_BIN_COLUMN: &str = "MonthlyCharges";

/// Category labels, lowest range first. The bin count is the label count.
///
/// Label encoding of the binned column follows this order, not the sorted
/// order of the label text, so renamed labels (e.g. Rendah, Sedang, Tinggi)
/// still get codes from the lowest range up.
pub const DEFAULT_BIN_LABELS: [&str; 3] = ["Low", "Medium", "High"];

pub const ENV_INPUT: &str = "CHURNPREP_INPUT";
pub const ENV_OUTPUT: &str = "CHURNPREP_OUTPUT";
pub const ENV_ENCODING: &str = "CHURNPREP_ENCODING";

// ============================================================================
// CONFIGURATION STRUCTURES
// ============================================================================

/// Equal-width binning settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinningConfig {
    /// Numeric column to bin; it is replaced in place by the categories
    pub column: String,

    /// One label per bin, ordered from the lowest range to the highest
    pub labels: Vec<String>,
}

impl Default for BinningConfig {
    fn default() -> Self {
        Self {
            column: DEFAULT_BIN_COLUMN.to_string(),
            labels: DEFAULT_BIN_LABELS.iter().map(|s| s.to_string()).collect(),
        }
    }
}

impl BinningConfig {
    pub fn n_bins(&self) -> usize {
        self.labels.len()
    }
}

/// Main configuration for a preprocessing run.
///
/// # Examples
///
/// ```rust
/// use churnprep_core::config::PipelineConfig;
/// use churnprep_core::EncodingMode;
///
/// let config = PipelineConfig::default();
/// assert_eq!(config.encoding, EncodingMode::Label);
/// assert_eq!(config.columns.len(), 8);
/// config.validate().unwrap();
/// ```
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PipelineConfig {
    // ---- Paths ----
    /// Raw CSV dataset
    pub input: PathBuf,

    /// Destination for the preprocessed CSV
    pub output: PathBuf,

    // ---- Pipeline Steps ----
    /// Column coerced to numeric before rows with nulls are dropped
    pub numeric_column: String,

    /// Columns kept by feature selection
    pub columns: Vec<String>,

    /// Column moved to the end after binning
    pub target_column: String,

    pub binning: BinningConfig,

    /// Which encoder turns categorical columns into integers
    pub encoding: EncodingMode,

    /// Value-to-integer table used by [`EncodingMode::Mapping`]
    pub mapping: MappingTable,

    /// Raw cell values read as null
    pub na_values: Vec<String>,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            numeric_column: DEFAULT_NUMERIC_COLUMN.to_string(),
            columns: DEFAULT_SELECTED_COLUMNS.iter().map(|s| s.to_string()).collect(),
            target_column: DEFAULT_TARGET_COLUMN.to_string(),
            binning: BinningConfig::default(),
            encoding: EncodingMode::default(),
            mapping: MappingTable::telco_default(),
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// On-disk shape of the TOML config file. Every field is optional; absent
/// fields keep their current value.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct ConfigFile {
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    numeric_column: Option<String>,
    columns: Option<Vec<String>>,
    target_column: Option<String>,
    encoding: Option<EncodingMode>,
    na_values: Option<Vec<String>>,
    binning: Option<BinningFile>,
    mapping: Option<BTreeMap<String, BTreeMap<String, i64>>>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct BinningFile {
    column: Option<String>,
    labels: Option<Vec<String>>,
}

impl PipelineConfig {
    /// Defaults, then the TOML file at `path`.
    pub fn from_file(path: &Path) -> CoreResult<Self> {
        let mut config = Self::default();
        config.merge_file(path)?;
        Ok(config)
    }

    /// Overlays the TOML file at `path` onto this config.
    ///
    /// Mapping entries replace the entry for the same column; other columns
    /// keep their current mapping.
    pub fn merge_file(&mut self, path: &Path) -> CoreResult<()> {
        let content = fs::read_to_string(path).map_err(|e| {
            CoreError::Config(format!("Failed to read config file '{}': {}", path.display(), e))
        })?;
        self.merge_toml(&content)
    }

    /// Overlays TOML text onto this config.
    pub fn merge_toml(&mut self, content: &str) -> CoreResult<()> {
        let file: ConfigFile = toml::from_str(content)?;

        if let Some(input) = file.input {
            self.input = input;
        }
        if let Some(output) = file.output {
            self.output = output;
        }
        if let Some(numeric_column) = file.numeric_column {
            self.numeric_column = numeric_column;
        }
        if let Some(columns) = file.columns {
            self.columns = columns;
        }
        if let Some(target_column) = file.target_column {
            self.target_column = target_column;
        }
        if let Some(encoding) = file.encoding {
            self.encoding = encoding;
        }
        if let Some(na_values) = file.na_values {
            self.na_values = na_values;
        }
        if let Some(binning) = file.binning {
            if let Some(column) = binning.column {
                self.binning.column = column;
            }
            if let Some(labels) = binning.labels {
                self.binning.labels = labels;
            }
        }
        if let Some(mapping) = file.mapping {
            for (column, values) in mapping {
                self.mapping.insert_column(column, values);
            }
        }
        Ok(())
    }

    /// Applies `CHURNPREP_*` overrides from a key lookup such as
    /// `std::env::var`.
    ///
    /// An unparseable encoding is logged and ignored.
    pub fn apply_overrides_from<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        self.input = utils::get_path(&lookup, ENV_INPUT, self.input.clone());
        self.output = utils::get_path(&lookup, ENV_OUTPUT, self.output.clone());
        if let Some(raw) = lookup(ENV_ENCODING) {
            match raw.parse() {
                Ok(mode) => self.encoding = mode,
                Err(e) => warn!("Ignoring {}: {}", ENV_ENCODING, e),
            }
        }
    }

    /// Options for loading the input CSV.
    pub fn load_options(&self) -> LoadOptions {
        LoadOptions {
            na_values: self.na_values.clone(),
            ..LoadOptions::default()
        }
    }

    /// Checks that the settings describe a runnable pipeline.
    pub fn validate(&self) -> CoreResult<()> {
        if self.columns.is_empty() {
            return Err(CoreError::Config("No columns selected".to_string()));
        }
        for (idx, column) in self.columns.iter().enumerate() {
            if self.columns[..idx].contains(column) {
                return Err(CoreError::Config(format!(
                    "Column '{}' is selected more than once",
                    column
                )));
            }
        }
        if !self.columns.contains(&self.target_column) {
            return Err(CoreError::Config(format!(
                "Target column '{}' is not among the selected columns",
                self.target_column
            )));
        }
        if !self.columns.contains(&self.binning.column) {
            return Err(CoreError::Config(format!(
                "Binning column '{}' is not among the selected columns",
                self.binning.column
            )));
        }
        if self.binning.labels.is_empty() {
            return Err(CoreError::Config("At least one bin label is required".to_string()));
        }
        if self.numeric_column.trim().is_empty() {
            return Err(CoreError::Config("Numeric column name is empty".to_string()));
        }
        Ok(())
    }
}
