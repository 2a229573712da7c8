// ============================================================================
// churnprep-core/src/processing/encoding.rs
// ============================================================================
//
// ENCODING: Categorical Columns to Integers
//
// Two encoders share the `CategoricalEncoder` trait:
//
// - LabelEncoder: codes follow the sorted order of the values observed in the
//   column. A column with a known category order (the binned column) uses
//   that order instead, restricted to the categories that occur. Codes
//   therefore depend on the input: a value can get a different code when
//   other values are absent.
// - MappingEncoder: codes come from a fixed, hand-written MappingTable. The
//   same value always gets the same code. A value missing from the table is
//   an error.
//
// Numeric columns are never touched. Other non-text columns are encoded by
// their text form.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

use polars::prelude::*;

use crate::error::{CoreError, CoreResult};
use crate::frame::{column, is_numeric};

/// Value-to-code table for one column.
pub type ValueCodes = BTreeMap<String, i64>;

/// Which encoder the pipeline uses.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EncodingMode {
    /// Codes learned from the sorted observed values
    #[default]
    Label,
    /// Codes taken from a fixed mapping table
    Mapping,
}

impl fmt::Display for EncodingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EncodingMode::Label => write!(f, "label"),
            EncodingMode::Mapping => write!(f, "mapping"),
        }
    }
}

impl FromStr for EncodingMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "label" => Ok(EncodingMode::Label),
            "mapping" => Ok(EncodingMode::Mapping),
            other => Err(CoreError::Config(format!(
                "unknown encoding '{}' (expected 'label' or 'mapping')",
                other
            ))),
        }
    }
}

/// Hand-written value-to-integer table, keyed by column name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MappingTable(BTreeMap<String, ValueCodes>);

impl MappingTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Built-in table for the Telco customer-churn columns.
    ///
    /// The `MonthlyCharges` entry matches the default bin labels.
    pub fn telco_default() -> Self {
        Self::new()
            .with_column("InternetService", &[("No", 0), ("DSL", 1), ("Fiber optic", 2)])
            .with_column(
                "OnlineSecurity",
                &[("No", 0), ("Yes", 1), ("No internet service", 2)],
            )
            .with_column(
                "TechSupport",
                &[("No", 0), ("Yes", 1), ("No internet service", 2)],
            )
            .with_column(
                "Contract",
                &[("Month-to-month", 0), ("One year", 1), ("Two year", 2)],
            )
            .with_column(
                "PaymentMethod",
                &[
                    ("Electronic check", 0),
                    ("Mailed check", 1),
                    ("Bank transfer (automatic)", 2),
                    ("Credit card (automatic)", 3),
                ],
            )
            .with_column("MonthlyCharges", &[("Low", 0), ("Medium", 1), ("High", 2)])
            .with_column("Churn", &[("No", 0), ("Yes", 1)])
    }

    pub fn with_column(mut self, column: &str, pairs: &[(&str, i64)]) -> Self {
        self.insert_column(
            column.to_string(),
            pairs.iter().map(|(v, c)| (v.to_string(), *c)).collect(),
        );
        self
    }

    /// Sets the table for `column`, replacing any previous entry.
    pub fn insert_column(&mut self, column: String, codes: ValueCodes) {
        self.0.insert(column, codes);
    }

    pub fn get(&self, column: &str) -> Option<&ValueCodes> {
        self.0.get(column)
    }

    /// Every code `column` can encode to.
    pub fn codomain(&self, column: &str) -> Option<BTreeSet<i64>> {
        self.get(column).map(|codes| codes.values().copied().collect())
    }
}

/// The value-to-code tables actually applied, per encoded column.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct EncodingReport(BTreeMap<String, ValueCodes>);

impl EncodingReport {
    pub fn get(&self, column: &str) -> Option<&ValueCodes> {
        self.0.get(column)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ValueCodes)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v))
    }
}

/// Encodes one non-numeric column as integer codes.
pub trait CategoricalEncoder {
    /// Returns the integer codes and the value-to-code table used.
    fn encode_column(&self, series: &Series) -> CoreResult<(Vec<Option<i64>>, ValueCodes)>;

    fn mode(&self) -> EncodingMode;
}

/// The values of `series` as text.
fn text_values(series: &Series) -> CoreResult<StringChunked> {
    Ok(series.cast(&DataType::String)?.str()?.clone())
}

/// Codes by sorted order of the observed values, or by a known category order.
#[derive(Debug, Clone, Default)]
pub struct LabelEncoder {
    category_order: BTreeMap<String, Vec<String>>,
}

impl LabelEncoder {
    /// Orders the values of `column` by `order` instead of sorting them.
    ///
    /// Values missing from `order` sort after it.
    pub fn with_category_order(mut self, column: &str, order: &[String]) -> Self {
        self.category_order.insert(column.to_string(), order.to_vec());
        self
    }
}

impl CategoricalEncoder for LabelEncoder {
    fn encode_column(&self, series: &Series) -> CoreResult<(Vec<Option<i64>>, ValueCodes)> {
        let values = text_values(series)?;

        let mut classes: Vec<&str> = values
            .into_iter()
            .flatten()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect();
        if let Some(order) = self.category_order.get(series.name().as_str()) {
            classes.sort_by_key(|v| order.iter().position(|o| o == v).unwrap_or(order.len()));
        }

        let table: ValueCodes = classes
            .into_iter()
            .enumerate()
            .map(|(code, value)| (value.to_string(), code as i64))
            .collect();
        let codes = values
            .into_iter()
            .map(|cell| cell.and_then(|v| table.get(v).copied()))
            .collect();
        Ok((codes, table))
    }

    fn mode(&self) -> EncodingMode {
        EncodingMode::Label
    }
}

/// Codes from a fixed [`MappingTable`].
#[derive(Debug, Clone, Copy)]
pub struct MappingEncoder<'a> {
    table: &'a MappingTable,
}

impl<'a> MappingEncoder<'a> {
    pub fn new(table: &'a MappingTable) -> Self {
        Self { table }
    }

    fn lookup(&self, column: &str, mapping: &ValueCodes, value: &str) -> CoreResult<i64> {
        mapping
            .get(value)
            .copied()
            .ok_or_else(|| CoreError::UnmappedValue {
                column: column.to_string(),
                value: value.to_string(),
            })
    }
}

impl CategoricalEncoder for MappingEncoder<'_> {
    fn encode_column(&self, series: &Series) -> CoreResult<(Vec<Option<i64>>, ValueCodes)> {
        let name = series.name().as_str();
        let mapping = self
            .table
            .get(name)
            .ok_or_else(|| CoreError::MissingMapping(name.to_string()))?;

        let values = text_values(series)?;
        let mut applied = ValueCodes::new();
        let mut codes = Vec::with_capacity(values.len());
        for value in values.into_iter() {
            match value {
                Some(v) => {
                    let code = self.lookup(name, mapping, v)?;
                    applied.insert(v.to_string(), code);
                    codes.push(Some(code));
                }
                None => codes.push(None),
            }
        }
        Ok((codes, applied))
    }

    fn mode(&self) -> EncodingMode {
        EncodingMode::Mapping
    }
}

/// Replaces every non-numeric column with `Int64` codes.
pub fn encode_data(
    mut df: DataFrame,
    encoder: &dyn CategoricalEncoder,
) -> CoreResult<(DataFrame, EncodingReport)> {
    let categorical: Vec<String> = df
        .get_columns()
        .iter()
        .filter(|c| !is_numeric(c.dtype()))
        .map(|c| c.name().to_string())
        .collect();

    let mut report = EncodingReport::default();
    for name in categorical {
        let (codes, applied) = encoder.encode_column(column(&df, &name)?)?;
        debug!(
            "Encoded '{}' ({}) with {} distinct value(s)",
            name,
            encoder.mode(),
            applied.len()
        );
        df.with_column(Series::new(name.as_str().into(), codes))?;
        report.0.insert(name, applied);
    }
    Ok((df, report))
}
