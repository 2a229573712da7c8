// ============================================================================
// churnprep-core/src/processing/binning.rs
// ============================================================================
//
// BINNING: Equal-Width Discretization of a Numeric Column
//
// The observed range [min, max] is split into `n` equal-width, right-closed
// intervals (edges[i], edges[i + 1]]. The first edge is lowered by 0.1% of the
// range so that `min` itself falls inside the first interval. When every value
// is identical the range is widened by 0.1% of the value on both sides.
//
// The binned column replaces the numeric column in place as a text column of
// labels. Every present value must be finite; a value the fitted edges cannot
// place is an error rather than a silent null.

use log::debug;
use polars::prelude::*;
use serde::Serialize;

use crate::config::BinningConfig;
use crate::error::{CoreError, CoreResult};
use crate::frame::{column, is_numeric, move_to_end};

/// Fraction of the range used to widen the outer edges.
const RANGE_ADJUSTMENT: f64 = 0.001;

/// Fitted bin edges for one column.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BinEdges {
    pub column: String,
    /// `labels.len() + 1` ascending edges
    pub edges: Vec<f64>,
    pub labels: Vec<String>,
}

impl BinEdges {
    /// Index of the right-closed interval containing `value`, if any.
    pub fn bin_index(&self, value: f64) -> Option<usize> {
        let idx = self.edges.partition_point(|edge| *edge < value);
        if idx == 0 || idx >= self.edges.len() {
            None
        } else {
            Some(idx - 1)
        }
    }
}

/// Computes `n_bins + 1` equal-width edges covering `[min, max]`.
pub fn uniform_edges(min: f64, max: f64, n_bins: usize) -> Vec<f64> {
    let (lo, hi) = if min == max {
        let adjustment = if min != 0.0 {
            RANGE_ADJUSTMENT * min.abs()
        } else {
            RANGE_ADJUSTMENT
        };
        (min - adjustment, max + adjustment)
    } else {
        (min, max)
    };

    let step = (hi - lo) / n_bins as f64;
    let mut edges: Vec<f64> = (0..=n_bins).map(|i| lo + i as f64 * step).collect();
    edges[n_bins] = hi;

    if min != max {
        edges[0] -= (hi - lo) * RANGE_ADJUSTMENT;
    }
    edges
}

/// Equal-width binner with one label per bin.
#[derive(Debug, Clone)]
pub struct Binner {
    labels: Vec<String>,
    fitted: Option<BinEdges>,
}

impl Binner {
    /// Creates a binner with `labels.len()` bins.
    pub fn uniform(labels: Vec<String>) -> CoreResult<Self> {
        if labels.is_empty() {
            return Err(CoreError::InvalidBinning(
                "at least one bin label is required".to_string(),
            ));
        }
        Ok(Self {
            labels,
            fitted: None,
        })
    }

    pub fn n_bins(&self) -> usize {
        self.labels.len()
    }

    /// Computes edges from the observed range of `name`.
    pub fn fit(&mut self, df: &DataFrame, name: &str) -> CoreResult<&BinEdges> {
        let values = numeric_values(df, name)?;

        let mut range: Option<(f64, f64)> = None;
        for v in values.into_iter().flatten() {
            if !v.is_finite() {
                return Err(CoreError::InvalidBinning(format!(
                    "column '{}' holds non-finite value {}",
                    name, v
                )));
            }
            range = Some(match range {
                None => (v, v),
                Some((lo, hi)) => (lo.min(v), hi.max(v)),
            });
        }
        let (min, max) = range.ok_or_else(|| CoreError::EmptyColumn(name.to_string()))?;

        let edges = uniform_edges(min, max, self.n_bins());
        debug!("Bin edges for '{}': {:?}", name, edges);

        Ok(self.fitted.insert(BinEdges {
            column: name.to_string(),
            edges,
            labels: self.labels.clone(),
        }))
    }

    /// Replaces the fitted column with its labels. Nulls stay null; a present
    /// value outside the fitted edges is an error.
    pub fn transform(&self, df: &mut DataFrame) -> CoreResult<()> {
        let fitted = self
            .fitted
            .as_ref()
            .ok_or_else(|| CoreError::InvalidBinning("binner has not been fitted".to_string()))?;

        let labels = numeric_values(df, &fitted.column)?
            .into_iter()
            .map(|cell| match cell {
                None => Ok(None),
                Some(v) => fitted
                    .bin_index(v)
                    .map(|idx| Some(fitted.labels[idx].as_str()))
                    .ok_or_else(|| {
                        CoreError::InvalidBinning(format!(
                            "value {} in '{}' is outside the fitted edges",
                            v, fitted.column
                        ))
                    }),
            })
            .collect::<CoreResult<Vec<Option<&str>>>>()?;

        df.with_column(Series::new(fitted.column.as_str().into(), labels))?;
        Ok(())
    }

    pub fn fit_transform(&mut self, df: &mut DataFrame, name: &str) -> CoreResult<BinEdges> {
        let edges = self.fit(df, name)?.clone();
        self.transform(df)?;
        Ok(edges)
    }
}

/// The values of a numeric column as `f64`.
fn numeric_values(df: &DataFrame, name: &str) -> CoreResult<Float64Chunked> {
    let series = column(df, name)?;
    if !is_numeric(series.dtype()) {
        return Err(CoreError::NotNumeric(name.to_string()));
    }
    Ok(series.cast(&DataType::Float64)?.f64()?.clone())
}

/// Bins the configured column, then moves `target_column` to the end.
pub fn feature_engineering(
    mut df: DataFrame,
    binning: &BinningConfig,
    target_column: &str,
) -> CoreResult<(DataFrame, BinEdges)> {
    let mut binner = Binner::uniform(binning.labels.clone())?;
    let edges = binner.fit_transform(&mut df, &binning.column)?;
    move_to_end(&mut df, target_column)?;
    Ok((df, edges))
}
