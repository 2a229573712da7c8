//! Per-column profile of a raw dataset.

use polars::prelude::*;
use serde::Serialize;

use crate::error::CoreResult;
use crate::frame::{dtype_name, is_numeric};

/// What one column looks like before preprocessing.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ColumnProfile {
    pub name: String,
    pub dtype: &'static str,
    pub null_count: usize,
    pub distinct_count: usize,
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// Profiles every column of `df`, in column order.
pub fn inspect_table(df: &DataFrame) -> CoreResult<Vec<ColumnProfile>> {
    df.get_columns()
        .iter()
        .map(|column| -> CoreResult<ColumnProfile> {
            let series = column.as_materialized_series();
            let (min, max) = if is_numeric(series.dtype()) {
                let values = series.cast(&DataType::Float64)?;
                let values = values.f64()?;
                (values.min(), values.max())
            } else {
                (None, None)
            };

            Ok(ColumnProfile {
                name: series.name().to_string(),
                dtype: dtype_name(series.dtype()),
                null_count: series.null_count(),
                distinct_count: series.drop_nulls().n_unique()?,
                min,
                max,
            })
        })
        .collect()
}
