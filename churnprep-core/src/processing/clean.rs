//! Cleaning step: numeric coercion and removal of incomplete rows.

use log::debug;
use polars::prelude::*;
use serde::Serialize;

use crate::error::CoreResult;
use crate::frame::{column, complete_rows, is_numeric};

/// Counts gathered while cleaning.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CleanStats {
    pub rows_before: usize,
    /// Present cells that failed to parse and became null
    pub values_coerced: usize,
    pub rows_dropped: usize,
}

/// Parses a raw cell as a number after stripping surrounding whitespace.
fn parse_numeric(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|v| !v.is_nan())
}

/// Converts `name` to `Float64`. Unparseable cells become null.
///
/// Already-numeric columns are left untouched. Returns the number of present
/// cells that were turned into nulls.
pub fn coerce_numeric(df: &mut DataFrame, name: &str) -> CoreResult<usize> {
    let series = column(df, name)?;
    if is_numeric(series.dtype()) {
        return Ok(0);
    }

    let nulls_before = series.null_count();
    let text = series.cast(&DataType::String)?;
    let values: Vec<Option<f64>> = text
        .str()?
        .into_iter()
        .map(|cell| cell.and_then(parse_numeric))
        .collect();
    let coerced = Series::new(name.into(), values);
    let nulls_after = coerced.null_count();

    df.with_column(coerced)?;
    Ok(nulls_after - nulls_before)
}

/// Drops every row holding a null in any column. Returns the number dropped.
pub fn drop_incomplete_rows(df: &mut DataFrame) -> CoreResult<usize> {
    let before = df.height();
    *df = df.filter(&complete_rows(df))?;
    Ok(before - df.height())
}

/// Coerces `numeric_column` and drops incomplete rows.
pub fn clean_data(mut df: DataFrame, numeric_column: &str) -> CoreResult<(DataFrame, CleanStats)> {
    let rows_before = df.height();
    let values_coerced = coerce_numeric(&mut df, numeric_column)?;
    let rows_dropped = drop_incomplete_rows(&mut df)?;
    debug!(
        "Coerced {} value(s) in '{}' to null, dropped {} of {} row(s)",
        values_coerced, numeric_column, rows_dropped, rows_before
    );

    Ok((
        df,
        CleanStats {
            rows_before,
            values_coerced,
            rows_dropped,
        },
    ))
}
