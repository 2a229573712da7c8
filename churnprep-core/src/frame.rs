//! Small helpers over polars data frames shared by the pipeline steps.

use polars::prelude::*;

use crate::error::{CoreError, CoreResult};

/// Looks up a column by name as a series.
pub fn column<'a>(df: &'a DataFrame, name: &str) -> CoreResult<&'a Series> {
    df.column(name)
        .map(|c| c.as_materialized_series())
        .map_err(|_| CoreError::ColumnNotFound(name.to_string()))
}

/// Integer and float dtypes count as numeric; everything else is encoded.
pub fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}

/// Short dtype name used in profiles: `int64`, `float64` or `text`.
pub fn dtype_name(dtype: &DataType) -> &'static str {
    match dtype {
        DataType::Float32 | DataType::Float64 => "float64",
        d if is_numeric(d) => "int64",
        _ => "text",
    }
}

/// Moves `name` to the last position, keeping the order of the others.
pub fn move_to_end(df: &mut DataFrame, name: &str) -> CoreResult<()> {
    let moved = df
        .drop_in_place(name)
        .map_err(|_| CoreError::ColumnNotFound(name.to_string()))?;
    df.with_column(moved)?;
    Ok(())
}

/// Mask that is `true` for rows with no null in any column.
pub fn complete_rows(df: &DataFrame) -> BooleanChunked {
    df.get_columns().iter().fold(
        BooleanChunked::full("complete".into(), true, df.height()),
        |mask, c| &mask & &c.as_materialized_series().is_not_null(),
    )
}
