//! Feature selection step.

use log::debug;
use polars::prelude::*;

use crate::error::CoreResult;
use crate::frame::column;

/// Projects the data frame onto `columns`, in that order.
///
/// Every requested column must exist; the result holds exactly these columns.
pub fn select_features<S: AsRef<str>>(df: &DataFrame, columns: &[S]) -> CoreResult<DataFrame> {
    for name in columns {
        column(df, name.as_ref())?;
    }
    let selected = df.select(columns.iter().map(|c| c.as_ref()))?;
    debug!(
        "Selected {} of {} column(s): {}",
        selected.width(),
        df.width(),
        columns.iter().map(|c| c.as_ref()).collect::<Vec<_>>().join(", ")
    );
    Ok(selected)
}
