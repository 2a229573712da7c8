//! CSV loading and saving.
//!
//! Loading reads a header row plus records into a polars [`DataFrame`],
//! mapping NA tokens to nulls and inferring a dtype per column from every row.
//! Saving writes the header and every row, without an index column.

use std::fs::{self, File};
use std::io::{Cursor, ErrorKind, Write};
use std::path::Path;

use log::debug;
use polars::prelude::*;

use crate::error::{CoreError, CoreResult};

/// Raw cell values read as null.
///
/// A cell holding only whitespace is not in this list and loads as text.
pub const DEFAULT_NA_VALUES: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

/// Options controlling how a CSV file is parsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOptions {
    pub na_values: Vec<String>,
    pub delimiter: u8,
}

impl Default for LoadOptions {
    fn default() -> Self {
        Self {
            na_values: DEFAULT_NA_VALUES.iter().map(|s| s.to_string()).collect(),
            delimiter: b',',
        }
    }
}

/// Loads a CSV file into a data frame.
pub fn load_csv(path: &Path, options: &LoadOptions) -> CoreResult<DataFrame> {
    let bytes = fs::read(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => CoreError::InputNotFound(path.to_path_buf()),
        _ => CoreError::Io(e),
    })?;
    let df = read_csv(bytes, options)?;
    debug!(
        "Loaded {} row(s) x {} column(s) from {}",
        df.height(),
        df.width(),
        path.display()
    );
    Ok(df)
}

/// Parses in-memory CSV data into a data frame.
pub fn read_csv(data: impl Into<Vec<u8>>, options: &LoadOptions) -> CoreResult<DataFrame> {
    let null_values = NullValues::AllColumns(
        options.na_values.iter().map(|v| v.as_str().into()).collect(),
    );
    let parse_opts = CsvParseOptions::default()
        .with_separator(options.delimiter)
        .with_null_values(Some(null_values));

    let df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .with_parse_options(parse_opts)
        .into_reader_with_file_handle(Cursor::new(data.into()))
        .finish()?;
    Ok(df)
}

/// Saves a data frame as CSV, creating the parent directory if needed.
pub fn save_csv(df: &mut DataFrame, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let mut file = File::create(path)?;
    write_csv(df, &mut file)?;
    debug!("Wrote {} row(s) to {}", df.height(), path.display());
    Ok(())
}

/// Writes a data frame as CSV to any writer.
pub fn write_csv<W: Write>(df: &mut DataFrame, writer: W) -> CoreResult<()> {
    CsvWriter::new(writer).include_header(true).finish(df)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::{column, dtype_name};
    use tempfile::tempdir;

    const SAMPLE: &str = "customerID,SeniorCitizen,MonthlyCharges,TotalCharges,Churn\n\
                          7590-VHVEG,0,29.85,29.85,No\n\
                          5575-GNVDE,1,56.95, ,Yes\n\
                          3668-QPYBK,0,53.85,,No\n";

    #[test]
    fn test_read_csv_infers_types() {
        let df = read_csv(SAMPLE, &LoadOptions::default()).unwrap();
        assert_eq!(df.height(), 3);
        assert_eq!(df.width(), 5);
        let dtype = |name: &str| dtype_name(column(&df, name).unwrap().dtype());
        assert_eq!(dtype("customerID"), "text");
        assert_eq!(dtype("SeniorCitizen"), "int64");
        assert_eq!(dtype("MonthlyCharges"), "float64");
        // " " is not an NA token, so the column stays text
        assert_eq!(dtype("TotalCharges"), "text");
        let total: Vec<Option<&str>> = column(&df, "TotalCharges")
            .unwrap()
            .str()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(total, vec![Some("29.85"), Some(" "), None]);
    }

    #[test]
    fn test_read_csv_pandas_na_tokens() {
        let csv = "Churn\n#N/A N/A\n#NA\n-1.#IND\n-1.#QNAN\n1.#IND\n1.#QNAN\nNULL\nNo\n";
        let df = read_csv(csv, &LoadOptions::default()).unwrap();
        let churn = column(&df, "Churn").unwrap();
        assert_eq!(churn.len(), 8);
        assert_eq!(churn.null_count(), 7);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope.csv");
        let err = load_csv(&missing, &LoadOptions::default()).unwrap_err();
        assert!(matches!(err, CoreError::InputNotFound(p) if p == missing));
    }

    #[test]
    fn test_save_creates_parent_dir() {
        let dir = tempdir().unwrap();
        let out = dir.path().join("nested").join("out.csv");
        let mut df = read_csv("a,b\n1,x\n2,\n", &LoadOptions::default()).unwrap();

        save_csv(&mut df, &out).unwrap();

        let written = fs::read_to_string(&out).unwrap();
        assert_eq!(written, "a,b\n1,x\n2,\n");
    }
}
