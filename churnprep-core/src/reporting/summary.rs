//! Summary of a preprocessing run.

use std::fs::{self, File};
use std::io::BufWriter;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Serialize, Serializer};

use crate::error::CoreResult;
use crate::processing::binning::BinEdges;
use crate::processing::encoding::{EncodingMode, EncodingReport};

/// Summary of one `run_pipeline` call.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunSummary {
    pub input: PathBuf,
    pub output: PathBuf,
    pub encoding: EncodingMode,

    /// Rows read from the input file
    pub rows_loaded: usize,

    /// Rows removed because they held a null
    pub rows_dropped: usize,

    /// Cells of the numeric column that failed to parse
    pub values_coerced: usize,

    pub rows_written: usize,

    /// Output columns, in order
    pub columns: Vec<String>,

    pub bin_edges: BinEdges,
    pub encodings: EncodingReport,

    #[serde(rename = "elapsed_seconds", serialize_with = "serialize_secs")]
    pub elapsed: Duration,
}

fn serialize_secs<S: Serializer>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_f64(duration.as_secs_f64())
}

impl RunSummary {
    /// Share of loaded rows that were dropped, in percent.
    pub fn drop_percent(&self) -> f64 {
        if self.rows_loaded == 0 {
            0.0
        } else {
            self.rows_dropped as f64 / self.rows_loaded as f64 * 100.0
        }
    }
}

/// Writes any serializable value as pretty JSON, creating parent directories.
pub fn write_json<T: Serialize>(value: &T, path: &Path) -> CoreResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(writer, value)?;
    Ok(())
}
