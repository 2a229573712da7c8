//! Pipeline driver: load → clean → select → bin → encode → save.

use std::time::Instant;

use log::{debug, info};
use polars::prelude::DataFrame;
use serde::Serialize;

use super::binning::{BinEdges, feature_engineering};
use super::clean::{CleanStats, clean_data};
use super::encoding::{
    CategoricalEncoder, EncodingMode, EncodingReport, LabelEncoder, MappingEncoder, encode_data,
};
use super::select::select_features;
use crate::config::PipelineConfig;
use crate::error::CoreResult;
use crate::io::{load_csv, save_csv};
use crate::reporting::RunSummary;

/// What the in-memory steps did to the data.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PreprocessReport {
    pub clean: CleanStats,
    pub bin_edges: BinEdges,
    pub encodings: EncodingReport,
}

/// Runs the clean, select, bin and encode steps on an already loaded frame.
pub fn preprocess(
    df: DataFrame,
    config: &PipelineConfig,
) -> CoreResult<(DataFrame, PreprocessReport)> {
    config.validate()?;

    info!("Cleaning data...");
    let (df, clean) = clean_data(df, &config.numeric_column)?;

    info!("Selecting features...");
    let df = select_features(&df, config.columns.as_slice())?;

    info!(
        "Binning '{}' into {} categories...",
        config.binning.column,
        config.binning.n_bins()
    );
    let (df, bin_edges) = feature_engineering(df, &config.binning, &config.target_column)?;

    info!("Encoding categorical columns ({})...", config.encoding);
    let encoder: Box<dyn CategoricalEncoder + '_> = match config.encoding {
        EncodingMode::Label => Box::new(
            LabelEncoder::default().with_category_order(&bin_edges.column, &bin_edges.labels),
        ),
        EncodingMode::Mapping => Box::new(MappingEncoder::new(&config.mapping)),
    };
    let (df, encodings) = encode_data(df, encoder.as_ref())?;

    debug!("Preprocessed {} row(s) x {} column(s)", df.height(), df.width());
    Ok((
        df,
        PreprocessReport {
            clean,
            bin_edges,
            encodings,
        },
    ))
}

/// Loads `config.input`, preprocesses it and writes `config.output`.
pub fn run_pipeline(config: &PipelineConfig) -> CoreResult<RunSummary> {
    let start = Instant::now();

    info!("Loading data from: {}", config.input.display());
    let df = load_csv(&config.input, &config.load_options())?;

    let (mut df, report) = preprocess(df, config)?;

    info!("Saving preprocessed data to: {}", config.output.display());
    save_csv(&mut df, &config.output)?;
    info!("Preprocessing finished");

    Ok(RunSummary {
        input: config.input.clone(),
        output: config.output.clone(),
        encoding: config.encoding,
        rows_loaded: report.clean.rows_before,
        rows_dropped: report.clean.rows_dropped,
        values_coerced: report.clean.values_coerced,
        rows_written: df.height(),
        columns: df.get_column_names().iter().map(|n| n.to_string()).collect(),
        bin_edges: report.bin_edges,
        encodings: report.encodings,
        elapsed: start.elapsed(),
    })
}
