//! End-to-end tests for the preprocessing pipeline
//!
//! These tests run the full load → clean → select → bin → encode → save
//! sequence on a small Telco-style fixture and check the written CSV.

use churnprep_core::config::{DEFAULT_SELECTED_COLUMNS, PipelineConfigBuilder};
use churnprep_core::io::read_csv;
use churnprep_core::{
    CoreError, EncodingMode, LoadOptions, MappingTable, PipelineConfig, load_csv, preprocess,
    run_pipeline,
};
use polars::prelude::*;
use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

fn fixture() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/telco_sample.csv")
}

fn config_for(output: &Path, encoding: EncodingMode) -> PipelineConfig {
    PipelineConfigBuilder::new()
        .input(fixture())
        .output(output.to_path_buf())
        .encoding(encoding)
        .build()
}

const HEADER: &str =
    "InternetService,OnlineSecurity,TechSupport,Contract,PaymentMethod,SeniorCitizen,MonthlyCharges,Churn";

#[test]
fn test_label_encoding_end_to_end() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("preprocessing").join("out.csv");

    let summary = run_pipeline(&config_for(&output, EncodingMode::Label))?;

    assert_eq!(summary.rows_loaded, 10);
    assert_eq!(summary.rows_dropped, 2);
    assert_eq!(summary.values_coerced, 2);
    assert_eq!(summary.rows_written, 8);
    assert_eq!(summary.columns, DEFAULT_SELECTED_COLUMNS.to_vec());

    let expected = [
        HEADER,
        "0,0,0,0,2,0,0,0",
        "0,2,0,1,3,0,1,0",
        "0,2,0,0,3,0,1,1",
        "0,2,2,1,0,0,0,0",
        "1,0,0,0,2,0,1,1",
        "1,0,0,0,2,1,2,1",
        "1,0,2,0,1,0,2,1",
        "2,1,1,1,1,0,0,0",
    ]
    .join("\n")
        + "\n";
    assert_eq!(fs::read_to_string(&output)?, expected);

    let contract = summary.encodings.get("Contract").unwrap();
    assert_eq!(contract.len(), 2, "'Two year' rows were all dropped");
    Ok(())
}

#[test]
fn test_mapping_encoding_end_to_end() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let output = dir.path().join("out.csv");

    run_pipeline(&config_for(&output, EncodingMode::Mapping))?;

    let expected = [
        HEADER,
        "1,0,0,0,0,0,0,0",
        "1,1,0,1,1,0,1,0",
        "1,1,0,0,1,0,1,1",
        "1,1,1,1,2,0,0,0",
        "2,0,0,0,0,0,1,1",
        "2,0,0,0,0,1,2,1",
        "2,0,1,0,3,0,2,1",
        "0,2,2,1,3,0,0,0",
    ]
    .join("\n")
        + "\n";
    assert_eq!(fs::read_to_string(&output)?, expected);
    Ok(())
}

#[test]
fn test_bin_edges_divide_observed_range() -> Result<(), Box<dyn Error>> {
    let config = PipelineConfig::default();
    let table = load_csv(&fixture(), &LoadOptions::default())?;
    let (_, report) = preprocess(table, &config)?;

    let edges = &report.bin_edges.edges;
    assert_eq!(edges.len(), 4);
    let width = (104.80 - 20.15) / 3.0;
    assert!((edges[1] - (20.15 + width)).abs() < 1e-9);
    assert!((edges[2] - (20.15 + 2.0 * width)).abs() < 1e-9);
    assert_eq!(edges[3], 104.80);
    assert!(edges[0] < 20.15);
    Ok(())
}

#[test]
fn test_encoded_values_within_mapping_codomain() -> Result<(), Box<dyn Error>> {
    let config = PipelineConfigBuilder::new().encoding(EncodingMode::Mapping).build();
    let mapping = MappingTable::telco_default();
    let table = load_csv(&fixture(), &LoadOptions::default())?;
    let (encoded, report) = preprocess(table, &config)?;

    for column in encoded.get_columns() {
        let name = column.name().as_str();
        let values = column.as_materialized_series().i64()?;
        if let Some(codomain) = mapping.codomain(name) {
            assert!(report.encodings.get(name).is_some());
            for value in values.into_iter().flatten() {
                assert!(codomain.contains(&value), "{} -> {}", name, value);
            }
        }
    }
    Ok(())
}

#[test]
fn test_mapping_is_stable_across_inputs_but_labels_are_not() -> Result<(), Box<dyn Error>> {
    let full = load_csv(&fixture(), &LoadOptions::default())?;
    // keep only rows without DSL service
    let subset_csv: String = fs::read_to_string(fixture())?
        .lines()
        .filter(|line| !line.contains(",DSL,"))
        .map(|line| format!("{line}\n"))
        .collect();
    let subset = read_csv(subset_csv, &LoadOptions::default())?;

    let mapping_config = PipelineConfigBuilder::new().encoding(EncodingMode::Mapping).build();
    let (_, full_map) = preprocess(full.clone(), &mapping_config)?;
    let (_, subset_map) = preprocess(subset.clone(), &mapping_config)?;
    assert_eq!(
        full_map.encodings.get("InternetService").unwrap().get("Fiber optic"),
        subset_map.encodings.get("InternetService").unwrap().get("Fiber optic"),
    );

    let label_config = PipelineConfig::default();
    let (_, full_labels) = preprocess(full, &label_config)?;
    let (_, subset_labels) = preprocess(subset, &label_config)?;
    assert_ne!(
        full_labels.encodings.get("InternetService").unwrap().get("Fiber optic"),
        subset_labels.encodings.get("InternetService").unwrap().get("Fiber optic"),
    );
    Ok(())
}

#[test]
fn test_missing_input_reports_not_found() {
    let dir = tempdir().unwrap();
    let config = PipelineConfigBuilder::new()
        .input(dir.path().join("Telco-Customer-Churn.csv"))
        .output(dir.path().join("out.csv"))
        .build();

    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, CoreError::InputNotFound(_)));
    assert!(!dir.path().join("out.csv").exists());
}

#[test]
fn test_missing_selected_column_fails() -> Result<(), Box<dyn Error>> {
    let dir = tempdir()?;
    let input = dir.path().join("in.csv");
    fs::write(&input, "Contract,MonthlyCharges,TotalCharges,Churn\nOne year,20.0,20.0,No\n")?;

    let config = PipelineConfigBuilder::new()
        .input(input)
        .output(dir.path().join("out.csv"))
        .build();
    let err = run_pipeline(&config).unwrap_err();
    assert!(matches!(err, CoreError::ColumnNotFound(c) if c == "InternetService"));
    Ok(())
}

/// Builds the selected columns plus TotalCharges, with MonthlyCharges set to `charges`.
fn frame_with_charges(charges: &[f64]) -> DataFrame {
    let n = charges.len();
    let churn: Vec<&str> = (0..n).map(|i| if i % 2 == 0 { "No" } else { "Yes" }).collect();
    df!(
        "InternetService" => vec!["DSL"; n],
        "OnlineSecurity" => vec!["No"; n],
        "TechSupport" => vec!["Yes"; n],
        "Contract" => vec!["One year"; n],
        "PaymentMethod" => vec!["Mailed check"; n],
        "SeniorCitizen" => vec![0i64; n],
        "MonthlyCharges" => charges,
        "Churn" => churn,
        "TotalCharges" => charges,
    )
    .unwrap()
}

fn codes(df: &DataFrame, name: &str) -> Vec<Option<i64>> {
    df.column(name)
        .unwrap()
        .as_materialized_series()
        .i64()
        .unwrap()
        .into_iter()
        .collect()
}

#[test]
fn test_non_finite_charges_fail_binning() {
    for bad in [f64::INFINITY, f64::NEG_INFINITY, f64::NAN] {
        let df = frame_with_charges(&[20.0, 50.0, bad]);
        let err = preprocess(df, &PipelineConfig::default()).unwrap_err();
        assert!(
            matches!(err, CoreError::InvalidBinning(ref msg) if msg.contains("MonthlyCharges")),
            "{bad}: {err}"
        );
    }
}

#[test]
fn test_nan_token_charges_are_dropped_before_binning() -> Result<(), Box<dyn Error>> {
    // "NaN" is an NA token, so the row goes in the cleaning step
    let csv = format!(
        "{HEADER},TotalCharges\n\
         DSL,No,Yes,One year,Mailed check,0,20.0,No,20.0\n\
         DSL,No,Yes,One year,Mailed check,0,NaN,Yes,30.0\n\
         DSL,No,Yes,One year,Mailed check,0,50.0,No,50.0\n"
    );
    let df = read_csv(csv, &LoadOptions::default())?;
    let (encoded, report) = preprocess(df, &PipelineConfig::default())?;
    assert_eq!(report.clean.rows_dropped, 1);
    assert_eq!(encoded.height(), 2);
    assert_eq!(codes(&encoded, "MonthlyCharges"), vec![Some(0), Some(1)]);
    Ok(())
}

#[test]
fn test_constant_charges_fall_in_middle_bin() -> Result<(), Box<dyn Error>> {
    let df = frame_with_charges(&[50.0, 50.0, 50.0]);
    let (encoded, report) = preprocess(df, &PipelineConfig::default())?;

    let edges = &report.bin_edges.edges;
    assert!((edges[0] - 49.95).abs() < 1e-9);
    assert!((edges[3] - 50.05).abs() < 1e-9);
    assert_eq!(
        report.encodings.get("MonthlyCharges").unwrap().keys().collect::<Vec<_>>(),
        vec!["Medium"]
    );
    assert_eq!(codes(&encoded, "MonthlyCharges"), vec![Some(0), Some(0), Some(0)]);

    let mapping = PipelineConfigBuilder::new().encoding(EncodingMode::Mapping).build();
    let (encoded, _) = preprocess(frame_with_charges(&[50.0, 50.0]), &mapping)?;
    assert_eq!(codes(&encoded, "MonthlyCharges"), vec![Some(1), Some(1)]);
    Ok(())
}

#[test]
fn test_label_codes_follow_bin_order_not_label_text() -> Result<(), Box<dyn Error>> {
    let config = PipelineConfigBuilder::new()
        .bin_labels(["Cheap", "Average", "Premium"])
        .build();
    let df = frame_with_charges(&[90.0, 20.0, 55.0]);
    let (encoded, report) = preprocess(df, &config)?;

    let table = report.encodings.get("MonthlyCharges").unwrap();
    assert_eq!(table.get("Cheap"), Some(&0));
    assert_eq!(table.get("Average"), Some(&1));
    assert_eq!(table.get("Premium"), Some(&2));
    assert_eq!(codes(&encoded, "MonthlyCharges"), vec![Some(2), Some(0), Some(1)]);
    Ok(())
}
