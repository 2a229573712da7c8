//! Tests for loading the pipeline configuration from TOML files
//!
//! These tests verify:
//! - Values from a config file overlay the built-in defaults
//! - Absent keys keep their default values
//! - Unknown keys and malformed files are rejected
//! - A config file drives a full pipeline run

use churnprep_core::config::{DEFAULT_OUTPUT_PATH, PipelineConfig};
use churnprep_core::{CoreError, EncodingMode, run_pipeline};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::tempdir;

#[test]
fn test_config_file_parsing() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("churnprep.toml");

    let config_content = r#"
input = "data/raw.csv"
encoding = "mapping"
na_values = ["", "?"]

[binning]
column = "MonthlyCharges"
labels = ["Cheap", "Mid", "Pricey", "Premium"]

[mapping.Contract]
"Month-to-month" = 1
"One year" = 12
"Two year" = 24
"#;
    fs::write(&config_path, config_content)?;

    let config = PipelineConfig::from_file(&config_path)?;

    assert_eq!(config.input, PathBuf::from("data/raw.csv"));
    assert_eq!(config.output, PathBuf::from(DEFAULT_OUTPUT_PATH));
    assert_eq!(config.encoding, EncodingMode::Mapping);
    assert_eq!(config.na_values, vec!["".to_string(), "?".to_string()]);
    assert_eq!(config.binning.n_bins(), 4);

    let contract = config.mapping.get("Contract").unwrap();
    assert_eq!(contract.get("Two year"), Some(&24));
    assert_eq!(config.mapping.get("Churn").unwrap().get("Yes"), Some(&1));

    config.validate()?;
    Ok(())
}

#[test]
fn test_config_file_missing() {
    let err = PipelineConfig::from_file(Path::new("/nonexistent/churnprep.toml")).unwrap_err();
    assert!(matches!(err, CoreError::Config(_)));
}

#[test]
fn test_config_file_malformed() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let config_path = dir.path().join("bad.toml");
    fs::write(&config_path, "encoding = \"onehot\"\n")?;

    let err = PipelineConfig::from_file(&config_path).unwrap_err();
    assert!(matches!(err, CoreError::Toml(_)));
    Ok(())
}

#[test]
fn test_config_file_drives_pipeline() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let fixture = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/telco_sample.csv");
    let output = dir.path().join("out").join("two_bins.csv");
    let config_path = dir.path().join("churnprep.toml");

    fs::write(
        &config_path,
        format!(
            "input = {:?}\noutput = {:?}\n\n[binning]\nlabels = [\"Low\", \"High\"]\n",
            fixture.display().to_string(),
            output.display().to_string()
        ),
    )?;

    let config = PipelineConfig::from_file(&config_path)?;
    let summary = run_pipeline(&config)?;

    assert_eq!(summary.rows_written, 8);
    assert_eq!(summary.bin_edges.labels, vec!["Low", "High"]);
    let monthly = summary.encodings.get("MonthlyCharges").unwrap();
    assert_eq!(monthly.len(), 2);
    assert!(output.exists());
    Ok(())
}
