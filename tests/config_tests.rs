use anyhow::Result;
use std::fs;
use tempfile::TempDir;
use tps_estimator::config::{Config, OutputFormat};
use tps_estimator::QuantizationScheme;

#[test]
fn test_config_defaults() {
    let config = Config::default();
    assert_eq!(config.form.params.label, "Model size (Billion parameters)");
    assert_eq!(config.form.params.default, 13.0);
    assert_eq!(config.form.params.min, 1.0);
    assert_eq!(config.form.quantization, QuantizationScheme::Fp8);
    assert_eq!(config.form.bandwidth.label, "GPU Memory Bandwidth (GB/s)");
    assert_eq!(config.form.bandwidth.default, 600.0);
    assert_eq!(config.form.bandwidth.min, 100.0);
    assert_eq!(config.output.precision, 2);
    assert_eq!(config.output.format, OutputFormat::Text);
}

#[test]
fn test_config_save_and_load() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("estimator.json");

    let mut config = Config::default();
    config.form.bandwidth.default = 3350.0;
    config.form.quantization = QuantizationScheme::Fp4;
    config.output.format = OutputFormat::Markdown;
    config.save(&path)?;

    let loaded = Config::load(&path)?;
    assert_eq!(loaded, config);
    Ok(())
}

#[test]
fn test_partial_config_keeps_defaults() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("partial.json");
    fs::write(&path, r#"{ "output": { "format": "json", "show_notes": false } }"#)?;

    let config = Config::load(&path)?;
    assert_eq!(config.output.format, OutputFormat::Json);
    assert!(!config.output.show_notes);
    assert_eq!(config.output.precision, 2);
    assert_eq!(config.form, Config::default().form);
    Ok(())
}

#[test]
fn test_bad_config_reports_path() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let path = temp_dir.path().join("broken.json");
    fs::write(&path, "{ not json")?;

    let err = Config::load(&path).unwrap_err();
    assert!(format!("{:#}", err).contains("broken.json"));
    Ok(())
}

#[test]
fn test_output_format_parse() {
    assert_eq!("MD".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    assert!("yaml".parse::<OutputFormat>().is_err());
}
