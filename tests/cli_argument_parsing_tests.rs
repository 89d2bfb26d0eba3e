//! Tests for CLI argument parsing functionality
//!
//! These tests verify that command line arguments are parsed and merged over
//! configuration files and defaults with the right precedence.

use clap::Parser;
use multilevel_parking::types::config::{CliArgs, FacilityConfig};
use std::io::Write;

/// Test parsing with no arguments
#[test]
fn test_default_arguments() {
    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(cli_args.config.is_none());
    assert!(!cli_args.traffic);
    assert!(!cli_args.dry_run);
    assert!(cli_args.workers.is_none());

    let config = FacilityConfig::from_cli_args(cli_args).unwrap();
    assert_eq!(config, FacilityConfig::default());
}

/// Test parsing of the traffic arguments
#[test]
fn test_traffic_arguments_parsing() {
    let cli_args = CliArgs::try_parse_from([
        "test",
        "--traffic",
        "--workers",
        "8",
        "--arrivals",
        "500",
        "--departure-probability",
        "0.25",
        "--seed",
        "42",
    ])
    .unwrap();

    let config = FacilityConfig::from_cli_args(cli_args).unwrap();
    assert!(config.traffic.enabled);
    assert_eq!(config.traffic.workers, 8);
    assert_eq!(config.traffic.arrivals_per_worker, 500);
    assert_eq!(config.traffic.departure_probability, 0.25);
    assert_eq!(config.traffic.seed, Some(42));
    config.validate().unwrap();
}

/// Test that invalid values parse but fail validation
#[test]
fn test_invalid_values_caught_by_validation() {
    let cli_args = CliArgs::try_parse_from(["test", "--traffic", "--workers", "0"]).unwrap();
    let config = FacilityConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());

    let cli_args = CliArgs::try_parse_from(["test", "--output-format", "xml"]).unwrap();
    let config = FacilityConfig::from_cli_args(cli_args).unwrap();
    assert!(config.validate().is_err());
}

/// Test non-numeric values are rejected by the parser
#[test]
fn test_non_numeric_worker_count_rejected() {
    assert!(CliArgs::try_parse_from(["test", "--workers", "many"]).is_err());
}

/// Test CLI overrides take precedence over the config file
#[test]
fn test_cli_overrides_config_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"output_format": "json", "traffic": {{"workers": 3, "seed": 9}}}}"#).unwrap();
    let path = file.path().to_str().unwrap().to_string();

    let cli_args = CliArgs::try_parse_from(["test", "--config", &path, "--workers", "5"]).unwrap();
    let config = FacilityConfig::from_cli_args(cli_args).unwrap();

    assert_eq!(config.output_format, "json");
    assert_eq!(config.traffic.workers, 5);
    assert_eq!(config.traffic.seed, Some(9));
    assert_eq!(config.levels, FacilityConfig::default().levels);
}

/// Test a missing config file surfaces an error
#[test]
fn test_missing_config_file() {
    let cli_args = CliArgs::try_parse_from(["test", "--config", "/nonexistent/facility.json"]).unwrap();
    assert!(FacilityConfig::from_cli_args(cli_args).is_err());
}

/// Test the logging flags reach the logging configuration
#[test]
fn test_log_json_flag_selects_json_console() {
    use multilevel_parking::LoggingConfig;

    let cli_args = CliArgs::try_parse_from(["test", "--log-json", "--debug"]).unwrap();
    assert!(cli_args.log_json);

    let logging = LoggingConfig::from_cli_args(&cli_args);
    assert!(logging.json_format);
    assert_eq!(logging.level, tracing::Level::DEBUG);

    let cli_args = CliArgs::try_parse_from(["test"]).unwrap();
    assert!(!LoggingConfig::from_cli_args(&cli_args).json_format);
}
