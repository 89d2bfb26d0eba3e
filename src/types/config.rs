//! Configuration structures for the parking allocator
//!
//! This module contains the facility layout and traffic configuration together
//! with the validation logic and the command line interface of the binary.

use super::{OutputFormat, VehicleType};
use clap::Parser;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Command line arguments structure
#[derive(Debug, Clone, Parser)]
#[command(
    name = "multilevel-parking",
    version,
    about = "Multi-level parking allocator - parks and releases vehicles across typed spots",
    long_about = "Builds a multi-level parking facility from configuration, parks and releases a set of demo vehicles, and renders spot availability. Optionally drives concurrent synthetic traffic against the shared facility.

EXAMPLES:
    # Run the demo with the built-in two-level layout
    multilevel-parking

    # Use a configuration file
    multilevel-parking --config facility.json

    # Render availability as JSON
    multilevel-parking --output-format json

    # Drive 8 concurrent workers with 500 arrivals each
    multilevel-parking --traffic --workers 8 --arrivals 500 --seed 42

    # Generate configuration template
    multilevel-parking --print-config > facility.json

    # Validate configuration without running
    multilevel-parking --config facility.json --dry-run

CONFIGURATION:
    Configuration can be provided via:
    1. Command line arguments (highest priority)
    2. Configuration file (--config flag)
    3. Default values (lowest priority)

    Supported configuration file formats: JSON (.json)"
)]
pub struct CliArgs {
    /// Configuration file path (JSON format)
    #[arg(
        short,
        long,
        help = "Configuration file path (JSON format)",
        long_help = "Path to a JSON configuration file. CLI arguments will override file settings."
    )]
    pub config: Option<String>,

    /// Output format for availability reports
    #[arg(
        long,
        help = "Output format (text or json)",
        long_help = "Output format for availability reports. Supported formats: text, json. Default: text"
    )]
    pub output_format: Option<String>,

    /// Run the concurrent traffic simulation after the demo
    #[arg(long, help = "Run concurrent traffic against the facility")]
    pub traffic: bool,

    /// Number of concurrent traffic workers
    #[arg(long, help = "Number of concurrent traffic workers")]
    pub workers: Option<usize>,

    /// Arrivals generated by each traffic worker
    #[arg(long, help = "Arrivals generated by each worker")]
    pub arrivals: Option<usize>,

    /// Probability that a parked vehicle departs after each arrival (0.0-1.0)
    #[arg(long, help = "Departure probability after each arrival (0.0-1.0)")]
    pub departure_probability: Option<f64>,

    /// Random seed for reproducible traffic
    #[arg(long, help = "Random seed for reproducible traffic")]
    pub seed: Option<u64>,

    /// Emit console logs as JSON
    #[arg(long, help = "Emit console logs as JSON instead of pretty text")]
    pub log_json: bool,

    /// Directory for rolling log files
    #[arg(long, help = "Write JSON logs to a daily rolling file in this directory")]
    pub log_dir: Option<String>,

    /// Enable verbose logging
    #[arg(short, long, help = "Enable verbose logging")]
    pub verbose: bool,

    /// Enable debug logging
    #[arg(short, long, help = "Enable debug logging")]
    pub debug: bool,

    /// Dry run mode - validate configuration without running
    #[arg(long, help = "Validate configuration without running")]
    pub dry_run: bool,

    /// Print default configuration and exit
    #[arg(long, help = "Print default configuration in JSON format and exit")]
    pub print_config: bool,
}

/// Number of spots of one vehicle type on a level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CapacityEntry {
    /// Vehicle type served by these spots
    pub vehicle_type: VehicleType,
    /// Number of spots
    pub count: usize,
}

impl CapacityEntry {
    /// Create a capacity entry
    pub fn new(vehicle_type: VehicleType, count: usize) -> Self {
        Self { vehicle_type, count }
    }
}

/// Layout of a single level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelConfig {
    /// Floor identifier
    pub floor: i32,
    /// Spot counts per vehicle type, in spot numbering order
    pub capacity: Vec<CapacityEntry>,
}

impl LevelConfig {
    /// Total number of spots on this level
    pub fn total_spots(&self) -> usize {
        self.capacity.iter().map(|entry| entry.count).sum()
    }
}

/// Settings for the concurrent traffic simulation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrafficConfig {
    /// Whether the traffic simulation runs after the demo
    pub enabled: bool,
    /// Number of concurrent workers
    pub workers: usize,
    /// Arrivals generated by each worker
    pub arrivals_per_worker: usize,
    /// Probability that one parked vehicle departs after each arrival (0.0-1.0)
    pub departure_probability: f64,
    /// Random seed for reproducible results
    pub seed: Option<u64>,
    /// Release every vehicle still parked once the workers finish
    pub drain: bool,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            workers: 4,
            arrivals_per_worker: 250,
            departure_probability: 0.4,
            seed: None,
            drain: true,
        }
    }
}

/// Configuration file structure (allows partial configuration)
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ConfigFile {
    /// Level layouts, in scan order
    pub levels: Option<Vec<LevelConfig>>,

    /// Output format for availability reports
    pub output_format: Option<String>,

    /// Traffic simulation settings; missing fields take their defaults
    pub traffic: Option<TrafficConfig>,
}

/// Configuration for the parking facility
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// Level layouts, in scan order
    pub levels: Vec<LevelConfig>,

    /// Output format for availability reports
    pub output_format: String,

    /// Traffic simulation settings
    pub traffic: TrafficConfig,
}

/// Configuration loading errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {0}")]
    FileNotFound(String),

    /// Configuration file read error
    #[error("Failed to read configuration file: {0}")]
    ReadError(#[from] std::io::Error),

    /// JSON parsing error
    #[error("Failed to parse JSON configuration: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Unsupported configuration file format
    #[error("Unsupported configuration file format: {0} (supported: .json)")]
    UnsupportedFormat(String),
}

/// Validation errors for facility configuration
#[derive(Debug, thiserror::Error)]
pub enum ConfigValidationError {
    /// No levels configured
    #[error("At least one level must be configured")]
    NoLevels,

    /// Worker count is invalid
    #[error("Worker count must be greater than 0 when traffic is enabled, got {0}")]
    InvalidWorkerCount(usize),

    /// Arrival count is invalid
    #[error("Arrivals per worker must be greater than 0 when traffic is enabled, got {0}")]
    InvalidArrivalCount(usize),

    /// Probability value is out of range
    #[error("Invalid probability for {field}: {value} (must be between 0.0 and 1.0)")]
    InvalidProbability {
        /// Name of the field with invalid probability
        field: String,
        /// The invalid probability value
        value: f64,
    },

    /// Output format is not recognised
    #[error("Invalid output format: {0} (supported: text, json)")]
    InvalidOutputFormat(String),
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            levels: vec![
                LevelConfig {
                    floor: 1,
                    capacity: vec![
                        CapacityEntry::new(VehicleType::Car, 40),
                        CapacityEntry::new(VehicleType::Truck, 30),
                        CapacityEntry::new(VehicleType::Motorcycle, 30),
                    ],
                },
                LevelConfig {
                    floor: 2,
                    capacity: vec![
                        CapacityEntry::new(VehicleType::Car, 50),
                        CapacityEntry::new(VehicleType::Truck, 20),
                        CapacityEntry::new(VehicleType::Motorcycle, 10),
                    ],
                },
            ],
            output_format: "text".to_string(),
            traffic: TrafficConfig::default(),
        }
    }
}

impl FacilityConfig {
    /// Create configuration from parsed CLI arguments
    pub fn from_cli_args(args: CliArgs) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(config_path) = &args.config {
            config = Self::from_file(config_path)?;
        }

        // CLI takes precedence over the file
        Self::apply_cli_overrides(&mut config, args);

        Ok(config)
    }

    /// Load configuration from a JSON file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(ConfigError::FileNotFound(path.display().to_string()));
        }

        let content = fs::read_to_string(path)?;

        match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => {
                let config_file: ConfigFile = serde_json::from_str(&content)?;
                Ok(Self::from_config_file(config_file))
            }
            Some(ext) => Err(ConfigError::UnsupportedFormat(ext.to_string())),
            None => Err(ConfigError::UnsupportedFormat("no extension".to_string())),
        }
    }

    /// Create configuration from a config file, merging with defaults
    fn from_config_file(config_file: ConfigFile) -> Self {
        let defaults = Self::default();

        Self {
            levels: config_file.levels.unwrap_or(defaults.levels),
            output_format: config_file.output_format.unwrap_or(defaults.output_format),
            traffic: config_file.traffic.unwrap_or(defaults.traffic),
        }
    }

    /// Apply CLI argument overrides to configuration
    fn apply_cli_overrides(config: &mut Self, args: CliArgs) {
        if let Some(value) = args.output_format {
            config.output_format = value;
        }
        if args.traffic {
            config.traffic.enabled = true;
        }
        if let Some(value) = args.workers {
            config.traffic.workers = value;
        }
        if let Some(value) = args.arrivals {
            config.traffic.arrivals_per_worker = value;
        }
        if let Some(value) = args.departure_probability {
            config.traffic.departure_probability = value;
        }
        if let Some(value) = args.seed {
            config.traffic.seed = Some(value);
        }
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = serde_json::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Print configuration as JSON
    pub fn print_json(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.levels.is_empty() {
            return Err(ConfigValidationError::NoLevels);
        }

        self.get_output_format()
            .map_err(|_| ConfigValidationError::InvalidOutputFormat(self.output_format.clone()))?;

        let traffic = &self.traffic;
        if !(0.0..=1.0).contains(&traffic.departure_probability) {
            return Err(ConfigValidationError::InvalidProbability {
                field: "departure_probability".to_string(),
                value: traffic.departure_probability,
            });
        }

        // Worker settings only matter when traffic actually runs
        if traffic.enabled {
            if traffic.workers == 0 {
                return Err(ConfigValidationError::InvalidWorkerCount(traffic.workers));
            }
            if traffic.arrivals_per_worker == 0 {
                return Err(ConfigValidationError::InvalidArrivalCount(
                    traffic.arrivals_per_worker,
                ));
            }
        }

        Ok(())
    }

    /// Get the output format as an enum value
    pub fn get_output_format(&self) -> Result<OutputFormat, String> {
        self.output_format.parse()
    }

    /// Total number of spots across all configured levels
    pub fn total_spots(&self) -> usize {
        self.levels.iter().map(LevelConfig::total_spots).sum()
    }
}
