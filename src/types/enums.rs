//! Enumeration types for the parking allocator
//!
//! This module contains the vehicle categories that determine spot compatibility
//! and the output formats used when rendering availability reports.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Vehicle categories; every spot accepts exactly one of these for its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum VehicleType {
    /// Passenger car
    Car,
    /// Truck or other large vehicle
    Truck,
    /// Motorcycle or scooter
    Motorcycle,
}

impl VehicleType {
    /// All vehicle types, in declaration order
    pub const ALL: [VehicleType; 3] = [VehicleType::Car, VehicleType::Truck, VehicleType::Motorcycle];
}

impl fmt::Display for VehicleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            VehicleType::Car => write!(f, "Car"),
            VehicleType::Truck => write!(f, "Truck"),
            VehicleType::Motorcycle => write!(f, "Motorcycle"),
        }
    }
}

impl FromStr for VehicleType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "car" => Ok(VehicleType::Car),
            "truck" => Ok(VehicleType::Truck),
            "motorcycle" | "motorbike" | "bike" => Ok(VehicleType::Motorcycle),
            _ => Err(format!("Unknown vehicle type: {}", s)),
        }
    }
}

/// Output formats for availability reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum OutputFormat {
    /// Human-readable lines, one per spot
    Text,
    /// Pretty-printed JSON document
    Json,
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!("Unknown output format: {}", s)),
        }
    }
}
