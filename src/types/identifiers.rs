//! Identifier types for the parking allocator
//!
//! Floors and spots carry small numeric identifiers; vehicles are identified by
//! their license plate.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Floor identifier of a level
///
/// Signed so that basement floors can be modelled; uniqueness is not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FloorId(pub i32);

impl fmt::Display for FloorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i32> for FloorId {
    fn from(floor: i32) -> Self {
        Self(floor)
    }
}

/// Spot number, unique within its level and assigned sequentially from 1
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SpotId(pub u32);

impl fmt::Display for SpotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// License plate identifying a vehicle
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LicensePlate(String);

impl LicensePlate {
    /// Create a license plate from any string-like value
    pub fn new(plate: impl Into<String>) -> Self {
        Self(plate.into())
    }

    /// Borrow the plate as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LicensePlate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LicensePlate {
    fn from(plate: &str) -> Self {
        Self::new(plate)
    }
}

impl From<String> for LicensePlate {
    fn from(plate: String) -> Self {
        Self(plate)
    }
}
