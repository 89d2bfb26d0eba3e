//! Vehicle model
//!
//! A vehicle is a license plate tagged with its [`VehicleType`]. There is no
//! per-type behaviour, so a plain struct stands in for a class hierarchy.

use super::{LicensePlate, VehicleType};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A vehicle arriving at or leaving the facility
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Vehicle {
    license_plate: LicensePlate,
    vehicle_type: VehicleType,
}

impl Vehicle {
    /// Create a vehicle of the given type
    pub fn new(license_plate: impl Into<LicensePlate>, vehicle_type: VehicleType) -> Self {
        Self { license_plate: license_plate.into(), vehicle_type }
    }

    /// Create a car
    pub fn car(license_plate: impl Into<LicensePlate>) -> Self {
        Self::new(license_plate, VehicleType::Car)
    }

    /// Create a truck
    pub fn truck(license_plate: impl Into<LicensePlate>) -> Self {
        Self::new(license_plate, VehicleType::Truck)
    }

    /// Create a motorcycle
    pub fn motorcycle(license_plate: impl Into<LicensePlate>) -> Self {
        Self::new(license_plate, VehicleType::Motorcycle)
    }

    /// License plate of the vehicle
    pub fn license_plate(&self) -> &LicensePlate {
        &self.license_plate
    }

    /// Category of the vehicle
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }
}

impl fmt::Display for Vehicle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.vehicle_type, self.license_plate)
    }
}
