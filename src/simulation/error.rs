//! Error types and handling
//!
//! This module contains the error type shared by spots, levels and the facility.

use crate::types::{LicensePlate, SpotId, VehicleType};
use std::fmt;
use thiserror::Error;

/// Why a spot refused a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AllocationRejection {
    /// The spot already holds a vehicle
    Occupied,
    /// The spot serves a different vehicle type
    TypeMismatch {
        /// Type the spot accepts
        spot_type: VehicleType,
        /// Type of the vehicle offered
        vehicle_type: VehicleType,
    },
}

impl fmt::Display for AllocationRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AllocationRejection::Occupied => write!(f, "spot already occupied"),
            AllocationRejection::TypeMismatch { spot_type, vehicle_type } => {
                write!(f, "spot accepts {} but vehicle is a {}", spot_type, vehicle_type)
            }
        }
    }
}

/// Errors that can occur while parking or releasing vehicles
#[derive(Debug, Error)]
pub enum ParkingError {
    /// A spot was asked to take a vehicle it cannot hold
    ///
    /// Levels only offer a vehicle to an available spot of the matching type, so
    /// this never reaches callers of [`Level`](crate::facility::Level) or
    /// [`ParkingFacility`](crate::facility::ParkingFacility).
    #[error("Invalid allocation of {plate} to spot {spot_id}: {reason}")]
    InvalidAllocation {
        /// Spot that refused the vehicle
        spot_id: SpotId,
        /// Plate of the refused vehicle
        plate: LicensePlate,
        /// Reason for the refusal
        reason: AllocationRejection,
    },

    /// No level has a free spot for the vehicle's type
    #[error("No available {vehicle_type} spot for vehicle {plate}")]
    NoAvailableSpot {
        /// Plate of the vehicle that could not park
        plate: LicensePlate,
        /// Type of the vehicle that could not park
        vehicle_type: VehicleType,
    },

    /// The vehicle is not parked on any level
    #[error("Vehicle {plate} is not found")]
    VehicleNotFound {
        /// Plate that was looked up
        plate: LicensePlate,
    },

    /// Serialization error
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

impl ParkingError {
    /// Check if this is an expected outcome the caller should handle
    pub fn is_recoverable(&self) -> bool {
        match self {
            ParkingError::InvalidAllocation { .. } => false,
            ParkingError::NoAvailableSpot { .. } => true,
            ParkingError::VehicleNotFound { .. } => true,
            ParkingError::SerializationError(_) => true,
        }
    }

    /// Get the error category
    pub fn category(&self) -> &'static str {
        match self {
            ParkingError::InvalidAllocation { .. } => "Invalid Allocation",
            ParkingError::NoAvailableSpot { .. } => "No Available Spot",
            ParkingError::VehicleNotFound { .. } => "Vehicle Not Found",
            ParkingError::SerializationError(_) => "Serialization",
        }
    }
}

/// Result type for parking operations
pub type ParkingResult<T> = Result<T, ParkingError>;
