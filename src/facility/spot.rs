//! Parking spot management
//!
//! A spot is the smallest allocatable unit: it accepts one fixed vehicle type and
//! holds at most one vehicle at a time. Every operation runs under the spot's own
//! mutex, so the availability check and the claim in [`Spot::allocate`] are a
//! single atomic step.

use crate::simulation::{AllocationRejection, ParkingError, ParkingResult};
use crate::types::{LicensePlate, SpotId, Vehicle, VehicleType};
use std::sync::{Mutex, MutexGuard, PoisonError};

/// A single parking space fixed to one vehicle type
#[derive(Debug)]
pub struct Spot {
    id: SpotId,
    vehicle_type: VehicleType,
    occupant: Mutex<Option<Vehicle>>,
}

impl Spot {
    /// Create an empty spot
    pub fn new(id: SpotId, vehicle_type: VehicleType) -> Self {
        Self { id, vehicle_type, occupant: Mutex::new(None) }
    }

    /// Spot number within its level
    pub fn id(&self) -> SpotId {
        self.id
    }

    /// Vehicle type this spot accepts
    pub fn vehicle_type(&self) -> VehicleType {
        self.vehicle_type
    }

    // The occupant is replaced in one assignment, so a poisoned lock still
    // guards a consistent value.
    fn occupant(&self) -> MutexGuard<'_, Option<Vehicle>> {
        self.occupant.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Check whether no vehicle occupies the spot
    pub fn is_available(&self) -> bool {
        self.occupant().is_none()
    }

    /// Park a vehicle in this spot
    ///
    /// The spot must be empty and the vehicle must match the spot's type;
    /// otherwise the spot is left untouched and
    /// [`ParkingError::InvalidAllocation`] is returned.
    pub fn allocate(&self, vehicle: &Vehicle) -> ParkingResult<()> {
        let mut occupant = self.occupant();

        let rejection = if occupant.is_some() {
            Some(AllocationRejection::Occupied)
        } else if vehicle.vehicle_type() != self.vehicle_type {
            Some(AllocationRejection::TypeMismatch {
                spot_type: self.vehicle_type,
                vehicle_type: vehicle.vehicle_type(),
            })
        } else {
            None
        };

        if let Some(reason) = rejection {
            return Err(ParkingError::InvalidAllocation {
                spot_id: self.id,
                plate: vehicle.license_plate().clone(),
                reason,
            });
        }

        *occupant = Some(vehicle.clone());
        Ok(())
    }

    /// Clear the spot, returning the vehicle that was parked there
    ///
    /// Releasing an empty spot is a no-op.
    pub fn release(&self) -> Option<Vehicle> {
        self.occupant().take()
    }

    /// Clear the spot only if the parked vehicle carries `plate`
    pub fn release_if_parked(&self, plate: &LicensePlate) -> Option<Vehicle> {
        let mut occupant = self.occupant();
        match occupant.as_ref() {
            Some(vehicle) if vehicle.license_plate() == plate => occupant.take(),
            _ => None,
        }
    }

    /// Vehicle currently parked in the spot
    pub fn parked_vehicle(&self) -> Option<Vehicle> {
        self.occupant().clone()
    }
}
