//! The parking facility
//!
//! [`ParkingFacility`] is an append-only list of levels. Allocation and release
//! walk the levels in the order they were added and stop at the first level
//! that succeeds.
//!
//! One process-wide instance is available through [`ParkingFacility::shared`];
//! the core itself only ever works on a `&ParkingFacility`, so tests and
//! embedders can build independent instances with [`ParkingFacility::new`].

use super::level::Level;
use super::snapshot::{LevelSnapshot, SpotSnapshot};
use crate::simulation::{OccupancyStatistics, ParkingError, ParkingResult};
use crate::types::{FacilityConfig, FloorId, SpotId, Vehicle};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::{OnceLock, PoisonError, RwLock, RwLockReadGuard};
use tracing::{debug, info, warn};

static SHARED_FACILITY: OnceLock<ParkingFacility> = OnceLock::new();

/// Where a vehicle is parked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Allocation {
    /// Floor of the level holding the vehicle
    pub floor: FloorId,
    /// Spot number within that level
    pub spot_id: SpotId,
}

impl fmt::Display for Allocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "level {}, spot {}", self.floor, self.spot_id)
    }
}

/// Ordered collection of levels
#[derive(Debug, Default)]
pub struct ParkingFacility {
    levels: RwLock<Vec<Level>>,
}

impl ParkingFacility {
    /// Create an empty, independent facility
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide facility
    ///
    /// Created empty on first access; every later call returns the same
    /// instance, even when the first accesses race.
    pub fn shared() -> &'static ParkingFacility {
        SHARED_FACILITY.get_or_init(|| {
            info!("Creating shared parking facility");
            ParkingFacility::new()
        })
    }

    /// Create a facility with the levels described by `config`
    pub fn from_config(config: &FacilityConfig) -> Self {
        let facility = Self::new();
        facility.populate(config);
        facility
    }

    /// Append the levels described by `config`
    pub fn populate(&self, config: &FacilityConfig) {
        for level_config in &config.levels {
            self.add_level(Level::from(level_config));
        }
    }

    // Levels are only ever appended, so a poisoned lock still holds a usable list.
    fn levels(&self) -> RwLockReadGuard<'_, Vec<Level>> {
        self.levels.read().unwrap_or_else(PoisonError::into_inner)
    }

    /// Append a level; duplicate floor identifiers are allowed
    pub fn add_level(&self, level: Level) {
        info!(floor = %level.floor(), spots = level.total_capacity(), "Adding level");
        self.levels.write().unwrap_or_else(PoisonError::into_inner).push(level);
    }

    /// Number of levels
    pub fn level_count(&self) -> usize {
        self.levels().len()
    }

    /// Number of spots across all levels
    pub fn total_capacity(&self) -> usize {
        self.levels().iter().map(Level::total_capacity).sum()
    }

    /// Park a vehicle on the first level with a free spot of its type
    pub fn allocate(&self, vehicle: &Vehicle) -> ParkingResult<Allocation> {
        for level in self.levels().iter() {
            if let Some(spot_id) = level.allocate(vehicle) {
                let allocation = Allocation { floor: level.floor(), spot_id };
                info!(plate = %vehicle.license_plate(), %allocation, "Vehicle {} parked successfully", vehicle.license_plate());
                return Ok(allocation);
            }
            debug!(floor = %level.floor(), vehicle_type = %vehicle.vehicle_type(), "Level full for type");
        }

        warn!(plate = %vehicle.license_plate(), vehicle_type = %vehicle.vehicle_type(), "Could not park vehicle");
        Err(ParkingError::NoAvailableSpot {
            plate: vehicle.license_plate().clone(),
            vehicle_type: vehicle.vehicle_type(),
        })
    }

    /// Release the spot held by a vehicle with the same license plate
    pub fn release(&self, vehicle: &Vehicle) -> ParkingResult<Allocation> {
        for level in self.levels().iter() {
            if let Some(spot_id) = level.release(vehicle) {
                let allocation = Allocation { floor: level.floor(), spot_id };
                info!(plate = %vehicle.license_plate(), %allocation, "Vehicle {} unparked successfully", vehicle.license_plate());
                return Ok(allocation);
            }
        }

        warn!(plate = %vehicle.license_plate(), "Vehicle is not found");
        Err(ParkingError::VehicleNotFound { plate: vehicle.license_plate().clone() })
    }

    /// Occupancy of every spot, level by level
    pub fn snapshot(&self) -> Vec<SpotSnapshot> {
        self.levels().iter().flat_map(Level::snapshot).collect()
    }

    /// Occupancy of every spot, grouped by level
    pub fn level_snapshots(&self) -> Vec<LevelSnapshot> {
        self.levels()
            .iter()
            .map(|level| LevelSnapshot { floor: level.floor(), spots: level.snapshot() })
            .collect()
    }

    /// Aggregate capacity and occupancy counts
    pub fn statistics(&self) -> OccupancyStatistics {
        let mut statistics = OccupancyStatistics::new(self.level_count());
        for level in self.levels().iter() {
            for spot in level.spots() {
                statistics.record_spot(spot.vehicle_type(), !spot.is_available());
            }
        }
        statistics
    }
}
