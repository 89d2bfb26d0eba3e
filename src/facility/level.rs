//! Level management
//!
//! A level owns a fixed sequence of spots built once from a capacity plan and
//! allocates them first-fit in construction order.

use super::snapshot::SpotSnapshot;
use super::spot::Spot;
use crate::types::{CapacityEntry, FloorId, LevelConfig, SpotId, Vehicle, VehicleType};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Ordered list of `(vehicle type, spot count)` pairs used to build a level
///
/// The order fixes spot numbering: spots are numbered from 1, grouped by type in
/// plan order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CapacityPlan(Vec<CapacityEntry>);

impl CapacityPlan {
    /// Create an empty plan
    pub fn new() -> Self {
        Self::default()
    }

    /// Append spots of a vehicle type
    pub fn with(mut self, vehicle_type: VehicleType, count: usize) -> Self {
        self.0.push(CapacityEntry::new(vehicle_type, count));
        self
    }

    /// Planned spots for a vehicle type, 0 if the type is absent
    pub fn capacity_for(&self, vehicle_type: VehicleType) -> usize {
        self.0.iter().filter(|entry| entry.vehicle_type == vehicle_type).map(|entry| entry.count).sum()
    }

    /// Sum of all planned spots
    pub fn total(&self) -> usize {
        self.0.iter().map(|entry| entry.count).sum()
    }

    /// Entries in plan order
    pub fn entries(&self) -> &[CapacityEntry] {
        &self.0
    }
}

impl From<Vec<CapacityEntry>> for CapacityPlan {
    fn from(entries: Vec<CapacityEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<(VehicleType, usize)> for CapacityPlan {
    fn from_iter<I: IntoIterator<Item = (VehicleType, usize)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(vehicle_type, count)| CapacityEntry::new(vehicle_type, count)).collect())
    }
}

/// One floor of the facility
#[derive(Debug)]
pub struct Level {
    floor: FloorId,
    spots: Vec<Spot>,
    plan: CapacityPlan,
}

impl Level {
    /// Build a level and all of its spots from a capacity plan
    pub fn new(floor: impl Into<FloorId>, plan: CapacityPlan) -> Self {
        let floor = floor.into();
        let spots = plan
            .entries()
            .iter()
            .flat_map(|entry| std::iter::repeat(entry.vehicle_type).take(entry.count))
            .zip(1u32..)
            .map(|(vehicle_type, number)| Spot::new(SpotId(number), vehicle_type))
            .collect();

        Self { floor, spots, plan }
    }

    /// Floor identifier
    pub fn floor(&self) -> FloorId {
        self.floor
    }

    /// The plan this level was built from
    pub fn plan(&self) -> &CapacityPlan {
        &self.plan
    }

    /// Spots in construction order
    pub fn spots(&self) -> &[Spot] {
        &self.spots
    }

    /// Park a vehicle in the first available spot of its type
    ///
    /// Returns the claimed spot, or `None` if every matching spot is taken. This
    /// is a linear scan; a production version would keep a free list per
    /// vehicle type.
    pub fn allocate(&self, vehicle: &Vehicle) -> Option<SpotId> {
        self.allocate_with(vehicle, Spot::is_available)
    }

    /// First-fit scan using `looks_free` as the unlocked availability check
    fn allocate_with(&self, vehicle: &Vehicle, looks_free: impl Fn(&Spot) -> bool) -> Option<SpotId> {
        for spot in &self.spots {
            if spot.vehicle_type() != vehicle.vehicle_type() || !looks_free(spot) {
                continue;
            }

            match spot.allocate(vehicle) {
                Ok(()) => {
                    debug!(floor = %self.floor, spot = %spot.id(), plate = %vehicle.license_plate(), "Spot claimed");
                    return Some(spot.id());
                }
                // Another caller claimed it between the check and the claim
                Err(e) => debug!(floor = %self.floor, "Spot lost to concurrent claim: {}", e),
            }
        }
        None
    }

    /// Release the spot holding a vehicle with the same license plate
    ///
    /// Matching ignores the vehicle type.
    pub fn release(&self, vehicle: &Vehicle) -> Option<SpotId> {
        let plate = vehicle.license_plate();
        self.spots.iter().find_map(|spot| {
            spot.release_if_parked(plate).map(|_| {
                debug!(floor = %self.floor, spot = %spot.id(), plate = %plate, "Spot released");
                spot.id()
            })
        })
    }

    /// Number of spots on the level, independent of occupancy
    pub fn total_capacity(&self) -> usize {
        self.spots.len()
    }

    /// Planned spots for a vehicle type, independent of occupancy
    pub fn capacity_for(&self, vehicle_type: VehicleType) -> usize {
        self.plan.capacity_for(vehicle_type)
    }

    /// Currently free spots for a vehicle type
    pub fn available_for(&self, vehicle_type: VehicleType) -> usize {
        self.spots
            .iter()
            .filter(|spot| spot.vehicle_type() == vehicle_type && spot.is_available())
            .count()
    }

    /// Number of occupied spots
    pub fn occupied_count(&self) -> usize {
        self.spots.iter().filter(|spot| !spot.is_available()).count()
    }

    /// Occupancy of every spot, in spot order
    pub fn snapshot(&self) -> Vec<SpotSnapshot> {
        self.spots.iter().map(|spot| SpotSnapshot::capture(self.floor, spot)).collect()
    }
}

impl From<&LevelConfig> for Level {
    fn from(config: &LevelConfig) -> Self {
        Level::new(config.floor, CapacityPlan::from(config.capacity.clone()))
    }
}
