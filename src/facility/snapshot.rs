//! Occupancy snapshots and availability reports
//!
//! Snapshots are plain values copied out of the live spots so that callers can
//! render them however they like without holding any locks.

use super::parking_lot::ParkingFacility;
use super::spot::Spot;
use crate::simulation::{OccupancyStatistics, ParkingResult};
use crate::types::{FloorId, LicensePlate, OutputFormat, SpotId, VehicleType};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write as _;

/// Occupancy of a single spot at the time of capture
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpotSnapshot {
    /// Floor of the level owning the spot
    pub floor: FloorId,
    /// Spot number within the level
    pub spot_id: SpotId,
    /// Vehicle type the spot accepts
    pub vehicle_type: VehicleType,
    /// Whether a vehicle is parked
    pub occupied: bool,
    /// Plate of the parked vehicle, if any
    pub license_plate: Option<LicensePlate>,
}

impl SpotSnapshot {
    pub(crate) fn capture(floor: FloorId, spot: &Spot) -> Self {
        let parked = spot.parked_vehicle();
        Self {
            floor,
            spot_id: spot.id(),
            vehicle_type: spot.vehicle_type(),
            occupied: parked.is_some(),
            license_plate: parked.map(|vehicle| vehicle.license_plate().clone()),
        }
    }
}

/// Snapshot of one level
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LevelSnapshot {
    /// Floor identifier
    pub floor: FloorId,
    /// Spots in construction order
    pub spots: Vec<SpotSnapshot>,
}

/// Timestamped availability of the whole facility
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityReport {
    /// When the snapshot was taken
    pub taken_at: DateTime<Utc>,
    /// Aggregate counts
    pub statistics: OccupancyStatistics,
    /// Levels in scan order
    pub levels: Vec<LevelSnapshot>,
}

impl AvailabilityReport {
    /// Capture the current availability of a facility
    ///
    /// The counts are taken from the captured spots, so they always agree with
    /// the per-spot lines even while vehicles park and leave.
    pub fn capture(facility: &ParkingFacility) -> Self {
        let levels = facility.level_snapshots();
        Self { taken_at: Utc::now(), statistics: tally(&levels), levels }
    }

    /// Render the report in the requested format
    pub fn render(&self, format: OutputFormat) -> ParkingResult<String> {
        match format {
            OutputFormat::Text => Ok(self.to_text()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(self)?),
        }
    }

    /// Render one line per spot, grouped by level
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for level in &self.levels {
            let _ = writeln!(out, "Level {} Availability:", level.floor);
            for spot in &level.spots {
                match &spot.license_plate {
                    Some(plate) => {
                        let _ = writeln!(
                            out,
                            "Spot {}: Occupied by {} ({})",
                            spot.spot_id, spot.vehicle_type, plate
                        );
                    }
                    None => {
                        let _ = writeln!(out, "Spot {}: Available for {}", spot.spot_id, spot.vehicle_type);
                    }
                }
            }
        }
        out
    }
}

fn tally(levels: &[LevelSnapshot]) -> OccupancyStatistics {
    let mut statistics = OccupancyStatistics::new(levels.len());
    for spot in levels.iter().flat_map(|level| &level.spots) {
        statistics.record_spot(spot.vehicle_type, spot.occupied);
    }
    statistics
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{CapacityPlan, Level};
    use crate::types::Vehicle;
    use std::sync::atomic::{AtomicBool, Ordering};
    use std::thread;

    fn small_facility() -> ParkingFacility {
        let facility = ParkingFacility::new();
        facility.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 1).with(VehicleType::Truck, 1)));
        facility
    }

    #[test]
    fn test_text_rendering() {
        let facility = small_facility();
        facility.allocate(&Vehicle::car("ABC123")).unwrap();

        let report = AvailabilityReport::capture(&facility);
        assert_eq!(
            report.to_text(),
            "Level 1 Availability:\nSpot 1: Occupied by Car (ABC123)\nSpot 2: Available for Truck\n"
        );
    }

    #[test]
    fn test_json_rendering() {
        let facility = small_facility();
        facility.allocate(&Vehicle::truck("XYZ789")).unwrap();

        let report = AvailabilityReport::capture(&facility);
        let json = report.render(OutputFormat::Json).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        let spots = &value["levels"][0]["spots"];
        assert_eq!(spots[0]["occupied"], false);
        assert_eq!(spots[1]["occupied"], true);
        assert_eq!(spots[1]["license_plate"], "XYZ789");
        assert_eq!(value["statistics"]["occupied_spots"], 1);
    }

    #[test]
    fn test_counts_match_spots_under_concurrent_traffic() {
        let facility = ParkingFacility::new();
        facility.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 4)));
        facility.add_level(Level::new(2, CapacityPlan::new().with(VehicleType::Car, 4)));
        let done = AtomicBool::new(false);

        let reports = thread::scope(|scope| {
            scope.spawn(|| {
                let mut n = 0u64;
                while !done.load(Ordering::Relaxed) {
                    let vehicle = Vehicle::car(format!("C{}", n % 8));
                    if facility.allocate(&vehicle).is_err() {
                        let _ = facility.release(&vehicle);
                    }
                    n += 1;
                }
            });

            let reports: Vec<AvailabilityReport> =
                (0..500).map(|_| AvailabilityReport::capture(&facility)).collect();
            done.store(true, Ordering::Relaxed);
            reports
        });

        for report in reports {
            let occupied =
                report.levels.iter().flat_map(|level| &level.spots).filter(|spot| spot.occupied).count();

            assert_eq!(report.statistics.occupied_spots, occupied);
            assert_eq!(report.statistics.total_spots, 8);
            assert_eq!(report.statistics.total_levels, report.levels.len());
        }
    }
}
