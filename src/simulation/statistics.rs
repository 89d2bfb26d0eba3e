//! Statistics collection and reporting
//!
//! This module contains occupancy counts for a facility and the outcome counters
//! of a traffic run.

use crate::types::VehicleType;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::Duration;

/// Capacity and occupancy of one vehicle type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeOccupancy {
    /// Vehicle type
    pub vehicle_type: VehicleType,
    /// Spots serving this type
    pub capacity: usize,
    /// Spots of this type currently occupied
    pub occupied: usize,
}

impl TypeOccupancy {
    /// Free spots of this type
    pub fn available(&self) -> usize {
        self.capacity - self.occupied
    }
}

/// Aggregate occupancy of a facility
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyStatistics {
    /// Number of levels
    pub total_levels: usize,
    /// Number of spots across all levels
    pub total_spots: usize,
    /// Number of occupied spots
    pub occupied_spots: usize,
    /// Breakdown per vehicle type, in [`VehicleType::ALL`] order
    pub by_type: Vec<TypeOccupancy>,
}

impl OccupancyStatistics {
    /// Create empty statistics for a facility with `total_levels` levels
    pub fn new(total_levels: usize) -> Self {
        Self {
            total_levels,
            total_spots: 0,
            occupied_spots: 0,
            by_type: VehicleType::ALL
                .iter()
                .map(|&vehicle_type| TypeOccupancy { vehicle_type, capacity: 0, occupied: 0 })
                .collect(),
        }
    }

    /// Count one spot
    pub fn record_spot(&mut self, vehicle_type: VehicleType, occupied: bool) {
        self.total_spots += 1;
        if occupied {
            self.occupied_spots += 1;
        }

        if let Some(entry) = self.by_type.iter_mut().find(|entry| entry.vehicle_type == vehicle_type) {
            entry.capacity += 1;
            if occupied {
                entry.occupied += 1;
            }
        }
    }

    /// Free spots across all levels
    pub fn available_spots(&self) -> usize {
        self.total_spots - self.occupied_spots
    }

    /// Breakdown for one vehicle type
    pub fn for_type(&self, vehicle_type: VehicleType) -> Option<&TypeOccupancy> {
        self.by_type.iter().find(|entry| entry.vehicle_type == vehicle_type)
    }

    /// Occupied spots as a percentage of all spots
    pub fn occupancy_percentage(&self) -> f64 {
        if self.total_spots == 0 {
            0.0
        } else {
            (self.occupied_spots as f64 / self.total_spots as f64) * 100.0
        }
    }
}

impl fmt::Display for OccupancyStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "{} levels, {} spots, {} occupied ({:.1}%)",
            self.total_levels,
            self.total_spots,
            self.occupied_spots,
            self.occupancy_percentage()
        )?;
        for entry in &self.by_type {
            writeln!(
                f,
                "  {:<10} {:>5} / {:<5} available",
                entry.vehicle_type.to_string(),
                entry.available(),
                entry.capacity
            )?;
        }
        Ok(())
    }
}

/// Outcome counters of a traffic run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrafficStatistics {
    /// Vehicles that tried to park
    pub arrivals: usize,
    /// Arrivals that found a spot
    pub parked: usize,
    /// Arrivals turned away because no spot of their type was free
    pub rejected: usize,
    /// Vehicles released while workers were running
    pub departures: usize,
    /// Vehicles released after the workers finished
    pub drained: usize,
    /// Releases for vehicles that could not be found
    pub release_failures: usize,
    /// Wall-clock duration of the run
    pub duration: Duration,
}

impl TrafficStatistics {
    /// Create empty statistics
    pub fn new() -> Self {
        Self::default()
    }

    /// Add the counters of another worker
    pub fn merge(&mut self, other: &TrafficStatistics) {
        self.arrivals += other.arrivals;
        self.parked += other.parked;
        self.rejected += other.rejected;
        self.departures += other.departures;
        self.drained += other.drained;
        self.release_failures += other.release_failures;
    }

    /// Set the run duration
    pub fn set_duration(&mut self, duration: Duration) {
        self.duration = duration;
    }

    /// Parked arrivals as a percentage of all arrivals
    pub fn park_rate(&self) -> f64 {
        if self.arrivals == 0 {
            0.0
        } else {
            (self.parked as f64 / self.arrivals as f64) * 100.0
        }
    }

    /// Vehicles parked and not yet released
    pub fn still_parked(&self) -> usize {
        self.parked - self.departures - self.drained
    }
}

impl fmt::Display for TrafficStatistics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Traffic Statistics:")?;
        writeln!(f, "  Arrivals: {}", self.arrivals)?;
        writeln!(f, "  Parked: {} ({:.1}%)", self.parked, self.park_rate())?;
        writeln!(f, "  Rejected: {}", self.rejected)?;
        writeln!(f, "  Departures: {}", self.departures)?;
        writeln!(f, "  Drained: {}", self.drained)?;
        writeln!(f, "  Release Failures: {}", self.release_failures)?;
        write!(f, "  Duration: {:.3}s", self.duration.as_secs_f64())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_occupancy_counts() {
        let mut stats = OccupancyStatistics::new(1);
        stats.record_spot(VehicleType::Car, true);
        stats.record_spot(VehicleType::Car, false);
        stats.record_spot(VehicleType::Truck, false);

        assert_eq!(stats.total_spots, 3);
        assert_eq!(stats.occupied_spots, 1);
        assert_eq!(stats.available_spots(), 2);

        let cars = stats.for_type(VehicleType::Car).unwrap();
        assert_eq!(cars.capacity, 2);
        assert_eq!(cars.available(), 1);
        assert_eq!(stats.for_type(VehicleType::Motorcycle).unwrap().capacity, 0);
    }

    #[test]
    fn test_occupancy_percentage_of_empty_facility() {
        assert_eq!(OccupancyStatistics::new(0).occupancy_percentage(), 0.0);
    }

    #[test]
    fn test_traffic_merge() {
        let mut total = TrafficStatistics::new();
        let worker = TrafficStatistics {
            arrivals: 10,
            parked: 8,
            rejected: 2,
            departures: 3,
            ..Default::default()
        };
        total.merge(&worker);
        total.merge(&worker);

        assert_eq!(total.arrivals, 20);
        assert_eq!(total.parked, 16);
        assert_eq!(total.still_parked(), 10);
        assert_eq!(total.park_rate(), 80.0);
    }

    #[test]
    fn test_traffic_display() {
        let stats = TrafficStatistics { arrivals: 4, parked: 2, ..Default::default() };
        let text = stats.to_string();
        assert!(text.starts_with("Traffic Statistics:"));
        assert!(text.contains("Parked: 2 (50.0%)"));
    }
}
