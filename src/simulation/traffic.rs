//! Concurrent traffic driver
//!
//! Runs several worker threads against one facility. Each worker generates
//! arrivals of random vehicle types and, after each arrival, may let one of its
//! own parked vehicles leave. Plates are unique per worker (`W{worker}-{n}`), so
//! a release can only miss if another caller removed the vehicle.

use super::statistics::TrafficStatistics;
use crate::facility::ParkingFacility;
use crate::perf_span;
use crate::types::{TrafficConfig, Vehicle, VehicleType};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use std::panic;
use std::thread;
use std::time::Instant;
use tracing::{debug, info};

/// Drives concurrent arrivals and departures against a facility
#[derive(Debug)]
pub struct TrafficSimulator<'a> {
    facility: &'a ParkingFacility,
    config: TrafficConfig,
}

/// What one worker leaves behind
struct WorkerOutcome {
    statistics: TrafficStatistics,
    still_parked: Vec<Vehicle>,
}

impl<'a> TrafficSimulator<'a> {
    /// Create a simulator for `facility`
    pub fn new(facility: &'a ParkingFacility, config: TrafficConfig) -> Self {
        Self { facility, config }
    }

    /// Run all workers to completion and return the merged counters
    pub fn run(&self) -> TrafficStatistics {
        let span = perf_span!("traffic_run", workers = self.config.workers);
        let _enter = span.enter();

        let start = Instant::now();
        let base_seed = self.config.seed.unwrap_or_else(rand::random);
        info!(
            workers = self.config.workers,
            arrivals_per_worker = self.config.arrivals_per_worker,
            seed = base_seed,
            "Starting traffic simulation"
        );

        let outcomes: Vec<WorkerOutcome> = thread::scope(|scope| {
            let handles: Vec<_> = (0..self.config.workers)
                .map(|worker| {
                    let seed = base_seed.wrapping_add(worker as u64);
                    scope.spawn(move || self.run_worker(worker, seed))
                })
                .collect();

            handles
                .into_iter()
                .map(|handle| match handle.join() {
                    Ok(outcome) => outcome,
                    Err(payload) => panic::resume_unwind(payload),
                })
                .collect()
        });

        let mut statistics = TrafficStatistics::new();
        let mut remaining = Vec::new();
        for outcome in outcomes {
            statistics.merge(&outcome.statistics);
            remaining.extend(outcome.still_parked);
        }

        if self.config.drain {
            for vehicle in &remaining {
                match self.facility.release(vehicle) {
                    Ok(_) => statistics.drained += 1,
                    Err(_) => statistics.release_failures += 1,
                }
            }
        }

        statistics.set_duration(start.elapsed());
        info!(
            arrivals = statistics.arrivals,
            parked = statistics.parked,
            rejected = statistics.rejected,
            "Traffic simulation finished"
        );
        statistics
    }

    fn run_worker(&self, worker: usize, seed: u64) -> WorkerOutcome {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut statistics = TrafficStatistics::new();
        let mut parked: Vec<Vehicle> = Vec::new();
        let departure_probability = self.departure_probability();

        for n in 0..self.config.arrivals_per_worker {
            let vehicle_type = *VehicleType::ALL.choose(&mut rng).unwrap_or(&VehicleType::Car);
            let vehicle = Vehicle::new(format!("W{}-{}", worker, n), vehicle_type);

            statistics.arrivals += 1;
            match self.facility.allocate(&vehicle) {
                Ok(_) => {
                    statistics.parked += 1;
                    parked.push(vehicle);
                }
                Err(e) => {
                    debug!(worker, "Arrival turned away: {}", e);
                    statistics.rejected += 1;
                }
            }

            if !parked.is_empty() && rng.gen_bool(departure_probability) {
                let leaving = parked.swap_remove(rng.gen_range(0..parked.len()));
                match self.facility.release(&leaving) {
                    Ok(_) => statistics.departures += 1,
                    Err(_) => statistics.release_failures += 1,
                }
            }
        }

        WorkerOutcome { statistics, still_parked: parked }
    }

    /// Departure probability usable by `gen_bool`; non-finite values mean no departures
    fn departure_probability(&self) -> f64 {
        let p = self.config.departure_probability;
        if p.is_finite() {
            p.clamp(0.0, 1.0)
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::facility::{CapacityPlan, Level};

    fn small_facility() -> ParkingFacility {
        let facility = ParkingFacility::new();
        facility.add_level(Level::new(
            1,
            CapacityPlan::new()
                .with(VehicleType::Car, 5)
                .with(VehicleType::Truck, 3)
                .with(VehicleType::Motorcycle, 2),
        ));
        facility.add_level(Level::new(2, CapacityPlan::new().with(VehicleType::Car, 5)));
        facility
    }

    fn config(workers: usize, arrivals: usize, drain: bool) -> TrafficConfig {
        TrafficConfig {
            enabled: true,
            workers,
            arrivals_per_worker: arrivals,
            departure_probability: 0.3,
            seed: Some(7),
            drain,
        }
    }

    #[test]
    fn test_counters_are_consistent() {
        let facility = small_facility();
        let stats = TrafficSimulator::new(&facility, config(4, 50, false)).run();

        assert_eq!(stats.arrivals, 200);
        assert_eq!(stats.parked + stats.rejected, stats.arrivals);
        assert_eq!(stats.release_failures, 0);
        assert_eq!(facility.statistics().occupied_spots, stats.still_parked());
    }

    #[test]
    fn test_drain_empties_facility() {
        let facility = small_facility();
        let stats = TrafficSimulator::new(&facility, config(3, 40, true)).run();

        assert_eq!(stats.still_parked(), 0);
        assert_eq!(facility.statistics().occupied_spots, 0);
    }

    #[test]
    fn test_occupancy_never_exceeds_capacity() {
        let facility = small_facility();
        let mut traffic = config(8, 100, false);
        traffic.departure_probability = 0.0;

        let stats = TrafficSimulator::new(&facility, traffic).run();

        // Nothing leaves, so every spot ends up taken exactly once
        assert_eq!(stats.parked, facility.total_capacity());
        assert_eq!(facility.statistics().available_spots(), 0);
    }

    #[test]
    fn test_non_finite_departure_probability_means_no_departures() {
        for probability in [f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let facility = small_facility();
            let mut traffic = config(1, 50, false);
            traffic.departure_probability = probability;

            let stats = TrafficSimulator::new(&facility, traffic).run();

            assert_eq!(stats.arrivals, 50);
            assert_eq!(stats.departures, 0);
            assert_eq!(facility.statistics().occupied_spots, stats.parked);
        }
    }

    #[test]
    fn test_out_of_range_departure_probability_is_clamped() {
        let facility = small_facility();
        let mut traffic = config(1, 20, false);
        traffic.departure_probability = 7.5;

        let stats = TrafficSimulator::new(&facility, traffic).run();

        // Every arrival that parks leaves straight away
        assert_eq!(stats.departures, stats.parked);
        assert_eq!(facility.statistics().occupied_spots, 0);
    }
}
