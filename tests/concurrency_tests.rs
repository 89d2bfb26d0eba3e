//! Tests for concurrent parking
//!
//! These tests hammer spots, levels and the facility from many threads and check
//! that no spot is ever handed to two vehicles.

use multilevel_parking::*;
use std::collections::HashSet;
use std::sync::{Arc, Barrier};
use std::thread;

#[test]
fn test_single_spot_has_one_winner() {
    let spot = Arc::new(Spot::new(SpotId(1), VehicleType::Truck));
    let barrier = Arc::new(Barrier::new(12));

    let handles: Vec<_> = (0..12)
        .map(|i| {
            let spot = Arc::clone(&spot);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                spot.allocate(&Vehicle::truck(format!("T{}", i))).is_ok()
            })
        })
        .collect();

    let winners = handles.into_iter().filter_map(|h| h.join().ok()).filter(|won| *won).count();
    assert_eq!(winners, 1);
}

#[test]
fn test_no_double_booking_across_facility() {
    let facility = Arc::new(ParkingFacility::new());
    facility.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 10)));
    facility.add_level(Level::new(2, CapacityPlan::new().with(VehicleType::Car, 10)));

    let threads = 8;
    let per_thread = 10;
    let barrier = Arc::new(Barrier::new(threads));

    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let facility = Arc::clone(&facility);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                (0..per_thread)
                    .filter_map(|n| facility.allocate(&Vehicle::car(format!("C{}-{}", t, n))).ok())
                    .collect::<Vec<_>>()
            })
        })
        .collect();

    let allocations: Vec<Allocation> = handles.into_iter().flat_map(|h| h.join().unwrap()).collect();

    // 80 arrivals for 20 spots: every spot taken exactly once
    assert_eq!(allocations.len(), 20);
    let distinct: HashSet<_> = allocations.iter().collect();
    assert_eq!(distinct.len(), allocations.len());
    assert_eq!(facility.statistics().available_spots(), 0);
}

#[test]
fn test_concurrent_park_and_release_leaves_consistent_state() {
    let facility = Arc::new(ParkingFacility::new());
    facility.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 4).with(VehicleType::Motorcycle, 4)));

    let handles: Vec<_> = (0..6)
        .map(|t| {
            let facility = Arc::clone(&facility);
            thread::spawn(move || {
                for n in 0..200 {
                    let vehicle = if n % 2 == 0 {
                        Vehicle::car(format!("C{}-{}", t, n))
                    } else {
                        Vehicle::motorcycle(format!("M{}-{}", t, n))
                    };
                    if facility.allocate(&vehicle).is_ok() {
                        facility.release(&vehicle).unwrap();
                    }
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(facility.statistics().occupied_spots, 0);
    assert!(facility.snapshot().iter().all(|spot| !spot.occupied));
}

#[test]
fn test_traffic_simulator_against_default_layout() {
    let facility = ParkingFacility::from_config(&FacilityConfig::default());
    let traffic = TrafficConfig {
        enabled: true,
        workers: 6,
        arrivals_per_worker: 150,
        departure_probability: 0.5,
        seed: Some(2024),
        drain: true,
    };

    let stats = TrafficSimulator::new(&facility, traffic).run();

    assert_eq!(stats.arrivals, 900);
    assert_eq!(stats.parked + stats.rejected, stats.arrivals);
    assert_eq!(stats.release_failures, 0);
    assert_eq!(stats.still_parked(), 0);
    assert_eq!(facility.statistics().occupied_spots, 0);
}
