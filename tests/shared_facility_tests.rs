//! Tests for the process-wide facility
//!
//! Kept in its own test binary, and in a single test, so no other test touches
//! the shared instance.

use multilevel_parking::*;
use std::ptr;
use std::sync::Barrier;
use std::thread;

fn park_from_elsewhere(plate: &str) -> Allocation {
    ParkingFacility::shared().allocate(&Vehicle::car(plate)).unwrap()
}

#[test]
fn test_shared_facility_is_one_instance() {
    let barrier = Barrier::new(8);
    let addresses: Vec<usize> = thread::scope(|scope| {
        let handles: Vec<_> = (0..8)
            .map(|_| {
                scope.spawn(|| {
                    barrier.wait();
                    ParkingFacility::shared() as *const ParkingFacility as usize
                })
            })
            .collect();
        handles.into_iter().map(|h| h.join().unwrap()).collect()
    });
    assert!(addresses.windows(2).all(|pair| pair[0] == pair[1]));

    let first = ParkingFacility::shared();
    first.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 2)));

    // State written through one access is visible through another
    let allocation = park_from_elsewhere("S1");
    let second = ParkingFacility::shared();

    assert!(ptr::eq(first, second));
    assert_eq!(second.level_count(), 1);
    assert_eq!(allocation, Allocation { floor: FloorId(1), spot_id: SpotId(1) });
    assert_eq!(first.snapshot(), second.snapshot());
    assert_eq!(first.statistics().occupied_spots, 1);
}
