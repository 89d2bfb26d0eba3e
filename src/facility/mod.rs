//! Facility, level and spot management
//!
//! This module holds the allocation core: spots that hold at most one vehicle,
//! levels that scan their spots first-fit, and the facility that walks its
//! levels in order.
//!
//! # Overview
//!
//! - **Spot**: a single space fixed to one vehicle type, guarded by its own mutex
//! - **Level**: spots built once from a [`CapacityPlan`], numbered from 1
//! - **ParkingFacility**: append-only list of levels with a process-wide instance
//! - **AvailabilityReport**: timestamped snapshot rendered as text or JSON
//!
//! # Usage Example
//!
//! ```rust
//! use multilevel_parking::facility::*;
//! use multilevel_parking::types::*;
//!
//! let facility = ParkingFacility::new();
//! facility.add_level(Level::new(
//!     1,
//!     CapacityPlan::new().with(VehicleType::Car, 2).with(VehicleType::Truck, 1),
//! ));
//!
//! let car = Vehicle::car("ABC123");
//! let allocation = facility.allocate(&car).unwrap();
//! assert_eq!(allocation.spot_id, SpotId(1));
//!
//! facility.release(&car).unwrap();
//! println!("{}", AvailabilityReport::capture(&facility).to_text());
//! ```

pub mod level;
pub mod parking_lot;
pub mod snapshot;
pub mod spot;

// Re-export all public types for convenience
pub use level::{CapacityPlan, Level};
pub use parking_lot::{Allocation, ParkingFacility};
pub use snapshot::{AvailabilityReport, LevelSnapshot, SpotSnapshot};
pub use spot::Spot;
