//! Multi-Level Parking Allocator
//!
//! Allocates typed parking spots to arriving vehicles across the levels of a
//! facility, and releases them on departure.
//!
//! # Overview
//!
//! A facility is an ordered list of levels; each level is a fixed sequence of
//! spots built from a capacity plan, and each spot accepts exactly one vehicle
//! type. Parking walks the levels in order and claims the first free spot of the
//! vehicle's type. Releasing walks them again and frees the spot whose occupant
//! has the same license plate.
//!
//! ## Key Features
//!
//! - **First-fit allocation**: deterministic scan order across levels and spots
//! - **Thread-safe spots**: check-and-claim is atomic per spot, so a spot is never double-booked
//! - **Shared facility**: one lazily created process-wide instance, or independent instances for tests
//! - **Availability reports**: timestamped snapshots rendered as text or JSON
//! - **Traffic simulation**: concurrent synthetic arrivals and departures
//!
//! ## Quick Start
//!
//! ```rust
//! use multilevel_parking::*;
//!
//! let facility = ParkingFacility::new();
//! facility.add_level(Level::new(1, CapacityPlan::new().with(VehicleType::Car, 2).with(VehicleType::Truck, 1)));
//! facility.add_level(Level::new(2, CapacityPlan::new().with(VehicleType::Car, 1)));
//!
//! let truck = Vehicle::truck("XYZ789");
//! let allocation = facility.allocate(&truck)?;
//! println!("{} parked at {}", truck, allocation);
//!
//! facility.release(&truck)?;
//! assert!(matches!(
//!     facility.release(&truck),
//!     Err(ParkingError::VehicleNotFound { .. })
//! ));
//! # Ok::<(), ParkingError>(())
//! ```
//!
//! ## Module Organization
//!
//! - [`types`]: Vehicles, identifiers, enums and configuration
//! - [`facility`]: Spots, levels, the facility and availability reports
//! - [`simulation`]: Errors, logging, statistics and the traffic driver
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────┐    ┌──────────────────┐    ┌─────────────┐
//! │   Types     │    │    Facility      │    │ Simulation  │
//! │             │    │                  │    │             │
//! │ Vehicle     │◄───┤ ParkingFacility  │◄───┤ Traffic     │
//! │ Identifiers │    │   └─ Level       │    │ Statistics  │
//! │ Config      │    │       └─ Spot    │    │ Logging     │
//! └─────────────┘    └──────────────────┘    └─────────────┘
//! ```
#![warn(missing_docs, missing_debug_implementations, unreachable_pub)]

// Module declarations
pub mod facility;
pub mod simulation;
pub mod types;

// Core types and identifiers
pub use types::{
    // Configuration
    CapacityEntry,
    ConfigValidationError,
    FacilityConfig,
    // Identifiers
    FloorId,
    LevelConfig,
    LicensePlate,
    // Enums
    OutputFormat,
    SpotId,
    TrafficConfig,
    Vehicle,
    VehicleType,
};

// Facility types and functionality
pub use facility::{
    Allocation, AvailabilityReport, CapacityPlan, Level, LevelSnapshot, ParkingFacility, Spot,
    SpotSnapshot,
};

// Simulation types and functionality
pub use simulation::{
    AllocationRejection, LoggingConfig, OccupancyStatistics, ParkingError, ParkingResult,
    TrafficSimulator, TrafficStatistics,
};
