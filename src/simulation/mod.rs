//! Error handling, logging, statistics and traffic simulation
//!
//! This module contains the ambient pieces around the allocation core.
//!
//! # Overview
//!
//! - **ParkingError**: error type shared by spots, levels and the facility
//! - **LoggingConfig**: tracing subscriber setup for the binary
//! - **OccupancyStatistics / TrafficStatistics**: aggregate counts
//! - **TrafficSimulator**: concurrent arrivals and departures against a facility
//!
//! # Usage Example
//!
//! ```rust
//! use multilevel_parking::facility::ParkingFacility;
//! use multilevel_parking::simulation::*;
//! use multilevel_parking::types::*;
//!
//! let facility = ParkingFacility::from_config(&FacilityConfig::default());
//! let traffic = TrafficConfig { workers: 2, arrivals_per_worker: 20, seed: Some(1), ..Default::default() };
//!
//! let stats = TrafficSimulator::new(&facility, traffic).run();
//! assert_eq!(stats.arrivals, 40);
//! ```

pub mod error;
pub mod logging;
pub mod statistics;
pub mod traffic;

// Re-export all public types for convenience
pub use error::*;
pub use logging::*;
pub use statistics::*;
pub use traffic::*;
