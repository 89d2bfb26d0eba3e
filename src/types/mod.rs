//! Core types and identifiers for the parking allocator
//!
//! This module contains fundamental types, identifiers, and configuration structures
//! used throughout the allocator.
//!
//! # Overview
//!
//! - **Identifiers**: floor numbers, spot numbers and license plates
//! - **Enums**: vehicle categories and report output formats
//! - **Vehicle**: a license plate tagged with its category
//! - **Configuration**: facility layout and traffic settings with validation and CLI support
//!
//! # Usage Example
//!
//! ```rust
//! use multilevel_parking::types::*;
//!
//! let car = Vehicle::car("ABC123");
//! assert_eq!(car.vehicle_type(), VehicleType::Car);
//!
//! let config = FacilityConfig::default();
//! assert!(config.validate().is_ok());
//! ```

pub mod config;
pub mod enums;
pub mod identifiers;
pub mod vehicle;

// Re-export all public types for convenience
pub use config::*;
pub use enums::*;
pub use identifiers::*;
pub use vehicle::*;
