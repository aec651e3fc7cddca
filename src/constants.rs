//! # Constants and type definitions for Skychart
//!
//! This module centralizes the **conversion factors**, **reference epochs** and **type aliases**
//! used throughout the crate.
//!
//! ## Overview
//!
//! - Unit conversions (degrees ↔ radians, hours ↔ radians, arcseconds ↔ radians)
//! - Reference epochs expressed as Modified Julian Dates (UTC)
//! - Core type aliases describing the unit carried by a plain `f64`
//!
//! Angles are always carried as radians internally; the aliases only document intent.

// -------------------------------------------------------------------------------------------------
// Unit conversions
// -------------------------------------------------------------------------------------------------

/// 2π, one full turn in radians
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Degrees → radians
pub const RADEG: f64 = std::f64::consts::PI / 180.0;

/// Arcseconds → radians
pub const RADSEC: f64 = std::f64::consts::PI / 648000.0;

/// Hours → radians
pub const RADH: f64 = DPI / 24.0;

/// Number of minutes (or seconds) in one degree (or minute)
pub const SEXAGESIMAL_BASE: f64 = 60.0;

/// Number of hours in a day
pub const HOURS_PER_DAY: f64 = 24.0;

/// Number of days in a Julian century
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Length of the tropical year in days
pub const TROPICAL_YEAR: f64 = 365.242191;

// -------------------------------------------------------------------------------------------------
// Reference epochs
// -------------------------------------------------------------------------------------------------

/// MJD of epoch J2000.0 (2000-01-01 12:00:00 UTC)
pub const T2000: f64 = 51544.5;

/// MJD of epoch J2010.0 (2009-12-31 00:00:00 UTC)
pub const T2010: f64 = 55196.0;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Angle in radians
pub type Radian = f64;
/// Angle in degrees
pub type Degree = f64;
/// Angle in hours
pub type Hour = f64;
/// Angle in arcseconds
pub type ArcSec = f64;
/// Modified Julian Date (days, UTC scale)
pub type MJD = f64;
