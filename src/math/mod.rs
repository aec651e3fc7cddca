//! # Angular and interval math
//!
//! Leaf utilities used by every other module:
//!
//! - [`angle`](crate::math::angle) – radian/degree/hour/arcsecond conversions and normalization,
//! - [`interval`](crate::math::interval) – closed and right-open intervals with clipping and
//!   modular reduction,
//! - [`polynomial`](crate::math::polynomial) – polynomials evaluated with Horner's method.

pub mod angle;
pub mod interval;
pub mod polynomial;
