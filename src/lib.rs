//! Smooth elevation profiles of hiking routes built with natural cubic splines.
//!
//! Sparse GPS elevation samples are turned into a cumulative distance/elevation
//! [Profile], a natural cubic [Spline] is fitted through it and evaluated densely
//! for tabulation and route statistics.
//!
//! # Example
//! ```
//! use elevation_spline::{Knot, Spline, SplineError};
//! use assert_approx_eq::assert_approx_eq;
//!
//! let knots = vec![
//!     Knot::new(0.0, 0.0),
//!     Knot::new(1.0, 1.0),
//!     Knot::new(2.0, 0.0),
//!     Knot::new(3.0, 1.0),
//! ];
//! let spline = Spline::new(knots).unwrap();
//!
//! assert_approx_eq!(1.0, spline.interpolate(1.0).unwrap(), 1e-9);
//! assert_approx_eq!(0.5, spline.interpolate(1.5).unwrap(), 1e-9);
//! assert!(matches!(spline.interpolate(3.5), Err(SplineError::OutOfRange { .. })));
//! ```

mod error;
mod knot;
mod polynomial;
mod spline;
mod tridiagonal;

pub mod analysis;
pub mod report;
pub mod route;

pub use error::{RouteError, SplineError};
pub use knot::Knot;
pub use route::{GeoPoint, Profile};
pub use spline::{SegmentCoefficients, Spline, MIN_KNOTS};
pub use tridiagonal::TridiagonalSystem;
