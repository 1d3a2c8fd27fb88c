//! Satellite and Sun position prediction using the Plan13 algorithm.
//!
//! Plan13 is a simplified perturbation model for Earth-orbiting satellites,
//! originally formulated by James Miller G3RUH. It propagates a two-line
//! element set with secular J2 and decay corrections, and comes with a
//! low-order solar ephemeris so that the Sun's ground track can be computed
//! on the same time scale.
//!
//! ```
//! use plan13::observer::Observer;
//! use plan13::satellite::Satellite;
//! use plan13::time::Instant;
//!
//! let sat = Satellite::from_tle(
//!     "ISS (ZARYA)",
//!     "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9994",
//!     "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.49511818335342",
//! )
//! .unwrap();
//! let station = Observer::new("home", 37.0, -122.0, 100.0);
//!
//! let when = Instant::from_ymd_hms(2024, 1, 1, 19, 31, 0);
//! let state = sat.predict(when).unwrap();
//! let look = station.look_angles(&state.geocentric.position);
//! assert!(look.elevation > 0.0);
//! ```
//!
//! One caveat carried over from the reference algorithm: feeding the Sun's
//! geocentric direction (a unit vector) into [`Observer::look_angles`]
//! produces meaningless elevations, because the observer position is in
//! kilometers. See [`sun::SunState`] for details.
//!
//! [`Observer::look_angles`]: observer::Observer::look_angles

pub mod error;
pub mod math;
pub mod model;
pub mod observer;
pub mod satellite;
pub mod sun;
pub mod time;
pub mod tle;
