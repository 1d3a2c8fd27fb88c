//! Low-order solar ephemeris.
//!
//! Mean solar longitude plus two equation-of-centre terms, with a fixed
//! mean obliquity; good to a fraction of a degree over the span its
//! constant set was fitted for (see [`crate::model::SolarModel`]).

use std::f64::consts::{PI, TAU};

use nalgebra::{Rotation3, Vector3};

use crate::model::Model;
use crate::satellite::SubPoint;
use crate::time::Instant;

/// The Sun's direction at one instant, as unit vectors.
///
/// Unlike [`SatelliteState`](crate::satellite::SatelliteState), these are
/// directions, not positions: the Sun is treated as infinitely far away.
/// Feeding `geocentric` to
/// [`Observer::look_angles`](crate::observer::Observer::look_angles)
/// subtracts a station position measured in kilometers from a unit vector,
/// which pins the elevation near -90 degrees regardless of where the Sun
/// actually is. The reference algorithm has the same defect, and it is kept
/// here for compatibility; [`SunState::subpoint`] is unaffected.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SunState {
    /// Unit direction in the equatorial (inertial) frame.
    pub equatorial: Vector3<f64>,
    /// Unit direction in the Earth-fixed frame.
    pub geocentric: Vector3<f64>,
}

impl SunState {
    /// The geographic point directly beneath the Sun.
    pub fn subpoint(&self) -> SubPoint {
        SubPoint {
            latitude: self.geocentric.z.clamp(-1.0, 1.0).asin().to_degrees(),
            longitude: self.geocentric.y.atan2(self.geocentric.x).to_degrees(),
        }
    }
}

/// Solar position model, independent of any satellite.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Sun {
    model: Model,
}

impl Sun {
    pub fn new() -> Sun {
        Sun::default()
    }

    pub fn with_model(model: Model) -> Sun {
        Sun { model }
    }

    /// The Sun's direction at `time`. Infallible: the ephemeris is closed
    /// form.
    pub fn predict(&self, time: Instant) -> SunState {
        let solar = &self.model.solar;
        let earth = &self.model.earth;

        let t = (time.day() - solar.reference_day()) as f64 + time.fraction();

        let ghae = solar.gha_aries.to_radians() + t * earth.rotation_rate();
        // the mean Sun advances by the difference between the sidereal and
        // solar day, one turn per tropical year
        let mean_longitude = solar.gha_aries.to_radians() + t * (TAU / earth.tropical_year) + PI;
        let mean_anomaly = (solar.mean_anomaly + t * solar.mean_anomaly_rate).to_radians();
        let true_longitude = mean_longitude
            + solar.centre1 * mean_anomaly.sin()
            + solar.centre2 * (2.0 * mean_anomaly).sin();

        let (sin_lon, cos_lon) = true_longitude.sin_cos();
        let (sin_obl, cos_obl) = solar.obliquity.to_radians().sin_cos();
        let equatorial = Vector3::new(cos_lon, sin_lon * cos_obl, sin_lon * sin_obl);

        // same Earth-spin step as for satellites
        let spin = Rotation3::from_axis_angle(&Vector3::z_axis(), -ghae);
        SunState {
            equatorial,
            geocentric: spin * equatorial,
        }
    }
}
