//! Orbit propagation for a single satellite.

use std::f64::consts::TAU;

use log::warn;
use nalgebra::{Rotation3, Vector3};

use crate::error::{KeplerError, TleError};
use crate::math::kepler;
use crate::model::Model;
use crate::time::Instant;
use crate::tle::Elements;

/// Position (km) and velocity (km/s) in one coordinate frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartesianState {
    pub position: Vector3<f64>,
    pub velocity: Vector3<f64>,
}

/// The satellite's state at one instant, in the celestial (inertial) and
/// geocentric (Earth-fixed) frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SatelliteState {
    pub celestial: CartesianState,
    pub geocentric: CartesianState,
    /// Instantaneous orbital radius, km.
    pub radius: f64,
    /// Orbit number, counted from the element set's count at epoch.
    pub orbit_number: i64,
}

/// A point on the ground track, in degrees. Longitude is in `[-180, 180]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SubPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl SatelliteState {
    /// The geographic point directly beneath the satellite.
    pub fn subpoint(&self) -> SubPoint {
        let p = &self.geocentric.position;
        SubPoint {
            latitude: (p.z / self.radius).clamp(-1.0, 1.0).asin().to_degrees(),
            longitude: p.y.atan2(p.x).to_degrees(),
        }
    }
}

/// A satellite, owning its orbital elements and the constant set used to
/// propagate them.
#[derive(Debug, Clone, PartialEq)]
pub struct Satellite {
    elements: Elements,
    model: Model,
}

impl Satellite {
    pub fn new(elements: Elements, model: Model) -> Satellite {
        Satellite { elements, model }
    }

    /// Parses a two-line element set and pairs it with the default model.
    pub fn from_tle(name: &str, line1: &str, line2: &str) -> Result<Satellite, TleError> {
        let model = Model::default();
        let elements = Elements::parse_with_model(name, line1, line2, &model.earth)?;
        Ok(Satellite { elements, model })
    }

    pub fn name(&self) -> &str {
        &self.elements.name
    }

    pub fn elements(&self) -> &Elements {
        &self.elements
    }

    /// Propagates the elements to `time` and returns a fresh state value.
    ///
    /// The same instant always yields the same state; the only failure mode
    /// is Kepler-solver non-convergence on pathological elements.
    pub fn predict(&self, time: Instant) -> Result<SatelliteState, KeplerError> {
        let el = &self.elements;
        let ecc = el.eccentricity;

        let t = time.days_since(el.epoch);

        // the decay term scales the axes and the secular rates linearly in
        // elapsed time
        let dt = el.decay_factor * t / 2.0;
        let kd = 1.0 + 4.0 * dt;
        let kdp = 1.0 - 7.0 * dt;

        // mean anomaly, folded into [0, 2pi) with whole revolutions going
        // into the orbit count
        let m = el.mean_anomaly + el.mean_motion * t * (1.0 - 3.0 * dt);
        let revolutions = (m / TAU).floor();
        let m = m - revolutions * TAU;
        let orbit_number = el.orbit_number + revolutions as i64;

        let ea = kepler::solve(m, ecc).map_err(|err| {
            warn!("{}: {err}", el.name);
            err
        })?;
        let (sin_ea, cos_ea) = ea.sin_cos();
        let dnom = 1.0 - ecc * cos_ea;

        let a = el.semi_major * kd;
        let b = el.semi_minor * kd;
        let radius = a * dnom;

        // position and velocity in the orbital plane, periapsis along +x
        let plane_position = Vector3::new(a * (cos_ea - ecc), b * sin_ea, 0.0);
        let plane_velocity = Vector3::new(-a * sin_ea, b * cos_ea, 0.0) * (el.n0 / dnom);

        let arg_perigee = el.arg_perigee + el.perigee_rate * t * kdp;
        let raan = el.raan + el.nodal_rate * t * kdp;
        let orientation = rotation_from_angles(el.inclination, raan, arg_perigee);

        let celestial = CartesianState {
            position: orientation * plane_position,
            velocity: orientation * plane_velocity,
        };

        // spin the celestial frame down onto the rotating Earth
        let ghaa = self.greenwich_hour_angle_at_epoch() + self.model.earth.rotation_rate() * t;
        let spin = Rotation3::from_axis_angle(&Vector3::z_axis(), -ghaa);
        let geocentric = CartesianState {
            position: spin * celestial.position,
            velocity: spin * celestial.velocity,
        };

        Ok(SatelliteState {
            celestial,
            geocentric,
            radius,
            orbit_number,
        })
    }

    /// Greenwich hour angle of Aries at the element epoch, from the solar
    /// model's sidereal reference.
    fn greenwich_hour_angle_at_epoch(&self) -> f64 {
        let solar = &self.model.solar;
        let days = (self.elements.epoch.day() - solar.reference_day()) as f64
            + self.elements.epoch.fraction();
        solar.gha_aries.to_radians() + days * self.model.earth.rotation_rate()
    }
}

/// Moves the orbital plane into the celestial frame: periapsis is rotated
/// to the argument of perigee, the plane is tilted to the inclination, and
/// the ascending node is turned to its right ascension.
fn rotation_from_angles(incl: f64, raan: f64, arg_perigee: f64) -> Rotation3<f64> {
    Rotation3::from_axis_angle(&Vector3::z_axis(), raan)
        * Rotation3::from_axis_angle(&Vector3::x_axis(), incl)
        * Rotation3::from_axis_angle(&Vector3::z_axis(), arg_perigee)
}

#[cfg(test)]
mod tests {
    use approx::assert_abs_diff_eq;

    use super::*;

    const ISS_L1: &str = "1 25544U 98067A   24001.50000000  .00016717  00000-0  10270-3 0  9994";
    const ISS_L2: &str = "2 25544  51.6416 247.4627 0006703 130.5360 325.0288 15.49511818335342";

    // zero eccentricity, zero decay
    const CIRC_L1: &str = "1 00001U 58001A   24001.00000000  .00000000  00000-0  00000-0 0  9990";
    const CIRC_L2: &str = "2 00001  51.6000 100.0000 0000000   0.0000   0.0000 15.00000000    10";

    #[test]
    fn predict_is_idempotent() {
        let sat = Satellite::from_tle("ISS", ISS_L1, ISS_L2).unwrap();
        let time = Instant::from_ymd_hms(2024, 1, 1, 19, 31, 0);
        let first = sat.predict(time).unwrap();
        let second = sat.predict(time).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn circular_orbit_has_constant_radius() {
        let sat = Satellite::from_tle("circular", CIRC_L1, CIRC_L2).unwrap();
        let reference = sat.elements().semi_major;
        for day in 1..=10 {
            let time = Instant::from_ymd_hms(2024, 1, day, 6, 0, 0);
            let state = sat.predict(time).unwrap();
            assert_abs_diff_eq!(state.radius, reference, epsilon = 1e-9);
        }
    }

    #[test]
    fn orbit_number_counts_revolutions() {
        let sat = Satellite::from_tle("ISS", ISS_L1, ISS_L2).unwrap();
        let at_epoch = sat.predict(sat.elements().epoch).unwrap();
        assert_eq!(at_epoch.orbit_number, 33534);

        let later = sat
            .predict(Instant::from_ymd_hms(2024, 1, 2, 3, 30, 0))
            .unwrap();
        assert_eq!(later.orbit_number, 33544);
    }

    #[test]
    fn subpoint_longitude_stays_in_range() {
        let sat = Satellite::from_tle("ISS", ISS_L1, ISS_L2).unwrap();
        for hour in 0..24 {
            let time = Instant::from_ymd_hms(2024, 1, 3, hour, 17, 0);
            let sub = sat.predict(time).unwrap().subpoint();
            assert!((-180.0..=180.0).contains(&sub.longitude), "{}", sub.longitude);
            assert!((-90.0..=90.0).contains(&sub.latitude), "{}", sub.latitude);
        }
    }

    #[test]
    fn celestial_and_geocentric_radii_agree() {
        let sat = Satellite::from_tle("ISS", ISS_L1, ISS_L2).unwrap();
        let state = sat
            .predict(Instant::from_ymd_hms(2024, 1, 1, 12, 0, 0))
            .unwrap();
        // the Earth-spin rotation preserves length
        assert_abs_diff_eq!(
            state.celestial.position.norm(),
            state.geocentric.position.norm(),
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(state.celestial.position.norm(), state.radius, epsilon = 1e-6);
    }
}
