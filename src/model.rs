//! Physical and ephemeris constants, bundled as injectable values.
//!
//! Everything the propagator needs to know about the Earth and the Sun
//! lives here, so that a refreshed constant set (say, a re-fitted solar
//! ephemeris epoch) is a new value rather than a recompile.

use std::f64::consts::TAU;

use crate::time::day_number;

/// Earth figure and gravity constants.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EarthModel {
    /// Equatorial radius of the reference ellipsoid, km.
    pub equatorial_radius: f64,
    /// Flattening of the reference ellipsoid.
    pub flattening: f64,
    /// Gravitational parameter GM, km^3/s^2.
    pub mu: f64,
    /// Second zonal harmonic of the gravity field.
    pub j2: f64,
    /// Tropical year, days.
    pub tropical_year: f64,
}

impl EarthModel {
    pub const WGS84: EarthModel = EarthModel {
        equatorial_radius: 6378.137,
        flattening: 1.0 / 298.257224,
        mu: 3.986e5,
        j2: 1.08263e-3,
        tropical_year: 365.2421874,
    };

    pub fn polar_radius(&self) -> f64 {
        self.equatorial_radius * (1.0 - self.flattening)
    }

    /// Earth's rotation rate relative to the stars, radians per day:
    /// one full turn plus the sidereal correction.
    pub fn rotation_rate(&self) -> f64 {
        TAU + TAU / self.tropical_year
    }

    pub fn rotation_rate_per_second(&self) -> f64 {
        self.rotation_rate() / 86400.0
    }
}

impl Default for EarthModel {
    fn default() -> Self {
        EarthModel::WGS84
    }
}

/// Sidereal reference and low-order solar ephemeris coefficients.
///
/// Fitted over a bounded span of years; angles in degrees, rates in
/// degrees per day.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarModel {
    /// Reference epoch: Jan 0.0 of this year.
    pub epoch_year: i32,
    /// Greenwich hour angle of Aries at the reference epoch.
    pub gha_aries: f64,
    /// Sun's mean anomaly at the reference epoch.
    pub mean_anomaly: f64,
    /// Sun's mean anomaly rate.
    pub mean_anomaly_rate: f64,
    /// Equation-of-centre harmonic coefficients, radians.
    pub centre1: f64,
    pub centre2: f64,
    /// Mean obliquity of the ecliptic.
    pub obliquity: f64,
}

impl SolarModel {
    /// Fit at Jan 0.0 2014, usable until roughly 2030.
    pub const EPOCH_2014: SolarModel = SolarModel {
        epoch_year: 2014,
        gha_aries: 99.5828,
        mean_anomaly: 356.4105,
        mean_anomaly_rate: 0.98560028,
        centre1: 0.03340,
        centre2: 0.00035,
        obliquity: 23.4375,
    };

    /// The superseded fit at Jan 0.0 2000, usable until roughly 2015.
    pub const EPOCH_2000: SolarModel = SolarModel {
        epoch_year: 2000,
        gha_aries: 98.9821,
        mean_anomaly: 356.0507,
        mean_anomaly_rate: 0.98560028,
        centre1: 0.03342,
        centre2: 0.00035,
        obliquity: 23.4393,
    };

    /// Day number of the reference epoch (Jan 0.0 of the epoch year).
    pub fn reference_day(&self) -> i64 {
        day_number(self.epoch_year, 1, 0)
    }
}

impl Default for SolarModel {
    fn default() -> Self {
        SolarModel::EPOCH_2014
    }
}

/// The full constant set a prediction run needs.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Model {
    pub earth: EarthModel,
    pub solar: SolarModel,
}
