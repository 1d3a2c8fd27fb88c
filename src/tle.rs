//! Two-line element set parsing.
//!
//! The element set is a fixed-width, 69-column text record. Fields are cut
//! out by byte column and parsed individually; a field that does not parse
//! is reported as an error rather than silently zeroed, since a zeroed
//! element degrades every later prediction.

use std::ops::Range;

use log::debug;

use crate::error::TleError;
use crate::model::EarthModel;
use crate::time::{day_number, Instant};

/// Width of a TLE record line, not counting any trailing newline.
pub const LINE_LEN: usize = 69;

/// One satellite's orbital elements, plus the secular constants derived
/// from them at parse time.
///
/// Angles are stored in radians, mean motion in radians per day, distances
/// in kilometers.
#[derive(Debug, Clone, PartialEq)]
pub struct Elements {
    pub name: String,
    pub catalog_number: i64,
    pub epoch_year: i32,
    pub epoch: Instant,
    pub inclination: f64,
    pub raan: f64,
    pub eccentricity: f64,
    pub arg_perigee: f64,
    pub mean_anomaly: f64,
    /// Mean motion, radians/day.
    pub mean_motion: f64,
    /// First derivative of mean motion, radians/day^2.
    pub decay_rate: f64,
    /// Orbit number at the epoch.
    pub orbit_number: i64,

    /// Mean motion, radians/second.
    pub n0: f64,
    /// Semi-major axis from Kepler's third law, km.
    pub semi_major: f64,
    /// Semi-minor axis, km.
    pub semi_minor: f64,
    /// Nodal regression rate from the J2 perturbation, radians/day.
    pub nodal_rate: f64,
    /// Argument-of-perigee rotation rate, radians/day.
    pub perigee_rate: f64,
    /// Dimensionless decay time-scaling factor.
    pub decay_factor: f64,
}

impl Elements {
    /// Parses a two-line element set against the WGS-84 Earth model.
    pub fn parse(name: &str, line1: &str, line2: &str) -> Result<Elements, TleError> {
        Elements::parse_with_model(name, line1, line2, &EarthModel::WGS84)
    }

    /// Parses a two-line element set, deriving the secular constants from
    /// the given Earth model.
    pub fn parse_with_model(
        name: &str,
        line1: &str,
        line2: &str,
        earth: &EarthModel,
    ) -> Result<Elements, TleError> {
        let l1 = check_line(1, line1)?;
        let l2 = check_line(2, line2)?;

        let catalog_number = field_i64(2, l2, 2..7, "catalog number")?;
        let yy = field_i64(1, l1, 18..20, "epoch year")?;
        // Plan13's pivot: two-digit years below 58 are in the 2000s
        let epoch_year = (if yy < 58 { 2000 + yy } else { 1900 + yy }) as i32;
        let epoch_doy = field_f64(1, l1, 20..32, "epoch day")?;
        let decay_rate = field_f64(1, l1, 33..43, "decay rate")?.to_radians();

        let inclination = field_f64(2, l2, 8..16, "inclination")?.to_radians();
        let raan = field_f64(2, l2, 17..25, "RAAN")?.to_radians();
        let eccentricity = field_i64(2, l2, 26..33, "eccentricity")? as f64 * 1e-7;
        let arg_perigee = field_f64(2, l2, 34..42, "argument of perigee")?.to_radians();
        let mean_anomaly = field_f64(2, l2, 43..51, "mean anomaly")?.to_radians();
        let mean_motion = field_f64(2, l2, 52..63, "mean motion")? * std::f64::consts::TAU;
        let orbit_number = field_i64(2, l2, 63..68, "orbit number")?;

        let epoch = Instant::new(
            day_number(epoch_year, 1, 0) + epoch_doy.trunc() as i64,
            epoch_doy.fract(),
        );

        let n0 = mean_motion / 86400.0;
        let semi_major = (earth.mu / (n0 * n0)).powf(1.0 / 3.0);
        let semi_minor = semi_major * (1.0 - eccentricity * eccentricity).sqrt();

        let pc = earth.equatorial_radius * semi_major / (semi_minor * semi_minor);
        let pc = 1.5 * earth.j2 * pc * pc * mean_motion;
        let cos_incl = inclination.cos();
        let nodal_rate = -pc * cos_incl;
        let perigee_rate = pc * (5.0 * cos_incl * cos_incl - 1.0) / 2.0;
        let decay_factor = -2.0 * decay_rate / (3.0 * mean_motion);

        debug!(
            "parsed TLE for {name}: catalog {catalog_number}, epoch {epoch}, \
             orbit {orbit_number}"
        );

        Ok(Elements {
            name: name.to_owned(),
            catalog_number,
            epoch_year,
            epoch,
            inclination,
            raan,
            eccentricity,
            arg_perigee,
            mean_anomaly,
            mean_motion,
            decay_rate,
            orbit_number,
            n0,
            semi_major,
            semi_minor,
            nodal_rate,
            perigee_rate,
            decay_factor,
        })
    }
}

fn check_line(line: u8, text: &str) -> Result<&str, TleError> {
    // byte columns are only meaningful in ASCII, and ASCII guarantees the
    // column ranges fall on character boundaries
    if !text.is_ascii() {
        return Err(TleError::Encoding { line });
    }
    if text.len() < LINE_LEN {
        return Err(TleError::Length {
            line,
            length: text.len(),
        });
    }
    Ok(text)
}

fn field_f64(
    line: u8,
    text: &str,
    columns: Range<usize>,
    field: &'static str,
) -> Result<f64, TleError> {
    let text = text[columns].trim();
    text.parse().map_err(|_| TleError::Field {
        line,
        field,
        text: text.to_owned(),
    })
}

fn field_i64(
    line: u8,
    text: &str,
    columns: Range<usize>,
    field: &'static str,
) -> Result<i64, TleError> {
    let text = text[columns].trim();
    text.parse().map_err(|_| TleError::Field {
        line,
        field,
        text: text.to_owned(),
    })
}
