//! Newton-Raphson solver for Kepler's equation.

use crate::error::KeplerError;

/// Convergence threshold on the Newton correction, radians.
pub const TOLERANCE: f64 = 1e-5;

/// Iteration bound; for elliptical eccentricities the solver converges in
/// a handful of steps, so hitting this means the input was pathological.
pub const MAX_ITERATIONS: usize = 50;

/// Solves Kepler's equation `E - e·sin(E) = M` for the eccentric anomaly.
///
/// Newton-Raphson starting from `E = M`. Returns the iterate at which the
/// computed correction first falls below [`TOLERANCE`], without applying
/// that last correction; downstream position math consumes the trig of
/// exactly this value.
///
/// A non-finite correction (eccentricity at or beyond 1 with the anomaly
/// near zero, or non-finite input) never passes the tolerance test, so
/// such inputs run out the iteration bound and report an error.
pub fn solve(mean_anomaly: f64, eccentricity: f64) -> Result<f64, KeplerError> {
    let mut ea = mean_anomaly;
    for _ in 0..MAX_ITERATIONS {
        let delta =
            (ea - eccentricity * ea.sin() - mean_anomaly) / (1.0 - eccentricity * ea.cos());
        if delta.abs() < TOLERANCE {
            return Ok(ea);
        }
        ea -= delta;
    }
    Err(KeplerError {
        mean_anomaly,
        eccentricity,
        iterations: MAX_ITERATIONS,
    })
}
