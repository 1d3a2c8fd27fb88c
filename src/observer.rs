//! A ground station and its local reference frame.

use nalgebra::Vector3;

use crate::model::EarthModel;

/// Elevation and azimuth of a target as seen from a ground station, in
/// degrees. Azimuth is measured clockwise from north in `[0, 360)`;
/// elevation is in `[-90, 90]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LookAngles {
    pub azimuth: f64,
    pub elevation: f64,
}

/// A fixed ground station.
///
/// Construction derives the local up/east/north unit vectors and the
/// station's Earth-fixed position and velocity once, on an oblate-spheroid
/// Earth; everything is immutable afterwards.
#[derive(Debug, Clone, PartialEq)]
pub struct Observer {
    name: String,
    up: Vector3<f64>,
    east: Vector3<f64>,
    north: Vector3<f64>,
    position: Vector3<f64>,
    velocity: Vector3<f64>,
}

impl Observer {
    /// Builds a station on the WGS-84 ellipsoid. Latitude and longitude in
    /// degrees, height above the ellipsoid in meters.
    pub fn new(name: &str, latitude: f64, longitude: f64, height: f64) -> Observer {
        Observer::with_model(name, latitude, longitude, height, &EarthModel::WGS84)
    }

    /// Builds a station on the given Earth model.
    pub fn with_model(
        name: &str,
        latitude: f64,
        longitude: f64,
        height: f64,
        earth: &EarthModel,
    ) -> Observer {
        let lat = latitude.to_radians();
        let lon = longitude.to_radians();
        let height_km = height / 1000.0;

        let (sin_lat, cos_lat) = lat.sin_cos();
        let (sin_lon, cos_lon) = lon.sin_cos();

        let up = Vector3::new(cos_lat * cos_lon, cos_lat * sin_lon, sin_lat);
        let east = Vector3::new(-sin_lon, cos_lon, 0.0);
        let north = Vector3::new(-sin_lat * cos_lon, -sin_lat * sin_lon, cos_lat);

        let re2 = earth.equatorial_radius * earth.equatorial_radius;
        let rp2 = earth.polar_radius() * earth.polar_radius();
        let d = (re2 * cos_lat * cos_lat + rp2 * sin_lat * sin_lat).sqrt();
        let r_equatorial = re2 / d + height_km;
        let r_polar = rp2 / d + height_km;

        let position = Vector3::new(r_equatorial * up.x, r_equatorial * up.y, r_polar * up.z);

        // velocity from Earth's rotation about the z axis
        let w0 = earth.rotation_rate_per_second();
        let velocity = Vector3::new(-position.y * w0, position.x * w0, 0.0);

        Observer {
            name: name.to_owned(),
            up,
            east,
            north,
            position,
            velocity,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Earth-fixed position of the station, km.
    pub fn position(&self) -> &Vector3<f64> {
        &self.position
    }

    /// Earth-fixed velocity of the station due to Earth's rotation, km/s.
    pub fn velocity(&self) -> &Vector3<f64> {
        &self.velocity
    }

    /// Look angles toward an Earth-fixed position, km.
    ///
    /// The line of sight is normalized before projecting onto the local
    /// frame, so only the direction of `target - station` matters.
    pub fn look_angles(&self, earth_fixed: &Vector3<f64>) -> LookAngles {
        let line_of_sight = (earth_fixed - self.position).normalize();

        let up = line_of_sight.dot(&self.up);
        let east = line_of_sight.dot(&self.east);
        let north = line_of_sight.dot(&self.north);

        let mut azimuth = east.atan2(north).to_degrees();
        if azimuth < 0.0 {
            azimuth += 360.0;
        }
        // clamp against dot products straying past 1 at the zenith
        let elevation = up.clamp(-1.0, 1.0).asin().to_degrees();

        LookAngles { azimuth, elevation }
    }
}
