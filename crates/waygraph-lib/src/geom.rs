//! Coordinate pairs, bearing calculators, and circular angle arithmetic.
//!
//! Headings and bearings are compass directions: degrees clockwise from
//! north, wrapping at 360. Bearing computation is a capability consumed
//! through [`BearingCalc`] so graph code stays independent of the projection
//! in use; two implementations are provided.

use serde::{Deserialize, Serialize};

/// Coordinate pair in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Directional bearing between two coordinates.
pub trait BearingCalc {
    /// Initial bearing from `from` towards `to`, in degrees clockwise from
    /// north, in `[0, 360)`.
    fn bearing(&self, from: GeoPoint, to: GeoPoint) -> f64;
}

/// Planar approximation: latitude/longitude are treated as a flat plane.
///
/// Adequate for the short first segment of an edge and exact for
/// axis-aligned fixtures, which makes it the calculator of choice in tests.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlanarBearing;

impl BearingCalc for PlanarBearing {
    fn bearing(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        (to.lon - from.lon)
            .atan2(to.lat - from.lat)
            .to_degrees()
            .rem_euclid(360.0)
    }
}

/// Great-circle initial bearing on a sphere.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreatCircleBearing;

impl BearingCalc for GreatCircleBearing {
    fn bearing(&self, from: GeoPoint, to: GeoPoint) -> f64 {
        let lat1 = from.lat.to_radians();
        let lat2 = to.lat.to_radians();
        let dlon = (to.lon - from.lon).to_radians();
        let y = dlon.sin() * lat2.cos();
        let x = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * dlon.cos();
        y.atan2(x).to_degrees().rem_euclid(360.0)
    }
}

/// Circular angular difference between two headings, in `[0, 180]`.
///
/// Computed as `d = |a - b| mod 360` folded to `min(d, 360 - d)`, so values
/// wrapping across 0/360 compare correctly.
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let d = (a - b).abs().rem_euclid(360.0);
    d.min(360.0 - d)
}
