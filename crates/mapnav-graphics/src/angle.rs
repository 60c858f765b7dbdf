//! Angle helpers for keeping bearings continuous across the ±180° seam.

/// Wraps `n` into the half-open range `(min, max]`.
pub fn wrap(n: f64, min: f64, max: f64) -> f64 {
    let d = max - min;
    let w = ((n - min) % d + d) % d + min;
    if w == min {
        max
    } else {
        w
    }
}

/// Picks the representation of `bearing` (in degrees) closest to
/// `current_bearing`, so that successive values never jump by 360°.
///
/// The bearing is first wrapped into `(-180, 180]` and then shifted by a
/// full turn in either direction when that lands nearer to the reference.
pub fn normalize_bearing(bearing: f64, current_bearing: f64) -> f64 {
    let mut bearing = wrap(bearing, -180.0, 180.0);
    let diff = (bearing - current_bearing).abs();
    if (bearing - 360.0 - current_bearing).abs() < diff {
        bearing -= 360.0;
    }
    if (bearing + 360.0 - current_bearing).abs() < diff {
        bearing += 360.0;
    }
    bearing
}
