use std::f64::consts::PI;

use super::{Point2, Vector2};

/// Normalizes an angular difference into `[0, 2π)`.
#[must_use]
pub fn normalize_angle(angle: f64) -> f64 {
    let two_pi = 2.0 * PI;
    let wrapped = angle % two_pi;
    if wrapped < 0.0 {
        wrapped + two_pi
    } else {
        wrapped
    }
}

/// Returns the angle of the direction from `origin` to `target`.
#[must_use]
pub fn angle_to(origin: &Point2, target: &Point2) -> f64 {
    let d: Vector2 = target - origin;
    d.y.atan2(d.x)
}
