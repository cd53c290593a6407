use super::{Point2, TOLERANCE};

/// Tests whether two segments cross at an interior point.
///
/// The longer segment is normalized onto the +x axis (translate its start
/// to the origin, rotate its far endpoint to `(len, 0)`); in that frame the
/// other segment crosses iff its endpoints straddle the axis and the
/// interpolated axis crossing falls within `[0, len]`.
///
/// Parallel segments within [`TOLERANCE`] never cross, so collinear
/// overlaps go undetected. A segment ending on the other's interior does
/// register as a crossing; callers that must ignore endpoint contact skip
/// incident segments before calling.
#[must_use]
pub fn segments_cross(a0: &Point2, a1: &Point2, b0: &Point2, b1: &Point2) -> bool {
    // Swapping so the longer segment is the reference axis keeps the
    // predicate symmetric in its two arguments.
    let len_a = nalgebra::distance(a0, a1);
    let len_b = nalgebra::distance(b0, b1);
    let (r0, r1, s0, s1) = if len_a < len_b {
        (b0, b1, a0, a1)
    } else {
        (a0, a1, b0, b1)
    };

    let dir = r1 - r0;
    let len = dir.norm();
    if len < TOLERANCE {
        // Both segments are degenerate points.
        return false;
    }
    let cos_t = dir.x / len;
    let sin_t = dir.y / len;

    // Translate to the reference start, then rotate the reference onto +x.
    let to_frame = |p: &Point2| -> (f64, f64) {
        let d = p - r0;
        (d.x * cos_t + d.y * sin_t, -d.x * sin_t + d.y * cos_t)
    };
    let (s0x, s0y) = to_frame(s0);
    let (s1x, s1y) = to_frame(s1);

    if (s0y - s1y).abs() < TOLERANCE {
        // Parallel to the reference axis.
        return false;
    }
    if s0y.max(s1y) < 0.0 || s0y.min(s1y) > 0.0 {
        // Both endpoints strictly on one side of the axis.
        return false;
    }

    // Interpolate where the other segment meets the reference axis.
    let intercept = s0x - s0y * (s1x - s0x) / (s1y - s0y);
    (0.0..=len).contains(&intercept)
}
