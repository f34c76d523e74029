use super::vector_2d::{add, dot, norm_sq, scale, sub};
use super::Point2;

/// Returns the squared distance from `point` to the closed segment `seg1`–`seg2`.
///
/// A zero-length segment degenerates to the squared point-to-point distance.
#[must_use]
pub fn point_segment_distance_sq(point: &Point2, seg1: &Point2, seg2: &Point2) -> f64 {
    let dir = sub(seg2, seg1);
    let len_sq = norm_sq(&dir);

    if len_sq == 0.0 {
        return norm_sq(&sub(point, seg1));
    }

    // Project onto the supporting line, clamp to the segment.
    let t = (dot(&sub(point, seg1), &dir) / len_sq).clamp(0.0, 1.0);
    let closest = add(seg1, &scale(t, &dir));

    norm_sq(&sub(point, &closest))
}

/// Returns a lower bound on the distance from `p` to the boundary of triangle `a, b, c`.
///
/// Every point of an edge `K–L` lies within half the edge length of `K` or of `L`,
/// so the distance is at least `min(|K - p|, |L - p|) - |K - L| / 2` for some edge.
/// The bound is never larger than the true distance but can be far smaller.
#[must_use]
pub fn distance_lower_bound(p: &Point2, a: &Point2, b: &Point2, c: &Point2) -> f64 {
    let (a, b, c) = (sub(a, p), sub(b, p), sub(c, p));

    [(a, b), (b, c), (c, a)]
        .iter()
        .map(|(k, l)| {
            let half_side = 0.5 * norm_sq(&sub(k, l)).sqrt();
            let k_dist = norm_sq(k).sqrt();
            let l_dist = norm_sq(l).sqrt();
            (k_dist - half_side).min(l_dist - half_side)
        })
        .fold(f64::INFINITY, f64::min)
}
