use crate::geometry::Triangle;
use crate::math::distance_2d::distance_lower_bound;
use crate::math::Point2;

/// Returns a predicate that keeps every triangle that could overlap the disk
/// of `radius` around `center`.
///
/// The test compares a lower bound on the distance to the triangle against
/// `radius`, so a triangle that overlaps the disk is never rejected. Some
/// triangles just outside the disk are kept as well.
#[must_use]
pub fn region_filter(center: Point2, radius: f64) -> impl Fn(&Triangle) -> bool + Copy {
    move |triangle: &Triangle| {
        distance_lower_bound(&center, &triangle.a, &triangle.b, &triangle.c) <= radius
    }
}
