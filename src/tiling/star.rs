use crate::geometry::{Triangle, TriangleType};
use crate::math::vector_2d::add;
use crate::math::{Point2, TENTH_TURN};

/// Unit vector at an odd multiple of a tenth turn: `(2k + 1) · π/5`.
fn spoke(k: i32) -> Point2 {
    let angle = f64::from(2 * k + 1) * TENTH_TURN;
    Point2::new(angle.cos(), angle.sin())
}

/// Builds the ten-triangle "sun" seed around the origin.
///
/// For each `k` in `0..5` the pair `(0, B(k), C(k))`, `(0, B(k-1), C(k))`
/// is emitted, where `B(k)` is a unit spoke and `C(k) = B(k) + B(k-1)`.
/// All triangles are obtuse.
#[must_use]
pub fn initial_star() -> Vec<Triangle> {
    let origin = Point2::origin();
    let mut triangles = Vec::with_capacity(10);

    for k in 0..5 {
        let b = spoke(k);
        let b_prev = spoke(k - 1);
        let c = add(&b, &b_prev);

        triangles.push(Triangle::new(TriangleType::Obtuse, origin, b, c));
        triangles.push(Triangle::new(TriangleType::Obtuse, origin, b_prev, c));
    }

    triangles
}
