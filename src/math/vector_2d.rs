use super::Point2;

/// Component-wise sum `p + q`.
#[must_use]
pub fn add(p: &Point2, q: &Point2) -> Point2 {
    Point2::from(p.coords + q.coords)
}

/// Component-wise difference `p - q`, returned as a point relative to the origin.
#[must_use]
pub fn sub(p: &Point2, q: &Point2) -> Point2 {
    Point2::from(p.coords - q.coords)
}

/// Scalar multiple `k * p`.
#[must_use]
pub fn scale(k: f64, p: &Point2) -> Point2 {
    Point2::from(p.coords * k)
}

/// Dot product `p.x * q.x + p.y * q.y`.
#[must_use]
pub fn dot(p: &Point2, q: &Point2) -> f64 {
    p.x * q.x + p.y * q.y
}

/// Squared Euclidean magnitude `p.x² + p.y²`.
#[must_use]
pub fn norm_sq(p: &Point2) -> f64 {
    p.x * p.x + p.y * p.y
}

/// Moves `from` towards `to` by the fraction `t` of their separation.
#[must_use]
pub fn lerp(from: &Point2, to: &Point2, t: f64) -> Point2 {
    add(from, &scale(t, &sub(to, from)))
}
