pub mod distance_2d;
pub mod vector_2d;

use std::f64::consts::PI;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// Global geometric tolerance for floating-point comparisons.
pub const TOLERANCE: f64 = 1e-10;

/// The golden ratio φ = (1 + √5) / 2.
pub const GOLDEN_RATIO: f64 = 1.618_033_988_749_895;

/// φ⁻¹ = φ - 1 = (√5 - 1) / 2, the Robinson triangle subdivision ratio.
pub const GOLDEN_RATIO_INV: f64 = 0.618_033_988_749_895;

/// One tenth of a full turn, in radians.
pub const TENTH_TURN: f64 = 0.2 * PI;
