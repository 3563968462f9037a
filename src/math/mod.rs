pub mod gauss_jordan;

pub use gauss_jordan::{invert, multiply, solve};

/// 3D point type.
pub type Point3 = nalgebra::Point3<f64>;

/// 6x6 coefficient matrix of one surface's boundary-condition system.
pub type Matrix6 = nalgebra::Matrix6<f64>;

/// Length-6 vector (right-hand side or coefficients).
pub type Vector6 = nalgebra::Vector6<f64>;

/// Smallest pivot magnitude accepted during elimination.
pub const PIVOT_EPSILON: f64 = 1e-12;
