//! Small generic linear algebra kernel.
//!
//! Provides fixed-size vectors ([`Vector`]) and square matrices ([`Matrix`])
//! over the primitive numeric types, a three-point [`Circle`], a rational
//! Bézier evaluator ([`RationalBezier`]) and the [`Transform`] contract for
//! building affine matrices.
//!
//! The arithmetic follows plain floating point semantics: degenerate inputs
//! (zero-length vectors, singular matrices) produce NaN or infinity rather
//! than errors. The `try_*` variants reject them instead.
#![warn(missing_docs)]

pub mod bezier;
mod circle;
mod error;
pub mod matrix;
mod scalar;
mod transform;
pub mod vector;

pub use bezier::{evaluate, evaluate_at, RationalBezier};
pub use circle::Circle;
pub use error::{Error, Result};
pub use matrix::*;
pub use scalar::{Scalar, SignedScalar};
pub use transform::Transform;
pub use vector::*;
