//! Rational Bézier curves evaluated with De Casteljau's algorithm.
//!
//! Control points are given in homogeneous form: `xyz` is the position and
//! `w` the weight. Blending happens on the weighted points `(w·xyz, w)` and
//! the result is projected back by dividing by the blended weight.

use crate::{
    error::{Error, Result},
    vector::{Vec3d, Vec4d},
};

/// Minimum number of control points describing a curve.
pub const MIN_CONTROL_POINTS: usize = 2;

/// A rational Bézier curve borrowing its control polygon.
#[derive(Debug, Clone, Copy)]
pub struct RationalBezier<'a> {
    control_points: &'a [Vec4d],
}

impl<'a> RationalBezier<'a> {
    /// Wraps a control polygon of at least [`MIN_CONTROL_POINTS`] points.
    pub fn new(control_points: &'a [Vec4d]) -> Result<Self> {
        if control_points.len() < MIN_CONTROL_POINTS {
            return Err(Error::NotEnoughControlPoints {
                required: MIN_CONTROL_POINTS,
                actual: control_points.len(),
            });
        }
        Ok(Self { control_points })
    }

    /// The control polygon.
    pub const fn control_points(&self) -> &'a [Vec4d] { self.control_points }

    /// Degree of the curve.
    pub fn degree(&self) -> usize { self.control_points.len() - 1 }

    /// Samples the curve at `sample_count` evenly spaced interior parameters.
    ///
    /// The output holds `sample_count + 2` points. The first and the last are
    /// the `xyz` components of the end control points as they are, without
    /// dividing by their weight. Sample `i` in `1..=sample_count` is the
    /// curve at `u = i / (sample_count + 1)`.
    pub fn sample(&self, sample_count: u32) -> Vec<Vec3d> {
        log::debug!(
            "sampling rational Bézier curve: {} control points, {} interior samples",
            self.control_points.len(),
            sample_count
        );
        let n = sample_count as usize;
        let step = 1.0 / (f64::from(sample_count) + 1.0);
        let mut points = Vec::with_capacity(n + 2);
        let mut scratch = Vec::with_capacity(self.control_points.len());

        points.push(Vec3d::from(self.control_points[0]));
        for i in 1..=n {
            let u = i as f64 * step;
            let point = self.blend(u, &mut scratch);
            log::trace!("  sample {} at u = {}: {}", i, u, point);
            points.push(point);
        }
        points.push(Vec3d::from(self.control_points[self.control_points.len() - 1]));
        points
    }

    /// Evaluates the curve at parameter `u`.
    ///
    /// `u` is not clamped; values outside `[0, 1]` extrapolate.
    pub fn point_at(&self, u: f64) -> Vec3d {
        let mut scratch = Vec::with_capacity(self.control_points.len());
        self.blend(u, &mut scratch)
    }

    /// One rational De Casteljau evaluation, reusing `scratch` for the
    /// intermediate points.
    fn blend(&self, u: f64, scratch: &mut Vec<Vec4d>) -> Vec3d {
        scratch.clear();
        scratch.extend(self.control_points.iter().map(|p| {
            let w = p.w();
            let mut weighted = *p * w;
            weighted.set_w(w);
            weighted
        }));

        let k = scratch.len();
        for j in 1..k {
            for i in 0..k - j {
                scratch[i] = scratch[i] * (1.0 - u) + scratch[i + 1] * u;
            }
        }

        let head = scratch[0];
        Vec3d::from(head) / head.w()
    }
}

/// Samples the rational Bézier curve defined by `control_points`, see
/// [`RationalBezier::sample`].
pub fn evaluate(control_points: &[Vec4d], sample_count: u32) -> Result<Vec<Vec3d>> {
    Ok(RationalBezier::new(control_points)?.sample(sample_count))
}

/// Evaluates the rational Bézier curve defined by `control_points` at `u`.
pub fn evaluate_at(control_points: &[Vec4d], u: f64) -> Result<Vec3d> {
    Ok(RationalBezier::new(control_points)?.point_at(u))
}
