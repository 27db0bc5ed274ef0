//! Circle described by three points.

use crate::vector::{dot, Vec2d};

/// A circle given by three points on its boundary.
///
/// The points are copied at construction and never validated; collinear or
/// coincident points are accepted.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Circle {
    p1: Vec2d,
    p2: Vec2d,
    p3: Vec2d,
}

impl Circle {
    /// Creates a circle from three points.
    pub const fn new(p1: Vec2d, p2: Vec2d, p3: Vec2d) -> Self { Self { p1, p2, p3 } }

    /// The three defining points, in construction order.
    pub const fn points(&self) -> [Vec2d; 3] { [self.p1, self.p2, self.p3] }

    /// Side test of `point` against the defining triangle.
    ///
    /// Computes the signed area `a = (p2 - p1) ⟂· (p3 - p1)`, broadcasts it to
    /// `(a, a)` and reports whether its dot product with `p1 - point` is
    /// negative. This is not a circumcircle test: the answer only depends on
    /// the winding of the points and on which side of the line `x + y =
    /// p1.x + p1.y` the query point lies.
    pub fn is_point_inside(&self, point: Vec2d) -> bool {
        let area = (self.p2 - self.p1).perp_dot(&(self.p3 - self.p1));
        dot(&Vec2d::splat(area), &(self.p1 - point)) < 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vector::vec2;

    fn ccw() -> Circle { Circle::new(vec2(0.0, 0.0), vec2(1.0, 0.0), vec2(0.0, 1.0)) }

    #[test]
    fn points_are_copied() {
        let mut p = vec2(1.0, 2.0);
        let c = Circle::new(p, vec2(3.0, 4.0), vec2(5.0, 6.0));
        p.set_x(10.0);
        assert_eq!(c.points()[0], vec2(1.0, 2.0));
        assert_eq!(c.points()[2], vec2(5.0, 6.0));
    }

    #[test]
    fn counter_clockwise_triangle() {
        let c = ccw();
        // area = 1, dot((1, 1), (-0.1, -0.1)) = -0.2
        assert!(c.is_point_inside(vec2(0.1, 0.1)));
        assert!(c.is_point_inside(vec2(2.0, 2.0)));
        assert!(!c.is_point_inside(vec2(-1.0, -1.0)));
        // On the boundary line the product is zero, not negative.
        assert!(!c.is_point_inside(vec2(1.0, -1.0)));
    }

    #[test]
    fn winding_flips_the_answer() {
        let cw = Circle::new(vec2(0.0, 0.0), vec2(0.0, 1.0), vec2(1.0, 0.0));
        assert!(!cw.is_point_inside(vec2(0.1, 0.1)));
        assert!(cw.is_point_inside(vec2(-1.0, -1.0)));
    }

    #[test]
    fn degenerate_triangle_contains_nothing() {
        let c = Circle::new(vec2(0.0, 0.0), vec2(1.0, 1.0), vec2(2.0, 2.0));
        assert!(!c.is_point_inside(vec2(0.5, 0.5)));
        assert!(!c.is_point_inside(vec2(-3.0, 7.0)));
    }
}
