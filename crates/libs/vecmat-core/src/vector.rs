//! Fixed-size vectors generic over the scalar type and the dimension.
//!
//! A single [`Vector<T, N>`] type backs the 2, 3 and 4 component vectors.
//! Operations valid in every dimension live on the generic type, while the
//! ones that only make sense for a given dimension (cross product, named
//! component accessors, narrowing and widening) are implemented on the
//! concrete `Vector<T, 2>`, `Vector<T, 3>` and `Vector<T, 4>`.

use crate::{
    error::{Error, Result},
    scalar::{Scalar, SignedScalar},
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Display, Formatter},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
    },
};

/// A vector of `N` components of type `T`.
///
/// Equality is exact per component; use the `approx` traits for tolerant
/// comparisons of floating point vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(transparent)]
pub struct Vector<T: Scalar, const N: usize>(pub(crate) [T; N]);

macro_rules! vector_aliases {
    ($($n:literal),*) => {
        paste::paste! {
            $(
                #[doc = "A " $n "-component vector."]
                pub type [<Vec $n>]<T> = Vector<T, $n>;
                #[doc = "A " $n "-component vector of `i32`."]
                pub type [<Vec $n i>] = Vector<i32, $n>;
                #[doc = "A " $n "-component vector of `u32`."]
                pub type [<Vec $n u>] = Vector<u32, $n>;
                #[doc = "A " $n "-component vector of `f32`."]
                pub type [<Vec $n f>] = Vector<f32, $n>;
                #[doc = "A " $n "-component vector of `f64`."]
                pub type [<Vec $n d>] = Vector<f64, $n>;
            )*
        }
    };
}

vector_aliases!(2, 3, 4);

/// Creates a 2-component vector.
#[inline(always)]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vec2<T> { Vector([x, y]) }

/// Creates a 3-component vector.
#[inline(always)]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vec3<T> { Vector([x, y, z]) }

/// Creates a 4-component vector.
#[inline(always)]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vec4<T> { Vector([x, y, z, w]) }

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Number of components.
    pub const DIM: usize = N;

    /// Creates a vector from its components.
    #[inline(always)]
    pub const fn new(components: [T; N]) -> Self { Self(components) }

    /// Creates a vector with all components set to zero.
    #[inline]
    pub fn zero() -> Self { Self([T::zero(); N]) }

    /// Creates a vector with all components set to `value`.
    #[inline]
    pub fn splat(value: T) -> Self { Self([value; N]) }

    /// Returns the components as an array reference.
    #[inline(always)]
    pub const fn as_array(&self) -> &[T; N] { &self.0 }

    /// Returns the components as an array.
    #[inline(always)]
    pub const fn to_array(self) -> [T; N] { self.0 }

    /// Iterates over the components.
    pub fn iter(&self) -> std::slice::Iter<'_, T> { self.0.iter() }

    /// Returns the component at `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        self.0
            .get(index)
            .copied()
            .ok_or(Error::IndexOutOfRange { index, len: N })
    }

    /// Overwrites the component at `index`.
    pub fn set(&mut self, index: usize, value: T) -> Result<()> {
        match self.0.get_mut(index) {
            Some(component) => {
                *component = value;
                Ok(())
            }
            None => Err(Error::IndexOutOfRange { index, len: N }),
        }
    }

    /// Applies `f` to every component.
    #[inline]
    pub fn map<F: FnMut(T) -> T>(self, f: F) -> Self { Self(self.0.map(f)) }

    #[inline]
    fn zip_with<F: Fn(T, T) -> T>(self, rhs: Self, f: F) -> Self {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a = f(*a, b);
        }
        Self(out)
    }

    /// Sums the components.
    ///
    /// Integer overflow behaves like the native arithmetic of `T`.
    pub fn sum(&self) -> T { self.0.iter().fold(T::zero(), |acc, &c| acc + c) }

    /// Dot product, also called inner or scalar product.
    pub fn dot(&self, other: &Self) -> T {
        self.0
            .iter()
            .zip(other.0.iter())
            .fold(T::zero(), |acc, (&a, &b)| acc + a * b)
    }

    /// Squared euclidean length, accumulated in `f64`.
    pub fn length_squared(&self) -> f64 {
        self.0
            .iter()
            .map(|c| {
                let c = c.as_f64();
                c * c
            })
            .sum()
    }

    /// Euclidean length, also called the magnitude.
    ///
    /// Every component is promoted to `f64` before squaring, so integer
    /// vectors cannot overflow while computing it.
    pub fn length(&self) -> f64 { self.length_squared().sqrt() }

    /// Divides every component by the length of the vector, in place.
    ///
    /// Nothing guards against a zero length: floating point vectors end up
    /// with NaN components and integer vectors with zeros. See
    /// [`Vector::try_normalize`] for the checked version.
    pub fn normalize(&mut self) {
        let length = self.length();
        self.div_by_f64(length);
    }

    /// Returns a normalized copy; same caveats as [`Vector::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Normalizes in place, refusing zero or non-finite lengths.
    ///
    /// The receiver is left untouched when an error is returned.
    pub fn try_normalize(&mut self) -> Result<()> {
        let length = self.length();
        if length == 0.0 || !length.is_finite() {
            log::warn!("refusing to normalize {:?} of length {}", self, length);
            return Err(Error::Degenerate("vector of zero or non-finite length"));
        }
        self.div_by_f64(length);
        Ok(())
    }

    fn div_by_f64(&mut self, divisor: f64) {
        for c in self.0.iter_mut() {
            *c = T::from_f64(c.as_f64() / divisor);
        }
    }

    /// Tests whether the dot product is exactly zero.
    ///
    /// No tolerance is applied, which makes the test brittle for floating
    /// point vectors.
    pub fn is_orthogonal(&self, other: &Self) -> bool { self.dot(other) == T::zero() }

    /// Projection of `self` onto `onto`: `(self·onto / |onto|²) · onto`.
    ///
    /// The ratio is computed in `f64` and converted to `T` before scaling, so
    /// integer projections truncate. Projecting onto the zero vector is not
    /// guarded and yields NaN (or zero for integers).
    pub fn proj(&self, onto: &Self) -> Self {
        let factor = T::from_f64(self.dot(onto).as_f64() / onto.length_squared());
        onto.map(|c| c * factor)
    }

    /// Component of `self` perpendicular to `other`: `self - proj(self,
    /// other)`.
    pub fn perp(&self, other: &Self) -> Self { *self - self.proj(other) }
}

/// Dot product of `p` and `q`.
#[inline]
pub fn dot<T: Scalar, const N: usize>(p: &Vector<T, N>, q: &Vector<T, N>) -> T { p.dot(q) }

/// Projection of `p` onto `q`.
#[inline]
pub fn proj<T: Scalar, const N: usize>(p: &Vector<T, N>, q: &Vector<T, N>) -> Vector<T, N> {
    p.proj(q)
}

/// Component of `p` perpendicular to `q`.
#[inline]
pub fn perp<T: Scalar, const N: usize>(p: &Vector<T, N>, q: &Vector<T, N>) -> Vector<T, N> {
    p.perp(q)
}

macro_rules! impl_accessors {
    ($n:literal; $($name:ident: $idx:literal),*) => {
        paste::paste! {
            impl<T: Scalar> Vector<T, $n> {
                $(
                    #[doc = "Returns the `" $name "` component."]
                    #[inline(always)]
                    pub const fn $name(&self) -> T { self.0[$idx] }

                    #[doc = "Sets the `" $name "` component."]
                    #[inline(always)]
                    pub fn [<set_ $name>](&mut self, value: T) { self.0[$idx] = value; }
                )*
            }
        }
    };
}

impl_accessors!(2; x: 0, y: 1);
impl_accessors!(3; x: 0, y: 1, z: 2);
impl_accessors!(4; x: 0, y: 1, z: 2, w: 3);

impl<T: Scalar> Vector<T, 2> {
    /// Widens to three components with the given `z`.
    pub const fn extend(self, z: T) -> Vec3<T> { vec3(self.0[0], self.0[1], z) }

    /// Widens to four components with the given `z` and `w`.
    pub const fn extend_zw(self, z: T, w: T) -> Vec4<T> { vec4(self.0[0], self.0[1], z, w) }
}

impl<T: SignedScalar> Vector<T, 2> {
    /// Two-dimensional cross product `x * other.y - y * other.x`.
    ///
    /// This is the signed area of the parallelogram spanned by the two
    /// vectors, positive when `other` is counter-clockwise from `self`.
    pub fn perp_dot(&self, other: &Self) -> T { self.0[0] * other.0[1] - self.0[1] * other.0[0] }
}

impl<T: Scalar> Vector<T, 3> {
    /// Drops the `z` component.
    pub const fn truncate(self) -> Vec2<T> { vec2(self.0[0], self.0[1]) }

    /// Widens to four components with the given `w`.
    pub const fn extend(self, w: T) -> Vec4<T> { vec4(self.0[0], self.0[1], self.0[2], w) }

    /// Cross product computed modulo `2^bits` for integer types; the only
    /// cross product available to unsigned vectors.
    pub fn wrapping_cross(&self, other: &Self) -> Self {
        let [x, y, z] = self.0;
        let [ox, oy, oz] = other.0;
        vec3(
            y.wrapping_mul(oz).wrapping_sub(z.wrapping_mul(oy)),
            z.wrapping_mul(ox).wrapping_sub(x.wrapping_mul(oz)),
            x.wrapping_mul(oy).wrapping_sub(y.wrapping_mul(ox)),
        )
    }
}

impl<T: SignedScalar> Vector<T, 3> {
    /// Cross product.
    pub fn cross(&self, other: &Self) -> Self {
        let [x, y, z] = self.0;
        let [ox, oy, oz] = other.0;
        vec3(y * oz - z * oy, z * ox - x * oz, x * oy - y * ox)
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Drops the `w` component.
    pub const fn truncate(self) -> Vec3<T> { vec3(self.0[0], self.0[1], self.0[2]) }
}

impl<T: Scalar> From<Vec3<T>> for Vec2<T> {
    fn from(v: Vec3<T>) -> Self { v.truncate() }
}

impl<T: Scalar> From<Vec4<T>> for Vec2<T> {
    fn from(v: Vec4<T>) -> Self { vec2(v.0[0], v.0[1]) }
}

impl<T: Scalar> From<Vec4<T>> for Vec3<T> {
    fn from(v: Vec4<T>) -> Self { v.truncate() }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    fn from(components: [T; N]) -> Self { Self(components) }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    fn from(v: Vector<T, N>) -> Self { v.0 }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self { Self::zero() }
}

impl<T: Scalar, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        match self.0.get(index) {
            Some(c) => c,
            None => panic!("{}", Error::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        match self.0.get_mut(index) {
            Some(c) => c,
            None => panic!("{}", Error::IndexOutOfRange { index, len: N }),
        }
    }
}

impl<T: Scalar, const N: usize> Display for Vector<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for (i, c) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ";")?;
            }
            write!(f, "{}", c)?;
        }
        Ok(())
    }
}

macro_rules! impl_vector_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident, $tok:tt);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output { self.zip_with(rhs, |a, b| a $tok b) }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { self.zip_with(*rhs, |a, b| a $tok b) }
            }

            impl<T: Scalar, const N: usize> $trait<Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: Vector<T, N>) -> Self::Output { self.zip_with(rhs, |a, b| a $tok b) }
            }

            impl<T: Scalar, const N: usize> $trait<&Vector<T, N>> for &Vector<T, N> {
                type Output = Vector<T, N>;

                #[inline]
                fn $op(self, rhs: &Vector<T, N>) -> Self::Output { self.zip_with(*rhs, |a, b| a $tok b) }
            }

            impl<T: Scalar, const N: usize> $assign_trait for Vector<T, N> {
                #[inline]
                fn $assign_op(&mut self, rhs: Vector<T, N>) { *self = self.zip_with(rhs, |a, b| a $tok b); }
            }

            impl<T: Scalar, const N: usize> $assign_trait<&Vector<T, N>> for Vector<T, N> {
                #[inline]
                fn $assign_op(&mut self, rhs: &Vector<T, N>) { *self = self.zip_with(*rhs, |a, b| a $tok b); }
            }
        )*
    };
}

impl_vector_ops! {
    Add, add, AddAssign, add_assign, +;
    Sub, sub, SubAssign, sub_assign, -
}

/// The product of two 3-component vectors is their cross product.
impl<T: SignedScalar> Mul for Vector<T, 3> {
    type Output = Vector<T, 3>;

    #[inline]
    fn mul(self, rhs: Vector<T, 3>) -> Self::Output { self.cross(&rhs) }
}

impl<T: SignedScalar> MulAssign for Vector<T, 3> {
    #[inline]
    fn mul_assign(&mut self, rhs: Vector<T, 3>) { *self = self.cross(&rhs); }
}

impl<T: SignedScalar, const N: usize> Neg for Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|c| -c) }
}

impl<T: SignedScalar, const N: usize> Neg for &Vector<T, N> {
    type Output = Vector<T, N>;

    #[inline]
    fn neg(self) -> Self::Output { self.map(|c| -c) }
}

// Scalar operands are implemented per primitive type: a blanket
// `impl<T> Mul<T> for Vector<T, N>` would collide with the vector products.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl_scalar_ops!(@ops $t;
                Add, add, AddAssign, add_assign, +;
                Sub, sub, SubAssign, sub_assign, -;
                Mul, mul, MulAssign, mul_assign, *;
                Div, div, DivAssign, div_assign, /);

            impl<const N: usize> Add<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn add(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|c| self + c) }
            }

            impl<const N: usize> Mul<Vector<$t, N>> for $t {
                type Output = Vector<$t, N>;

                #[inline]
                fn mul(self, rhs: Vector<$t, N>) -> Self::Output { rhs.map(|c| self * c) }
            }
        )*
    };
    (@ops $t:ty; $($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident, $tok:tt);*) => {
        $(
            impl<const N: usize> $trait<$t> for Vector<$t, N> {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: $t) -> Self::Output { self.map(|c| c $tok rhs) }
            }

            impl<const N: usize> $trait<$t> for &Vector<$t, N> {
                type Output = Vector<$t, N>;

                #[inline]
                fn $op(self, rhs: $t) -> Self::Output { self.map(|c| c $tok rhs) }
            }

            impl<const N: usize> $assign_trait<$t> for Vector<$t, N> {
                #[inline]
                fn $assign_op(&mut self, rhs: $t) { *self = self.map(|c| c $tok rhs); }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T, const N: usize> AbsDiffEq for Vector<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Vector<T, N>
where
    T: Scalar + RelativeEq,
    T::Epsilon: Copy,
{
    fn default_max_relative() -> Self::Epsilon { T::default_max_relative() }

    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Vector<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

static_assertions::assert_eq_size!(Vec2f, [f32; 2]);
static_assertions::assert_eq_size!(Vec3d, [f64; 3]);
static_assertions::assert_eq_size!(Vec4i, [i32; 4]);
static_assertions::assert_impl_all!(Vec3d: Copy, Send, Sync, Default);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::{assert_abs_diff_eq, assert_relative_eq};
    use proptest::prelude::*;

    #[test]
    fn construction_and_access() {
        let v = vec3(1, 2, 3);
        assert_eq!(v.x(), 1);
        assert_eq!(v.y(), 2);
        assert_eq!(v.z(), 3);
        assert_eq!(v[2], 3);
        assert_eq!(v.get(1), Ok(2));
        assert_eq!(v.get(3), Err(Error::IndexOutOfRange { index: 3, len: 3 }));
        assert_eq!(Vec4f::default(), Vec4f::zero());
        assert_eq!(Vec2u::splat(7), vec2(7, 7));
        assert_eq!(<[i32; 3]>::from(v), [1, 2, 3]);
        assert_eq!(Vec3i::DIM, 3);

        let mut w = Vec2d::zero();
        w.set_y(4.0);
        w[0] = 2.0;
        assert_eq!(w, vec2(2.0, 4.0));
        assert!(w.set(2, 1.0).is_err());
    }

    #[test]
    #[should_panic(expected = "Index 2 out of range for 2 elements")]
    fn index_out_of_range_panics() {
        let v = vec2(1.0f32, 2.0);
        let _component = v[2];
    }

    #[test]
    fn copies_are_independent() {
        let a = vec3(1.0, 2.0, 3.0);
        let mut b = a;
        b += vec3(1.0, 1.0, 1.0);
        assert_eq!(a, vec3(1.0, 2.0, 3.0));
        assert_eq!(b, vec3(2.0, 3.0, 4.0));
    }

    #[test]
    fn narrowing_and_widening() {
        let v = vec4(1, 2, 3, 4);
        assert_eq!(Vec3i::from(v), vec3(1, 2, 3));
        assert_eq!(Vec2i::from(v), vec2(1, 2));
        assert_eq!(Vec2i::from(vec3(5, 6, 7)), vec2(5, 6));
        assert_eq!(vec2(1, 2).extend(3), vec3(1, 2, 3));
        assert_eq!(vec2(1, 2).extend_zw(3, 4), v);
        assert_eq!(vec3(1, 2, 3).extend(4), v);
        assert_eq!(v.truncate().truncate(), vec2(1, 2));
    }

    #[test]
    fn sum_and_length() {
        assert_eq!(vec3(1, 2, 3).sum(), 6);
        assert_eq!(vec2(3.0, 4.0).length(), 5.0);
        // Squaring in i32 would overflow here.
        let big = vec2(i32::MAX, i32::MAX);
        assert_relative_eq!(
            big.length(),
            i32::MAX as f64 * 2f64.sqrt(),
            max_relative = 1.0e-12
        );
        assert_eq!(vec4(1u32, 1, 1, 1).length(), 2.0);
    }

    #[test]
    fn normalize() {
        let mut v = vec3(3.0, 0.0, 4.0);
        v.normalize();
        assert_relative_eq!(v, vec3(0.6, 0.0, 0.8));
        assert_relative_eq!(vec2(0.0f32, -2.0).normalized(), vec2(0.0, -1.0));

        // Integer components truncate.
        assert_eq!(vec2(3, 4).normalized(), vec2(0, 0));
        assert_eq!(vec2(5, 0).normalized(), vec2(1, 0));
    }

    #[test]
    fn normalize_zero_vector_is_unchecked() {
        let mut v = Vec3d::zero();
        v.normalize();
        assert!(v.iter().all(|c| c.is_nan()));

        let mut v = Vec3d::zero();
        assert_eq!(
            v.try_normalize(),
            Err(Error::Degenerate("vector of zero or non-finite length"))
        );
        assert_eq!(v, Vec3d::zero());

        let mut v = vec2(0.0, 2.0);
        assert!(v.try_normalize().is_ok());
        assert_eq!(v, vec2(0.0, 1.0));
    }

    #[test]
    fn orthogonality() {
        assert!(vec2(1, 0).is_orthogonal(&vec2(0, 1)));
        assert!(vec3(1.0, 1.0, 0.0).is_orthogonal(&vec3(-1.0, 1.0, 5.0)));
        assert!(!vec4(1, 1, 0, 0).is_orthogonal(&vec4(1, 0, 0, 0)));
        assert_eq!(dot(&vec2(1, 0), &vec2(0, 1)), 0);
    }

    #[test]
    fn projection() {
        let p = vec2(2.0, 3.0);
        let q = vec2(4.0, 0.0);
        assert_eq!(proj(&p, &q), vec2(2.0, 0.0));
        assert_eq!(perp(&p, &q), vec2(0.0, 3.0));

        let p = vec3(1.0, 2.0, 3.0);
        let q = vec3(1.0, 1.0, 1.0);
        assert_relative_eq!(p.proj(&q), vec3(2.0, 2.0, 2.0));
        assert_abs_diff_eq!(p.perp(&q).dot(&q), 0.0, epsilon = 1e-12);

        assert!(p.proj(&Vec3d::zero()).iter().all(|c| c.is_nan()));
    }

    #[test]
    fn cross_product() {
        let x = vec3(1.0, 0.0, 0.0);
        let y = vec3(0.0, 1.0, 0.0);
        assert_eq!(x.cross(&y), vec3(0.0, 0.0, 1.0));
        assert_eq!(x * y, vec3(0.0, 0.0, 1.0));
        assert_eq!(y * x, vec3(0.0, 0.0, -1.0));

        let mut a = vec3(2, 3, 4);
        let snapshot = a;
        a *= vec3(5, 6, 7);
        assert_eq!(a, snapshot.cross(&vec3(5, 6, 7)));
        assert_eq!(a, vec3(-3, 6, -3));
    }

    #[test]
    fn wrapping_cross_product() {
        let x = vec3(1u32, 0, 0);
        let y = vec3(0u32, 1, 0);
        assert_eq!(x.wrapping_cross(&y), vec3(0, 0, 1));
        assert_eq!(y.wrapping_cross(&x), vec3(0, 0, u32::MAX));
        assert_eq!(
            vec3(2i32, 3, 4).wrapping_cross(&vec3(5, 6, 7)),
            vec3(2, 3, 4).cross(&vec3(5, 6, 7))
        );
        let a = vec3(1.5, -2.0, 0.25);
        let b = vec3(4.0, 0.5, -1.0);
        assert_eq!(a.wrapping_cross(&b), a.cross(&b));
    }

    #[test]
    fn perp_dot() {
        assert_eq!(vec2(1, 0).perp_dot(&vec2(0, 1)), 1);
        assert_eq!(vec2(0, 1).perp_dot(&vec2(1, 0)), -1);
        assert_eq!(vec2(2.0, 2.0).perp_dot(&vec2(1.0, 1.0)), 0.0);
    }

    #[test]
    fn arithmetic() {
        let a = vec3(1.0, 2.0, 3.0);
        let b = vec3(0.5, 0.5, 0.5);
        assert_eq!(a + b, vec3(1.5, 2.5, 3.5));
        assert_eq!(&a - &b, vec3(0.5, 1.5, 2.5));
        assert_eq!(a * 2.0, vec3(2.0, 4.0, 6.0));
        assert_eq!(2.0 * a, vec3(2.0, 4.0, 6.0));
        assert_eq!(a / 2.0, vec3(0.5, 1.0, 1.5));
        assert_eq!(a + 1.0, vec3(2.0, 3.0, 4.0));
        assert_eq!(1.0 + a, vec3(2.0, 3.0, 4.0));
        assert_eq!(a - 1.0, vec3(0.0, 1.0, 2.0));
        assert_eq!(-a, vec3(-1.0, -2.0, -3.0));

        let mut c = vec4(1, 2, 3, 4);
        c += 1;
        c *= 2;
        c -= vec4(1, 1, 1, 1);
        c /= 3;
        assert_eq!(c, vec4(1, 1, 2, 3));
    }

    #[test]
    fn display() {
        assert_eq!(vec2(1, 2).to_string(), "1;2");
        assert_eq!(vec4(0.5, 1.0, -2.0, 3.25).to_string(), "0.5;1;-2;3.25");
    }

    fn finite() -> std::ops::Range<f64> { -1.0e3..1.0e3 }

    proptest! {
        #[test]
        fn normalized_vectors_have_unit_length(x in finite(), y in finite(), z in finite()) {
            let v = vec3(x, y, z);
            prop_assume!(v.length() > 1.0e-6);
            prop_assert!(approx::relative_eq!(v.normalized().length(), 1.0, epsilon = 1.0e-12));
        }

        #[test]
        fn self_dot_is_squared_length(x in finite(), y in finite(), z in finite(), w in finite()) {
            let v = vec4(x, y, z, w);
            prop_assert!(approx::relative_eq!(v.dot(&v), v.length() * v.length(), max_relative = 1.0e-12));
        }

        #[test]
        fn orthogonal_iff_zero_dot(a in -50i32..50, b in -50i32..50, c in -50i32..50, d in -50i32..50) {
            let p = vec2(a, b);
            let q = vec2(c, d);
            prop_assert_eq!(p.is_orthogonal(&q), a * c + b * d == 0);
        }

        #[test]
        fn unsigned_cross_matches_signed_modulo(v in proptest::array::uniform6(-1000i32..1000)) {
            let (p, q) = (vec3(v[0], v[1], v[2]), vec3(v[3], v[4], v[5]));
            let unsigned = |w: Vec3i| w.0.map(|c| c as u32);
            let expected = unsigned(p.cross(&q));
            let got = Vector(unsigned(p)).wrapping_cross(&Vector(unsigned(q)));
            prop_assert_eq!(got.0, expected);
        }

        #[test]
        fn cross_is_anticommutative(a in finite(), b in finite(), c in finite(),
            d in finite(), e in finite(), f in finite())
        {
            let p = vec3(a, b, c);
            let q = vec3(d, e, f);
            prop_assert_eq!(p.cross(&q), -q.cross(&p));
        }
    }
}
