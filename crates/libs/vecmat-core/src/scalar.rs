//! Scalar types accepted as vector and matrix components.

use num_traits::Num;
use std::{
    fmt::{Debug, Display},
    ops::Neg,
};

mod private {
    pub trait Sealed {}
}

/// Arithmetic scalar usable as a component of [`Vector`](crate::Vector) and
/// [`Matrix`](crate::Matrix).
///
/// The trait is sealed: only the primitive integer and floating point types
/// implement it, so instantiating a vector or a matrix with anything else is
/// rejected at compile time.
pub trait Scalar:
    private::Sealed + Copy + PartialOrd + Debug + Display + Num + Send + Sync + 'static
{
    /// Widens the value to `f64`.
    fn as_f64(self) -> f64;

    /// Converts back from `f64` with `as` semantics: integers truncate toward
    /// zero and saturate, NaN becomes zero.
    fn from_f64(value: f64) -> Self;

    /// Addition wrapping around at the bounds of integer types. Plain
    /// addition for floating point types.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// Subtraction wrapping around at the bounds of integer types. Plain
    /// subtraction for floating point types.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// Multiplication wrapping around at the bounds of integer types. Plain
    /// multiplication for floating point types.
    fn wrapping_mul(self, rhs: Self) -> Self;
}

/// Scalars that carry a sign.
///
/// Determinants, inverses and cross products use the native arithmetic of
/// these types. Unsigned types get the `wrapping_*` variants instead.
pub trait SignedScalar: Scalar + Neg<Output = Self> {}

macro_rules! impl_scalar {
    (int: $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                #[inline(always)]
                fn as_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn from_f64(value: f64) -> Self { value as $t }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self { <$t>::wrapping_add(self, rhs) }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self { <$t>::wrapping_sub(self, rhs) }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self { <$t>::wrapping_mul(self, rhs) }
            }
        )*
    };
    (float: $($t:ty),*) => {
        $(
            impl private::Sealed for $t {}

            impl Scalar for $t {
                #[inline(always)]
                fn as_f64(self) -> f64 { self as f64 }

                #[inline(always)]
                fn from_f64(value: f64) -> Self { value as $t }

                #[inline(always)]
                fn wrapping_add(self, rhs: Self) -> Self { self + rhs }

                #[inline(always)]
                fn wrapping_sub(self, rhs: Self) -> Self { self - rhs }

                #[inline(always)]
                fn wrapping_mul(self, rhs: Self) -> Self { self * rhs }
            }
        )*
    };
}

impl_scalar!(int: i8, i16, i32, i64, u8, u16, u32, u64);
impl_scalar!(float: f32, f64);

macro_rules! impl_signed_scalar {
    ($($t:ty),*) => {
        $(impl SignedScalar for $t {})*
    };
}

impl_signed_scalar!(i8, i16, i32, i64, f32, f64);
