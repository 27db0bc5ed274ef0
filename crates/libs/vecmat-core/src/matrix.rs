//! Square matrices generic over the scalar type and the dimension.
//!
//! Storage is column-major: a [`Matrix<T, N>`] holds `N` column vectors, so
//! the flat index of the cell at `(row, col)` is `col * N + row`.
//!
//! Determinant and inverse are computed by cofactor expansion. The expansion
//! is written once for any `N` and walks the minors through index buffers on
//! the stack; for the 3x3 and 4x4 aliases this is the classic expansion with
//! 3 and 16 cofactors respectively.

use crate::{
    error::{Error, Result},
    scalar::{Scalar, SignedScalar},
    vector::Vector,
};
use approx::{AbsDiffEq, RelativeEq, UlpsEq};
use std::{
    fmt::{Display, Formatter},
    ops::{
        Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign,
    },
};

/// A square `N`x`N` matrix of `T`, stored as `N` columns.
///
/// The default value is the identity matrix. Equality is exact per entry.
#[derive(Debug, Clone, Copy, PartialEq)]
#[repr(C)]
pub struct Matrix<T: Scalar, const N: usize> {
    cols: [Vector<T, N>; N],
}

macro_rules! matrix_aliases {
    ($($n:literal),*) => {
        paste::paste! {
            $(
                #[doc = "A " $n "x" $n " matrix."]
                pub type [<Mat $n>]<T> = Matrix<T, $n>;
                #[doc = "A " $n "x" $n " matrix of `i32`."]
                pub type [<Mat $n i>] = Matrix<i32, $n>;
                #[doc = "A " $n "x" $n " matrix of `u32`."]
                pub type [<Mat $n u>] = Matrix<u32, $n>;
                #[doc = "A " $n "x" $n " matrix of `f32`."]
                pub type [<Mat $n f>] = Matrix<f32, $n>;
                #[doc = "A " $n "x" $n " matrix of `f64`."]
                pub type [<Mat $n d>] = Matrix<f64, $n>;
            )*
        }
    };
}

matrix_aliases!(3, 4);

impl<T: Scalar, const N: usize> Matrix<T, N> {
    /// Number of rows and columns.
    pub const DIM: usize = N;

    /// Creates a matrix from its columns.
    #[inline(always)]
    pub const fn from_cols(cols: [Vector<T, N>; N]) -> Self { Self { cols } }

    /// Creates a matrix from its rows.
    pub fn from_rows(rows: [Vector<T, N>; N]) -> Self { Self::from_cols(rows).transpose() }

    /// Creates a matrix from `N * N` values in column-major order.
    pub fn from_cols_slice(values: &[T]) -> Result<Self> {
        if values.len() != N * N {
            return Err(Error::LengthMismatch {
                expected: N * N,
                actual: values.len(),
            });
        }
        Ok(Self::from_fn(|row, col| values[col * N + row]))
    }

    /// Builds a matrix by evaluating `f(row, col)` for every cell.
    pub fn from_fn<F: Fn(usize, usize) -> T>(f: F) -> Self {
        Self {
            cols: std::array::from_fn(|col| Vector(std::array::from_fn(|row| f(row, col)))),
        }
    }

    /// The identity matrix.
    pub fn identity() -> Self {
        Self::from_fn(|row, col| if row == col { T::one() } else { T::zero() })
    }

    /// The matrix with all entries set to zero.
    pub fn zero() -> Self {
        Self {
            cols: [Vector::zero(); N],
        }
    }

    /// Returns the column at `col`.
    ///
    /// # Panics
    ///
    /// Panics if `col >= N`.
    #[inline]
    pub fn col(&self, col: usize) -> Vector<T, N> { self.cols[col] }

    /// Returns the row at `row`.
    ///
    /// # Panics
    ///
    /// Panics if `row >= N`.
    pub fn row(&self, row: usize) -> Vector<T, N> {
        Vector(std::array::from_fn(|col| self.cols[col].0[row]))
    }

    /// Returns the columns.
    pub const fn cols(&self) -> &[Vector<T, N>; N] { &self.cols }

    /// Returns the entry at flat column-major position `index`.
    pub fn get(&self, index: usize) -> Result<T> {
        if index >= N * N {
            return Err(Error::IndexOutOfRange { index, len: N * N });
        }
        Ok(self.cols[index / N].0[index % N])
    }

    /// Returns the entry at `(row, col)`.
    pub fn get_at(&self, row: usize, col: usize) -> Result<T> {
        if row >= N || col >= N {
            return Err(Error::IndexOutOfRange {
                index: col * N + row,
                len: N * N,
            });
        }
        Ok(self.cols[col].0[row])
    }

    /// Overwrites the entry at `(row, col)`.
    pub fn set_at(&mut self, row: usize, col: usize, value: T) -> Result<()> {
        if row >= N || col >= N {
            return Err(Error::IndexOutOfRange {
                index: col * N + row,
                len: N * N,
            });
        }
        self.cols[col].0[row] = value;
        Ok(())
    }

    #[inline(always)]
    fn at(&self, row: usize, col: usize) -> T { self.cols[col].0[row] }

    /// Iterates over the entries in column-major order.
    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.cols.iter().flat_map(|c| c.0.iter().copied())
    }

    /// Applies `f` to every entry.
    pub fn map<F: Fn(T) -> T>(self, f: F) -> Self {
        Self {
            cols: self.cols.map(|c| c.map(&f)),
        }
    }

    /// Returns the transpose.
    pub fn transpose(&self) -> Self { Self::from_fn(|row, col| self.at(col, row)) }
}

impl<T: Scalar> Matrix<T, 3> {
    /// Creates a 3x3 matrix from 9 values in column-major order; `mCR` is the
    /// entry of column `C`, row `R`.
    ///
    /// Values listed row after row load as the transpose, use
    /// [`Matrix::from_rows`] for those.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T, m01: T, m02: T,
        m10: T, m11: T, m12: T,
        m20: T, m21: T, m22: T,
    ) -> Self {
        Self {
            cols: [
                Vector([m00, m01, m02]),
                Vector([m10, m11, m12]),
                Vector([m20, m21, m22]),
            ],
        }
    }

    /// Creates a 3x3 matrix from an array in column-major order.
    pub const fn from_cols_array(values: &[T; 9]) -> Self {
        let v = values;
        Self::new(v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8])
    }

    /// Returns the entries in column-major order.
    pub const fn to_cols_array(&self) -> [T; 9] {
        let [c0, c1, c2] = &self.cols;
        [
            c0.0[0], c0.0[1], c0.0[2], c1.0[0], c1.0[1], c1.0[2], c2.0[0], c2.0[1], c2.0[2],
        ]
    }
}

impl<T: Scalar> Matrix<T, 4> {
    /// Creates a 4x4 matrix from 16 values in column-major order; `mCR` is
    /// the entry of column `C`, row `R`.
    #[rustfmt::skip]
    #[allow(clippy::too_many_arguments)]
    pub const fn new(
        m00: T, m01: T, m02: T, m03: T,
        m10: T, m11: T, m12: T, m13: T,
        m20: T, m21: T, m22: T, m23: T,
        m30: T, m31: T, m32: T, m33: T,
    ) -> Self {
        Self {
            cols: [
                Vector([m00, m01, m02, m03]),
                Vector([m10, m11, m12, m13]),
                Vector([m20, m21, m22, m23]),
                Vector([m30, m31, m32, m33]),
            ],
        }
    }

    /// Creates a 4x4 matrix from an array in column-major order.
    pub const fn from_cols_array(values: &[T; 16]) -> Self {
        let v = values;
        Self::new(
            v[0], v[1], v[2], v[3], v[4], v[5], v[6], v[7], v[8], v[9], v[10], v[11], v[12],
            v[13], v[14], v[15],
        )
    }

    /// Returns the entries in column-major order.
    pub const fn to_cols_array(&self) -> [T; 16] {
        let [c0, c1, c2, c3] = &self.cols;
        [
            c0.0[0], c0.0[1], c0.0[2], c0.0[3], c1.0[0], c1.0[1], c1.0[2], c1.0[3], c2.0[0],
            c2.0[1], c2.0[2], c2.0[3], c3.0[0], c3.0[1], c3.0[2], c3.0[3],
        ]
    }
}

/// Arithmetic used by the cofactor expansion.
trait Ring<T: Scalar> {
    fn add(a: T, b: T) -> T;
    fn sub(a: T, b: T) -> T;
    fn mul(a: T, b: T) -> T;
    fn neg(a: T) -> T;
}

/// Native operators of a signed scalar.
struct Native;

impl<T: SignedScalar> Ring<T> for Native {
    #[inline(always)]
    fn add(a: T, b: T) -> T { a + b }

    #[inline(always)]
    fn sub(a: T, b: T) -> T { a - b }

    #[inline(always)]
    fn mul(a: T, b: T) -> T { a * b }

    #[inline(always)]
    fn neg(a: T) -> T { -a }
}

/// Integer arithmetic modulo `2^bits`.
struct Wrapping;

impl<T: Scalar> Ring<T> for Wrapping {
    #[inline(always)]
    fn add(a: T, b: T) -> T { a.wrapping_add(b) }

    #[inline(always)]
    fn sub(a: T, b: T) -> T { a.wrapping_sub(b) }

    #[inline(always)]
    fn mul(a: T, b: T) -> T { a.wrapping_mul(b) }

    #[inline(always)]
    fn neg(a: T) -> T { T::zero().wrapping_sub(a) }
}

/// Determinant of the sub-matrix made of the given rows and columns.
///
/// Expands along the first of the remaining columns. `rows` and `cols` must
/// have the same length.
fn minor_determinant<R: Ring<T>, T: Scalar, const N: usize>(
    m: &Matrix<T, N>,
    rows: &[usize],
    cols: &[usize],
) -> T {
    debug_assert_eq!(rows.len(), cols.len());
    match rows.len() {
        0 => T::one(),
        1 => m.at(rows[0], cols[0]),
        2 => R::sub(
            R::mul(m.at(rows[0], cols[0]), m.at(rows[1], cols[1])),
            R::mul(m.at(rows[0], cols[1]), m.at(rows[1], cols[0])),
        ),
        _ => {
            let mut sub_rows = [0usize; N];
            let mut det = T::zero();
            for (i, &row) in rows.iter().enumerate() {
                let len = except(rows, row, &mut sub_rows);
                let minor = minor_determinant::<R, T, N>(m, &sub_rows[..len], &cols[1..]);
                let term = R::mul(m.at(row, cols[0]), minor);
                det = if i % 2 == 0 { R::add(det, term) } else { R::sub(det, term) };
            }
            det
        }
    }
}

/// Copies `indices` without `skip` into `out`, returns the number copied.
fn except(indices: &[usize], skip: usize, out: &mut [usize]) -> usize {
    let mut len = 0;
    for &i in indices.iter().filter(|&&i| i != skip) {
        out[len] = i;
        len += 1;
    }
    len
}

impl<T: Scalar, const N: usize> Matrix<T, N> {
    fn determinant_in<R: Ring<T>>(&self) -> T {
        let all: [usize; N] = std::array::from_fn(|i| i);
        minor_determinant::<R, T, N>(self, &all, &all)
    }

    fn cofactor_in<R: Ring<T>>(&self, row: usize, col: usize) -> T {
        assert!(row < N && col < N, "cofactor ({row}, {col}) out of range for a {N}x{N} matrix");
        let all: [usize; N] = std::array::from_fn(|i| i);
        let mut rows = [0usize; N];
        let mut cols = [0usize; N];
        let n_rows = except(&all, row, &mut rows);
        let n_cols = except(&all, col, &mut cols);
        let minor = minor_determinant::<R, T, N>(self, &rows[..n_rows], &cols[..n_cols]);
        if (row + col) % 2 == 0 {
            minor
        } else {
            R::neg(minor)
        }
    }

    /// Determinant computed modulo `2^bits` for integer types.
    ///
    /// This is the only determinant available to unsigned matrices. For
    /// floating point matrices it equals [`Matrix::determinant`].
    pub fn wrapping_determinant(&self) -> T { self.determinant_in::<Wrapping>() }

    /// Cofactor computed modulo `2^bits` for integer types.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn wrapping_cofactor(&self, row: usize, col: usize) -> T {
        self.cofactor_in::<Wrapping>(row, col)
    }

    /// Adjugate computed modulo `2^bits` for integer types.
    pub fn wrapping_adjugate(&self) -> Self {
        Self::from_fn(|row, col| self.wrapping_cofactor(col, row))
    }

    /// Inverse computed modulo `2^bits` for integer types: the wrapping
    /// adjugate times `1 / wrapping_determinant`, truncated.
    ///
    /// # Panics
    ///
    /// Integer matrices with a zero determinant panic on the division.
    pub fn wrapping_inverse(&self) -> Self {
        let inv_det = T::one() / self.wrapping_determinant();
        self.wrapping_adjugate().map(|c| c.wrapping_mul(inv_det))
    }
}

impl<T: SignedScalar, const N: usize> Matrix<T, N> {
    /// Determinant, by cofactor expansion along the first column.
    pub fn determinant(&self) -> T { self.determinant_in::<Native>() }

    /// Cofactor of the entry at `(row, col)`: the signed determinant of the
    /// matrix without that row and column.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is out of range.
    pub fn cofactor(&self, row: usize, col: usize) -> T { self.cofactor_in::<Native>(row, col) }

    /// Matrix of all the cofactors.
    pub fn cofactor_matrix(&self) -> Self { Self::from_fn(|row, col| self.cofactor(row, col)) }

    /// Adjugate: the transposed cofactor matrix.
    pub fn adjugate(&self) -> Self { Self::from_fn(|row, col| self.cofactor(col, row)) }

    /// Inverse, computed as the adjugate scaled by `1 / determinant`.
    ///
    /// A singular matrix is not detected: floating point matrices come back
    /// full of infinities and NaNs. For integer matrices `1 / determinant`
    /// truncates toward zero. Use [`Matrix::try_inverse`] to reject singular
    /// input.
    ///
    /// # Panics
    ///
    /// Integer matrices with a zero determinant panic on the division.
    pub fn inverse(&self) -> Self { self.inverse_with_determinant(self.determinant()) }

    /// Same as [`Matrix::inverse`] with a determinant computed by the caller.
    ///
    /// `determinant` is trusted as is.
    pub fn inverse_with_determinant(&self, determinant: T) -> Self {
        let inv_det = T::one() / determinant;
        self.adjugate().map(|c| c * inv_det)
    }

    /// Inverse, or [`Error::Degenerate`] when the determinant is zero.
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            log::warn!("refusing to invert singular matrix {:?}", self);
            return Err(Error::Degenerate("singular matrix"));
        }
        Ok(self.inverse_with_determinant(det))
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N> {
    fn default() -> Self { Self::identity() }
}

impl<T: Scalar, const N: usize> Index<usize> for Matrix<T, N> {
    type Output = T;

    fn index(&self, index: usize) -> &Self::Output {
        if index >= N * N {
            panic!("{}", Error::IndexOutOfRange { index, len: N * N });
        }
        &self.cols[index / N].0[index % N]
    }
}

impl<T: Scalar, const N: usize> IndexMut<usize> for Matrix<T, N> {
    fn index_mut(&mut self, index: usize) -> &mut Self::Output {
        if index >= N * N {
            panic!("{}", Error::IndexOutOfRange { index, len: N * N });
        }
        &mut self.cols[index / N].0[index % N]
    }
}

impl<T: Scalar, const N: usize> Display for Matrix<T, N> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for row in 0..N {
            writeln!(f, "{}", self.row(row))?;
        }
        Ok(())
    }
}

macro_rules! impl_entrywise_ops {
    ($($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident);*) => {
        $(
            impl<T: Scalar, const N: usize> $trait for Matrix<T, N> {
                type Output = Matrix<T, N>;

                fn $op(self, rhs: Matrix<T, N>) -> Self::Output {
                    let mut cols = self.cols;
                    for (a, b) in cols.iter_mut().zip(rhs.cols) {
                        *a = $trait::$op(*a, b);
                    }
                    Self { cols }
                }
            }

            impl<T: Scalar, const N: usize> $trait<&Matrix<T, N>> for &Matrix<T, N> {
                type Output = Matrix<T, N>;

                fn $op(self, rhs: &Matrix<T, N>) -> Self::Output { (*self).$op(*rhs) }
            }

            impl<T: Scalar, const N: usize> $assign_trait for Matrix<T, N> {
                fn $assign_op(&mut self, rhs: Matrix<T, N>) { *self = (*self).$op(rhs); }
            }
        )*
    };
}

impl_entrywise_ops! {
    Add, add, AddAssign, add_assign;
    Sub, sub, SubAssign, sub_assign
}

/// Standard matrix product: `(A * B)[row, col] = Σ_k A[row, k] · B[k, col]`.
impl<T: Scalar, const N: usize> Mul for Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: Matrix<T, N>) -> Self::Output {
        Self::from_fn(|row, col| {
            (0..N).fold(T::zero(), |acc, k| acc + self.at(row, k) * rhs.at(k, col))
        })
    }
}

impl<T: Scalar, const N: usize> Mul<&Matrix<T, N>> for &Matrix<T, N> {
    type Output = Matrix<T, N>;

    fn mul(self, rhs: &Matrix<T, N>) -> Self::Output { *self * *rhs }
}

impl<T: Scalar, const N: usize> MulAssign for Matrix<T, N> {
    /// The product is built from the values before the assignment, so
    /// `m *= m` squares the matrix.
    fn mul_assign(&mut self, rhs: Matrix<T, N>) { *self = *self * rhs; }
}

impl<T: Scalar, const N: usize> Mul<Vector<T, N>> for Matrix<T, N> {
    type Output = Vector<T, N>;

    fn mul(self, rhs: Vector<T, N>) -> Self::Output {
        Vector(std::array::from_fn(|row| {
            (0..N).fold(T::zero(), |acc, k| acc + self.at(row, k) * rhs.0[k])
        }))
    }
}

// See the matching comment in `vector`: scalar operands are per primitive.
macro_rules! impl_scalar_ops {
    ($($t:ty),*) => {
        $(
            impl_scalar_ops!(@ops $t;
                Add, add, AddAssign, add_assign, +;
                Sub, sub, SubAssign, sub_assign, -;
                Mul, mul, MulAssign, mul_assign, *;
                Div, div, DivAssign, div_assign, /);

            impl<const N: usize> Add<Matrix<$t, N>> for $t {
                type Output = Matrix<$t, N>;

                fn add(self, rhs: Matrix<$t, N>) -> Self::Output { rhs.map(|c| self + c) }
            }

            impl<const N: usize> Mul<Matrix<$t, N>> for $t {
                type Output = Matrix<$t, N>;

                fn mul(self, rhs: Matrix<$t, N>) -> Self::Output { rhs.map(|c| self * c) }
            }
        )*
    };
    (@ops $t:ty; $($trait:ident, $op:ident, $assign_trait:ident, $assign_op:ident, $tok:tt);*) => {
        $(
            impl<const N: usize> $trait<$t> for Matrix<$t, N> {
                type Output = Matrix<$t, N>;

                fn $op(self, rhs: $t) -> Self::Output { self.map(|c| c $tok rhs) }
            }

            impl<const N: usize> $assign_trait<$t> for Matrix<$t, N> {
                fn $assign_op(&mut self, rhs: $t) { *self = self.map(|c| c $tok rhs); }
            }
        )*
    };
}

impl_scalar_ops!(i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T, const N: usize> AbsDiffEq for Matrix<T, N>
where
    T: Scalar + AbsDiffEq,
    T::Epsilon: Copy,
{
    type Epsilon = T::Epsilon;

    fn default_epsilon() -> Self::Epsilon { T::default_epsilon() }

    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.abs_diff_eq(b, epsilon))
    }
}

impl<T, const N: usize> RelativeEq for Matrix<T, N>
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
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.relative_eq(b, epsilon, max_relative))
    }
}

impl<T, const N: usize> UlpsEq for Matrix<T, N>
where
    T: Scalar + UlpsEq,
    T::Epsilon: Copy,
{
    fn default_max_ulps() -> u32 { T::default_max_ulps() }

    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.cols
            .iter()
            .zip(other.cols.iter())
            .all(|(a, b)| a.ulps_eq(b, epsilon, max_ulps))
    }
}

static_assertions::assert_eq_size!(Mat3f, [f32; 9]);
static_assertions::assert_eq_size!(Mat4d, [f64; 16]);
static_assertions::assert_impl_all!(Mat4d: Copy, Send, Sync, Default);
