//! Contract for building and composing affine transforms.
//!
//! The crate only fixes the shape of the API: implementors supply the three
//! elementary matrices, everything else is composed from them. Matrices act
//! on column vectors, so `rotate(m, ..)` returns `m * rotation(..)`, which
//! applies the rotation first and `m` afterwards.

use crate::{
    matrix::Mat4,
    scalar::SignedScalar,
    vector::{vec3, Vec3},
};

/// Builders of 4x4 homogeneous transform matrices.
pub trait Transform<T: SignedScalar> {
    /// Rotation of `angle` radians around `axis`.
    fn rotation(angle: T, axis: Vec3<T>) -> Mat4<T>;

    /// Translation by `offset`.
    fn translation(offset: Vec3<T>) -> Mat4<T>;

    /// Non-uniform scaling by `factors`.
    fn scaling(factors: Vec3<T>) -> Mat4<T>;

    /// Appends a rotation around `axis` to `m`.
    fn rotate(m: &Mat4<T>, angle: T, axis: Vec3<T>) -> Mat4<T> { *m * Self::rotation(angle, axis) }

    /// Appends a rotation around the x axis to `m`.
    fn rotate_x(m: &Mat4<T>, angle: T) -> Mat4<T> {
        Self::rotate(m, angle, vec3(T::one(), T::zero(), T::zero()))
    }

    /// Appends a rotation around the y axis to `m`.
    fn rotate_y(m: &Mat4<T>, angle: T) -> Mat4<T> {
        Self::rotate(m, angle, vec3(T::zero(), T::one(), T::zero()))
    }

    /// Appends a rotation around the z axis to `m`.
    fn rotate_z(m: &Mat4<T>, angle: T) -> Mat4<T> {
        Self::rotate(m, angle, vec3(T::zero(), T::zero(), T::one()))
    }

    /// Appends a translation to `m`.
    fn translate(m: &Mat4<T>, offset: Vec3<T>) -> Mat4<T> { *m * Self::translation(offset) }

    /// Appends a translation along x to `m`.
    fn translate_x(m: &Mat4<T>, x: T) -> Mat4<T> {
        Self::translate(m, vec3(x, T::zero(), T::zero()))
    }

    /// Appends a translation along y to `m`.
    fn translate_y(m: &Mat4<T>, y: T) -> Mat4<T> {
        Self::translate(m, vec3(T::zero(), y, T::zero()))
    }

    /// Appends a translation along z to `m`.
    fn translate_z(m: &Mat4<T>, z: T) -> Mat4<T> {
        Self::translate(m, vec3(T::zero(), T::zero(), z))
    }

    /// Appends a scaling to `m`.
    fn scale(m: &Mat4<T>, factors: Vec3<T>) -> Mat4<T> { *m * Self::scaling(factors) }

    /// Appends a scaling along x to `m`.
    fn scale_x(m: &Mat4<T>, x: T) -> Mat4<T> { Self::scale(m, vec3(x, T::one(), T::one())) }

    /// Appends a scaling along y to `m`.
    fn scale_y(m: &Mat4<T>, y: T) -> Mat4<T> { Self::scale(m, vec3(T::one(), y, T::one())) }

    /// Appends a scaling along z to `m`.
    fn scale_z(m: &Mat4<T>, z: T) -> Mat4<T> { Self::scale(m, vec3(T::one(), T::one(), z)) }
}
