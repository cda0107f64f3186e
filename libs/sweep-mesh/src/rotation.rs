//! # Rotations
//!
//! Abstraction over 3D rotation representations so oriented frames are not
//! tied to quaternions. Implemented for [`DQuat`] and orthonormal [`DMat3`].

use glam::{DMat3, DQuat, DVec3};

/// A proper rotation in 3D space.
///
/// # Example
///
/// ```rust
/// use glam::{DQuat, DVec3};
/// use sweep_mesh::Rotation;
///
/// let quarter = DQuat::from_rotation_y(std::f64::consts::FRAC_PI_2);
/// let v = Rotation::apply(quarter, DVec3::Z);
/// assert!(v.abs_diff_eq(DVec3::X, 1e-12));
/// ```
pub trait Rotation: Copy {
    /// The rotation that leaves every vector unchanged.
    fn identity() -> Self;

    /// Returns the rotation that applies `other` first, then `self`.
    fn compose(self, other: Self) -> Self;

    /// Returns the rotation undoing `self`.
    fn inverse(self) -> Self;

    /// Rotates a vector.
    fn apply(self, v: DVec3) -> DVec3;

    /// Returns true when the value is finite and a proper rotation within `tolerance`.
    fn is_valid(&self, tolerance: f64) -> bool;
}

impl Rotation for DQuat {
    #[inline]
    fn identity() -> Self {
        DQuat::IDENTITY
    }

    #[inline]
    fn compose(self, other: Self) -> Self {
        self * other
    }

    #[inline]
    fn inverse(self) -> Self {
        DQuat::inverse(self)
    }

    #[inline]
    fn apply(self, v: DVec3) -> DVec3 {
        self * v
    }

    fn is_valid(&self, tolerance: f64) -> bool {
        self.is_finite() && (self.length() - 1.0).abs() <= tolerance
    }
}

impl Rotation for DMat3 {
    #[inline]
    fn identity() -> Self {
        DMat3::IDENTITY
    }

    #[inline]
    fn compose(self, other: Self) -> Self {
        self * other
    }

    /// Orthonormal, so the transpose is the inverse.
    #[inline]
    fn inverse(self) -> Self {
        self.transpose()
    }

    #[inline]
    fn apply(self, v: DVec3) -> DVec3 {
        self * v
    }

    fn is_valid(&self, tolerance: f64) -> bool {
        if !self.is_finite() {
            return false;
        }
        let gram = self.transpose() * *self;
        gram.abs_diff_eq(DMat3::IDENTITY, tolerance) && (self.determinant() - 1.0).abs() <= tolerance
    }
}

/// Builds the rotation mapping local +Z onto `forward` and local +Y onto `up`.
///
/// Both inputs must be unit length and perpendicular; callers normalize
/// beforehand. The resulting basis is `(up × forward, up, forward)`.
pub(crate) fn look_rotation(forward: DVec3, up: DVec3) -> DMat3 {
    let right = up.cross(forward);
    DMat3::from_cols(right, up, forward)
}
