use crate::{Scalar, Vec3};
use core::ops::{Mul, MulAssign};

/// Quaternion: w + xi + yj + zk
///
/// Stored as scalar part `w` and vector part `v = (x, y, z)`.
/// Represents a rotation when unit-length.
///
/// Nothing here normalizes implicitly. Construction, [`scale`](Self::scale)
/// and [`compose`](Self::compose) may all leave the quaternion off the unit
/// sphere; call [`normalize`](Self::normalize) before rotating vectors or
/// converting back to angles if the result must be a pure rotation.
///
/// Equality is exact component-wise comparison. Use the `approx` feature
/// for tolerance-based comparisons.
///
/// # Composition order
///
/// `a * b` (or `a.compose(&b)`) applied to a vector rotates by `b` first and
/// then by `a`:
///
/// ```
/// use gimbal::{math::deg_to_rad, Quat, Vec3};
///
/// let a = Quat::from_angle_axis(deg_to_rad(90.0f64), Vec3::z());
/// let b = Quat::from_angle_axis(deg_to_rad(90.0f64), Vec3::x());
/// let v = Vec3::new(0.0, 1.0, 0.0);
///
/// let combined = (a * b).rotate(v);
/// let stepwise = a.rotate(b.rotate(v));
/// assert!((combined - stepwise).norm() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Quat<S> {
    pub w: S,
    pub v: Vec3<S>,
}

impl<S: Scalar> Quat<S> {
    #[inline]
    pub fn new(w: S, x: S, y: S, z: S) -> Self {
        Self { w, v: Vec3::new(x, y, z) }
    }

    #[inline]
    pub fn from_parts(w: S, v: Vec3<S>) -> Self {
        Self { w, v }
    }

    /// `w = 1, v = 0`: composes as the identity and leaves vectors unrotated.
    #[inline]
    pub fn identity() -> Self {
        Self { w: S::ONE, v: Vec3::zero() }
    }

    /// Quaternion from angle (radians) and rotation axis.
    ///
    /// `axis` must already be unit length. It is not renormalized, so a
    /// non-unit axis yields a non-unit quaternion.
    pub fn from_angle_axis(angle: S, axis: Vec3<S>) -> Self {
        let half = angle * S::HALF;
        let (s, c) = half.sin_cos();
        Self { w: c, v: axis * s }
    }

    /// Quaternion from Euler angles (radians).
    ///
    /// `angles.x`, `angles.y` and `angles.z` are the rotations about the X, Y
    /// and Z axes. The result is `Qy * Qz * Qx`, so a rotated vector is turned
    /// about X first, then Z, then Y. [`to_euler`](Self::to_euler) decomposes
    /// in exactly this order.
    pub fn from_euler(angles: Vec3<S>) -> Self {
        let qx = Self::from_angle_axis(angles.x, Vec3::x());
        let qy = Self::from_angle_axis(angles.y, Vec3::y());
        let qz = Self::from_angle_axis(angles.z, Vec3::z());

        qy.compose(&qz).compose(&qx)
    }

    #[inline]
    pub fn w(&self) -> S { self.w }

    #[inline]
    pub fn x(&self) -> S { self.v.x }

    #[inline]
    pub fn y(&self) -> S { self.v.y }

    #[inline]
    pub fn z(&self) -> S { self.v.z }

    /// Vector part `(x, y, z)`.
    #[inline]
    pub fn vector(&self) -> Vec3<S> { self.v }

    #[inline]
    pub fn set_w(&mut self, w: S) { self.w = w; }

    #[inline]
    pub fn set_x(&mut self, x: S) { self.v.x = x; }

    #[inline]
    pub fn set_y(&mut self, y: S) { self.v.y = y; }

    #[inline]
    pub fn set_z(&mut self, z: S) { self.v.z = z; }

    #[inline]
    pub fn set_vector(&mut self, v: Vec3<S>) { self.v = v; }

    #[inline]
    pub fn norm_sq(&self) -> S {
        self.w * self.w + self.v.norm_sq()
    }

    #[inline]
    pub fn norm(&self) -> S { self.norm_sq().sqrt() }

    /// 4D dot product.
    #[inline]
    pub fn dot(&self, other: &Quat<S>) -> S {
        self.w * other.w + self.v.dot(other.v)
    }

    /// Multiplies all four components by `s`.
    ///
    /// Unless `s` is ±1 the result no longer represents a pure rotation. This
    /// is an algebraic building block (interpolation, weighted sums), not a
    /// rotation operation.
    #[inline]
    pub fn scale(&self, s: S) -> Self {
        Self { w: self.w * s, v: self.v * s }
    }

    /// Hamilton product `self * other`.
    ///
    /// Not commutative. Applied to a vector, the result rotates by `other`
    /// first and by `self` second.
    pub fn compose(&self, other: &Quat<S>) -> Quat<S> {
        Quat {
            w: self.w * other.w - self.v.dot(other.v),
            v: other.v * self.w + self.v * other.w + self.v.cross(other.v),
        }
    }

    /// Rotates `v` by the sandwich product `q (0, v) q*`.
    ///
    /// Uses the expanded form `(w² - |u|²) v + 2 (u·v) u + 2w (u × v)`. The
    /// quaternion is expected to be normalized; a non-unit quaternion scales
    /// the result by its squared norm, which is left to the caller.
    pub fn rotate(&self, v: Vec3<S>) -> Vec3<S> {
        let u = self.v;
        let w = self.w;

        v * (w * w - u.norm_sq()) + u * (S::TWO * u.dot(v)) + u.cross(v) * (S::TWO * w)
    }

    /// Negated vector part. The inverse rotation for unit quaternions.
    #[inline]
    pub fn conjugate(&self) -> Self {
        Self { w: self.w, v: -self.v }
    }

    /// Same as [`conjugate`](Self::conjugate).
    #[inline]
    pub fn make_conjugate(&self) -> Self {
        self.conjugate()
    }

    /// Scales to unit length in place.
    ///
    /// The magnitude must be non-zero. Debug builds assert this; release
    /// builds propagate NaN/infinity.
    #[inline]
    pub fn normalize(&mut self) {
        let n = self.norm();
        debug_assert!(n > S::ZERO, "normalize() called on a zero quaternion");
        self.w /= n;
        self.v = self.v / n;
    }

    #[inline]
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    #[inline]
    pub fn try_normalize(&self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON {
            Some(Self { w: self.w / n, v: self.v / n })
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(norm = %n, "refusing to normalize a degenerate quaternion");
            None
        }
    }

    /// Euler angles (radians) in the order used by [`from_euler`](Self::from_euler).
    ///
    /// Expects a unit quaternion. As the rotation about Z approaches ±π/2 the
    /// `asin` argument approaches ±1 and the X/Y angles lose precision; the
    /// argument is not clamped, so values pushed past ±1 by rounding come
    /// back as NaN rather than a silently different rotation.
    pub fn to_euler(&self) -> Vec3<S> {
        let Quat { w, v: Vec3 { x, y, z } } = *self;
        let two = S::TWO;

        Vec3::new(
            (two * (x * w - y * z)).atan2(S::ONE - two * (x * x + z * z)),
            (two * (y * w - x * z)).atan2(S::ONE - two * (y * y + z * z)),
            (two * (x * y + z * w)).asin(),
        )
    }

    /// Inverse of [`from_angle_axis`](Self::from_angle_axis): `(angle, axis)`.
    ///
    /// The angle lies in `[0, 2π]`. `w` is clamped into `[-1, 1]` first so a
    /// unit quaternion that drifted slightly past it still converts.
    ///
    /// `sin(angle / 2)` is taken as the length of the vector part rather than
    /// `sqrt(1 - w²)`, which cancels badly for small angles. When it is zero
    /// (the identity, or a full turn) the axis is undefined and `(1, 0, 0)`
    /// is returned in its place. The identity therefore converts to
    /// `(0, (1, 0, 0))`.
    pub fn to_angle_axis(&self) -> (S, Vec3<S>) {
        let w = self.w.clamp(-S::ONE, S::ONE);
        let angle = S::TWO * w.acos();
        let sin_half = self.v.norm();

        if sin_half <= S::EPSILON {
            #[cfg(feature = "tracing")]
            tracing::trace!(angle = %angle, "rotation axis undefined, falling back to +x");
            return (angle, Vec3::x());
        }

        (angle, self.v / sin_half)
    }

    /// Spherical linear interpolation along the shortest arc.
    ///
    /// Both inputs must be normalized. Falls back to normalized lerp when
    /// they are nearly parallel.
    pub fn slerp(&self, other: &Quat<S>, t: S) -> Quat<S> {
        let mut dot = self.dot(other);
        let mut other = *other;

        // Ensure shortest path
        if dot < S::ZERO {
            other = other.scale(-S::ONE);
            dot = -dot;
        }

        if dot > S::ONE - S::EPSILON {
            return Quat {
                w: self.w + (other.w - self.w) * t,
                v: self.v.lerp(other.v, t),
            }
            .normalized();
        }

        let theta = dot.acos();
        let sin_theta = theta.sin();
        let a = ((S::ONE - t) * theta).sin() / sin_theta;
        let b = (t * theta).sin() / sin_theta;

        self.scale(a).add(&other.scale(b))
    }

    #[inline]
    fn add(&self, other: &Quat<S>) -> Quat<S> {
        Quat { w: self.w + other.w, v: self.v + other.v }
    }
}

impl<S: Scalar> Default for Quat<S> {
    fn default() -> Self { Self::identity() }
}

/// Scalar multiplication, see [`Quat::scale`].
impl<S: Scalar> Mul<S> for Quat<S> {
    type Output = Quat<S>;
    #[inline]
    fn mul(self, rhs: S) -> Quat<S> {
        self.scale(rhs)
    }
}

/// Composition, see [`Quat::compose`].
impl<S: Scalar> Mul<Quat<S>> for Quat<S> {
    type Output = Quat<S>;
    #[inline]
    fn mul(self, rhs: Quat<S>) -> Quat<S> {
        self.compose(&rhs)
    }
}

/// `a *= b` is `a = a * b`: `b` is applied before the old `a`.
impl<S: Scalar> MulAssign<Quat<S>> for Quat<S> {
    #[inline]
    fn mul_assign(&mut self, rhs: Quat<S>) {
        *self = self.compose(&rhs);
    }
}

/// Vector rotation, see [`Quat::rotate`].
impl<S: Scalar> Mul<Vec3<S>> for Quat<S> {
    type Output = Vec3<S>;
    #[inline]
    fn mul(self, rhs: Vec3<S>) -> Vec3<S> {
        self.rotate(rhs)
    }
}

impl<S: Scalar> core::fmt::Display for Quat<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}; {}, {}, {})", self.w, self.v.x, self.v.y, self.v.z)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::AbsDiffEq> approx::AbsDiffEq for Quat<S>
where
    S::Epsilon: Copy,
{
    type Epsilon = S::Epsilon;

    #[inline]
    fn default_epsilon() -> Self::Epsilon {
        S::default_epsilon()
    }

    #[inline]
    fn abs_diff_eq(&self, other: &Self, epsilon: Self::Epsilon) -> bool {
        self.w.abs_diff_eq(&other.w, epsilon) && self.v.abs_diff_eq(&other.v, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::RelativeEq> approx::RelativeEq for Quat<S>
where
    S::Epsilon: Copy,
{
    #[inline]
    fn default_max_relative() -> Self::Epsilon {
        S::default_max_relative()
    }

    #[inline]
    fn relative_eq(
        &self,
        other: &Self,
        epsilon: Self::Epsilon,
        max_relative: Self::Epsilon,
    ) -> bool {
        self.w.relative_eq(&other.w, epsilon, max_relative)
            && self.v.relative_eq(&other.v, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::UlpsEq> approx::UlpsEq for Quat<S>
where
    S::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.w.ulps_eq(&other.w, epsilon, max_ulps) && self.v.ulps_eq(&other.v, epsilon, max_ulps)
    }
}
