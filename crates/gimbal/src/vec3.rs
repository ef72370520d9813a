use crate::Scalar;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// 3D vector: the value type quaternions rotate and Euler angles are stored in.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec3<S> {
    pub x: S,
    pub y: S,
    pub z: S,
}

impl<S: Scalar> Vec3<S> {
    #[inline]
    pub fn new(x: S, y: S, z: S) -> Self { Self { x, y, z } }

    #[inline]
    pub fn zero() -> Self { Self::new(S::ZERO, S::ZERO, S::ZERO) }

    #[inline]
    pub fn x() -> Self { Self::new(S::ONE, S::ZERO, S::ZERO) }

    #[inline]
    pub fn y() -> Self { Self::new(S::ZERO, S::ONE, S::ZERO) }

    #[inline]
    pub fn z() -> Self { Self::new(S::ZERO, S::ZERO, S::ONE) }

    #[inline]
    pub fn dot(self, rhs: Self) -> S {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// Right-handed cross product.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        Self::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    #[inline]
    pub fn norm_sq(self) -> S { self.dot(self) }

    #[inline]
    pub fn norm(self) -> S { self.norm_sq().sqrt() }

    /// Unit vector in the same direction. The zero vector yields NaN components.
    #[inline]
    pub fn normalize(self) -> Self {
        let n = self.norm();
        self / n
    }

    #[inline]
    pub fn try_normalize(self) -> Option<Self> {
        let n = self.norm();
        if n > S::EPSILON {
            Some(self / n)
        } else {
            #[cfg(feature = "tracing")]
            tracing::trace!(norm = %n, "refusing to normalize a degenerate vector");
            None
        }
    }

    #[inline]
    pub fn lerp(self, other: Self, t: S) -> Self {
        self * (S::ONE - t) + other * t
    }
}

impl<S: Scalar> Default for Vec3<S> {
    fn default() -> Self { Self::zero() }
}

impl<S: Scalar> From<[S; 3]> for Vec3<S> {
    fn from(a: [S; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<S: Scalar> From<Vec3<S>> for [S; 3] {
    fn from(v: Vec3<S>) -> Self { [v.x, v.y, v.z] }
}

impl<S: Scalar> Add for Vec3<S> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<S: Scalar> Sub for Vec3<S> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<S: Scalar> Neg for Vec3<S> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl<S: Scalar> Mul<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn mul(self, rhs: S) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<S: Scalar> Div<S> for Vec3<S> {
    type Output = Self;
    #[inline] fn div(self, rhs: S) -> Self {
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<S: Scalar> AddAssign for Vec3<S> {
    #[inline] fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x; self.y += rhs.y; self.z += rhs.z;
    }
}

impl<S: Scalar> SubAssign for Vec3<S> {
    #[inline] fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x; self.y -= rhs.y; self.z -= rhs.z;
    }
}

impl<S: Scalar> MulAssign<S> for Vec3<S> {
    #[inline] fn mul_assign(&mut self, rhs: S) {
        self.x *= rhs; self.y *= rhs; self.z *= rhs;
    }
}

impl<S: Scalar> DivAssign<S> for Vec3<S> {
    #[inline] fn div_assign(&mut self, rhs: S) {
        self.x /= rhs; self.y /= rhs; self.z /= rhs;
    }
}

// Scalar * Vec3 (commutative)
impl Mul<Vec3<f64>> for f64 {
    type Output = Vec3<f64>;
    #[inline] fn mul(self, rhs: Vec3<f64>) -> Vec3<f64> { rhs * self }
}

impl Mul<Vec3<f32>> for f32 {
    type Output = Vec3<f32>;
    #[inline] fn mul(self, rhs: Vec3<f32>) -> Vec3<f32> { rhs * self }
}

impl<S: Scalar> core::fmt::Display for Vec3<S> {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::AbsDiffEq> approx::AbsDiffEq for Vec3<S>
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
        self.x.abs_diff_eq(&other.x, epsilon)
            && self.y.abs_diff_eq(&other.y, epsilon)
            && self.z.abs_diff_eq(&other.z, epsilon)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::RelativeEq> approx::RelativeEq for Vec3<S>
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
        self.x.relative_eq(&other.x, epsilon, max_relative)
            && self.y.relative_eq(&other.y, epsilon, max_relative)
            && self.z.relative_eq(&other.z, epsilon, max_relative)
    }
}

#[cfg(feature = "approx")]
impl<S: Scalar + approx::UlpsEq> approx::UlpsEq for Vec3<S>
where
    S::Epsilon: Copy,
{
    #[inline]
    fn default_max_ulps() -> u32 {
        S::default_max_ulps()
    }

    #[inline]
    fn ulps_eq(&self, other: &Self, epsilon: Self::Epsilon, max_ulps: u32) -> bool {
        self.x.ulps_eq(&other.x, epsilon, max_ulps)
            && self.y.ulps_eq(&other.y, epsilon, max_ulps)
            && self.z.ulps_eq(&other.z, epsilon, max_ulps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_product() {
        let a = Vec3::new(1.0, 2.0, 3.0);
        let b = Vec3::new(4.0, 5.0, 6.0);
        assert_eq!(a.dot(b), 32.0);
        assert_eq!(b.dot(a), 32.0);
    }

    #[test]
    fn cross_product() {
        let x = Vec3::<f64>::x();
        let y = Vec3::<f64>::y();
        let z = x.cross(y);
        assert_eq!(z, Vec3::z());
        // Anti-commutative
        assert_eq!(y.cross(x), -z);
    }

    #[test]
    fn normalize() {
        let v = Vec3::new(1.0, 2.0, 2.0);
        let n = v.normalize();
        assert!((n.norm() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn try_normalize_rejects_zero() {
        assert_eq!(Vec3::<f32>::zero().try_normalize(), None);
        assert_eq!(Vec3::new(0.0, 3.0, 0.0).try_normalize(), Some(Vec3::y()));
    }

    #[test]
    fn scalar_mul_commutative() {
        let v = Vec3::new(1.0, 2.0, 3.0);
        assert_eq!(v * 2.0, 2.0 * v);
    }

    #[test]
    fn lerp() {
        let a = Vec3::new(0.0, 0.0, 0.0);
        let b = Vec3::new(10.0, 10.0, 10.0);
        let mid = a.lerp(b, 0.5);
        assert_eq!(mid, Vec3::new(5.0, 5.0, 5.0));
    }

    #[test]
    fn compound_assignment() {
        let mut v = Vec3::new(1.0f32, 2.0, 3.0);
        v += Vec3::new(1.0, 1.0, 1.0);
        v -= Vec3::new(0.0, 1.0, 0.0);
        v *= 3.0;
        assert_eq!(v, Vec3::new(6.0, 6.0, 12.0));
        v /= 2.0;
        assert_eq!(v, Vec3::new(3.0, 3.0, 6.0));
    }

    #[test]
    fn f32_vec3() {
        let v = Vec3::<f32>::new(1.0, 0.0, 0.0);
        assert_eq!(v.norm(), 1.0f32);
    }
}
