//! Free functions over 2D/3D vectors and angles.
//!
//! Everything here is stateless. Functions that divide by a length
//! (`normalize`) or assume unit input (`angle_axis_to_euler`) document the
//! precondition and do not check it in release builds.

use crate::{Scalar, Vec2, Vec3};

/// Euclidean length. Zero for the zero vector.
#[inline]
pub fn length<S: Scalar>(v: Vec3<S>) -> S {
    v.norm()
}

/// Scales `v` in place to unit length.
///
/// The vector must have a non-zero length. Debug builds assert this; release
/// builds divide by zero and the components become NaN or infinite. Use
/// [`Vec3::try_normalize`] when the input may be degenerate.
#[inline]
pub fn normalize<S: Scalar>(v: &mut Vec3<S>) {
    let len = v.norm();
    debug_assert!(len > S::ZERO, "normalize() called on a zero-length vector");
    *v = *v / len;
}

#[inline]
pub fn dot_product<S: Scalar>(a: Vec3<S>, b: Vec3<S>) -> S {
    a.dot(b)
}

/// Right-handed cross product: `cross_product(x, y) == z`.
#[inline]
pub fn cross_product<S: Scalar>(a: Vec3<S>, b: Vec3<S>) -> Vec3<S> {
    a.cross(b)
}

/// Component-wise negation.
#[inline]
pub fn inverse<S: Scalar>(v: Vec3<S>) -> Vec3<S> {
    -v
}

/// -1, 0 or 1 depending on the sign of `value`.
#[inline]
pub fn signum<T: PartialOrd + Default>(value: T) -> i32 {
    let zero = T::default();
    if value > zero {
        1
    } else if value < zero {
        -1
    } else {
        0
    }
}

/// Area of the triangle `p0, p1, p2` by Heron's formula.
///
/// The points are expected counter-clockwise. Collinear points give 0: the
/// product under the square root is clamped at zero because cancellation in
/// the semi-perimeter terms can push it slightly negative.
pub fn triangle_area<S: Scalar>(p0: Vec2<S>, p1: Vec2<S>, p2: Vec2<S>) -> S {
    let a = p0.distance(p1);
    let b = p1.distance(p2);
    let c = p2.distance(p0);

    let s = (a + b + c) * S::HALF;
    let radicand = s * (s - a) * (s - b) * (s - c);

    radicand.max(S::ZERO).sqrt()
}

#[inline]
pub fn rect_area<S: Scalar>(a: S, b: S) -> S {
    a * b
}

#[inline]
pub fn deg_to_rad<S: Scalar>(deg: S) -> S {
    deg / S::from_i32(180) * S::PI
}

#[inline]
pub fn rad_to_deg<S: Scalar>(rad: S) -> S {
    rad * S::from_i32(180) / S::PI
}

/// Spherical angles to a Cartesian vector.
///
/// `theta` is the polar angle (about the x axis) and `phi` the azimuth
/// (about the y axis), both in radians and counter-clockwise. With both at
/// zero the result points along +y:
///
/// ```text
/// x = -r sin(theta) sin(phi)
/// y =  r cos(theta)
/// z = -r sin(theta) cos(phi)
/// ```
pub fn polar_to_vector<S: Scalar>(theta: S, phi: S, r: S) -> Vec3<S> {
    let (sin_theta, cos_theta) = theta.sin_cos();
    let (sin_phi, cos_phi) = phi.sin_cos();

    Vec3::new(
        -r * sin_theta * sin_phi,
        r * cos_theta,
        -r * sin_theta * cos_phi,
    )
}

/// [`polar_to_vector`] on the unit sphere.
#[inline]
pub fn polar_to_direction<S: Scalar>(theta: S, phi: S) -> Vec3<S> {
    polar_to_vector(theta, phi, S::ONE)
}

/// Angle-axis to Euler angles in the crate's convention (see
/// [`Quat::from_euler`](crate::Quat::from_euler)).
///
/// `axis` must be unit length; this is not checked. The returned vector holds
/// the rotation about X in `x`, about Y in `y` and about Z in `z`.
///
/// Near gimbal lock (`z` close to ±π/2) the `asin` argument approaches ±1 and
/// the X and Y angles lose precision. The argument is deliberately not
/// clamped, so a non-unit axis surfaces as NaN instead of a plausible angle.
pub fn angle_axis_to_euler<S: Scalar>(angle: S, axis: Vec3<S>) -> Vec3<S> {
    let (s, c) = angle.sin_cos();
    let t = S::ONE - c;
    let Vec3 { x, y, z } = axis;

    Vec3::new(
        (x * s - y * z * t).atan2(S::ONE - (x * x + z * z) * t),
        (y * s - x * z * t).atan2(S::ONE - (y * y + z * z) * t),
        (x * y * t + z * s).asin(),
    )
}
