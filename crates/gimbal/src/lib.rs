//! gimbal: quaternion and vector math for 3D orientation
//!
//! Rotation composition, vector rotation and conversions between
//! quaternions, angle-axis and Euler angles, plus the vector primitives they
//! are built on. Generic over the scalar type (`f32` is the reference
//! precision, `f64` works the same).
//!
//! # Design principles
//! - Generic over `Scalar` (f32, f64), no dynamic dispatch
//! - `#[repr(C)]` value types, freely copied
//! - No implicit normalization: callers normalize when they need a pure rotation
//! - Degenerate inputs are preconditions (`debug_assert!`), not error values;
//!   `try_normalize` is the checked alternative
//!
//! # Conventions
//! - `a * b` rotates by `b` first, then by `a`
//! - Euler angles are `Vec3 { x: about X, y: about Y, z: about Z }`, applied
//!   X, then Z, then Y (`Qy * Qz * Qx`)

#![no_std]

#[cfg(any(test, feature = "std"))]
extern crate std;

mod scalar;
mod vec2;
mod vec3;
mod quat;
mod axis;

pub mod math;

pub use scalar::Scalar;
pub use vec2::Vec2;
pub use vec3::Vec3;
pub use quat::Quat;
pub use axis::{Axis, InvalidAxis};

/// Single-precision quaternion, the reference instantiation.
pub type FloatQuat = Quat<f32>;

// Bytemuck impls for concrete f32/f64 types (generic structs can't derive Pod)
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($t:ty) => {
            // SAFETY: All fields are the same float type, #[repr(C)], no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        };
    }

    impl_pod!(Vec2<f32>);
    impl_pod!(Vec2<f64>);
    impl_pod!(Vec3<f32>);
    impl_pod!(Vec3<f64>);
    impl_pod!(Quat<f32>);
    impl_pod!(Quat<f64>);
}
