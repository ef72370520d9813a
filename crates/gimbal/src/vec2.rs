use crate::Scalar;
use core::ops::Sub;

/// 2D point, the input to [`triangle_area`](crate::math::triangle_area).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2<S> {
    pub x: S,
    pub y: S,
}

impl<S: Scalar> Vec2<S> {
    #[inline]
    pub fn new(x: S, y: S) -> Self {
        Self { x, y }
    }

    /// Euclidean distance between two points.
    #[inline]
    pub fn distance(self, other: Self) -> S {
        let d = other - self;
        (d.x * d.x + d.y * d.y).sqrt()
    }
}

impl<S: Scalar> Sub for Vec2<S> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}
