use crate::{Scalar, Vec3};
use core::fmt;

/// One of the three coordinate axes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Axis {
    X = 0,
    Y = 1,
    Z = 2,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::X, Axis::Y, Axis::Z];

    /// Unit basis vector along this axis.
    #[inline]
    pub fn vector<S: Scalar>(self) -> Vec3<S> {
        match self {
            Axis::X => Vec3::x(),
            Axis::Y => Vec3::y(),
            Axis::Z => Vec3::z(),
        }
    }

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Returned when converting an out-of-range index into an [`Axis`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InvalidAxis(pub usize);

impl fmt::Display for InvalidAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "axis index {} out of range (expected 0, 1 or 2)", self.0)
    }
}

impl core::error::Error for InvalidAxis {}

impl TryFrom<usize> for Axis {
    type Error = InvalidAxis;

    fn try_from(index: usize) -> Result<Self, Self::Error> {
        Axis::ALL.get(index).copied().ok_or(InvalidAxis(index))
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::X => f.write_str("x"),
            Axis::Y => f.write_str("y"),
            Axis::Z => f.write_str("z"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn basis_vectors() {
        assert_eq!(Axis::X.vector::<f32>(), Vec3::new(1.0, 0.0, 0.0));
        assert_eq!(Axis::Y.vector::<f32>(), Vec3::new(0.0, 1.0, 0.0));
        assert_eq!(Axis::Z.vector::<f32>(), Vec3::new(0.0, 0.0, 1.0));
    }

    #[test]
    fn index_roundtrip() {
        for axis in Axis::ALL {
            assert_eq!(Axis::try_from(axis.index()), Ok(axis));
        }
        assert_eq!(Axis::try_from(3), Err(InvalidAxis(3)));
    }
}
