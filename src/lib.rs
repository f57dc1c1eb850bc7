//! 2-d tree over points in the plane.
//! # Contracts:
//! - Coordinates should be finite. `Point::new` does not check this, `Point::try_new` does.
//! - The unit square is a convention, not a requirement. `KdTree::new` accepts any finite
//!   point, `KdTree::with_domain` rejects points outside of its domain.
//!
pub mod error;
pub mod kdtree;
pub mod rect;

pub use error::{Error, Result};
pub use kdtree::KdTree;
pub use rect::Rect;

use std::ops::Deref;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point(pub [f64; 2]);

impl Deref for Point {
    type Target = [f64; 2];
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<[f64; 2]> for Point {
    fn from(p: [f64; 2]) -> Self {
        Self(p)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self([x, y])
    }
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self([x, y])
    }

    /// Like `new`, but rejects NaN and infinite coordinates.
    pub fn try_new(x: f64, y: f64) -> Result<Self> {
        if !x.is_finite() || !y.is_finite() {
            return Err(Error::InvalidArgument {
                op: "Point::try_new",
                what: "coordinates must be finite",
            });
        }
        Ok(Self([x, y]))
    }

    pub fn x(&self) -> f64 {
        self[0]
    }

    pub fn y(&self) -> f64 {
        self[1]
    }

    /// Coordinate on `axis`; 0 is x, 1 is y.
    #[inline]
    pub fn coord(&self, axis: usize) -> f64 {
        self[axis & 1]
    }

    pub fn distance_squared_to(&self, rhs: &Self) -> f64 {
        let x = self[0] - rhs[0];
        let y = self[1] - rhs[1];
        x * x + y * y
    }

    pub fn distance_to(&self, rhs: &Self) -> f64 {
        self.distance_squared_to(rhs).sqrt()
    }
}
