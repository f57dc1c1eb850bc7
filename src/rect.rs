use crate::{Error, Point, Result};
use std::cmp::Ordering;
use std::f64::INFINITY;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Closed axis aligned rectangle `[from, to]`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawRect"))]
pub struct Rect {
    from: Point,
    to: Point,
}

/// Unchecked wire form of `Rect`; deserialization goes through `Rect::try_new`.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawRect {
    from: Point,
    to: Point,
}

#[cfg(feature = "serde")]
impl std::convert::TryFrom<RawRect> for Rect {
    type Error = Error;

    fn try_from(raw: RawRect) -> Result<Self> {
        Rect::try_new(raw.from[0], raw.from[1], raw.to[0], raw.to[1])
    }
}

impl Rect {
    pub const UNIT: Rect = Rect {
        from: Point([0.0, 0.0]),
        to: Point([1.0, 1.0]),
    };

    /// The whole plane.
    pub const EVERYTHING: Rect = Rect {
        from: Point([-INFINITY, -INFINITY]),
        to: Point([INFINITY, INFINITY]),
    };

    /// # Panics
    /// If `xmin > xmax` or `ymin > ymax`. NaN bounds are let through; queries with them return
    /// unspecified results.
    pub fn new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Self {
        // NaN compares as unordered and passes
        assert!(xmin.partial_cmp(&xmax) != Some(Ordering::Greater));
        assert!(ymin.partial_cmp(&ymax) != Some(Ordering::Greater));
        Self {
            from: Point::new(xmin, ymin),
            to: Point::new(xmax, ymax),
        }
    }

    /// Like `new`, but returns an error instead of panicking on NaN or inverted bounds.
    /// Infinite bounds are allowed.
    pub fn try_new(xmin: f64, ymin: f64, xmax: f64, ymax: f64) -> Result<Self> {
        if [xmin, ymin, xmax, ymax].iter().any(|v| v.is_nan()) {
            return Err(Error::InvalidArgument {
                op: "Rect::try_new",
                what: "bounds must not be NaN",
            });
        }
        if xmin > xmax || ymin > ymax {
            return Err(Error::InvalidArgument {
                op: "Rect::try_new",
                what: "min bounds must not exceed max bounds",
            });
        }
        Ok(Self::new(xmin, ymin, xmax, ymax))
    }

    pub fn xmin(&self) -> f64 {
        self.from[0]
    }

    pub fn ymin(&self) -> f64 {
        self.from[1]
    }

    pub fn xmax(&self) -> f64 {
        self.to[0]
    }

    pub fn ymax(&self) -> f64 {
        self.to[1]
    }

    /// Inclusive on every edge.
    pub fn contains(&self, point: &Point) -> bool {
        let [x, y] = **point;

        self.from[0] <= x && self.from[1] <= y && x <= self.to[0] && y <= self.to[1]
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        if self.to[0] < other.from[0] || self.from[0] > other.to[0] {
            return false;
        }
        if self.to[1] < other.from[1] || self.from[1] > other.to[1] {
            return false;
        }
        true
    }

    /// Squared euclidean distance to the closest point of the rectangle. 0 if `point` is inside.
    pub fn distance_squared_to(&self, point: &Point) -> f64 {
        let dx = axis_gap(self.from[0], self.to[0], point[0]);
        let dy = axis_gap(self.from[1], self.to[1], point[1]);
        dx * dx + dy * dy
    }

    pub fn distance_to(&self, point: &Point) -> f64 {
        self.distance_squared_to(point).sqrt()
    }

    /// Cut the rectangle in two at `value` on `axis` (0 is x, 1 is y).
    /// Returns `[left_bottom, right_top]`; both halves contain the cut line.
    pub fn split(&self, axis: usize, value: f64) -> [Rect; 2] {
        let axis = axis & 1;
        let mut left_bottom = *self;
        let mut right_top = *self;
        left_bottom.to.0[axis] = value;
        right_top.from.0[axis] = value;
        [left_bottom, right_top]
    }
}

#[inline]
fn axis_gap(min: f64, max: f64, v: f64) -> f64 {
    if v < min {
        min - v
    } else if v > max {
        v - max
    } else {
        0.0
    }
}
