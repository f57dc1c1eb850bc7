//! 2-d tree: a binary search tree over points that splits on x at even depths and on y at odd
//! depths. Every node caches the rectangle its subtree covers, which lets `find_in_range` and
//! `nearest` skip whole subtrees.
//!
//! There is no deletion; `clear` drops everything at once.
mod node;

use crate::{Error, Point, Rect, Result};
use node::Link;
use rayon::prelude::*;
use tracing::{debug, trace};

#[derive(Debug)]
pub struct KdTree {
    root: Link,
    len: usize,
    domain: Rect,
    // reject points outside of `domain`
    bounded: bool,
}

impl Default for KdTree {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for KdTree {
    fn drop(&mut self) {
        node::dismantle(self.root.take());
    }
}

impl KdTree {
    /// Empty tree over the whole plane. Any point is accepted.
    pub fn new() -> Self {
        Self {
            root: None,
            len: 0,
            domain: Rect::EVERYTHING,
            bounded: false,
        }
    }

    /// Empty tree that only accepts points of the unit square.
    pub fn unit_square() -> Self {
        Self::with_domain(Rect::UNIT)
    }

    /// Empty tree that only accepts points inside `domain` (edges included).
    /// The root's rectangle is `domain`.
    pub fn with_domain(domain: Rect) -> Self {
        Self {
            root: None,
            len: 0,
            domain,
            bounded: true,
        }
    }

    pub fn domain(&self) -> Rect {
        self.domain
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn len(&self) -> usize {
        self.len
    }

    /// Number of distinct points stored. Same as `len`.
    pub fn size(&self) -> usize {
        self.len
    }

    /// Levels in the tree; 0 when empty.
    pub fn height(&self) -> usize {
        self.root.as_deref().map(node::height).unwrap_or(0)
    }

    pub fn clear(&mut self) {
        node::dismantle(self.root.take());
        self.len = 0;
    }

    /// Add `point` unless an equal point is already stored.
    ///
    /// Returns `Ok(true)` if the point was added, `Ok(false)` if it was already present.
    /// On a tree with a domain, points outside of it are refused and the tree is left as is.
    pub fn insert(&mut self, point: Point) -> Result<bool> {
        if self.bounded && !self.domain.contains(&point) {
            debug!(?point, domain = ?self.domain, "insert refused, point is outside of the domain");
            return Err(Error::OutOfDomain(point));
        }
        let added = node::insert(&mut self.root, point, self.domain);
        if added {
            self.len += 1;
        } else {
            trace!(?point, "insert ignored, point is already present");
        }
        Ok(added)
    }

    /// `insert` for callers holding a nullable point.
    pub fn try_insert(&mut self, point: Option<Point>) -> Result<bool> {
        let point = required(point, "insert", "point is missing")?;
        self.insert(point)
    }

    pub fn contains(&self, point: &Point) -> bool {
        node::contains(self.root.as_deref(), point)
    }

    pub fn try_contains(&self, point: Option<&Point>) -> Result<bool> {
        let point = required(point, "contains", "point is missing")?;
        Ok(self.contains(point))
    }

    /// Every stored point inside `rect`, edges included. No particular order.
    pub fn range(&self, rect: &Rect) -> Vec<Point> {
        let mut out = Vec::new();
        self.find_in_range(rect, &mut out);
        out
    }

    pub fn try_range(&self, rect: Option<&Rect>) -> Result<Vec<Point>> {
        let rect = required(rect, "range", "rectangle is missing")?;
        Ok(self.range(rect))
    }

    /// Append every stored point inside `rect` to `out`. `out` is not cleared first.
    pub fn find_in_range(&self, rect: &Rect, out: &mut Vec<Point>) {
        let root = match self.root.as_deref() {
            Some(root) => root,
            None => return,
        };
        let start = out.len();
        let visits = node::find_in_range(root, rect, out);
        trace!(
            visited = visits.visited,
            pruned = visits.pruned,
            found = out.len() - start,
            "range query"
        );
    }

    /// A stored point closest to `point`, or `None` if the tree is empty.
    /// Which one of several equally close points is returned is unspecified, but stable for
    /// a given tree.
    pub fn nearest(&self, point: &Point) -> Option<Point> {
        let root = self.root.as_deref()?;
        let (best, dist, visits) = node::nearest(root, point);
        trace!(
            visited = visits.visited,
            pruned = visits.pruned,
            distance_squared = dist,
            "nearest query"
        );
        Some(best)
    }

    pub fn try_nearest(&self, point: Option<&Point>) -> Result<Option<Point>> {
        let point = required(point, "nearest", "point is missing")?;
        Ok(self.nearest(point))
    }

    /// `nearest` for every query, answered in parallel. The output is in query order.
    pub fn nearest_batch(&self, queries: &[Point]) -> Vec<Option<Point>> {
        queries.par_iter().map(|q| self.nearest(q)).collect()
    }

    /// Call `f` once per stored point, parents before children.
    pub fn for_each<F>(&self, f: F)
    where
        F: FnMut(&Point),
    {
        if let Some(root) = self.root.as_deref() {
            node::for_each(root, f);
        }
    }

    /// All stored points, in the same order as `for_each`.
    pub fn points(&self) -> Vec<Point> {
        let mut out = Vec::with_capacity(self.len);
        self.for_each(|p| out.push(*p));
        out
    }
}

fn required<T>(arg: Option<T>, op: &'static str, what: &'static str) -> Result<T> {
    arg.ok_or_else(|| {
        debug!(op, what, "invalid argument");
        Error::InvalidArgument { op, what }
    })
}

impl Extend<Point> for KdTree {
    /// Points outside of the domain are skipped.
    fn extend<It>(&mut self, it: It)
    where
        It: IntoIterator<Item = Point>,
    {
        for p in it {
            // refusals are already logged by `insert`
            let _ = self.insert(p);
        }
    }
}

impl std::iter::FromIterator<Point> for KdTree {
    fn from_iter<It>(it: It) -> Self
    where
        It: IntoIterator<Item = Point>,
    {
        let mut res = Self::new();
        res.extend(it);
        res
    }
}
