use crate::{Point, Rect};
use arrayvec::ArrayVec;

pub(super) type Link = Option<Box<Node>>;

/// Splitting axis at `depth`: x on even levels, y on odd levels.
#[inline(always)]
pub(super) fn axis_at(depth: usize) -> usize {
    depth & 1
}

#[derive(Debug)]
pub(super) struct Node {
    pub point: Point,
    // region reachable only through this subtree
    pub rect: Rect,
    pub left_bottom: Link,
    pub right_top: Link,
}

/// Counters reported by the queries, for tracing.
#[derive(Debug, Clone, Copy, Default)]
pub(super) struct Visits {
    pub visited: usize,
    pub pruned: usize,
}

impl Node {
    pub fn new(point: Point, rect: Rect) -> Self {
        Self {
            point,
            rect,
            left_bottom: None,
            right_top: None,
        }
    }

    fn children(&self) -> impl Iterator<Item = &Node> {
        self.left_bottom
            .as_deref()
            .into_iter()
            .chain(self.right_top.as_deref())
    }
}

/// Insert `point` below `slot`, which covers `rect` and splits on x.
/// Equal keys go right/top. Return whether a new node was created.
pub(super) fn insert(mut slot: &mut Link, point: Point, mut rect: Rect) -> bool {
    let mut depth = 0;
    while let Some(node) = slot {
        if node.point == point {
            return false;
        }
        let axis = axis_at(depth);
        let key = node.point.coord(axis);
        let [left_bottom, right_top] = node.rect.split(axis, key);
        if point.coord(axis) < key {
            rect = left_bottom;
            slot = &mut node.left_bottom;
        } else {
            rect = right_top;
            slot = &mut node.right_top;
        }
        depth += 1;
    }
    *slot = Some(Box::new(Node::new(point, rect)));
    true
}

pub(super) fn contains(mut link: Option<&Node>, point: &Point) -> bool {
    let mut depth = 0;
    while let Some(node) = link {
        if node.point == *point {
            return true;
        }
        let axis = axis_at(depth);
        link = if point.coord(axis) < node.point.coord(axis) {
            node.left_bottom.as_deref()
        } else {
            node.right_top.as_deref()
        };
        depth += 1;
    }
    false
}

/// Push every point of the subtree inside `query` to `out`.
/// Children whose rectangle misses `query` are skipped with their whole subtree.
pub(super) fn find_in_range(root: &Node, query: &Rect, out: &mut Vec<Point>) -> Visits {
    let mut visits = Visits::default();
    let mut todo = vec![root];
    while let Some(node) = todo.pop() {
        visits.visited += 1;
        if query.contains(&node.point) {
            out.push(node.point);
        }
        for child in node.children() {
            if child.rect.intersects(query) {
                todo.push(child);
            } else {
                visits.pruned += 1;
            }
        }
    }
    visits
}

/// Closest point to `query` in the subtree, with its squared distance.
///
/// The running best starts at the root. A subtree is skipped once its rectangle is at least as
/// far as the best so far. Of two children the closer one is searched first so the bound
/// tightens before the other one is considered. Ties keep the point found first.
pub(super) fn nearest(root: &Node, query: &Point) -> (Point, f64, Visits) {
    let mut visits = Visits::default();
    let mut best = root.point;
    let mut best_dist = best.distance_squared_to(query);

    let mut todo = vec![(0.0, root)];
    while let Some((rect_dist, node)) = todo.pop() {
        // `best_dist` may have shrunk since this node was pushed
        if rect_dist >= best_dist {
            visits.pruned += 1;
            continue;
        }
        visits.visited += 1;

        let d = node.point.distance_squared_to(query);
        if d < best_dist {
            best = node.point;
            best_dist = d;
        }

        let mut children = node
            .children()
            .map(|child| (child.rect.distance_squared_to(query), child))
            .collect::<ArrayVec<[(f64, &Node); 2]>>();
        if children.len() == 2 && children[1].0 < children[0].0 {
            children.swap(0, 1);
        }
        // the stack is LIFO: push the far child first
        while let Some((d, child)) = children.pop() {
            if d < best_dist {
                todo.push((d, child));
            } else {
                visits.pruned += 1;
            }
        }
    }
    (best, best_dist, visits)
}

/// Pre-order walk; left/bottom before right/top.
pub(super) fn for_each<F>(root: &Node, mut f: F)
where
    F: FnMut(&Point),
{
    let mut todo = vec![root];
    while let Some(node) = todo.pop() {
        f(&node.point);
        todo.extend(node.right_top.as_deref());
        todo.extend(node.left_bottom.as_deref());
    }
}

pub(super) fn height(root: &Node) -> usize {
    let mut max = 0;
    let mut todo = vec![(root, 1)];
    while let Some((node, level)) = todo.pop() {
        max = max.max(level);
        todo.extend(node.children().map(|child| (child, level + 1)));
    }
    max
}

/// Unlink the subtree node by node. Dropping a `Box<Node>` directly recurses once per level,
/// which overflows the stack on a degenerate chain.
pub(super) fn dismantle(link: Link) {
    let mut todo: Vec<Box<Node>> = link.into_iter().collect();
    while let Some(mut node) = todo.pop() {
        todo.extend(node.left_bottom.take());
        todo.extend(node.right_top.take());
    }
}
