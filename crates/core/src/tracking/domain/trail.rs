use std::collections::VecDeque;

use crate::shared::point::Point;

/// Bounded, most-recent-first history of object centers.
///
/// `None` entries mark frames where nothing was found; they break the
/// drawn path but still occupy a slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Trail {
    points: VecDeque<Option<Point>>,
    capacity: usize,
}

impl Trail {
    pub fn new(capacity: usize) -> Self {
        debug_assert!(capacity > 0, "trail capacity must be positive");
        Self {
            points: VecDeque::with_capacity(capacity + 1),
            capacity,
        }
    }

    /// Inserts at the front, evicting the oldest entry once full.
    pub fn push(&mut self, point: Option<Point>) {
        self.points.push_front(point);
        while self.points.len() > self.capacity {
            self.points.pop_back();
        }
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn get(&self, index: usize) -> Option<Point> {
        self.points.get(index).copied().flatten()
    }

    pub fn iter(&self) -> impl Iterator<Item = Option<Point>> + '_ {
        self.points.iter().copied()
    }

    /// Adjacent pairs `(i, newer, older)` for `i` in `1..len`, skipping
    /// pairs with a missing end.
    pub fn segments(&self) -> impl Iterator<Item = (usize, Point, Point)> + '_ {
        (1..self.points.len()).filter_map(move |i| {
            let newer = self.points[i - 1]?;
            let older = self.points[i]?;
            Some((i, newer, older))
        })
    }

    /// Line thickness for segment `i`: `round(sqrt(capacity / (i + 1)) * 2.5)`,
    /// at least 1. Recent segments are thick, old ones thin.
    pub fn thickness(&self, i: usize) -> i32 {
        let t = (self.capacity as f64 / (i + 1) as f64).sqrt() * 2.5;
        (t.round() as i32).max(1)
    }
}
