use crate::math::Vector2;
use std::collections::VecDeque;

/// Bounded history of points, oldest first.
///
/// Once full, each push drops the oldest point.
#[derive(Debug, Clone)]
pub struct Trace {
    points: VecDeque<Vector2>,
    capacity: usize,
}

impl Trace {
    /// Creates an empty trace holding at most `capacity` points
    pub fn new(capacity: usize) -> Self {
        Self {
            points: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends a point, evicting the oldest one when full
    pub fn push(&mut self, point: Vector2) {
        if self.capacity == 0 {
            return;
        }
        if self.points.len() == self.capacity {
            self.points.pop_front();
        }
        self.points.push_back(point);
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

    /// Most recent point
    pub fn latest(&self) -> Option<Vector2> {
        self.points.back().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vector2> {
        self.points.iter()
    }

    /// Flattens the trace into `[x0, y0, x1, y1, ...]` for a line strip
    pub fn to_flat_vertices(&self) -> Vec<f32> {
        self.points.iter().flat_map(|p| p.to_f32_array()).collect()
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }
}
