use std::collections::BTreeMap;

use super::times::Timing;

/// A subtitle paired with its current timing and the timing it should have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SyncPoint {
    pub subtitle_number: usize,
    pub current: Timing,
    pub correct: Timing,
}

impl SyncPoint {
    pub fn new(subtitle_number: usize, current: Timing, correct: Timing) -> Self {
        Self {
            subtitle_number,
            current,
            correct,
        }
    }
}

/// Sync points ordered by subtitle number, at most one per subtitle
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SyncPoints {
    points: BTreeMap<usize, SyncPoint>,
}

impl SyncPoints {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    // @returns: Point at the given position in subtitle-number order
    pub fn get(&self, position: usize) -> Option<&SyncPoint> {
        self.points.values().nth(position)
    }

    // @returns: Position of the point for the given subtitle
    pub fn index_of(&self, subtitle_number: usize) -> Option<usize> {
        self.points.keys().position(|&n| n == subtitle_number)
    }

    pub fn contains(&self, subtitle_number: usize) -> bool {
        self.points.contains_key(&subtitle_number)
    }

    /// Adds a point, replacing any point for the same subtitle.
    ///
    /// Returns whether a point was replaced.
    pub fn add(&mut self, point: SyncPoint) -> bool {
        self.points.insert(point.subtitle_number, point).is_some()
    }

    /// Removes the point at the given position
    pub fn remove(&mut self, position: usize) -> Option<SyncPoint> {
        let key = *self.points.keys().nth(position)?;
        self.points.remove(&key)
    }

    pub fn first(&self) -> Option<&SyncPoint> {
        self.points.values().next()
    }

    pub fn last(&self) -> Option<&SyncPoint> {
        self.points.values().next_back()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SyncPoint> {
        self.points.values()
    }
}

impl FromIterator<SyncPoint> for SyncPoints {
    fn from_iter<I: IntoIterator<Item = SyncPoint>>(iter: I) -> Self {
        let mut points = Self::new();
        for point in iter {
            points.add(point);
        }
        points
    }
}
