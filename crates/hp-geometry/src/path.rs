//! Authored paths and their resolved point sequences.

use hp_core::{LocationId, PathId, Point};

use crate::LocationLookup;

/// A hand-drawn route between two locations.
///
/// Only the intermediate waypoints are stored; the endpoints are looked up
/// from the referenced locations at resolution time so that moving a
/// location on the map drags every attached path along with it.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Path {
    pub id:        PathId,
    pub start:     LocationId,
    pub end:       LocationId,
    /// May be empty, in which case the path is a straight line.
    pub waypoints: Vec<Point>,
}

impl Path {
    pub fn new(id: PathId, start: LocationId, end: LocationId, waypoints: Vec<Point>) -> Self {
        Self { id, start, end, waypoints }
    }

    /// `true` if this path leads from `start` to `end` (direction matters).
    #[inline]
    pub fn connects(&self, start: LocationId, end: LocationId) -> bool {
        self.start == start && self.end == end
    }
}

/// The full point sequence of a path: `[start, ...waypoints, end]`.
#[derive(Clone, Debug, PartialEq)]
pub struct Polyline {
    pub points: Vec<Point>,
}

impl Polyline {
    /// Assemble the polyline for `path`.  Returns `None` if either endpoint
    /// cannot be resolved.
    pub fn from_path<L: LocationLookup + ?Sized>(path: &Path, lookup: &L) -> Option<Self> {
        let start = lookup.position_of(path.start)?;
        let end   = lookup.position_of(path.end)?;

        let mut points = Vec::with_capacity(path.waypoints.len() + 2);
        points.push(start);
        points.extend_from_slice(&path.waypoints);
        points.push(end);
        Some(Self { points })
    }

    /// Euclidean length of every consecutive segment, in order.
    pub fn segment_lengths(&self) -> Vec<f64> {
        self.points.windows(2).map(|w| w[0].distance(w[1])).collect()
    }

    /// Total arc length.
    pub fn length(&self) -> f64 {
        self.segment_lengths().iter().sum()
    }

    /// The point `distance` units along the polyline from its first point.
    ///
    /// Walks segments accumulating length until the one containing
    /// `distance` is found, then interpolates linearly inside it.
    /// Zero-length segments are stepped over.  Returns `None` when no
    /// segment contains `distance` (negative, past the end, or a polyline
    /// of zero total length).
    pub fn point_at_distance(&self, distance: f64) -> Option<Point> {
        if distance < 0.0 {
            return None;
        }
        let mut accumulated = 0.0;
        for (w, len) in self.points.windows(2).zip(self.segment_lengths()) {
            if len > 0.0 && distance <= accumulated + len {
                let t = (distance - accumulated) / len;
                return Some(w[0].lerp(w[1], t));
            }
            accumulated += len;
        }
        None
    }
}
