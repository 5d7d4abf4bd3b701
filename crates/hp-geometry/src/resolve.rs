//! Arc-length position resolution along an authored path.
//!
//! Resolution never fails.  Unresolvable location references degrade to
//! [`Point::ORIGIN`] and non-finite progress is treated as "not started",
//! so the rendering layer only ever sees finite coordinates.

use hp_core::Point;

use crate::{LocationLookup, Path, Polyline};

/// The point at fraction `progress` of `path`'s arc length.
///
/// - `progress <= 0` → the start location's position.
/// - `progress >= 1` → the end location's position.
/// - otherwise the polyline `[start, ...waypoints, end]` is walked until the
///   segment containing `progress * total_length` is found and the point is
///   interpolated inside it.  A zero-length polyline yields the end position.
///
/// Pure: identical inputs always give identical output.
pub fn resolve_position<L: LocationLookup + ?Sized>(path: &Path, progress: f64, lookup: &L) -> Point {
    let progress = if progress.is_nan() { 0.0 } else { progress };

    if progress <= 0.0 {
        return lookup.position_of(path.start).unwrap_or(Point::ORIGIN);
    }
    if progress >= 1.0 {
        return lookup.position_of(path.end).unwrap_or(Point::ORIGIN);
    }

    let Some(line) = Polyline::from_path(path, lookup) else {
        return Point::ORIGIN;
    };
    let target = progress * line.length();

    line.point_at_distance(target)
        .or_else(|| line.points.last().copied())
        .unwrap_or(Point::ORIGIN)
}

/// Total arc length of `path`, or `None` if an endpoint is missing.
pub fn path_length<L: LocationLookup + ?Sized>(path: &Path, lookup: &L) -> Option<f64> {
    Polyline::from_path(path, lookup).map(|line| line.length())
}
