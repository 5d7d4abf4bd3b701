//! The `FloorPlan`: every authored location and path.

use hp_core::{LocationId, PathId, Point};

use crate::{GeometryError, GeometryResult, Location, LocationKind, Path};

// ── LocationLookup ────────────────────────────────────────────────────────────

/// Resolves location ids to locations.
///
/// Position resolution and journey simulation are generic over this trait so
/// they work against a [`FloorPlan`] or a bare `[Location]` slice.
pub trait LocationLookup {
    fn location(&self, id: LocationId) -> Option<&Location>;

    #[inline]
    fn position_of(&self, id: LocationId) -> Option<Point> {
        self.location(id).map(|l| l.position)
    }
}

impl LocationLookup for [Location] {
    fn location(&self, id: LocationId) -> Option<&Location> {
        self.iter().find(|l| l.id == id)
    }
}

impl LocationLookup for Vec<Location> {
    fn location(&self, id: LocationId) -> Option<&Location> {
        self.as_slice().location(id)
    }
}

// ── FloorPlan ─────────────────────────────────────────────────────────────────

/// All locations and paths on the map.
///
/// Neither locations nor paths are ever deleted, so ids are dense and equal
/// to the entity's position in its `Vec`.  Do not push into the vectors
/// directly; use [`add_location`](Self::add_location) and
/// [`add_path`](Self::add_path), which keep that invariant.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FloorPlan {
    locations: Vec<Location>,
    paths:     Vec<Path>,
}

impl FloorPlan {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a plan from previously authored data (e.g. a JSON file).
    ///
    /// Fails if ids are not dense `0..n` in order, or if any path references a
    /// location that does not exist.
    pub fn from_parts(locations: Vec<Location>, paths: Vec<Path>) -> GeometryResult<Self> {
        for (i, loc) in locations.iter().enumerate() {
            if loc.id.index() != i {
                return Err(GeometryError::Misnumbered {
                    what:     "location",
                    expected: i as u32,
                    found:    loc.id.0,
                });
            }
        }
        for (i, path) in paths.iter().enumerate() {
            if path.id.index() != i {
                return Err(GeometryError::Misnumbered {
                    what:     "path",
                    expected: i as u32,
                    found:    path.id.0,
                });
            }
        }
        let plan = Self { locations, paths };
        for path in &plan.paths {
            plan.check_endpoints(path.start, path.end)?;
        }
        Ok(plan)
    }

    // ── Locations ─────────────────────────────────────────────────────────

    pub fn locations(&self) -> &[Location] {
        &self.locations
    }

    pub fn add_location(
        &mut self,
        name:     impl Into<String>,
        kind:     LocationKind,
        position: Point,
    ) -> LocationId {
        let id = LocationId(self.locations.len() as u32);
        self.locations.push(Location::new(id, name, kind, position));
        id
    }

    /// Move a location.  Every path attached to it follows automatically.
    pub fn update_location_position(&mut self, id: LocationId, position: Point) -> GeometryResult<()> {
        let loc = self
            .locations
            .get_mut(id.index())
            .ok_or(GeometryError::LocationNotFound(id))?;
        loc.position = position;
        Ok(())
    }

    /// Locations of one kind, in id order (e.g. restrooms for a destination
    /// picker).
    pub fn locations_of_kind(&self, kind: LocationKind) -> impl Iterator<Item = &Location> + '_ {
        self.locations.iter().filter(move |l| l.kind == kind)
    }

    // ── Paths ─────────────────────────────────────────────────────────────

    pub fn paths(&self) -> &[Path] {
        &self.paths
    }

    pub fn path(&self, id: PathId) -> Option<&Path> {
        self.paths.get(id.index())
    }

    /// Author a new path.  Both endpoints must already exist.
    pub fn add_path(
        &mut self,
        start:     LocationId,
        end:       LocationId,
        waypoints: Vec<Point>,
    ) -> GeometryResult<PathId> {
        self.check_endpoints(start, end)?;
        let id = PathId(self.paths.len() as u32);
        self.paths.push(Path::new(id, start, end, waypoints));
        Ok(id)
    }

    /// Replace a path's waypoints wholesale.
    pub fn update_path_waypoints(&mut self, id: PathId, waypoints: Vec<Point>) -> GeometryResult<()> {
        let path = self
            .paths
            .get_mut(id.index())
            .ok_or(GeometryError::PathNotFound(id))?;
        path.waypoints = waypoints;
        Ok(())
    }

    /// The first authored path leading from `start` to `end`, if any.
    pub fn path_between(&self, start: LocationId, end: LocationId) -> Option<&Path> {
        self.paths.iter().find(|p| p.connects(start, end))
    }

    /// Every location reachable from `start` by some authored path.
    pub fn destinations_from(&self, start: LocationId) -> impl Iterator<Item = LocationId> + '_ {
        self.paths.iter().filter(move |p| p.start == start).map(|p| p.end)
    }

    fn check_endpoints(&self, start: LocationId, end: LocationId) -> GeometryResult<()> {
        for id in [start, end] {
            if self.location(id).is_none() {
                return Err(GeometryError::UnknownEndpoint(id));
            }
        }
        Ok(())
    }
}

impl LocationLookup for FloorPlan {
    #[inline]
    fn location(&self, id: LocationId) -> Option<&Location> {
        self.locations.get(id.index())
    }
}
