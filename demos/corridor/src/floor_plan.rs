//! Demo school floor plan.
//!
//! Three classrooms and two restrooms on a 1000×1100 map image, with four
//! hand-drawn corridors.  Set `HALLPASS_FLOOR_PLAN` to a JSON file with the
//! same shape to use a different map.

use std::path::Path as FsPath;

use anyhow::{Context, Result};
use serde::Deserialize;

use hp_core::{LocationId, Point};
use hp_geometry::{FloorPlan, Location, LocationKind, Path};

/// Build the built-in plan.
///
/// Returns `(plan, [chemistry, history, biology, restroom_1f, restroom_2f])`.
pub fn build_floor_plan() -> Result<(FloorPlan, [LocationId; 5])> {
    let mut plan = FloorPlan::new();

    let chemistry   = plan.add_location("Chemistry", LocationKind::Classroom, Point::new(268.0, 1056.0));
    let history     = plan.add_location("History", LocationKind::Classroom, Point::new(602.0, 362.0));
    let biology     = plan.add_location("Biology", LocationKind::Classroom, Point::new(662.0, 717.0));
    let restroom_1f = plan.add_location("First Floor Restroom", LocationKind::Restroom, Point::new(271.0, 558.0));
    let restroom_2f = plan.add_location("Second Floor Restroom", LocationKind::Restroom, Point::new(271.0, 205.0));

    plan.add_path(chemistry, restroom_1f, vec![Point::new(268.0, 800.0), Point::new(271.0, 700.0)])?;
    plan.add_path(history,   restroom_1f, vec![Point::new(450.0, 460.0), Point::new(350.0, 558.0)])?;
    plan.add_path(history,   restroom_2f, vec![Point::new(450.0, 300.0), Point::new(350.0, 205.0)])?;
    plan.add_path(biology,   restroom_2f, vec![Point::new(662.0, 500.0), Point::new(450.0, 205.0)])?;

    Ok((plan, [chemistry, history, biology, restroom_1f, restroom_2f]))
}

#[derive(Deserialize)]
struct FloorPlanFile {
    locations: Vec<Location>,
    paths:     Vec<Path>,
}

/// Load an authored plan from JSON, validating ids and path endpoints.
pub fn load_floor_plan(file: &FsPath) -> Result<FloorPlan> {
    let raw = std::fs::read_to_string(file)
        .with_context(|| format!("reading floor plan {}", file.display()))?;
    let parsed: FloorPlanFile = serde_json::from_str(&raw)
        .with_context(|| format!("parsing floor plan {}", file.display()))?;
    Ok(FloorPlan::from_parts(parsed.locations, parsed.paths)?)
}
