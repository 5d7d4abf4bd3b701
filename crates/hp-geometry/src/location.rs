//! Named places on the floor plan.

use std::fmt;
use std::str::FromStr;

use hp_core::{HpError, LocationId, Point};

/// What a location is used for.  Drives the pass-duration budget.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum LocationKind {
    Classroom,
    Restroom,
}

impl LocationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            LocationKind::Classroom => "classroom",
            LocationKind::Restroom  => "restroom",
        }
    }
}

impl fmt::Display for LocationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LocationKind {
    type Err = HpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "classroom" => Ok(LocationKind::Classroom),
            "restroom"  => Ok(LocationKind::Restroom),
            other       => Err(HpError::Parse(format!("unknown location kind {other:?}"))),
        }
    }
}

/// A classroom or restroom pinned to a point on the map.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Location {
    pub id:       LocationId,
    pub name:     String,
    pub kind:     LocationKind,
    pub position: Point,
}

impl Location {
    pub fn new(id: LocationId, name: impl Into<String>, kind: LocationKind, position: Point) -> Self {
        Self {
            id,
            name: name.into(),
            kind,
            position,
        }
    }
}
