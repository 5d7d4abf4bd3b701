//! Geometry-subsystem error type.

use thiserror::Error;

use hp_core::{LocationId, PathId};

/// Errors produced by `FloorPlan` mutations.
///
/// Position resolution itself never fails; see [`crate::resolve`].
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("location {0} not found")]
    LocationNotFound(LocationId),

    #[error("path {0} not found")]
    PathNotFound(PathId),

    #[error("path endpoint {0} does not exist")]
    UnknownEndpoint(LocationId),

    #[error("{what} at position {expected} carries id {found}")]
    Misnumbered {
        what:     &'static str,
        expected: u32,
        found:    u32,
    },
}

pub type GeometryResult<T> = Result<T, GeometryError>;
