use hp_core::{HpError, LocationId, PathId, StudentId};
use hp_geometry::GeometryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TrackerError {
    #[error("student name must not be empty")]
    EmptyName,

    #[error("location {0} not found")]
    UnknownLocation(LocationId),

    #[error("no path from {start} to {destination}")]
    NoPathBetween {
        start:       LocationId,
        destination: LocationId,
    },

    #[error("student {0} not found")]
    StudentNotFound(StudentId),

    #[error("student {0} has not returned yet")]
    StillOut(StudentId),

    #[error("student id {0} is the reserved invalid id")]
    InvalidStudentId(StudentId),

    #[error("student id space is exhausted")]
    StudentIdsExhausted,

    #[error("student {0} appears more than once")]
    DuplicateStudent(StudentId),

    #[error("student {student} references {path}, which does not connect its start and destination")]
    PathMismatch {
        student: StudentId,
        path:    PathId,
    },

    #[error("floor plan error: {0}")]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Config(#[from] HpError),
}

pub type TrackerResult<T> = Result<T, TrackerError>;
