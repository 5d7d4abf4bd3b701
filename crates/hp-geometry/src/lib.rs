//! `hp-geometry`: floor plan, authored paths, and position resolution.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`location`]   | `Location`, `LocationKind`                                |
//! | [`path`]       | `Path` (authored waypoints), `Polyline` (resolved points) |
//! | [`floor_plan`] | `FloorPlan` collection, `LocationLookup` trait            |
//! | [`resolve`]    | `resolve_position`, `path_length`                         |
//! | [`error`]      | `GeometryError`, `GeometryResult<T>`                      |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                       |
//! |---------|--------------------------------------------------------------|
//! | `serde` | Derives `Serialize`/`Deserialize` on public types.           |

pub mod error;
pub mod floor_plan;
pub mod location;
pub mod path;
pub mod resolve;


pub use error::{GeometryError, GeometryResult};
pub use floor_plan::{FloorPlan, LocationLookup};
pub use location::{Location, LocationKind};
pub use path::{Path, Polyline};
pub use resolve::{path_length, resolve_position};
