//! Strongly typed identifier wrappers.
//!
//! All IDs are `Copy + Ord + Hash` so they can be used as map keys and sorted
//! collection elements without ceremony.  Locations and paths are never
//! deleted, so their ids double as dense `Vec` indices (`id.index()`).
//! Student ids come from an [`IdAllocator`] because passes can be removed.

use std::fmt;

/// Generate a typed ID wrapper around a primitive integer.
macro_rules! typed_id {
    ($(#[$attr:meta])* $vis:vis struct $name:ident($inner:ty);) => {
        $(#[$attr])*
        #[derive(Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        $vis struct $name(pub $inner);

        impl $name {
            /// Sentinel meaning "no valid ID".
            pub const INVALID: $name = $name(<$inner>::MAX);

            /// Cast to `usize` for direct use as a `Vec` index.
            #[inline(always)]
            pub fn index(self) -> usize {
                self.0 as usize
            }

            #[inline(always)]
            pub fn is_valid(self) -> bool {
                self != Self::INVALID
            }
        }

        impl Default for $name {
            /// Returns the `INVALID` sentinel so uninitialized IDs are visibly invalid.
            #[inline(always)]
            fn default() -> Self {
                Self::INVALID
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}({})", stringify!($name), self.0)
            }
        }
    };
}

typed_id! {
    /// A classroom or restroom on the floor plan.
    pub struct LocationId(u32);
}

typed_id! {
    /// An authored polyline between two locations.
    pub struct PathId(u32);
}

typed_id! {
    /// A hall-pass record.
    pub struct StudentId(u32);
}

/// Monotonic counter that hands out fresh student ids.
///
/// Ids are never reused.  Once every value below the `INVALID` sentinel has
/// been handed out the allocator is exhausted and yields `None`.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IdAllocator {
    next: u32,
}

impl IdAllocator {
    /// Highest raw id the allocator will ever return.
    pub const MAX_RAW: u32 = u32::MAX - 1;

    pub fn new() -> Self {
        Self::default()
    }

    /// Start handing out ids after `last` (used when seeding from existing records).
    pub fn starting_after(last: u32) -> Self {
        Self { next: last.saturating_add(1) }
    }

    /// Take the next raw id, or `None` once the id space is used up.
    pub fn next_raw(&mut self) -> Option<u32> {
        if self.next > Self::MAX_RAW {
            return None;
        }
        let id = self.next;
        self.next += 1;
        Some(id)
    }

    pub fn next_student(&mut self) -> Option<StudentId> {
        self.next_raw().map(StudentId)
    }
}
