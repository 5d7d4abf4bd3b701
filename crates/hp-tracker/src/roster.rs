//! List views over the pass roster.
//!
//! Active passes come first, overdue ones at the very top, then by how soon
//! they are due.  Returned passes follow, most recently issued first.

use std::cmp::Ordering;

use hp_core::Timestamp;
use hp_journey::{HallPass, PassStatus, classify};

/// Which passes a roster view shows.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum RosterFilter {
    #[default]
    All,
    Active,
    Returned,
}

impl RosterFilter {
    #[inline]
    pub fn admits(self, pass: &HallPass) -> bool {
        match self {
            RosterFilter::All      => true,
            RosterFilter::Active   => !pass.returned(),
            RosterFilter::Returned => pass.returned(),
        }
    }
}

/// Filter plus case-insensitive name search.
#[derive(Clone, Debug, Default)]
pub struct RosterQuery {
    pub filter: RosterFilter,
    pub search: String,
}

impl RosterQuery {
    pub fn new(filter: RosterFilter, search: impl Into<String>) -> Self {
        Self { filter, search: search.into() }
    }

    pub fn matches(&self, pass: &HallPass) -> bool {
        self.filter.admits(pass)
            && (self.search.is_empty()
                || pass.name().to_lowercase().contains(&self.search.to_lowercase()))
    }
}

/// Passes matching `query`, in roster order.
pub fn roster<'a>(passes: &'a [HallPass], query: &RosterQuery, now: Timestamp) -> Vec<&'a HallPass> {
    let mut out: Vec<&HallPass> = passes.iter().filter(|p| query.matches(p)).collect();
    out.sort_by(|a, b| compare_roster(a, b, now));
    out
}

/// Outstanding passes, overdue first, then soonest due.
pub fn active_by_urgency(passes: &[HallPass], now: Timestamp) -> Vec<&HallPass> {
    let mut out: Vec<&HallPass> = passes.iter().filter(|p| !p.returned()).collect();
    out.sort_by(|a, b| compare_active(a, b, now));
    out
}

fn compare_roster(a: &HallPass, b: &HallPass, now: Timestamp) -> Ordering {
    match (a.returned(), b.returned()) {
        (false, true)  => Ordering::Less,
        (true, false)  => Ordering::Greater,
        (false, false) => compare_active(a, b, now),
        (true, true)   => b.start_time().cmp(&a.start_time()),
    }
}

fn compare_active(a: &HallPass, b: &HallPass, now: Timestamp) -> Ordering {
    let overdue = |p: &HallPass| classify(p.expected_return_time(), now) == PassStatus::Overdue;
    overdue(b)
        .cmp(&overdue(a))
        .then_with(|| a.expected_return_time().cmp(&b.expected_return_time()))
}
