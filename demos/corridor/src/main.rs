//! corridor: smallest end-to-end run of the hallpass tracker.
//!
//! Issues a handful of hall passes on a demo floor plan, drives the 100 ms
//! polling loop on a simulated clock, and prints marker snapshots as JSON
//! lines.  Halfway through, one student comes back and another leaves.
//!
//! Environment:
//!
//! | Variable                  | Default | Meaning                               |
//! |---------------------------|---------|---------------------------------------|
//! | `HALLPASS_TICK_MS`        | 100     | milliseconds per tick                 |
//! | `HALLPASS_TICKS`          | 1500    | ticks to run                          |
//! | `HALLPASS_SNAPSHOT_EVERY` | 100     | print a snapshot every N ticks        |
//! | `HALLPASS_REALTIME`       | unset   | `1` sleeps one interval per tick      |
//! | `HALLPASS_FLOOR_PLAN`     | unset   | JSON floor plan to use instead        |
//! | `RUST_LOG`                | info    | tracing filter                        |

mod floor_plan;

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use hp_core::{LocationId, Point, StudentId, Tick, Timestamp, TrackerConfig};
use hp_geometry::{FloorPlan, LocationKind, LocationLookup};
use hp_journey::{PassStatus, format_time_remaining};
use hp_tracker::{PositionMap, RosterQuery, TrackerBuilder, TrackerObserver};

use floor_plan::{build_floor_plan, load_floor_plan};

// ── Observer ──────────────────────────────────────────────────────────────────

#[derive(Serialize)]
struct Marker {
    student:   StudentId,
    position:  Point,
    progress:  f64,
    returning: bool,
}

#[derive(Serialize)]
struct Snapshot {
    tick:    u64,
    now_ms:  i64,
    markers: Vec<Marker>,
}

struct DemoObserver {
    snapshot_every: u64,
    realtime:       Option<Duration>,
    snapshots:      usize,
    overdue_alerts: usize,
}

impl TrackerObserver for DemoObserver {
    fn on_status_change(&mut self, student: StudentId, from: Option<PassStatus>, to: PassStatus) {
        if to == PassStatus::Overdue {
            self.overdue_alerts += 1;
        }
        info!(%student, from = from.map(PassStatus::as_str), to = to.as_str(), "status_changed");
    }

    fn on_positions(&mut self, tick: Tick, now: Timestamp, positions: &PositionMap) {
        if self.snapshot_every == 0 || tick.0 % self.snapshot_every != 0 {
            return;
        }
        let mut markers: Vec<Marker> = positions
            .iter()
            .map(|(&student, pos)| Marker {
                student,
                position:  pos.position,
                progress:  pos.progress,
                returning: pos.is_returning(),
            })
            .collect();
        markers.sort_by_key(|m| m.student);

        let snapshot = Snapshot { tick: tick.0, now_ms: now.as_millis(), markers };
        match serde_json::to_string(&snapshot) {
            Ok(line) => {
                println!("{line}");
                self.snapshots += 1;
            }
            Err(error) => warn!(%error, "snapshot_serialize_failed"),
        }
    }

    fn on_tick_end(&mut self, _tick: Tick, _positioned: usize) {
        if let Some(interval) = self.realtime {
            std::thread::sleep(interval);
        }
    }
}

// ── Setup ─────────────────────────────────────────────────────────────────────

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

fn env_or<T>(key: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match std::env::var(key) {
        Ok(raw) => raw.trim().parse().with_context(|| format!("invalid {key}={raw:?}")),
        Err(_)  => Ok(default),
    }
}

/// Pick a classroom → restroom pair that has an authored path, preferring
/// the `n`th classroom.
fn pass_route(plan: &FloorPlan, n: usize) -> Option<(LocationId, LocationId)> {
    let classrooms: Vec<LocationId> = plan
        .locations_of_kind(LocationKind::Classroom)
        .map(|l| l.id)
        .collect();
    let count = classrooms.len();
    (0..count)
        .map(|i| classrooms[(n + i) % count])
        .find_map(|start| plan.destinations_from(start).next().map(|dest| (start, dest)))
}

fn location_name(plan: &FloorPlan, id: LocationId) -> &str {
    plan.location(id).map(|l| l.name.as_str()).unwrap_or("?")
}

// ── main ──────────────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    init_tracing();

    let tick_interval_ms: u32 = env_or("HALLPASS_TICK_MS", TrackerConfig::DEFAULT_TICK_INTERVAL_MS)?;
    let total_ticks: u64      = env_or("HALLPASS_TICKS", 1_500)?;
    let snapshot_every: u64   = env_or("HALLPASS_SNAPSHOT_EVERY", 100)?;
    let realtime              = std::env::var("HALLPASS_REALTIME").is_ok_and(|v| v == "1");

    // 1. Floor plan.
    let plan = match std::env::var_os("HALLPASS_FLOOR_PLAN") {
        Some(file) => load_floor_plan(&PathBuf::from(file))?,
        None       => build_floor_plan()?.0,
    };
    info!(locations = plan.locations().len(), paths = plan.paths().len(), "floor_plan_ready");

    let routes: Vec<(LocationId, LocationId)> = (0..4).filter_map(|n| pass_route(&plan, n)).collect();
    if routes.is_empty() {
        bail!("floor plan has no classroom with a path to anywhere");
    }

    // 2. Tracker.
    let start = Timestamp::now();
    let config = TrackerConfig { start, tick_interval_ms, total_ticks };
    let mut tracker = TrackerBuilder::new(config).floor_plan(plan).build()?;
    info!(tick_interval_ms, total_ticks, "tracker_ready");

    // 3. Morning passes.
    let mut issued = Vec::new();
    for (name, &(from, to)) in ["Ada", "Grace", "Linus"].iter().zip(routes.iter().cycle()) {
        issued.push(tracker.issue_pass(name, from, to, start)?);
    }

    // 4. Run the first half, swap one student, run the rest.
    let mut obs = DemoObserver {
        snapshot_every,
        realtime: realtime.then(|| Duration::from_millis(tick_interval_ms as u64)),
        snapshots: 0,
        overdue_alerts: 0,
    };
    tracker.run_ticks(total_ticks / 2, &mut obs);

    let now = tracker.clock.now();
    tracker.mark_returned(issued[1])?;
    let (from, to) = routes[routes.len() - 1];
    issued.push(tracker.issue_pass("Alan", from, to, now)?);

    tracker.run(&mut obs);
    tracker.remove_student(issued[1])?;

    // 5. Summary.
    let now = tracker.clock.now();
    info!(
        snapshots = obs.snapshots,
        overdue_alerts = obs.overdue_alerts,
        clock = %tracker.clock,
        "run_complete"
    );

    println!();
    println!("{:<8} {:<24} {:<10} {:<10}", "Student", "Destination", "Status", "Remaining");
    println!("{}", "-".repeat(54));
    for pass in tracker.roster(&RosterQuery::default(), now) {
        let status = tracker
            .status_of(pass.id(), now)
            .map_or("returned", PassStatus::as_str);
        println!(
            "{:<8} {:<24} {:<10} {:<10}",
            pass.name(),
            location_name(tracker.floor_plan(), pass.destination()),
            status,
            format_time_remaining(pass.remaining_ms(now)),
        );
    }

    Ok(())
}
