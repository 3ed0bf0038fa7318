//! Seat allocation engine.
//!
//! Two phases per run: a uniformly random Fisher-Yates shuffle of the
//! roster, then a greedy hall-by-hall placement that scans ahead through
//! the not-yet-seated students for one whose adjacency group differs from
//! the student just seated. When the scan finds nobody suitable the
//! constraint is relaxed rather than leaving the seat empty, so a run
//! always seats `min(roster, capacity)` students.
//!
//! The engine is a pure function of its inputs plus an injected randomness
//! source; it holds no state between runs and never touches storage.

mod config;
mod runner;

pub use config::AllocatorConfig;
pub use runner::{AllocationOutcome, AllocationRunner};
