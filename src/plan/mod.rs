//! Caller-side orchestration around the engine.
//!
//! The engine itself raises no errors; everything a user must be told
//! before a run (empty roster, no halls picked, not enough seats) is
//! checked here, and the produced batch is written to an
//! [`AllocationStore`](crate::store::AllocationStore) with atomic-replace
//! semantics. The read side joins allocations back to students, halls,
//! and exams for seat maps and "find my seat" lookups.

mod error;
mod report;
mod service;

pub use error::PlanError;
pub use report::{hall_allocations, lookup_by_number, HallAllocation, SeatLookup, SeatTicket, SeatedStudent};
pub use service::SeatingPlanner;
