//! Precondition failures reported before the engine runs.

use thiserror::Error;

/// Why a seating plan could not be generated.
///
/// These are user-facing conditions, not engine failures: the engine is
/// total over well-formed inputs and is only invoked once they pass.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PlanError {
    /// The roster has nobody to seat.
    #[error("no students to allocate")]
    EmptyRoster,

    /// No halls were selected for the exam.
    #[error("no halls selected for the exam")]
    NoHallsSelected,

    /// The selected halls cannot seat the whole roster.
    #[error("{students} students but only {seats} seats; add halls or remove students")]
    InsufficientCapacity { students: usize, seats: u64 },
}
