//! Seating plan generation over an allocation store.

use tracing::{info, warn};
use uuid::Uuid;

use super::error::PlanError;
use crate::allocator::{AllocationRunner, AllocatorConfig};
use crate::model::{Hall, SeatAllocation, Student};
use crate::store::AllocationStore;

/// Generates, regenerates, and clears seating plans.
///
/// Wraps the engine with the precondition checks the engine deliberately
/// does not perform, and persists each run's batch with atomic-replace
/// semantics. Regenerating is just calling [`generate`](Self::generate)
/// again: the previous plan for the exam is discarded in the same step.
pub struct SeatingPlanner<S> {
    store: S,
}

impl<S: AllocationStore> SeatingPlanner<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    /// The underlying store, for read-side consumers that want direct access.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Runs the engine for an exam and stores the resulting plan.
    ///
    /// `halls` must already be filtered to the halls selected for this
    /// exam, in fill order. Returns the stored batch.
    pub fn generate(
        &self,
        roster: &[Student],
        halls: &[Hall],
        exam_id: Uuid,
        config: &AllocatorConfig,
    ) -> Result<Vec<SeatAllocation>, PlanError> {
        if roster.is_empty() {
            return Err(PlanError::EmptyRoster);
        }
        if halls.is_empty() {
            return Err(PlanError::NoHallsSelected);
        }
        let seats: u64 = halls.iter().map(|h| u64::from(h.seating_capacity)).sum();
        if roster.len() as u64 > seats {
            return Err(PlanError::InsufficientCapacity {
                students: roster.len(),
                seats,
            });
        }

        let outcome = AllocationRunner::run(roster, halls, exam_id, config);
        if outcome.relaxed_seats > 0 {
            warn!(
                %exam_id,
                relaxed = outcome.relaxed_seats,
                "adjacency constraint relaxed on some seats"
            );
        }
        info!(
            %exam_id,
            students = roster.len(),
            halls = halls.len(),
            allocated = outcome.allocations.len(),
            "generated seating plan"
        );

        self.store.replace_for_exam(exam_id, outcome.allocations.clone());
        Ok(outcome.allocations)
    }

    /// Discards the exam's plan.
    pub fn clear(&self, exam_id: Uuid) {
        self.store.clear_exam(exam_id);
    }

    /// The stored plan for an exam, in hall-then-seat order.
    pub fn allocations_for(&self, exam_id: Uuid) -> Vec<SeatAllocation> {
        self.store.for_exam(exam_id)
    }

    /// A single student's seat, if the exam has one allocated for them.
    pub fn find_seat(&self, exam_id: Uuid, student_id: Uuid) -> Option<SeatAllocation> {
        self.store.for_student(exam_id, student_id)
    }
}
