//! Allocation persistence seam.
//!
//! The engine never touches storage; callers hand each produced batch to
//! an [`AllocationStore`]. Replacement is atomic per exam: readers observe
//! either the previous complete plan or the new one, never a mix.

mod memory;

pub use memory::MemoryAllocationStore;

use uuid::Uuid;

use crate::model::SeatAllocation;

/// Storage for allocation batches, keyed by exam.
///
/// Implementations must be safe to share across threads; each method is a
/// single atomic step from the caller's perspective.
pub trait AllocationStore: Send + Sync {
    /// Atomically replaces the allocation set for an exam.
    ///
    /// Every allocation previously stored for `exam_id` is discarded and
    /// the new batch takes its place. Other exams are untouched.
    fn replace_for_exam(&self, exam_id: Uuid, allocations: Vec<SeatAllocation>);

    /// Removes every allocation for the exam.
    fn clear_exam(&self, exam_id: Uuid);

    /// All allocations for the exam, in the order they were produced
    /// (hall by hall, seat index ascending).
    fn for_exam(&self, exam_id: Uuid) -> Vec<SeatAllocation>;

    /// The seat of a single student in the exam, if one was allocated.
    ///
    /// `None` is the normal state for a student whose exam has no plan
    /// yet, not an error.
    fn for_student(&self, exam_id: Uuid, student_id: Uuid) -> Option<SeatAllocation>;
}
