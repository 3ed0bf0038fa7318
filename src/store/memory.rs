//! In-memory allocation store for single-process use.

use std::sync::RwLock;

use tracing::info;
use uuid::Uuid;

use super::AllocationStore;
use crate::model::SeatAllocation;

/// In-memory [`AllocationStore`] backed by an `RwLock`.
///
/// Replace and clear hold the write lock for their whole delete-then-insert
/// step, which is what makes them atomic to readers.
#[derive(Debug, Default)]
pub struct MemoryAllocationStore {
    allocations: RwLock<Vec<SeatAllocation>>,
}

impl MemoryAllocationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total stored allocations across all exams.
    pub fn len(&self) -> usize {
        self.allocations.read().expect("allocation store poisoned").len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl AllocationStore for MemoryAllocationStore {
    fn replace_for_exam(&self, exam_id: Uuid, allocations: Vec<SeatAllocation>) {
        let count = allocations.len();
        let mut all = self.allocations.write().expect("allocation store poisoned");
        all.retain(|a| a.exam_id != exam_id);
        all.extend(allocations);
        drop(all);
        info!(%exam_id, count, "replaced exam allocations");
    }

    fn clear_exam(&self, exam_id: Uuid) {
        let mut all = self.allocations.write().expect("allocation store poisoned");
        let before = all.len();
        all.retain(|a| a.exam_id != exam_id);
        let removed = before - all.len();
        drop(all);
        info!(%exam_id, removed, "cleared exam allocations");
    }

    fn for_exam(&self, exam_id: Uuid) -> Vec<SeatAllocation> {
        self.allocations
            .read()
            .expect("allocation store poisoned")
            .iter()
            .filter(|a| a.exam_id == exam_id)
            .cloned()
            .collect()
    }

    fn for_student(&self, exam_id: Uuid, student_id: Uuid) -> Option<SeatAllocation> {
        self.allocations
            .read()
            .expect("allocation store poisoned")
            .iter()
            .find(|a| a.exam_id == exam_id && a.student_id == student_id)
            .cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn allocation(exam_id: Uuid, student_id: Uuid, seat: &str) -> SeatAllocation {
        SeatAllocation {
            id: Uuid::new_v4(),
            exam_id,
            hall_id: Uuid::new_v4(),
            student_id,
            seat_number: seat.into(),
            allocated_at: Utc::now(),
        }
    }

    #[test]
    fn test_replace_discards_previous_batch() {
        let store = MemoryAllocationStore::new();
        let exam = Uuid::new_v4();

        let first = vec![
            allocation(exam, Uuid::new_v4(), "H1-001"),
            allocation(exam, Uuid::new_v4(), "H1-002"),
        ];
        store.replace_for_exam(exam, first.clone());

        let second = vec![allocation(exam, Uuid::new_v4(), "H1-001")];
        store.replace_for_exam(exam, second.clone());

        let visible = store.for_exam(exam);
        assert_eq!(visible, second);
        assert!(visible.iter().all(|a| !first.contains(a)));
    }

    #[test]
    fn test_replace_leaves_other_exams_alone() {
        let store = MemoryAllocationStore::new();
        let exam_a = Uuid::new_v4();
        let exam_b = Uuid::new_v4();

        let batch_b = vec![allocation(exam_b, Uuid::new_v4(), "H2-001")];
        store.replace_for_exam(exam_a, vec![allocation(exam_a, Uuid::new_v4(), "H1-001")]);
        store.replace_for_exam(exam_b, batch_b.clone());

        store.replace_for_exam(exam_a, vec![]);

        assert!(store.for_exam(exam_a).is_empty());
        assert_eq!(store.for_exam(exam_b), batch_b);
    }

    #[test]
    fn test_clear_removes_only_that_exam() {
        let store = MemoryAllocationStore::new();
        let exam_a = Uuid::new_v4();
        let exam_b = Uuid::new_v4();

        store.replace_for_exam(exam_a, vec![allocation(exam_a, Uuid::new_v4(), "H1-001")]);
        store.replace_for_exam(exam_b, vec![allocation(exam_b, Uuid::new_v4(), "H2-001")]);

        store.clear_exam(exam_a);

        assert!(store.for_exam(exam_a).is_empty());
        assert_eq!(store.for_exam(exam_b).len(), 1);
        assert_eq!(store.len(), 1);

        store.clear_exam(exam_b);
        assert!(store.is_empty());
    }

    #[test]
    fn test_for_exam_preserves_insertion_order() {
        let store = MemoryAllocationStore::new();
        let exam = Uuid::new_v4();

        let batch: Vec<SeatAllocation> = (1..=5)
            .map(|i| allocation(exam, Uuid::new_v4(), &format!("H1-{i:03}")))
            .collect();
        store.replace_for_exam(exam, batch.clone());

        assert_eq!(store.for_exam(exam), batch);
    }

    #[test]
    fn test_for_student_lookup() {
        let store = MemoryAllocationStore::new();
        let exam = Uuid::new_v4();
        let student = Uuid::new_v4();

        store.replace_for_exam(
            exam,
            vec![
                allocation(exam, Uuid::new_v4(), "H1-001"),
                allocation(exam, student, "H1-002"),
            ],
        );

        let found = store.for_student(exam, student).unwrap();
        assert_eq!(found.seat_number, "H1-002");

        // Unallocated student is a valid None, not an error.
        assert!(store.for_student(exam, Uuid::new_v4()).is_none());
        assert!(store.for_student(Uuid::new_v4(), student).is_none());
    }
}
