//! Allocation run execution.

use chrono::Utc;
use rand::Rng;
use uuid::Uuid;

use super::config::AllocatorConfig;
use crate::model::{seat_number, AdjacencyGroup, Hall, SeatAllocation, Student};
use crate::random::{create_rng, shuffle};

/// Result of an allocation run.
#[derive(Debug, Clone)]
pub struct AllocationOutcome {
    /// Seat assignments, ordered by hall (in input order) then by seat
    /// index ascending within each hall.
    pub allocations: Vec<SeatAllocation>,

    /// Ids of students left without a seat because capacity ran out.
    pub unseated: Vec<Uuid>,

    /// Number of seats where no remaining student had a differing
    /// adjacency group and the constraint was relaxed.
    pub relaxed_seats: usize,
}

/// Executes the two-phase seat allocation algorithm.
///
/// # Usage
///
/// ```
/// use examseat::allocator::{AllocationRunner, AllocatorConfig};
/// use examseat::sample;
/// use uuid::Uuid;
///
/// let institution = Uuid::new_v4();
/// let roster = sample::school_roster(institution, 30, 7);
/// let halls = sample::halls(institution, 2, 20);
///
/// let outcome =
///     AllocationRunner::run(&roster, &halls, Uuid::new_v4(), &AllocatorConfig::default());
/// assert_eq!(outcome.allocations.len(), 30);
/// ```
pub struct AllocationRunner;

impl AllocationRunner {
    /// Runs an allocation with the config's seed, or a fresh one.
    ///
    /// Total over well-formed inputs: an empty roster or hall list yields
    /// an empty plan, halls with zero capacity are skipped, and a roster
    /// larger than total capacity is cut off once the seats run out.
    /// Capacity preconditions are the caller's to check beforehand (see
    /// [`SeatingPlanner`](crate::plan::SeatingPlanner)).
    pub fn run(
        students: &[Student],
        halls: &[Hall],
        exam_id: Uuid,
        config: &AllocatorConfig,
    ) -> AllocationOutcome {
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        Self::run_with_rng(students, halls, exam_id, &mut rng)
    }

    /// Runs an allocation drawing entropy from the given source.
    ///
    /// Placement is best-effort: the forward scan is bounded by the
    /// remaining roster and never reorders already-seated students, so a
    /// lone remaining student is seated even when it matches its
    /// neighbour's group. [`AllocationOutcome::relaxed_seats`] reports
    /// how often the scan found nobody suitable.
    pub fn run_with_rng<R: Rng>(
        students: &[Student],
        halls: &[Hall],
        exam_id: Uuid,
        rng: &mut R,
    ) -> AllocationOutcome {
        if students.is_empty() || halls.is_empty() {
            return AllocationOutcome {
                allocations: Vec::new(),
                unseated: students.iter().map(Student::id).collect(),
                relaxed_seats: 0,
            };
        }

        // Working copy of the roster order; callers keep their slice.
        let mut order: Vec<&Student> = students.iter().collect();
        shuffle(&mut order, rng);

        let allocated_at = Utc::now();
        let mut allocations = Vec::new();
        let mut cursor = 0usize;
        let mut relaxed_seats = 0usize;

        for hall in halls {
            // The first seat of each hall is unconstrained.
            let mut last_group: Option<AdjacencyGroup> = None;

            let mut seat_index = 1u32;
            while seat_index <= hall.seating_capacity && cursor < order.len() {
                let pick = match last_group {
                    Some(prev) => {
                        match (cursor..order.len())
                            .find(|&i| order[i].adjacency_group() != prev)
                        {
                            Some(i) => i,
                            None => {
                                // Everyone left shares the group; relax.
                                relaxed_seats += 1;
                                cursor
                            }
                        }
                    }
                    None => cursor,
                };
                order.swap(cursor, pick);
                let student = order[cursor];

                allocations.push(SeatAllocation {
                    id: Uuid::new_v4(),
                    exam_id,
                    hall_id: hall.id,
                    student_id: student.id(),
                    seat_number: seat_number(&hall.hall_number, seat_index),
                    allocated_at,
                });

                last_group = Some(student.adjacency_group());
                cursor += 1;
                seat_index += 1;
            }
        }

        let unseated = order[cursor..].iter().map(|s| s.id()).collect();

        AllocationOutcome {
            allocations,
            unseated,
            relaxed_seats,
        }
    }
}
