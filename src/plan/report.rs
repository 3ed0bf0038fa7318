//! Read-side views over an allocation set.

use crate::model::{Exam, Hall, SeatAllocation, Student};

/// One seated student in a hall view.
#[derive(Debug, Clone)]
pub struct SeatedStudent {
    pub seat_number: String,
    pub student: Student,
}

/// A hall together with its seated students, in seat order.
#[derive(Debug, Clone)]
pub struct HallAllocation {
    pub hall: Hall,
    pub seats: Vec<SeatedStudent>,
}

/// Groups an allocation batch into per-hall seat maps.
///
/// Halls keep their input order; within a hall the batch is already in
/// seat order, which is preserved. Allocations referencing students or
/// halls missing from the inputs are dropped from the view.
pub fn hall_allocations(
    allocations: &[SeatAllocation],
    students: &[Student],
    halls: &[Hall],
) -> Vec<HallAllocation> {
    halls
        .iter()
        .map(|hall| {
            let seats = allocations
                .iter()
                .filter(|a| a.hall_id == hall.id)
                .filter_map(|a| {
                    students
                        .iter()
                        .find(|s| s.id() == a.student_id)
                        .map(|student| SeatedStudent {
                            seat_number: a.seat_number.clone(),
                            student: student.clone(),
                        })
                })
                .collect();
            HallAllocation {
                hall: hall.clone(),
                seats,
            }
        })
        .collect()
}

/// A student's seat joined with the exam and hall it belongs to.
#[derive(Debug, Clone)]
pub struct SeatTicket {
    pub exam: Exam,
    pub hall: Hall,
    pub seat_number: String,
}

/// Outcome of a roll/register number lookup.
#[derive(Debug, Clone)]
pub struct SeatLookup {
    pub student: Student,
    /// The seat, once one has been allocated. `None` means the student
    /// exists but no plan covers them yet.
    pub seat: Option<SeatTicket>,
}

/// Finds a student by roll or register number and joins their seat.
///
/// Matching ignores surrounding whitespace and ASCII case, the way the
/// number is typically typed in. Returns `None` only when no student
/// carries the number; a found student without an allocation is a valid
/// lookup result.
pub fn lookup_by_number(
    number: &str,
    students: &[Student],
    allocations: &[SeatAllocation],
    exams: &[Exam],
    halls: &[Hall],
) -> Option<SeatLookup> {
    let query = number.trim();
    let student = students
        .iter()
        .find(|s| s.number().eq_ignore_ascii_case(query))?;

    let seat = allocations
        .iter()
        .find(|a| a.student_id == student.id())
        .and_then(|a| {
            let exam = exams.iter().find(|e| e.id == a.exam_id)?;
            let hall = halls.iter().find(|h| h.id == a.hall_id)?;
            Some(SeatTicket {
                exam: exam.clone(),
                hall: hall.clone(),
                seat_number: a.seat_number.clone(),
            })
        });

    Some(SeatLookup {
        student: student.clone(),
        seat,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::allocator::{AllocationRunner, AllocatorConfig};
    use crate::model::{ExamSession, SchoolStudent};
    use chrono::Utc;
    use uuid::Uuid;

    fn school(roll: &str, standard: u8) -> Student {
        Student::School(SchoolStudent {
            id: Uuid::new_v4(),
            name: format!("Student {roll}"),
            roll_number: roll.into(),
            standard,
            section: "A".into(),
            institution_id: Uuid::nil(),
        })
    }

    fn fixture() -> (Vec<Student>, Vec<Hall>, Exam, Vec<SeatAllocation>) {
        let students = vec![
            school("R001", 5),
            school("R002", 7),
            school("R003", 5),
            school("R004", 7),
        ];
        let halls = vec![
            Hall::new("H1", 2, Uuid::nil()),
            Hall::new("H2", 2, Uuid::nil()),
        ];
        let exam = Exam::new("Midterm", Utc::now(), ExamSession::Morning, Uuid::nil());
        let outcome = AllocationRunner::run(
            &students,
            &halls,
            exam.id,
            &AllocatorConfig::default().with_seed(42),
        );
        (students, halls, exam, outcome.allocations)
    }

    #[test]
    fn test_hall_allocations_groups_in_seat_order() {
        let (students, halls, _exam, allocations) = fixture();

        let view = hall_allocations(&allocations, &students, &halls);

        assert_eq!(view.len(), 2);
        assert_eq!(view[0].hall.id, halls[0].id);
        assert_eq!(view[1].hall.id, halls[1].id);
        for hall_view in &view {
            assert_eq!(hall_view.seats.len(), 2);
            let labels: Vec<&str> = hall_view
                .seats
                .iter()
                .map(|s| s.seat_number.as_str())
                .collect();
            let expected = vec![
                format!("{}-001", hall_view.hall.hall_number),
                format!("{}-002", hall_view.hall.hall_number),
            ];
            assert_eq!(labels, expected);
        }
    }

    #[test]
    fn test_hall_allocations_drops_unknown_students() {
        let (students, halls, _exam, allocations) = fixture();

        // A roster missing one student: their seat disappears from the view.
        let partial = &students[1..];
        let view = hall_allocations(&allocations, partial, &halls);
        let total: usize = view.iter().map(|h| h.seats.len()).sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn test_lookup_joins_exam_and_hall() {
        let (students, halls, exam, allocations) = fixture();

        let found = lookup_by_number("R001", &students, &allocations, &[exam.clone()], &halls)
            .expect("student exists");

        assert_eq!(found.student.number(), "R001");
        let ticket = found.seat.expect("seat allocated");
        assert_eq!(ticket.exam.id, exam.id);
        assert!(halls.iter().any(|h| h.id == ticket.hall.id));
        assert!(ticket.seat_number.starts_with(&ticket.hall.hall_number));
    }

    #[test]
    fn test_lookup_is_case_and_whitespace_tolerant() {
        let (students, halls, exam, allocations) = fixture();

        let found = lookup_by_number("  r002 ", &students, &allocations, &[exam], &halls);
        assert!(found.is_some());
    }

    #[test]
    fn test_lookup_without_allocation_is_pending_not_error() {
        let (students, halls, exam, _allocations) = fixture();

        let found = lookup_by_number("R003", &students, &[], &[exam], &halls)
            .expect("student exists");
        assert!(found.seat.is_none());
    }

    #[test]
    fn test_lookup_unknown_number_is_none() {
        let (students, halls, exam, allocations) = fixture();

        assert!(lookup_by_number("R999", &students, &allocations, &[exam], &halls).is_none());
    }
}
