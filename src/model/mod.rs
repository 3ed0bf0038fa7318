//! Domain entities.
//!
//! Students come in two shapes, school and college, unified by the
//! [`Student`] sum type; the attribute the allocator keeps apart between
//! neighbouring seats is exposed as an [`AdjacencyGroup`]. Halls, exams,
//! and institutions carry the surrounding roster data; [`SeatAllocation`]
//! is the record the engine produces.

mod allocation;
mod exam;
mod hall;
mod student;

pub use allocation::{seat_number, SeatAllocation};
pub use exam::{Exam, ExamSession, ExamStatus, Institution, InstitutionKind};
pub use hall::Hall;
pub use student::{AdjacencyGroup, CollegeStudent, Department, SchoolStudent, Student};
