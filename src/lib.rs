//! Randomized exam-hall seat allocation.
//!
//! Turns a roster of students and an ordered list of halls into a seating
//! plan that is uniformly shuffled yet keeps students of the same class
//! standard (school) or department (college) out of consecutive seats
//! wherever the roster allows it.
//!
//! - **Model** ([`model`]): the tagged [`Student`](model::Student) sum
//!   type, halls, exams, institutions, and the
//!   [`SeatAllocation`](model::SeatAllocation) record.
//! - **Engine** ([`allocator`]): Fisher-Yates shuffle followed by a
//!   constrained greedy placement with bounded lookahead and a relaxation
//!   fallback, seedable through
//!   [`AllocatorConfig`](allocator::AllocatorConfig).
//! - **Store** ([`store`]): the persistence seam with atomic per-exam
//!   replacement, plus an in-memory reference implementation.
//! - **Plan** ([`plan`]): precondition checks, generate/regenerate/clear
//!   against a store, and read-side seat maps and lookups.
//! - **Sample data** ([`sample`]): seeded demo rosters and halls.
//!
//! # Architecture
//!
//! The engine is a pure function of its inputs plus an injected randomness
//! source: no storage access, no state between runs, no errors. Everything
//! a user must be told before a run is checked in [`plan`], and every run's
//! output replaces the exam's previous plan in a single atomic step.

pub mod allocator;
pub mod model;
pub mod plan;
pub mod random;
pub mod sample;
pub mod store;
