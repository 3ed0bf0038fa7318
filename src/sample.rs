//! Seeded demo data for tests, benches, and quick starts.

use rand::Rng;
use uuid::Uuid;

use crate::model::{Hall, SchoolStudent, Student};
use crate::random::create_rng;

const FIRST_NAMES: &[&str] = &[
    "Aarav", "Aditya", "Ananya", "Arjun", "Bhavna", "Chirag", "Deepak", "Diya",
    "Divya", "Farhan", "Gaurav", "Harini", "Harsh", "Isha", "Ishan", "Kavya",
    "Meera", "Nikhil", "Pooja", "Rahul", "Sneha", "Tara", "Varun", "Yash",
];

const LAST_NAMES: &[&str] = &[
    "Agarwal", "Bansal", "Bhatt", "Chandra", "Chopra", "Desai", "Dutta", "Iyer",
    "Joshi", "Kulkarni", "Mehta", "Nair", "Patel", "Reddy", "Sharma", "Verma",
];

const SECTIONS: &[&str] = &["A", "B", "C", "D"];

/// Generates a school roster of `count` students.
///
/// Names, standards (1 through 12), and sections are drawn from the seeded
/// PRNG; roll numbers are sequential. The same seed produces the same
/// roster apart from the freshly minted ids.
pub fn school_roster(institution_id: Uuid, count: usize, seed: u64) -> Vec<Student> {
    let mut rng = create_rng(seed);
    (0..count)
        .map(|i| {
            let first = FIRST_NAMES[rng.random_range(0..FIRST_NAMES.len())];
            let last = LAST_NAMES[rng.random_range(0..LAST_NAMES.len())];
            Student::School(SchoolStudent {
                id: Uuid::new_v4(),
                name: format!("{first} {last}"),
                roll_number: format!("R{:04}", i + 1),
                standard: rng.random_range(1..=12),
                section: SECTIONS[rng.random_range(0..SECTIONS.len())].to_string(),
                institution_id,
            })
        })
        .collect()
}

/// Generates `count` halls numbered `H1`, `H2`, ... with equal capacity.
pub fn halls(institution_id: Uuid, count: usize, capacity: u32) -> Vec<Hall> {
    (1..=count)
        .map(|i| Hall::new(format!("H{i}"), capacity, institution_id))
        .collect()
}
