//! Student entities and the adjacency group key.

use std::fmt;

use uuid::Uuid;

/// Academic department of a college student.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Department {
    Cse,
    Ece,
    Mech,
    Civil,
    It,
    Eee,
    Aids,
}

impl Department {
    /// All departments, in display order.
    pub const ALL: [Department; 7] = [
        Department::Cse,
        Department::Ece,
        Department::Mech,
        Department::Civil,
        Department::It,
        Department::Eee,
        Department::Aids,
    ];

    /// The conventional abbreviation, as printed on hall tickets.
    pub fn as_str(&self) -> &'static str {
        match self {
            Department::Cse => "CSE",
            Department::Ece => "ECE",
            Department::Mech => "MECH",
            Department::Civil => "CIVIL",
            Department::It => "IT",
            Department::Eee => "EEE",
            Department::Aids => "AIDS",
        }
    }
}

impl fmt::Display for Department {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A school student. Identified by roll number; grouped by class standard.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SchoolStudent {
    pub id: Uuid,
    pub name: String,
    pub roll_number: String,
    /// Class standard, 1 through 12.
    pub standard: u8,
    /// Section letter within the standard.
    pub section: String,
    pub institution_id: Uuid,
}

/// A college student. Identified by register number; grouped by department.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CollegeStudent {
    pub id: Uuid,
    pub name: String,
    pub register_number: String,
    pub department: Department,
    /// Year of study, 1 through 4.
    pub year: u8,
    pub institution_id: Uuid,
}

/// A student is exactly one of the two variants.
///
/// The original roster data distinguished the shapes by which number field
/// happened to be present; here the discriminant is explicit and every
/// consumer dispatches by matching.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Student {
    School(SchoolStudent),
    College(CollegeStudent),
}

impl Student {
    pub fn id(&self) -> Uuid {
        match self {
            Student::School(s) => s.id,
            Student::College(s) => s.id,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Student::School(s) => &s.name,
            Student::College(s) => &s.name,
        }
    }

    pub fn institution_id(&self) -> Uuid {
        match self {
            Student::School(s) => s.institution_id,
            Student::College(s) => s.institution_id,
        }
    }

    /// The roll or register number, whichever the variant carries.
    pub fn number(&self) -> &str {
        match self {
            Student::School(s) => &s.roll_number,
            Student::College(s) => &s.register_number,
        }
    }

    /// The attribute this student must not share with a seat neighbour.
    pub fn adjacency_group(&self) -> AdjacencyGroup {
        match self {
            Student::School(s) => AdjacencyGroup::Standard(s.standard),
            Student::College(s) => AdjacencyGroup::Department(s.department),
        }
    }
}

/// The class-like attribute consecutively seated students should not share.
///
/// Derived equality never matches across variants: a school student and a
/// college student are never in the same group, whatever the field values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AdjacencyGroup {
    /// School grouping: class standard.
    Standard(u8),
    /// College grouping: department.
    Department(Department),
}
