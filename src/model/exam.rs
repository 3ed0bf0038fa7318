//! Exam and institution entities.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Whether an institution enrolls school or college students.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InstitutionKind {
    School,
    College,
}

/// A school or college whose students sit exams.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Institution {
    pub id: Uuid,
    pub name: String,
    pub kind: InstitutionKind,
    pub address: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Institution {
    pub fn new(name: impl Into<String>, kind: InstitutionKind) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            kind,
            address: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Half-day session an exam runs in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExamSession {
    Morning,
    Afternoon,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ExamStatus {
    Upcoming,
    Ongoing,
    Completed,
}

/// A scheduled exam. Allocation runs are keyed by its id.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Exam {
    pub id: Uuid,
    pub name: String,
    pub date: DateTime<Utc>,
    pub session: ExamSession,
    pub status: ExamStatus,
    pub institution_id: Uuid,
}

impl Exam {
    pub fn new(
        name: impl Into<String>,
        date: DateTime<Utc>,
        session: ExamSession,
        institution_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            date,
            session,
            status: ExamStatus::Upcoming,
            institution_id,
        }
    }
}
