//! Exam hall entity.

use uuid::Uuid;

/// An exam hall with a fixed number of seats.
///
/// The order in which halls are handed to the allocator is the order in
/// which their seats are filled.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hall {
    pub id: Uuid,
    /// Human-facing hall number, the prefix of every seat label.
    pub hall_number: String,
    pub seating_capacity: u32,
    pub institution_id: Uuid,
    /// Optional building block the hall sits in.
    pub block: Option<String>,
}

impl Hall {
    pub fn new(
        hall_number: impl Into<String>,
        seating_capacity: u32,
        institution_id: Uuid,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            hall_number: hall_number.into(),
            seating_capacity,
            institution_id,
            block: None,
        }
    }

    pub fn with_block(mut self, block: impl Into<String>) -> Self {
        self.block = Some(block.into());
        self
    }
}
