//! Seat allocation records.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Formats a seat label: hall number, then the seat index zero-padded to
/// three digits. Seat indices start at 1.
pub fn seat_number(hall_number: &str, seat_index: u32) -> String {
    format!("{hall_number}-{seat_index:03}")
}

/// One student assigned to one seat for one exam.
///
/// Produced only by the allocation engine; destroyed batch-wise when an
/// exam's plan is cleared or regenerated.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeatAllocation {
    pub id: Uuid,
    pub exam_id: Uuid,
    pub hall_id: Uuid,
    pub student_id: Uuid,
    /// Seat label in `HALLNUMBER-SSS` form, e.g. `H1-014`.
    pub seat_number: String,
    pub allocated_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seat_number_zero_padding() {
        assert_eq!(seat_number("H1", 1), "H1-001");
        assert_eq!(seat_number("H1", 42), "H1-042");
        assert_eq!(seat_number("B2", 500), "B2-500");
    }

    #[test]
    fn test_seat_number_wide_indices_keep_digits() {
        // Padding is a minimum width, not a truncation.
        assert_eq!(seat_number("H9", 1234), "H9-1234");
    }
}
