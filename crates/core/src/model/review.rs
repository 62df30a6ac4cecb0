use serde::{Deserialize, Serialize};
use thiserror::Error;

//
// ─── ERRORS ───────────────────────────────────────────────────────────────────
//

/// Errors that can occur when handling review input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RatingError {
    #[error("invalid rating value: {0}")]
    InvalidRating(u8),
}

//
// ─── RATING ───────────────────────────────────────────────────────────────────
//

/// Four-level recall-quality rating for a reviewed card.
///
/// Ratings are ordinal, monotonically increasing in recall confidence:
/// - `Again`: failed recall, card needs immediate review
/// - `Hard`: recalled with significant difficulty
/// - `Good`: recalled correctly with appropriate effort
/// - `Easy`: recalled instantly with no effort
///
/// The wire values 1-4 drive the service-side interval calculation; no
/// other values are valid input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rating {
    /// Failed to recall the answer. Card will be shown again soon.
    Again,
    /// Recalled with significant difficulty.
    Hard,
    /// Recalled correctly with appropriate effort.
    Good,
    /// Recalled instantly.
    Easy,
}

impl Rating {
    /// Converts a wire value (1-4) to a `Rating`.
    ///
    /// # Errors
    ///
    /// Returns `RatingError::InvalidRating` if the value is not in the range 1-4.
    pub fn from_u8(value: u8) -> Result<Self, RatingError> {
        match value {
            1 => Ok(Self::Again),
            2 => Ok(Self::Hard),
            3 => Ok(Self::Good),
            4 => Ok(Self::Easy),
            _ => Err(RatingError::InvalidRating(value)),
        }
    }

    /// Returns the 1-4 wire value sent to the card service.
    #[must_use]
    pub fn value(self) -> u8 {
        match self {
            Rating::Again => 1,
            Rating::Hard => 2,
            Rating::Good => 3,
            Rating::Easy => 4,
        }
    }
}

//
// ─── DUE SUMMARY ──────────────────────────────────────────────────────────────
//

/// Snapshot of how many cards are currently due for review.
///
/// Not a live stream; re-fetch to observe change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DueSummary {
    pub due_count: u32,
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_value_conversion_works() {
        assert_eq!(Rating::from_u8(1).unwrap(), Rating::Again);
        assert_eq!(Rating::from_u8(4).unwrap(), Rating::Easy);
        let err = Rating::from_u8(0).unwrap_err();
        assert!(matches!(err, RatingError::InvalidRating(0)));
        let err = Rating::from_u8(5).unwrap_err();
        assert!(matches!(err, RatingError::InvalidRating(5)));
    }

    #[test]
    fn wire_value_mapping_is_ordinal() {
        assert_eq!(Rating::Again.value(), 1);
        assert_eq!(Rating::Hard.value(), 2);
        assert_eq!(Rating::Good.value(), 3);
        assert_eq!(Rating::Easy.value(), 4);
    }

    #[test]
    fn wire_value_roundtrip() {
        for value in 1..=4 {
            let rating = Rating::from_u8(value).unwrap();
            assert_eq!(rating.value(), value);
        }
    }

    #[test]
    fn due_summary_deserializes() {
        let summary: DueSummary = serde_json::from_str(r#"{"due_count":7}"#).unwrap();
        assert_eq!(summary.due_count, 7);
    }
}
