use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

//
// ─── PRACTICE POOL ─────────────────────────────────────────────────────────────
//

/// Selection strategy for sampling practice cards from a deck.
///
/// The pools are service-defined and consumed here as opaque strategies:
/// `DueRecent` biases toward currently-due plus recently reviewed cards,
/// `All` ignores due state entirely, `NewOnly` restricts to cards that
/// have never been reviewed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PracticePool {
    #[default]
    DueRecent,
    All,
    NewOnly,
}

impl PracticePool {
    /// Every pool, in the order the configuration form offers them.
    pub const ALL: [PracticePool; 3] = [Self::DueRecent, Self::All, Self::NewOnly];

    /// Returns the wire name of this pool.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::DueRecent => "due_recent",
            Self::All => "all",
            Self::NewOnly => "new_only",
        }
    }
}

impl fmt::Display for PracticePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PracticePoolError {
    #[error("unknown practice pool: {0}")]
    Unknown(String),
}

impl FromStr for PracticePool {
    type Err = PracticePoolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "due_recent" => Ok(Self::DueRecent),
            "all" => Ok(Self::All),
            "new_only" => Ok(Self::NewOnly),
            other => Err(PracticePoolError::Unknown(other.to_string())),
        }
    }
}

//
// ─── PRACTICE LIMIT ────────────────────────────────────────────────────────────
//

/// Smallest practice sample the configuration form accepts.
pub const PRACTICE_LIMIT_MIN: u32 = 5;

/// Largest practice sample the configuration form accepts.
pub const PRACTICE_LIMIT_MAX: u32 = 200;

/// Clamps a requested practice limit into the accepted range.
///
/// Out-of-range input never reaches the card service; it is pulled to the
/// nearest bound before a request is built.
#[must_use]
pub fn clamp_practice_limit(limit: u32) -> u32 {
    limit.clamp(PRACTICE_LIMIT_MIN, PRACTICE_LIMIT_MAX)
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pool_wire_names_roundtrip() {
        for pool in PracticePool::ALL {
            let parsed: PracticePool = pool.as_str().parse().unwrap();
            assert_eq!(parsed, pool);
        }
    }

    #[test]
    fn unknown_pool_name_is_rejected() {
        let err = "everything".parse::<PracticePool>().unwrap_err();
        assert!(matches!(err, PracticePoolError::Unknown(_)));
    }

    #[test]
    fn pool_serializes_to_wire_name() {
        let json = serde_json::to_string(&PracticePool::NewOnly).unwrap();
        assert_eq!(json, r#""new_only""#);
    }

    #[test]
    fn limit_is_clamped_to_bounds() {
        assert_eq!(clamp_practice_limit(0), PRACTICE_LIMIT_MIN);
        assert_eq!(clamp_practice_limit(4), PRACTICE_LIMIT_MIN);
        assert_eq!(clamp_practice_limit(5), 5);
        assert_eq!(clamp_practice_limit(30), 30);
        assert_eq!(clamp_practice_limit(200), 200);
        assert_eq!(clamp_practice_limit(201), PRACTICE_LIMIT_MAX);
        assert_eq!(clamp_practice_limit(u32::MAX), PRACTICE_LIMIT_MAX);
    }
}
