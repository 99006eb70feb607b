//! Error taxonomy for the draw engine.

use thiserror::Error;

/// Everything an engine operation can refuse to do.
///
/// `EmptyPool` and `SpinInProgress` are expected in normal play; a
/// presentation layer should disable the triggering button rather than show
/// them. `UnknownTeam` only happens when a caller builds a team name by hand.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DrawError {
    #[error("Pool is exhausted; reset it before drawing again")]
    EmptyPool,

    #[error("Unknown team: {name}")]
    UnknownTeam { name: String },

    #[error("Score for team {team} would overflow")]
    ScoreOverflow { team: String },

    #[error("Cannot distribute into zero teams")]
    NoTeams,

    #[error("Duplicate item in pool: {item}")]
    DuplicateItem { item: String },

    #[error("Name is empty after trimming")]
    EmptyName,

    #[error("Roster is full ({limit} people)")]
    RosterFull { limit: usize },

    #[error("No roster entry at index {index} (roster has {len})")]
    RosterIndexOutOfRange { index: usize, len: usize },

    #[error("A spin is already in progress")]
    SpinInProgress,

    #[error("No spin is waiting to settle")]
    NoSpinPending,

    #[error("Invalid configuration: {field}: {reason}")]
    InvalidConfig { field: String, reason: String },

    #[error("Failed to parse configuration: {message}")]
    ConfigParse { message: String },
}

pub type DrawResult<T> = Result<T, DrawError>;

impl From<serde_json::Error> for DrawError {
    fn from(err: serde_json::Error) -> Self {
        DrawError::ConfigParse { message: err.to_string() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            DrawError::UnknownTeam { name: "Tiger".into() }.to_string(),
            "Unknown team: Tiger"
        );
        assert_eq!(
            DrawError::RosterIndexOutOfRange { index: 5, len: 2 }.to_string(),
            "No roster entry at index 5 (roster has 2)"
        );
    }

    #[test]
    fn test_from_json_error() {
        let err: DrawError = serde_json::from_str::<u32>("nope").unwrap_err().into();
        assert!(matches!(err, DrawError::ConfigParse { .. }));
    }
}
