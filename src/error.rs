// Copyright (C) 2020-2024 Andy Kurnia.

pub struct MyError {
    s: String,
}

impl std::fmt::Display for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.s)
    }
}

impl std::fmt::Debug for MyError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        (self as &dyn std::fmt::Display).fmt(f)
    }
}

impl std::error::Error for MyError {}

pub fn new(s: String) -> MyError {
    MyError { s }
}

pub type BoxAnyError = Box<dyn std::error::Error>;
pub type Returns<T> = Result<T, BoxAnyError>;

#[macro_export]
macro_rules! return_error {
    ($error:expr) => {
        return Err($crate::error::new($error).into());
    };
}

// Everything the engine itself can refuse. None of these are fatal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum GameError {
    #[error("no tiles left in the bag")]
    NotAvailable,
    #[error("space {index} is outside the board (length {len})")]
    OutOfRange { index: usize, len: usize },
    #[error("tile #{tile_id} is not on the rack")]
    NotFound { tile_id: u32 },
    #[error("space {index} is already occupied")]
    SpaceOccupied { index: usize },
    #[error("please place some tiles on the board first")]
    EmptySubmission,
    #[error("score is too large to count")]
    ScoreOverflow,
    // Only reachable if a round is left half-finished.
    #[error("cannot {action} while {phase:?}")]
    WrongPhase {
        action: &'static str,
        phase: super::game_state::RoundPhase,
    },
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}
