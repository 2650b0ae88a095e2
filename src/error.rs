use thiserror::Error;

/// Input problems the actor can fix by resupplying a field. Nothing is
/// constructed or stored when one of these fires.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("player name is required")]
    MissingPlayerName,
    #[error("course name is required")]
    MissingCourseName,
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("{field} must be a number, got '{value}'")]
    InvalidNumber { field: &'static str, value: String },
    #[error("holes played must be between 1 and 18, got {0}")]
    HolesPlayedOutOfRange(u32),
    #[error("course par must be between 9 and 72, got {0}")]
    CourseParOutOfRange(u32),
    #[error("par must be between 3 and 5, got {0}")]
    ParOutOfRange(u32),
    #[error("yardage must be between 50 and 800, got {0}")]
    YardageOutOfRange(u32),
    #[error("unrecognized lie '{0}'")]
    UnknownLie(String),
    #[error("'{0}' needs a side, e.g. 'left {0}'")]
    BareLieCategory(String),
    #[error("shot distance is required when the ball is not on the green")]
    MissingDistance,
    #[error("no shot distance is recorded for putts")]
    DistanceOnPutt,
    #[error("distance to hole only applies when the ball ends on the green")]
    DistanceToHoleOffGreen,
    #[error("{0} cannot be negative")]
    NegativeDistance(&'static str),
}

/// The driving layer asked for a transition the current state does not
/// allow. This means it lost track of the session; retrying the same call
/// will not help.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SequenceError {
    #[error("a round is already in progress")]
    RoundAlreadyStarted,
    #[error("no round has been started")]
    NoRound,
    #[error("hole {0} is still in progress")]
    HoleInProgress(u32),
    #[error("no hole is in progress")]
    NoHoleInProgress,
    #[error("expected hole {expected}, got {got}")]
    HoleOutOfOrder { expected: u32, got: u32 },
    #[error("the round is complete; no more holes can be added")]
    RoundComplete,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Sequence(#[from] SequenceError),
}
