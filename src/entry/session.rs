use serde::Serialize;

use crate::entry::lie::validate_end_lie;
use crate::error::{EntryError, SequenceError, ValidationError};
use crate::model::{Hole, Round, Shot};

/// Where the stepwise entry currently stands. Derived from the session's
/// owned data rather than stored, so it can never drift out of sync.
#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum EntryState {
    AwaitingRoundSetup,
    AwaitingHoleSetup { hole_number: u32 },
    AwaitingShotInput { hole_number: u32, shot_number: u32 },
    RoundComplete,
}

#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShotOutcome {
    pub hole_complete: bool,
    pub shot: Shot,
}

/// Single-writer stepwise entry over one round. The round owns its
/// completed holes; the hole being played is held here until its terminal
/// shot lands, so the round never sees a partial hole.
#[derive(Clone, Debug, Default)]
pub struct EntrySession {
    round: Option<Round>,
    current_hole: Option<Hole>,
}

impl EntrySession {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn round(&self) -> Option<&Round> {
        self.round.as_ref()
    }

    #[must_use]
    pub fn current_hole(&self) -> Option<&Hole> {
        self.current_hole.as_ref()
    }

    #[must_use]
    pub fn state(&self) -> EntryState {
        match (&self.round, &self.current_hole) {
            (None, _) => EntryState::AwaitingRoundSetup,
            (Some(round), None) if round.is_complete() => EntryState::RoundComplete,
            (Some(round), None) => EntryState::AwaitingHoleSetup {
                hole_number: round.next_hole_number(),
            },
            (Some(_), Some(hole)) => EntryState::AwaitingShotInput {
                hole_number: hole.hole_number,
                shot_number: hole.strokes() + 1,
            },
        }
    }

    /// Lie the next shot will start from: the tee for the first shot,
    /// otherwise wherever the previous shot finished.
    #[must_use]
    pub fn next_start_lie(&self) -> Option<&str> {
        self.current_hole
            .as_ref()
            .map(|hole| hole.shots.last().map_or("tee", |s| s.end_lie.as_str()))
    }

    /// Constructs the round shell and moves entry to the first hole.
    ///
    /// # Errors
    ///
    /// `ValidationError` when a name is blank or a range is violated;
    /// `SequenceError::RoundAlreadyStarted` when called twice.
    pub fn begin_round(
        &mut self,
        player: &str,
        course: &str,
        holes_played: u32,
        course_par: u32,
    ) -> Result<(), EntryError> {
        if self.round.is_some() {
            return Err(SequenceError::RoundAlreadyStarted.into());
        }
        let player = player.trim();
        if player.is_empty() {
            return Err(ValidationError::MissingPlayerName.into());
        }
        let course = course.trim();
        if course.is_empty() {
            return Err(ValidationError::MissingCourseName.into());
        }
        if !(1..=18).contains(&holes_played) {
            return Err(ValidationError::HolesPlayedOutOfRange(holes_played).into());
        }
        if !(9..=72).contains(&course_par) {
            return Err(ValidationError::CourseParOutOfRange(course_par).into());
        }
        self.round = Some(Round::new(
            player.to_string(),
            course.to_string(),
            holes_played,
            course_par,
        ));
        Ok(())
    }

    /// Opens hole `hole_number` for shot entry.
    ///
    /// # Errors
    ///
    /// `SequenceError` when no round exists, a hole is already open, the
    /// round is complete, or `hole_number` is not the next expected value;
    /// `ValidationError` for par/yardage out of range.
    pub fn begin_hole(&mut self, hole_number: u32, par: u32, yardage: u32) -> Result<(), EntryError> {
        let round = self.round.as_ref().ok_or(SequenceError::NoRound)?;
        if let Some(hole) = &self.current_hole {
            return Err(SequenceError::HoleInProgress(hole.hole_number).into());
        }
        if round.is_complete() {
            return Err(SequenceError::RoundComplete.into());
        }
        let expected = round.next_hole_number();
        if hole_number != expected {
            return Err(SequenceError::HoleOutOfOrder {
                expected,
                got: hole_number,
            }
            .into());
        }
        if !(3..=5).contains(&par) {
            return Err(ValidationError::ParOutOfRange(par).into());
        }
        if !(50..=800).contains(&yardage) {
            return Err(ValidationError::YardageOutOfRange(yardage).into());
        }
        self.current_hole = Some(Hole::new(hole_number, par, yardage));
        Ok(())
    }

    /// Appends one shot to the open hole. Shot number and start lie are
    /// derived here, never supplied. When `end_lie` is `"hole"` the hole
    /// is closed and appended to the round.
    ///
    /// # Errors
    ///
    /// `SequenceError::NoHoleInProgress` when no hole is open;
    /// `ValidationError` when the lie label, distance, or distance to hole
    /// fail their gates. No shot is stored on error.
    pub fn record_shot(
        &mut self,
        end_lie: &str,
        distance: Option<f64>,
        distance_to_hole: Option<f64>,
    ) -> Result<ShotOutcome, EntryError> {
        let hole = self
            .current_hole
            .as_mut()
            .ok_or(SequenceError::NoHoleInProgress)?;
        validate_end_lie(end_lie)?;

        let start_lie = hole
            .shots
            .last()
            .map_or_else(|| "tee".to_string(), |prev| prev.end_lie.clone());

        if start_lie == "green" {
            if distance.is_some() {
                return Err(ValidationError::DistanceOnPutt.into());
            }
        } else {
            let d = distance.ok_or(ValidationError::MissingDistance)?;
            if d < 0.0 {
                return Err(ValidationError::NegativeDistance("shot distance").into());
            }
        }

        if end_lie == "green" {
            if let Some(d) = distance_to_hole
                && d < 0.0
            {
                return Err(ValidationError::NegativeDistance("distance to hole").into());
            }
        } else if distance_to_hole.is_some() {
            return Err(ValidationError::DistanceToHoleOffGreen.into());
        }

        let shot = Shot {
            shot_number: hole.strokes() + 1,
            distance,
            start_lie,
            end_lie: end_lie.to_string(),
            distance_to_hole,
        };
        hole.shots.push(shot.clone());

        let hole_complete = end_lie == "hole";
        if hole_complete
            && let (Some(done), Some(round)) = (self.current_hole.take(), self.round.as_mut())
        {
            round.holes.push(done);
        }

        Ok(ShotOutcome {
            hole_complete,
            shot,
        })
    }

    /// Abandons the hole being played, leaving the round untouched.
    pub fn discard_hole(&mut self) -> Option<Hole> {
        self.current_hole.take()
    }
}
