use serde::{Deserialize, Serialize};

use crate::model::shot::{Shot, ShotDirection};

/// One hole of a round. Shots are stored in play order; `shot_number` runs
/// from 1 with no gaps.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Hole {
    pub hole_number: u32,
    pub par: u32,
    pub yardage: u32,
    pub shots: Vec<Shot>,
}

impl Hole {
    #[must_use]
    pub fn new(hole_number: u32, par: u32, yardage: u32) -> Self {
        Self {
            hole_number,
            par,
            yardage,
            shots: Vec::new(),
        }
    }

    #[must_use]
    pub fn strokes(&self) -> u32 {
        self.shots.len() as u32
    }

    #[must_use]
    pub fn putts(&self) -> u32 {
        self.shots.iter().filter(|s| s.is_putt()).count() as u32
    }

    /// Direction of the tee shot. `None` on par-3 holes and holes with no
    /// shots recorded: there is no fairway expectation off a par-3 tee, so
    /// the question does not apply (unlike `gir`, which is simply false
    /// when the green is never reached).
    #[must_use]
    pub fn fairway_result(&self) -> Option<ShotDirection> {
        if self.par < 4 {
            return None;
        }
        self.shots.first().map(Shot::direction)
    }

    /// Green in regulation: the first green-reaching shot lands at
    /// 1-based index `par - 2` or earlier. False when the green is never
    /// reached.
    #[must_use]
    pub fn gir(&self) -> bool {
        self.shots
            .iter()
            .position(|s| s.end_lie == "green")
            .is_some_and(|idx| idx as u32 + 1 <= self.par.saturating_sub(2))
    }

    /// A hole is complete once its terminal holed-out shot is recorded.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.shots.last().is_some_and(|s| s.end_lie == "hole")
    }
}
