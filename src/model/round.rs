use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::model::hole::Hole;

/// One played round. Only completed holes live here; an in-progress hole
/// is held by the entry session until its terminal shot lands.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Round {
    pub player_name: String,
    pub course_name: String,
    pub holes_played: u32,
    pub course_par: u32,
    pub started_at: NaiveDateTime,
    pub holes: Vec<Hole>,
}

impl Round {
    #[must_use]
    pub fn new(player_name: String, course_name: String, holes_played: u32, course_par: u32) -> Self {
        Self {
            player_name,
            course_name,
            holes_played,
            course_par,
            started_at: chrono::Utc::now().naive_utc(),
            holes: Vec::new(),
        }
    }

    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.holes.iter().map(Hole::strokes).sum()
    }

    #[must_use]
    pub fn score_vs_par(&self) -> i32 {
        self.total_score() as i32 - self.course_par as i32
    }

    #[must_use]
    pub fn total_putts(&self) -> u32 {
        self.holes.iter().map(Hole::putts).sum()
    }

    /// The next hole number entry should accept, 1-based.
    #[must_use]
    pub fn next_hole_number(&self) -> u32 {
        self.holes.len() as u32 + 1
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.holes.len() as u32 >= self.holes_played
    }
}
