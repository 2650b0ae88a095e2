use serde::Serialize;

use crate::model::{Round, ShotCategory, ShotDirection};

/// One shot flattened with its round and hole context, the shape any
/// persisted representation layers on top of.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct ShotRecord {
    pub player: String,
    pub course: String,
    pub hole: u32,
    pub par: u32,
    pub hole_yardage: u32,
    pub shot_number: u32,
    pub distance: Option<f64>,
    pub start_lie: String,
    pub end_lie: String,
    pub distance_to_hole: Option<f64>,
    pub category: ShotCategory,
    pub direction: ShotDirection,
}

/// Flattens a round into one record per shot, in play order.
#[must_use]
pub fn export_rows(round: &Round) -> Vec<ShotRecord> {
    round
        .holes
        .iter()
        .flat_map(|hole| {
            hole.shots.iter().map(move |shot| ShotRecord {
                player: round.player_name.clone(),
                course: round.course_name.clone(),
                hole: hole.hole_number,
                par: hole.par,
                hole_yardage: hole.yardage,
                shot_number: shot.shot_number,
                distance: shot.distance,
                start_lie: shot.start_lie.clone(),
                end_lie: shot.end_lie.clone(),
                distance_to_hole: shot.distance_to_hole,
                category: shot.category(),
                direction: shot.direction(),
            })
        })
        .collect()
}
