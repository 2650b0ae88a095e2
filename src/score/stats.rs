use serde::Serialize;

use crate::model::{Hole, Round, Shot, ShotCategory, ShotDirection};
use crate::score::sort_utils::{FrequencyEntry, rank_by_frequency};

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct GirStats {
    pub hits: u32,
    pub holes: u32,
}

/// Round-level aggregates, computed on demand from the stored holes. All
/// fields are plain projections; a round with zero holes produces zeroed
/// and empty tables.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct RoundStats {
    pub total_score: u32,
    pub score_vs_par: i32,
    pub total_putts: u32,
    pub fairway_stats: Vec<FrequencyEntry<ShotDirection>>,
    pub gir_stats: GirStats,
    pub directional_bias: Vec<FrequencyEntry<ShotDirection>>,
    pub strokes_by_category: Vec<FrequencyEntry<ShotCategory>>,
}

impl RoundStats {
    #[must_use]
    pub fn compute(round: &Round) -> Self {
        let fairway_stats = rank_by_frequency(round.holes.iter().filter_map(Hole::fairway_result));

        let gir_stats = GirStats {
            hits: round.holes.iter().filter(|h| h.gir()).count() as u32,
            holes: round.holes.len() as u32,
        };

        // Strokes that found the center or the cup are not misses.
        let directional_bias = rank_by_frequency(
            round
                .holes
                .iter()
                .flat_map(|h| h.shots.iter())
                .map(Shot::direction)
                .filter(|d| !matches!(d, ShotDirection::Center | ShotDirection::Hole)),
        );

        // Fixed table: all four categories present even at zero.
        let mut strokes_by_category: Vec<FrequencyEntry<ShotCategory>> = ShotCategory::ALL
            .into_iter()
            .map(|label| FrequencyEntry { label, count: 0 })
            .collect();
        for shot in round.holes.iter().flat_map(|h| h.shots.iter()) {
            let category = shot.category();
            if let Some(entry) = strokes_by_category.iter_mut().find(|e| e.label == category) {
                entry.count += 1;
            }
        }

        Self {
            total_score: round.total_score(),
            score_vs_par: round.score_vs_par(),
            total_putts: round.total_putts(),
            fairway_stats,
            gir_stats,
            directional_bias,
            strokes_by_category,
        }
    }
}
