use maud::{Markup, html};

use crate::model::Round;
use crate::score::{RoundStats, ShotRecord};
use crate::view::layout::page;

#[must_use]
pub fn render_stats_page(round: &Round, stats: &RoundStats) -> Markup {
    let body = html! {
        h3 { "Round Summary" }
        table class="styled-table" {
            tbody {
                tr { td { "Player" } td { (round.player_name) } }
                tr { td { "Course" } td { (round.course_name) } }
                tr { td { "Started" } td { (round.started_at.format("%Y-%m-%d %H:%M")) } }
                tr { td { "Holes recorded" } td { (stats.gir_stats.holes) " of " (round.holes_played) } }
                tr { td { "Total score" } td { (stats.total_score) } }
                tr {
                    td { "Score vs par" }
                    td {
                        @if stats.score_vs_par > 0 { "+" (stats.score_vs_par) }
                        @else { (stats.score_vs_par) }
                    }
                }
                tr { td { "Total putts" } td { (stats.total_putts) } }
                tr { td { "Greens in regulation" } td { (stats.gir_stats.hits) " of " (stats.gir_stats.holes) } }
            }
        }

        h3 { "Fairway Results" }
        @if stats.fairway_stats.is_empty() {
            p { "No fairway results yet." }
        } @else {
            table class="styled-table" {
                thead { tr { th { "Direction" } th { "Holes" } } }
                tbody {
                    @for entry in &stats.fairway_stats {
                        tr { td { (entry.label) } td { (entry.count) } }
                    }
                }
            }
        }

        h3 { "Directional Misses" }
        @if stats.directional_bias.is_empty() {
            p { "No misses recorded." }
        } @else {
            table class="styled-table" {
                thead { tr { th { "Direction" } th { "Shots" } } }
                tbody {
                    @for entry in &stats.directional_bias {
                        tr { td { (entry.label) } td { (entry.count) } }
                    }
                }
            }
        }

        h3 { "Strokes by Category" }
        table class="styled-table" {
            thead { tr { th { "Category" } th { "Strokes" } } }
            tbody {
                @for entry in &stats.strokes_by_category {
                    tr { td { (entry.label) } td { (entry.count) } }
                }
            }
        }
    };
    page("Round Stats", body)
}

#[must_use]
pub fn render_export_page(round: &Round, rows: &[ShotRecord]) -> Markup {
    let body = html! {
        h3 { (round.player_name) " at " (round.course_name) }
        @if rows.is_empty() {
            p { "No shots recorded yet." }
        } @else {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Hole" }
                        th { "Par" }
                        th { "Yardage" }
                        th { "Shot" }
                        th { "Distance" }
                        th { "Start Lie" }
                        th { "End Lie" }
                        th { "To Hole (ft)" }
                        th { "Category" }
                        th { "Direction" }
                    }
                }
                tbody {
                    @for row in rows {
                        tr {
                            td { (row.hole) }
                            td { (row.par) }
                            td { (row.hole_yardage) }
                            td { (row.shot_number) }
                            td { @if let Some(d) = row.distance { (d) } @else { "-" } }
                            td { (row.start_lie) }
                            td { (row.end_lie) }
                            td { @if let Some(d) = row.distance_to_hole { (d) } @else { "-" } }
                            td { (row.category) }
                            td { (row.direction) }
                        }
                    }
                }
            }
        }
    };
    page("Shot Export", body)
}
