use maud::{Markup, html};

use crate::entry::{
    BUNKER_OPTIONS, EntrySession, EntryState, ROUGH_OPTIONS, WATER_OPTIONS,
};
use crate::model::{Hole, Round};
use crate::view::layout::{APP_TITLE, page};

/// Entry page for whatever step the session is on. `error` carries a
/// validation message from a rejected submission.
#[must_use]
pub fn render_entry_page(session: &EntrySession, error: Option<&str>) -> Markup {
    let body = html! {
        @if let Some(msg) = error {
            p class="error" { (msg) }
        }
        @match session.state() {
            EntryState::AwaitingRoundSetup => {
                (round_setup_form())
            }
            EntryState::AwaitingHoleSetup { hole_number } => {
                @if let Some(round) = session.round() {
                    (round_header(round))
                    (hole_setup_form(hole_number))
                }
            }
            EntryState::AwaitingShotInput { hole_number, shot_number } => {
                @if let (Some(round), Some(hole)) = (session.round(), session.current_hole()) {
                    (round_header(round))
                    (shot_entry(hole, hole_number, shot_number, session.next_start_lie().unwrap_or("tee")))
                }
            }
            EntryState::RoundComplete => {
                @if let Some(round) = session.round() {
                    (round_header(round))
                    p { "Round complete. " a href="/stats" { "See the stats" } "." }
                }
            }
        }
    };
    page(APP_TITLE, body)
}

fn round_header(round: &Round) -> Markup {
    html! {
        p class="round-header" {
            (round.player_name) " at " (round.course_name)
            ", started " (round.started_at.format("%Y-%m-%d %H:%M"))
            ". " (round.holes.len()) " of " (round.holes_played) " holes recorded."
        }
    }
}

fn round_setup_form() -> Markup {
    html! {
        h3 { "Round Setup" }
        form method="post" action="/round" {
            label { "Player Name" input type="text" name="player"; }
            label { "Course Name" input type="text" name="course"; }
            label { "Holes Played" input type="number" name="holes_played" min="1" max="18" value="18"; }
            label { "Course Par" input type="number" name="course_par" min="9" max="72" value="72"; }
            button type="submit" { "Start Round" }
        }
    }
}

fn hole_setup_form(hole_number: u32) -> Markup {
    html! {
        h3 { "Hole " (hole_number) " Setup" }
        form method="post" action="/hole" {
            input type="hidden" name="hole_number" value=(hole_number);
            label { "Par" input type="number" name="par" min="3" max="5"; }
            label { "Yardage" input type="number" name="yardage" min="50" max="800"; }
            button type="submit" { "Start Hole" }
        }
    }
}

fn shot_entry(hole: &Hole, hole_number: u32, shot_number: u32, start_lie: &str) -> Markup {
    html! {
        h3 { "Hole " (hole_number) " - Shot " (shot_number) }
        p { "Par " (hole.par) ", " (hole.yardage) " yards. Playing from: " (start_lie) }
        @if !hole.shots.is_empty() {
            table class="styled-table" {
                thead {
                    tr {
                        th { "Shot" }
                        th { "From" }
                        th { "To" }
                        th { "Yards" }
                    }
                }
                tbody {
                    @for shot in &hole.shots {
                        tr {
                            td { (shot.shot_number) }
                            td { (shot.start_lie) }
                            td { (shot.end_lie) }
                            td {
                                @if let Some(d) = shot.distance { (d) } @else { "-" }
                            }
                        }
                    }
                }
            }
        }
        form method="post" action="/shot" {
            label {
                "Where did the ball go?"
                select name="end_lie" {
                    option value="fairway" { "fairway" }
                    option value="green" { "green" }
                    option value="hole" { "hole" }
                    optgroup label="Rough" {
                        @for opt in ROUGH_OPTIONS {
                            option value=(opt) { (opt) }
                        }
                    }
                    optgroup label="Bunker" {
                        @for opt in BUNKER_OPTIONS {
                            option value=(opt) { (opt) }
                        }
                    }
                    optgroup label="Water" {
                        @for opt in WATER_OPTIONS {
                            option value=(opt) { (opt) }
                        }
                    }
                }
            }
            @if start_lie != "green" {
                label { "Shot distance (yards)" input type="number" name="distance" min="0" step="1"; }
            }
            label { "Distance from hole (ft, green only)" input type="number" name="distance_to_hole" min="0" step="1"; }
            button type="submit" { "Add Shot" }
        }
        form method="post" action="/hole/discard" {
            button type="submit" class="discard" { "Discard Hole" }
        }
    }
}
