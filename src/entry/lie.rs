use crate::error::ValidationError;

/// Sides a hazard label may carry.
pub const LIE_SIDES: [&str; 4] = ["left", "right", "short", "long"];
/// Hazard categories that always need a side.
pub const LIE_HAZARDS: [&str; 3] = ["rough", "bunker", "water"];

/// End-lie choices offered during entry, grouped the way the stepwise form
/// presents them.
pub const ROUGH_OPTIONS: [&str; 4] = ["left rough", "right rough", "short rough", "long rough"];
pub const BUNKER_OPTIONS: [&str; 3] = ["left bunker", "right bunker", "fairway bunker"];
pub const WATER_OPTIONS: [&str; 3] = ["left water", "right water", "long water"];

/// Checks an end-lie label against the grammar: `fairway`, `green`,
/// `hole`, `fairway bunker`, or `{side} {hazard}`. A bare hazard category
/// is never storable; the side has to be captured first.
///
/// # Errors
///
/// Returns `ValidationError::BareLieCategory` for a sideless hazard and
/// `ValidationError::UnknownLie` for anything outside the grammar.
pub fn validate_end_lie(end_lie: &str) -> Result<(), ValidationError> {
    match end_lie {
        "fairway" | "green" | "hole" | "fairway bunker" => Ok(()),
        "rough" | "bunker" | "water" => Err(ValidationError::BareLieCategory(end_lie.to_string())),
        other => {
            if let Some((side, hazard)) = other.split_once(' ') {
                if LIE_SIDES.contains(&side) && LIE_HAZARDS.contains(&hazard) {
                    return Ok(());
                }
            }
            Err(ValidationError::UnknownLie(other.to_string()))
        }
    }
}
