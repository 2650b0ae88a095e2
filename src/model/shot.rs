use serde::{Deserialize, Serialize};
use std::fmt;

/// One recorded stroke. `distance` is absent when the stroke starts on the
/// green; `distance_to_hole` (feet) is only carried when the ball ends on
/// the green.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Shot {
    pub shot_number: u32,
    pub distance: Option<f64>,
    pub start_lie: String,
    pub end_lie: String,
    pub distance_to_hole: Option<f64>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotCategory {
    Tee,
    Approach,
    ShortGame,
    Putting,
}

impl ShotCategory {
    pub const ALL: [Self; 4] = [Self::Tee, Self::Approach, Self::ShortGame, Self::Putting];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Tee => "tee",
            Self::Approach => "approach",
            Self::ShortGame => "short_game",
            Self::Putting => "putting",
        }
    }
}

impl fmt::Display for ShotCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ShotDirection {
    Left,
    Right,
    Short,
    Long,
    Center,
    Hole,
    Unknown,
}

impl ShotDirection {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Right => "right",
            Self::Short => "short",
            Self::Long => "long",
            Self::Center => "center",
            Self::Hole => "hole",
            Self::Unknown => "unknown",
        }
    }
}

impl fmt::Display for ShotDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl Shot {
    #[must_use]
    pub fn is_putt(&self) -> bool {
        self.start_lie == "green"
    }

    /// Putt status wins, then first-shot-of-hole, then the 100-yard
    /// approach threshold (strictly greater), else short game.
    #[must_use]
    pub fn category(&self) -> ShotCategory {
        if self.is_putt() {
            return ShotCategory::Putting;
        }
        if self.shot_number == 1 {
            return ShotCategory::Tee;
        }
        match self.distance {
            Some(d) if d > 100.0 => ShotCategory::Approach,
            _ => ShotCategory::ShortGame,
        }
    }

    /// Directional outcome of the stroke, read off the end lie label.
    /// Keyword order is fixed so a label carrying more than one keyword
    /// always resolves the same way.
    #[must_use]
    pub fn direction(&self) -> ShotDirection {
        let keywords = [
            ("left", ShotDirection::Left),
            ("right", ShotDirection::Right),
            ("short", ShotDirection::Short),
            ("long", ShotDirection::Long),
        ];
        for (needle, dir) in keywords {
            if self.end_lie.contains(needle) {
                return dir;
            }
        }
        match self.end_lie.as_str() {
            "fairway" | "green" => ShotDirection::Center,
            "hole" => ShotDirection::Hole,
            _ => ShotDirection::Unknown,
        }
    }
}
