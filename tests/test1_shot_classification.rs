use rusty_rounds::model::{Shot, ShotCategory, ShotDirection};

fn shot(shot_number: u32, distance: Option<f64>, start_lie: &str, end_lie: &str) -> Shot {
    Shot {
        shot_number,
        distance,
        start_lie: start_lie.to_string(),
        end_lie: end_lie.to_string(),
        distance_to_hole: None,
    }
}

#[test]
fn test1_putts_always_classify_as_putting() {
    let putt = shot(3, None, "green", "hole");
    assert!(putt.is_putt());
    assert_eq!(putt.category(), ShotCategory::Putting);

    // Putt status wins even on a nominal first shot.
    let odd_first = shot(1, None, "green", "green");
    assert_eq!(odd_first.category(), ShotCategory::Putting);
}

#[test]
fn test1_first_shot_is_tee_category() {
    let opener = shot(1, Some(250.0), "tee", "fairway");
    assert!(!opener.is_putt());
    assert_eq!(opener.category(), ShotCategory::Tee);
}

#[test]
fn test1_approach_threshold_is_strict() {
    assert_eq!(
        shot(2, Some(150.0), "fairway", "green").category(),
        ShotCategory::Approach
    );
    // Exactly 100 yards is not an approach.
    assert_eq!(
        shot(2, Some(100.0), "fairway", "green").category(),
        ShotCategory::ShortGame
    );
    // No distance recorded falls through to short game too.
    assert_eq!(
        shot(2, None, "left rough", "green").category(),
        ShotCategory::ShortGame
    );
}

#[test]
fn test1_direction_from_compound_labels() {
    assert_eq!(
        shot(2, Some(120.0), "fairway", "left rough").direction(),
        ShotDirection::Left
    );
    assert_eq!(
        shot(2, Some(120.0), "fairway", "right bunker").direction(),
        ShotDirection::Right
    );
    assert_eq!(
        shot(2, Some(120.0), "fairway", "short rough").direction(),
        ShotDirection::Short
    );
    assert_eq!(
        shot(2, Some(120.0), "fairway", "long water").direction(),
        ShotDirection::Long
    );
}

#[test]
fn test1_direction_center_hole_and_unknown() {
    assert_eq!(
        shot(1, Some(250.0), "tee", "fairway").direction(),
        ShotDirection::Center
    );
    assert_eq!(
        shot(2, Some(150.0), "fairway", "green").direction(),
        ShotDirection::Center
    );
    assert_eq!(
        shot(3, None, "green", "hole").direction(),
        ShotDirection::Hole
    );
    // No keyword and no exact match: fairway bunker carries no side.
    assert_eq!(
        shot(2, Some(180.0), "fairway", "fairway bunker").direction(),
        ShotDirection::Unknown
    );
}

#[test]
fn test1_direction_keyword_order_wins_over_text_order() {
    // A label carrying two keywords resolves to the earliest keyword in
    // the fixed left/right/short/long order, not the one written first.
    assert_eq!(
        shot(2, Some(120.0), "fairway", "short left rough").direction(),
        ShotDirection::Left
    );
}
