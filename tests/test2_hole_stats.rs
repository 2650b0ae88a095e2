use rusty_rounds::model::{Hole, Shot, ShotDirection};

fn shot(shot_number: u32, distance: Option<f64>, start_lie: &str, end_lie: &str) -> Shot {
    Shot {
        shot_number,
        distance,
        start_lie: start_lie.to_string(),
        end_lie: end_lie.to_string(),
        distance_to_hole: None,
    }
}

fn par4_regulation_hole() -> Hole {
    let mut hole = Hole::new(1, 4, 400);
    hole.shots = vec![
        shot(1, Some(250.0), "tee", "fairway"),
        Shot {
            distance_to_hole: Some(20.0),
            ..shot(2, Some(150.0), "fairway", "green")
        },
        shot(3, None, "green", "hole"),
    ];
    hole
}

#[test]
fn test2_worked_par_four_example() {
    let hole = par4_regulation_hole();
    assert_eq!(hole.strokes(), 3);
    assert_eq!(hole.putts(), 1);
    assert_eq!(hole.fairway_result(), Some(ShotDirection::Center));
    // Green reached on shot 2, par - 2 == 2.
    assert!(hole.gir());
    assert!(hole.is_complete());
}

#[test]
fn test2_fairway_result_undefined_on_par_threes_and_empty_holes() {
    let mut par3 = Hole::new(2, 3, 165);
    par3.shots = vec![
        shot(1, Some(160.0), "tee", "green"),
        shot(2, None, "green", "hole"),
    ];
    // Par 3: no fairway expectation, regardless of shots.
    assert_eq!(par3.fairway_result(), None);
    // But GIR is still defined and true here (green on shot 1 <= par - 2).
    assert!(par3.gir());

    let empty = Hole::new(3, 4, 410);
    assert_eq!(empty.fairway_result(), None);
}

#[test]
fn test2_gir_is_false_not_undefined_when_green_never_reached() {
    // Contrast with fairway_result: a hole that never finds the green is
    // a definite miss, not an unanswerable question.
    let mut hole = Hole::new(4, 4, 380);
    hole.shots = vec![
        shot(1, Some(240.0), "tee", "left rough"),
        shot(2, Some(130.0), "left rough", "right bunker"),
        shot(3, Some(30.0), "right bunker", "hole"),
    ];
    assert!(!hole.gir());
    assert_eq!(hole.fairway_result(), Some(ShotDirection::Left));

    let empty = Hole::new(5, 4, 400);
    assert!(!empty.gir());
}

#[test]
fn test2_gir_rejects_late_greens() {
    let mut hole = Hole::new(6, 4, 430);
    hole.shots = vec![
        shot(1, Some(230.0), "tee", "right rough"),
        shot(2, Some(140.0), "right rough", "short bunker"),
        shot(3, Some(40.0), "short bunker", "green"),
        shot(4, None, "green", "hole"),
    ];
    // Green on shot 3 > par - 2 == 2.
    assert!(!hole.gir());
    assert_eq!(hole.strokes(), 4);
    assert_eq!(hole.putts(), 1);
}
