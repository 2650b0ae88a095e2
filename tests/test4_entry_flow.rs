use rusty_rounds::entry::{EntrySession, EntryState};
use rusty_rounds::error::{EntryError, SequenceError, ValidationError};

fn session_mid_hole() -> EntrySession {
    let mut session = EntrySession::new();
    session.begin_round("Ada", "Pebble Creek", 2, 9).unwrap();
    session.begin_hole(1, 4, 400).unwrap();
    session
}

#[test]
fn test4_happy_path_through_a_full_round() {
    let mut session = EntrySession::new();
    assert_eq!(session.state(), EntryState::AwaitingRoundSetup);

    session.begin_round("Ada", "Pebble Creek", 2, 9).unwrap();
    assert_eq!(session.state(), EntryState::AwaitingHoleSetup { hole_number: 1 });

    session.begin_hole(1, 4, 400).unwrap();
    assert_eq!(
        session.state(),
        EntryState::AwaitingShotInput { hole_number: 1, shot_number: 1 }
    );

    let outcome = session.record_shot("fairway", Some(250.0), None).unwrap();
    assert!(!outcome.hole_complete);
    assert_eq!(outcome.shot.shot_number, 1);
    assert_eq!(outcome.shot.start_lie, "tee");
    assert_eq!(
        session.state(),
        EntryState::AwaitingShotInput { hole_number: 1, shot_number: 2 }
    );

    session.record_shot("green", Some(150.0), Some(20.0)).unwrap();
    let outcome = session.record_shot("hole", None, None).unwrap();
    assert!(outcome.hole_complete);
    assert_eq!(session.state(), EntryState::AwaitingHoleSetup { hole_number: 2 });

    session.begin_hole(2, 4, 380).unwrap();
    session.record_shot("fairway", Some(240.0), None).unwrap();
    session.record_shot("green", Some(140.0), Some(12.0)).unwrap();
    session.record_shot("hole", None, None).unwrap();
    assert_eq!(session.state(), EntryState::RoundComplete);

    let round = session.round().unwrap();
    assert!(round.is_complete());
    assert_eq!(round.total_score(), 6);

    // No further holes once the round is complete.
    assert_eq!(
        session.begin_hole(3, 4, 400),
        Err(EntryError::Sequence(SequenceError::RoundComplete))
    );
}

#[test]
fn test4_round_setup_validation_gates() {
    let mut session = EntrySession::new();
    assert_eq!(
        session.begin_round("  ", "Pebble Creek", 18, 72),
        Err(EntryError::Validation(ValidationError::MissingPlayerName))
    );
    assert_eq!(
        session.begin_round("Ada", "", 18, 72),
        Err(EntryError::Validation(ValidationError::MissingCourseName))
    );
    assert_eq!(
        session.begin_round("Ada", "Pebble Creek", 0, 72),
        Err(EntryError::Validation(ValidationError::HolesPlayedOutOfRange(0)))
    );
    assert_eq!(
        session.begin_round("Ada", "Pebble Creek", 19, 72),
        Err(EntryError::Validation(ValidationError::HolesPlayedOutOfRange(19)))
    );
    assert_eq!(
        session.begin_round("Ada", "Pebble Creek", 18, 8),
        Err(EntryError::Validation(ValidationError::CourseParOutOfRange(8)))
    );
    assert_eq!(
        session.begin_round("Ada", "Pebble Creek", 18, 73),
        Err(EntryError::Validation(ValidationError::CourseParOutOfRange(73)))
    );
    // Nothing was constructed by the rejected attempts.
    assert_eq!(session.state(), EntryState::AwaitingRoundSetup);
    assert!(session.round().is_none());

    session.begin_round("Ada", "Pebble Creek", 18, 72).unwrap();
    assert_eq!(
        session.begin_round("Ada", "Pebble Creek", 18, 72),
        Err(EntryError::Sequence(SequenceError::RoundAlreadyStarted))
    );
}

#[test]
fn test4_hole_setup_validation_and_sequencing() {
    let mut session = EntrySession::new();
    assert_eq!(
        session.begin_hole(1, 4, 400),
        Err(EntryError::Sequence(SequenceError::NoRound))
    );

    session.begin_round("Ada", "Pebble Creek", 2, 9).unwrap();
    assert_eq!(
        session.begin_hole(2, 4, 400),
        Err(EntryError::Sequence(SequenceError::HoleOutOfOrder { expected: 1, got: 2 }))
    );
    assert_eq!(
        session.begin_hole(1, 2, 400),
        Err(EntryError::Validation(ValidationError::ParOutOfRange(2)))
    );
    assert_eq!(
        session.begin_hole(1, 6, 400),
        Err(EntryError::Validation(ValidationError::ParOutOfRange(6)))
    );
    assert_eq!(
        session.begin_hole(1, 4, 49),
        Err(EntryError::Validation(ValidationError::YardageOutOfRange(49)))
    );
    assert_eq!(
        session.begin_hole(1, 4, 801),
        Err(EntryError::Validation(ValidationError::YardageOutOfRange(801)))
    );

    session.begin_hole(1, 4, 400).unwrap();
    assert_eq!(
        session.begin_hole(2, 4, 380),
        Err(EntryError::Sequence(SequenceError::HoleInProgress(1)))
    );
}

#[test]
fn test4_start_lie_chains_from_previous_shot() {
    let mut session = session_mid_hole();
    session.record_shot("left rough", Some(240.0), None).unwrap();
    let outcome = session.record_shot("green", Some(130.0), None).unwrap();
    assert_eq!(outcome.shot.start_lie, "left rough");
    let outcome = session.record_shot("hole", None, None).unwrap();
    assert_eq!(outcome.shot.start_lie, "green");
    assert!(outcome.shot.is_putt());
}

#[test]
fn test4_shot_field_gates() {
    let mut session = EntrySession::new();
    assert_eq!(
        session.record_shot("fairway", Some(250.0), None),
        Err(EntryError::Sequence(SequenceError::NoHoleInProgress))
    );

    let mut session = session_mid_hole();
    assert_eq!(
        session.record_shot("rough", Some(250.0), None),
        Err(EntryError::Validation(ValidationError::BareLieCategory("rough".to_string())))
    );
    assert_eq!(
        session.record_shot("left fairway", Some(250.0), None),
        Err(EntryError::Validation(ValidationError::UnknownLie("left fairway".to_string())))
    );
    assert_eq!(
        session.record_shot("fairway", None, None),
        Err(EntryError::Validation(ValidationError::MissingDistance))
    );
    assert_eq!(
        session.record_shot("fairway", Some(-1.0), None),
        Err(EntryError::Validation(ValidationError::NegativeDistance("shot distance")))
    );
    assert_eq!(
        session.record_shot("fairway", Some(250.0), Some(20.0)),
        Err(EntryError::Validation(ValidationError::DistanceToHoleOffGreen))
    );

    // None of the rejected shots were stored.
    assert_eq!(
        session.state(),
        EntryState::AwaitingShotInput { hole_number: 1, shot_number: 1 }
    );

    session.record_shot("green", Some(160.0), Some(-2.0)).unwrap_err();
    session.record_shot("green", Some(160.0), Some(25.0)).unwrap();
    // On the green now: distance is no longer collected.
    assert_eq!(
        session.record_shot("hole", Some(5.0), None),
        Err(EntryError::Validation(ValidationError::DistanceOnPutt))
    );
    session.record_shot("hole", None, None).unwrap();
}

#[test]
fn test4_terminal_shot_appends_contiguous_hole() {
    let mut session = session_mid_hole();
    let lies = ["left rough", "fairway", "green", "green", "hole"];
    for lie in lies {
        let on_green = session.next_start_lie() == Some("green");
        let distance = if on_green { None } else { Some(100.0) };
        let to_hole = if lie == "green" { Some(18.0) } else { None };
        session.record_shot(lie, distance, to_hole).unwrap();
    }

    let round = session.round().unwrap();
    assert_eq!(round.holes.len(), 1);
    let hole = &round.holes[0];
    assert_eq!(hole.strokes() as usize, lies.len());
    let numbers: Vec<u32> = hole.shots.iter().map(|s| s.shot_number).collect();
    assert_eq!(numbers, vec![1, 2, 3, 4, 5]);
    assert!(hole.is_complete());
    assert!(session.current_hole().is_none());
}

#[test]
fn test4_discarding_a_hole_leaves_the_round_untouched() {
    let mut session = session_mid_hole();
    session.record_shot("fairway", Some(250.0), None).unwrap();
    let discarded = session.discard_hole().unwrap();
    assert_eq!(discarded.strokes(), 1);

    assert_eq!(session.round().unwrap().holes.len(), 0);
    // Entry resumes at the same hole number.
    assert_eq!(session.state(), EntryState::AwaitingHoleSetup { hole_number: 1 });
    session.begin_hole(1, 4, 400).unwrap();
}
