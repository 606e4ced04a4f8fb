use crate::catalog::built_in_levels;
use crate::core::Direction::{self, *};
use crate::core::{
    GameSession, LevelDefinition, LevelTransition, MalformedLevel, MoveKind, SessionError,
    SessionState, SessionUpdate, parse,
};

fn catalog(layouts: &[&str]) -> Vec<LevelDefinition> {
    layouts
        .iter()
        .map(|layout| LevelDefinition::from_layout(layout))
        .collect()
}

// Level 1 solves with a single push Right, level 2 with a push Left.
const TWO_LEVELS: &[&str] = &["#@$~#", "#~$@#"];

#[test]
fn session_starts_on_title_screen() {
    let session = GameSession::new(catalog(TWO_LEVELS));

    assert_eq!(session.current_state(), SessionState::TitleScreen);
    assert_eq!(session.current_level_index(), 0);
    assert!(session.current_grid().is_none());
    assert!(!session.accepts_moves());
}

#[test]
fn moves_and_reloads_are_ignored_outside_playing() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));

    assert_eq!(session.move_player(Right), Ok(SessionUpdate::Ignored));
    assert!(session.reload_current_level().is_ok());
    assert!(session.request_next_level().unwrap().is_none());
    assert_eq!(session.current_state(), SessionState::TitleScreen);
}

#[test]
fn start_game_loads_level_zero() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));

    session.start_game().unwrap();

    assert_eq!(session.current_state(), SessionState::Playing);
    assert!(session.accepts_moves());
    assert_eq!(session.current_level_index(), 0);
    let expected = parse(&LevelDefinition::from_layout(TWO_LEVELS[0])).unwrap();
    assert_eq!(session.current_grid(), Some(&expected));
}

#[test]
fn blocked_move_changes_nothing() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));
    session.start_game().unwrap();
    let before = session.current_grid().cloned();

    let update = session.move_player(Left).unwrap();

    assert_eq!(update, SessionUpdate::Blocked);
    assert_eq!(session.current_grid().cloned(), before);
    assert_eq!(session.current_state(), SessionState::Playing);
}

#[test]
fn ordinary_move_stays_in_playing() {
    let mut session = GameSession::new(catalog(&["#@.$~#"]));
    session.start_game().unwrap();

    let update = session.move_player(Right).unwrap();

    let SessionUpdate::Moved {
        kind,
        transition,
        grid,
    } = update
    else {
        panic!("expected an accepted move, got {:?}", update);
    };
    assert_eq!(kind, MoveKind::PlayerMoved);
    assert!(transition.is_none());
    assert_eq!(session.current_grid(), Some(&grid));
    assert_eq!(session.current_state(), SessionState::Playing);
}

#[test]
fn winning_a_level_advances_to_the_next() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));
    session.start_game().unwrap();

    let update = session.move_player(Right).unwrap();

    let SessionUpdate::Moved {
        kind,
        transition: Some(LevelTransition::LevelAdvanced { level_index, grid }),
        ..
    } = update
    else {
        panic!("expected a level advance, got {:?}", update);
    };
    assert_eq!(kind, MoveKind::BoxPushed);
    assert_eq!(level_index, 1);
    let expected = parse(&LevelDefinition::from_layout(TWO_LEVELS[1])).unwrap();
    assert_eq!(grid, expected);
    assert_eq!(session.current_level_index(), 1);
    assert_eq!(session.current_grid(), Some(&expected));
    assert_eq!(session.current_state(), SessionState::Playing);
}

#[test]
fn winning_the_last_level_clears_the_game() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));
    session.start_game().unwrap();
    session.move_player(Right).unwrap();

    let update = session.move_player(Left).unwrap();

    let SessionUpdate::Moved {
        transition: Some(LevelTransition::AllLevelsCleared),
        grid,
        ..
    } = update
    else {
        panic!("expected the terminal transition, got {:?}", update);
    };
    assert!(grid.is_solved());
    assert_eq!(session.current_state(), SessionState::AllLevelsCleared);
    assert!(session.current_grid().is_none());
    assert!(!session.accepts_moves());
    assert_eq!(session.move_player(Left), Ok(SessionUpdate::Ignored));
}

#[test]
fn restart_game_returns_to_level_zero() {
    let mut session = GameSession::new(catalog(TWO_LEVELS));
    session.start_game().unwrap();
    session.move_player(Right).unwrap();
    session.move_player(Left).unwrap();
    assert_eq!(session.current_state(), SessionState::AllLevelsCleared);

    session.restart_game().unwrap();

    assert_eq!(session.current_state(), SessionState::Playing);
    assert_eq!(session.current_level_index(), 0);
    let expected = parse(&LevelDefinition::from_layout(TWO_LEVELS[0])).unwrap();
    assert_eq!(session.current_grid(), Some(&expected));
}

#[test]
fn reload_restores_the_parsed_level_exactly() {
    let layout = r#"
#######
#@.$.~#
#..$..#
#~....#
#######
"#;
    let mut session = GameSession::new(catalog(&[layout]));
    session.start_game().unwrap();
    let pristine = session.current_grid().cloned().unwrap();

    for direction in [Right, Right, Down, Left, Up] {
        session.move_player(direction).unwrap();
    }
    assert_ne!(session.current_grid(), Some(&pristine));

    session.reload_current_level().unwrap();

    assert_eq!(session.current_grid(), Some(&pristine));
    assert_eq!(session.current_level_index(), 0);
    assert_eq!(session.current_state(), SessionState::Playing);
}

#[test]
fn request_next_level_wraps_past_the_end() {
    // The direct skip wraps to level 0, unlike the win-triggered advance
    // which terminates in AllLevelsCleared.
    let mut session = GameSession::new(catalog(TWO_LEVELS));
    session.start_game().unwrap();

    session.request_next_level().unwrap();
    assert_eq!(session.current_level_index(), 1);

    session.request_next_level().unwrap();
    assert_eq!(session.current_level_index(), 0);
    assert_eq!(session.current_state(), SessionState::Playing);
    let expected = parse(&LevelDefinition::from_layout(TWO_LEVELS[0])).unwrap();
    assert_eq!(session.current_grid(), Some(&expected));
}

#[test]
fn empty_catalog_fails_with_invalid_index() {
    let mut session = GameSession::new(Vec::new());

    let result = session.start_game();

    assert_eq!(
        result.err(),
        Some(SessionError::InvalidIndex { index: 0, len: 0 })
    );
    assert_eq!(session.current_state(), SessionState::TitleScreen);
}

#[test]
fn malformed_next_level_propagates_and_keeps_the_solved_grid() {
    let mut session = GameSession::new(catalog(&["#@$~#", "####"]));
    session.start_game().unwrap();

    let result = session.move_player(Right);

    assert_eq!(
        result.err(),
        Some(SessionError::Level(MalformedLevel::MissingPlayer))
    );
    assert_eq!(session.current_state(), SessionState::Playing);
    assert_eq!(session.current_level_index(), 0);
    let grid = session.current_grid().expect("move stays adopted");
    assert!(grid.is_solved());
}

#[test]
fn built_in_catalog_plays_through_to_the_end() {
    let mut session = GameSession::new(built_in_levels());
    session.start_game().unwrap();
    assert_eq!(session.level_count(), 3);

    let solutions: [&[Direction]; 3] = [
        &[Right, Right],
        &[
            Right, Up, Down, Right, Right, Right, Up, Up, Left, Left, Down, Left, Down, Right,
        ],
        &[Down, Right, Right, Up, Up, Left, Left],
    ];

    for (level, solution) in solutions.iter().enumerate() {
        assert_eq!(session.current_level_index(), level);
        let (last, prefix) = solution.split_last().unwrap();
        for &direction in prefix {
            let update = session.move_player(direction).unwrap();
            assert!(
                matches!(update, SessionUpdate::Moved { transition: None, .. }),
                "unexpected update {:?} at level {}",
                update,
                level
            );
        }
        let update = session.move_player(*last).unwrap();
        let SessionUpdate::Moved {
            transition: Some(transition),
            ..
        } = update
        else {
            panic!("level {} solution did not solve the level: {:?}", level, update);
        };
        match transition {
            LevelTransition::LevelAdvanced { level_index, .. } => {
                assert_eq!(level_index, level + 1)
            }
            LevelTransition::AllLevelsCleared => assert_eq!(level, 2),
        }
    }

    assert_eq!(session.current_state(), SessionState::AllLevelsCleared);
}
