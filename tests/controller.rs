mod common;

use std::sync::Arc;
use std::time::Duration;

use common::FakeApi;
use jeopardy::controller::{check_once, GameController};
use jeopardy::error::GameError;
use jeopardy::fetch::FetchSettings;
use jeopardy::model::{Category, CellId, Clue, RevealState};
use jeopardy::reveal::ClickTarget;
use jeopardy::state::{AppState, Screen};

const WAIT: Duration = Duration::from_secs(5);

fn controller(api: FakeApi) -> GameController {
    GameController::new(Arc::new(api), FetchSettings::default(), Some(1))
}

fn board(columns: usize, rows: usize) -> Vec<Category> {
    (0..columns)
        .map(|c| Category {
            title: format!("Cat {}", c),
            clues: (0..rows)
                .map(|r| Clue::new(format!("Q{}{}", c, r), format!("A{}{}", c, r)))
                .collect(),
        })
        .collect()
}

#[test]
fn test_startup_mounts_board() {
    let controller = controller(FakeApi::standard(6, 8));
    let mut state = AppState::new(6, 5);
    assert_eq!(state.screen, Screen::Start);

    controller.start(&mut state);
    assert_eq!(state.screen, Screen::Loading);
    assert!(state.session.is_none());

    assert!(controller.wait(&mut state, WAIT));
    assert_eq!(state.screen, Screen::Playing);

    let session = state.session.as_ref().unwrap();
    assert_eq!(session.board.columns(), 6);
    assert_eq!(session.board.row_count(), 5);
    assert_eq!(session.cells.len(), 30);
    assert!(state.cancel.is_none());
}

#[test]
fn test_clue_failure_shows_error_and_no_board() {
    let api = FakeApi::standard(6, 5).failing_on(3);
    let controller = controller(api);
    let mut state = AppState::new(6, 5);

    controller.start(&mut state);
    assert!(controller.wait(&mut state, WAIT));

    assert_eq!(state.screen, Screen::Failed);
    assert!(state.session.is_none());
    assert!(state.last_error.as_deref().unwrap().contains("connection reset"));
}

#[test]
fn test_exhausted_pool_shows_same_error_screen() {
    let settings = FetchSettings {
        max_draws: Some(3),
        ..FetchSettings::default()
    };
    let controller = GameController::new(Arc::new(FakeApi::new()), settings, Some(1));
    let mut state = AppState::new(6, 5);

    controller.start(&mut state);
    assert!(controller.wait(&mut state, WAIT));

    assert_eq!(state.screen, Screen::Failed);
    assert!(state.last_error.as_deref().unwrap().contains("exhausted"));
}

#[test]
fn test_restart_after_failure_runs_full_sequence() {
    let mut state = AppState::new(6, 5);

    let failing = controller(FakeApi::standard(6, 5).failing_on(1));
    failing.start(&mut state);
    assert!(failing.wait(&mut state, WAIT));
    assert_eq!(state.screen, Screen::Failed);

    let working = controller(FakeApi::standard(6, 5));
    working.start(&mut state);
    assert_eq!(state.screen, Screen::Loading);
    assert!(state.last_error.is_none());
    assert!(working.wait(&mut state, WAIT));
    assert_eq!(state.screen, Screen::Playing);
}

#[test]
fn test_restart_replaces_board() {
    let mut state = AppState::new(6, 5);
    let (generation, _) = state.begin_startup();
    assert!(state.finish_startup(generation, Ok(board(6, 5))));

    state.click(ClickTarget::Cell(CellId::new(0, 0)));
    state.click(ClickTarget::Cell(CellId::new(2, 3)));
    let first_game = state.session.as_ref().unwrap().number;

    let (generation, _) = state.begin_startup();
    assert!(state.session.is_none(), "old board still mounted while loading");
    assert!(state.finish_startup(generation, Ok(board(6, 5))));

    let session = state.session.as_ref().unwrap();
    assert_ne!(session.number, first_game);
    assert_eq!(session.cells.len(), 30);
    assert!(session.cells.states().all(|s| s == RevealState::Hidden));
    assert_eq!(state.cursor, CellId::new(0, 0));
}

#[test]
fn test_restart_cancels_previous_startup() {
    let mut state = AppState::new(6, 5);
    let (old_generation, old_token) = state.begin_startup();
    let (new_generation, new_token) = state.begin_startup();

    assert!(old_token.is_cancelled());
    assert!(!new_token.is_cancelled());

    // The abandoned startup finishing late must not mount anything
    assert!(!state.finish_startup(old_generation, Ok(board(6, 5))));
    assert_eq!(state.screen, Screen::Loading);
    assert!(state.session.is_none());

    assert!(state.finish_startup(new_generation, Ok(board(6, 5))));
    assert_eq!(state.screen, Screen::Playing);
}

#[test]
fn test_stale_failure_is_ignored() {
    let mut state = AppState::new(6, 5);
    let (old_generation, _) = state.begin_startup();
    let (new_generation, _) = state.begin_startup();
    assert!(state.finish_startup(new_generation, Ok(board(6, 5))));

    let applied = state.finish_startup(
        old_generation,
        Err(GameError::Network("late".to_string())),
    );
    assert!(!applied);
    assert_eq!(state.screen, Screen::Playing);
    assert!(state.session.is_some());
}

#[test]
fn test_render_failure_is_a_startup_failure() {
    let mut state = AppState::new(6, 5);
    let (generation, _) = state.begin_startup();
    let mut cats = board(6, 5);
    cats[4].clues.truncate(2);

    assert!(state.finish_startup(generation, Ok(cats)));
    assert_eq!(state.screen, Screen::Failed);
    assert!(state.session.is_none());
}

#[test]
fn test_clicks_only_reach_mounted_board() {
    let mut state = AppState::new(6, 5);
    assert_eq!(
        state.click(ClickTarget::Cell(CellId::new(0, 0))),
        jeopardy::reveal::RevealOutcome::Ignored
    );

    let (generation, _) = state.begin_startup();
    state.finish_startup(generation, Ok(board(6, 5)));
    state.move_cursor(1, 2);
    state.click_cursor();
    state.click_cursor();
    state.click_cursor();

    let session = state.session.as_ref().unwrap();
    assert_eq!(session.display_text(CellId::new(1, 2)), "A12");
}

#[test]
fn test_cursor_stays_on_board() {
    let mut state = AppState::new(6, 5);
    let (generation, _) = state.begin_startup();
    state.finish_startup(generation, Ok(board(6, 5)));

    state.move_cursor(-3, -3);
    assert_eq!(state.cursor, CellId::new(0, 0));
    state.move_cursor(20, 20);
    assert_eq!(state.cursor, CellId::new(5, 4));
}

#[test]
fn test_check_once_builds_board() {
    let api = FakeApi::standard(6, 6);
    let session = check_once(&api, &FetchSettings::default(), Some(3)).unwrap();

    assert_eq!(session.board.headers, (1..=6).map(common::title).collect::<Vec<_>>());
    assert_eq!(session.cells.len(), 30);
}
