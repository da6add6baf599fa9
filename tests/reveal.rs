use jeopardy::board::render;
use jeopardy::error::GameError;
use jeopardy::model::{Category, CellId, Clue, RevealState, PLACEHOLDER};
use jeopardy::reveal::{handle_click, ClickTarget, RevealOutcome};
use jeopardy::session::GameSession;

fn categories(columns: usize, rows: usize) -> Vec<Category> {
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
fn test_render_builds_grid_and_association() {
    let (board, cells) = render(categories(6, 5), 5).unwrap();

    assert_eq!(board.headers.len(), 6);
    assert_eq!(board.headers[2], "Cat 2");
    assert_eq!(board.row_count(), 5);
    assert!(board.rows.iter().all(|row| row.len() == 6));
    assert_eq!(cells.len(), 30);

    for id in board.cell_ids() {
        let entry = cells.get(id).unwrap();
        assert_eq!(entry.clue.reveal, RevealState::Hidden);
        assert_eq!(entry.category_title, format!("Cat {}", id.category));
        assert_eq!(entry.clue.question, format!("Q{}{}", id.category, id.clue));
        assert_eq!(cells.display_text(id), PLACEHOLDER);
    }
}

#[test]
fn test_visible_structure_carries_no_clue_text() {
    let (board, _cells) = render(categories(6, 5), 5).unwrap();
    let visible = format!("{:?}", board);

    assert!(!visible.contains("Q00"));
    assert!(!visible.contains("A00"));
    assert!(!visible.contains("A54"));
}

#[test]
fn test_render_rejects_short_category() {
    let mut cats = categories(3, 5);
    cats[1].clues.pop();

    let err = render(cats, 5).unwrap_err();
    assert!(matches!(err, GameError::Render(_)));
}

#[test]
fn test_render_resets_reveal_state() {
    let mut cats = categories(1, 2);
    cats[0].clues[0].reveal = RevealState::Answer;

    let (_board, cells) = render(cats, 2).unwrap();
    assert_eq!(cells.reveal_state(CellId::new(0, 0)), Some(RevealState::Hidden));
}

#[test]
fn test_click_shows_question_then_answer_then_nothing() {
    let (_board, mut cells) = render(categories(2, 2), 2).unwrap();
    let id = CellId::new(1, 0);

    assert_eq!(
        handle_click(&mut cells, ClickTarget::Cell(id)),
        RevealOutcome::Advanced {
            cell: id,
            state: RevealState::Question
        }
    );
    assert_eq!(cells.display_text(id), "Q10");

    assert_eq!(
        handle_click(&mut cells, ClickTarget::Cell(id)),
        RevealOutcome::Advanced {
            cell: id,
            state: RevealState::Answer
        }
    );
    assert_eq!(cells.display_text(id), "A10");

    assert_eq!(
        handle_click(&mut cells, ClickTarget::Cell(id)),
        RevealOutcome::Unchanged(id)
    );
    assert_eq!(cells.display_text(id), "A10");
    assert_eq!(cells.reveal_state(id), Some(RevealState::Answer));
}

#[test]
fn test_displayed_content_is_monotone() {
    let (_board, mut cells) = render(categories(1, 1), 1).unwrap();
    let id = CellId::new(0, 0);
    let allowed = [PLACEHOLDER, "Q00", "A00"];

    let mut shown = vec![cells.display_text(id).to_string()];
    for _ in 0..5 {
        handle_click(&mut cells, ClickTarget::Cell(id));
        shown.push(cells.display_text(id).to_string());
    }

    let ranks: Vec<usize> = shown
        .iter()
        .map(|s| allowed.iter().position(|a| a == s).unwrap())
        .collect();
    assert!(ranks.windows(2).all(|w| w[0] <= w[1]), "went backwards: {:?}", shown);
    assert_eq!(ranks.last(), Some(&2));
}

#[test]
fn test_clicks_on_other_cells_are_independent() {
    let (_board, mut cells) = render(categories(2, 2), 2).unwrap();

    handle_click(&mut cells, ClickTarget::Cell(CellId::new(0, 0)));
    assert_eq!(cells.reveal_state(CellId::new(0, 0)), Some(RevealState::Question));
    assert_eq!(cells.reveal_state(CellId::new(0, 1)), Some(RevealState::Hidden));
    assert_eq!(cells.reveal_state(CellId::new(1, 0)), Some(RevealState::Hidden));
}

#[test]
fn test_non_clue_targets_are_ignored() {
    let (_board, mut cells) = render(categories(2, 2), 2).unwrap();

    assert_eq!(handle_click(&mut cells, ClickTarget::Header(0)), RevealOutcome::Ignored);
    assert_eq!(handle_click(&mut cells, ClickTarget::Restart), RevealOutcome::Ignored);
    assert_eq!(
        handle_click(&mut cells, ClickTarget::Cell(CellId::new(9, 9))),
        RevealOutcome::Ignored
    );
    assert!(cells.states().all(|s| s == RevealState::Hidden));
}

#[test]
fn test_session_counts_follow_clicks() {
    let mut session = GameSession::mount(1, categories(6, 5), 5).unwrap();
    session.click(ClickTarget::Cell(CellId::new(0, 0)));
    session.click(ClickTarget::Cell(CellId::new(0, 0)));
    session.click(ClickTarget::Cell(CellId::new(3, 4)));

    let counts = session.reveal_counts();
    assert_eq!(counts.hidden, 28);
    assert_eq!(counts.question, 1);
    assert_eq!(counts.answer, 1);
}
