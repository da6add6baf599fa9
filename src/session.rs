use chrono::{DateTime, Utc};

use crate::board::{self, BoardView, CellAssociation};
use crate::error::Result;
use crate::model::{Category, CellId, RevealState};
use crate::reveal::{self, ClickTarget, RevealOutcome};

/// One mounted board and the association bound to it. Replaced wholesale on
/// restart.
#[derive(Debug)]
pub struct GameSession {
    pub number: u64,
    pub board: BoardView,
    pub cells: CellAssociation,
    pub started_at: DateTime<Utc>,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RevealCounts {
    pub hidden: usize,
    pub question: usize,
    pub answer: usize,
}

impl GameSession {
    pub fn mount(number: u64, categories: Vec<Category>, clue_count: usize) -> Result<Self> {
        let (board, cells) = board::render(categories, clue_count)?;
        Ok(Self {
            number,
            board,
            cells,
            started_at: Utc::now(),
        })
    }

    pub fn click(&mut self, target: ClickTarget) -> RevealOutcome {
        reveal::handle_click(&mut self.cells, target)
    }

    pub fn display_text(&self, id: CellId) -> &str {
        self.cells.display_text(id)
    }

    pub fn reveal_counts(&self) -> RevealCounts {
        let mut counts = RevealCounts::default();
        for state in self.cells.states() {
            match state {
                RevealState::Hidden => counts.hidden += 1,
                RevealState::Question => counts.question += 1,
                RevealState::Answer => counts.answer += 1,
            }
        }
        counts
    }
}
