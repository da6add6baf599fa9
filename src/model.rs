/// Text shown in a clue cell that has not been revealed yet.
pub const PLACEHOLDER: &str = "?";

pub type CategoryId = u64;

/// Per-clue reveal progress. Only ever moves forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealState {
    #[default]
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// State after one click. `Answer` is terminal.
    pub fn next(self) -> Self {
        match self {
            RevealState::Hidden => RevealState::Question,
            RevealState::Question => RevealState::Answer,
            RevealState::Answer => RevealState::Answer,
        }
    }

    pub fn is_terminal(self) -> bool {
        self == RevealState::Answer
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub reveal: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            reveal: RevealState::Hidden,
        }
    }

    /// What a cell bound to this clue displays in its current state.
    pub fn display_text(&self) -> &str {
        match self.reveal {
            RevealState::Hidden => PLACEHOLDER,
            RevealState::Question => &self.question,
            RevealState::Answer => &self.answer,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// Stable identity of a rendered clue cell: column (category) and row (clue).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CellId {
    pub category: usize,
    pub clue: usize,
}

impl CellId {
    pub fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}
