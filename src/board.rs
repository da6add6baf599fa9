use std::collections::HashMap;

use tracing::debug;

use crate::error::{GameError, Result};
use crate::model::{Category, CellId, Clue, RevealState};

/// The visible structure of a mounted board. Holds category titles and cell
/// identities only; clue text lives in [`CellAssociation`].
#[derive(Debug, Clone, PartialEq)]
pub struct BoardView {
    pub headers: Vec<String>,
    /// `rows[r][c]` is the cell for clue `r` of category `c`.
    pub rows: Vec<Vec<CellId>>,
}

impl BoardView {
    pub fn columns(&self) -> usize {
        self.headers.len()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn cell_ids(&self) -> impl Iterator<Item = CellId> + '_ {
        self.rows.iter().flat_map(|row| row.iter().copied())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CellEntry {
    pub category_title: String,
    pub clue: Clue,
}

/// Out-of-band map from a rendered cell to the clue behind it.
#[derive(Debug, Default)]
pub struct CellAssociation {
    entries: HashMap<CellId, CellEntry>,
}

impl CellAssociation {
    pub fn get(&self, id: CellId) -> Option<&CellEntry> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, id: CellId) -> Option<&mut CellEntry> {
        self.entries.get_mut(&id)
    }

    pub fn contains(&self, id: CellId) -> bool {
        self.entries.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn reveal_state(&self, id: CellId) -> Option<RevealState> {
        self.entries.get(&id).map(|e| e.clue.reveal)
    }

    /// Text the cell currently shows. Unknown cells show nothing.
    pub fn display_text(&self, id: CellId) -> &str {
        self.entries
            .get(&id)
            .map(|e| e.clue.display_text())
            .unwrap_or("")
    }

    pub fn states(&self) -> impl Iterator<Item = RevealState> + '_ {
        self.entries.values().map(|e| e.clue.reveal)
    }
}

/// Build the grid for `categories`: one header per category and exactly
/// `clue_count` rows of hidden cells, each registered in the association.
pub fn render(
    categories: Vec<Category>,
    clue_count: usize,
) -> Result<(BoardView, CellAssociation)> {
    if categories.is_empty() {
        return Err(GameError::Render("no categories to render".to_string()));
    }
    if let Some(short) = categories.iter().find(|c| c.clues.len() != clue_count) {
        return Err(GameError::Render(format!(
            "category {:?} has {} clues, expected {}",
            short.title,
            short.clues.len(),
            clue_count
        )));
    }

    let headers: Vec<String> = categories.iter().map(|c| c.title.clone()).collect();
    let rows: Vec<Vec<CellId>> = (0..clue_count)
        .map(|r| (0..categories.len()).map(|c| CellId::new(c, r)).collect())
        .collect();

    let mut cells = CellAssociation::default();
    for (ci, category) in categories.into_iter().enumerate() {
        for (ri, mut clue) in category.clues.into_iter().enumerate() {
            clue.reveal = RevealState::Hidden;
            cells.entries.insert(
                CellId::new(ci, ri),
                CellEntry {
                    category_title: category.title.clone(),
                    clue,
                },
            );
        }
    }

    debug!(
        columns = headers.len(),
        rows = rows.len(),
        cells = cells.len(),
        "board rendered"
    );
    Ok((BoardView { headers, rows }, cells))
}
