use tracing::debug;

use crate::board::CellAssociation;
use crate::model::{CellId, RevealState};

/// What a click landed on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Cell(CellId),
    Header(usize),
    Restart,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// The cell advanced and now shows `state`.
    Advanced { cell: CellId, state: RevealState },
    /// The cell already shows its answer.
    Unchanged(CellId),
    /// Not a clue cell this machine knows about.
    Ignored,
}

/// Advance the clicked cell one step: Hidden -> Question -> Answer.
pub fn handle_click(cells: &mut CellAssociation, target: ClickTarget) -> RevealOutcome {
    let ClickTarget::Cell(id) = target else {
        return RevealOutcome::Ignored;
    };
    let Some(entry) = cells.get_mut(id) else {
        return RevealOutcome::Ignored;
    };

    let current = entry.clue.reveal;
    if current.is_terminal() {
        return RevealOutcome::Unchanged(id);
    }

    let next = current.next();
    entry.clue.reveal = next;
    debug!(
        category = id.category,
        clue = id.clue,
        from = ?current,
        to = ?next,
        "cell revealed"
    );
    RevealOutcome::Advanced {
        cell: id,
        state: next,
    }
}
