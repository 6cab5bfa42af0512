use serde::Serialize;

use crate::game::{Card, KlondikeGame};

/// Address of one pile on the board, as the presentation layer names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PileId {
    Stock,
    Waste,
    Foundation(usize),
    Tableau(usize),
}

/// A drag-drop (or double-click) relocation request: `group_len` cards picked
/// up from the top of `source`, dropped on `target`. Waste and foundation
/// sources always carry a group of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveProposal {
    pub source: PileId,
    pub target: PileId,
    pub group_len: usize,
}

impl MoveProposal {
    pub fn single(source: PileId, target: PileId) -> Self {
        Self {
            source,
            target,
            group_len: 1,
        }
    }
}

/// The lead card of a proposed group: the bottom-most picked-up card, the one
/// checked against the destination. `None` when the source cannot yield a
/// group of the requested size.
pub fn lead_card(game: &KlondikeGame, source: PileId, group_len: usize) -> Option<Card> {
    match source {
        PileId::Waste if group_len == 1 => game.waste_top(),
        PileId::Foundation(idx) if group_len == 1 => game.foundation_top(idx),
        PileId::Tableau(col) if group_len >= 1 => {
            let len = game.tableau_len(col)?;
            len.checked_sub(group_len)
                .and_then(|start| game.tableau_card(col, start))
        }
        _ => None,
    }
}
