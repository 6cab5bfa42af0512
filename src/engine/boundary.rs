//! Thin façade between the presentation layer and the rules engine.
//!
//! UI code translates pointer events into [`MoveProposal`]s and calls these
//! helpers instead of touching the game's per-edge move methods directly.
//! `is_valid_move` never mutates, so the UI may call it speculatively to
//! decide which drop targets to highlight.

use crate::engine::proposal::{lead_card, MoveProposal, PileId};
use crate::game::{DrawResult, KlondikeGame};

pub fn new_game() -> KlondikeGame {
    KlondikeGame::new_shuffled()
}

pub fn new_game_with_seed(seed: u64) -> KlondikeGame {
    KlondikeGame::new_with_seed(seed)
}

/// Pure legality check for a proposal, in precedence order: a pile never
/// accepts from itself; a foundation takes a single card obeying the
/// foundation rule; a tableau takes a liftable group whose lead card obeys
/// the tableau rule; nothing else is a legal drop target.
pub fn is_valid_move(game: &KlondikeGame, proposal: MoveProposal) -> bool {
    let MoveProposal {
        source,
        target,
        group_len,
    } = proposal;

    if source == target {
        return false;
    }
    if !group_is_liftable(game, source, group_len) {
        return false;
    }
    let Some(lead) = lead_card(game, source, group_len) else {
        return false;
    };

    match target {
        PileId::Foundation(idx) => group_len == 1 && game.foundation_accepts(idx, lead),
        PileId::Tableau(dst) => game.tableau_accepts(dst, lead),
        PileId::Stock | PileId::Waste => false,
    }
}

/// Validate and commit in one call. Returns whether the board changed.
pub fn propose_move(game: &mut KlondikeGame, proposal: MoveProposal) -> bool {
    if !is_valid_move(game, proposal) {
        return false;
    }
    apply_validated(game, proposal)
}

pub fn draw_from_stock(game: &mut KlondikeGame) -> DrawResult {
    game.draw_from_stock()
}

/// Double-click convenience: send the top card of `source` to the
/// lowest-indexed foundation that takes it.
pub fn try_auto_move_to_foundation(game: &mut KlondikeGame, source: PileId) -> bool {
    let Some(card) = lead_card(game, source, 1) else {
        return false;
    };
    let Some(idx) = game.first_accepting_foundation(card) else {
        return false;
    };
    match source {
        PileId::Waste => game.move_waste_to_foundation(idx),
        PileId::Tableau(src) => game.move_tableau_top_to_foundation(src, idx),
        PileId::Foundation(src) => game.move_foundation_top_to_foundation(src, idx),
        PileId::Stock => false,
    }
}

fn group_is_liftable(game: &KlondikeGame, source: PileId, group_len: usize) -> bool {
    match source {
        PileId::Waste => group_len == 1 && !game.waste().is_empty(),
        PileId::Foundation(idx) => group_len == 1 && game.foundation_top(idx).is_some(),
        PileId::Tableau(col) => {
            if group_len == 0 {
                return false;
            }
            match game.tableau_len(col).and_then(|len| len.checked_sub(group_len)) {
                Some(start) => game.tableau_run_is_liftable(col, start),
                None => false,
            }
        }
        PileId::Stock => false,
    }
}

fn apply_validated(game: &mut KlondikeGame, proposal: MoveProposal) -> bool {
    match (proposal.source, proposal.target) {
        (PileId::Waste, PileId::Foundation(idx)) => game.move_waste_to_foundation(idx),
        (PileId::Waste, PileId::Tableau(dst)) => game.move_waste_to_tableau(dst),
        (PileId::Foundation(src), PileId::Tableau(dst)) => {
            game.move_foundation_top_to_tableau(src, dst)
        }
        (PileId::Foundation(src), PileId::Foundation(dst)) => {
            game.move_foundation_top_to_foundation(src, dst)
        }
        (PileId::Tableau(src), PileId::Foundation(idx)) => {
            game.move_tableau_top_to_foundation(src, idx)
        }
        (PileId::Tableau(src), PileId::Tableau(dst)) => {
            let start = game
                .tableau_len(src)
                .and_then(|len| len.checked_sub(proposal.group_len));
            match start {
                Some(start) => game.move_tableau_run_to_tableau(src, start, dst),
                None => false,
            }
        }
        _ => false,
    }
}
