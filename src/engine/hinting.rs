use crate::engine::boundary;
use crate::engine::proposal::{MoveProposal, PileId};
use crate::game::KlondikeGame;

/// Every destination the given picked-up group may legally be dropped on,
/// computed with the speculative validator. The UI calls this while a drag is
/// in flight (or when "show hints" is active) to highlight drop targets.
pub fn legal_targets_for(game: &KlondikeGame, source: PileId, group_len: usize) -> Vec<PileId> {
    let mut targets = Vec::new();

    for idx in 0..4 {
        let proposal = MoveProposal {
            source,
            target: PileId::Foundation(idx),
            group_len,
        };
        if boundary::is_valid_move(game, proposal) {
            targets.push(PileId::Foundation(idx));
        }
    }

    for dst in 0..7 {
        let proposal = MoveProposal {
            source,
            target: PileId::Tableau(dst),
            group_len,
        };
        if boundary::is_valid_move(game, proposal) {
            targets.push(PileId::Tableau(dst));
        }
    }

    targets
}
