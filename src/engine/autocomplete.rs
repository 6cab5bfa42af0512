//! Greedy finisher for a fully-exposed board: once the stock and waste are
//! empty and every tableau card faces up, the remaining game is won by
//! repeatedly lifting exposed cards to the foundations. Each step is one
//! atomic relocation; pacing (if any) belongs to whoever drives the loop.

use crate::game::KlondikeGame;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AutoStep {
    pub moved: bool,
    pub won: bool,
}

/// Gate for arming an auto-complete run. A run started under this gate keeps
/// the board in the fully-exposed regime, since it only ever moves cards to
/// foundations.
pub fn can_auto_complete(game: &KlondikeGame) -> bool {
    game.stock_len() == 0
        && game.waste_len() == 0
        && game.tableau().iter().flatten().all(|card| card.face_up)
        && !game.is_won()
}

/// One solver step: the waste top is tried first, then each tableau top in
/// column order; the first card with an accepting foundation moves to the
/// lowest-indexed foundation that takes it.
pub fn apply_next_auto_step(game: &mut KlondikeGame) -> AutoStep {
    let moved = step_once(game);
    AutoStep {
        moved,
        won: game.is_won(),
    }
}

/// Drive steps until no card is liftable or the game is won. Terminates in
/// at most 52 steps since every step removes one card from the live piles.
pub fn run_to_completion(game: &mut KlondikeGame) -> u32 {
    let mut steps = 0;
    loop {
        let step = apply_next_auto_step(game);
        if step.moved {
            steps += 1;
        }
        if !step.moved || step.won {
            return steps;
        }
    }
}

fn step_once(game: &mut KlondikeGame) -> bool {
    if let Some(card) = game.waste_top() {
        if let Some(idx) = game.first_accepting_foundation(card) {
            return game.move_waste_to_foundation(idx);
        }
    }

    for col in 0..7 {
        let Some(card) = game.tableau_top(col) else {
            continue;
        };
        if !card.face_up {
            continue;
        }
        if let Some(idx) = game.first_accepting_foundation(card) {
            return game.move_tableau_top_to_foundation(col, idx);
        }
    }

    false
}
