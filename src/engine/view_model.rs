use serde::Serialize;

use crate::game::{Card, KlondikeGame};

/// Read-only copy of the board handed to the presentation layer after every
/// committed change. Serializable so an out-of-process renderer can consume
/// it as plain data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BoardSnapshot {
    pub stock: Vec<Card>,
    pub waste: Vec<Card>,
    pub foundations: [Vec<Card>; 4],
    pub tableau: [Vec<Card>; 7],
    pub moves: u32,
    pub won: bool,
}

impl BoardSnapshot {
    pub fn of(game: &KlondikeGame) -> Self {
        Self {
            stock: game.stock().to_vec(),
            waste: game.waste().to_vec(),
            foundations: game.foundations().clone(),
            tableau: game.tableau().clone(),
            moves: game.move_count(),
            won: game.is_won(),
        }
    }
}
