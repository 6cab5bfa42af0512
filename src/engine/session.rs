//! Owning wrapper that ties the pieces together for an interactive caller:
//! one game, plus the auto-complete arming lifecycle. The gate is evaluated
//! after every committed change and after each fresh deal; an armed run is
//! then stepped to exhaustion without re-checking the gate, and disarms when
//! it runs dry or wins.

use crate::engine::autocomplete::{self, AutoStep};
use crate::engine::boundary;
use crate::engine::proposal::{MoveProposal, PileId};
use crate::engine::view_model::BoardSnapshot;
use crate::game::{DrawResult, KlondikeGame};

#[derive(Debug, Clone)]
pub struct GameSession {
    game: KlondikeGame,
    auto_armed: bool,
}

impl GameSession {
    pub fn new_shuffled() -> Self {
        Self::from_game(KlondikeGame::new_shuffled())
    }

    pub fn new_with_seed(seed: u64) -> Self {
        Self::from_game(KlondikeGame::new_with_seed(seed))
    }

    /// Adopt an existing board, evaluating the auto-complete gate for it.
    pub fn from_game(game: KlondikeGame) -> Self {
        let mut session = Self {
            game,
            auto_armed: false,
        };
        session.rearm();
        session
    }

    /// Replace the board wholesale with a fresh shuffled deal.
    pub fn new_game(&mut self) {
        *self = Self::new_shuffled();
    }

    pub fn new_game_with_seed(&mut self, seed: u64) {
        *self = Self::new_with_seed(seed);
    }

    pub fn game(&self) -> &KlondikeGame {
        &self.game
    }

    pub fn propose_move(&mut self, proposal: MoveProposal) -> bool {
        let committed = boundary::propose_move(&mut self.game, proposal);
        if committed {
            self.rearm();
        }
        committed
    }

    pub fn draw_from_stock(&mut self) -> DrawResult {
        let result = boundary::draw_from_stock(&mut self.game);
        if result != DrawResult::NoOp {
            self.rearm();
        }
        result
    }

    pub fn try_auto_move_to_foundation(&mut self, source: PileId) -> bool {
        let committed = boundary::try_auto_move_to_foundation(&mut self.game, source);
        if committed {
            self.rearm();
        }
        committed
    }

    pub fn auto_complete_armed(&self) -> bool {
        self.auto_armed
    }

    /// One externally-paced solver step. A no-op unless armed; disarms after
    /// the step that wins or finds nothing left to lift.
    pub fn step_auto_complete(&mut self) -> AutoStep {
        if !self.auto_armed {
            return AutoStep {
                moved: false,
                won: self.game.is_won(),
            };
        }

        let step = autocomplete::apply_next_auto_step(&mut self.game);
        if !step.moved || step.won {
            self.auto_armed = false;
        }
        step
    }

    /// Run an armed solver to exhaustion with no pacing, returning the number
    /// of cards moved.
    pub fn run_auto_complete(&mut self) -> u32 {
        let mut steps = 0;
        while self.auto_armed {
            if self.step_auto_complete().moved {
                steps += 1;
            }
        }
        steps
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot::of(&self.game)
    }

    pub fn move_count(&self) -> u32 {
        self.game.move_count()
    }

    pub fn is_won(&self) -> bool {
        self.game.is_won()
    }

    fn rearm(&mut self) {
        self.auto_armed = autocomplete::can_auto_complete(&self.game);
    }
}
