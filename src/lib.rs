//! Klondike solitaire rules engine.
//!
//! The `game` module owns the board state and the legality of individual
//! moves; the `engine` module is the façade a presentation layer drives:
//! drag-drop proposals, speculative validation for highlighting, the
//! double-click auto-move, and the auto-complete run.

pub mod engine;
pub mod game;
