//! Terminal input module.
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`]. Descent is
//! player driven, so there is no auto-repeat or timing state here: one key
//! press is one action.

pub mod map;

pub use block_game_types as types;

pub use map::{handle_key_event, should_quit};
