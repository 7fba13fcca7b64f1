//! Block Game (workspace facade crate).
//!
//! Re-exports the workspace crates as `block_game::{core,input,term,types}`
//! and hosts the binary's configuration and logging setup.

pub mod config;
pub mod logging;

pub use block_game_core as core;
pub use block_game_input as input;
pub use block_game_term as term;
pub use block_game_types as types;
