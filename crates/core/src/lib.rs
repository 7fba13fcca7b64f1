//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains the game rules and state management for the
//! falling-block puzzle. It has **no dependencies** on UI, terminal or I/O
//! (only `tracing` for diagnostics), which makes it:
//!
//! - **Deterministic**: the same seed produces the same shape sequence
//! - **Testable**: every rule is exercised by unit tests
//! - **Portable**: any shell can drive it (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`board`]: 10x10 grid with placement checks and row collapse
//! - [`game_state`]: active piece, moves, locking, score
//! - [`pieces`]: the fixed catalog of eight shape masks
//! - [`rng`]: seeded uniform shape selection
//! - [`snapshot`]: copyable view of the state for rendering
//!
//! # Game Rules
//!
//! - The active piece moves left, right or down one cell per input
//! - A blocked downward move locks the piece into the board
//! - Full rows are removed in a single top-to-bottom pass, 100 points each
//! - A new random shape then spawns at column 3, row 0
//! - There is no rotation, no gravity timer and no game over
//!
//! # Example
//!
//! ```
//! use block_game_core::GameState;
//! use block_game_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.handle_input(GameAction::MoveRight);
//! // Soft drop until the piece locks at the bottom.
//! while game.handle_input(GameAction::SoftDrop) {}
//!
//! assert_eq!(game.pieces_locked(), 1);
//! assert_eq!(game.score(), 0);
//! ```

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;

pub use block_game_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::{ActivePiece, GameState};
pub use pieces::{cells, mask, CellOffset, ShapeMask};
pub use rng::{ShapeRandomizer, SimpleRng};
pub use snapshot::GameSnapshot;
