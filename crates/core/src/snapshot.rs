//! Read-only copy of everything the shell needs to draw a frame.

use crate::board::{Grid, SIZE};
use crate::game_state::ActivePiece;
use crate::types::{Cell, ShapeKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: Grid,
    pub active: ActivePiece,
    pub episode_id: u32,
    /// Shape RNG state; a game built from it draws the same next shapes
    pub rng_state: u32,
    pub pieces_locked: u32,
    pub score: u32,
    pub rows_cleared: u32,
    /// Some catalog shape still fits somewhere on the board
    pub can_fit: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Whether the active piece covers board cell (x, y)
    pub fn active_covers(&self, x: i8, y: i8) -> bool {
        self.active.board_cells().any(|cell| cell == (x, y))
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[Cell::Empty; SIZE]; SIZE],
            active: ActivePiece::new(ShapeKind::Square),
            episode_id: 0,
            rng_state: 0,
            pieces_locked: 0,
            score: 0,
            rows_cleared: 0,
            can_fit: true,
        }
    }
}
