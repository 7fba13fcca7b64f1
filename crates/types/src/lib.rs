//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no external dependencies, so they can be used
//! by the game logic, the terminal view and the input mapping alike.
//!
//! # Board Dimensions
//!
//! The playfield is a square grid:
//!
//! - **Size**: 10 columns by 10 rows (indexed 0-9 on both axes)
//! - **Spawn position**: (3, 0), the top-left cell of the shape mask
//!
//! # Scoring
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `ROW_CLEAR_BONUS` | 100 | Points for each row removed by a collapse |
//!
//! # Examples
//!
//! ```
//! use block_game_types::{Cell, Direction, GameAction, ShapeKind, BOARD_SIZE};
//!
//! // Parse a shape kind (case-insensitive)
//! let kind = ShapeKind::from_str("t").unwrap();
//! assert_eq!(kind, ShapeKind::T);
//!
//! // Actions carry the direction they move the piece in
//! assert_eq!(GameAction::SoftDrop.direction(), Some(Direction::Down));
//! assert_eq!(GameAction::Restart.direction(), None);
//!
//! assert!(Cell::Filled.is_filled());
//! assert_eq!(BOARD_SIZE, 10);
//! ```

/// Board width and height in cells (the board is square)
pub const BOARD_SIZE: u8 = 10;

/// Column of the shape mask's top-left cell when a piece spawns
pub const SPAWN_X: i8 = 3;

/// Row of the shape mask's top-left cell when a piece spawns
pub const SPAWN_Y: i8 = 0;

/// Points awarded for every row cleared
pub const ROW_CLEAR_BONUS: u32 = 100;

/// Number of entries in the shape catalog
pub const SHAPE_COUNT: usize = 8;


/// The eight block shapes of the catalog
///
/// Shapes never rotate. Their masks live in the core crate's `pieces` module:
/// - **Square**: 2x2 block
/// - **LineHorizontal**: 1x4 bar
/// - **LineVertical**: 4x1 bar
/// - **Z** / **ReverseZ**: 2x3 skew pieces
/// - **T**: 2x3 tee pointing down
/// - **L** / **ReverseL**: 2x2 corners
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    Square,
    LineHorizontal,
    LineVertical,
    Z,
    ReverseZ,
    T,
    L,
    ReverseL,
}

impl ShapeKind {
    /// Every shape, in catalog order
    pub const ALL: [ShapeKind; SHAPE_COUNT] = [
        ShapeKind::Square,
        ShapeKind::LineHorizontal,
        ShapeKind::LineVertical,
        ShapeKind::Z,
        ShapeKind::ReverseZ,
        ShapeKind::T,
        ShapeKind::L,
        ShapeKind::ReverseL,
    ];

    /// Position of this shape in [`ShapeKind::ALL`]
    pub fn index(&self) -> usize {
        match self {
            ShapeKind::Square => 0,
            ShapeKind::LineHorizontal => 1,
            ShapeKind::LineVertical => 2,
            ShapeKind::Z => 3,
            ShapeKind::ReverseZ => 4,
            ShapeKind::T => 5,
            ShapeKind::L => 6,
            ShapeKind::ReverseL => 7,
        }
    }

    /// Parse shape kind from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use block_game_types::ShapeKind;
    ///
    /// assert_eq!(ShapeKind::from_str("square"), Some(ShapeKind::Square));
    /// assert_eq!(ShapeKind::from_str("Reverse_Z"), Some(ShapeKind::ReverseZ));
    /// assert_eq!(ShapeKind::from_str("s"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "square" => Some(ShapeKind::Square),
            "line_horizontal" => Some(ShapeKind::LineHorizontal),
            "line_vertical" => Some(ShapeKind::LineVertical),
            "z" => Some(ShapeKind::Z),
            "reverse_z" => Some(ShapeKind::ReverseZ),
            "t" => Some(ShapeKind::T),
            "l" => Some(ShapeKind::L),
            "reverse_l" => Some(ShapeKind::ReverseL),
            _ => None,
        }
    }

    /// Convert to lowercase snake_case name
    pub fn as_str(&self) -> &'static str {
        match self {
            ShapeKind::Square => "square",
            ShapeKind::LineHorizontal => "line_horizontal",
            ShapeKind::LineVertical => "line_vertical",
            ShapeKind::Z => "z",
            ShapeKind::ReverseZ => "reverse_z",
            ShapeKind::T => "t",
            ShapeKind::L => "l",
            ShapeKind::ReverseL => "reverse_l",
        }
    }
}

/// A cell on the game board
///
/// Occupancy is binary; locked cells do not remember which shape filled them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Filled,
}

impl Cell {
    pub fn is_filled(&self) -> bool {
        matches!(self, Cell::Filled)
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Cell::Empty)
    }
}

/// Directions the active piece can be moved in
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Left,
    Right,
    Down,
}

impl Direction {
    /// Origin offset `(dx, dy)` for a one-cell step
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
            Direction::Down => (0, 1),
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// The shell translates key presses into these; keys with no action map to
/// nothing at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Move piece one cell down, locking it if it cannot move
    SoftDrop,
    /// Start over with an empty board and zero score
    Restart,
}

impl GameAction {
    /// Parse action from string
    ///
    /// # Examples
    ///
    /// ```
    /// use block_game_types::GameAction;
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::MoveLeft));
    /// assert_eq!(GameAction::from_str("softdrop"), Some(GameAction::SoftDrop));
    /// assert_eq!(GameAction::from_str("rotateCw"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::Restart => "restart",
        }
    }

    /// The piece movement this action requests, if any
    pub fn direction(&self) -> Option<Direction> {
        match self {
            GameAction::MoveLeft => Some(Direction::Left),
            GameAction::MoveRight => Some(Direction::Right),
            GameAction::SoftDrop => Some(Direction::Down),
            GameAction::Restart => None,
        }
    }
}

/// Core-side event recorded after a lock attempt.
///
/// Taken once by the shell (for logging); not part of the rendered state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    /// The piece was written into the board (false when its placement was illegal)
    pub placed: bool,
    pub rows_cleared: u32,
    pub score_gained: u32,
}
