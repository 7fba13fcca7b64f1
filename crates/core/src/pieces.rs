//! Pieces module - the fixed catalog of block shapes
//!
//! Every shape is a rectangular binary mask. Shapes never rotate, so each kind
//! has exactly one mask and one list of occupied cells.

use crate::types::ShapeKind;

/// Offset `(dx, dy)` of an occupied cell relative to the mask's top-left cell
pub type CellOffset = (i8, i8);

/// Rows of a shape mask; 1 marks an occupied cell
pub type ShapeMask = &'static [&'static [u8]];

const SQUARE_MASK: ShapeMask = &[&[1, 1], &[1, 1]];
const LINE_HORIZONTAL_MASK: ShapeMask = &[&[1, 1, 1, 1]];
const LINE_VERTICAL_MASK: ShapeMask = &[&[1], &[1], &[1], &[1]];
const Z_MASK: ShapeMask = &[&[1, 1, 0], &[0, 1, 1]];
const REVERSE_Z_MASK: ShapeMask = &[&[0, 1, 1], &[1, 1, 0]];
const T_MASK: ShapeMask = &[&[1, 1, 1], &[0, 1, 0]];
const L_MASK: ShapeMask = &[&[1, 1], &[1, 0]];
const REVERSE_L_MASK: ShapeMask = &[&[1, 1], &[0, 1]];

/// Get the mask for a shape kind
pub fn mask(kind: ShapeKind) -> ShapeMask {
    match kind {
        ShapeKind::Square => SQUARE_MASK,
        ShapeKind::LineHorizontal => LINE_HORIZONTAL_MASK,
        ShapeKind::LineVertical => LINE_VERTICAL_MASK,
        ShapeKind::Z => Z_MASK,
        ShapeKind::ReverseZ => REVERSE_Z_MASK,
        ShapeKind::T => T_MASK,
        ShapeKind::L => L_MASK,
        ShapeKind::ReverseL => REVERSE_L_MASK,
    }
}

/// Get the occupied cells of a shape, in row-major order
pub fn cells(kind: ShapeKind) -> &'static [CellOffset] {
    match kind {
        ShapeKind::Square => &[(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::LineHorizontal => &[(0, 0), (1, 0), (2, 0), (3, 0)],
        ShapeKind::LineVertical => &[(0, 0), (0, 1), (0, 2), (0, 3)],
        ShapeKind::Z => &[(0, 0), (1, 0), (1, 1), (2, 1)],
        ShapeKind::ReverseZ => &[(1, 0), (2, 0), (0, 1), (1, 1)],
        ShapeKind::T => &[(0, 0), (1, 0), (2, 0), (1, 1)],
        ShapeKind::L => &[(0, 0), (1, 0), (0, 1)],
        ShapeKind::ReverseL => &[(0, 0), (1, 0), (1, 1)],
    }
}

/// Mask dimensions as `(columns, rows)`
pub fn dimensions(kind: ShapeKind) -> (u8, u8) {
    let rows = mask(kind);
    let cols = rows.first().map_or(0, |row| row.len());
    (cols as u8, rows.len() as u8)
}
