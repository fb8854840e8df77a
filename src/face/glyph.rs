//! Glyph table and panel layout.
//!
//! Feature states carry no presentation; this is the only place that knows
//! which character stands for which state and where it goes on the panel.

use crate::face::state::{EyeDirection, EyelidState, MouthState};

/// Decorative glyph drawn on both sides of the eyes.
pub const DECORATION: char = '$';

/// Fixed (column, row) coordinates of every face element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    /// Panel width in characters
    pub columns: u8,
    /// Panel height in rows
    pub rows: u8,
    /// Decorative glyph positions, drawn first
    pub decorations: [(u8, u8); 2],
    pub left_eye: (u8, u8),
    pub right_eye: (u8, u8),
    pub mouth: (u8, u8),
}

/// Layout of the 16x2 panel.
pub const LAYOUT: Layout = Layout {
    columns: 16,
    rows: 2,
    decorations: [(3, 0), (11, 0)],
    left_eye: (5, 0),
    right_eye: (9, 0),
    mouth: (7, 1),
};

/// Glyph for an open eye looking in `direction`.
pub fn eye_glyph(direction: EyeDirection) -> char {
    match direction {
        EyeDirection::Forward => 'o',
        EyeDirection::Left => '<',
        EyeDirection::Right => '>',
    }
}

/// Glyph for a closed eyelid.
pub const CLOSED_EYELID: char = '-';

/// Glyph shown for one eye: the eyelid hides the direction when closed.
pub fn eye_cell(eyelid: EyelidState, direction: EyeDirection) -> char {
    match eyelid {
        EyelidState::Closed => CLOSED_EYELID,
        EyelidState::Open => eye_glyph(direction),
    }
}

pub fn mouth_glyph(mouth: MouthState) -> char {
    match mouth {
        MouthState::Neutral => '-',
        MouthState::Smiling => 'v',
        MouthState::Frowning => '_',
        MouthState::Agape => 'O',
        MouthState::Small => '.',
    }
}
