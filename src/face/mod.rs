//! Expression model for the idle face.
//!
//! This module contains:
//! - The feature states (eyelids, eye directions, mouth) and the face mode
//! - The `Face` aggregate with its mutating actions and render step
//! - The glyph table and fixed panel layout used by rendering

pub mod glyph;
pub mod state;

// Re-export commonly used types
pub use glyph::{Layout, DECORATION, LAYOUT};
pub use state::{EyeDirection, EyelidState, Face, FaceMode, MouthState};
