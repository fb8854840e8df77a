//! Face state and its transitions.
//!
//! The face is five independent feature states plus a mode that tracks the
//! one transient override with automatic revert: a blink. Winking is only
//! ever the right eyelid being closed and is never written into the mode.

use crate::display::{Display, DisplayError};
use crate::face::glyph::{eye_cell, mouth_glyph, DECORATION, LAYOUT};

/// Whether an eyelid covers the eye.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyelidState {
    Open,
    Closed,
}

/// Where an open eye is looking.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EyeDirection {
    Forward,
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouthState {
    Neutral,
    Smiling,
    Frowning,
    Agape,
    Small,
}

/// Face-wide mode.
///
/// `Winking` exists as a mode but no action enters it; winks are modeled on
/// the right eyelid alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FaceMode {
    Default,
    Blinking,
    Winking,
}

/// The face aggregate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Face {
    left_eyelid: EyelidState,
    left_eye: EyeDirection,
    right_eyelid: EyelidState,
    right_eye: EyeDirection,
    mouth: MouthState,
    mode: FaceMode,
    /// Mode to restore on the next settle; only meaningful while blinking
    saved_mode: FaceMode,
}

impl Face {
    /// Create a face with open eyes looking forward and a neutral mouth.
    pub fn new() -> Self {
        Self {
            left_eyelid: EyelidState::Open,
            left_eye: EyeDirection::Forward,
            right_eyelid: EyelidState::Open,
            right_eye: EyeDirection::Forward,
            mouth: MouthState::Neutral,
            mode: FaceMode::Default,
            saved_mode: FaceMode::Default,
        }
    }

    pub fn smile(&mut self) {
        self.mouth = MouthState::Smiling;
    }

    pub fn stop_smiling(&mut self) {
        self.mouth = MouthState::Neutral;
    }

    pub fn frown(&mut self) {
        self.mouth = MouthState::Frowning;
    }

    /// Set any mouth state, including the ones without a dedicated action.
    pub fn set_mouth(&mut self, mouth: MouthState) {
        self.mouth = mouth;
    }

    pub fn look_left(&mut self) {
        self.look(EyeDirection::Left);
    }

    pub fn look_right(&mut self) {
        self.look(EyeDirection::Right);
    }

    pub fn look_forward(&mut self) {
        self.look(EyeDirection::Forward);
    }

    fn look(&mut self, direction: EyeDirection) {
        self.left_eye = direction;
        self.right_eye = direction;
    }

    /// Close both eyelids. The mode is left alone.
    pub fn close_eyes(&mut self) {
        self.left_eyelid = EyelidState::Closed;
        self.right_eyelid = EyelidState::Closed;
    }

    /// Close both eyelids until the next settle.
    ///
    /// The current mode is saved unconditionally, so blinking again before a
    /// settle saves `Blinking` itself.
    pub fn blink(&mut self) {
        self.close_eyes();

        self.saved_mode = self.mode;
        self.mode = FaceMode::Blinking;
    }

    pub fn wink(&mut self) {
        self.right_eyelid = EyelidState::Closed;
    }

    pub fn stop_winking(&mut self) {
        self.right_eyelid = EyelidState::Open;
    }

    /// End a blink: reopen both eyelids and restore the saved mode.
    ///
    /// No-op unless the face is blinking.
    pub fn settle(&mut self) {
        if self.mode == FaceMode::Blinking {
            self.left_eyelid = EyelidState::Open;
            self.right_eyelid = EyelidState::Open;
            self.mode = self.saved_mode;
        }
    }

    /// Draw the face onto `display`.
    ///
    /// Only the face cells are written; the rest of the panel is never
    /// cleared here to avoid flicker.
    pub fn render<D: Display + ?Sized>(&self, display: &mut D) -> Result<(), DisplayError> {
        for (column, row) in LAYOUT.decorations {
            put(display, (column, row), DECORATION)?;
        }

        put(display, LAYOUT.left_eye, eye_cell(self.left_eyelid, self.left_eye))?;
        put(display, LAYOUT.right_eye, eye_cell(self.right_eyelid, self.right_eye))?;
        put(display, LAYOUT.mouth, mouth_glyph(self.mouth))?;

        Ok(())
    }

    pub fn left_eyelid(&self) -> EyelidState {
        self.left_eyelid
    }

    pub fn left_eye(&self) -> EyeDirection {
        self.left_eye
    }

    pub fn right_eyelid(&self) -> EyelidState {
        self.right_eyelid
    }

    pub fn right_eye(&self) -> EyeDirection {
        self.right_eye
    }

    pub fn mouth(&self) -> MouthState {
        self.mouth
    }

    pub fn mode(&self) -> FaceMode {
        self.mode
    }

    /// The mode a settle would restore, while blinking.
    pub fn saved_mode(&self) -> Option<FaceMode> {
        (self.mode == FaceMode::Blinking).then_some(self.saved_mode)
    }

    /// Whether the right eye is closed while the left one is open.
    pub fn is_winking(&self) -> bool {
        self.right_eyelid == EyelidState::Closed && self.left_eyelid == EyelidState::Open
    }
}

impl Default for Face {
    fn default() -> Self {
        Self::new()
    }
}

fn put<D: Display + ?Sized>(
    display: &mut D,
    (column, row): (u8, u8),
    glyph: char,
) -> Result<(), DisplayError> {
    let mut buf = [0u8; 4];
    display.set_cursor(column, row)?;
    display.write(glyph.encode_utf8(&mut buf))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animator::{IdleAction, RandomSampler, Sampler};
    use crate::display::MemoryDisplay;

    fn rendered(face: &Face) -> MemoryDisplay {
        let mut display = MemoryDisplay::new();
        face.render(&mut display).unwrap();
        display
    }

    #[test]
    fn test_new_face_renders_resting_expression() {
        let display = rendered(&Face::new());

        assert_eq!(display.char_at(5, 0), Some('o'));
        assert_eq!(display.char_at(9, 0), Some('o'));
        assert_eq!(display.char_at(7, 1), Some('-'));
        assert_eq!(display.char_at(3, 0), Some('$'));
        assert_eq!(display.char_at(11, 0), Some('$'));
    }

    #[test]
    fn test_blink_then_settle_restores_mode() {
        let mut face = Face::new();

        face.blink();
        assert_eq!(face.mode(), FaceMode::Blinking);
        assert_eq!(face.saved_mode(), Some(FaceMode::Default));

        let display = rendered(&face);
        assert_eq!(display.char_at(5, 0), Some('-'));
        assert_eq!(display.char_at(9, 0), Some('-'));

        face.settle();
        assert_eq!(face.mode(), FaceMode::Default);
        assert_eq!(face.saved_mode(), None);

        let display = rendered(&face);
        assert_eq!(display.char_at(5, 0), Some('o'));
        assert_eq!(display.char_at(9, 0), Some('o'));
    }

    #[test]
    fn test_double_blink_saves_blinking() {
        let mut face = Face::new();

        face.blink();
        face.blink();
        face.settle();

        assert_eq!(face.mode(), FaceMode::Blinking);
        assert_eq!(face.left_eyelid(), EyelidState::Open);
        assert_eq!(face.right_eyelid(), EyelidState::Open);
    }

    #[test]
    fn test_settle_is_noop_when_not_blinking() {
        let mut face = Face::new();
        face.close_eyes();
        face.settle();

        assert_eq!(face.left_eyelid(), EyelidState::Closed);
        assert_eq!(face.right_eyelid(), EyelidState::Closed);
        assert_eq!(face.mode(), FaceMode::Default);
    }

    #[test]
    fn test_close_eyes_keeps_mode() {
        let mut face = Face::new();
        face.close_eyes();
        assert_eq!(face.mode(), FaceMode::Default);

        face.blink();
        face.close_eyes();
        assert_eq!(face.mode(), FaceMode::Blinking);
    }

    #[test]
    fn test_wink_only_touches_right_eyelid() {
        let mut face = Face::new();
        face.look_left();
        face.wink();

        assert_eq!(face.right_eyelid(), EyelidState::Closed);
        assert_eq!(face.left_eyelid(), EyelidState::Open);
        assert_eq!(face.left_eye(), EyeDirection::Left);
        assert_eq!(face.right_eye(), EyeDirection::Left);
        assert_eq!(face.mode(), FaceMode::Default);
        assert!(face.is_winking());
    }

    #[test]
    fn test_wink_and_stop_winking_render() {
        let mut face = Face::new();
        face.look_right();

        face.wink();
        let display = rendered(&face);
        assert_eq!(display.char_at(5, 0), Some('>'));
        assert_eq!(display.char_at(9, 0), Some('-'));

        face.stop_winking();
        let display = rendered(&face);
        assert_eq!(display.char_at(9, 0), Some('>'));
    }

    #[test]
    fn test_look_sets_both_eyes() {
        let mut face = Face::new();

        face.look_left();
        assert_eq!((face.left_eye(), face.right_eye()), (EyeDirection::Left, EyeDirection::Left));

        face.look_right();
        assert_eq!(
            (face.left_eye(), face.right_eye()),
            (EyeDirection::Right, EyeDirection::Right)
        );

        face.look_forward();
        assert_eq!(
            (face.left_eye(), face.right_eye()),
            (EyeDirection::Forward, EyeDirection::Forward)
        );
    }

    #[test]
    fn test_closed_eyelid_renders_regardless_of_direction() {
        let mut face = Face::new();
        face.look_left();
        face.close_eyes();

        let display = rendered(&face);
        assert_eq!(display.char_at(5, 0), Some('-'));
        assert_eq!(face.left_eye(), EyeDirection::Left);
    }

    #[test]
    fn test_mouth_actions() {
        let mut face = Face::new();

        face.smile();
        assert_eq!(face.mouth(), MouthState::Smiling);
        assert_eq!(rendered(&face).char_at(7, 1), Some('v'));

        face.frown();
        assert_eq!(rendered(&face).char_at(7, 1), Some('_'));

        face.set_mouth(MouthState::Agape);
        assert_eq!(rendered(&face).char_at(7, 1), Some('O'));

        face.set_mouth(MouthState::Small);
        assert_eq!(rendered(&face).char_at(7, 1), Some('.'));

        face.stop_smiling();
        assert_eq!(face.mouth(), MouthState::Neutral);
    }

    #[test]
    fn test_render_does_not_mutate() {
        let mut sampler = RandomSampler::with_seed(7);
        let mut face = Face::new();

        for step in 0..500 {
            let pick = (sampler.sample() * IdleAction::COUNT as f64) as usize;
            IdleAction::ALL[pick.min(IdleAction::COUNT - 1)].apply(&mut face);
            if step % 3 == 0 {
                face.settle();
            }

            let before = face.clone();
            rendered(&face);
            assert_eq!(face, before, "render changed the face at step {step}");
        }
    }
}
