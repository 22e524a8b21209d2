/// Card flip state for the front (stamps) and back (details) faces

use std::time::Duration;

pub const FLIP_DURATION: Duration = Duration::from_millis(800);

/// Rotation of the flip animation value when showing the back face
pub const BACK_ANGLE: f32 = 180.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CardFace {
    #[default]
    Front,
    Back,
}

/// Where the flip animation should run to after a toggle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlipAnimation {
    pub to_degrees: f32,
    pub duration: Duration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CardFlip {
    face: CardFace,
}

impl CardFlip {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn face(&self) -> CardFace {
        self.face
    }

    pub fn is_flipped(&self) -> bool {
        self.face == CardFace::Back
    }

    /// Switch faces and return the animation that shows the new one
    pub fn toggle(&mut self) -> FlipAnimation {
        let to_degrees = match self.face {
            CardFace::Front => BACK_ANGLE,
            CardFace::Back => 0.0,
        };
        self.face = match self.face {
            CardFace::Front => CardFace::Back,
            CardFace::Back => CardFace::Front,
        };
        FlipAnimation {
            to_degrees,
            duration: FLIP_DURATION,
        }
    }
}

/// Front face rotation for an animation value in 0..=180
pub fn front_rotation(value: f32) -> f32 {
    value.clamp(0.0, BACK_ANGLE)
}

/// Back face rotation for an animation value in 0..=180; offset half a turn
/// so the back is hidden while the front faces the viewer
pub fn back_rotation(value: f32) -> f32 {
    value.clamp(0.0, BACK_ANGLE) + BACK_ANGLE
}
