//! Character Capability and Render Contract
//!
//! Every moving thing on the board has a position and a sprite, and can
//! draw itself. Drawing goes through [`Canvas`], which the host engine
//! implements on top of its resource cache.

use serde::{Serialize, Deserialize};
use crate::core::vec2::Vec2;

/// Visual asset of a character, resolved by the host's resource cache.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sprite {
    /// Bug enemy
    EnemyBug,
    /// Blue gem (lowest value)
    GemBlue,
    /// Green gem
    GemGreen,
    /// Orange gem (highest value)
    GemOrange,
    /// Life item
    Heart,
    /// Player character
    CharBoy,
}

impl Sprite {
    /// Resource key for this sprite.
    pub fn asset_id(self) -> &'static str {
        match self {
            Sprite::EnemyBug => "images/enemy-bug.png",
            Sprite::GemBlue => "images/Gem Blue.png",
            Sprite::GemGreen => "images/Gem Green.png",
            Sprite::GemOrange => "images/Gem Orange.png",
            Sprite::Heart => "images/Heart.png",
            Sprite::CharBoy => "images/char-boy.png",
        }
    }
}

/// Drawing surface provided by the host engine.
pub trait Canvas {
    /// Draw the image registered under `asset_id` with its top-left at `at`.
    fn draw_image(&mut self, asset_id: &str, at: Vec2);
}

/// Shared capability of enemies, collectables and the player.
pub trait Character {
    /// Current board position.
    fn position(&self) -> Vec2;

    /// Visual asset. Fixed for the lifetime of the character.
    fn sprite(&self) -> Sprite;

    /// Draw the character. Never mutates game state.
    fn render(&self, canvas: &mut dyn Canvas) {
        canvas.draw_image(self.sprite().asset_id(), self.position());
    }
}

/// One recorded `draw_image` call.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DrawCall {
    /// Asset drawn
    pub asset_id: String,
    /// Top-left corner
    pub at: Vec2,
}

/// Canvas that records draw calls instead of drawing.
///
/// Used by the headless driver and by tests.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    calls: Vec<DrawCall>,
}

impl RecordingCanvas {
    /// Create an empty canvas.
    pub fn new() -> Self {
        Self::default()
    }

    /// Take recorded calls, leaving the canvas empty.
    pub fn take_calls(&mut self) -> Vec<DrawCall> {
        std::mem::take(&mut self.calls)
    }
}

impl Canvas for RecordingCanvas {
    fn draw_image(&mut self, asset_id: &str, at: Vec2) {
        self.calls.push(DrawCall {
            asset_id: asset_id.to_string(),
            at,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Marker(Vec2);

    impl Character for Marker {
        fn position(&self) -> Vec2 {
            self.0
        }
        fn sprite(&self) -> Sprite {
            Sprite::Heart
        }
    }

    #[test]
    fn test_render_draws_sprite_at_position() {
        let mut canvas = RecordingCanvas::new();
        Marker(Vec2::new(12.0, 60.0)).render(&mut canvas);

        assert_eq!(
            canvas.take_calls(),
            vec![DrawCall { asset_id: "images/Heart.png".into(), at: Vec2::new(12.0, 60.0) }]
        );
    }

    #[test]
    fn test_render_is_idempotent() {
        let marker = Marker(Vec2::new(1.0, 2.0));
        let mut canvas = RecordingCanvas::new();
        marker.render(&mut canvas);
        let first = canvas.take_calls();
        marker.render(&mut canvas);
        assert_eq!(first, canvas.take_calls());
    }
}
