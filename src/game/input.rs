//! Input Capture
//!
//! Maps host key events to directions and records key presses per frame
//! so a run can be replayed.

use serde::{Serialize, Deserialize};

/// A single directional key press.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// One tile left
    Left,
    /// One tile right
    Right,
    /// One tile up, toward the far shore
    Up,
    /// One tile down
    Down,
    /// Anything that is not an arrow key
    #[default]
    None,
}

impl Direction {
    /// Key code of the left arrow key
    pub const KEY_LEFT: u32 = 37;
    /// Key code of the up arrow key
    pub const KEY_UP: u32 = 38;
    /// Key code of the right arrow key
    pub const KEY_RIGHT: u32 = 39;
    /// Key code of the down arrow key
    pub const KEY_DOWN: u32 = 40;

    /// Map a browser key code to a direction. Returns `None` for other keys.
    pub fn from_key_code(code: u32) -> Option<Direction> {
        match code {
            Self::KEY_LEFT => Some(Direction::Left),
            Self::KEY_UP => Some(Direction::Up),
            Self::KEY_RIGHT => Some(Direction::Right),
            Self::KEY_DOWN => Some(Direction::Down),
            _ => None,
        }
    }

}

// =============================================================================
// INPUT LOG
// =============================================================================

/// A key press delivered on a given frame.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputEvent {
    /// Frame the press is applied on
    pub frame: u32,
    /// Direction pressed
    pub direction: Direction,
}

/// Recorded key presses, ordered by frame.
///
/// Used for:
/// - Scripted headless runs
/// - Replay verification
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct InputLog {
    events: Vec<InputEvent>,
}

impl InputLog {
    /// Create an empty log.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a log from events in any order. Presses on the same frame keep
    /// their relative order.
    pub fn from_events(mut events: Vec<InputEvent>) -> Self {
        events.sort_by_key(|e| e.frame);
        Self { events }
    }

    /// Record a press. Presses must be recorded in frame order; a press for
    /// an earlier frame than the last one is moved up to that frame.
    pub fn record(&mut self, frame: u32, direction: Direction) {
        let frame = self.events.last().map_or(frame, |last| frame.max(last.frame));
        self.events.push(InputEvent { frame, direction });
    }

    /// Directions pressed on `frame`, in press order.
    pub fn inputs_at(&self, frame: u32) -> impl Iterator<Item = Direction> + '_ {
        let start = self.events.partition_point(|e| e.frame < frame);
        let end = self.events.partition_point(|e| e.frame <= frame);
        self.events[start..end].iter().map(|e| e.direction)
    }

    /// Number of recorded presses.
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Whether nothing has been recorded.
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    /// Last frame with a recorded press.
    pub fn last_frame(&self) -> Option<u32> {
        self.events.last().map(|e| e.frame)
    }
}
