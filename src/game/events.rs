//! Game Events
//!
//! Events generated during a tick, for logging, replay checks and tests.

use serde::{Serialize, Deserialize};

/// Which collectable an event refers to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemRef {
    /// Index into the world's gem list
    Gem(usize),
    /// The single life item
    LifeItem,
}

/// Why a collectable went back to its spawn point.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RespawnCause {
    /// A bug ran into it
    Enemy,
    /// It bumped into another collectable
    Peer,
    /// It drifted off the right edge
    OffBoard,
    /// The player picked it up
    Collected,
}

/// Game event data.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum GameEventData {
    /// A bug left the board and re-entered on the left
    EnemyWrapped {
        enemy: usize,
        new_speed: f32,
    },

    /// A collectable went back to spawn (bumped, drifted off or picked up)
    CollectableRespawned {
        item: ItemRef,
        cause: RespawnCause,
    },

    /// The player was hit by a bug
    PlayerHit {
        lives_left: u32,
    },

    /// The player picked up a gem
    GemCollected {
        points: u32,
        new_score: u32,
    },

    /// The player picked up the life item
    LifeCollected {
        lives: u32,
    },

    /// The player crossed to the far shore
    ShoreReached {
        new_score: u32,
    },

    /// The player lost the last life this tick
    OutOfLives {
        final_score: u32,
    },
}

/// A game event with its frame number.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GameEvent {
    /// Frame when event occurred
    pub frame: u32,

    /// Event data
    pub data: GameEventData,
}

impl GameEvent {
    /// Create a new event.
    pub fn new(frame: u32, data: GameEventData) -> Self {
        Self { frame, data }
    }

    /// Create enemy wrapped event.
    pub fn enemy_wrapped(frame: u32, enemy: usize, new_speed: f32) -> Self {
        Self::new(frame, GameEventData::EnemyWrapped { enemy, new_speed })
    }

    /// Create collectable respawned event.
    pub fn collectable_respawned(frame: u32, item: ItemRef, cause: RespawnCause) -> Self {
        Self::new(frame, GameEventData::CollectableRespawned { item, cause })
    }

    /// Create player hit event.
    pub fn player_hit(frame: u32, lives_left: u32) -> Self {
        Self::new(frame, GameEventData::PlayerHit { lives_left })
    }

    /// Create gem collected event.
    pub fn gem_collected(frame: u32, points: u32, new_score: u32) -> Self {
        Self::new(frame, GameEventData::GemCollected { points, new_score })
    }

    /// Create life collected event.
    pub fn life_collected(frame: u32, lives: u32) -> Self {
        Self::new(frame, GameEventData::LifeCollected { lives })
    }

    /// Create shore reached event.
    pub fn shore_reached(frame: u32, new_score: u32) -> Self {
        Self::new(frame, GameEventData::ShoreReached { new_score })
    }

    /// Create out of lives event.
    pub fn out_of_lives(frame: u32, final_score: u32) -> Self {
        Self::new(frame, GameEventData::OutOfLives { final_score })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_json_shape() {
        let event = GameEvent::gem_collected(42, 20, 31);
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["frame"], 42);
        assert_eq!(json["data"]["GemCollected"]["points"], 20);
        assert_eq!(json["data"]["GemCollected"]["new_score"], 31);
    }
}
