//! Core domain: shared resources for the level.

use bevy::prelude::*;

/// Where the player spawns and respawns.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerStart(pub Vec2);

impl Default for PlayerStart {
    fn default() -> Self {
        Self(Vec2::new(-6.0, -2.0))
    }
}

/// Outcome counters for the current session, logged on each outcome.
#[derive(Resource, Debug, Default)]
pub struct SessionStats {
    pub attempts: u32,
    pub wins: u32,
    pub losses: u32,
}

impl SessionStats {
    pub fn record_win(&mut self) {
        self.wins += 1;
    }

    pub fn record_loss(&mut self) {
        self.losses += 1;
    }

    pub fn record_attempt(&mut self) {
        self.attempts += 1;
    }
}
