//! Core domain: level markers owned by the game-state flow.

use bevy::prelude::*;

/// Sensor zone that wins the level on first player contact
#[derive(Component, Debug)]
pub struct Goal;
