//! Core domain: events for level outcome and reset.

use bevy::ecs::message::Message;
use bevy::prelude::Entity;

/// Event fired when the player touches a hazard
#[derive(Debug)]
pub struct PlayerDefeatedEvent {
    pub hazard: Entity,
}

impl Message for PlayerDefeatedEvent {}

/// Event fired when the player enters the goal zone
#[derive(Debug)]
pub struct GoalReachedEvent {
    pub goal: Entity,
}

impl Message for GoalReachedEvent {}

/// Event requesting a full level reset and player respawn
#[derive(Debug, Default)]
pub struct ResetRequestedEvent;

impl Message for ResetRequestedEvent {}
