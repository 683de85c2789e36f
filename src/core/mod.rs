//! Core domain: game state, outcome signals and level reset.

mod components;
mod events;
mod resources;
mod state;
mod systems;


pub use components::Goal;
pub use events::{GoalReachedEvent, PlayerDefeatedEvent, ResetRequestedEvent};
pub use resources::{PlayerStart, SessionStats};
pub use state::GameState;

use bevy::prelude::*;

use crate::core::systems::{
    detect_goal_contact, handle_outcomes, read_reset_key, reset_level, setup_camera,
};

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .init_resource::<PlayerStart>()
            .init_resource::<SessionStats>()
            .add_message::<PlayerDefeatedEvent>()
            .add_message::<GoalReachedEvent>()
            .add_message::<ResetRequestedEvent>()
            .add_systems(Startup, setup_camera)
            .add_systems(Update, read_reset_key)
            .add_systems(FixedUpdate, detect_goal_contact)
            .add_systems(Update, (handle_outcomes, reset_level).chain());
    }
}
