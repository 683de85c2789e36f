//! Movement domain: platformer character controller plugin wiring and exports.

mod bootstrap;
mod classifier;
mod components;
mod controller;
#[cfg(feature = "dev-tools")]
mod dev;
mod resources;
mod systems;


pub use bootstrap::{MovementSetupError, PLAYER_SIZE, check_player_setup};
pub use classifier::{
    Bounds, CollisionSample, ContactChanges, ContactFrame, GroundContact, classify_ground,
    classify_wall, wall_side_from_offset,
};
pub use components::{
    ActiveContacts, EdgeAssistExempt, GameLayer, Ground, Hazard, MovementState, MovementTimers,
    Player, SurfaceTag, Wall, WallSide,
};
pub use controller::{TickReport, push_upwards};
pub use resources::{APEX_VELOCITY_THRESHOLD, MovementInput, MovementTuning, SIDE_GRAZE_GAP};

use bevy::prelude::*;

use crate::movement::bootstrap::{spawn_player, verify_player_setup};
use crate::movement::systems::{apply_movement, classify_contacts, read_input};

pub struct MovementPlugin;

impl Plugin for MovementPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<MovementTuning>()
            .init_resource::<MovementInput>()
            .add_systems(Startup, spawn_player)
            .add_systems(PostStartup, verify_player_setup)
            .add_systems(Update, read_input)
            .add_systems(FixedUpdate, (classify_contacts, apply_movement).chain());

        #[cfg(feature = "dev-tools")]
        {
            use crate::movement::dev::{log_movement_state, spawn_test_level};

            app.add_systems(Startup, spawn_test_level)
                .add_systems(Update, log_movement_state);
        }
    }
}
