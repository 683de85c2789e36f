mod content;
mod core;
mod movement;

use avian2d::prelude::*;
use bevy::prelude::*;

/// Downward acceleration in world units per second squared.
const GRAVITY: f32 = 30.0;

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Ledge Runner".to_string(),
                resolution: (1280, 720).into(),
                resizable: true,
                ..default()
            }),
            ..default()
        }))
        .add_plugins(PhysicsPlugins::default())
        .insert_resource(Gravity(Vec2::NEG_Y * GRAVITY))
        .add_plugins((
            content::ContentPlugin,
            core::CorePlugin,
            movement::MovementPlugin,
        ))
        .run();
}
