//! Movement domain: debug-only test level and state inspection.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::Goal;
use crate::movement::{
    ActiveContacts, EdgeAssistExempt, GameLayer, Ground, Hazard, MovementState, Player, Wall,
};

fn block(color: Color, center: Vec2, size: Vec2) -> impl Bundle {
    (
        Sprite {
            color,
            custom_size: Some(size),
            ..default()
        },
        Transform::from_xyz(center.x, center.y, 0.0),
        RigidBody::Static,
        Collider::rectangle(size.x, size.y),
    )
}

pub(crate) fn spawn_test_level(mut commands: Commands) {
    let wall_color = Color::srgb(0.3, 0.3, 0.4);
    let ground_color = Color::srgb(0.4, 0.5, 0.4);
    let platform_color = Color::srgb(0.5, 0.4, 0.3);
    let hazard_color = Color::srgb(0.75, 0.2, 0.2);
    let goal_color = Color::srgba(0.9, 0.8, 0.2, 0.6);

    let ground_layers = CollisionLayers::new(GameLayer::Ground, [GameLayer::Player]);
    let wall_layers = CollisionLayers::new(GameLayer::Wall, [GameLayer::Player]);

    // Floor
    commands.spawn((
        Ground,
        block(ground_color, Vec2::new(0.0, -4.0), Vec2::new(24.0, 1.0)),
        ground_layers,
    ));

    // Low step, small enough for edge assist
    commands.spawn((
        Ground,
        block(platform_color, Vec2::new(-2.0, -3.3), Vec2::new(3.0, 0.4)),
        ground_layers,
    ));

    // Raised ledge that never edge-assists
    commands.spawn((
        Ground,
        EdgeAssistExempt,
        block(platform_color, Vec2::new(3.0, -1.5), Vec2::new(3.0, 0.5)),
        ground_layers,
    ));

    // Outer walls
    for x in [-12.5, 12.5] {
        commands.spawn((
            Wall,
            block(wall_color, Vec2::new(x, 2.0), Vec2::new(1.0, 12.0)),
            wall_layers,
        ));
    }

    // Wall-jump shaft
    for x in [7.0, 10.5] {
        commands.spawn((
            Wall,
            block(wall_color, Vec2::new(x, 0.5), Vec2::new(1.0, 7.0)),
            wall_layers,
        ));
    }

    // Hazard strip resting on the floor
    commands.spawn((
        Hazard,
        block(hazard_color, Vec2::new(0.5, -3.35), Vec2::new(1.5, 0.3)),
        CollisionLayers::new(GameLayer::Hazard, [GameLayer::Player]),
    ));

    // Goal above the shaft
    commands.spawn((
        Goal,
        Sprite {
            color: goal_color,
            custom_size: Some(Vec2::new(2.5, 1.0)),
            ..default()
        },
        Transform::from_xyz(8.75, 4.75, 0.0),
        RigidBody::Static,
        Collider::rectangle(2.5, 1.0),
        Sensor,
        CollisionLayers::new(GameLayer::Sensor, [GameLayer::Player]),
    ));

    info!("Spawned test level");
}

/// F3 dumps the player's movement state to the log.
pub(crate) fn log_movement_state(
    keyboard: Res<ButtonInput<KeyCode>>,
    query: Query<(&MovementState, &ActiveContacts, &LinearVelocity), With<Player>>,
) {
    if !keyboard.just_pressed(KeyCode::F3) {
        return;
    }

    for (state, contacts, velocity) in &query {
        info!(
            "[DEBUG] vel=({:.2}, {:.2}) grounded={} wall_sliding={} apex={} contacts={} timers={:?}",
            velocity.x,
            velocity.y,
            state.is_grounded,
            state.is_wall_sliding,
            state.is_at_apex_point,
            contacts.0.len(),
            state.timers
        );
    }
}
