//! Movement domain: player spawn and startup verification.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::core::PlayerStart;
use crate::movement::{ActiveContacts, GameLayer, MovementState, Player};

/// Player collider size in world units.
pub const PLAYER_SIZE: Vec2 = Vec2::new(0.6, 1.0);

/// A required collaborator of the movement controller is missing.
#[derive(Debug)]
pub struct MovementSetupError {
    pub entity: Option<Entity>,
    pub missing: &'static str,
}

impl std::fmt::Display for MovementSetupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.entity {
            Some(entity) => write!(f, "Player {:?} is missing {}", entity, self.missing),
            None => write!(f, "No entity tagged Player ({})", self.missing),
        }
    }
}

impl std::error::Error for MovementSetupError {}

pub(crate) fn spawn_player(mut commands: Commands, start: Res<PlayerStart>) {
    info!("Spawning player at {:?}", start.0);

    commands.spawn((
        // Identity & Movement
        (Player, MovementState::default(), ActiveContacts::default()),
        // Rendering
        Sprite {
            color: Color::srgb(0.9, 0.9, 0.9),
            custom_size: Some(PLAYER_SIZE),
            ..default()
        },
        Transform::from_xyz(start.0.x, start.0.y, 0.0),
        // Physics
        (
            RigidBody::Dynamic,
            Collider::rectangle(PLAYER_SIZE.x, PLAYER_SIZE.y),
            LockedAxes::ROTATION_LOCKED,
            LinearVelocity::default(),
            Friction::new(0.0),
            CollisionEventsEnabled,
            CollisionLayers::new(
                GameLayer::Player,
                [
                    GameLayer::Ground,
                    GameLayer::Wall,
                    GameLayer::Hazard,
                    GameLayer::Sensor,
                ],
            ),
        ),
    ));
}

/// Fails startup when the player or its physics body is missing.
pub(crate) fn verify_player_setup(
    player_query: Query<
        (
            Entity,
            Has<RigidBody>,
            Has<Collider>,
            Has<LinearVelocity>,
            Has<MovementState>,
        ),
        With<Player>,
    >,
) -> Result {
    check_player_setup(player_query.iter())?;
    info!("Player movement setup verified");
    Ok(())
}

/// Checks each `(entity, has_body, has_collider, has_velocity, has_state)` row.
pub fn check_player_setup(
    players: impl IntoIterator<Item = (Entity, bool, bool, bool, bool)>,
) -> std::result::Result<(), MovementSetupError> {
    let mut found = false;

    for (entity, has_body, has_collider, has_velocity, has_state) in players {
        found = true;
        let missing = if !has_body {
            Some("RigidBody")
        } else if !has_collider {
            Some("Collider")
        } else if !has_velocity {
            Some("LinearVelocity")
        } else if !has_state {
            Some("MovementState")
        } else {
            None
        };

        if let Some(missing) = missing {
            error!("Player {:?} cannot move: missing {}", entity, missing);
            return Err(MovementSetupError {
                entity: Some(entity),
                missing,
            });
        }
    }

    if !found {
        error!("No player entity found at startup");
        return Err(MovementSetupError {
            entity: None,
            missing: "player entity",
        });
    }

    Ok(())
}
