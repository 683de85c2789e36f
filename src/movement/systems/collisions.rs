//! Movement domain: contact tracking and ground/wall/hazard classification.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::PlayerDefeatedEvent;
use crate::movement::classifier::{Bounds, CollisionSample, ContactFrame};
use crate::movement::controller::push_upwards;
use crate::movement::{
    ActiveContacts, EdgeAssistExempt, Ground, Hazard, MovementState, MovementTuning, Player,
    SurfaceTag, Wall,
};

type SurfaceData = (
    Option<&'static ColliderAabb>,
    Has<Ground>,
    Has<Wall>,
    Has<Hazard>,
    Has<EdgeAssistExempt>,
);

fn surface_tag(surfaces: &Query<SurfaceData, Without<Player>>, entity: Entity) -> SurfaceTag {
    surfaces
        .get(entity)
        .map(|(_, ground, wall, hazard, _)| SurfaceTag::from_markers(ground, wall, hazard))
        .unwrap_or(SurfaceTag::Other)
}

fn aabb_bounds(aabb: &ColliderAabb) -> Bounds {
    Bounds::new(aabb.min, aabb.max)
}

/// Tracks contact begin/end, then re-classifies every active contact from current geometry.
/// Re-running the classification for an unchanged contact changes nothing, which is what
/// gives resting contacts their "stay" behaviour.
pub(crate) fn classify_contacts(
    mut collision_start_events: MessageReader<CollisionStart>,
    mut collision_end_events: MessageReader<CollisionEnd>,
    tuning: Res<MovementTuning>,
    surfaces: Query<SurfaceData, Without<Player>>,
    mut player_query: Query<
        (
            Entity,
            &ColliderAabb,
            &LinearVelocity,
            &mut Transform,
            &mut MovementState,
            &mut ActiveContacts,
        ),
        With<Player>,
    >,
    mut defeated_events: MessageWriter<PlayerDefeatedEvent>,
) {
    let Ok((player, player_aabb, velocity, mut transform, mut state, mut contacts)) =
        player_query.single_mut()
    else {
        // Consume events if no player
        for _ in collision_start_events.read() {}
        for _ in collision_end_events.read() {}
        return;
    };

    for event in collision_start_events.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };

        let tag = surface_tag(&surfaces, other);
        contacts.insert(other, tag);

        if tag == SurfaceTag::Hazard {
            debug!("[MOVEMENT] Hazard contact with {:?}", other);
            defeated_events.write(PlayerDefeatedEvent { hazard: other });
        }
    }

    for event in collision_end_events.read() {
        let other = if event.collider1 == player {
            event.collider2
        } else if event.collider2 == player {
            event.collider1
        } else {
            continue;
        };

        if let Some(tag) = contacts.remove(other) {
            state.end_contact(tag, &tuning);
        }
    }

    // A surface despawned mid-contact ends the contact with the tag it started with
    let vanished: Vec<Entity> = contacts
        .iter()
        .filter(|entity| surfaces.get(*entity).is_err())
        .collect();
    for entity in vanished {
        if let Some(tag) = contacts.remove(entity) {
            debug!("[MOVEMENT] Contact {:?} vanished ({:?})", entity, tag);
            state.end_contact(tag, &tuning);
        }
    }

    let character = aabb_bounds(player_aabb);
    let vertical_velocity = velocity.y;
    let mut frame = ContactFrame::default();

    for other in contacts.iter() {
        let Ok((Some(aabb), ground, wall, hazard, exempt)) = surfaces.get(other) else {
            continue;
        };

        let sample = CollisionSample::from_bounds(
            SurfaceTag::from_markers(ground, wall, hazard),
            &character,
            &aabb_bounds(aabb),
            exempt,
        );
        frame.record(
            &sample,
            vertical_velocity,
            state.wall_slide_direction,
            &tuning,
        );
    }

    let changes = state.apply_contact_frame(&frame, &tuning);

    if frame.edge_push > 0.0 {
        push_upwards(&mut transform, frame.edge_push);
        debug!("[MOVEMENT] Edge assist push of {}", frame.edge_push);
    }

    if changes.landed {
        debug!("[MOVEMENT] Landed");
    }
    if changes.left_ground {
        debug!("[MOVEMENT] Left ground after jump");
    }
    if changes.started_wall_slide {
        debug!(
            "[MOVEMENT] Wall slide started, wall on {:?}",
            state.wall_slide_direction
        );
    }
}
