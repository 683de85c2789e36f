//! Core domain: outcome handling, goal trigger and level reset.

use avian2d::prelude::*;
use bevy::ecs::message::{MessageReader, MessageWriter};
use bevy::prelude::*;

use crate::core::components::Goal;
use crate::core::events::{GoalReachedEvent, PlayerDefeatedEvent, ResetRequestedEvent};
use crate::core::resources::{PlayerStart, SessionStats};
use crate::core::state::GameState;
use crate::movement::{ActiveContacts, MovementState, Player};

/// Orthographic scale: world units are roughly meters, 48 px each.
const PIXELS_PER_UNIT: f32 = 48.0;

pub(crate) fn setup_camera(mut commands: Commands) {
    commands.spawn((
        Camera2d,
        Projection::Orthographic(OrthographicProjection {
            scale: 1.0 / PIXELS_PER_UNIT,
            ..OrthographicProjection::default_2d()
        }),
    ));
}

pub(crate) fn read_reset_key(
    keyboard: Res<ButtonInput<KeyCode>>,
    mut reset_events: MessageWriter<ResetRequestedEvent>,
) {
    if keyboard.just_pressed(KeyCode::KeyR) {
        reset_events.write(ResetRequestedEvent);
    }
}

/// Emits a goal event the first time the player touches an enabled goal, then disables it.
pub(crate) fn detect_goal_contact(
    mut commands: Commands,
    mut collision_events: MessageReader<CollisionStart>,
    goal_query: Query<Entity, (With<Goal>, Without<ColliderDisabled>)>,
    player_query: Query<Entity, With<Player>>,
    mut goal_events: MessageWriter<GoalReachedEvent>,
) {
    for event in collision_events.read() {
        let (goal, other) = if goal_query.get(event.collider1).is_ok() {
            (event.collider1, event.collider2)
        } else if goal_query.get(event.collider2).is_ok() {
            (event.collider2, event.collider1)
        } else {
            continue;
        };

        if player_query.get(other).is_err() {
            continue;
        }

        info!("[GAME] Player reached goal {:?}", goal);
        goal_events.write(GoalReachedEvent { goal });
        commands.entity(goal).insert(ColliderDisabled);
    }
}

/// Resolves win/loss signals. Signals arriving once the game is over are ignored, so the
/// first outcome of an attempt sticks.
pub(crate) fn handle_outcomes(
    mut defeated_events: MessageReader<PlayerDefeatedEvent>,
    mut goal_events: MessageReader<GoalReachedEvent>,
    state: Res<State<GameState>>,
    mut next_state: ResMut<NextState<GameState>>,
    mut stats: ResMut<SessionStats>,
) {
    let mut over = state.get().is_over();

    for event in defeated_events.read() {
        if over {
            debug!("[GAME] Ignoring defeat by {:?}, game already over", event.hazard);
            continue;
        }
        over = true;
        stats.record_loss();
        next_state.set(GameState::Lost);
        info!(
            "[GAME] Game loss condition met (hazard {:?}), losses={}",
            event.hazard, stats.losses
        );
    }

    for event in goal_events.read() {
        if over {
            debug!("[GAME] Ignoring goal {:?}, game already over", event.goal);
            continue;
        }
        over = true;
        stats.record_win();
        next_state.set(GameState::Won);
        info!("[GAME] Game win condition met, wins={}", stats.wins);
    }
}

/// Respawns the player at [`PlayerStart`] with fresh movement state and re-arms goals.
pub(crate) fn reset_level(
    mut commands: Commands,
    mut reset_events: MessageReader<ResetRequestedEvent>,
    start: Res<PlayerStart>,
    mut next_state: ResMut<NextState<GameState>>,
    mut stats: ResMut<SessionStats>,
    mut player_query: Query<
        (
            &mut Transform,
            &mut LinearVelocity,
            &mut MovementState,
            &mut ActiveContacts,
        ),
        With<Player>,
    >,
    disabled_goals: Query<Entity, (With<Goal>, With<ColliderDisabled>)>,
) {
    if reset_events.read().count() == 0 {
        return;
    }

    for (mut transform, mut velocity, mut state, mut contacts) in &mut player_query {
        transform.translation.x = start.0.x;
        transform.translation.y = start.0.y;
        velocity.0 = Vec2::ZERO;
        state.reset();
        contacts.clear();
    }

    for goal in &disabled_goals {
        commands.entity(goal).remove::<ColliderDisabled>();
    }

    stats.record_attempt();
    next_state.set(GameState::Playing);
    info!("[GAME] Game reset, attempt {}", stats.attempts);
}
