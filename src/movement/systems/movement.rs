//! Movement domain: fixed-tick velocity update.

use avian2d::prelude::*;
use bevy::prelude::*;

use crate::movement::{MovementInput, MovementState, MovementTuning, Player};

/// Runs the movement state machine once per fixed tick and writes the resulting velocity
/// to the rigid body. `Time` here is the fixed clock.
pub(crate) fn apply_movement(
    time: Res<Time>,
    tuning: Res<MovementTuning>,
    mut input: ResMut<MovementInput>,
    mut query: Query<(&mut MovementState, &mut LinearVelocity), With<Player>>,
) {
    let dt = time.delta_secs();
    let snapshot = *input;
    // The press has been delivered to this tick
    input.jump_just_pressed = false;

    for (mut state, mut velocity) in &mut query {
        let report = state.fixed_tick(&snapshot, &tuning, dt, &mut velocity.0);

        if report.jumped {
            debug!(
                "[MOVEMENT] Jump: grounded={}, coyote_left={:.3}",
                state.is_grounded, state.timers.coyote
            );
        }
        if report.wall_jumped {
            debug!(
                "[MOVEMENT] Wall jump off {:?} wall, heading {:?}",
                state.wall_slide_direction, state.wall_jump_heading
            );
        }
        if report.entered_apex {
            debug!("[MOVEMENT] Apex reached, bonus for {}s", tuning.apex_time);
        }
        if report.release_cut {
            debug!("[MOVEMENT] Jump release cut, vy={:.2}", velocity.y);
        }
    }
}
