//! Movement domain: the per-tick movement state machine.
//!
//! Everything here is plain data in, plain data out. The Bevy systems in
//! `systems::movement` hand in the input snapshot, tuning, fixed delta and the
//! rigid body's velocity, and write the result back.

use bevy::prelude::*;

use crate::movement::{
    APEX_VELOCITY_THRESHOLD, MovementInput, MovementState, MovementTimers, MovementTuning, WallSide,
};

/// What happened during a single fixed tick, used for logging.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TickReport {
    pub jumped: bool,
    pub wall_jumped: bool,
    pub entered_apex: bool,
    pub release_cut: bool,
}

impl MovementState {
    /// Advance one fixed tick: apply the sampled input, then run the velocity rules in order.
    /// Every timer decays by `dt`, the fixed delta.
    pub fn fixed_tick(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        dt: f32,
        velocity: &mut Vec2,
    ) -> TickReport {
        let dt = if dt.is_finite() { dt.max(0.0) } else { 0.0 };
        let mut report = TickReport::default();

        report.wall_jumped = self.apply_input(input, tuning, velocity);

        // Jump buffer, consumed by at most one jump
        let buffered = input.jump_just_pressed || self.timers.jump_buffer > 0.0;
        MovementTimers::decay(&mut self.timers.jump_buffer, dt);
        if buffered && (self.is_grounded || self.timers.coyote > 0.0) {
            self.jump(tuning, velocity);
            self.timers.jump_buffer = 0.0;
            report.jumped = true;
        }
        MovementTimers::decay(&mut self.timers.coyote, dt);

        // Horizontal base velocity, rewritten every tick. A wall jump freezes input and holds
        // its push speed instead.
        if self.timers.wall_jump_move_pause > 0.0 {
            self.is_moving_left = false;
            self.is_moving_right = false;
            MovementTimers::decay(&mut self.timers.wall_jump_move_pause, dt);
            velocity.x = self.wall_jump_heading.sign() * tuning.wall_jump_speed;
        } else {
            velocity.x = f32::from(input.horizontal()) * tuning.move_speed;
        }

        // Apex hang-time bonus
        let was_at_apex = self.is_at_apex_point;
        self.is_at_apex_point = !self.is_grounded && velocity.y.abs() <= APEX_VELOCITY_THRESHOLD;
        if self.is_at_apex_point {
            self.timers.apex = tuning.apex_time;
            report.entered_apex = !was_at_apex;
        }
        if self.timers.apex > 0.0 {
            MovementTimers::decay(&mut self.timers.apex, dt);
            velocity.x *= tuning.apex_speed_bonus;
        }

        // Jump-release cut, once per jump
        if !self.is_jump_released && !self.is_grounded && !input.jump_held {
            velocity.y -= tuning.jump_release_force * dt;
            self.is_jump_released = true;
            report.release_cut = true;
        }

        // Wall slide. Grounded always wins.
        if self.is_grounded {
            self.is_wall_sliding = false;
        }
        if self.is_wall_sliding && !input.down_held {
            MovementTimers::decay(&mut self.timers.wall_jump_delay, dt);
            velocity.y += tuning.wall_slide_bonus * dt;
        }

        // Wall-jump sustain
        if !self.is_grounded && self.timers.wall_jump > 0.0 {
            MovementTimers::decay(&mut self.timers.wall_jump, dt);
            velocity.x += self.wall_jump_heading.sign() * tuning.wall_jump_speed * dt;
        }

        report
    }

    /// Latch movement intent and jump presses from the snapshot. Returns true if a wall jump
    /// was triggered.
    fn apply_input(
        &mut self,
        input: &MovementInput,
        tuning: &MovementTuning,
        velocity: &mut Vec2,
    ) -> bool {
        self.is_moving_left = input.moving_left();
        self.is_moving_right = input.moving_right();

        if input.jump_just_pressed {
            self.timers.jump_buffer = tuning.jump_buffer_time;
            self.is_jump_released = false;
        }

        if self.wants_wall_jump(input) {
            self.wall_jump(tuning, velocity);
            self.timers.wall_jump_move_pause = tuning.wall_jump_move_pause_time;
            return true;
        }

        false
    }

    /// Holding away from the slid-on wall jumps off it, unless a wall jump is still sustaining.
    fn wants_wall_jump(&self, input: &MovementInput) -> bool {
        if !self.is_wall_sliding || self.timers.wall_jump > 0.0 {
            return false;
        }

        match self.wall_slide_direction {
            WallSide::Left => input.right_held,
            WallSide::Right => input.left_held,
        }
    }

    pub fn jump(&mut self, tuning: &MovementTuning, velocity: &mut Vec2) {
        velocity.y = tuning.jump_force;
        self.has_jumped = true;
    }

    pub fn wall_jump(&mut self, tuning: &MovementTuning, velocity: &mut Vec2) {
        let heading = self.wall_slide_direction.opposite();
        velocity.x = heading.sign() * tuning.wall_jump_speed;
        velocity.y = tuning.wall_jump_y_force;
        self.wall_jump_heading = heading;
        self.timers.wall_jump = tuning.wall_jump_time;
        self.has_jumped = true;
    }

    pub fn reset_coyote_timer(&mut self, tuning: &MovementTuning) {
        self.timers.coyote = tuning.coyote_time;
    }

    pub fn reset_wall_jump_delay_timer(&mut self, tuning: &MovementTuning) {
        self.timers.wall_jump_delay = tuning.wall_jump_delay;
    }

    /// Back to spawn defaults: every timer zeroed, every flag cleared.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// Move a body straight up by `amount`, used by edge-assist.
pub fn push_upwards(transform: &mut Transform, amount: f32) {
    transform.translation.y += amount;
}
