//! Movement domain: tuning and input resources.

use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Vertical speed at or below which an airborne character counts as being at its apex.
pub const APEX_VELOCITY_THRESHOLD: f32 = 0.1;

/// Gap below which a ground contact is treated as a side graze rather than a landing.
pub const SIDE_GRAZE_GAP: f32 = -0.1;

/// Tunable movement constants. Speeds are in world units per second, forces applied
/// per tick (`jump_release_force`, `wall_slide_bonus`, wall-jump sustain) are scaled by
/// the fixed delta.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct MovementTuning {
    pub move_speed: f32,
    pub jump_force: f32,
    pub wall_jump_y_force: f32,
    pub jump_buffer_time: f32,
    pub jump_release_force: f32,
    pub coyote_time: f32,
    /// Horizontal multiplier applied while the apex timer runs.
    pub apex_speed_bonus: f32,
    pub apex_time: f32,
    pub wall_slide_bonus: f32,
    pub wall_jump_speed: f32,
    pub wall_jump_delay: f32,
    /// Sustain window during which wall-jump momentum keeps being added.
    pub wall_jump_time: f32,
    /// Horizontal input is ignored for this long after a wall jump.
    pub wall_jump_move_pause_time: f32,
    pub edge_y_threshold: f32,
    pub edge_detection_amount: f32,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            move_speed: 6.0,
            jump_force: 13.0,
            wall_jump_y_force: 11.0,
            jump_buffer_time: 0.12,
            jump_release_force: 240.0,
            coyote_time: 0.1,
            apex_speed_bonus: 1.3,
            apex_time: 0.2,
            wall_slide_bonus: 18.0,
            wall_jump_speed: 8.0,
            wall_jump_delay: 0.15,
            wall_jump_time: 0.2,
            wall_jump_move_pause_time: 0.12,
            edge_y_threshold: 0.25,
            edge_detection_amount: 0.3,
        }
    }
}

impl MovementTuning {
    /// Returns a copy where every negative or non-finite value degrades to "no effect".
    pub fn sanitized(&self) -> Self {
        fn non_negative(value: f32) -> f32 {
            if value.is_finite() { value.max(0.0) } else { 0.0 }
        }

        Self {
            move_speed: non_negative(self.move_speed),
            jump_force: non_negative(self.jump_force),
            wall_jump_y_force: non_negative(self.wall_jump_y_force),
            jump_buffer_time: non_negative(self.jump_buffer_time),
            jump_release_force: non_negative(self.jump_release_force),
            coyote_time: non_negative(self.coyote_time),
            // A multiplier's neutral value is 1, not 0
            apex_speed_bonus: if self.apex_speed_bonus.is_finite() && self.apex_speed_bonus >= 0.0
            {
                self.apex_speed_bonus
            } else {
                1.0
            },
            apex_time: non_negative(self.apex_time),
            wall_slide_bonus: non_negative(self.wall_slide_bonus),
            wall_jump_speed: non_negative(self.wall_jump_speed),
            wall_jump_delay: non_negative(self.wall_jump_delay),
            wall_jump_time: non_negative(self.wall_jump_time),
            wall_jump_move_pause_time: non_negative(self.wall_jump_move_pause_time),
            edge_y_threshold: non_negative(self.edge_y_threshold),
            edge_detection_amount: non_negative(self.edge_detection_amount),
        }
    }

    /// Name/value pairs for every tunable, used by validation and logging.
    pub fn fields(&self) -> [(&'static str, f32); 15] {
        [
            ("move_speed", self.move_speed),
            ("jump_force", self.jump_force),
            ("wall_jump_y_force", self.wall_jump_y_force),
            ("jump_buffer_time", self.jump_buffer_time),
            ("jump_release_force", self.jump_release_force),
            ("coyote_time", self.coyote_time),
            ("apex_speed_bonus", self.apex_speed_bonus),
            ("apex_time", self.apex_time),
            ("wall_slide_bonus", self.wall_slide_bonus),
            ("wall_jump_speed", self.wall_jump_speed),
            ("wall_jump_delay", self.wall_jump_delay),
            ("wall_jump_time", self.wall_jump_time),
            ("wall_jump_move_pause_time", self.wall_jump_move_pause_time),
            ("edge_y_threshold", self.edge_y_threshold),
            ("edge_detection_amount", self.edge_detection_amount),
        ]
    }
}

/// Input snapshot handed to the fixed tick.
///
/// Held keys are overwritten every frame. `jump_just_pressed` is latched until a fixed
/// tick consumes it, so a press is never lost when a frame runs zero fixed ticks.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct MovementInput {
    pub left_held: bool,
    pub right_held: bool,
    pub jump_held: bool,
    pub down_held: bool,
    pub jump_just_pressed: bool,
}

impl MovementInput {
    /// Left wins only when right is not also held.
    pub fn moving_left(&self) -> bool {
        self.left_held && !self.right_held
    }

    pub fn moving_right(&self) -> bool {
        !self.moving_left() && self.right_held
    }

    /// Signed horizontal intent: -1, 0 or +1.
    pub fn horizontal(&self) -> i8 {
        if self.moving_left() {
            -1
        } else if self.moving_right() {
            1
        } else {
            0
        }
    }
}
