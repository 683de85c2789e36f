//! Movement domain: turns raw contacts into grounded, wall and hazard flags.
//!
//! Classification is re-derived from current geometry on every call and merged
//! into a [`ContactFrame`]; nothing accumulates across calls, so running it for
//! the same contact several times in one tick gives the same answer.

use bevy::prelude::*;

use crate::movement::{MovementState, MovementTuning, SIDE_GRAZE_GAP, SurfaceTag, WallSide};

/// Axis-aligned bounds of a collider.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Bounds {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn center(&self) -> Vec2 {
        (self.min + self.max) * 0.5
    }
}

/// One contact, as seen from the character.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CollisionSample {
    pub tag: SurfaceTag,
    /// Character's lower bound minus the surface's upper bound.
    pub y_gap: f32,
    /// Character's center x minus the surface's center x.
    pub x_gap: f32,
    pub edge_assist_exempt: bool,
}

impl CollisionSample {
    pub fn from_bounds(
        tag: SurfaceTag,
        character: &Bounds,
        surface: &Bounds,
        edge_assist_exempt: bool,
    ) -> Self {
        Self {
            tag,
            y_gap: character.min.y - surface.max.y,
            x_gap: character.center().x - surface.center().x,
            edge_assist_exempt,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GroundContact {
    /// Resting on top of the surface.
    Landed,
    /// On top of the surface but still moving up.
    Rising,
    /// Grazing a ledge corner: nudge the character up by this much.
    EdgeAssist(f32),
    /// Side contact, no effect.
    SideGraze,
}

/// Classify a Ground-tagged contact. Returns `None` for any other tag.
pub fn classify_ground(
    sample: &CollisionSample,
    vertical_velocity: f32,
    tuning: &MovementTuning,
) -> Option<GroundContact> {
    if sample.tag != SurfaceTag::Ground {
        return None;
    }

    if sample.y_gap < SIDE_GRAZE_GAP {
        if !sample.edge_assist_exempt && sample.y_gap.abs() <= tuning.edge_y_threshold {
            return Some(GroundContact::EdgeAssist(tuning.edge_detection_amount));
        }
        return Some(GroundContact::SideGraze);
    }

    if vertical_velocity > 0.0 {
        return Some(GroundContact::Rising);
    }

    Some(GroundContact::Landed)
}

/// Classify a Wall-tagged contact. Sliding needs upward motion; a flat press does nothing.
pub fn classify_wall(
    sample: &CollisionSample,
    vertical_velocity: f32,
    previous: WallSide,
) -> Option<WallSide> {
    if sample.tag != SurfaceTag::Wall || vertical_velocity <= 0.0 {
        return None;
    }
    Some(wall_side_from_offset(sample.x_gap, previous))
}

/// Which side the wall is on, given `character_x - wall_x`.
/// Coinciding centers keep the previous side.
pub fn wall_side_from_offset(x_gap: f32, previous: WallSide) -> WallSide {
    if x_gap > 0.0 {
        WallSide::Left
    } else if x_gap < 0.0 {
        WallSide::Right
    } else {
        previous
    }
}

/// Merged classification of every contact seen this tick.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct ContactFrame {
    pub landed: bool,
    pub rising: bool,
    pub wall: Option<WallSide>,
    /// Largest edge-assist nudge requested. Applied once per tick.
    pub edge_push: f32,
}

impl ContactFrame {
    pub fn record(
        &mut self,
        sample: &CollisionSample,
        vertical_velocity: f32,
        previous_side: WallSide,
        tuning: &MovementTuning,
    ) {
        match classify_ground(sample, vertical_velocity, tuning) {
            Some(GroundContact::Landed) => self.landed = true,
            Some(GroundContact::Rising) => self.rising = true,
            Some(GroundContact::EdgeAssist(amount)) => self.edge_push = self.edge_push.max(amount),
            Some(GroundContact::SideGraze) | None => {}
        }

        if let Some(side) = classify_wall(sample, vertical_velocity, previous_side) {
            self.wall = Some(side);
        }
    }
}

/// Flag transitions caused by applying a [`ContactFrame`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContactChanges {
    pub landed: bool,
    pub left_ground: bool,
    pub started_wall_slide: bool,
}

impl MovementState {
    /// Apply this tick's classification. Only touches flags; velocity is never written here.
    pub fn apply_contact_frame(
        &mut self,
        frame: &ContactFrame,
        tuning: &MovementTuning,
    ) -> ContactChanges {
        let mut changes = ContactChanges::default();

        if frame.landed {
            changes.landed = !self.is_grounded;
            self.is_grounded = true;
            self.has_jumped = false;
        } else if frame.rising && self.has_jumped && self.is_grounded {
            // Launched off a surface we are still touching
            self.is_grounded = false;
            changes.left_ground = true;
        }

        if let Some(side) = frame.wall {
            changes.started_wall_slide = !self.is_wall_sliding;
            self.is_wall_sliding = true;
            self.wall_slide_direction = side;
            self.reset_wall_jump_delay_timer(tuning);
        }

        if self.is_grounded {
            self.is_wall_sliding = false;
            changes.started_wall_slide = false;
        }

        changes
    }

    /// A Ground-tagged contact ended: airborne, and the coyote window opens.
    pub fn end_ground_contact(&mut self, tuning: &MovementTuning) {
        self.is_grounded = false;
        self.reset_coyote_timer(tuning);
    }

    pub fn end_wall_contact(&mut self) {
        self.is_wall_sliding = false;
    }

    /// Route a finished contact to the handler for its surface.
    pub fn end_contact(&mut self, tag: SurfaceTag, tuning: &MovementTuning) {
        match tag {
            SurfaceTag::Ground => self.end_ground_contact(tuning),
            SurfaceTag::Wall => self.end_wall_contact(),
            SurfaceTag::Hazard | SurfaceTag::Other => {}
        }
    }
}
