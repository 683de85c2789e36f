//! Movement domain: components and physics layers for locomotion.

use avian2d::prelude::*;
use bevy::prelude::*;

/// Physics layers for collision filtering
#[derive(PhysicsLayer, Clone, Copy, Debug, Default)]
pub enum GameLayer {
    #[default]
    Default,
    /// Ground surfaces (floors, platforms)
    Ground,
    /// Wall surfaces
    Wall,
    /// Player character
    Player,
    /// Surfaces that defeat the player on contact
    Hazard,
    /// Sensors (goal zone) - should not block movement
    Sensor,
}

#[derive(Component, Debug)]
pub struct Player;

/// Marker for ground colliders
#[derive(Component, Debug)]
pub struct Ground;

/// Marker for wall colliders
#[derive(Component, Debug)]
pub struct Wall;

/// Marker for colliders that defeat the player
#[derive(Component, Debug)]
pub struct Hazard;

/// Ground surfaces carrying this never trigger the edge-assist nudge
#[derive(Component, Debug)]
pub struct EdgeAssistExempt;

/// Semantic tag of a contacted surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceTag {
    Ground,
    Wall,
    Hazard,
    Other,
}

impl SurfaceTag {
    /// Derive the tag from marker presence. A hazard outranks walls and ground.
    pub fn from_markers(ground: bool, wall: bool, hazard: bool) -> Self {
        if hazard {
            SurfaceTag::Hazard
        } else if wall {
            SurfaceTag::Wall
        } else if ground {
            SurfaceTag::Ground
        } else {
            SurfaceTag::Other
        }
    }
}

/// Side of the character a slid-on wall is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum WallSide {
    Left,
    #[default]
    Right,
}

impl WallSide {
    /// -1 for a wall on the left, +1 for a wall on the right.
    pub fn sign(self) -> f32 {
        match self {
            WallSide::Left => -1.0,
            WallSide::Right => 1.0,
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            WallSide::Left => WallSide::Right,
            WallSide::Right => WallSide::Left,
        }
    }
}

/// Countdown values owned by [`MovementState`]. Each stays in `[0, configured max]`.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct MovementTimers {
    pub jump_buffer: f32,
    pub coyote: f32,
    pub apex: f32,
    pub wall_jump_delay: f32,
    /// Wall-jump sustain
    pub wall_jump: f32,
    pub wall_jump_move_pause: f32,
}

impl MovementTimers {
    /// Decrease a timer by `dt`, never below zero.
    pub fn decay(timer: &mut f32, dt: f32) {
        *timer = (*timer - dt).max(0.0);
    }
}

#[derive(Component, Debug, Clone, Default, PartialEq)]
pub struct MovementState {
    pub is_grounded: bool,
    pub is_wall_sliding: bool,
    /// Only meaningful while `is_wall_sliding` is true.
    pub wall_slide_direction: WallSide,
    pub is_moving_left: bool,
    pub is_moving_right: bool,
    pub is_at_apex_point: bool,
    /// One-shot latch for the jump-release cut, cleared by each new jump press.
    pub is_jump_released: bool,
    /// Set by a jump, cleared on landing. A rising contact only ungrounds after a jump.
    pub has_jumped: bool,
    /// Side a wall jump pushes toward, captured when the wall jump starts.
    pub wall_jump_heading: WallSide,
    pub timers: MovementTimers,
}

/// Surfaces the player is currently touching, maintained from collision start/end messages.
/// The tag is captured on contact start so a surface despawned mid-contact can still be ended.
#[derive(Component, Debug, Default, Clone)]
pub struct ActiveContacts(pub Vec<(Entity, SurfaceTag)>);

impl ActiveContacts {
    pub fn insert(&mut self, entity: Entity, tag: SurfaceTag) {
        if !self.0.iter().any(|(e, _)| *e == entity) {
            self.0.push((entity, tag));
        }
    }

    /// Forget a contact, returning the tag it was recorded with.
    pub fn remove(&mut self, entity: Entity) -> Option<SurfaceTag> {
        let index = self.0.iter().position(|(e, _)| *e == entity)?;
        Some(self.0.remove(index).1)
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = Entity> + '_ {
        self.0.iter().map(|(entity, _)| *entity)
    }
}
