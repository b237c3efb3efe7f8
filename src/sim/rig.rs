//! Holder rig: where the shooter stands and where the ball sits in their hands
//!
//! Anchors are stored in the holder's local frame (+Z forward, +Y up) and
//! rotated by the holder's yaw into world space.

use glam::{Quat, Vec2, Vec3};
use serde::{Deserialize, Serialize};

use crate::{flatten, yaw_of};

/// Ball anchor while dribbling, in holder space
pub const DRIBBLE_ANCHOR: Vec3 = Vec3::new(0.0, 0.5, 0.7);
/// Ball anchor while winding up a shot, in holder space
pub const OVERHEAD_ANCHOR: Vec3 = Vec3::new(0.0, 2.4, 0.2);

/// Directions shorter than this don't change facing
const FACING_EPSILON: f32 = 1e-4;

/// The shooter's pose
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rig {
    /// Feet position in world space
    pub position: Vec3,
    /// Heading around +Y (radians, 0 = facing +Z)
    pub yaw: f32,
    /// Dribble anchor in holder space
    pub dribble_offset: Vec3,
    /// Overhead anchor in holder space
    pub overhead_offset: Vec3,
}

impl Default for Rig {
    fn default() -> Self {
        Self::new(Vec3::ZERO)
    }
}

impl Rig {
    pub fn new(position: Vec3) -> Self {
        Self {
            position,
            yaw: 0.0,
            dribble_offset: DRIBBLE_ANCHOR,
            overhead_offset: OVERHEAD_ANCHOR,
        }
    }

    #[inline]
    fn to_world(&self, local: Vec3) -> Vec3 {
        self.position + Quat::from_rotation_y(self.yaw) * local
    }

    /// World-space resting point of the ball while dribbling
    pub fn dribble_anchor(&self) -> Vec3 {
        self.to_world(self.dribble_offset)
    }

    /// World-space point the shot is released from
    pub fn overhead_anchor(&self) -> Vec3 {
        self.to_world(self.overhead_offset)
    }

    /// Unit forward vector
    pub fn forward(&self) -> Vec3 {
        Quat::from_rotation_y(self.yaw) * Vec3::Z
    }

    /// Turn to face a horizontal direction. Near-zero directions are ignored.
    pub fn face(&mut self, dir: Vec3) {
        let flat = flatten(dir);
        if flat.length_squared() > FACING_EPSILON * FACING_EPSILON {
            self.yaw = yaw_of(flat);
        }
    }

    /// Turn toward a world point (yaw only)
    pub fn face_toward(&mut self, point: Vec3) {
        self.face(point - self.position);
    }

    /// Move by a raw input axis (x = strafe, y = forward along +Z) and face
    /// the direction of travel
    pub fn step(&mut self, movement: Vec2, speed: f32, dt: f32) {
        let dir = Vec3::new(movement.x, 0.0, movement.y);
        self.position += dir * speed * dt;
        self.face(dir);
    }
}
