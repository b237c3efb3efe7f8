//! Catch detection by distance polling
//!
//! Engines with trigger volumes report the catch themselves. Without one, a
//! driver can poll `within_reach` each frame and feed `ball_caught` into the
//! tick input.

use glam::Vec3;

use super::rig::Rig;

/// Default pickup radius around the dribble anchor
pub const CATCH_RADIUS: f32 = 0.9;

/// Result of a reach probe
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReachResult {
    /// Ball overlaps the catch sphere
    pub hit: bool,
    /// Distance from the ball center to the dribble anchor
    pub distance: f32,
}

/// Signed distance from `point` to a sphere surface (negative inside)
#[inline]
pub fn sd_sphere(point: Vec3, center: Vec3, radius: f32) -> f32 {
    (point - center).length() - radius
}

/// Check whether a ball of `ball_radius` at `ball_pos` touches the catch
/// sphere around the holder's dribble anchor
pub fn within_reach(ball_pos: Vec3, ball_radius: f32, rig: &Rig, catch_radius: f32) -> ReachResult {
    let anchor = rig.dribble_anchor();
    ReachResult {
        hit: sd_sphere(ball_pos, anchor, catch_radius) <= ball_radius,
        distance: ball_pos.distance(anchor),
    }
}
