//! Small vector and angle helpers shared by the simulation and the renderer.

use bevy::math::Vec2;

/// Convert an angle in radians to degrees.
pub fn to_degrees(angle_radians: f32) -> f32 {
    angle_radians * 180.0 / std::f32::consts::PI
}

/// Returns the angle (in degrees) between a world-space vector and the world +x axis.
///
/// World space has y pointing down, so y is flipped before `atan2` to get the
/// usual counter-clockwise-positive angle.
pub fn world_vec_to_angle(v: Vec2) -> f32 {
    to_degrees((-v.y).atan2(v.x))
}
