use bevy::prelude::*;

use crate::prelude::{
    nav_agent::{AgentMove, NavAgent},
    touch_movement::TouchMovement,
    vjoy_config::VjoyConfig,
};
use crate::plugins::TouchMovementSet;

pub(crate) fn plugin(app: &mut App) {
    app.add_systems(Update, touch_motion_system.in_set(TouchMovementSet::Apply));
}

/// World-space step for a joystick `amount`. Screen x maps to world x, screen y
/// (downward) maps to world z (towards the camera).
pub fn scaled_movement(amount: Vec2, speed: f32, dt: f32) -> Vec3 {
    speed * dt * Vec3::new(amount.x, 0.0, amount.y)
}

/// Turns `current` towards facing `direction` by at most `max_angle` radians.
/// Returns `current` unchanged for a zero direction.
pub fn face_towards(current: Quat, direction: Vec3, max_angle: f32) -> Quat {
    let Ok(dir) = Dir3::new(direction) else { return current; };
    let target = Transform::IDENTITY.looking_to(dir, Dir3::Y).rotation;
    current.rotate_towards(target, max_angle)
}

/// Moves and turns every touch driven agent according to its joystick.
fn touch_motion_system(
    time: Res<Time>,
    config: Res<VjoyConfig>,
    mut q_agent: Query<(Entity, &TouchMovement, &NavAgent, &mut Transform)>,
    mut moves: MessageWriter<AgentMove>,
) {
    let dt = time.delta_secs();

    for (entity, movement, agent, mut transform) in q_agent.iter_mut() {
        let amount = movement.amount();
        if amount == Vec2::ZERO { continue; }

        moves.write(AgentMove {
            agent: entity,
            displacement: scaled_movement(amount, agent.speed, dt),
        });

        let look = Vec3::new(amount.x, 0.0, amount.y);
        transform.rotation = face_towards(transform.rotation, look, config.turn_rate() * dt);
    }
}
