use bevy::prelude::*;

use crate::prelude::{
    nav_agent::{AgentMove, NavAgent},
    nav_bounds::NavBounds,
};
use crate::plugins::TouchMovementSet;

pub(crate) fn plugin(app: &mut App) {
    app
        .add_message::<AgentMove>()
        .register_type::<NavAgent>()
        .register_type::<NavBounds>()
        .add_systems(Update, agent_move_system.in_set(TouchMovementSet::Move));
}

/// Applies queued [AgentMove]s, keeping agents inside [NavBounds] when present.
fn agent_move_system(
    bounds: Option<Res<NavBounds>>,
    mut moves: MessageReader<AgentMove>,
    mut q_agent: Query<&mut Transform, With<NavAgent>>,
) {
    for msg in moves.read() {
        let Ok(mut transform) = q_agent.get_mut(msg.agent) else { continue; };
        let target = transform.translation + msg.displacement;
        transform.translation = match bounds.as_deref() {
            Some(bounds) => bounds.clamp(target),
            None => target,
        };
    }
}
