use bevy::prelude::*;

/// Something that walks the ground plane on command.
#[derive(Component, Reflect, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct NavAgent {
    /// Top speed in world units per second.
    pub speed: f32,
}

impl Default for NavAgent {
    fn default() -> Self {
        Self { speed: 3.5 }
    }
}

/// Move `agent` by `displacement` this frame.
#[derive(Message, Debug, Clone, Copy)]
pub struct AgentMove {
    pub agent: Entity,
    pub displacement: Vec3,
}
