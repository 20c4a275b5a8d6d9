use bevy::prelude::*;

/// Walkable rectangle on the XZ plane. Agents are kept inside it.
#[derive(Resource, Reflect, Debug, Clone, Copy)]
#[reflect(Resource)]
pub struct NavBounds {
    pub min: Vec2,
    pub max: Vec2,
}

impl Default for NavBounds {
    fn default() -> Self {
        Self {
            min: Vec2::splat(-20.0),
            max: Vec2::splat(20.0),
        }
    }
}

impl NavBounds {
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    pub fn clamp(&self, position: Vec3) -> Vec3 {
        Vec3::new(
            position.x.clamp(self.min.x, self.max.x),
            position.y,
            position.z.clamp(self.min.y, self.max.y),
        )
    }
}
