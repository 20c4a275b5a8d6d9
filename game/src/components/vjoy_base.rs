use bevy::prelude::*;

/// Container node of the floating joystick.
#[derive(Component, Default, Reflect)]
#[reflect(Component)]
pub struct VjoyBase;
