use bevy::prelude::*;

pub mod debug;
pub mod defaults;
pub mod game;
pub mod hud;
pub mod input;
pub mod motion;
pub mod navigation;
pub mod vjoy;

/// Frame order of the touch movement pipeline.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum TouchMovementSet {
    /// Raw input becomes finger messages.
    Source,
    /// The joystick claims, follows and releases fingers.
    Track,
    /// Joystick amount becomes move commands and rotation.
    Apply,
    /// Agents execute their move commands.
    Move,
    /// UI mirrors the state.
    Render,
}
