use bevy::prelude::*;

#[derive(Component)]
pub struct DebugOverlayRoot;

#[derive(Component)]
pub struct ScreenSizeText;

#[derive(Component)]
pub struct FingerStatusText;
