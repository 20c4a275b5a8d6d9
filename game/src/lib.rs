#![allow(unused_imports)]

use bevy::prelude::*;

pub mod components;
pub mod plugins;
pub mod resources;

pub mod prelude {
    pub use super::*;
    pub use {components::*, plugins::*, resources::*};
}

use plugins::TouchMovementSet;

/// The whole game: window, scene and touch movement.
pub struct AppPlugin;

impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            plugins::defaults::plugin,
            plugins::game::plugin,
            TouchMovementPlugin,
        ));
        #[cfg(feature="dev")]
        app.add_plugins(plugins::debug::plugin);
    }
}

/// Touch joystick driving every entity that carries a
/// [TouchMovement](components::touch_movement::TouchMovement) and a
/// [NavAgent](components::nav_agent::NavAgent).
///
/// Needs input and window types from the host app (`DefaultPlugins`, or
/// `MinimalPlugins` + `InputPlugin` headless).
pub struct TouchMovementPlugin;

impl Plugin for TouchMovementPlugin {
    fn build(&self, app: &mut App) {
        app.configure_sets(Update, (
            TouchMovementSet::Source,
            TouchMovementSet::Track,
            TouchMovementSet::Apply,
            TouchMovementSet::Move,
            TouchMovementSet::Render,
        ).chain());

        app.add_plugins((
            plugins::input::plugin,
            plugins::vjoy::plugin,
            plugins::motion::plugin,
            plugins::navigation::plugin,
            plugins::hud::plugin,
        ));
    }
}
