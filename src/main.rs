use bevy::prelude::*;

fn main() {
    App::new().add_plugins(game::AppPlugin).run();
}
