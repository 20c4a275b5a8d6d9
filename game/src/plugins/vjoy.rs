//! # Virtual Joystick Plugin
//!
//! A floating joystick that appears under the first finger put down on the
//! left side of the screen.
//!
//! This plugin manages:
//! 1. Claiming and releasing the movement finger.
//! 2. Turning the finger offset into the agent's [TouchMovement] amount.
//! 3. Mirroring the joystick state onto its UI nodes.
//!
//! ## Requirements
//! - An entity carrying [TouchMovement]. Without one, finger input is dropped.
//! - A `PrimaryWindow`, used for the screen size.

use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::prelude::{
    finger_input::{FingerMessage, FingerPhase},
    touch_movement::TouchMovement,
    vjoy_base::VjoyBase,
    vjoy_config::VjoyConfig,
    vjoy_knob::VjoyKnob,
};
use crate::plugins::TouchMovementSet;

pub(crate) fn plugin(app: &mut App) {
    app
        .init_resource::<VjoyConfig>()
        .register_type::<VjoyConfig>()
        .register_type::<TouchMovement>()
        .add_systems(Startup, (validate_config, spawn_joystick))
        .add_systems(Update, validate_config.run_if(resource_changed::<VjoyConfig>))
        .add_systems(Update, finger_tracking_system.in_set(TouchMovementSet::Track))
        .add_systems(Update, (
            joystick_render_system.run_if(any_with_component::<TouchMovement>),
            hide_on_deactivate_system,
        ).chain().in_set(TouchMovementSet::Render));
}

/// Fails fast on a config the joystick geometry cannot work with.
fn validate_config(config: Res<VjoyConfig>) -> Result {
    config.validate()?;
    debug!("joystick config accepted: size {}, turn rate {} deg/s", config.size, config.turn_rate_degrees);
    Ok(())
}

/// Spawns the hidden joystick. It is positioned on the first claiming touch.
pub fn spawn_joystick(mut commands: Commands, config: Res<VjoyConfig>) {
    let knob_size = config.size * config.knob_scale;

    commands.spawn((
        VjoyBase,
        Node {
            width: Val::Px(config.size.x),
            height: Val::Px(config.size.y),
            position_type: PositionType::Absolute,
            display: Display::Flex,
            ..default()
        },
        Visibility::Hidden,
        BackgroundColor(config.base_color.with_alpha(config.alpha * 0.5)),
        BorderRadius::all(Val::Percent(50.0)),
        ZIndex(100),
    ))
    .with_children(|parent| {
        parent.spawn((
            VjoyKnob,
            Node {
                width: Val::Px(knob_size.x),
                height: Val::Px(knob_size.y),
                position_type: PositionType::Absolute,
                left: Val::Px((config.size.x - knob_size.x) / 2.0),
                top: Val::Px((config.size.y - knob_size.y) / 2.0),
                ..default()
            },
            BackgroundColor(config.knob_color.with_alpha(config.alpha)),
            BorderRadius::all(Val::Percent(50.0)),
        ));
    });
}

/// Feeds finger messages to the controlled agent's [TouchMovement].
fn finger_tracking_system(
    mut fingers: MessageReader<FingerMessage>,
    config: Res<VjoyConfig>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut q_movement: Query<&mut TouchMovement>,
) {
    let (Ok(window), Ok(mut movement)) = (q_window.single(), q_movement.single_mut()) else {
        fingers.clear();
        return;
    };
    let screen = Vec2::new(window.width(), window.height());

    for msg in fingers.read() {
        match msg.phase {
            FingerPhase::Down => {
                if movement.finger_down(msg.finger, msg.position, screen, &config) {
                    debug!("movement finger {:?} claimed at {}", msg.finger, msg.position);
                }
            }
            FingerPhase::Move => {
                movement.finger_move(msg.finger, msg.position, &config);
            }
            FingerPhase::Up => {
                if movement.finger_up(msg.finger) {
                    debug!("movement finger {:?} released", msg.finger);
                }
            }
        }
    }
}

/// Top-left corner of a node of `size` centered on `center`.
pub fn centered_corner(center: Vec2, size: Vec2) -> Vec2 {
    center - size / 2.0
}

/// Updates the position, size and visibility of the joystick nodes.
fn joystick_render_system(
    config: Res<VjoyConfig>,
    q_movement: Query<&TouchMovement>,
    mut q_base: Query<(&mut Node, &mut Visibility, &mut BackgroundColor), (With<VjoyBase>, Without<VjoyKnob>)>,
    mut q_knob: Query<(&mut Node, &mut BackgroundColor), (With<VjoyKnob>, Without<VjoyBase>)>,
) {
    let Ok(movement) = q_movement.single() else { return; };
    let Ok((mut base_node, mut base_vis, mut base_col)) = q_base.single_mut() else { return; };
    let Ok((mut knob_node, mut knob_col)) = q_knob.single_mut() else { return; };
    let visual = movement.visual();

    let target_vis = if visual.visible { Visibility::Visible } else { Visibility::Hidden };
    base_vis.set_if_neq(target_vis);
    if !visual.visible { return; }

    let corner = centered_corner(visual.center, config.size);
    base_node.left = Val::Px(corner.x);
    base_node.top = Val::Px(corner.y);
    base_node.width = Val::Px(config.size.x);
    base_node.height = Val::Px(config.size.y);

    let knob_size = config.size * config.knob_scale;
    let knob_corner = centered_corner(config.size / 2.0 + visual.knob, knob_size);
    knob_node.left = Val::Px(knob_corner.x);
    knob_node.top = Val::Px(knob_corner.y);
    knob_node.width = Val::Px(knob_size.x);
    knob_node.height = Val::Px(knob_size.y);

    base_col.0 = config.base_color.with_alpha(config.alpha * 0.5);
    knob_col.0 = config.knob_color.with_alpha(config.alpha);
}

/// Hides the joystick once no entity is driven by touch any more.
fn hide_on_deactivate_system(
    mut removed: RemovedComponents<TouchMovement>,
    q_movement: Query<(), With<TouchMovement>>,
    mut q_base: Query<&mut Visibility, With<VjoyBase>>,
) {
    if removed.read().count() == 0 || !q_movement.is_empty() { return; }
    for mut vis in q_base.iter_mut() {
        *vis = Visibility::Hidden;
    }
    info!("touch movement deactivated, joystick hidden");
}
