//! Turns raw touch (and optionally mouse) input into [FingerMessage]s so the
//! joystick only ever deals with one kind of event.

use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::prelude::{
    finger_input::{FingerId, FingerMessage, FingerPhase},
    vjoy_config::VjoyConfig,
};
use crate::plugins::TouchMovementSet;

pub(crate) fn plugin(app: &mut App) {
    app
        .add_message::<FingerMessage>()
        .add_systems(Update, (
            touch_source_system,
            mouse_source_system,
        ).chain().in_set(TouchMovementSet::Source));
}

pub fn finger_phase(phase: TouchPhase) -> FingerPhase {
    match phase {
        TouchPhase::Started => FingerPhase::Down,
        TouchPhase::Moved => FingerPhase::Move,
        TouchPhase::Ended | TouchPhase::Canceled => FingerPhase::Up,
    }
}

fn touch_source_system(
    mut touches: MessageReader<TouchInput>,
    mut fingers: MessageWriter<FingerMessage>,
) {
    for touch in touches.read() {
        fingers.write(FingerMessage {
            finger: FingerId::Touch(touch.id),
            phase: finger_phase(touch.phase),
            position: touch.position,
        });
    }
}

/// Emulates a finger with the left mouse button.
fn mouse_source_system(
    config: Res<VjoyConfig>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    mut last_position: Local<Option<Vec2>>,
    mut fingers: MessageWriter<FingerMessage>,
) {
    if !config.emulate_touch_with_mouse {
        // Let go of a mouse finger that was held when emulation got switched off.
        if let Some(position) = last_position.take() {
            fingers.write(FingerMessage { finger: FingerId::Mouse, phase: FingerPhase::Up, position });
        }
        return;
    }
    let Ok(window) = q_window.single() else { return; };
    let cursor = window.cursor_position();

    if mouse_buttons.just_pressed(MouseButton::Left) {
        if let Some(position) = cursor {
            fingers.write(FingerMessage { finger: FingerId::Mouse, phase: FingerPhase::Down, position });
            *last_position = Some(position);
        }
    } else if mouse_buttons.pressed(MouseButton::Left) {
        if let (Some(position), Some(last)) = (cursor, *last_position) {
            if position != last {
                fingers.write(FingerMessage { finger: FingerId::Mouse, phase: FingerPhase::Move, position });
                *last_position = Some(position);
            }
        }
    }

    if mouse_buttons.just_released(MouseButton::Left) {
        if let Some(position) = cursor.or(*last_position) {
            fingers.write(FingerMessage { finger: FingerId::Mouse, phase: FingerPhase::Up, position });
        }
        *last_position = None;
    }
}
