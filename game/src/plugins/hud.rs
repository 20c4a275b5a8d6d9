use bevy::prelude::*;
use bevy::window::PrimaryWindow;

use crate::prelude::ui::*;
use crate::prelude::{
    touch_movement::{TouchMovement, TrackedFinger},
    vjoy_config::VjoyConfig,
};
use crate::plugins::TouchMovementSet;

pub(crate) fn plugin(app: &mut App) {
    app
        .add_systems(Startup, spawn_debug_overlay)
        .add_systems(Update, (
            overlay_visibility_system.run_if(resource_changed::<VjoyConfig>),
            update_debug_overlay_system,
        ).chain().in_set(TouchMovementSet::Render));
}

pub fn screen_size_text(screen: Vec2) -> String {
    format!("Screen Size ({:.0}, {:.0})", screen.x, screen.y)
}

pub fn finger_status_text(finger: Option<&TrackedFinger>) -> String {
    match finger {
        Some(finger) => format!(
            "Finger Start Position: ({:.1}, {:.1})\nFinger Current Position: ({:.1}, {:.1})",
            finger.start.x, finger.start.y, finger.current.x, finger.current.y,
        ),
        None => "No Current Movement Touch".to_string(),
    }
}

fn spawn_debug_overlay(mut commands: Commands, config: Res<VjoyConfig>) {
    let visibility = if config.show_debug_overlay { Visibility::Inherited } else { Visibility::Hidden };

    commands.spawn((
        DebugOverlayRoot,
        Node {
            position_type: PositionType::Absolute,
            left: Val::Px(10.0),
            top: Val::Px(10.0),
            display: Display::Flex,
            flex_direction: FlexDirection::Column,
            row_gap: Val::Px(6.0),
            ..default()
        },
        visibility,
        ZIndex(200),
    ))
    .with_children(|parent| {
        parent.spawn((
            ScreenSizeText,
            Text::new(""),
            TextFont { font_size: 24.0, ..default() },
            TextColor(Color::WHITE),
        ));

        parent.spawn((
            FingerStatusText,
            Text::new(finger_status_text(None)),
            TextFont { font_size: 24.0, ..default() },
            TextColor(Color::WHITE),
        ));
    });
}

fn overlay_visibility_system(
    config: Res<VjoyConfig>,
    mut q_root: Query<&mut Visibility, With<DebugOverlayRoot>>,
) {
    let Ok(mut vis) = q_root.single_mut() else { return; };
    let target = if config.show_debug_overlay { Visibility::Inherited } else { Visibility::Hidden };
    vis.set_if_neq(target);
}

fn update_debug_overlay_system(
    config: Res<VjoyConfig>,
    q_window: Query<&Window, With<PrimaryWindow>>,
    q_movement: Query<&TouchMovement>,
    mut q_screen: Query<&mut Text, (With<ScreenSizeText>, Without<FingerStatusText>)>,
    mut q_finger: Query<&mut Text, (With<FingerStatusText>, Without<ScreenSizeText>)>,
) {
    if !config.show_debug_overlay { return; }

    if let (Ok(window), Ok(mut text)) = (q_window.single(), q_screen.single_mut()) {
        let content = screen_size_text(Vec2::new(window.width(), window.height()));
        if text.0 != content { text.0 = content; }
    }

    if let Ok(mut text) = q_finger.single_mut() {
        let finger = q_movement.single().ok().and_then(|m| m.finger());
        let content = finger_status_text(finger);
        if text.0 != content { text.0 = content; }
    }
}
