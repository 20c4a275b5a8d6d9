use std::time::Duration;

use bevy::input::ButtonState;
use bevy::input::InputPlugin;
use bevy::input::mouse::MouseButtonInput;
use bevy::input::touch::{TouchInput, TouchPhase};
use bevy::prelude::*;
use bevy::time::TimeUpdateStrategy;
use bevy::window::PrimaryWindow;

use game::TouchMovementPlugin;
use game::components::nav_agent::NavAgent;
use game::components::touch_movement::TouchMovement;
use game::components::ui::{DebugOverlayRoot, FingerStatusText};
use game::components::vjoy_base::VjoyBase;
use game::plugins::TouchMovementSet;
use game::resources::finger_input::{FingerId, FingerMessage, FingerPhase};
use game::resources::vjoy_config::VjoyConfig;

fn test_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, InputPlugin, TouchMovementPlugin))
        .insert_resource(TimeUpdateStrategy::ManualDuration(Duration::from_millis(50)));
    app.world_mut().spawn((
        Window { resolution: (1280, 720).into(), ..default() },
        PrimaryWindow,
    ));
    app
}

fn spawn_agent(app: &mut App) -> Entity {
    app.world_mut()
        .spawn((NavAgent::default(), TouchMovement::default(), Transform::default()))
        .id()
}

fn touch(app: &mut App, id: u64, phase: TouchPhase, x: f32, y: f32) {
    app.world_mut().write_message(TouchInput {
        phase,
        position: Vec2::new(x, y),
        window: Entity::PLACEHOLDER,
        force: None,
        id,
    });
}

fn mouse(app: &mut App, state: ButtonState) {
    app.world_mut().write_message(MouseButtonInput {
        button: MouseButton::Left,
        state,
        window: Entity::PLACEHOLDER,
    });
}

fn set_cursor(app: &mut App, position: Option<Vec2>) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&mut Window, With<PrimaryWindow>>();
    query.single_mut(world).unwrap().set_cursor_position(position);
}

fn config_mut(app: &mut App) -> Mut<'_, VjoyConfig> {
    app.world_mut().resource_mut::<VjoyConfig>()
}

#[derive(Resource, Default)]
struct SeenFingers(Vec<FingerMessage>);

fn record_fingers(mut fingers: MessageReader<FingerMessage>, mut seen: ResMut<SeenFingers>) {
    seen.0.extend(fingers.read().copied());
}

fn recording_app() -> App {
    let mut app = test_app();
    app.init_resource::<SeenFingers>()
        .add_systems(Update, record_fingers.after(TouchMovementSet::Source).before(TouchMovementSet::Track));
    app
}

fn take_seen(app: &mut App) -> Vec<FingerMessage> {
    std::mem::take(&mut app.world_mut().resource_mut::<SeenFingers>().0)
}

fn movement(app: &App, agent: Entity) -> TouchMovement {
    app.world().get::<TouchMovement>(agent).cloned().unwrap()
}

fn translation(app: &App, agent: Entity) -> Vec3 {
    app.world().get::<Transform>(agent).unwrap().translation
}

fn joystick(app: &mut App) -> (Node, Visibility) {
    let world = app.world_mut();
    let mut query = world.query_filtered::<(&Node, &Visibility), With<VjoyBase>>();
    let (node, vis) = query.single(world).unwrap();
    (node.clone(), *vis)
}

fn finger_status(app: &mut App) -> String {
    let world = app.world_mut();
    let mut query = world.query_filtered::<&Text, With<FingerStatusText>>();
    query.single(world).unwrap().0.clone()
}

#[test]
fn left_touch_drag_moves_and_turns_agent() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    touch(&mut app, 1, TouchPhase::Started, 300.0, 400.0);
    touch(&mut app, 1, TouchPhase::Moved, 500.0, 400.0);
    app.update();

    let state = movement(&app, agent);
    assert!(state.is_tracking());
    assert_eq!(state.visual().knob, Vec2::new(150.0, 0.0));
    assert_eq!(state.amount(), Vec2::new(1.0, 0.0));

    for _ in 0..10 {
        app.update();
    }

    let position = translation(&app, agent);
    assert!(position.x > 1.0);
    assert!(position.z.abs() < 1e-4);
    assert_eq!(position.y, 0.0);

    let forward = app.world().get::<Transform>(agent).unwrap().forward().as_vec3();
    assert!(forward.distance(Vec3::X) < 1e-3);
}

#[test]
fn right_half_touch_never_claims() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    touch(&mut app, 1, TouchPhase::Started, 900.0, 400.0);
    touch(&mut app, 1, TouchPhase::Moved, 1100.0, 400.0);
    app.update();
    app.update();

    let state = movement(&app, agent);
    assert!(!state.is_tracking());
    assert_eq!(state.amount(), Vec2::ZERO);
    assert_eq!(translation(&app, agent), Vec3::ZERO);
    assert_eq!(joystick(&mut app).1, Visibility::Hidden);
}

#[test]
fn joystick_appears_at_clamped_start() {
    let mut app = test_app();
    spawn_agent(&mut app);
    app.update();

    touch(&mut app, 3, TouchPhase::Started, 40.0, -10.0);
    app.update();

    let (node, vis) = joystick(&mut app);
    assert_eq!(vis, Visibility::Visible);
    assert_eq!(node.left, Val::Px(0.0));
    assert_eq!(node.top, Val::Px(0.0));
    assert_eq!(node.width, Val::Px(300.0));
}

#[test]
fn lifting_finger_stops_agent_and_hides_joystick() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    touch(&mut app, 1, TouchPhase::Started, 300.0, 300.0);
    touch(&mut app, 1, TouchPhase::Moved, 375.0, 375.0);
    app.update();
    assert_eq!(movement(&app, agent).amount(), Vec2::new(0.5, 0.5));

    touch(&mut app, 1, TouchPhase::Ended, 375.0, 375.0);
    app.update();
    let stopped_at = translation(&app, agent);

    app.update();
    app.update();

    let state = movement(&app, agent);
    assert_eq!(state.amount(), Vec2::ZERO);
    assert_eq!(state.visual().knob, Vec2::ZERO);
    assert_eq!(translation(&app, agent), stopped_at);
    assert_eq!(joystick(&mut app).1, Visibility::Hidden);
}

#[test]
fn second_finger_is_ignored_until_first_lifts() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    touch(&mut app, 1, TouchPhase::Started, 300.0, 300.0);
    touch(&mut app, 2, TouchPhase::Started, 200.0, 500.0);
    touch(&mut app, 2, TouchPhase::Moved, 400.0, 300.0);
    app.update();
    assert_eq!(movement(&app, agent).amount(), Vec2::ZERO);

    touch(&mut app, 1, TouchPhase::Canceled, 300.0, 300.0);
    touch(&mut app, 2, TouchPhase::Started, 200.0, 500.0);
    app.update();

    let state = movement(&app, agent);
    let finger = state.finger().copied().unwrap();
    assert_eq!(finger.id, FingerId::Touch(2));
    assert_eq!(finger.start, Vec2::new(200.0, 500.0));
}

#[test]
fn overlay_reports_tracked_finger() {
    let mut app = test_app();
    spawn_agent(&mut app);
    app.update();
    assert_eq!(finger_status(&mut app), "No Current Movement Touch");

    touch(&mut app, 1, TouchPhase::Started, 200.0, 300.0);
    touch(&mut app, 1, TouchPhase::Moved, 250.0, 320.0);
    app.update();
    assert_eq!(
        finger_status(&mut app),
        "Finger Start Position: (200.0, 300.0)\nFinger Current Position: (250.0, 320.0)",
    );

    touch(&mut app, 1, TouchPhase::Ended, 250.0, 320.0);
    app.update();
    assert_eq!(finger_status(&mut app), "No Current Movement Touch");
}

#[test]
fn removing_controller_hides_joystick_and_drops_input() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    touch(&mut app, 1, TouchPhase::Started, 300.0, 300.0);
    app.update();
    assert_eq!(joystick(&mut app).1, Visibility::Visible);

    app.world_mut().entity_mut(agent).remove::<TouchMovement>();
    touch(&mut app, 1, TouchPhase::Moved, 450.0, 300.0);
    app.update();

    assert_eq!(joystick(&mut app).1, Visibility::Hidden);
    assert_eq!(translation(&app, agent), Vec3::ZERO);
}

#[test]
#[should_panic]
fn zero_sized_joystick_fails_fast() {
    let mut app = test_app();
    app.insert_resource(VjoyConfig { size: Vec2::ZERO, ..default() });
    app.update();
}

#[test]
fn changed_config_is_validated_again() {
    let mut app = test_app();
    app.update();

    config_mut(&mut app).size = Vec2::new(-300.0, 300.0);
    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| app.update()));
    assert!(result.is_err());
}

#[test]
fn overlay_can_be_switched_off() {
    let mut app = test_app();
    spawn_agent(&mut app);
    app.update();

    config_mut(&mut app).show_debug_overlay = false;
    app.update();

    let world = app.world_mut();
    let mut query = world.query_filtered::<&Visibility, With<DebugOverlayRoot>>();
    assert_eq!(*query.single(world).unwrap(), Visibility::Hidden);
}

#[test]
fn mouse_press_drag_release_acts_as_finger() {
    let mut app = recording_app();
    let agent = spawn_agent(&mut app);
    app.update();

    set_cursor(&mut app, Some(Vec2::new(300.0, 300.0)));
    mouse(&mut app, ButtonState::Pressed);
    app.update();
    assert_eq!(take_seen(&mut app), vec![FingerMessage {
        finger: FingerId::Mouse,
        phase: FingerPhase::Down,
        position: Vec2::new(300.0, 300.0),
    }]);
    assert_eq!(movement(&app, agent).finger().map(|f| f.id), Some(FingerId::Mouse));

    set_cursor(&mut app, Some(Vec2::new(450.0, 300.0)));
    app.update();
    assert_eq!(take_seen(&mut app).iter().map(|m| m.phase).collect::<Vec<_>>(), vec![FingerPhase::Move]);
    assert_eq!(movement(&app, agent).amount(), Vec2::new(1.0, 0.0));

    // Holding still sends nothing.
    app.update();
    assert!(take_seen(&mut app).is_empty());

    // Released outside the window: lifted where it was last seen.
    set_cursor(&mut app, None);
    mouse(&mut app, ButtonState::Released);
    app.update();
    assert_eq!(take_seen(&mut app), vec![FingerMessage {
        finger: FingerId::Mouse,
        phase: FingerPhase::Up,
        position: Vec2::new(450.0, 300.0),
    }]);

    let state = movement(&app, agent);
    assert!(!state.is_tracking());
    assert_eq!(state.amount(), Vec2::ZERO);
}

#[test]
fn mouse_is_ignored_when_emulation_is_off() {
    let mut app = recording_app();
    let agent = spawn_agent(&mut app);
    config_mut(&mut app).emulate_touch_with_mouse = false;
    app.update();

    set_cursor(&mut app, Some(Vec2::new(300.0, 300.0)));
    mouse(&mut app, ButtonState::Pressed);
    app.update();

    assert!(take_seen(&mut app).is_empty());
    assert!(!movement(&app, agent).is_tracking());
}

#[test]
fn turning_emulation_off_mid_drag_releases_mouse_finger() {
    let mut app = test_app();
    let agent = spawn_agent(&mut app);
    app.update();

    set_cursor(&mut app, Some(Vec2::new(300.0, 300.0)));
    mouse(&mut app, ButtonState::Pressed);
    app.update();
    set_cursor(&mut app, Some(Vec2::new(450.0, 300.0)));
    app.update();
    assert_eq!(movement(&app, agent).amount(), Vec2::new(1.0, 0.0));

    config_mut(&mut app).emulate_touch_with_mouse = false;
    app.update();
    let stopped_at = translation(&app, agent);

    mouse(&mut app, ButtonState::Released);
    app.update();

    let state = movement(&app, agent);
    assert!(!state.is_tracking());
    assert_eq!(state.amount(), Vec2::ZERO);
    assert_eq!(translation(&app, agent), stopped_at);
    assert_eq!(joystick(&mut app).1, Visibility::Hidden);

    touch(&mut app, 5, TouchPhase::Started, 200.0, 400.0);
    app.update();
    assert_eq!(movement(&app, agent).finger().map(|f| f.id), Some(FingerId::Touch(5)));
}
