use bevy::prelude::*;

use crate::resources::finger_input::FingerId;
use crate::resources::vjoy_config::VjoyConfig;

/// The finger currently steering movement.
#[derive(Debug, Clone, Copy, PartialEq, Reflect)]
pub struct TrackedFinger {
    pub id: FingerId,
    pub start: Vec2,
    pub current: Vec2,
}

/// What the joystick UI should show. Mirrored onto the nodes every frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Reflect)]
pub struct VjoyVisual {
    /// Joystick center in logical window pixels.
    pub center: Vec2,
    /// Knob offset from the center in pixels.
    pub knob: Vec2,
    pub visible: bool,
}

/// Touch joystick state of a controlled agent.
///
/// While an entity carries this component, finger input is tracked and turned
/// into movement for that entity. `amount` is non-zero only while a finger is tracked.
#[derive(Component, Debug, Clone, Default, Reflect)]
#[reflect(Component)]
pub struct TouchMovement {
    finger: Option<TrackedFinger>,
    amount: Vec2,
    visual: VjoyVisual,
}

impl TouchMovement {
    pub fn finger(&self) -> Option<&TrackedFinger> {
        self.finger.as_ref()
    }

    pub fn is_tracking(&self) -> bool {
        self.finger.is_some()
    }

    /// Normalized movement, each component in [-1, 1].
    pub fn amount(&self) -> Vec2 {
        self.amount
    }

    pub fn visual(&self) -> VjoyVisual {
        self.visual
    }

    /// Claims `id` when nothing is tracked and the touch lands in the claim region.
    /// Returns whether the finger was claimed.
    pub fn finger_down(&mut self, id: FingerId, position: Vec2, screen: Vec2, config: &VjoyConfig) -> bool {
        if self.finger.is_some() || !config.in_claim_region(position, screen) {
            return false;
        }

        self.finger = Some(TrackedFinger { id, start: position, current: position });
        self.amount = Vec2::ZERO;
        self.visual = VjoyVisual {
            center: config.clamp_start_position(position, screen),
            knob: Vec2::ZERO,
            visible: true,
        };
        true
    }

    /// Updates knob and amount when `id` is the tracked finger.
    pub fn finger_move(&mut self, id: FingerId, position: Vec2, config: &VjoyConfig) -> bool {
        let Some(finger) = self.finger.as_mut().filter(|f| f.id == id) else { return false; };
        finger.current = position;

        let knob = config.knob_offset(self.visual.center, position);
        self.visual.knob = knob;
        self.amount = config.movement_amount(knob);
        true
    }

    /// Releases the tracked finger and zeroes everything when `id` matches.
    pub fn finger_up(&mut self, id: FingerId) -> bool {
        if self.finger.is_none_or(|f| f.id != id) {
            return false;
        }
        self.release();
        true
    }

    pub fn release(&mut self) {
        self.finger = None;
        self.amount = Vec2::ZERO;
        self.visual.knob = Vec2::ZERO;
        self.visual.visible = false;
    }
}
