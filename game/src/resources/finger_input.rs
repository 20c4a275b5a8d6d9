use bevy::prelude::*;

/// Identity of a contact, stable for the whole gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Reflect)]
pub enum FingerId {
    Touch(u64),
    /// Left mouse button standing in for a finger.
    Mouse,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Reflect)]
pub enum FingerPhase {
    Down,
    Move,
    Up,
}

/// A finger event in logical window coordinates (origin top-left, y down).
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct FingerMessage {
    pub finger: FingerId,
    pub phase: FingerPhase,
    pub position: Vec2,
}
