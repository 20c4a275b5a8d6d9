pub mod nav_agent;
pub mod touch_movement;
pub mod ui;
pub mod vjoy_base;
pub mod vjoy_knob;
