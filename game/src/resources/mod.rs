pub mod finger_input;
pub mod nav_bounds;
pub mod vjoy_config;
