use bevy::prelude::*;

/// Configuration resource for the floating virtual joystick.
///
/// By updating this resource (via code or the `bevy_inspector_egui`), the joystick
/// reacts on the next touch. Every change is validated, see [VjoyConfig::validate].
#[derive(Resource, Reflect, Debug, Clone)]
#[reflect(Resource)]
pub struct VjoyConfig {
    /// Width and height of the joystick container in logical pixels.
    /// Half of the width is the maximum knob travel.
    pub size: Vec2,

    /// Size of the knob relative to the container (0.0 to 1.0].
    pub knob_scale: f32,

    /// Fraction of the screen width, measured from the left edge, where a
    /// touch may claim the joystick.
    pub claim_fraction: f32,

    /// Maximum turning speed of the agent in degrees per second.
    pub turn_rate_degrees: f32,

    /// Treat the left mouse button as a finger. Handy on desktop.
    pub emulate_touch_with_mouse: bool,

    /// Show the screen/finger diagnostic text.
    pub show_debug_overlay: bool,

    /// Transparency of the joystick while it is shown (0.0 to 1.0).
    pub alpha: f32,

    pub base_color: Color,
    pub knob_color: Color,
}

impl Default for VjoyConfig {
    fn default() -> Self {
        Self {
            size: baked_size(),
            knob_scale: 0.4,
            claim_fraction: 0.5,
            turn_rate_degrees: baked_turn_rate(),
            emulate_touch_with_mouse: true,
            show_debug_overlay: true,
            alpha: 0.8,
            base_color: Color::srgba(1.0, 1.0, 1.0, 1.0),
            knob_color: Color::WHITE,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum ConfigError {
    #[error("Joystick size must be finite and positive, got {0}")]
    InvalidSize(Vec2),

    #[error("Knob scale must be in (0, 1], got {0}")]
    InvalidKnobScale(f32),

    #[error("Claim fraction must be in (0, 1], got {0}")]
    InvalidClaimFraction(f32),

    #[error("Turn rate must be finite and positive, got {0}")]
    InvalidTurnRate(f32),

    #[error("Malformed joystick size {0:?}, expected WIDTHxHEIGHT")]
    MalformedSize(String),
}

impl VjoyConfig {
    pub const DEFAULT_SIZE: Vec2 = Vec2::new(300.0, 300.0);
    pub const DEFAULT_TURN_RATE: f32 = 360.0;

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.size.is_finite() || self.size.x <= 0.0 || self.size.y <= 0.0 {
            return Err(ConfigError::InvalidSize(self.size));
        }
        if !(self.knob_scale > 0.0 && self.knob_scale <= 1.0) {
            return Err(ConfigError::InvalidKnobScale(self.knob_scale));
        }
        if !(self.claim_fraction > 0.0 && self.claim_fraction <= 1.0) {
            return Err(ConfigError::InvalidClaimFraction(self.claim_fraction));
        }
        if !self.turn_rate_degrees.is_finite() || self.turn_rate_degrees <= 0.0 {
            return Err(ConfigError::InvalidTurnRate(self.turn_rate_degrees));
        }
        Ok(())
    }

    /// Maximum distance of the knob from the joystick center.
    pub fn max_radius(&self) -> f32 {
        self.size.x / 2.0
    }

    /// Turn rate in radians per second.
    pub fn turn_rate(&self) -> f32 {
        self.turn_rate_degrees.to_radians()
    }

    /// Whether a touch at `position` lies in the region that may claim the joystick.
    pub fn in_claim_region(&self, position: Vec2, screen: Vec2) -> bool {
        position.x <= screen.x * self.claim_fraction
    }

    /// Moves `start` so the whole joystick stays on screen.
    pub fn clamp_start_position(&self, start: Vec2, screen: Vec2) -> Vec2 {
        let half = self.size / 2.0;
        Vec2::new(
            clamp_axis(start.x, half.x, screen.x),
            clamp_axis(start.y, half.y, screen.y),
        )
    }

    /// Offset of the knob from `center` for a finger at `touch`, capped at [VjoyConfig::max_radius].
    pub fn knob_offset(&self, center: Vec2, touch: Vec2) -> Vec2 {
        (touch - center).clamp_length_max(self.max_radius())
    }

    /// Normalized movement for a knob offset, each component in [-1, 1].
    pub fn movement_amount(&self, knob: Vec2) -> Vec2 {
        (knob / self.max_radius()).clamp(Vec2::NEG_ONE, Vec2::ONE)
    }
}

// A screen narrower than the joystick centers it on that axis.
fn clamp_axis(value: f32, half: f32, extent: f32) -> f32 {
    let upper = extent - half;
    if upper < half {
        return extent / 2.0;
    }
    value.clamp(half, upper)
}

pub fn parse_size(raw: &str) -> Result<Vec2, ConfigError> {
    let malformed = || ConfigError::MalformedSize(raw.to_string());
    let (w, h) = raw.trim().split_once(['x', 'X']).ok_or_else(malformed)?;
    let w: f32 = w.trim().parse().map_err(|_| malformed())?;
    let h: f32 = h.trim().parse().map_err(|_| malformed())?;
    Ok(Vec2::new(w, h))
}

fn baked_size() -> Vec2 {
    let Some(raw) = option_env!("JOYSTICK_SIZE") else { return VjoyConfig::DEFAULT_SIZE; };
    parse_size(raw).unwrap_or_else(|err| {
        warn!("{err}, using {}", VjoyConfig::DEFAULT_SIZE);
        VjoyConfig::DEFAULT_SIZE
    })
}

fn baked_turn_rate() -> f32 {
    let Some(raw) = option_env!("JOYSTICK_TURN_RATE") else { return VjoyConfig::DEFAULT_TURN_RATE; };
    raw.trim().parse().unwrap_or_else(|_| {
        warn!("Malformed JOYSTICK_TURN_RATE {raw:?}, using {}", VjoyConfig::DEFAULT_TURN_RATE);
        VjoyConfig::DEFAULT_TURN_RATE
    })
}
