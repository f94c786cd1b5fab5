use crate::constants::*;
use std::str::FromStr;
use std::time::Duration;
use thiserror::Error;

/// Errors raised while building or overriding [`FieldParams`].
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("particle count must be at least 1")]
    ZeroParticles,

    #[error("trail length must be at least 1")]
    ZeroTrail,

    #[error("{name} {value} exceeds the limit of {max}")]
    TooLarge {
        name: &'static str,
        value: usize,
        max: usize,
    },

    #[error("{name} must be a positive finite number, got {value}")]
    NotPositive { name: &'static str, value: f32 },

    #[error("repel radius {repel} must be smaller than pointer radius {pointer}")]
    RepelOutsidePointer { repel: f32, pointer: f32 },

    #[error("{name} must lie in [0, 1], got {value}")]
    OutOfUnitRange { name: &'static str, value: f64 },

    #[error("unknown setting `{0}`")]
    UnknownKey(String),

    #[error("invalid value `{value}` for `{key}`")]
    InvalidValue { key: String, value: String },

    #[error("unknown time step `{0}`, expected `per-frame` or `wall-clock`")]
    UnknownTimeStep(String),
}

/// How far the simulation moves per rendered frame.
///
/// `PerFrame` advances every particle by one unit step per frame, so the
/// animation runs faster on high refresh-rate displays. `WallClock` scales
/// the step by measured frame time against [`REFERENCE_FPS`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum TimeStep {
    #[default]
    PerFrame,
    WallClock,
}

impl TimeStep {
    /// Step length in reference frames for a frame that took `elapsed`.
    pub fn frame_delta(self, elapsed: Duration) -> f32 {
        match self {
            TimeStep::PerFrame => 1.0,
            TimeStep::WallClock => {
                (elapsed.as_secs_f32() * REFERENCE_FPS).clamp(0.0, MAX_FRAME_STEP)
            }
        }
    }
}

impl FromStr for TimeStep {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "per-frame" | "frame" => Ok(TimeStep::PerFrame),
            "wall-clock" | "wallclock" | "time" => Ok(TimeStep::WallClock),
            other => Err(ConfigError::UnknownTimeStep(other.to_string())),
        }
    }
}

/// Keys accepted by [`FieldParams::apply_override`].
pub const OVERRIDE_KEYS: &[&str] = &[
    "particle-count",
    "connect-distance",
    "max-trail",
    "max-speed",
    "pointer-radius",
    "repel-radius",
    "time-step",
];

#[derive(Clone, Debug, PartialEq)]
pub struct FieldParams {
    pub particle_count: usize,
    pub connect_distance: f32,
    pub max_trail: usize,
    pub pointer_radius: f32,
    pub repel_radius: f32,
    pub attract_strength: f32,
    pub repel_strength: f32,
    pub pointer_alpha_boost: f32,
    pub max_alpha: f32,
    pub max_speed: f32,
    pub bounce_damping: f32,
    pub hue_flip_chance: f64,
    pub spawn_speed: f32,
    pub time_step: TimeStep,
    pub grid_threshold: usize,
}

impl Default for FieldParams {
    fn default() -> Self {
        Self {
            particle_count: PARTICLE_COUNT,
            connect_distance: CONNECT_DISTANCE,
            max_trail: MAX_TRAIL,
            pointer_radius: POINTER_RADIUS,
            repel_radius: REPEL_RADIUS,
            attract_strength: ATTRACT_STRENGTH,
            repel_strength: REPEL_STRENGTH,
            pointer_alpha_boost: POINTER_ALPHA_BOOST,
            max_alpha: MAX_ALPHA,
            max_speed: MAX_SPEED,
            bounce_damping: BOUNCE_DAMPING,
            hue_flip_chance: HUE_FLIP_CHANCE,
            spawn_speed: SPAWN_SPEED,
            time_step: TimeStep::PerFrame,
            grid_threshold: GRID_THRESHOLD,
        }
    }
}

fn positive(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::NotPositive { name, value })
    }
}

fn at_most(name: &'static str, value: usize, max: usize) -> Result<(), ConfigError> {
    if value <= max {
        Ok(())
    } else {
        Err(ConfigError::TooLarge { name, value, max })
    }
}

fn unit(name: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfUnitRange { name, value })
    }
}

impl FieldParams {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.particle_count == 0 {
            return Err(ConfigError::ZeroParticles);
        }
        if self.max_trail == 0 {
            return Err(ConfigError::ZeroTrail);
        }
        at_most("particle count", self.particle_count, PARTICLE_COUNT_LIMIT)?;
        at_most("trail length", self.max_trail, MAX_TRAIL_LIMIT)?;
        positive("connect distance", self.connect_distance)?;
        positive("pointer radius", self.pointer_radius)?;
        positive("repel radius", self.repel_radius)?;
        positive("attract strength", self.attract_strength)?;
        positive("repel strength", self.repel_strength)?;
        positive("max speed", self.max_speed)?;
        positive("spawn speed", self.spawn_speed)?;
        if self.repel_radius >= self.pointer_radius {
            return Err(ConfigError::RepelOutsidePointer {
                repel: self.repel_radius,
                pointer: self.pointer_radius,
            });
        }
        unit("bounce damping", self.bounce_damping as f64)?;
        unit("max alpha", self.max_alpha as f64)?;
        unit("pointer alpha boost", self.pointer_alpha_boost as f64)?;
        unit("hue flip chance", self.hue_flip_chance)?;
        Ok(())
    }

    /// Apply a single `key = value` override without validating the result.
    pub fn apply_override(&mut self, key: &str, value: &str) -> Result<(), ConfigError> {
        let invalid = || ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        };
        let value = value.trim();
        match key {
            "particle-count" => self.particle_count = value.parse().map_err(|_| invalid())?,
            "connect-distance" => self.connect_distance = value.parse().map_err(|_| invalid())?,
            "max-trail" => self.max_trail = value.parse().map_err(|_| invalid())?,
            "max-speed" => self.max_speed = value.parse().map_err(|_| invalid())?,
            "pointer-radius" => self.pointer_radius = value.parse().map_err(|_| invalid())?,
            "repel-radius" => self.repel_radius = value.parse().map_err(|_| invalid())?,
            "time-step" => self.time_step = value.parse()?,
            _ => return Err(ConfigError::UnknownKey(key.to_string())),
        }
        Ok(())
    }

    /// Apply overrides one at a time, keeping only those that leave the
    /// parameters valid. Rejected overrides are returned alongside.
    pub fn with_overrides<'a, I>(self, overrides: I) -> (Self, Vec<ConfigError>)
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut params = self;
        let mut rejected = Vec::new();
        for (key, value) in overrides {
            let mut candidate = params.clone();
            match candidate
                .apply_override(key, value)
                .and_then(|_| candidate.validate())
            {
                Ok(()) => params = candidate,
                Err(e) => rejected.push(e),
            }
        }
        (params, rejected)
    }
}
