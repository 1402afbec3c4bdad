use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{OverlookError, OverlookResult},
    render::post::{DEFAULT_GLITCH_PROBABILITY, PostEffect},
};

/// Tunables of the driving scene. Every field has a default, so `{}` is a valid config.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    /// Pixels per second at start-up.
    pub initial_speed: f64,
    pub min_speed: f64,
    pub max_speed: f64,
    /// Simulation ticks per second.
    pub tick_hz: u32,
    /// Display frames per second.
    pub frame_hz: u32,
    /// Pixels the car waits at the hotel before the fade starts.
    pub stop_length: f64,
    /// Pixels over which each fade runs.
    pub fade_length: f64,
    pub glitch_probability: f64,
    pub initial_effect: PostEffect,
    pub start_moving: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            initial_speed: 10.0,
            min_speed: 5.0,
            max_speed: 100.0,
            tick_hz: 25,
            frame_hz: 60,
            stop_length: 96.0,
            fade_length: 48.0,
            glitch_probability: DEFAULT_GLITCH_PROBABILITY,
            initial_effect: PostEffect::None,
            start_moving: true,
        }
    }
}

impl SceneConfig {
    pub fn from_json(json: &str) -> OverlookResult<Self> {
        let cfg: SceneConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    pub fn validate(&self) -> OverlookResult<()> {
        let finite = [
            ("initial_speed", self.initial_speed),
            ("min_speed", self.min_speed),
            ("max_speed", self.max_speed),
            ("stop_length", self.stop_length),
            ("fade_length", self.fade_length),
            ("glitch_probability", self.glitch_probability),
        ];
        for (name, v) in finite {
            if !v.is_finite() {
                return Err(OverlookError::validation(format!("{name} must be finite")));
            }
        }
        if self.min_speed < 0.0 || self.min_speed > self.max_speed {
            return Err(OverlookError::validation(
                "speed range must satisfy 0 <= min_speed <= max_speed",
            ));
        }
        if self.tick_hz == 0 || self.frame_hz == 0 {
            return Err(OverlookError::validation("tick_hz and frame_hz must be > 0"));
        }
        if self.stop_length < 0.0 {
            return Err(OverlookError::validation("stop_length must be >= 0"));
        }
        if self.fade_length <= 0.0 {
            return Err(OverlookError::validation("fade_length must be > 0"));
        }
        if !(0.0..=1.0).contains(&self.glitch_probability) {
            return Err(OverlookError::validation(
                "glitch_probability must be within [0, 1]",
            ));
        }
        Ok(())
    }

    pub fn tick_period_ms(&self) -> u64 {
        (1000 / u64::from(self.tick_hz.max(1))).max(1)
    }

    pub fn frame_period_ms(&self) -> u64 {
        (1000 / u64::from(self.frame_hz.max(1))).max(1)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/config.rs"]
mod tests;
