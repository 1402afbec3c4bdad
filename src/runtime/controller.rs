use serde::{Deserialize, Serialize};

use crate::{
    foundation::error::{OverlookError, OverlookResult},
    foundation::math::clamp_finite,
    render::post::PostEffect,
    runtime::config::SceneConfig,
};

/// Where the drive is within one loop of the scene.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DriveStage {
    Main,
    Hotel,
    FadeOut,
    FadeIn,
}

/// Stage thresholds of one loop, in pixels of scroll.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneTimeline {
    pub distance_to_hotel: f64,
    pub stop_length: f64,
    pub fade_length: f64,
}

impl SceneTimeline {
    pub fn new(distance_to_hotel: f64, stop_length: f64, fade_length: f64) -> OverlookResult<Self> {
        if !(distance_to_hotel.is_finite() && distance_to_hotel > 0.0) {
            return Err(OverlookError::validation("distance_to_hotel must be > 0"));
        }
        if !(stop_length.is_finite() && stop_length >= 0.0) {
            return Err(OverlookError::validation("stop_length must be >= 0"));
        }
        if !(fade_length.is_finite() && fade_length > 0.0) {
            return Err(OverlookError::validation("fade_length must be > 0"));
        }
        Ok(Self {
            distance_to_hotel,
            stop_length,
            fade_length,
        })
    }

    /// Raw progress at which the end-of-scene notification fires.
    pub fn total_scene_length(&self) -> f64 {
        self.distance_to_hotel + self.stop_length + self.fade_length
    }

    pub fn cycle_length(&self) -> f64 {
        self.total_scene_length() + self.fade_length
    }
}

/// What the render loop needs from the controller.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SceneSnapshot {
    /// Scroll to draw at; pinned while stopped or fading.
    pub progress: f64,
    pub alpha: f32,
    pub stage: DriveStage,
}

/// Map raw loop progress to render progress, opacity and stage.
pub fn calculate_progress_alpha_and_stage(progress: f64, timeline: &SceneTimeline) -> SceneSnapshot {
    let p = if progress.is_finite() {
        progress.rem_euclid(timeline.cycle_length())
    } else {
        0.0
    };
    let d = timeline.distance_to_hotel;
    let hotel_end = d + timeline.stop_length;
    let fade_out_end = timeline.total_scene_length();

    if p < d {
        SceneSnapshot {
            progress: p,
            alpha: 1.0,
            stage: DriveStage::Main,
        }
    } else if p < hotel_end {
        SceneSnapshot {
            progress: d,
            alpha: 1.0,
            stage: DriveStage::Hotel,
        }
    } else if p < fade_out_end {
        let t = (p - hotel_end) / timeline.fade_length;
        SceneSnapshot {
            progress: d,
            alpha: clamp_finite(1.0 - t, 0.0, 1.0) as f32,
            stage: DriveStage::FadeOut,
        }
    } else {
        let t = (p - fade_out_end) / timeline.fade_length;
        SceneSnapshot {
            progress: 0.0,
            alpha: clamp_finite(t, 0.0, 1.0) as f32,
            stage: DriveStage::FadeIn,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickOutcome {
    /// Raw progress crossed the end of the scene during this tick.
    pub scene_completed: bool,
}

/// Time-driven scroll state of the driving scene.
#[derive(Clone, Debug)]
pub struct ProgressController {
    timeline: SceneTimeline,
    progress: f64,
    last_update_ms: u64,
    moving: bool,
    speed: f64,
    min_speed: f64,
    max_speed: f64,
    effect: PostEffect,
    stage: DriveStage,
}

impl ProgressController {
    pub fn new(timeline: SceneTimeline, config: &SceneConfig, now_ms: u64) -> Self {
        Self {
            timeline,
            progress: 0.0,
            last_update_ms: now_ms,
            moving: config.start_moving,
            speed: config.initial_speed,
            min_speed: config.min_speed,
            max_speed: config.max_speed,
            effect: config.initial_effect,
            stage: DriveStage::Main,
        }
    }

    pub fn timeline(&self) -> &SceneTimeline {
        &self.timeline
    }

    /// Raw loop progress in `[0, cycle_length)`.
    pub fn progress(&self) -> f64 {
        self.progress
    }

    pub fn is_moving(&self) -> bool {
        self.moving
    }

    pub fn speed(&self) -> f64 {
        self.speed
    }

    pub fn effective_speed(&self) -> f64 {
        clamp_finite(self.speed, self.min_speed, self.max_speed)
    }

    pub fn effect(&self) -> PostEffect {
        self.effect
    }

    pub fn last_update_ms(&self) -> u64 {
        self.last_update_ms
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        calculate_progress_alpha_and_stage(self.progress, &self.timeline)
    }

    /// Advance by the time elapsed since the previous tick.
    pub fn tick(&mut self, now_ms: u64) -> TickOutcome {
        let elapsed_ms = now_ms.saturating_sub(self.last_update_ms);
        self.last_update_ms = now_ms;
        if !self.moving {
            return TickOutcome::default();
        }

        let delta = self.effective_speed() * (elapsed_ms as f64) * 0.001;
        let total = self.timeline.total_scene_length();
        let cycle = self.timeline.cycle_length();
        let raw = self.progress + delta;

        // Crossings of `total` over the unwrapped interval (progress, raw].
        let before = ((self.progress - total) / cycle).floor();
        let after = ((raw - total) / cycle).floor();
        let crossings = (after - before).max(0.0) as u64;

        self.progress = raw.rem_euclid(cycle);
        self.note_stage();

        if crossings > 0 {
            tracing::debug!(crossings, progress = self.progress, "scene completed");
        }
        TickOutcome {
            scene_completed: crossings > 0,
        }
    }

    fn note_stage(&mut self) {
        let stage = self.snapshot().stage;
        if stage != self.stage {
            tracing::debug!(from = ?self.stage, to = ?stage, "drive stage changed");
            self.stage = stage;
        }
    }

    pub fn speed_down(&mut self) {
        self.speed -= 1.0;
    }

    pub fn speed_up(&mut self) {
        self.speed += 1.0;
    }

    pub fn toggle_moving(&mut self) -> bool {
        self.moving = !self.moving;
        self.moving
    }

    pub fn set_moving(&mut self, moving: bool) {
        self.moving = moving;
    }

    pub fn cycle_effect(&mut self) -> PostEffect {
        self.effect = self.effect.next();
        self.effect
    }

    pub fn set_effect(&mut self, effect: PostEffect) {
        self.effect = effect;
    }

    /// Jump to `digit / 9` of the way to the hotel. Never reports a completed scene.
    pub fn jump_to_digit(&mut self, digit: u8) -> OverlookResult<()> {
        if digit > 9 {
            return Err(OverlookError::validation(format!(
                "digit must be 0..=9, got {digit}"
            )));
        }
        self.progress = f64::from(digit) * self.timeline.distance_to_hotel / 9.0;
        self.note_stage();
        Ok(())
    }

    /// Place the raw progress directly, wrapped into one loop.
    pub fn set_progress(&mut self, progress: f64) {
        self.progress = if progress.is_finite() {
            progress.rem_euclid(self.timeline.cycle_length())
        } else {
            0.0
        };
        self.note_stage();
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/controller.rs"]
mod tests;
