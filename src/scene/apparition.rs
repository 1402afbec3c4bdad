use crate::{foundation::math::Rng64, scene::viewport::ViewportBounds};

/// How long an apparition stays on screen once shown.
pub const APPARITION_HOLD_MS: u64 = 700;
/// Period of the host's background poll.
pub const APPARITION_POLL_MS: u64 = 100;
const RANDOM_SHOW_PROBABILITY: f64 = 0.01;
const BAND_FROM: f64 = 0.2;
const BAND_TO: f64 = 0.8;

/// What caused an update.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UpdateTrigger {
    /// A scroll event; may roll for a random reappearance.
    Scroll,
    /// The periodic poll; only expires a visible apparition.
    Poll,
}

/// Show/hide machine for the twin apparition in the hallway section.
///
/// It appears the first time its anchor crosses the viewport centre, vanishes after
/// [`APPARITION_HOLD_MS`], and afterwards reappears at random while the user scrolls
/// within the band.
#[derive(Clone, Debug)]
pub struct Apparition {
    shown: bool,
    displayed_once: bool,
    last_changed_ms: u64,
    rng: Rng64,
}

impl Apparition {
    pub fn new(seed: u64, now_ms: u64) -> Self {
        Self {
            shown: false,
            displayed_once: false,
            last_changed_ms: now_ms,
            rng: Rng64::new(seed),
        }
    }

    pub fn is_shown(&self) -> bool {
        self.shown
    }

    fn set(&mut self, shown: bool, now_ms: u64) {
        if self.shown != shown {
            self.shown = shown;
            self.last_changed_ms = now_ms;
            tracing::trace!(shown, now_ms, "apparition toggled");
        }
    }

    /// Advance the machine and return whether the apparition is visible.
    pub fn update(&mut self, bounds: ViewportBounds, now_ms: u64, trigger: UpdateTrigger) -> bool {
        if !bounds.top_within_band(BAND_FROM, BAND_TO) {
            self.set(false, now_ms);
        } else if !self.displayed_once {
            if bounds.passed_centre() {
                self.set(true, now_ms);
                self.displayed_once = true;
            }
        } else if self.shown {
            if now_ms.saturating_sub(self.last_changed_ms) > APPARITION_HOLD_MS {
                self.set(false, now_ms);
            }
        } else if trigger == UpdateTrigger::Scroll {
            let show = self.rng.chance(RANDOM_SHOW_PROBABILITY);
            self.set(show, now_ms);
        }
        self.shown
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/apparition.rs"]
mod tests;
