use serde::{Deserialize, Serialize};

/// Vertical placement of an element relative to the viewport, in CSS pixels.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    pub top: f64,
    pub bottom: f64,
    pub viewport_height: f64,
}

impl ViewportBounds {
    pub fn new(top: f64, bottom: f64, viewport_height: f64) -> Self {
        Self {
            top,
            bottom,
            viewport_height,
        }
    }

    /// Any part of the element is on screen.
    pub fn is_within_y_range(&self) -> bool {
        self.bottom > 0.0 && self.top < self.viewport_height
    }

    /// The element's top edge lies between `from` and `to` (fractions of the viewport).
    pub fn top_within_band(&self, from: f64, to: f64) -> bool {
        self.top >= self.viewport_height * from && self.top <= self.viewport_height * to
    }

    /// The element's centre has scrolled above the viewport's centre.
    pub fn passed_centre(&self) -> bool {
        let centre = (self.top + self.bottom) * 0.5;
        let window_centre = self.viewport_height * 0.5;
        window_centre > 0.0 && centre < window_centre
    }
}

/// Change reported by [`YRangeWatcher::observe`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum YRangeChange {
    Entered,
    Left,
}

/// Edge detector over [`ViewportBounds::is_within_y_range`].
///
/// Starts outside the viewport, so the first on-screen observation reports `Entered`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct YRangeWatcher {
    in_range: bool,
}

impl YRangeWatcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn in_range(&self) -> bool {
        self.in_range
    }

    /// Record the latest bounds; `Some` only when visibility flipped.
    pub fn observe(&mut self, bounds: ViewportBounds) -> Option<YRangeChange> {
        let now = bounds.is_within_y_range();
        if now == self.in_range {
            return None;
        }
        self.in_range = now;
        Some(if now {
            YRangeChange::Entered
        } else {
            YRangeChange::Left
        })
    }
}
