//! Scroll-driven door scene: the door grows in, an axe and then a face lean out of it,
//! and everything slides away.
//!
//! Stateless: every value is recomputed from the scroll percentage.

use serde::{Deserialize, Serialize};

use crate::foundation::math::{clamp_finite, lerp};

/// Timeline units the percentage is stretched over; each stage but `Exit` takes two.
const TIMELINE_UNITS: f64 = 7.0;
/// Below/above these percentages the whole scene is hidden.
const HIDE_BELOW: f64 = 0.01;
const HIDE_ABOVE: f64 = 0.99;

const MAX_DOOR_SIZE_EM: f64 = 9.0;
const AXE_PEAK_EM: f64 = 3.5;
const AXE_PEAK_DURING_FACE_EM: f64 = 5.0;
const FACE_PEAK_EM: f64 = 3.5;

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum DoorStage {
    Door,
    Axe,
    Face,
    Exit,
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct StageProgress {
    pub stage: DoorStage,
    /// Progress within `stage`, in `[0, 1]`.
    pub relative: f64,
}

/// Map a scroll percentage onto its stage and the progress inside that stage.
pub fn stage_and_relative_progress(p: f64) -> StageProgress {
    let n = clamp_finite(p, 0.0, 1.0) * TIMELINE_UNITS;
    let (stage, relative) = if n < 2.0 {
        (DoorStage::Door, n / 2.0)
    } else if n < 4.0 {
        (DoorStage::Axe, (n - 2.0) / 2.0)
    } else if n < 6.0 {
        (DoorStage::Face, (n - 4.0) / 2.0)
    } else {
        (DoorStage::Exit, n - (TIMELINE_UNITS - 1.0))
    };
    StageProgress {
        stage,
        relative: relative.clamp(0.0, 1.0),
    }
}

/// Everything the host needs to place the door, axe and face icons.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DoorLayout {
    pub stage: StageProgress,
    /// Shared vertical offset, in percent of the viewport height.
    pub bottom_offset_pc: f64,
    pub door_size_em: f64,
    pub axe_offset_em: f64,
    pub face_offset_em: f64,
    pub show_axe: bool,
    pub show_face: bool,
}

/// Ramp up over the first third, hold, ramp down over the last third.
fn triangular(relative: f64, peak: f64) -> f64 {
    if relative <= 1.0 / 3.0 {
        relative * 3.0 * peak
    } else if relative <= 2.0 / 3.0 {
        peak
    } else {
        (1.0 - relative) * 3.0 * peak
    }
}

fn bottom_offset_and_door_size(p: StageProgress) -> (f64, f64) {
    match p.stage {
        DoorStage::Door => (
            lerp(-10.0, 45.0, p.relative),
            lerp(0.0, MAX_DOOR_SIZE_EM, p.relative),
        ),
        DoorStage::Exit => (lerp(45.0, 100.0, p.relative), MAX_DOOR_SIZE_EM),
        DoorStage::Axe | DoorStage::Face => (45.0, MAX_DOOR_SIZE_EM),
    }
}

fn axe_offset(p: StageProgress) -> f64 {
    match p.stage {
        DoorStage::Axe => triangular(p.relative, AXE_PEAK_EM),
        DoorStage::Face => triangular(p.relative, AXE_PEAK_DURING_FACE_EM),
        _ => 0.0,
    }
}

fn face_offset(p: StageProgress) -> f64 {
    match p.stage {
        DoorStage::Face => triangular(p.relative, FACE_PEAK_EM),
        _ => 0.0,
    }
}

/// Layout for scroll percentage `p`, or `None` while the section is at either edge.
pub fn door_layout(p: f64) -> Option<DoorLayout> {
    if p.is_nan() || p <= HIDE_BELOW || p >= HIDE_ABOVE {
        return None;
    }

    let stage = stage_and_relative_progress(p);
    let (bottom_offset_pc, door_size_em) = bottom_offset_and_door_size(stage);
    Some(DoorLayout {
        stage,
        bottom_offset_pc,
        door_size_em,
        axe_offset_em: axe_offset(stage),
        face_offset_em: face_offset(stage),
        show_axe: stage.stage >= DoorStage::Axe,
        show_face: stage.stage >= DoorStage::Face,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/scene/door.rs"]
mod tests;
