use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::{
    foundation::core::{Canvas, PixelRect},
    foundation::math::{Rng64, noise_signed},
    render::composite::luma,
    render::frame::FrameRGBA,
};

/// Rate at which time-driven effects pick a new pattern.
pub const GLITCH_FPS: u64 = 25;
/// Entries in the split noise table before it repeats.
pub const SPLIT_TABLE_LEN: u64 = 256;
pub const SPLIT_MAX_X: f64 = 12.0;
pub const SPLIT_MAX_Y: f64 = 3.0;
pub const SPLIT_CURVE_EXPONENT: i32 = 3;

pub const DEFAULT_GLITCH_PROBABILITY: f64 = 0.15;
pub const GLITCH_RECTS_MIN: i32 = 2;
pub const GLITCH_RECTS_MAX: i32 = 5;
pub const GLITCH_MAX_OFFSET: i32 = 4;

const SPLIT_SEED: u64 = 0x5EED_0000_0000_0001;
const SPLIT_SEED_Y: u64 = 0x5EED_0000_0000_0002;
const RECT_SEED: u64 = 0x5EED_0000_0000_0003;

/// Post-processing mode, one per rendered frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PostEffect {
    #[default]
    None,
    Greyscale,
    RgbSplit,
    RectRgbSplit,
}

impl PostEffect {
    pub const ALL: [PostEffect; 4] = [
        PostEffect::None,
        PostEffect::Greyscale,
        PostEffect::RgbSplit,
        PostEffect::RectRgbSplit,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Mode for `index`, wrapping past the last one.
    pub fn from_index(index: usize) -> Self {
        Self::ALL[index % Self::ALL.len()]
    }

    pub fn next(self) -> Self {
        Self::from_index(self.index() + 1)
    }

    /// Whether the output depends on wall-clock time.
    pub fn is_time_driven(self) -> bool {
        matches!(self, Self::RgbSplit | Self::RectRgbSplit)
    }
}

/// Wall-clock milliseconds to a glitch frame number.
pub fn quantize_time(time_ms: u64) -> u64 {
    time_ms.saturating_mul(GLITCH_FPS) / 1000
}

/// Channel displacement: red is sampled at `+shift`, blue at `-shift`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SplitShift {
    pub dx: i32,
    pub dy: i32,
}

impl SplitShift {
    pub fn is_zero(self) -> bool {
        self.dx == 0 && self.dy == 0
    }
}

fn curve(n: f64, max: f64) -> i32 {
    (n.signum() * n.abs().powi(SPLIT_CURVE_EXPONENT) * max).round() as i32
}

/// Shift for glitch frame `frame`, read from a repeating noise table.
pub fn split_shift(frame: u64) -> SplitShift {
    let slot = frame % SPLIT_TABLE_LEN;
    SplitShift {
        dx: curve(noise_signed(SPLIT_SEED, slot), SPLIT_MAX_X),
        dy: curve(noise_signed(SPLIT_SEED_Y, slot), SPLIT_MAX_Y),
    }
}

pub fn greyscale_in_place(frame: &mut FrameRGBA) {
    for px in frame.data.chunks_exact_mut(4) {
        let l = luma([px[0], px[1], px[2], px[3]]);
        px[0] = l;
        px[1] = l;
        px[2] = l;
    }
}

/// Rebuild `frame` with red and blue taken from opposite displaced positions.
///
/// Samples outside the frame clamp to the nearest edge. Alpha is the largest alpha of
/// the three samples, which keeps every channel within premultiplied bounds.
pub fn rgb_split_in_place(frame: &mut FrameRGBA, shift: SplitShift) {
    if shift.is_zero() {
        return;
    }
    let src = frame.clone();
    let (dx, dy) = (i64::from(shift.dx), i64::from(shift.dy));
    for y in 0..frame.height {
        for x in 0..frame.width {
            let (xi, yi) = (i64::from(x), i64::from(y));
            let r = src.pixel_clamped(xi + dx, yi + dy);
            let g = src.pixel(x, y);
            let b = src.pixel_clamped(xi - dx, yi - dy);
            let a = r[3].max(g[3]).max(b[3]);
            frame.set_pixel(x, y, [r[0], g[1], b[2], a]);
        }
    }
}

/// One displaced glitch patch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GlitchRect {
    pub source: PixelRect,
    pub offset_x: i32,
    pub offset_y: i32,
    pub shift: SplitShift,
}

pub type GlitchRects = SmallVec<[GlitchRect; GLITCH_RECTS_MAX as usize]>;

/// Patches for glitch frame `frame`; empty on frames where the roll fails.
pub fn glitch_rects(canvas: Canvas, frame: u64, probability: f64) -> GlitchRects {
    let mut out = GlitchRects::new();
    if canvas.width == 0 || canvas.height == 0 {
        return out;
    }
    let mut rng = Rng64::new(RECT_SEED ^ frame.wrapping_mul(0x9E37_79B9_7F4A_7C15));
    if !rng.chance(probability) {
        return out;
    }

    let cw = canvas.width as i32;
    let ch = canvas.height as i32;
    let count = rng.range_i32(GLITCH_RECTS_MIN, GLITCH_RECTS_MAX);
    for _ in 0..count {
        let w = rng.range_i32((cw / 8).max(1), (cw / 2).max(1));
        let h = rng.range_i32(2.min(ch), (ch / 6).max(2).min(ch));
        let x = rng.range_i32(0, cw - w);
        let y = rng.range_i32(0, ch - h);
        out.push(GlitchRect {
            source: PixelRect::new(x, y, w as u32, h as u32),
            offset_x: rng.range_i32(-GLITCH_MAX_OFFSET, GLITCH_MAX_OFFSET),
            offset_y: rng.range_i32(-GLITCH_MAX_OFFSET, GLITCH_MAX_OFFSET),
            shift: SplitShift {
                dx: curve(rng.next_f64_01() * 2.0 - 1.0, SPLIT_MAX_X),
                dy: 0,
            },
        });
    }
    out
}

/// RGB-split each patch and composite it back at its offset.
pub fn rect_rgb_split_in_place(frame: &mut FrameRGBA, rects: &[GlitchRect]) {
    for rect in rects {
        let Some(source) = rect.source.clip_to(frame.canvas()) else {
            continue;
        };
        let mut patch = frame.crop(source);
        rgb_split_in_place(&mut patch, rect.shift);
        frame.draw_frame(
            &patch,
            source.x + rect.offset_x,
            source.y + rect.offset_y,
            1.0,
        );
    }
}

/// Apply `effect` to a finished frame. Time only matters for the split modes.
pub fn apply_post_effect(
    frame: &mut FrameRGBA,
    effect: PostEffect,
    time_ms: u64,
    glitch_probability: f64,
) {
    match effect {
        PostEffect::None => {}
        PostEffect::Greyscale => greyscale_in_place(frame),
        PostEffect::RgbSplit => rgb_split_in_place(frame, split_shift(quantize_time(time_ms))),
        PostEffect::RectRgbSplit => {
            let rects = glitch_rects(frame.canvas(), quantize_time(time_ms), glitch_probability);
            rect_rgb_split_in_place(frame, &rects);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/post.rs"]
mod tests;
