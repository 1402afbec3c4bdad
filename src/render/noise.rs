//! Pre-generated static noise, cycled like an untuned TV.

use crate::{
    foundation::core::Canvas,
    foundation::error::{OverlookError, OverlookResult},
    foundation::math::Rng64,
    render::frame::FrameRGBA,
};

pub const NOISE_FRAME_COUNT: usize = 10;
pub const NOISE_FPS: u64 = 25;
/// Share of pixels lit in each frame.
pub const NOISE_DENSITY: f64 = 0.3;
pub const NOISE_PIXEL: [u8; 4] = [0x22, 0x22, 0x22, 0xff];

#[derive(Clone, Debug)]
pub struct NoiseFrames {
    frames: Vec<FrameRGBA>,
}

impl NoiseFrames {
    pub fn generate(canvas: Canvas, count: usize, seed: u64) -> OverlookResult<Self> {
        if count == 0 {
            return Err(OverlookError::validation("noise needs at least one frame"));
        }
        let mut rng = Rng64::new(seed);
        let frames = (0..count)
            .map(|_| {
                let mut frame = FrameRGBA::new(canvas);
                for px in frame.data.chunks_exact_mut(4) {
                    if rng.chance(NOISE_DENSITY) {
                        px.copy_from_slice(&NOISE_PIXEL);
                    }
                }
                frame
            })
            .collect();
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FrameRGBA] {
        &self.frames
    }

    pub fn index_at(&self, elapsed_ms: u64) -> usize {
        let tick = elapsed_ms.saturating_mul(NOISE_FPS) / 1000;
        (tick % self.frames.len() as u64) as usize
    }

    /// Frame showing `elapsed_ms` after the noise started.
    pub fn frame_at(&self, elapsed_ms: u64) -> &FrameRGBA {
        &self.frames[self.index_at(elapsed_ms)]
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/noise.rs"]
mod tests;
