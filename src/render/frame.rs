use crate::{
    assets::decode::{PreparedImage, unpremultiply_rgba8_in_place},
    foundation::core::{Canvas, PixelRect},
    foundation::error::{OverlookError, OverlookResult},
    render::composite::over,
};

/// A premultiplied RGBA8 raster the scene renders into.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FrameRGBA {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl FrameRGBA {
    pub fn new(canvas: Canvas) -> Self {
        Self {
            width: canvas.width,
            height: canvas.height,
            data: vec![0; canvas.byte_len()],
        }
    }

    pub fn from_raw(width: u32, height: u32, data: Vec<u8>) -> OverlookResult<Self> {
        let canvas = Canvas { width, height };
        if data.len() != canvas.byte_len() {
            return Err(OverlookError::render(format!(
                "frame data is {} bytes, expected {} for {width}x{height}",
                data.len(),
                canvas.byte_len()
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    pub fn canvas(&self) -> Canvas {
        Canvas {
            width: self.width,
            height: self.height,
        }
    }

    pub fn clear(&mut self) {
        self.data.fill(0);
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        ((y as usize) * (self.width as usize) + (x as usize)) * 4
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn set_pixel(&mut self, x: u32, y: u32, px: [u8; 4]) {
        let i = self.offset(x, y);
        self.data[i..i + 4].copy_from_slice(&px);
    }

    /// Pixel at a possibly out-of-bounds position, clamped to the nearest edge.
    pub fn pixel_clamped(&self, x: i64, y: i64) -> [u8; 4] {
        let x = x.clamp(0, i64::from(self.width) - 1) as u32;
        let y = y.clamp(0, i64::from(self.height) - 1) as u32;
        self.pixel(x, y)
    }

    /// Draw `image` at its native size with its top-left corner at (`x`, `y`).
    pub fn draw_image(&mut self, image: &PreparedImage, x: i32, y: i32, opacity: f32) {
        let dst = PixelRect::new(x, y, image.width, image.height);
        let Some(clip) = dst.clip_to(self.canvas()) else {
            return;
        };
        for row in 0..clip.height {
            let dy = clip.y as u32 + row;
            let sy = (i64::from(dy) - i64::from(y)) as u32;
            for col in 0..clip.width {
                let dx = clip.x as u32 + col;
                let sx = (i64::from(dx) - i64::from(x)) as u32;
                let src = image.pixel(sx, sy);
                let out = over(self.pixel(dx, dy), src, opacity);
                self.set_pixel(dx, dy, out);
            }
        }
    }

    /// Copy of the pixels under `rect` (already clipped to this frame).
    pub fn crop(&self, rect: PixelRect) -> FrameRGBA {
        let mut out = FrameRGBA::new(Canvas {
            width: rect.width,
            height: rect.height,
        });
        for row in 0..rect.height {
            let start = self.offset(rect.x as u32, rect.y as u32 + row);
            let len = rect.width as usize * 4;
            let dst = out.offset(0, row);
            out.data[dst..dst + len].copy_from_slice(&self.data[start..start + len]);
        }
        out
    }

    /// Composite another frame over this one at (`x`, `y`).
    pub fn draw_frame(&mut self, src: &FrameRGBA, x: i32, y: i32, opacity: f32) {
        let image = PreparedImage {
            width: src.width,
            height: src.height,
            rgba8_premul: std::sync::Arc::new(src.data.clone()),
        };
        self.draw_image(&image, x, y, opacity);
    }

    /// Stable content hash, used to compare renders.
    pub fn fingerprint(&self) -> u64 {
        let mut h = xxhash_rust::xxh3::Xxh3::new();
        h.update(&self.width.to_le_bytes());
        h.update(&self.height.to_le_bytes());
        h.update(&self.data);
        h.digest()
    }

    /// Straight-alpha RGBA8, the layout PNG encoders expect.
    pub fn to_straight_rgba(&self) -> Vec<u8> {
        let mut out = self.data.clone();
        unpremultiply_rgba8_in_place(&mut out);
        out
    }
}

#[cfg(test)]
#[path = "../../tests/unit/render/frame.rs"]
mod tests;
