use serde::{Deserialize, Serialize};

/// Edge length of one terrain tile in pixels.
pub const TILE_SIZE: u32 = 16;
/// Empty rows above the scene that vertically centre it under the parallax layers.
pub const BLANK_ROWS: u32 = 4;
/// Cell slots above the road in every column.
pub const ABOVE_ROAD_ROWS: usize = 9;
/// Cell slots below the road in every column.
pub const BELOW_ROAD_ROWS: usize = 8;
/// Rows in one column stack: above cells, the road, below cells.
pub const COLUMN_ROWS: usize = ABOVE_ROAD_ROWS + 1 + BELOW_ROAD_ROWS;
/// Tile columns across the visible canvas.
pub const CANVAS_COLUMNS: u32 = 40;

pub const CANVAS_WIDTH: u32 = CANVAS_COLUMNS * TILE_SIZE;
pub const CANVAS_HEIGHT: u32 = (BLANK_ROWS + COLUMN_ROWS as u32) * TILE_SIZE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    /// The fixed driving-scene surface.
    pub const SCENE: Canvas = Canvas {
        width: CANVAS_WIDTH,
        height: CANVAS_HEIGHT,
    };

    pub fn pixel_count(self) -> usize {
        (self.width as usize) * (self.height as usize)
    }

    pub fn byte_len(self) -> usize {
        self.pixel_count() * 4
    }
}

/// Integer pixel rectangle, `x`/`y` may be negative for partially off-screen regions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

impl PixelRect {
    pub fn new(x: i32, y: i32, width: u32, height: u32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Intersect with a `canvas`-sized surface anchored at the origin.
    pub fn clip_to(self, canvas: Canvas) -> Option<PixelRect> {
        let x0 = i64::from(self.x).max(0);
        let y0 = i64::from(self.y).max(0);
        let x1 = (i64::from(self.x) + i64::from(self.width)).min(i64::from(canvas.width));
        let y1 = (i64::from(self.y) + i64::from(self.height)).min(i64::from(canvas.height));
        if x1 <= x0 || y1 <= y0 {
            return None;
        }
        Some(PixelRect {
            x: x0 as i32,
            y: y0 as i32,
            width: (x1 - x0) as u32,
            height: (y1 - y0) as u32,
        })
    }
}
