use crate::{
    assets::manifest::SpriteKind,
    assets::store::SceneAssets,
    foundation::core::{BLANK_ROWS, CANVAS_COLUMNS, CANVAS_WIDTH, Canvas, TILE_SIZE},
    foundation::error::{OverlookError, OverlookResult},
    foundation::math::clamp_finite,
    render::frame::FrameRGBA,
    render::post::{DEFAULT_GLITCH_PROBABILITY, PostEffect, apply_post_effect},
    scene::column::{ColumnDef, ColumnSequence},
};

/// Stack row the car sits on (the road).
const CAR_ROW: u32 = 9;

/// Inputs of a single scene render besides the frame, world and assets.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RenderParams {
    /// Horizontal scroll in pixels.
    pub progress: f64,
    pub alpha: f32,
    pub effect: PostEffect,
    /// Wall-clock time, read only by the split effects.
    pub time_ms: u64,
    pub glitch_probability: f64,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            progress: 0.0,
            alpha: 1.0,
            effect: PostEffect::None,
            time_ms: 0,
            glitch_probability: DEFAULT_GLITCH_PROBABILITY,
        }
    }
}

impl RenderParams {
    pub fn at(progress: f64) -> Self {
        Self {
            progress,
            ..Self::default()
        }
    }
}

/// First world column on screen and how far it is scrolled left, in pixels.
pub fn scroll_position(progress: f64) -> (i64, i32) {
    let progress = if progress.is_finite() { progress } else { 0.0 };
    let tile = f64::from(TILE_SIZE);
    let column = (progress / tile).floor() as i64;
    let offset = (progress.floor() as i64).rem_euclid(i64::from(TILE_SIZE)) as i32;
    (column, offset)
}

/// Car frame for a scroll position; alternates every few tiles.
pub fn car_sprite(progress: f64) -> SpriteKind {
    let (column, _) = scroll_position(progress);
    if column.rem_euclid(8) > 4 {
        SpriteKind::Car1
    } else {
        SpriteKind::Car2
    }
}

fn draw_column(frame: &mut FrameRGBA, def: &ColumnDef, assets: &SceneAssets, x: i32, alpha: f32) {
    for (row, tile) in def.tiles() {
        let y = ((row as u32 + BLANK_ROWS) * TILE_SIZE) as i32;
        frame.draw_image(assets.tiles.get(tile), x, y, alpha);
    }
}

/// Draw the visible window of `columns` and the car into `frame`.
///
/// The result depends only on the arguments; `time_ms` is read only when
/// `params.effect` is one of the split effects.
pub fn render_scene(
    frame: &mut FrameRGBA,
    columns: &ColumnSequence,
    assets: &SceneAssets,
    params: &RenderParams,
) -> OverlookResult<()> {
    if frame.canvas() != Canvas::SCENE {
        return Err(OverlookError::render(format!(
            "scene frame must be {}x{}, got {}x{}",
            Canvas::SCENE.width,
            Canvas::SCENE.height,
            frame.width,
            frame.height
        )));
    }

    frame.clear();
    let alpha = clamp_finite(f64::from(params.alpha), 0.0, 1.0) as f32;
    let (first, offset) = scroll_position(params.progress);

    for c in -1..=(CANVAS_COLUMNS as i64) {
        let Some(def) = columns.column(first.saturating_add(c)) else {
            continue;
        };
        let x = (c * i64::from(TILE_SIZE)) as i32 - offset;
        draw_column(frame, def, assets, x, alpha);
    }

    let car = assets.sprites.get(car_sprite(params.progress));
    let car_x = (CANVAS_WIDTH / 2) as i32 - 8;
    let car_y = ((BLANK_ROWS + CAR_ROW) * TILE_SIZE) as i32;
    frame.draw_image(car, car_x, car_y, alpha);

    apply_post_effect(frame, params.effect, params.time_ms, params.glitch_probability);

    tracing::trace!(
        progress = params.progress,
        alpha,
        effect = ?params.effect,
        "scene rendered"
    );
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/render/scene.rs"]
mod tests;
