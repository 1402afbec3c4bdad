use std::sync::Arc;

use smallvec::SmallVec;

use crate::{
    assets::store::{AssetState, SceneAssets},
    foundation::core::Canvas,
    foundation::error::OverlookResult,
    render::frame::FrameRGBA,
    render::scene::{RenderParams, render_scene},
    runtime::config::SceneConfig,
    runtime::controller::{ProgressController, SceneSnapshot, SceneTimeline, TickOutcome},
    runtime::input::{KeyEvent, KeyResponse, handle_key},
    runtime::schedule::FixedRate,
    scene::column::ColumnSequence,
    scene::viewport::ViewportBounds,
};

/// Something that happened during one [`SceneSession::pump`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum LoopEvent {
    Tick(TickOutcome),
    /// A frame was drawn from this snapshot.
    Frame(SceneSnapshot),
    SceneCompleted,
}

pub type LoopEvents = SmallVec<[LoopEvent; 3]>;

/// A running driving scene: simulation ticks and display frames on separate schedules.
///
/// Dropping the session ends both loops.
#[derive(Debug)]
pub struct SceneSession {
    config: SceneConfig,
    columns: ColumnSequence,
    assets: AssetState,
    controller: ProgressController,
    tick: FixedRate,
    display: FixedRate,
    frame: FrameRGBA,
    frames_drawn: u64,
}

impl SceneSession {
    /// A session with no assets yet; it ticks but draws nothing until [`Self::set_assets`].
    pub fn new(config: SceneConfig, now_ms: u64) -> OverlookResult<Self> {
        config.validate()?;
        let columns = ColumnSequence::authored()?;
        let timeline = SceneTimeline::new(
            columns.distance_to_hotel(),
            config.stop_length,
            config.fade_length,
        )?;
        let controller = ProgressController::new(timeline, &config, now_ms);
        let tick = FixedRate::new(config.tick_period_ms(), now_ms);
        let frame_rate = FixedRate::new(config.frame_period_ms(), now_ms);
        tracing::debug!(
            distance_to_hotel = timeline.distance_to_hotel,
            tick_ms = tick.period_ms(),
            frame_ms = frame_rate.period_ms(),
            "scene session started"
        );
        Ok(Self {
            config,
            columns,
            assets: AssetState::Pending,
            controller,
            tick,
            display: frame_rate,
            frame: FrameRGBA::new(Canvas::SCENE),
            frames_drawn: 0,
        })
    }

    /// Hand over decoded assets. The column layout is checked against the real image sizes.
    pub fn set_assets(&mut self, assets: Arc<SceneAssets>) -> OverlookResult<()> {
        self.columns.validate_spans(&assets.tiles)?;
        self.assets = AssetState::Ready(assets);
        tracing::debug!("scene assets ready");
        Ok(())
    }

    pub fn assets(&self) -> &AssetState {
        &self.assets
    }

    pub fn config(&self) -> &SceneConfig {
        &self.config
    }

    pub fn columns(&self) -> &ColumnSequence {
        &self.columns
    }

    pub fn controller(&self) -> &ProgressController {
        &self.controller
    }

    pub fn controller_mut(&mut self) -> &mut ProgressController {
        &mut self.controller
    }

    /// The most recently drawn frame.
    pub fn frame(&self) -> &FrameRGBA {
        &self.frame
    }

    pub fn frames_drawn(&self) -> u64 {
        self.frames_drawn
    }

    pub fn handle_key(&mut self, event: KeyEvent, bounds: ViewportBounds) -> KeyResponse {
        handle_key(&mut self.controller, event, bounds)
    }

    /// Run whichever loops are due at `now_ms`: the tick first, then the frame.
    pub fn pump(&mut self, now_ms: u64) -> OverlookResult<LoopEvents> {
        let mut events = LoopEvents::new();

        if self.tick.poll(now_ms) {
            let outcome = self.controller.tick(now_ms);
            events.push(LoopEvent::Tick(outcome));
            if outcome.scene_completed {
                events.push(LoopEvent::SceneCompleted);
            }
        }

        if self.display.poll(now_ms)
            && let Some(snapshot) = self.draw(now_ms)?
        {
            events.push(LoopEvent::Frame(snapshot));
        }

        Ok(events)
    }

    /// Draw the latest controller state; `None` while assets are pending.
    pub fn draw(&mut self, now_ms: u64) -> OverlookResult<Option<SceneSnapshot>> {
        let Some(assets) = self.assets.ready() else {
            return Ok(None);
        };
        let snapshot = self.controller.snapshot();
        let params = RenderParams {
            progress: snapshot.progress,
            alpha: snapshot.alpha,
            effect: self.controller.effect(),
            time_ms: now_ms,
            glitch_probability: self.config.glitch_probability,
        };
        render_scene(&mut self.frame, &self.columns, assets, &params)?;
        self.frames_drawn += 1;
        Ok(Some(snapshot))
    }
}

impl Drop for SceneSession {
    fn drop(&mut self) {
        tracing::debug!(frames = self.frames_drawn, "scene session torn down");
    }
}

#[cfg(test)]
#[path = "../../tests/unit/runtime/session.rs"]
mod tests;
