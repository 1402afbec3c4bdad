//! Overlook renders the tile-based driving scene of a scroll-driven story page.
//!
//! The crate is organised leaf-first:
//!
//! - [`assets`]: decode the tile and car sprite bundle ([`load_scene_assets`])
//! - [`scene`]: the authored column strip ([`ColumnSequence`]) plus the door and
//!   apparition state machines
//! - [`render`]: draw a progress value into a [`FrameRGBA`] with optional post effects
//! - [`runtime`]: the [`ProgressController`] and a two-loop [`SceneSession`]
#![forbid(unsafe_code)]

mod foundation;

/// Asset manifest, sources and decoding.
pub mod assets;
/// CPU rasterization of the driving scene.
pub mod render;
/// Progress control, input and loop scheduling.
pub mod runtime;
/// World layout and the stateless scene machines.
pub mod scene;

pub use crate::foundation::core::{
    ABOVE_ROAD_ROWS, BELOW_ROAD_ROWS, BLANK_ROWS, CANVAS_COLUMNS, CANVAS_HEIGHT, CANVAS_WIDTH,
    COLUMN_ROWS, Canvas, PixelRect, TILE_SIZE,
};
pub use crate::foundation::error::{OverlookError, OverlookResult};
pub use crate::foundation::math::Rng64;

pub use crate::assets::decode::PreparedImage;
pub use crate::assets::manifest::{AssetManifest, SpriteKind, TileKind};
pub use crate::assets::store::{
    AssetSource, AssetState, DirSource, MemorySource, SceneAssets, load_scene_assets,
};
pub use crate::render::frame::FrameRGBA;
pub use crate::render::noise::NoiseFrames;
pub use crate::render::post::PostEffect;
pub use crate::render::scene::{RenderParams, render_scene};
pub use crate::runtime::config::SceneConfig;
pub use crate::runtime::controller::{
    DriveStage, ProgressController, SceneSnapshot, SceneTimeline, TickOutcome,
    calculate_progress_alpha_and_stage,
};
pub use crate::runtime::input::{Key, KeyEvent, KeyResponse};
pub use crate::runtime::session::{LoopEvent, SceneSession};
pub use crate::scene::column::ColumnSequence;
pub use crate::scene::door::{DoorLayout, DoorStage, door_layout, stage_and_relative_progress};
pub use crate::scene::viewport::{ViewportBounds, YRangeChange, YRangeWatcher};
