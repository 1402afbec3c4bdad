use std::{
    collections::HashMap,
    path::{Component, Path, PathBuf},
    sync::Arc,
};

use anyhow::Context;
use rayon::prelude::*;

use crate::{
    assets::decode::{PreparedImage, decode_image},
    assets::manifest::{AssetManifest, SpriteKind, TileKind},
    foundation::error::{OverlookError, OverlookResult},
};

/// Byte provider behind asset loading.
pub trait AssetSource: Sync {
    /// Read the raw encoded bytes for `locator`.
    fn read(&self, locator: &str) -> OverlookResult<Vec<u8>>;
}

/// Reads assets relative to a directory.
#[derive(Clone, Debug)]
pub struct DirSource {
    root: PathBuf,
}

impl DirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }
}

impl AssetSource for DirSource {
    fn read(&self, locator: &str) -> OverlookResult<Vec<u8>> {
        let rel = normalize_rel_path(locator)?;
        let path = self.root.join(rel);
        let bytes =
            std::fs::read(&path).with_context(|| format!("read asset '{}'", path.display()))?;
        Ok(bytes)
    }
}

/// In-memory source keyed by locator, handy for embedding and tests.
#[derive(Clone, Debug, Default)]
pub struct MemorySource {
    files: HashMap<String, Vec<u8>>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, locator: impl Into<String>, bytes: Vec<u8>) {
        self.files.insert(locator.into(), bytes);
    }
}

impl AssetSource for MemorySource {
    fn read(&self, locator: &str) -> OverlookResult<Vec<u8>> {
        self.files
            .get(locator)
            .cloned()
            .ok_or_else(|| OverlookError::asset(format!("no bytes for '{locator}'")))
    }
}

/// Reject absolute locators and `..` escapes; strip `.` segments.
pub fn normalize_rel_path(locator: &str) -> OverlookResult<PathBuf> {
    let p = Path::new(locator);
    let mut out = PathBuf::new();
    for c in p.components() {
        match c {
            Component::Normal(s) => out.push(s),
            Component::CurDir => {}
            Component::ParentDir | Component::RootDir | Component::Prefix(_) => {
                return Err(OverlookError::validation(format!(
                    "asset locator '{locator}' must stay inside the asset root"
                )));
            }
        }
    }
    if out.as_os_str().is_empty() {
        return Err(OverlookError::validation("asset locator must be non-empty"));
    }
    Ok(out)
}

/// Every terrain tile, indexed by [`TileKind`].
#[derive(Clone, Debug)]
pub struct TileSet {
    images: Vec<PreparedImage>,
}

impl TileSet {
    pub fn from_fn(mut f: impl FnMut(TileKind) -> PreparedImage) -> Self {
        Self {
            images: TileKind::ALL.iter().map(|&k| f(k)).collect(),
        }
    }

    pub fn get(&self, kind: TileKind) -> &PreparedImage {
        &self.images[kind.index()]
    }
}

/// Car animation frames, indexed by [`SpriteKind`].
#[derive(Clone, Debug)]
pub struct SpriteSet {
    images: Vec<PreparedImage>,
}

impl SpriteSet {
    pub fn from_fn(mut f: impl FnMut(SpriteKind) -> PreparedImage) -> Self {
        Self {
            images: SpriteKind::ALL.iter().map(|&k| f(k)).collect(),
        }
    }

    pub fn get(&self, kind: SpriteKind) -> &PreparedImage {
        &self.images[kind.index()]
    }
}

/// The complete, immutable bundle a scene renders from.
#[derive(Clone, Debug)]
pub struct SceneAssets {
    pub tiles: TileSet,
    pub sprites: SpriteSet,
}

impl SceneAssets {
    /// Flat-colored stand-ins at the authored sizes, for previews without artwork.
    pub fn placeholder() -> Self {
        fn color_for(i: usize) -> [u8; 4] {
            let h = (i as u32).wrapping_mul(0x9E37_79B9);
            [
                64 + (h >> 24) as u8 % 192,
                64 + (h >> 16) as u8 % 192,
                64 + (h >> 8) as u8 % 192,
                255,
            ]
        }

        let tiles = TileSet::from_fn(|k| {
            let (w, h) = k.nominal_size();
            PreparedImage::solid(w, h, color_for(k.index() + 1))
        });
        let sprites = SpriteSet::from_fn(|k| {
            let (w, h) = k.nominal_size();
            match k {
                SpriteKind::Car1 => PreparedImage::solid(w, h, [240, 200, 20, 255]),
                SpriteKind::Car2 => PreparedImage::solid(w, h, [220, 180, 10, 255]),
            }
        });
        Self { tiles, sprites }
    }
}

#[derive(Clone, Copy, Debug)]
enum Slot {
    Tile(TileKind),
    Sprite(SpriteKind),
}

/// Decode every asset named by `manifest`, all or nothing.
///
/// Each call decodes each asset exactly once; there is no cache and no retry.
#[tracing::instrument(skip_all)]
pub fn load_scene_assets(
    manifest: &AssetManifest,
    source: &dyn AssetSource,
) -> OverlookResult<SceneAssets> {
    manifest.validate()?;

    let slots: Vec<Slot> = TileKind::ALL
        .iter()
        .map(|&k| Slot::Tile(k))
        .chain(SpriteKind::ALL.iter().map(|&k| Slot::Sprite(k)))
        .collect();

    let decoded = slots
        .par_iter()
        .map(|&slot| {
            let (name, locator) = match slot {
                Slot::Tile(k) => (k.name(), manifest.tile_path(k)),
                Slot::Sprite(k) => (k.name(), manifest.sprite_path(k)),
            };
            let bytes = source
                .read(locator)
                .map_err(|e| OverlookError::asset(format!("load '{name}' from '{locator}': {e}")))?;
            let image = decode_image(&bytes)
                .map_err(|e| OverlookError::asset(format!("decode '{name}': {e}")))?;
            Ok((slot, image))
        })
        .collect::<OverlookResult<Vec<_>>>()?;

    let mut tiles: Vec<Option<PreparedImage>> = vec![None; TileKind::COUNT];
    let mut sprites: Vec<Option<PreparedImage>> = vec![None; SpriteKind::COUNT];
    for (slot, image) in decoded {
        match slot {
            Slot::Tile(k) => tiles[k.index()] = Some(image),
            Slot::Sprite(k) => sprites[k.index()] = Some(image),
        }
    }

    let tiles = tiles
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| OverlookError::asset("tile set incomplete after decode"))?;
    let sprites = sprites
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| OverlookError::asset("sprite set incomplete after decode"))?;

    tracing::debug!(
        tiles = tiles.len(),
        sprites = sprites.len(),
        "scene assets decoded"
    );

    Ok(SceneAssets {
        tiles: TileSet { images: tiles },
        sprites: SpriteSet { images: sprites },
    })
}

/// Load progress as seen by renderers: nothing is drawn until assets are ready.
#[derive(Clone, Debug, Default)]
pub enum AssetState {
    #[default]
    Pending,
    Ready(Arc<SceneAssets>),
}

impl AssetState {
    pub fn ready(&self) -> Option<&Arc<SceneAssets>> {
        match self {
            Self::Pending => None,
            Self::Ready(a) => Some(a),
        }
    }

    pub fn is_ready(&self) -> bool {
        matches!(self, Self::Ready(_))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/store.rs"]
mod tests;
