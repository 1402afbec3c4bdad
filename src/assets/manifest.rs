use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::foundation::error::{OverlookError, OverlookResult};

/// Terrain tiles referenced by scene columns.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum TileKind {
    Tree,
    SmallTree,
    Grass,
    MudLight,
    ShrubLight,
    Road,
    Water,
    WaterEdgeLeft,
    WaterEdgeRight,
    WaterEdgeTop,
    WaterEdgeTopRight,
    WaterEdgeTopLeft,
    SnowBoulder,
    SnowGround,
    SnowGroundRocks,
    SnowGrass,
    SnowStumpLeft,
    SnowStumpRight,
    Hotel,
}

impl TileKind {
    pub const COUNT: usize = 19;

    pub const ALL: [TileKind; Self::COUNT] = [
        TileKind::Tree,
        TileKind::SmallTree,
        TileKind::Grass,
        TileKind::MudLight,
        TileKind::ShrubLight,
        TileKind::Road,
        TileKind::Water,
        TileKind::WaterEdgeLeft,
        TileKind::WaterEdgeRight,
        TileKind::WaterEdgeTop,
        TileKind::WaterEdgeTopRight,
        TileKind::WaterEdgeTopLeft,
        TileKind::SnowBoulder,
        TileKind::SnowGround,
        TileKind::SnowGroundRocks,
        TileKind::SnowGrass,
        TileKind::SnowStumpLeft,
        TileKind::SnowStumpRight,
        TileKind::Hotel,
    ];

    /// Position in [`TileKind::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Tree => "tree",
            Self::SmallTree => "small-tree",
            Self::Grass => "grass",
            Self::MudLight => "mud-light",
            Self::ShrubLight => "shrub-light",
            Self::Road => "road",
            Self::Water => "water",
            Self::WaterEdgeLeft => "water-edge-left",
            Self::WaterEdgeRight => "water-edge-right",
            Self::WaterEdgeTop => "water-edge-top",
            Self::WaterEdgeTopRight => "water-edge-top-right",
            Self::WaterEdgeTopLeft => "water-edge-top-left",
            Self::SnowBoulder => "snow-boulder",
            Self::SnowGround => "snow-ground",
            Self::SnowGroundRocks => "snow-ground-rocks",
            Self::SnowGrass => "snow-grass",
            Self::SnowStumpLeft => "snow-stump-left",
            Self::SnowStumpRight => "snow-stump-right",
            Self::Hotel => "hotel",
        }
    }

    /// Size of the authored bitmap in pixels.
    pub fn nominal_size(self) -> (u32, u32) {
        match self {
            Self::Tree | Self::SnowStumpLeft | Self::SnowStumpRight => (16, 32),
            Self::Hotel => (192, 80),
            _ => (16, 16),
        }
    }

    pub fn default_path(self) -> &'static str {
        match self {
            Self::Tree => "tiles/tree_16x32.png",
            Self::SmallTree => "tiles/tree_16x16.png",
            Self::Grass => "tiles/grass_16x16.png",
            Self::MudLight => "tiles/mud_light_16x16.png",
            Self::ShrubLight => "tiles/shrub_light_16x16.png",
            Self::Road => "tiles/road_mark_16x16.png",
            Self::Water => "tiles/water_16x16.png",
            Self::WaterEdgeLeft => "tiles/water_edge_left_16x16.png",
            Self::WaterEdgeRight => "tiles/water_edge_right_16x16.png",
            Self::WaterEdgeTop => "tiles/water_edge_top_16x16.png",
            Self::WaterEdgeTopRight => "tiles/water_edge_top_right_16x16.png",
            Self::WaterEdgeTopLeft => "tiles/water_edge_top_left_16x16.png",
            Self::SnowBoulder => "tiles/snow_boulder_16x16.png",
            Self::SnowGround => "tiles/snow_ground_16x16.png",
            Self::SnowGroundRocks => "tiles/snow_ground_rocks_16x16.png",
            Self::SnowGrass => "tiles/snow_grass_16x16.png",
            Self::SnowStumpLeft => "tiles/snow_stump_left_16x32.png",
            Self::SnowStumpRight => "tiles/snow_stump_right_16x32.png",
            Self::Hotel => "tiles/overlook_hotel_192x80.png",
        }
    }
}

/// The two car animation frames.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum SpriteKind {
    Car1,
    Car2,
}

impl SpriteKind {
    pub const COUNT: usize = 2;
    pub const ALL: [SpriteKind; Self::COUNT] = [SpriteKind::Car1, SpriteKind::Car2];

    pub fn index(self) -> usize {
        self as usize
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Car1 => "car-1",
            Self::Car2 => "car-2",
        }
    }

    pub fn nominal_size(self) -> (u32, u32) {
        (32, 16)
    }

    pub fn default_path(self) -> &'static str {
        match self {
            Self::Car1 => "sprites/yellow_car_1_32x16.png",
            Self::Car2 => "sprites/yellow_car_2_32x16.png",
        }
    }
}

/// Where each named asset lives, relative to an [`AssetSource`](crate::AssetSource) root.
///
/// Deserialized manifests only need to list overrides; anything missing keeps its
/// default locator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AssetManifest {
    pub tiles: BTreeMap<TileKind, String>,
    pub sprites: BTreeMap<SpriteKind, String>,
}

impl Default for AssetManifest {
    fn default() -> Self {
        Self {
            tiles: TileKind::ALL
                .iter()
                .map(|&k| (k, k.default_path().to_string()))
                .collect(),
            sprites: SpriteKind::ALL
                .iter()
                .map(|&k| (k, k.default_path().to_string()))
                .collect(),
        }
    }
}

impl AssetManifest {
    pub fn from_json(json: &str) -> OverlookResult<Self> {
        let mut manifest: AssetManifest = serde_json::from_str(json)?;
        manifest.fill_defaults();
        manifest.validate()?;
        Ok(manifest)
    }

    fn fill_defaults(&mut self) {
        for k in TileKind::ALL {
            self.tiles
                .entry(k)
                .or_insert_with(|| k.default_path().to_string());
        }
        for k in SpriteKind::ALL {
            self.sprites
                .entry(k)
                .or_insert_with(|| k.default_path().to_string());
        }
    }

    pub fn tile_path(&self, kind: TileKind) -> &str {
        self.tiles
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_path())
    }

    pub fn sprite_path(&self, kind: SpriteKind) -> &str {
        self.sprites
            .get(&kind)
            .map(String::as_str)
            .unwrap_or_else(|| kind.default_path())
    }

    pub fn validate(&self) -> OverlookResult<()> {
        let all = self
            .tiles
            .iter()
            .map(|(k, p)| (k.name(), p))
            .chain(self.sprites.iter().map(|(k, p)| (k.name(), p)));
        for (name, path) in all {
            if path.trim().is_empty() {
                return Err(OverlookError::validation(format!(
                    "asset '{name}' has an empty locator"
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/assets/manifest.rs"]
mod tests;
