//! The authored landscape: terrain archetypes and the run table that strings them
//! together.
//!
//! Archetypes are pure functions returning fixed-size row arrays. A `None` cell below a
//! two-row tile (big tree, stump) or inside the hotel footprint is intentional: it lets
//! the taller tile drawn earlier show through.

use crate::{
    assets::manifest::TileKind::{
        self, Grass, Hotel, MudLight, ShrubLight, SmallTree, SnowBoulder, SnowGrass, SnowGround,
        SnowGroundRocks, SnowStumpLeft, SnowStumpRight, Tree, Water, WaterEdgeLeft,
        WaterEdgeRight, WaterEdgeTop, WaterEdgeTopLeft, WaterEdgeTopRight,
    },
    foundation::core::{ABOVE_ROAD_ROWS, BELOW_ROAD_ROWS},
    scene::column::{AboveRoad, BelowRoad, Cell, ColumnRun},
};

/// Index of the above-road row that touches the road.
const ABOVE_LAST: usize = ABOVE_ROAD_ROWS - 1;

/// Optional snow-covered stump placed in a snow-top column.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Stump {
    None,
    /// Left half of the stump, top cell at the given position.
    Left(usize),
    /// Right half of the stump, top cell at the given position.
    Right(usize),
}

pub fn forest_top(roadside: TileKind) -> AboveRoad {
    [
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(roadside),
    ]
}

pub fn forest_to_lake(roadside: [TileKind; 3]) -> AboveRoad {
    [
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(roadside[0]),
        Some(roadside[1]),
        Some(roadside[2]),
    ]
}

pub fn forest_to_lake_first() -> AboveRoad {
    forest_top(MudLight)
}

pub fn forest_to_lake_last() -> AboveRoad {
    [
        Some(WaterEdgeLeft),
        Some(WaterEdgeLeft),
        Some(WaterEdgeLeft),
        Some(WaterEdgeLeft),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
    ]
}

pub fn lake_top(cutout: Option<TileKind>) -> AboveRoad {
    [
        Some(Water),
        Some(Water),
        Some(Water),
        Some(Water),
        Some(cutout.unwrap_or(MudLight)),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
    ]
}

pub fn lake_top_mountain(edge1: TileKind, edge2: TileKind) -> AboveRoad {
    [
        Some(edge1),
        Some(edge2),
        Some(Water),
        Some(Water),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
    ]
}

pub fn lake_top_mountain_left() -> AboveRoad {
    lake_top_mountain(WaterEdgeRight, WaterEdgeTopRight)
}

pub fn lake_top_mountain_mid() -> AboveRoad {
    lake_top_mountain(MudLight, WaterEdgeTop)
}

pub fn lake_top_mountain_right() -> AboveRoad {
    lake_top_mountain(WaterEdgeLeft, WaterEdgeTopLeft)
}

fn lake_shore_cell(cell: usize, n_ground: usize, n_edges: usize) -> Cell {
    if n_ground > cell {
        return Some(MudLight);
    }
    let offset = cell - n_ground;
    if n_edges > offset {
        Some(WaterEdgeRight)
    } else {
        Some(Water)
    }
}

/// Lake receding into ground: `n_ground` cells from the shore are already mud and the
/// next `n_edges` cells carry a water edge.
pub fn lake_top_transition(n_ground: usize, n_edges: usize) -> AboveRoad {
    [
        lake_shore_cell(3, n_ground, n_edges),
        lake_shore_cell(2, n_ground, n_edges),
        lake_shore_cell(1, n_ground, n_edges),
        lake_shore_cell(0, n_ground, n_edges),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
        Some(MudLight),
    ]
}

fn snow_front_cell(cell: usize, n_boulders: usize) -> Cell {
    if cell >= n_boulders {
        return Some(MudLight);
    }
    if cell + 3 < n_boulders {
        return if cell == 0 {
            Some(SnowGround)
        } else {
            Some(SnowGrass)
        };
    }
    Some(SnowBoulder)
}

/// Mud giving way to snow from the road upwards; the leading three snowy cells are
/// boulders.
pub fn lake_top_to_snow(n_boulders: usize) -> AboveRoad {
    std::array::from_fn(|i| snow_front_cell(ABOVE_LAST - i, n_boulders))
}

fn snow_top_cell(cell: usize, stump: Stump) -> Cell {
    let (pos, tile) = match stump {
        Stump::None => return Some(SnowGrass),
        Stump::Left(pos) => (pos, SnowStumpLeft),
        Stump::Right(pos) => (pos, SnowStumpRight),
    };
    if cell == pos + 1 {
        return None;
    }
    if cell == pos {
        return Some(tile);
    }
    Some(SnowGrass)
}

pub fn snow_top(stump: Stump) -> AboveRoad {
    let mut rows = [Some(SnowGrass); ABOVE_ROAD_ROWS];
    rows[0] = Some(SnowBoulder);
    for (cell, row) in rows[1..ABOVE_LAST].iter_mut().enumerate() {
        *row = snow_top_cell(cell, stump);
    }
    rows[ABOVE_LAST] = Some(SnowGround);
    rows
}

pub fn overlook_top() -> AboveRoad {
    [
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(Hotel),
        None,
        None,
        None,
        None,
    ]
}

/// Blank footprint to the right of the hotel so nothing paints over it.
pub fn overlook_top_blank() -> AboveRoad {
    [
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        None,
        None,
        None,
        None,
        None,
    ]
}

pub fn after_overlook_top() -> AboveRoad {
    [
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowBoulder),
        Some(SnowGrass),
        Some(SnowGrass),
        Some(SnowGrass),
        Some(SnowGrass),
        Some(SnowGrass),
    ]
}

pub fn forest_bottom(roadside: TileKind, roadside2: Option<TileKind>) -> BelowRoad {
    [
        Some(roadside),
        Some(roadside2.unwrap_or(SmallTree)),
        Some(Tree),
        None,
        Some(Tree),
        None,
        Some(Tree),
        None,
    ]
}

fn winter_tile_for(cell: i32, stage: i32) -> TileKind {
    let offset = cell - 1;
    if offset < stage {
        SnowBoulder
    } else if stage % 2 == 0 && offset == stage {
        SmallTree
    } else {
        Tree
    }
}

fn winter_bottom_cell(cell: i32, stage: i32) -> Cell {
    // Odd rows sit under the previous row; a big tree there already covers them.
    if cell % 2 != 0 && winter_tile_for(cell - 1, stage) == Tree {
        return None;
    }
    Some(winter_tile_for(cell, stage))
}

/// Forest rows below the road being buried by snow; `stage` counts boulder rows.
pub fn winter_bottom_transition(stage: i32) -> BelowRoad {
    let mut rows = [Some(SnowBoulder); BELOW_ROAD_ROWS];
    for (i, row) in rows.iter_mut().enumerate().skip(1) {
        *row = winter_bottom_cell(i as i32, stage);
    }
    rows
}

pub fn winter_bottom() -> BelowRoad {
    [
        Some(SnowGround),
        Some(SnowGround),
        Some(SnowGround),
        Some(SnowGround),
        Some(SnowGroundRocks),
        Some(SnowGroundRocks),
        Some(SnowGroundRocks),
        Some(SnowGroundRocks),
    ]
}

/// Every run of the world strip in order; the order is the authored scene.
pub fn authored_runs() -> Vec<ColumnRun> {
    let run = ColumnRun::new;
    let grass_bottom = || forest_bottom(Grass, None);
    let mud_bottom = || forest_bottom(MudLight, None);
    let mud_mud_bottom = || forest_bottom(MudLight, Some(MudLight));

    vec![
        // forest
        run(forest_top(SmallTree), grass_bottom(), 25),
        run(forest_top(Grass), grass_bottom(), 1),
        run(forest_top(MudLight), grass_bottom(), 3),
        run(forest_top(Grass), grass_bottom(), 1),
        run(forest_top(SmallTree), grass_bottom(), 2),
        run(forest_top(SmallTree), mud_bottom(), 3),
        run(forest_top(SmallTree), grass_bottom(), 1),
        run(forest_top(Grass), grass_bottom(), 1),
        run(forest_top(ShrubLight), grass_bottom(), 2),
        run(forest_top(Grass), grass_bottom(), 1),
        run(forest_top(SmallTree), grass_bottom(), 6),
        // forest to lake
        run(forest_top(Grass), grass_bottom(), 1),
        run(forest_to_lake_first(), grass_bottom(), 1),
        run(
            forest_to_lake([SmallTree, MudLight, MudLight]),
            grass_bottom(),
            1,
        ),
        run(
            forest_to_lake([MudLight, MudLight, MudLight]),
            grass_bottom(),
            1,
        ),
        run(forest_to_lake_last(), grass_bottom(), 1),
        // lake
        run(lake_top(None), grass_bottom(), 4),
        run(lake_top(Some(WaterEdgeLeft)), grass_bottom(), 1),
        run(lake_top(Some(Water)), grass_bottom(), 3),
        run(lake_top(Some(WaterEdgeRight)), mud_bottom(), 1),
        run(lake_top(None), mud_bottom(), 4),
        run(lake_top(None), mud_mud_bottom(), 4),
        run(lake_top_mountain_left(), mud_mud_bottom(), 1),
        run(lake_top_mountain_mid(), mud_mud_bottom(), 4),
        run(lake_top_mountain_right(), mud_mud_bottom(), 1),
        run(lake_top(None), mud_mud_bottom(), 2),
        run(lake_top_transition(0, 2), mud_mud_bottom(), 1),
        run(lake_top_transition(2, 0), mud_mud_bottom(), 1),
        run(lake_top_transition(2, 1), mud_mud_bottom(), 1),
        run(
            lake_top_transition(3, 1),
            forest_bottom(MudLight, Some(SmallTree)),
            1,
        ),
        // lake to snow
        run(lake_top_to_snow(1), winter_bottom_transition(0), 1),
        run(lake_top_to_snow(2), winter_bottom_transition(1), 1),
        run(lake_top_to_snow(2), winter_bottom_transition(3), 1),
        run(lake_top_to_snow(4), winter_bottom_transition(3), 1),
        run(lake_top_to_snow(6), winter_bottom_transition(4), 1),
        run(lake_top_to_snow(8), winter_bottom(), 1),
        run(lake_top_to_snow(9), winter_bottom(), 1),
        // snow
        run(snow_top(Stump::Left(2)), winter_bottom(), 1),
        run(snow_top(Stump::Right(2)), winter_bottom(), 1),
        run(snow_top(Stump::None), winter_bottom(), 2),
        run(snow_top(Stump::Left(4)), winter_bottom(), 1),
        run(snow_top(Stump::Right(4)), winter_bottom(), 1),
        run(snow_top(Stump::None), winter_bottom(), 1),
        run(snow_top(Stump::Left(1)), winter_bottom(), 1),
        run(snow_top(Stump::Right(1)), winter_bottom(), 1),
        run(snow_top(Stump::None), winter_bottom(), 10),
        // hotel
        run(overlook_top(), winter_bottom(), 1),
        run(overlook_top_blank(), winter_bottom(), 11),
        run(after_overlook_top(), winter_bottom(), 20),
    ]
}

#[cfg(test)]
#[path = "../../tests/unit/scene/world.rs"]
mod tests;
