use super::*;
use crate::assets::store::SceneAssets;

fn tiny_def(tile: TileKind) -> ColumnDef {
    ColumnDef::new([Some(tile); ABOVE_ROAD_ROWS], [None; BELOW_ROAD_ROWS])
}

fn small_sequence() -> ColumnSequence {
    ColumnSequence::from_runs(vec![
        ColumnRun {
            def: tiny_def(TileKind::Grass),
            repeats: 2,
        },
        ColumnRun {
            def: tiny_def(TileKind::Water),
            repeats: 3,
        },
    ])
    .unwrap()
}

#[test]
fn lookup_uses_cumulative_repeats() {
    let seq = small_sequence();
    assert_eq!(seq.total_columns(), 5);
    assert_eq!(seq.column(0).unwrap().above[0], Some(TileKind::Grass));
    assert_eq!(seq.column(1).unwrap().above[0], Some(TileKind::Grass));
    assert_eq!(seq.column(2).unwrap().above[0], Some(TileKind::Water));
    assert_eq!(seq.column(4).unwrap().above[0], Some(TileKind::Water));
}

#[test]
fn lookup_outside_the_strip_is_none_and_stable() {
    let seq = small_sequence();
    for i in [-100, -1, 5, 6, i64::MAX] {
        assert!(seq.column(i).is_none());
        assert_eq!(seq.column(i), seq.column(i));
    }
}

#[test]
fn zero_repeats_and_empty_sequences_are_rejected() {
    assert!(ColumnSequence::from_runs(vec![]).is_err());
    let err = ColumnSequence::from_runs(vec![ColumnRun {
        def: tiny_def(TileKind::Grass),
        repeats: 0,
    }])
    .unwrap_err();
    assert!(err.to_string().contains("at least once"));
}

#[test]
fn authored_world_distance_to_hotel() {
    let assets = SceneAssets::placeholder();
    let seq = ColumnSequence::build(&assets.tiles).unwrap();
    assert_eq!(seq.total_columns(), 138);
    assert_eq!(seq.distance_to_hotel(), 1472.0);
}

#[test]
fn distance_moves_by_tile_size_per_repeat() {
    let mut runs = world::authored_runs();
    let base = ColumnSequence::from_runs(runs.clone())
        .unwrap()
        .distance_to_hotel();

    runs[0].repeats += 3;
    let longer = ColumnSequence::from_runs(runs).unwrap().distance_to_hotel();
    assert_eq!(longer - base, 3.0 * f64::from(TILE_SIZE));
}

#[test]
fn cell_walks_above_road_below() {
    let def = ColumnDef::new([Some(TileKind::Water); 9], [Some(TileKind::Grass); 8]);
    assert_eq!(def.cell(8), Some(TileKind::Water));
    assert_eq!(def.cell(9), Some(TileKind::Road));
    assert_eq!(def.cell(10), Some(TileKind::Grass));
    assert_eq!(def.cell(17), Some(TileKind::Grass));
    assert_eq!(def.cell(18), None);
    assert_eq!(def.tiles().count(), COLUMN_ROWS);
}

#[test]
fn tall_tile_over_a_filled_cell_is_rejected() {
    let assets = SceneAssets::placeholder();
    let mut above = [Some(TileKind::Grass); ABOVE_ROAD_ROWS];
    above[0] = Some(TileKind::Tree);
    let seq = ColumnSequence::from_runs(vec![ColumnRun::new(above, [None; 8], 1)]).unwrap();

    let err = seq.validate_spans(&assets.tiles).unwrap_err();
    assert!(err.to_string().contains("tree"));

    above[1] = None;
    let seq = ColumnSequence::from_runs(vec![ColumnRun::new(above, [None; 8], 1)]).unwrap();
    seq.validate_spans(&assets.tiles).unwrap();
}

#[test]
fn wide_tile_needs_blank_columns_after_it() {
    let assets = SceneAssets::placeholder();
    let mut runs = world::authored_runs();
    let blank = runs
        .iter()
        .position(|r| r.def.above == world::overlook_top_blank())
        .unwrap();
    runs[blank].repeats = 5;
    runs.insert(
        blank + 1,
        ColumnRun::new(world::after_overlook_top(), world::winter_bottom(), 1),
    );

    let seq = ColumnSequence::from_runs(runs).unwrap();
    let err = seq.validate_spans(&assets.tiles).unwrap_err();
    assert!(err.to_string().contains("hotel"));
}
