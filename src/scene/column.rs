use crate::{
    assets::manifest::TileKind,
    assets::store::TileSet,
    foundation::core::{ABOVE_ROAD_ROWS, BELOW_ROAD_ROWS, COLUMN_ROWS, TILE_SIZE},
    foundation::error::{OverlookError, OverlookResult},
    scene::world,
};

/// One cell slot: a tile, or nothing so a taller tile from an earlier slot shows through.
pub type Cell = Option<TileKind>;

pub type AboveRoad = [Cell; ABOVE_ROAD_ROWS];
pub type BelowRoad = [Cell; BELOW_ROAD_ROWS];

/// Columns already on screen when the hotel column reaches its stopping position.
pub const HOTEL_STOP_OFFSET_COLUMNS: u64 = 46;

/// A single vertical strip of the scene.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnDef {
    pub above: AboveRoad,
    pub road: TileKind,
    pub below: BelowRoad,
}

impl ColumnDef {
    pub fn new(above: AboveRoad, below: BelowRoad) -> Self {
        Self {
            above,
            road: TileKind::Road,
            below,
        }
    }

    /// Cell at stack row `row` (above rows, then the road, then below rows).
    pub fn cell(&self, row: usize) -> Cell {
        match row {
            r if r < ABOVE_ROAD_ROWS => self.above[r],
            r if r == ABOVE_ROAD_ROWS => Some(self.road),
            r if r < COLUMN_ROWS => self.below[r - ABOVE_ROAD_ROWS - 1],
            _ => None,
        }
    }

    /// Non-empty cells in draw order, paired with their stack row.
    pub fn tiles(&self) -> impl Iterator<Item = (usize, TileKind)> + '_ {
        (0..COLUMN_ROWS).filter_map(|row| self.cell(row).map(|t| (row, t)))
    }
}

/// A column definition shown for `repeats` consecutive flattened columns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnRun {
    pub def: ColumnDef,
    pub repeats: u32,
}

impl ColumnRun {
    pub fn new(above: AboveRoad, below: BelowRoad, repeats: u32) -> Self {
        Self {
            def: ColumnDef::new(above, below),
            repeats,
        }
    }
}

/// The run-length encoded world strip.
#[derive(Clone, Debug)]
pub struct ColumnSequence {
    runs: Vec<ColumnRun>,
    /// Exclusive cumulative end index of each run.
    ends: Vec<u64>,
}

impl ColumnSequence {
    pub fn from_runs(runs: Vec<ColumnRun>) -> OverlookResult<Self> {
        if runs.is_empty() {
            return Err(OverlookError::validation(
                "column sequence must contain at least one run",
            ));
        }

        let mut ends = Vec::with_capacity(runs.len());
        let mut total = 0u64;
        for (i, run) in runs.iter().enumerate() {
            if run.repeats == 0 {
                return Err(OverlookError::validation(format!(
                    "column run {i} must repeat at least once"
                )));
            }
            total += u64::from(run.repeats);
            ends.push(total);
        }
        Ok(Self { runs, ends })
    }

    /// The authored world layout, before any tile-size checks.
    pub fn authored() -> OverlookResult<Self> {
        Self::from_runs(world::authored_runs())
    }

    /// The authored forest -> lake -> snow -> hotel world, checked against `tiles`.
    #[tracing::instrument(skip_all)]
    pub fn build(tiles: &TileSet) -> OverlookResult<Self> {
        let seq = Self::authored()?;
        seq.validate_spans(tiles)?;
        tracing::debug!(
            runs = seq.runs.len(),
            columns = seq.total_columns(),
            distance_to_hotel = seq.distance_to_hotel(),
            "column sequence built"
        );
        Ok(seq)
    }

    pub fn runs(&self) -> &[ColumnRun] {
        &self.runs
    }

    pub fn total_columns(&self) -> u64 {
        self.ends.last().copied().unwrap_or(0)
    }

    /// Progress, in pixels, at which the car stops in front of the hotel.
    pub fn distance_to_hotel(&self) -> f64 {
        (self.total_columns() as f64 - HOTEL_STOP_OFFSET_COLUMNS as f64) * f64::from(TILE_SIZE)
    }

    /// Resolve flattened column `index`; anything outside the strip is `None`.
    pub fn column(&self, index: i64) -> Option<&ColumnDef> {
        if index < 0 {
            return None;
        }
        let index = index as u64;
        let run = self.ends.partition_point(|&end| end <= index);
        self.runs.get(run).map(|r| &r.def)
    }

    /// Check that tiles larger than one cell only overlap empty cells.
    ///
    /// Rows are counted down the full column stack; extra width is checked against
    /// the following flattened columns.
    pub fn validate_spans(&self, tiles: &TileSet) -> OverlookResult<()> {
        let total = self.total_columns() as i64;
        for x in 0..total {
            let Some(def) = self.column(x) else {
                continue;
            };
            for (row, tile) in def.tiles() {
                let img = tiles.get(tile);
                let rows = img.height.div_ceil(TILE_SIZE).max(1) as usize;
                let cols = img.width.div_ceil(TILE_SIZE).max(1) as i64;
                let row_end = (row + rows).min(COLUMN_ROWS);

                for r in row + 1..row_end {
                    if let Some(other) = def.cell(r) {
                        return Err(OverlookError::validation(format!(
                            "column {x}: '{}' at row {r} is covered by '{}' from row {row}",
                            other.name(),
                            tile.name()
                        )));
                    }
                }

                for dx in 1..cols {
                    let Some(next) = self.column(x + dx) else {
                        break;
                    };
                    for r in row..row_end {
                        if let Some(other) = next.cell(r) {
                            return Err(OverlookError::validation(format!(
                                "column {}: '{}' at row {r} is covered by '{}' from column {x}",
                                x + dx,
                                other.name(),
                                tile.name()
                            )));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/column.rs"]
mod tests;
