//! Level layout: walled border, entry tile, and randomly scattered items.

mod placement;

use log::debug;

use crate::cell::Cell;
use crate::grid::Grid;
use crate::rng::GameRng;
use crate::rules::{self, MIN_GRID_DIMENSION};
use crate::types::EngineError;

pub use placement::PlacementReport;

pub fn check_dimensions(height: usize, width: usize) -> Result<(), EngineError> {
    if height < MIN_GRID_DIMENSION || width < MIN_GRID_DIMENSION {
        return Err(EngineError::GridTooSmall { height, width, minimum: MIN_GRID_DIMENSION });
    }
    Ok(())
}

/// Builds a fresh level, rejecting dimensions that leave no interior.
pub fn generate_level(
    height: usize,
    width: usize,
    difficulty: i32,
    rng: &mut GameRng,
) -> Result<(Grid, PlacementReport), EngineError> {
    check_dimensions(height, width)?;
    Ok(build_level(height, width, difficulty, rng))
}

/// Dimensions must already have passed `check_dimensions`.
/// `difficulty` is tracked for logging only; quotas are fixed.
pub(crate) fn build_level(
    height: usize,
    width: usize,
    difficulty: i32,
    rng: &mut GameRng,
) -> (Grid, PlacementReport) {
    debug_assert!(height >= MIN_GRID_DIMENSION && width >= MIN_GRID_DIMENSION);

    let mut grid = Grid::new(height, width);
    grid.set(rules::ENTRY_POS, Cell::Entry);

    let report = placement::scatter_items(&mut grid, rng, &rules::LEVEL_QUOTAS);
    debug!(
        "generated {height}x{width} level at difficulty {difficulty}: placed {} of {} items",
        report.placed, report.requested
    );
    (grid, report)
}
