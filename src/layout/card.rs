/// Card sizing derived from a stamp grid

use serde::{Deserialize, Serialize};

use crate::layout::GridSpec;
use crate::LayoutConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardDimensions {
    pub width: u32,
    pub height: u32,
}

/// Card size for `grid` using the default [`LayoutConfig`]
pub fn compute_card_size(grid: GridSpec) -> CardDimensions {
    compute_card_size_with(&LayoutConfig::default(), grid)
}

/// Width grows with the column count plus horizontal padding, height with
/// the row count plus the logo/name chrome. Both are floored at the
/// configured minimums so one- to three-stamp cards stay legible.
pub fn compute_card_size_with(config: &LayoutConfig, grid: GridSpec) -> CardDimensions {
    let width = grid
        .columns
        .saturating_mul(config.cell_width)
        .saturating_add(config.horizontal_padding);
    let height = grid
        .rows
        .saturating_mul(config.cell_height)
        .saturating_add(config.chrome_height);
    CardDimensions {
        width: width.max(config.min_width),
        height: height.max(config.min_height),
    }
}
