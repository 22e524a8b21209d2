//! Rendering a laid-out stamp card
//!
//! Turns a [`GridSpec`] and a stamp count into per-cell states, positioned
//! paint commands, or a plain-text snapshot.

pub mod paint;
pub mod text;

use serde::Serialize;

use crate::layout::{GridSpec, RequiredCount};

pub use paint::{paint_card, PaintCommand};
pub use text::{render_text, TextSnapshot};

/// What a single grid cell shows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    /// A collected stamp
    Filled,
    /// A stamp still to collect
    Empty,
    /// Grid slot past the required count, left blank
    Padding,
}

/// Row-major cell states for a card holding `stamps` out of `required`.
///
/// Stamps beyond the requirement display as a full card.
pub fn cell_states(grid: GridSpec, stamps: u32, required: RequiredCount) -> Vec<Vec<CellState>> {
    let required = u64::from(required.get());
    let stamps = u64::from(stamps);
    (0..u64::from(grid.rows))
        .map(|row| {
            (0..u64::from(grid.columns))
                .map(|col| {
                    let idx = row * u64::from(grid.columns) + col;
                    if idx >= required {
                        CellState::Padding
                    } else if idx < stamps {
                        CellState::Filled
                    } else {
                        CellState::Empty
                    }
                })
                .collect()
        })
        .collect()
}
