//! Stamp grid layout
//!
//! Pure functions for shaping a loyalty card: how many rows and columns of
//! stamps, and how large the card must be to hold them. No shared state;
//! safe to call from any number of threads or render passes.

pub mod card;
pub mod grid;

pub use card::{compute_card_size, compute_card_size_with, CardDimensions};
pub use grid::{compute_grid, GridSpec, RequiredCount, MAX_REQUIRED_STAMPS};
