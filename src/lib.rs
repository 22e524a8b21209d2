//! Stampgrid
//!
//! Layout core for loyalty-card front-ends: arranges the stamps a merchant's
//! loyalty program requires into a near-square grid and derives a card size
//! large enough to hold it.
//!
//! # Features
//!
//! - **Grid layout**: minimal-area rows × columns for any positive stamp count
//! - **Card sizing**: linear growth with the grid, floored for legibility
//! - **Card views**: per-cell paint commands, merchant branding and a text snapshot
//!
//! # Example
//!
//! ```
//! use stampgrid::{compute_card_size, compute_grid};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let grid = compute_grid(8)?;
//! assert_eq!((grid.rows, grid.columns), (2, 4));
//!
//! let size = compute_card_size(grid);
//! assert_eq!((size.width, size.height), (136, 180));
//! # Ok(())
//! # }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

pub mod error;
pub use error::{Error, Result};

pub mod layout;
pub use layout::{
    compute_card_size, compute_card_size_with, compute_grid, CardDimensions, GridSpec,
    RequiredCount, MAX_REQUIRED_STAMPS,
};

// Paint commands and text snapshots for a laid-out card
pub mod rendering;

// Merchant data model and asset/colour lookup tables
pub mod merchant;

pub mod card;
pub use card::StampCardView;

pub mod flip;
pub use flip::{CardFace, CardFlip, FlipAnimation};

/// Sizing constants used to derive card dimensions and stamp positions
///
/// All values are in abstract length units (density-independent pixels on a
/// mobile front-end). Defaults reproduce the wallet and home screen cards:
///
/// ```
/// let cfg = stampgrid::LayoutConfig::default();
/// assert_eq!(cfg.cell_width, 28);
/// assert_eq!(cfg.min_height, 180);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Horizontal pitch of one stamp cell
    pub cell_width: u32,
    /// Vertical pitch of one stamp row
    pub cell_height: u32,
    /// Total horizontal padding around the grid
    pub horizontal_padding: u32,
    /// Height reserved for the logo row, merchant name and padding
    pub chrome_height: u32,
    /// Minimum card width
    pub min_width: u32,
    /// Minimum card height
    pub min_height: u32,
    /// Diameter of a painted stamp inside its cell
    pub stamp_diameter: u32,
    /// Offset of the first stamp row from the top of the card (below the logo row)
    pub grid_top: u32,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            cell_width: 28,
            cell_height: 32,
            horizontal_padding: 24,
            chrome_height: 80,
            min_width: 120,
            min_height: 180,
            stamp_diameter: 24,
            grid_top: 76,
        }
    }
}

impl LayoutConfig {
    /// Parse a configuration from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let cfg: LayoutConfig = serde_json::from_str(json)?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load a JSON configuration file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let data = std::fs::read_to_string(path)
            .map_err(|e| Error::ConfigError(format!("{}: {}", path.display(), e)))?;
        Self::from_json_str(&data)
    }

    /// Reject configurations that cannot hold a stamp
    pub fn validate(&self) -> Result<()> {
        if self.cell_width == 0 || self.cell_height == 0 {
            return Err(Error::ConfigError(
                "cell_width and cell_height must be positive".to_string(),
            ));
        }
        if self.stamp_diameter > self.cell_width.min(self.cell_height) {
            return Err(Error::ConfigError(format!(
                "stamp_diameter {} does not fit a {}x{} cell",
                self.stamp_diameter, self.cell_width, self.cell_height
            )));
        }
        if self.grid_top > self.chrome_height {
            return Err(Error::ConfigError(format!(
                "grid_top {} exceeds chrome_height {}",
                self.grid_top, self.chrome_height
            )));
        }
        Ok(())
    }
}
