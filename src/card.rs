//! Stamp card view model
//!
//! Everything a card renderer needs in one value: grid shape, card size,
//! per-cell states and merchant branding.

use serde::Serialize;

use crate::layout::{compute_card_size_with, CardDimensions, GridSpec, RequiredCount};
use crate::merchant::{card_color, merchant_logo, LogoAsset, LoyaltyCard};
use crate::rendering::{cell_states, paint_card, CellState, PaintCommand};
use crate::LayoutConfig;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StampCardView {
    pub merchant_name: String,
    pub reward: String,
    pub stamps: u32,
    pub required: RequiredCount,
    pub grid: GridSpec,
    pub size: CardDimensions,
    pub cells: Vec<Vec<CellState>>,
    pub logo: LogoAsset,
    pub color: &'static str,
    #[serde(skip)]
    config: LayoutConfig,
}

impl StampCardView {
    pub fn new(
        merchant_name: &str,
        reward: &str,
        stamps: u32,
        required: RequiredCount,
        config: &LayoutConfig,
    ) -> Self {
        let grid = GridSpec::for_count(required);
        Self {
            merchant_name: merchant_name.to_string(),
            reward: reward.to_string(),
            stamps,
            required,
            grid,
            size: compute_card_size_with(config, grid),
            cells: cell_states(grid, stamps, required),
            logo: merchant_logo(merchant_name),
            color: card_color(merchant_name),
            config: *config,
        }
    }

    pub fn from_card(card: &LoyaltyCard, config: &LayoutConfig) -> Self {
        let program = &card.merchant.loyalty_program;
        Self::new(
            &card.merchant.name,
            &program.reward,
            card.stamps,
            program.stamps_required,
            config,
        )
    }

    pub fn reward_text(&self) -> String {
        format!(
            "Collect {} Stamps, Enjoy a Free {}",
            self.required, self.reward
        )
    }

    pub fn is_complete(&self) -> bool {
        self.stamps >= self.required.get()
    }

    /// Stamps still needed for the reward
    pub fn remaining(&self) -> u32 {
        self.required.get().saturating_sub(self.stamps)
    }

    /// Stamp count as drawn, capped at the requirement
    pub fn displayed_stamps(&self) -> u32 {
        self.stamps.min(self.required.get())
    }

    pub fn paint(&self) -> Vec<PaintCommand> {
        paint_card(&self.config, self.grid, self.stamps, self.required)
    }
}
