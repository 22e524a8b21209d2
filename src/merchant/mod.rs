//! Merchant data and branding lookups
//!
//! The loyalty data model mirrors the backend's JSON (camelCase fields,
//! Mongo-style `_id`). Branding lookups are finite tables with an explicit
//! fallback entry.

pub mod logo;
pub mod promo;
pub mod wallet;

use serde::{Deserialize, Serialize};

use crate::layout::RequiredCount;

pub use logo::{merchant_logo, sanitize_merchant_name, LogoAsset, FALLBACK_LOGO};
pub use promo::{promotional_image, PromoImage, PROMO_PLACEHOLDER};
pub use wallet::{load_wallet, search, MerchantNamed};

/// Merchant-defined reward threshold
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoyaltyProgram {
    pub stamps_required: RequiredCount,
    pub reward: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Merchant {
    #[serde(rename = "_id")]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub loyalty_program: LoyaltyProgram,
}

/// A customer's card at one merchant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LoyaltyCard {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(rename = "merchantId")]
    pub merchant: Merchant,
    #[serde(default)]
    pub stamps: u32,
}

const CARD_COLORS: &[(&str, &str)] = &[
    ("Subway", "#00843D"),
    ("Mola", "#D32F2F"),
    ("Hirds", "#1976D2"),
    ("Seecoz", "#607D8B"),
];

pub const DEFAULT_CARD_COLOR: &str = "#FFFFFF";

/// Background colour for a merchant's card (exact name match)
pub fn card_color(merchant_name: &str) -> &'static str {
    CARD_COLORS
        .iter()
        .find(|(name, _)| *name == merchant_name)
        .map(|(_, color)| *color)
        .unwrap_or(DEFAULT_CARD_COLOR)
}
