//! Wallet loading and merchant name search

use log::{debug, warn};
use serde_json::Value;

use crate::merchant::{LoyaltyCard, Merchant};
use crate::{Error, Result};

/// Parse a wallet response (a JSON array of cards).
///
/// Each card is decoded on its own; cards whose merchant is missing, null,
/// unnamed or carries an invalid loyalty program are dropped and the rest
/// are kept. Only a payload that is not an array is an error.
pub fn load_wallet(json: &str) -> Result<Vec<LoyaltyCard>> {
    let entries: Vec<Value> = serde_json::from_str(json)
        .map_err(|e| Error::DataError(format!("wallet is not a JSON array: {}", e)))?;
    let total = entries.len();

    let cards: Vec<LoyaltyCard> = entries
        .into_iter()
        .enumerate()
        .filter_map(|(idx, entry)| match serde_json::from_value::<LoyaltyCard>(entry) {
            Ok(card) if !card.merchant.name.trim().is_empty() => Some(card),
            Ok(card) => {
                debug!("dropping card {}: merchant has no name", card.id);
                None
            }
            Err(e) => {
                debug!("dropping card at index {}: {}", idx, e);
                None
            }
        })
        .collect();

    if cards.len() != total {
        warn!("Filtered out {} invalid cards", total - cards.len());
    }
    Ok(cards)
}

/// Anything that can be found by merchant name
pub trait MerchantNamed {
    fn merchant_name(&self) -> &str;
}

impl MerchantNamed for Merchant {
    fn merchant_name(&self) -> &str {
        &self.name
    }
}

impl MerchantNamed for LoyaltyCard {
    fn merchant_name(&self) -> &str {
        &self.merchant.name
    }
}

/// Case-insensitive substring match on the merchant name. An empty query
/// matches everything.
pub fn search<'a, T: MerchantNamed>(items: &'a [T], query: &str) -> Vec<&'a T> {
    let query = query.to_lowercase();
    items
        .iter()
        .filter(|item| item.merchant_name().to_lowercase().contains(&query))
        .collect()
}
