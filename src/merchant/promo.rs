/// Offer and reward image resolution

use serde::Serialize;

pub const PROMO_PLACEHOLDER: &str = "icons/promo_placeholder.png";

const LOCAL_SCHEME: &str = "local://";

const PROMO_IMAGES: &[(&str, &str)] = &[
    ("subway_offer.png", "merchants/subway.png"),
    ("mola_offer.png", "merchants/molas.png"),
    ("hirds_offer.png", "merchants/hirds.png"),
    ("granita_offer.png", "merchants/granita.png"),
    ("munch_offer.png", "merchants/munch.png"),
    ("daily_dose_offer.png", "merchants/daily_dose.png"),
    ("subway_reward.png", "merchants/subway.png"),
    ("mola_reward.png", "merchants/molas.png"),
    ("hirds_reward.png", "merchants/hirds.png"),
    ("granita_reward.png", "merchants/granita.png"),
    ("munch_reward.png", "merchants/munch.png"),
    ("daily_dose_reward.png", "merchants/daily_dose.png"),
];

/// Where an offer or reward image comes from
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "path", rename_all = "lowercase")]
pub enum PromoImage {
    /// Bundled asset
    Local(&'static str),
    /// External URL, passed through untouched
    Remote(String),
    Placeholder,
}

impl PromoImage {
    /// Asset path or URL to load
    pub fn source(&self) -> &str {
        match self {
            PromoImage::Local(path) => *path,
            PromoImage::Remote(url) => url.as_str(),
            PromoImage::Placeholder => PROMO_PLACEHOLDER,
        }
    }
}

pub fn promotional_image(image_url: &str) -> PromoImage {
    if image_url.is_empty() {
        return PromoImage::Placeholder;
    }
    match image_url.strip_prefix(LOCAL_SCHEME) {
        Some(name) => PROMO_IMAGES
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, path)| PromoImage::Local(*path))
            .unwrap_or(PromoImage::Placeholder),
        None => PromoImage::Remote(image_url.to_string()),
    }
}
