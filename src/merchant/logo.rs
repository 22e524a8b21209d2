/// Merchant logo resolution

use log::warn;
use serde::Serialize;

pub const FALLBACK_LOGO: &str = "merchants/seecoz.png";

// Keys are sanitized names, see `sanitize_merchant_name`
const LOGOS: &[(&str, &str)] = &[
    ("subway", "merchants/subway.png"),
    ("hirds", "merchants/hirds.png"),
    ("granita", "merchants/granita.png"),
    ("mola", "merchants/molas.png"),
    ("molas", "merchants/molas.png"),
    ("munch_and_shake", "merchants/munch.png"),
    ("munch_&_shake", "merchants/munch.png"),
    ("daily_dose", "merchants/daily_dose.png"),
    ("daily_dose_by_café_younes", "merchants/daily_dose.png"),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LogoAsset {
    /// Asset path relative to the image bundle
    pub path: &'static str,
    pub is_fallback: bool,
}

/// Lower-case, `" & "` becomes `"_and_"`, remaining spaces become `_`
pub fn sanitize_merchant_name(name: &str) -> String {
    name.to_lowercase().replace(" & ", "_and_").replace(' ', "_")
}

/// Resolve the logo for a merchant, falling back to the placeholder logo
pub fn merchant_logo(merchant_name: &str) -> LogoAsset {
    let fallback = LogoAsset {
        path: FALLBACK_LOGO,
        is_fallback: true,
    };
    if merchant_name.is_empty() {
        return fallback;
    }

    let key = sanitize_merchant_name(merchant_name);
    match LOGOS.iter().find(|(k, _)| *k == key) {
        Some((_, path)) => LogoAsset {
            path: *path,
            is_fallback: false,
        },
        None => {
            warn!(
                "Logo not found for merchant {:?} (sanitized to {:?})",
                merchant_name, key
            );
            fallback
        }
    }
}
