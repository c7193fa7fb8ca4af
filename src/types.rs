use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// The eleven shade keys of a color scale, lightest to darkest.
pub const SHADE_KEYS: [u16; 11] = [50, 100, 200, 300, 400, 500, 600, 700, 800, 900, 950];

/// An 11-step shade ramp derived from one seed color. Serializes as a JSON
/// object keyed `"50"` through `"950"`, the shape the theming layer
/// exchanges. Holding one field per shade makes "exactly 11 keys, 500
/// present" a structural guarantee rather than a runtime check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColorScale {
    #[serde(rename = "50")]
    pub shade_50: String,
    #[serde(rename = "100")]
    pub shade_100: String,
    #[serde(rename = "200")]
    pub shade_200: String,
    #[serde(rename = "300")]
    pub shade_300: String,
    #[serde(rename = "400")]
    pub shade_400: String,
    #[serde(rename = "500")]
    pub shade_500: String,
    #[serde(rename = "600")]
    pub shade_600: String,
    #[serde(rename = "700")]
    pub shade_700: String,
    #[serde(rename = "800")]
    pub shade_800: String,
    #[serde(rename = "900")]
    pub shade_900: String,
    #[serde(rename = "950")]
    pub shade_950: String,
}

impl ColorScale {
    /// All eleven `(key, hex)` pairs in ascending key order.
    pub fn entries(&self) -> [(u16, &str); 11] {
        [
            (50, self.shade_50.as_str()),
            (100, self.shade_100.as_str()),
            (200, self.shade_200.as_str()),
            (300, self.shade_300.as_str()),
            (400, self.shade_400.as_str()),
            (500, self.shade_500.as_str()),
            (600, self.shade_600.as_str()),
            (700, self.shade_700.as_str()),
            (800, self.shade_800.as_str()),
            (900, self.shade_900.as_str()),
            (950, self.shade_950.as_str()),
        ]
    }

    /// Look up one shade by key; `None` for keys outside the fixed eleven.
    pub fn shade(&self, key: u16) -> Option<&str> {
        self.entries()
            .into_iter()
            .find(|(k, _)| *k == key)
            .map(|(_, hex)| hex)
    }
}

/// A theme's named color scales (e.g. `primary`, `neutral`, `danger`).
/// Produced and owned by the theming layer; this crate only reads it.
/// Iteration follows name order, which is the warning emission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ThemeColors(pub BTreeMap<String, ColorScale>);

impl ThemeColors {
    pub fn iter(&self) -> impl Iterator<Item = (&str, &ColorScale)> {
        self.0.iter().map(|(name, scale)| (name.as_str(), scale))
    }

    pub fn insert(&mut self, name: impl Into<String>, scale: ColorScale) {
        self.0.insert(name.into(), scale);
    }
}

/// One reported accessibility failure for a named scale and usage variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WcagWarning {
    pub scale: String,
    pub variant: String,
    pub issue: String,
    pub recommendation: String,
}
