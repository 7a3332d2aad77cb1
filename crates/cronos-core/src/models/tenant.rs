use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Public view of a tenant, as served to booking pages
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
#[cfg_attr(feature = "ts", derive(ts_rs::TS), ts(export))]
pub struct PublicTenant {
    #[serde(default)]
    pub id: Option<String>,
    pub name: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub logo_url: Option<String>,
    #[serde(default)]
    pub primary_color: Option<String>,
    #[serde(default)]
    pub secondary_color: Option<String>,
    #[serde(flatten)]
    #[cfg_attr(feature = "ts", ts(skip))]
    pub extra: Map<String, Value>,
}

impl PublicTenant {
    /// Primary brand color, only if it is a `#RRGGBB` hex value
    pub fn brand_color(&self) -> Option<&str> {
        self.primary_color.as_deref().filter(|c| is_hex_color(c))
    }

    pub fn logo_url(&self) -> Option<&str> {
        self.logo_url.as_deref().filter(|u| !u.trim().is_empty())
    }
}

fn is_hex_color(s: &str) -> bool {
    s.len() == 7 && s.starts_with('#') && s[1..].chars().all(|c| c.is_ascii_hexdigit())
}
