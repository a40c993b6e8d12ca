use serde::{Deserialize, Serialize};

/// Whether a brand is first-party inventory or a third-party partner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BrandKind {
    Own,
    ThirdParty,
}

impl std::fmt::Display for BrandKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BrandKind::Own => write!(f, "OWN"),
            BrandKind::ThirdParty => write!(f, "THIRD_PARTY"),
        }
    }
}

impl std::str::FromStr for BrandKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "OWN" => Ok(BrandKind::Own),
            "THIRD_PARTY" => Ok(BrandKind::ThirdParty),
            _ => Err(format!("Invalid brand kind: {}", s)),
        }
    }
}

/// Ordering applied to a product listing before display.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    #[default]
    #[serde(rename = "newest")]
    Newest,
    #[serde(rename = "price-low")]
    PriceLowToHigh,
    #[serde(rename = "price-high")]
    PriceHighToLow,
}

impl std::fmt::Display for SortOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SortOrder::Newest => write!(f, "newest"),
            SortOrder::PriceLowToHigh => write!(f, "price-low"),
            SortOrder::PriceHighToLow => write!(f, "price-high"),
        }
    }
}

impl std::str::FromStr for SortOrder {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(SortOrder::Newest),
            "price-low" => Ok(SortOrder::PriceLowToHigh),
            "price-high" => Ok(SortOrder::PriceHighToLow),
            _ => Err(format!("Invalid sort order: {}", s)),
        }
    }
}
