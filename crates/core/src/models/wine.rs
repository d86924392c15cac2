//! Wine catalog models.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::WineId;

/// Wine color / style classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::Type))]
#[cfg_attr(
    feature = "postgres",
    sqlx(type_name = "osteria.wine_type", rename_all = "snake_case")
)]
#[serde(rename_all = "snake_case")]
pub enum WineType {
    Red,
    White,
    Rose,
    Sparkling,
}

impl std::fmt::Display for WineType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Red => "red",
            Self::White => "white",
            Self::Rose => "rose",
            Self::Sparkling => "sparkling",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for WineType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "red" => Ok(Self::Red),
            "white" => Ok(Self::White),
            "rose" => Ok(Self::Rose),
            "sparkling" => Ok(Self::Sparkling),
            _ => Err(format!("invalid wine type: {s}")),
        }
    }
}

/// A wine list entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "postgres", derive(sqlx::FromRow))]
pub struct Wine {
    pub id: WineId,
    pub name: String,
    pub winery: String,
    pub wine_type: WineType,
    pub region: String,
    pub year: Option<i32>,
    /// Bottle price.
    pub price: Decimal,
    /// By-the-glass price, where offered.
    pub glass_price: Option<Decimal>,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub is_available: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_wine_type_roundtrip() {
        for t in [WineType::Red, WineType::White, WineType::Rose, WineType::Sparkling] {
            let parsed: WineType = t.to_string().parse().unwrap();
            assert_eq!(parsed, t);
        }
    }

    #[test]
    fn test_wine_type_rejects_unknown() {
        assert!("orange".parse::<WineType>().is_err());
    }

    #[test]
    fn test_wine_type_serde() {
        let json = serde_json::to_string(&WineType::Sparkling).unwrap();
        assert_eq!(json, "\"sparkling\"");
    }
}
