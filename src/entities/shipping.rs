//! Shipping tiers with flat fees

use serde::{Deserialize, Serialize};

use crate::core::error::QuoteError;

/// Shipping speed, billed as a flat fee after tax
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[derive(Default)]
pub enum ShippingTier {
    /// Customer pickup
    None,
    #[default]
    Economy,
    ThreeDay,
    Overnight,
}

impl ShippingTier {
    /// Flat fee in whole currency units
    pub fn value(self) -> u32 {
        match self {
            ShippingTier::None => 0,
            ShippingTier::Economy => 5,
            ShippingTier::ThreeDay => 10,
            ShippingTier::Overnight => 15,
        }
    }

    /// Flat fee added to the taxed total
    pub fn fee(self) -> f64 {
        f64::from(self.value())
    }

    /// All tiers, cheapest first
    pub fn all() -> &'static [ShippingTier] {
        &[
            ShippingTier::None,
            ShippingTier::Economy,
            ShippingTier::ThreeDay,
            ShippingTier::Overnight,
        ]
    }
}

impl TryFrom<u32> for ShippingTier {
    type Error = QuoteError;

    fn try_from(fee: u32) -> Result<Self, Self::Error> {
        ShippingTier::all()
            .iter()
            .copied()
            .find(|tier| tier.value() == fee)
            .ok_or(QuoteError::Validation {
                field: "shipping",
                value: f64::from(fee),
                reason: "no shipping tier has this fee",
            })
    }
}

impl std::fmt::Display for ShippingTier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ShippingTier::None => write!(f, "none"),
            ShippingTier::Economy => write!(f, "economy"),
            ShippingTier::ThreeDay => write!(f, "three_day"),
            ShippingTier::Overnight => write!(f, "overnight"),
        }
    }
}

impl std::str::FromStr for ShippingTier {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" | "pickup" => Ok(ShippingTier::None),
            "economy" => Ok(ShippingTier::Economy),
            "three_day" | "three-day" | "threeday" => Ok(ShippingTier::ThreeDay),
            "overnight" => Ok(ShippingTier::Overnight),
            _ => Err(format!(
                "Invalid shipping tier: {}. Use none, economy, three_day, or overnight",
                s
            )),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fees() {
        assert_eq!(ShippingTier::None.fee(), 0.0);
        assert_eq!(ShippingTier::Economy.fee(), 5.0);
        assert_eq!(ShippingTier::ThreeDay.fee(), 10.0);
        assert_eq!(ShippingTier::Overnight.fee(), 15.0);
        assert_eq!(ShippingTier::default(), ShippingTier::Economy);
    }

    #[test]
    fn test_try_from_fee() {
        assert_eq!(ShippingTier::try_from(10).unwrap(), ShippingTier::ThreeDay);
        assert!(matches!(
            ShippingTier::try_from(7),
            Err(QuoteError::Validation {
                field: "shipping",
                ..
            })
        ));
    }

    #[test]
    fn test_from_str() {
        assert_eq!(
            "Three-Day".parse::<ShippingTier>().unwrap(),
            ShippingTier::ThreeDay
        );
        assert_eq!("pickup".parse::<ShippingTier>().unwrap(), ShippingTier::None);
        assert!("drone".parse::<ShippingTier>().is_err());
    }

    #[test]
    fn test_display_matches_serde_name() {
        for tier in ShippingTier::all() {
            let json = serde_json::to_string(tier).unwrap();
            assert_eq!(json, format!("\"{}\"", tier));
        }
    }
}
