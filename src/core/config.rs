//! Rate configuration with layered overrides
//!
//! Rates are process-wide pricing constants. The defaults below are the
//! shop's published rates; [`RateOverrides`] lets a caller (usually a test)
//! replace any subset of them before quotes are built.

use serde::{Deserialize, Serialize};

use crate::core::error::ConfigError;
use crate::yaml::diagnostics::YamlSyntaxError;

/// Labor rate in currency per hour
pub const HOURLY_LABOR_RATE: f64 = 30.0;

/// Price of one filament spool
pub const SPOOL_PRICE: f64 = 30.0;

/// Mass of filament on one spool
pub const SPOOL_WEIGHT: f64 = 2.2;

/// Printer power draw cost per print hour
pub const PRINTER_CONSUMPTION: f64 = 0.15;

/// Utility energy cost per print hour
pub const CITY_ENERGY_COST: f64 = 0.12;

/// Fixed electrical startup cost, charged per print hour
pub const ELECTRICAL_STARTUP_COST: f64 = 0.30;

/// Sales tax applied to the customer adjusted cost
pub const TAX_RATE: f64 = 0.0560;

/// Pricing rates used by every quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateConfig {
    /// Labor rate (currency/hour)
    pub hourly_labor_rate: f64,

    /// Price per spool
    pub spool_price: f64,

    /// Filament mass per spool
    pub spool_weight: f64,

    /// Printer consumption (currency/hour)
    pub printer_consumption: f64,

    /// City energy cost (currency/hour)
    pub city_energy_cost: f64,

    /// Electrical startup cost
    pub electrical_startup_cost: f64,

    /// Tax rate as a fraction (0.056 = 5.6%)
    pub tax_rate: f64,
}

impl Default for RateConfig {
    fn default() -> Self {
        Self {
            hourly_labor_rate: HOURLY_LABOR_RATE,
            spool_price: SPOOL_PRICE,
            spool_weight: SPOOL_WEIGHT,
            printer_consumption: PRINTER_CONSUMPTION,
            city_energy_cost: CITY_ENERGY_COST,
            electrical_startup_cost: ELECTRICAL_STARTUP_COST,
            tax_rate: TAX_RATE,
        }
    }
}

/// A partial set of rates; present fields replace the base value on merge
#[derive(Debug, Clone, Copy, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateOverrides {
    pub hourly_labor_rate: Option<f64>,
    pub spool_price: Option<f64>,
    pub spool_weight: Option<f64>,
    pub printer_consumption: Option<f64>,
    pub city_energy_cost: Option<f64>,
    pub electrical_startup_cost: Option<f64>,
    pub tax_rate: Option<f64>,
}

impl RateConfig {
    /// Combined energy rate per print hour
    pub fn hourly_energy_rate(&self) -> f64 {
        self.printer_consumption + self.city_energy_cost + self.electrical_startup_cost
    }

    /// Labor rate per minute
    pub fn labor_rate_per_minute(&self) -> f64 {
        self.hourly_labor_rate / 60.0
    }

    /// Material price per unit of filament mass
    pub fn material_rate(&self) -> f64 {
        self.spool_price / self.spool_weight
    }

    /// Build rates from an in-memory YAML overrides document, layered on the defaults
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        let overrides = if source.trim().is_empty() {
            RateOverrides::default()
        } else {
            serde_yml::from_str::<RateOverrides>(source)
                .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, "rate config"))?
        };

        let mut config = RateConfig::default();
        config.merge(overrides);
        config.validate()?;
        Ok(config)
    }

    /// Merge overrides into this config (overrides take precedence)
    pub fn merge(&mut self, other: RateOverrides) {
        if let Some(rate) = other.hourly_labor_rate {
            self.hourly_labor_rate = rate;
        }
        if let Some(price) = other.spool_price {
            self.spool_price = price;
        }
        if let Some(weight) = other.spool_weight {
            self.spool_weight = weight;
        }
        if let Some(cost) = other.printer_consumption {
            self.printer_consumption = cost;
        }
        if let Some(cost) = other.city_energy_cost {
            self.city_energy_cost = cost;
        }
        if let Some(cost) = other.electrical_startup_cost {
            self.electrical_startup_cost = cost;
        }
        if let Some(rate) = other.tax_rate {
            self.tax_rate = rate;
        }
    }

    /// Return a copy with the overrides applied
    pub fn with_overrides(mut self, other: RateOverrides) -> Self {
        self.merge(other);
        self
    }

    /// Check every rate is finite and non-negative, and the spool has mass
    pub fn validate(&self) -> Result<(), ConfigError> {
        let rates = [
            ("hourly_labor_rate", self.hourly_labor_rate),
            ("spool_price", self.spool_price),
            ("spool_weight", self.spool_weight),
            ("printer_consumption", self.printer_consumption),
            ("city_energy_cost", self.city_energy_cost),
            ("electrical_startup_cost", self.electrical_startup_cost),
            ("tax_rate", self.tax_rate),
        ];

        for (field, value) in rates {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidRate { field, value });
            }
        }

        if self.spool_weight == 0.0 {
            return Err(ConfigError::InvalidRate {
                field: "spool_weight",
                value: self.spool_weight,
            });
        }

        Ok(())
    }
}
