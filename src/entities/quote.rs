//! Quote entity - price quote for a single 3D-printed part
//!
//! A quote is built once from validated [`QuoteInputs`] and a [`RateConfig`].
//! Every cost, price, and margin is derived on demand from that immutable
//! state; nothing is cached and nothing can be changed after construction.
//!
//! Time units are deliberately mixed: print time is in hours (billed at the
//! hourly energy rate) while labor and cure durations are in minutes.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::config::RateConfig;
use crate::core::error::QuoteError;
use crate::entities::breakdown::QuoteBreakdown;
use crate::entities::rating::Ratings;
use crate::entities::shipping::ShippingTier;
use crate::yaml::diagnostics::YamlSyntaxError;

/// Hands-on labor per phase, in minutes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LaborTimes {
    /// Repairing or adjusting the model before slicing
    pub model_clean_up: f64,

    /// Slicing and print setup
    pub slice_time: f64,

    /// Swapping filament
    pub material_change: f64,

    /// Taking the part off the bed
    pub part_removal: f64,

    /// Removing support material
    pub support_removal: f64,

    /// Assembling multi-piece parts
    pub assembly: f64,
}

impl Default for LaborTimes {
    fn default() -> Self {
        Self {
            model_clean_up: 0.0,
            slice_time: 5.0,
            material_change: 0.0,
            part_removal: 5.0,
            support_removal: 5.0,
            assembly: 5.0,
        }
    }
}

impl LaborTimes {
    /// Minutes spent before the print starts
    pub fn preparation_time(&self) -> f64 {
        self.model_clean_up + self.slice_time + self.material_change
    }

    /// Minutes spent after the print finishes
    pub fn post_processing_time(&self) -> f64 {
        self.part_removal + self.support_removal + self.assembly
    }

    /// Total billable labor minutes
    pub fn total_work_time(&self) -> f64 {
        self.preparation_time() + self.post_processing_time()
    }

    fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("model_clean_up", self.model_clean_up),
            ("slice_time", self.slice_time),
            ("material_change", self.material_change),
            ("part_removal", self.part_removal),
            ("support_removal", self.support_removal),
            ("assembly", self.assembly),
        ]
    }
}

fn default_cure_time() -> f64 {
    5.0
}

fn default_bulk_discount() -> f64 {
    0.2
}

fn default_n_parts() -> u32 {
    1
}

fn default_discount_cutoff() -> u32 {
    9
}

/// Everything that describes one print job
///
/// Only `print_time` and `material_usage` are required; every other field
/// falls back to the shop default when omitted from a document.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct QuoteInputs {
    /// Printer run time in hours
    pub print_time: f64,

    /// Filament used, in the same mass unit as the spool weight
    pub material_usage: f64,

    /// Labor durations in minutes
    #[serde(default)]
    pub labor: LaborTimes,

    /// Post-print cure time in minutes
    #[serde(default = "default_cure_time")]
    pub cure_time: f64,

    /// Cure cost per minute
    #[serde(default)]
    pub cure_time_rate: f64,

    /// Fractional discount for bulk orders (0.2 = 20% off)
    #[serde(default = "default_bulk_discount")]
    pub bulk_discount: f64,

    /// Number of parts ordered
    #[serde(default = "default_n_parts")]
    pub n_parts: u32,

    /// Bulk discount applies when `n_parts` is strictly greater than this
    #[serde(default = "default_discount_cutoff")]
    pub discount_cutoff: u32,

    #[serde(default)]
    pub shipping: ShippingTier,

    #[serde(default)]
    pub ratings: Ratings,
}

impl QuoteInputs {
    /// Inputs for a job with the given measurements and shop defaults for the rest
    pub fn new(print_time: f64, material_usage: f64) -> Self {
        Self {
            print_time,
            material_usage,
            labor: LaborTimes::default(),
            cure_time: default_cure_time(),
            cure_time_rate: 0.0,
            bulk_discount: default_bulk_discount(),
            n_parts: default_n_parts(),
            discount_cutoff: default_discount_cutoff(),
            shipping: ShippingTier::default(),
            ratings: Ratings::default(),
        }
    }

    /// Parse inputs from an in-memory YAML document
    pub fn from_yaml_str(source: &str) -> Result<Self, YamlSyntaxError> {
        serde_yml::from_str(source)
            .map_err(|e| YamlSyntaxError::from_serde_error(&e, source, "quote inputs"))
    }

    /// Parse inputs from an in-memory JSON document
    pub fn from_json_str(source: &str) -> Result<Self, YamlSyntaxError> {
        serde_json::from_str(source)
            .map_err(|e| YamlSyntaxError::from_json_error(&e, source, "quote inputs"))
    }

    /// Check every measurement is usable for pricing
    pub fn validate(&self) -> Result<(), QuoteError> {
        let measurements = [
            ("print_time", self.print_time),
            ("material_usage", self.material_usage),
            ("cure_time", self.cure_time),
            ("cure_time_rate", self.cure_time_rate),
        ];

        for (field, value) in measurements.into_iter().chain(self.labor.fields()) {
            if !value.is_finite() {
                return Err(QuoteError::Validation {
                    field,
                    value,
                    reason: "must be a finite number",
                });
            }
            if value < 0.0 {
                return Err(QuoteError::Validation {
                    field,
                    value,
                    reason: "must not be negative",
                });
            }
        }

        if !(0.0..=1.0).contains(&self.bulk_discount) {
            return Err(QuoteError::Validation {
                field: "bulk_discount",
                value: self.bulk_discount,
                reason: "must be a fraction between 0 and 1",
            });
        }

        Ok(())
    }
}

/// A validated, immutable price quote
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Quote {
    inputs: QuoteInputs,
    rates: RateConfig,
}

impl Quote {
    /// Build a quote priced at the default rates
    pub fn new(inputs: QuoteInputs) -> Result<Self, QuoteError> {
        Self::with_rates(inputs, RateConfig::default())
    }

    /// Build a quote from measurements alone, with every other input defaulted
    pub fn from_measurements(print_time: f64, material_usage: f64) -> Result<Self, QuoteError> {
        Self::new(QuoteInputs::new(print_time, material_usage))
    }

    /// Build a quote priced at the given rates
    pub fn with_rates(inputs: QuoteInputs, rates: RateConfig) -> Result<Self, QuoteError> {
        rates
            .validate()
            .map_err(QuoteError::from)
            .and_then(|()| inputs.validate())
            .and_then(|()| Self { inputs, rates }.check_priceable())
            .inspect_err(|e| warn!(field = e.field(), "Rejected quote inputs: {}", e))?;

        let quote = Self { inputs, rates };
        debug!(
            print_time = inputs.print_time,
            material_usage = inputs.material_usage,
            n_parts = inputs.n_parts,
            markup = quote.markup(),
            "Built quote"
        );
        Ok(quote)
    }

    /// Every derived amount must stay finite, so no price can be inf or NaN
    fn check_priceable(&self) -> Result<(), QuoteError> {
        let amounts = [
            ("labor_cost", self.labor_cost()),
            ("material_cost", self.material_cost()),
            ("energy_cost", self.energy_cost()),
            ("cure_cost", self.cure_cost()),
            ("raw_cost", self.raw_cost()),
            ("customer_adjusted_cost", self.customer_adjusted_cost()),
            ("total_cost", self.total_cost()),
        ];

        for (field, value) in amounts {
            if !value.is_finite() {
                return Err(QuoteError::Validation {
                    field,
                    value,
                    reason: "inputs are too large to price",
                });
            }
        }
        Ok(())
    }

    /// The validated inputs
    pub fn inputs(&self) -> &QuoteInputs {
        &self.inputs
    }

    /// The rates this quote is priced at
    pub fn rates(&self) -> &RateConfig {
        &self.rates
    }

    pub fn print_time(&self) -> f64 {
        self.inputs.print_time
    }

    pub fn material_usage(&self) -> f64 {
        self.inputs.material_usage
    }

    pub fn labor(&self) -> &LaborTimes {
        &self.inputs.labor
    }

    pub fn ratings(&self) -> &Ratings {
        &self.inputs.ratings
    }

    pub fn shipping(&self) -> ShippingTier {
        self.inputs.shipping
    }

    pub fn n_parts(&self) -> u32 {
        self.inputs.n_parts
    }

    // Labor time

    pub fn preparation_time(&self) -> f64 {
        self.inputs.labor.preparation_time()
    }

    pub fn post_processing_time(&self) -> f64 {
        self.inputs.labor.post_processing_time()
    }

    pub fn total_work_time(&self) -> f64 {
        self.inputs.labor.total_work_time()
    }

    // Cost decomposition

    /// Labor billed per minute at the hourly labor rate
    pub fn labor_cost(&self) -> f64 {
        self.rates.labor_rate_per_minute() * self.total_work_time()
    }

    /// Filament cost at the per-spool price
    pub fn material_cost(&self) -> f64 {
        self.rates.material_rate() * self.inputs.material_usage
    }

    /// Energy cost for the print, at the hourly energy rate
    pub fn energy_cost(&self) -> f64 {
        self.rates.hourly_energy_rate() * self.inputs.print_time
    }

    pub fn cure_cost(&self) -> f64 {
        self.inputs.cure_time * self.inputs.cure_time_rate
    }

    /// Labor + material + energy + cure, before markup
    pub fn raw_cost(&self) -> f64 {
        self.labor_cost() + self.material_cost() + self.energy_cost() + self.cure_cost()
    }

    /// Spools of filament the job consumes (informational, not billed)
    pub fn spools_needed(&self) -> f64 {
        self.inputs.material_usage / self.rates.spool_weight
    }

    // Pricing

    /// Markup factor from the difficulty ratings (0.6..=3.0)
    pub fn markup(&self) -> f64 {
        self.inputs.ratings.markup()
    }

    /// Multiplier after the bulk discount; only orders strictly above the cutoff qualify
    pub fn discount_coefficient(&self) -> f64 {
        if self.inputs.n_parts > self.inputs.discount_cutoff {
            1.0 - self.inputs.bulk_discount
        } else {
            1.0
        }
    }

    /// Price before tax and shipping
    pub fn customer_adjusted_cost(&self) -> f64 {
        (self.markup() * self.raw_cost()) * self.discount_coefficient()
    }

    /// Tax on the customer adjusted cost; shipping is never taxed
    pub fn tax(&self) -> f64 {
        self.customer_adjusted_cost() * self.rates.tax_rate
    }

    /// Final price: taxed adjusted cost plus the shipping fee
    pub fn total_cost(&self) -> f64 {
        (self.customer_adjusted_cost() * (1.0 + self.rates.tax_rate)) + self.inputs.shipping.fee()
    }

    // Profitability

    pub fn total_profit(&self) -> f64 {
        self.customer_adjusted_cost() - self.raw_cost()
    }

    /// Profit as a fraction of the customer adjusted cost
    ///
    /// Fails with [`QuoteError::Division`] when the adjusted cost is zero,
    /// e.g. a job with no billable time or material, or a 100% bulk discount.
    pub fn profit_margin(&self) -> Result<f64, QuoteError> {
        let adjusted = self.customer_adjusted_cost();
        if adjusted == 0.0 {
            return Err(QuoteError::Division {
                quantity: "profit margin",
            });
        }
        Ok(self.total_profit() / adjusted)
    }

    /// Snapshot of every derived value
    pub fn breakdown(&self) -> QuoteBreakdown {
        QuoteBreakdown::from_quote(self)
    }
}
