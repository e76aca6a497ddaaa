//! Quote breakdown - a serializable snapshot of every derived value

use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::entities::quote::Quote;
use crate::entities::shipping::ShippingTier;

/// Itemized result of pricing a quote
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuoteBreakdown {
    /// Preparation labor in minutes
    pub preparation_time: f64,

    /// Post-processing labor in minutes
    pub post_processing_time: f64,

    /// All labor in minutes
    pub total_work_time: f64,

    pub labor_cost: f64,
    pub material_cost: f64,
    pub energy_cost: f64,
    pub cure_cost: f64,

    /// Sum of the four costs above
    pub raw_cost: f64,

    /// Sum of the six difficulty ratings
    pub rating_sum: u32,

    pub markup: f64,
    pub discount_coefficient: f64,

    /// Price before tax and shipping
    pub customer_adjusted_cost: f64,

    pub tax: f64,
    pub shipping: ShippingTier,
    pub shipping_fee: f64,

    /// Final price to the customer
    pub total_cost: f64,

    pub spools_needed: f64,
    pub total_profit: f64,

    /// Profit over adjusted cost; absent when the adjusted cost is zero
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub profit_margin: Option<f64>,
}

impl QuoteBreakdown {
    /// Compute every derived value of a quote
    pub fn from_quote(quote: &Quote) -> Self {
        let breakdown = Self {
            preparation_time: quote.preparation_time(),
            post_processing_time: quote.post_processing_time(),
            total_work_time: quote.total_work_time(),
            labor_cost: quote.labor_cost(),
            material_cost: quote.material_cost(),
            energy_cost: quote.energy_cost(),
            cure_cost: quote.cure_cost(),
            raw_cost: quote.raw_cost(),
            rating_sum: quote.ratings().sum(),
            markup: quote.markup(),
            discount_coefficient: quote.discount_coefficient(),
            customer_adjusted_cost: quote.customer_adjusted_cost(),
            tax: quote.tax(),
            shipping: quote.shipping(),
            shipping_fee: quote.shipping().fee(),
            total_cost: quote.total_cost(),
            spools_needed: quote.spools_needed(),
            total_profit: quote.total_profit(),
            profit_margin: quote.profit_margin().ok(),
        };

        trace!(
            raw_cost = breakdown.raw_cost,
            total_cost = breakdown.total_cost,
            "Computed quote breakdown"
        );
        breakdown
    }
}
