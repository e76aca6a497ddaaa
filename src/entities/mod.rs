//! Entity type definitions
//!
//! **Inputs:**
//! - [`Ratings`] - The six difficulty ratings that set the markup
//! - [`ShippingTier`] - Flat-fee shipping options
//! - [`QuoteInputs`] / [`LaborTimes`] - Job measurements and labor durations
//!
//! **Pricing:**
//! - [`Quote`] - Validated quote with cost, price, and margin derivations
//! - [`QuoteBreakdown`] - Serializable snapshot of every derived value

pub mod breakdown;
pub mod quote;
pub mod rating;
pub mod shipping;

pub use breakdown::QuoteBreakdown;
pub use quote::{LaborTimes, Quote, QuoteInputs};
pub use rating::{
    MaterialRemoval, PartUseCase, PrintComplexity, Ratings, StressPoints, Tolerance,
    WallThickness,
};
pub use shipping::ShippingTier;
