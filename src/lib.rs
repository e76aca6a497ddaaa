//! Part Valuation: price quotes for 3D-printed parts
//!
//! A [`Quote`](entities::Quote) is built from print time, material usage,
//! labor durations, and six difficulty ratings, then priced against a
//! [`RateConfig`](core::RateConfig). Every cost and price is a pure function
//! of that immutable state.
//!
//! ```
//! use partval::entities::{Quote, QuoteInputs, ShippingTier};
//!
//! let quote = Quote::new(QuoteInputs {
//!     shipping: ShippingTier::Overnight,
//!     ..QuoteInputs::new(10.0, 1.0)
//! })?;
//! assert!((quote.total_cost() - 52.175).abs() < 1e-3);
//! # Ok::<(), partval::core::QuoteError>(())
//! ```

pub mod core;
pub mod entities;
pub mod yaml;
