//! Property tests for quote pricing
//!
//! Each property holds for any valid job: non-negative measurements,
//! any combination of ratings, any shipping tier.

use partval::core::QuoteError;
use partval::entities::{LaborTimes, Quote, QuoteInputs, Ratings, ShippingTier};
use proptest::prelude::*;

fn rating_value() -> impl Strategy<Value = u8> {
    prop_oneof![Just(1u8), Just(3u8), Just(5u8)]
}

fn ratings() -> impl Strategy<Value = Ratings> {
    prop::array::uniform6(rating_value())
        .prop_map(|values| Ratings::from_values(values).expect("scale values are valid"))
}

fn shipping() -> impl Strategy<Value = ShippingTier> {
    prop::sample::select(ShippingTier::all().to_vec())
}

fn labor() -> impl Strategy<Value = LaborTimes> {
    prop::array::uniform6(0.0f64..120.0).prop_map(|m| LaborTimes {
        model_clean_up: m[0],
        slice_time: m[1],
        material_change: m[2],
        part_removal: m[3],
        support_removal: m[4],
        assembly: m[5],
    })
}

prop_compose! {
    fn quote_inputs()(
        print_time in 0.0f64..200.0,
        material_usage in 0.0f64..10.0,
        labor in labor(),
        cure_time in 0.0f64..120.0,
        cure_time_rate in 0.0f64..1.0,
        bulk_discount in 0.0f64..=1.0,
        n_parts in 0u32..100,
        discount_cutoff in 0u32..50,
        shipping in shipping(),
        ratings in ratings(),
    ) -> QuoteInputs {
        QuoteInputs {
            print_time,
            material_usage,
            labor,
            cure_time,
            cure_time_rate,
            bulk_discount,
            n_parts,
            discount_cutoff,
            shipping,
            ratings,
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Raw cost is exactly the sum of its four parts
    #[test]
    fn raw_cost_is_sum_of_parts(inputs in quote_inputs()) {
        let quote = Quote::new(inputs).unwrap();
        prop_assert_eq!(
            quote.raw_cost(),
            quote.labor_cost() + quote.material_cost() + quote.energy_cost() + quote.cure_cost()
        );
    }

    /// Total is the taxed adjusted cost plus the untaxed shipping fee
    #[test]
    fn total_cost_composition(inputs in quote_inputs()) {
        let quote = Quote::new(inputs).unwrap();
        prop_assert_eq!(
            quote.total_cost(),
            quote.customer_adjusted_cost() * (1.0 + 0.056) + quote.shipping().fee()
        );
        prop_assert!(quote.total_cost().is_finite());
    }

    /// Markup stays within the bounds of the rating scale
    #[test]
    fn markup_is_bounded(ratings in ratings()) {
        let markup = ratings.markup();
        prop_assert!((0.6..=3.0).contains(&markup));
        prop_assert_eq!(ratings.sum() % 2, 0);
    }

    /// Discount applies only when the order exceeds the cutoff
    #[test]
    fn discount_boundary(
        inputs in quote_inputs(),
        cutoff in 0u32..1000,
    ) {
        let at = Quote::new(QuoteInputs { n_parts: cutoff, discount_cutoff: cutoff, ..inputs }).unwrap();
        let above = Quote::new(QuoteInputs { n_parts: cutoff + 1, discount_cutoff: cutoff, ..inputs }).unwrap();

        prop_assert_eq!(at.discount_coefficient(), 1.0);
        prop_assert_eq!(above.discount_coefficient(), 1.0 - inputs.bulk_discount);
    }

    /// Margin is either a finite ratio or an explicit division error
    #[test]
    fn profit_margin_is_never_nan(inputs in quote_inputs()) {
        let quote = Quote::new(inputs).unwrap();
        match quote.profit_margin() {
            Ok(margin) => prop_assert!(margin.is_finite()),
            Err(err) => {
                let is_division = matches!(err, QuoteError::Division { .. });
                prop_assert!(is_division);
                prop_assert_eq!(quote.customer_adjusted_cost(), 0.0);
            }
        }
    }

    /// Negative print times are always rejected
    #[test]
    fn negative_print_time_is_rejected(
        inputs in quote_inputs(),
        print_time in -1000.0f64..-0.001,
    ) {
        let result = Quote::new(QuoteInputs { print_time, ..inputs });
        prop_assert!(result.is_err());
    }

    /// Any magnitude of print time or material is either priced finitely or rejected
    #[test]
    fn extreme_measurements_are_priced_or_rejected(
        inputs in quote_inputs(),
        print_time in prop::num::f64::POSITIVE,
        material_usage in prop::num::f64::POSITIVE,
    ) {
        match Quote::new(QuoteInputs { print_time, material_usage, ..inputs }) {
            Ok(quote) => {
                prop_assert!(quote.raw_cost().is_finite());
                prop_assert!(quote.total_cost().is_finite());
                match quote.profit_margin() {
                    Ok(margin) => prop_assert!(margin.is_finite()),
                    Err(err) => {
                        let is_division = matches!(err, QuoteError::Division { .. });
                        prop_assert!(is_division);
                    }
                }
            }
            Err(err) => {
                let is_validation = matches!(err, QuoteError::Validation { .. });
                prop_assert!(is_validation);
            }
        }
    }
}
