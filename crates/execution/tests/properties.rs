//! Property tests for the cost models.
//!
//! Covers:
//! - Zero-size orders carry no slippage
//! - Slippage monotonicity once visible depth is exhausted
//! - Impact monotonicity in size and volatility
//! - Maker probability bounds
//! - Fee tier parsing fallbacks

use proptest::prelude::*;
use tradesim_execution::{
    CostEstimator, DepthWalkSlippage, FeeModel, LogisticMakerTaker, MakerTakerModel,
    MarketImpactModel, SlippageModel, SquareRootImpact, TieredFee,
};
use tradesim_types::{FeeTier, OrderBookSnapshot, TradeParameters, TradeSide};

/// Generates a valid snapshot with 1..=8 levels per side around a mid of ~100.
fn valid_book() -> impl Strategy<Value = OrderBookSnapshot> {
    (
        50.0f64..150.0,
        0.01f64..5.0,
        prop::collection::vec((0.01f64..2.0, 0.0f64..50.0), 1..=8),
        prop::collection::vec((0.01f64..2.0, 0.0f64..50.0), 1..=8),
    )
        .prop_map(|(mid, half_spread, bid_steps, ask_steps)| {
            let mut price = mid - half_spread;
            let bids: Vec<(f64, f64)> = bid_steps
                .iter()
                .map(|&(step, size)| {
                    let level = (price, size);
                    price -= step;
                    level
                })
                .collect();

            let mut price = mid + half_spread;
            let asks: Vec<(f64, f64)> = ask_steps
                .iter()
                .map(|&(step, size)| {
                    let level = (price, size);
                    price += step;
                    level
                })
                .collect();

            OrderBookSnapshot::from_ladders(&bids, &asks, 0).expect("generated book is valid")
        })
}

proptest! {
    #[test]
    fn prop_zero_size_has_zero_slippage(book in valid_book()) {
        let model = DepthWalkSlippage::default();
        prop_assert_eq!(model.estimate(&book, 0.0, TradeSide::Buy).unwrap(), 0.0);
        prop_assert_eq!(model.estimate(&book, 0.0, TradeSide::Sell).unwrap(), 0.0);
    }

    #[test]
    fn prop_slippage_non_decreasing_beyond_depth(
        book in valid_book(),
        extra_a in 0.0f64..500.0,
        extra_b in 0.0f64..500.0,
    ) {
        let model = DepthWalkSlippage::default();
        let depth = book.ask_volume();
        let small = depth + extra_a.min(extra_b) + 0.01;
        let large = depth + extra_a.max(extra_b) + 0.01;

        let s_small = model.estimate(&book, small, TradeSide::Buy).unwrap();
        let s_large = model.estimate(&book, large, TradeSide::Buy).unwrap();
        prop_assert!(s_large >= s_small - 1e-9, "{} < {}", s_large, s_small);
    }

    #[test]
    fn prop_impact_non_decreasing_in_size(
        book in valid_book(),
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0,
        vol in 0.0f64..0.5,
    ) {
        let model = SquareRootImpact::default();
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(model.estimate(&book, hi, vol) >= model.estimate(&book, lo, vol));
    }

    #[test]
    fn prop_impact_non_decreasing_in_volatility(
        book in valid_book(),
        size in 0.0f64..1_000.0,
        a in 0.0f64..0.5,
        b in 0.0f64..0.5,
    ) {
        let model = SquareRootImpact::default();
        let (lo, hi) = (a.min(b), a.max(b));
        prop_assert!(model.estimate(&book, size, hi) >= model.estimate(&book, size, lo));
    }

    #[test]
    fn prop_maker_probability_open_interval(
        book in valid_book(),
        size in 0.0f64..1e9,
    ) {
        let p = LogisticMakerTaker::default().maker_probability(&book, size);
        prop_assert!(p > 0.0 && p < 1.0);
    }

    #[test]
    fn prop_unknown_tier_uses_standard_rate(name in "[a-z]{0,8}", size in 0.0f64..1_000.0) {
        prop_assume!(!matches!(name.as_str(), "vip" | "vip1" | "vip2" | "vip3"));
        let model = TieredFee::default();
        let fee = model.calculate(size, FeeTier::from_name(&name));
        prop_assert!((fee - size * 0.001).abs() < 1e-9);
    }

    #[test]
    fn prop_estimate_always_finite(book in valid_book(), size in 0.0f64..10_000.0) {
        let est = CostEstimator::default()
            .estimate(&book, &TradeParameters::new("X", size))
            .unwrap();
        prop_assert!(est.first_non_finite().is_none());
    }
}
