//! Property tests for the valuation and composition invariants

use lp_hedge::prelude::*;
use proptest::prelude::*;

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()).max(1.0)
}

proptest! {
    #[test]
    fn prop_unit_value_continuous_at_bounds(k in 0.01f64..10_000.0, r in 1.0001f64..10.0) {
        prop_assert!(close(unit_value(k / r, k, r), k / r, 1e-9));
        prop_assert!(close(unit_value(k * r, k, r), k, 1e-9));
    }

    #[test]
    fn prop_scaled_value_recovers_reference(
        lower in 1.0f64..1_000.0,
        width in 1.01f64..5.0,
        frac in 0.01f64..0.99,
        v0 in 1.0f64..1e7,
    ) {
        let upper = lower * width;
        let s0 = lower + frac * (upper - lower);
        let position = LiquidityPosition::from_bounds(s0, lower, upper, v0).unwrap();
        prop_assert!(close(scaled_value(s0, &position).unwrap(), v0, 1e-9));
    }

    #[test]
    fn prop_deposit_matches_reference_model(
        lower in 1.0f64..1_000.0,
        width in 1.05f64..5.0,
        frac in 0.05f64..0.95,
        x in 0.1f64..1_000.0,
        y in 1.0f64..100_000.0,
    ) {
        let upper = lower * width;
        let p0 = lower + frac * (upper - lower);
        let range = PriceRange::new(lower, upper).unwrap();
        let deposit = DepositPosition::new(x, y, p0, range).unwrap();

        let derived = deposit.liquidity().unwrap();
        let (position, _) = deposit.to_liquidity_position().unwrap();

        let by_amounts = value_at(p0, derived.liquidity, &range);
        let by_scaling = scaled_value(p0, &position).unwrap();
        prop_assert!(close(by_amounts, by_scaling, 1e-9));
    }

    #[test]
    fn prop_deposit_liquidity_never_negative(
        x in 0.0f64..1_000.0,
        y in 0.0f64..100_000.0,
        p0 in 0.1f64..500.0,
    ) {
        let range = PriceRange::new(80.0, 120.0).unwrap();
        let derived = deposit_liquidity(x, y, p0, &range).unwrap();
        prop_assert!(derived.liquidity.is_finite());
        prop_assert!(derived.liquidity >= 0.0);
        prop_assert_eq!(derived.warnings.is_empty(), range.strictly_contains(p0));
    }

    #[test]
    fn prop_put_price_tends_to_intrinsic(
        s in 1.0f64..300.0,
        k in 1.0f64..300.0,
        sigma in 0.01f64..2.0,
    ) {
        prop_assert_eq!(bs_put_price(s, k, 1e-11, sigma), intrinsic(s, k));
        // sigma·sqrt(T) ~ 1e-5: the time value is tiny
        let near = bs_put_price(s, k, 1e-10 + 1e-10 / (sigma * sigma), sigma);
        prop_assert!((near - intrinsic(s, k)).abs() < 1e-3 * k);
    }

    #[test]
    fn prop_put_price_bounds(
        s in 0.0f64..300.0,
        k in 1.0f64..300.0,
        t in 0.0f64..3.0,
        sigma in 0.0f64..2.0,
    ) {
        let price = bs_put_price(s, k, t, sigma);
        prop_assert!(price >= intrinsic(s, k) - 1e-9);
        prop_assert!(price <= k + 1e-9);
    }

    #[test]
    fn prop_expiry_payoff_monotone(
        strike in 1.0f64..500.0,
        premium in 0.0f64..50.0,
        quantity in 1.0f64..100.0,
        a in 0.0f64..1_000.0,
        b in 0.0f64..1_000.0,
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        let long = OptionContract::at_expiry(strike, premium, quantity, Side::Buy).unwrap();
        let short = OptionContract::at_expiry(strike, premium, quantity, Side::Sell).unwrap();

        prop_assert!(payoff_at_expiry(hi, &long) <= payoff_at_expiry(lo, &long));
        prop_assert!(payoff_at_expiry(hi, &short) >= payoff_at_expiry(lo, &short));
    }

    #[test]
    fn prop_combined_is_pointwise_sum(
        s0 in 50.0f64..150.0,
        strike in 20.0f64..200.0,
        samples in 2usize..400,
        theoretical in any::<bool>(),
    ) {
        let position = LiquidityPosition::from_bounds(s0, 80.0, 120.0, 10_000.0).unwrap();
        let put = OptionContract::new(strike, 3.0, 10.0, Side::Buy, 3.0, 180.0, 0.4).unwrap();
        let mode = if theoretical { PayoffMode::Theoretical } else { PayoffMode::Expiry };

        let curves = combined_curve(&position, &put, mode, samples).unwrap();
        prop_assert_eq!(curves.position.len(), samples);
        prop_assert_eq!(curves.option.len(), samples);
        prop_assert_eq!(curves.combined.len(), samples);

        for i in 0..samples {
            let sum = curves.position.points[i].value + curves.option.points[i].value;
            prop_assert_eq!(curves.combined.points[i].value, sum);
        }
        let prices = curves.combined.prices();
        prop_assert!(prices.windows(2).all(|w| w[0] < w[1]));
    }
}
