use statrs::distribution::{ContinuousCDF, Normal};

use bsm_curve_lib::{
    bs_call_price, bs_put_price, evaluate_fields, norm_cdf, price_quote, report,
    sample_call_curve, PriceError, PricingInput, SamplingRange,
};

/// The classical approximation's documented absolute error bound.
const CDF_ERROR_BOUND: f64 = 7.5e-8;

#[test]
fn test_cdf_matches_reference_within_bound() {
    let reference = Normal::new(0.0, 1.0).unwrap();

    let mut worst: (f64, f64) = (0.0, 0.0);
    let mut x = -6.0;
    while x <= 6.0 {
        let approx = norm_cdf(x);
        let exact = reference.cdf(x);
        let err = (approx - exact).abs();
        if err > worst.1 {
            worst = (x, err);
        }
        assert!(
            err < CDF_ERROR_BOUND,
            "approximation error {err:.3e} at x={x} exceeds bound"
        );
        x += 0.01;
    }
    println!("worst CDF error {:.3e} at x={}", worst.1, worst.0);
}

#[test]
fn test_put_call_parity_across_inputs() {
    // Parity must hold to floating-point precision for any valid input,
    // including negative rates and yields.
    let spots = [50.0, 100.0, 250.0];
    let strikes = [80.0, 100.0, 120.0];
    let times = [7.0 / 365.0, 0.25, 2.0];
    let rates = [-0.01, 0.0, 0.05];
    let yields = [-0.005, 0.0, 0.03];
    let vols = [0.05, 0.2, 0.8];

    let mut checked = 0usize;
    for &s in &spots {
        for &k in &strikes {
            for &t in &times {
                for &r in &rates {
                    for &q in &yields {
                        for &sigma in &vols {
                            let call = bs_call_price(s, k, r, q, t, sigma);
                            let put = bs_put_price(s, k, r, q, t, sigma);
                            let forward = s * (-q * t).exp() - k * (-r * t).exp();
                            let gap = (call - put - forward).abs();
                            let tol = 1e-9 * forward.abs().max(1.0);
                            assert!(
                                gap < tol,
                                "parity violated: S={s} K={k} T={t} r={r} q={q} vol={sigma} gap={gap:.3e}"
                            );
                            checked += 1;
                        }
                    }
                }
            }
        }
    }
    println!("parity verified on {checked} parameter sets");
}

#[test]
fn test_reference_scenario_prices() {
    // S=100, K=100, 30 days, r=5%, q=2%, vol=20%
    let eval = evaluate_fields("100", "100", "30", "5", "2", "20").expect("scenario must price");

    println!(
        "d1={:.6} d2={:.6} call={:.6} put={:.6}",
        eval.terms.d1, eval.terms.d2, eval.prices.call, eval.prices.put
    );

    // Recompute the expected values from the formula with the exact CDF
    let reference = Normal::new(0.0, 1.0).unwrap();
    let (s, k) = (100.0_f64, 100.0_f64);
    let t: f64 = 30.0 / 365.0;
    let (r, q, sigma) = (0.05, 0.02, 0.2);
    let sig_sqrt_t = sigma * t.sqrt();
    let d1 = ((s / k).ln() + (r - q + 0.5 * sigma * sigma) * t) / sig_sqrt_t;
    let d2 = d1 - sig_sqrt_t;
    let expected_call =
        s * (-q * t).exp() * reference.cdf(d1) - k * (-r * t).exp() * reference.cdf(d2);
    let expected_put =
        k * (-r * t).exp() * reference.cdf(-d2) - s * (-q * t).exp() * reference.cdf(-d1);

    assert!((eval.terms.d1 - d1).abs() < 1e-12);
    assert!((eval.terms.d2 - d2).abs() < 1e-12);
    // Price error is bounded by the CDF approximation error scaled by S and K
    assert!((eval.prices.call - expected_call).abs() < 2.0 * 100.0 * CDF_ERROR_BOUND);
    assert!((eval.prices.put - expected_put).abs() < 2.0 * 100.0 * CDF_ERROR_BOUND);

    // Two-decimal display contract
    let (call_line, put_line) = report::price_lines(&eval.prices);
    assert_eq!(call_line, "Call Option Price: $2.41");
    assert_eq!(put_line, "Put Option Price: $2.16");
}

#[test]
fn test_atm_zero_rate_symmetry() {
    let input = PricingInput::new(100.0, 100.0, 0.5, 0.0, 0.0, 0.3).unwrap();
    let prices = price_quote(&input);
    assert!(
        (prices.call - prices.put).abs() < 1e-12,
        "ATM zero-rate call and put should coincide: call={} put={}",
        prices.call,
        prices.put
    );
}

#[test]
fn test_curve_shape_and_count() {
    let input = PricingInput::new(100.0, 100.0, 30.0 / 365.0, 0.05, 0.02, 0.2).unwrap();
    let curve = sample_call_curve(&input, &SamplingRange::new(90.0, 110.0));

    assert_eq!(curve.len(), 201, "0.1 step over [90, 110] has 201 points");
    assert!((curve[0].0 - 90.0).abs() < 1e-9);
    assert!((curve[200].0 - 110.0).abs() < 1e-9);

    for pair in curve.windows(2) {
        assert!(pair[1].0 > pair[0].0, "spots must ascend");
        assert!(
            pair[1].1 >= pair[0].1,
            "call value must be non-decreasing in spot"
        );
    }

    // Calls gain value with the underlying: the last point dominates the first
    assert!(curve[200].1 > curve[0].1 + 1.0);
}

#[test]
fn test_inverted_curve_range_is_empty() {
    let input = PricingInput::new(100.0, 100.0, 30.0 / 365.0, 0.05, 0.02, 0.2).unwrap();
    let curve = sample_call_curve(&input, &SamplingRange::new(110.0, 90.0));
    assert!(curve.is_empty());
}

#[test]
fn test_parse_failure_withholds_output() {
    // Any missing or non-numeric field suppresses the evaluation; the display
    // contract for that state is a pair of empty strings.
    for fields in [
        ["", "100", "30", "5", "2", "20"],
        ["100", "abc", "30", "5", "2", "20"],
        ["100", "100", "30", "5", "2", "1.2.3"],
    ] {
        let result = evaluate_fields(
            fields[0], fields[1], fields[2], fields[3], fields[4], fields[5],
        );
        assert!(matches!(result, Err(PriceError::Parse { .. })));

        let (call_line, put_line) = report::cleared();
        assert!(call_line.is_empty());
        assert!(put_line.is_empty());
    }
}

#[test]
fn test_degenerate_inputs_are_domain_errors() {
    // Zero volatility / zero time would divide by zero inside d1; both are
    // rejected before the engine runs instead of surfacing as NaN prices.
    assert!(matches!(
        evaluate_fields("100", "100", "30", "5", "2", "0"),
        Err(PriceError::Domain {
            name: "volatility",
            ..
        })
    ));
    assert!(matches!(
        evaluate_fields("100", "100", "0", "5", "2", "20"),
        Err(PriceError::Domain {
            name: "years_to_exp",
            ..
        })
    ));
    assert!(matches!(
        evaluate_fields("-100", "100", "30", "5", "2", "20"),
        Err(PriceError::Domain { name: "spot", .. })
    ));
}

#[test]
fn test_display_units_conversion() {
    let eval = evaluate_fields("100", "100", "365", "5", "2", "20").unwrap();
    assert!((eval.input.years_to_exp - 1.0).abs() < 1e-12);
    assert!((eval.input.volatility - 0.2).abs() < 1e-12);
    assert!((eval.input.risk_free_rate - 0.05).abs() < 1e-12);
    assert!((eval.input.dividend_yield - 0.02).abs() < 1e-12);
}
