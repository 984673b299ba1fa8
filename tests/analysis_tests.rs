
use bs_pricer_lib::{
    analyze, bs_greeks, bs_price, sensitivity_ladder, write_sensitivity_csv, AnalysisConfig,
    AnalysisFile, OptionInputs, OptionKind, PricingError, SensitivityConfig,
};
use test_utils::{assert_close, calculator_inputs, reference_inputs};

/// Full analysis of the calculator's default contract.
#[test]
fn test_analyze_default_contract() {
    let inputs = calculator_inputs(OptionKind::Call);
    let result = analyze(&inputs, &AnalysisConfig::default()).expect("analysis failed");

    assert_close(result.option_price, 3.439_894_456_655_743, 1e-10, "call price");
    // Out of the money call has no intrinsic value
    assert_eq!(result.intrinsic_value, 0.0);
    assert_eq!(result.time_value, result.option_price);

    let greeks = bs_greeks(OptionKind::Call, 100.0, 105.0, 0.25, 0.05, 0.25);
    assert_eq!(result.greeks, greeks);
    assert_eq!(result.inputs, inputs);
    assert_eq!(result.sensitivity.len(), 21);
}

#[test]
fn test_analyze_in_the_money_put() {
    let inputs = OptionInputs::new(OptionKind::Put, 90.0, 100.0, 0.5, 0.02, 0.2);
    let result = analyze(&inputs, &AnalysisConfig::default()).unwrap();

    assert_eq!(result.intrinsic_value, 10.0);
    assert_close(
        result.time_value,
        result.option_price - 10.0,
        1e-15,
        "time value",
    );
    assert!(result.greeks.delta < 0.0);
}

/// Call and put analyses of the same contract satisfy parity.
#[test]
fn test_analysis_parity_between_kinds() {
    let call_inputs = calculator_inputs(OptionKind::Call);
    let put_inputs = call_inputs.with_kind(OptionKind::Put);
    let config = AnalysisConfig::default();

    let call = analyze(&call_inputs, &config).unwrap();
    let put = analyze(&put_inputs, &config).unwrap();

    let forward_value = 100.0 - 105.0 * (-0.05_f64 * 0.25).exp();
    assert_close(
        call.option_price - put.option_price,
        forward_value,
        1e-12,
        "parity",
    );
    assert_close(call.greeks.delta - put.greeks.delta, 1.0, 1e-15, "delta");
    assert_eq!(put.inputs.kind, OptionKind::Put);
    assert_eq!(put.intrinsic_value, 5.0);
}

/// Out-of-domain inputs are rejected on the analysis path.
#[test]
fn test_analyze_rejects_invalid_inputs() {
    let ok = calculator_inputs(OptionKind::Call);
    let cases = [
        (OptionInputs { spot: 0.0, ..ok }, "spot"),
        (OptionInputs { strike: -1.0, ..ok }, "strike"),
        (OptionInputs { time_to_maturity: 0.0, ..ok }, "time_to_maturity"),
        (OptionInputs { volatility: -0.2, ..ok }, "volatility"),
        (OptionInputs { rate: f64::NAN, ..ok }, "rate"),
    ];

    for (inputs, field) in cases {
        match analyze(&inputs, &AnalysisConfig::default()) {
            Err(PricingError::InvalidParameters { field: f, .. }) => assert_eq!(f, field),
            other => panic!("expected InvalidParameters({}), got {:?}", field, other),
        }
    }

    // A zero rate is a valid market, not a missing value
    assert!(analyze(&OptionInputs { rate: 0.0, ..ok }, &AnalysisConfig::default()).is_ok());
}

#[test]
fn test_analyze_rejects_invalid_config() {
    let config = AnalysisConfig {
        sensitivity: SensitivityConfig {
            steps: 0,
            ..SensitivityConfig::default()
        },
    };
    let result = analyze(&calculator_inputs(OptionKind::Call), &config);
    assert!(matches!(result, Err(PricingError::Config(_))));

    // Rounding past f64 precision is refused rather than producing NaN
    let config = AnalysisConfig {
        sensitivity: SensitivityConfig {
            round_decimals: Some(400),
            ..SensitivityConfig::default()
        },
    };
    let result = analyze(&calculator_inputs(OptionKind::Call), &config);
    assert!(matches!(result, Err(PricingError::Config(_))));
}

/// Ladder spans max(min_spot, 0.6·S) to 1.4·S in equal steps.
#[test]
fn test_sensitivity_ladder_range() {
    let inputs = reference_inputs(OptionKind::Call);
    let ladder = sensitivity_ladder(&inputs, &SensitivityConfig::default());

    assert_eq!(ladder.len(), 21);
    assert_eq!(ladder.first().unwrap().spot, 60.0);
    assert_eq!(ladder.last().unwrap().spot, 140.0);
    assert_eq!(ladder[10].spot, 100.0);

    // Monotone for a call, intrinsic value kicks in above the strike
    for pair in ladder.windows(2) {
        assert!(pair[1].spot > pair[0].spot);
        assert!(pair[1].option_price >= pair[0].option_price);
    }
    assert_eq!(ladder[5].intrinsic_value, 0.0);
    assert_eq!(ladder[15].intrinsic_value, 20.0);

    // Rounded to cents
    for p in &ladder {
        assert_eq!((p.option_price * 100.0).round() / 100.0, p.option_price);
    }
}

#[test]
fn test_sensitivity_ladder_min_spot_floor() {
    let inputs = OptionInputs::new(OptionKind::Put, 1.2, 1.0, 1.0, 0.0, 0.5);
    let ladder = sensitivity_ladder(&inputs, &SensitivityConfig::default());

    // 0.6 · 1.2 = 0.72 is below the floor of 1.0
    assert_eq!(ladder[0].spot, 1.0);
    assert_eq!(ladder.last().unwrap().spot, 1.68);
}

/// A spot so small that 1.4·S sits below the floor has no ladder.
#[test]
fn test_sensitivity_ladder_empty_below_floor() {
    let inputs = OptionInputs::new(OptionKind::Call, 0.5, 0.5, 1.0, 0.01, 0.3);
    let ladder = sensitivity_ladder(&inputs, &SensitivityConfig::default());
    assert!(ladder.is_empty(), "got {} points", ladder.len());

    let result = analyze(&inputs, &AnalysisConfig::default()).unwrap();
    assert!(result.sensitivity.is_empty());
    assert!(result.option_price > 0.0);

    // Range collapsing onto the floor still yields points, all at the floor
    let inputs = OptionInputs { spot: 1.0 / 1.4, ..inputs };
    let ladder = sensitivity_ladder(&inputs, &SensitivityConfig::default());
    assert_eq!(ladder.len(), 21);
    for p in &ladder {
        assert!(p.spot >= 1.0 - 1e-12, "spot {} below floor", p.spot);
    }
}

/// The unchecked entry point reads zero steps as one interval.
#[test]
fn test_sensitivity_ladder_zero_steps() {
    let inputs = reference_inputs(OptionKind::Call);
    let config = SensitivityConfig {
        steps: 0,
        ..SensitivityConfig::default()
    };
    let ladder = sensitivity_ladder(&inputs, &config);

    assert_eq!(ladder.len(), 2);
    assert_eq!(ladder[0].spot, 60.0);
    assert_eq!(ladder[1].spot, 140.0);
}

#[test]
fn test_sensitivity_ladder_unrounded() {
    let inputs = reference_inputs(OptionKind::Put);
    let config = SensitivityConfig::fine();
    let ladder = sensitivity_ladder(&inputs, &config);

    assert_eq!(ladder.len(), 101);
    for p in &ladder {
        let exact = bs_price(
            OptionKind::Put,
            p.spot,
            inputs.strike,
            inputs.time_to_maturity,
            inputs.rate,
            inputs.volatility,
        );
        assert_eq!(p.option_price, exact);
        assert_close(p.intrinsic_value + p.time_value, exact, 1e-12, "decomposition");
    }
}

/// JSON field names follow the calculator's response body.
#[test]
fn test_analysis_json_shape() {
    let result = analyze(
        &calculator_inputs(OptionKind::Call),
        &AnalysisConfig::coarse(),
    )
    .unwrap();
    let json = serde_json::to_value(&result).unwrap();

    for key in ["optionPrice", "intrinsicValue", "timeValue", "greeks", "sensitivityData"] {
        assert!(json.get(key).is_some(), "missing {}", key);
    }
    for key in ["delta", "gamma", "theta", "vega", "rho"] {
        assert!(json["greeks"].get(key).is_some(), "missing greeks.{}", key);
    }
    assert_eq!(json["inputs"]["kind"], "call");
    assert_eq!(json["inputs"]["timeToMaturity"], 0.25);
    assert!(json.get("sensitivity").is_none());
    assert_eq!(json["sensitivityData"].as_array().unwrap().len(), 11);

    let point = &json["sensitivityData"][0];
    for key in ["stockPrice", "optionPrice", "intrinsicValue", "timeValue"] {
        assert!(point.get(key).is_some(), "missing sensitivityData[0].{}", key);
    }
    assert_eq!(point["stockPrice"], 60.0);
}

#[test]
fn test_analysis_file_to_csv() {
    let file = AnalysisFile::from_toml_str(
        r#"
        [inputs]
        spot = 100.0
        strike = 100.0
        timeToMaturity = 0.6575342465753424
        rate = 0.01
        volatility = 0.30
        kind = "call"

        [analysis.sensitivity]
        steps = 4
        "#,
    )
    .unwrap();
    let result = analyze(&file.inputs, &file.analysis).unwrap();
    assert_eq!(format!("{:.4}", result.option_price), "9.9805");

    let mut buf = Vec::new();
    write_sensitivity_csv(&mut buf, &result.sensitivity).unwrap();
    let text = String::from_utf8(buf).unwrap();
    let rows: Vec<&str> = text.lines().collect();

    assert_eq!(rows.len(), 6);
    assert_eq!(rows[0], "spot,option_price,intrinsic_value,time_value");
    assert!(rows[1].starts_with("60,"));
    assert!(rows[3].starts_with("100,9.98,0,9.98"));
    assert!(rows[5].starts_with("140,"));
}
