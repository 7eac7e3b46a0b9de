use tps_estimator::{estimate, estimate_named, EstimateError, EstimationInput, QuantizationScheme};

fn fmt2(x: f64) -> String {
    format!("{:.2}", x)
}

#[test]
fn test_fp8_default_form() {
    let r = estimate(13.0, QuantizationScheme::Fp8, 600.0).unwrap();
    assert_eq!(fmt2(r.model_size_gb), "13.00");
    assert_eq!(fmt2(r.theoretical_tps), "46.15");
    assert_eq!(fmt2(r.real_tps), "23.08");
}

#[test]
fn test_fp4_doubles_throughput() {
    let r = estimate(13.0, QuantizationScheme::Fp4, 600.0).unwrap();
    assert_eq!(fmt2(r.theoretical_tps), "92.31");
    assert_eq!(fmt2(r.real_tps), "46.15");
}

#[test]
fn test_fp16_halves_throughput() {
    let r = estimate(13.0, QuantizationScheme::Fp16, 600.0).unwrap();
    assert_eq!(fmt2(r.theoretical_tps), "23.08");
    assert_eq!(fmt2(r.real_tps), "11.54");
}

#[test]
fn test_70b_on_1000_gb_s() {
    let r = estimate_named(70.0, "FP8", 1000.0).unwrap();
    assert_eq!(fmt2(r.model_size_gb), "70.00");
    assert_eq!(fmt2(r.theoretical_tps), "14.29");
    assert_eq!(fmt2(r.real_tps), "7.14");
}

#[test]
fn test_size_ignores_quantization() {
    for q in QuantizationScheme::ALL {
        let r = EstimationInput::new(405.0, q, 3350.0).estimate().unwrap();
        assert_eq!(r.model_size_gb, 405.0, "size changed under {}", q);
    }
}

#[test]
fn test_zero_and_negative_inputs() {
    for (params, bandwidth) in [(0.0, 600.0), (-13.0, 600.0), (13.0, 0.0), (13.0, -600.0)] {
        let err = estimate(params, QuantizationScheme::Fp8, bandwidth).unwrap_err();
        assert!(
            matches!(err, EstimateError::InvalidInput { .. }),
            "({}, {}) gave {:?}",
            params,
            bandwidth,
            err
        );
    }
}

#[test]
fn test_unknown_quantization() {
    let err = estimate_named(13.0, "INT8", 600.0).unwrap_err();
    assert_eq!(err, EstimateError::InvalidEnum("INT8".to_string()));
    assert!(err.to_string().contains("INT8"));
}
