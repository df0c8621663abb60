#![cfg(feature = "dev")]
//! Tests for the fit-and-predict executor and its result type.
//!
//! These tests run the whole pipeline (validate, clamp, rescale, select,
//! drift, bandwidth, fit, predict) and compare against reference forecasts.
//!
//! ## Test Organization
//!
//! 1. **Reference Forecasts** - Known series with known outputs
//! 2. **Validation** - Parameter and input rejection
//! 3. **Singular Systems** - Coincident centers and zero bandwidth
//! 4. **Result Introspection** - Accessors and `Display`

use approx::assert_relative_eq;

use rbf_rs::internals::engine::executor::{RbfConfig, RbfExecutor};
use rbf_rs::internals::primitives::buffer::FitBuffer;
use rbf_rs::internals::primitives::errors::RbfError;

fn ramp() -> Vec<f64> {
    (0..=10).map(|i| i as f64).collect()
}

fn ramp_config() -> RbfConfig {
    RbfConfig {
        dimension: 1,
        delay: 1,
        centers: 3,
        step: 1,
        insample: None,
        drift: true,
    }
}

const PI_DIGITS: [f64; 20] = [
    3.0, 1.0, 4.0, 1.0, 5.0, 9.0, 2.0, 6.0, 5.0, 3.0, 5.0, 8.0, 9.0, 7.0, 9.0, 3.0, 2.0, 3.0,
    8.0, 4.0,
];

// ============================================================================
// Reference Forecasts
// ============================================================================

/// Test the ramp 0..=10 forecasts close to 11.
#[test]
fn test_ramp_forecast() {
    let result = RbfExecutor::run(&ramp(), &ramp_config()).unwrap();

    assert_relative_eq!(result.prediction, 10.28429010408411, max_relative = 1e-9);
    assert!((result.prediction - 11.0).abs() < 1.1);
    assert_relative_eq!(result.bandwidth, 0.8414669730100325, max_relative = 1e-12);
    assert_eq!(result.coefficients.len(), 4);

    let drift = result.drift.unwrap();
    assert_eq!(drift.coincident_skips, 0);
    assert_eq!(drift.stalled_moves, 0);
}

/// Test the forecast without drift uses the evenly spaced centers.
#[test]
fn test_ramp_forecast_without_drift() {
    let config = RbfConfig {
        drift: false,
        ..ramp_config()
    };
    let result = RbfExecutor::run(&ramp(), &config).unwrap();

    assert_eq!(result.centers.as_flat(), &[0.0, 0.5, 1.0]);
    assert_relative_eq!(result.bandwidth, 0.5f64.sqrt(), max_relative = 1e-12);
    assert_relative_eq!(result.prediction, 10.014531956428199, max_relative = 1e-9);
    assert!(result.drift.is_none());
}

/// Test a two-step horizon.
#[test]
fn test_ramp_forecast_step_two() {
    let config = RbfConfig {
        step: 2,
        ..ramp_config()
    };
    let result = RbfExecutor::run(&ramp(), &config).unwrap();

    assert_relative_eq!(result.prediction, 10.979552269699564, max_relative = 1e-9);
    assert_eq!(result.training_points, 9);
}

/// Test fitting on a prefix of the series.
#[test]
fn test_ramp_forecast_insample_prefix() {
    let config = RbfConfig {
        insample: Some(8),
        ..ramp_config()
    };
    let result = RbfExecutor::run(&ramp(), &config).unwrap();

    assert_relative_eq!(result.prediction, 9.635142010751556, max_relative = 1e-9);
    assert_eq!(result.training_points, 7);
    assert_eq!(result.config.insample, Some(8));
}

/// Test a training prefix longer than the series is clamped.
#[test]
fn test_insample_clamped_to_length() {
    let config = RbfConfig {
        insample: Some(1000),
        ..ramp_config()
    };
    let clamped = RbfExecutor::run(&ramp(), &config).unwrap();
    let full = RbfExecutor::run(&ramp(), &ramp_config()).unwrap();

    assert_eq!(clamped.config.insample, Some(11));
    assert_eq!(clamped.prediction.to_bits(), full.prediction.to_bits());
}

/// Test more centers than points are clamped to the series length.
#[test]
fn test_centers_clamped_to_length() {
    // 11 centers on 10 training points leave 12 unknowns
    let config = RbfConfig {
        centers: 20,
        ..ramp_config()
    };
    let err = RbfExecutor::run(&ramp(), &config).unwrap_err();
    assert_eq!(err, RbfError::SingularSystem { size: 12 });
    assert!(!err.is_invalid_parameter());
    assert_eq!(config.clamped(11).centers, 11);
}

/// Test a training prefix shorter than the unknowns is singular.
#[test]
fn test_underdetermined_training_prefix() {
    let config = RbfConfig {
        insample: Some(3),
        ..ramp_config()
    };
    // Two training points for a bias and three weights
    assert_eq!(
        RbfExecutor::run(&ramp(), &config).unwrap_err(),
        RbfError::SingularSystem { size: 4 }
    );
}

/// Test a two-dimensional embedding of the digits of pi.
#[test]
fn test_pi_digits_two_dimensional() {
    let config = RbfConfig {
        dimension: 2,
        delay: 2,
        centers: 4,
        ..RbfConfig::default()
    };
    let result = RbfExecutor::run(&PI_DIGITS, &config).unwrap();

    assert_relative_eq!(result.prediction, 6.120229567561929, max_relative = 1e-8);
    assert_relative_eq!(result.bandwidth, 0.5393947773970242, max_relative = 1e-10);

    let expected = [
        -0.2920035880438624,
        0.2504779991288927,
        -0.3668413271569551,
        1.0655585120062812,
        0.4830137864043174,
    ];
    for (&c, &e) in result.coefficients.iter().zip(expected.iter()) {
        assert_relative_eq!(c, e, max_relative = 1e-8);
    }
}

/// Test a short alternating series forecasts a finite value.
#[test]
fn test_default_config_short_series() {
    let series = [1.0f64, 3.0, 2.0, 4.0, 3.0, 5.0, 4.0, 6.0, 5.0, 7.0];
    let config = RbfConfig {
        centers: 4,
        ..RbfConfig::default()
    };
    let result = RbfExecutor::run(&series, &config).unwrap();

    assert_relative_eq!(result.prediction, 5.826243617969096, max_relative = 1e-8);
}

/// Test repeated runs are bitwise identical, with and without a reused buffer.
#[test]
fn test_deterministic() {
    let series: Vec<f64> = (0..40).map(|i| (i as f64 * 0.7).sin() + 0.1 * i as f64).collect();
    let config = RbfConfig {
        dimension: 3,
        delay: 2,
        centers: 6,
        step: 2,
        insample: None,
        drift: true,
    };

    let a = RbfExecutor::run(&series, &config).unwrap();
    let mut buffer = FitBuffer::default();
    let b = RbfExecutor::run_with_buffer(&series, &config, &mut buffer).unwrap();
    let c = RbfExecutor::run_with_buffer(&series, &config, &mut buffer).unwrap();

    assert_eq!(a.prediction.to_bits(), b.prediction.to_bits());
    assert_eq!(b.prediction.to_bits(), c.prediction.to_bits());
    assert_eq!(a.coefficients, c.coefficients);
    assert_eq!(a.centers, c.centers);
}

/// Test the caller's series is left untouched.
#[test]
fn test_input_not_mutated() {
    let series = ramp();
    let copy = series.clone();
    RbfExecutor::run(&series, &ramp_config()).unwrap();
    assert_eq!(series, copy);
}

/// Test single precision tracks double precision.
#[test]
fn test_f32_close_to_f64() {
    let config = RbfConfig {
        dimension: 2,
        delay: 2,
        centers: 4,
        ..RbfConfig::default()
    };
    let series32: Vec<f32> = PI_DIGITS.iter().map(|&v| v as f32).collect();
    let result32 = RbfExecutor::run(&series32, &config).unwrap();
    let result64 = RbfExecutor::run(&PI_DIGITS, &config).unwrap();

    assert!(result32.prediction.is_finite());
    assert!((result32.prediction as f64 - result64.prediction).abs() < 1e-2);

    // The ramp system is poorly conditioned, single precision only stays close
    let ramp32: Vec<f32> = (0..=10).map(|i| i as f32).collect();
    let ramp_result = RbfExecutor::run(&ramp32, &ramp_config()).unwrap();
    assert!((ramp_result.prediction - 10.28).abs() < 0.5);
}

// ============================================================================
// Validation Tests
// ============================================================================

/// Test the smallest accepted length passes parameter validation.
#[test]
fn test_minimal_size_boundary() {
    let config = RbfConfig {
        dimension: 2,
        delay: 2,
        centers: 2,
        step: 1,
        insample: None,
        drift: true,
    };
    // (2 - 1) * 2 + 1 + 1 = 4
    let accepted = [0.0f64, 1.0, 0.5, 0.25];
    match RbfExecutor::run(&accepted, &config) {
        Ok(result) => assert!(result.prediction.is_finite()),
        Err(err) => assert!(!err.is_invalid_parameter(), "rejected as {:?}", err),
    }

    let err = RbfExecutor::run(&accepted[..3], &config).unwrap_err();
    assert_eq!(err, RbfError::TooFewPoints { got: 3, min: 4 });
    assert!(err.is_invalid_parameter());
}

/// Test each zero parameter is rejected.
#[test]
fn test_invalid_parameters() {
    let series = ramp();
    let cases = [
        (RbfConfig { dimension: 0, ..ramp_config() }, RbfError::InvalidDimension(0)),
        (RbfConfig { delay: 0, ..ramp_config() }, RbfError::InvalidDelay(0)),
        (RbfConfig { step: 0, ..ramp_config() }, RbfError::InvalidStep(0)),
        (RbfConfig { centers: 1, ..ramp_config() }, RbfError::InvalidCenters(1)),
    ];

    for (config, expected) in cases {
        let err = RbfExecutor::run(&series, &config).unwrap_err();
        assert_eq!(err, expected);
        assert!(err.is_invalid_parameter());
    }
}

/// Test an embedding window wider than the series is rejected.
#[test]
fn test_window_longer_than_series() {
    let config = RbfConfig {
        dimension: 4,
        delay: 4,
        ..ramp_config()
    };
    let err = RbfExecutor::run(&ramp(), &config).unwrap_err();
    assert_eq!(err, RbfError::TooFewPoints { got: 11, min: 14 });
}

/// Test a prefix too short for one training pair is rejected.
#[test]
fn test_insample_too_short() {
    let config = RbfConfig {
        dimension: 2,
        insample: Some(2),
        ..ramp_config()
    };
    let err = RbfExecutor::run(&ramp(), &config).unwrap_err();
    assert_eq!(err, RbfError::InvalidInsample { got: 2, min: 3 });
}

/// Test data errors: empty, non-finite and constant series.
#[test]
fn test_input_errors() {
    let empty: [f64; 0] = [];
    assert_eq!(
        RbfExecutor::run(&empty, &ramp_config()).unwrap_err(),
        RbfError::EmptyInput
    );

    let mut with_nan = ramp();
    with_nan[4] = f64::NAN;
    assert!(matches!(
        RbfExecutor::run(&with_nan, &ramp_config()).unwrap_err(),
        RbfError::InvalidNumericValue(_)
    ));

    let mut with_inf = ramp();
    with_inf[0] = f64::INFINITY;
    assert!(matches!(
        RbfExecutor::run(&with_inf, &ramp_config()).unwrap_err(),
        RbfError::InvalidNumericValue(_)
    ));

    let constant = [2.5f64; 12];
    let err = RbfExecutor::run(&constant, &ramp_config()).unwrap_err();
    assert_eq!(err, RbfError::DegenerateInput { min: 2.5, max: 2.5 });
    assert!(!err.is_invalid_parameter());
}

// ============================================================================
// Singular System Tests
// ============================================================================

/// Test coincident centers without drift are reported as singular.
#[test]
fn test_pi_digits_without_drift_is_singular() {
    let config = RbfConfig {
        dimension: 2,
        delay: 2,
        centers: 4,
        drift: false,
        ..RbfConfig::default()
    };
    let err = RbfExecutor::run(&PI_DIGITS, &config).unwrap_err();
    assert_eq!(err, RbfError::SingularSystem { size: 5 });
}

/// Test two coincident centers give a zero bandwidth.
#[test]
fn test_zero_bandwidth_is_singular() {
    // Anchors 0 and 6 both read 0
    let series = [0.0f64, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    let config = RbfConfig {
        dimension: 1,
        centers: 2,
        ..RbfConfig::default()
    };
    let err = RbfExecutor::run(&series, &config).unwrap_err();
    assert_eq!(err, RbfError::SingularSystem { size: 3 });
}

/// Test a coincident pair among distinct centers is reported as singular.
#[test]
fn test_coincident_pair_is_singular() {
    // Anchors 0, 3, 6 read 0, 1, 0
    let series = [0.0f64, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0];
    let config = RbfConfig {
        dimension: 1,
        centers: 3,
        drift: false,
        ..RbfConfig::default()
    };
    let err = RbfExecutor::run(&series, &config).unwrap_err();
    assert_eq!(err, RbfError::SingularSystem { size: 4 });
}

// ============================================================================
// Result Introspection Tests
// ============================================================================

/// Test accessors that map the model back to the original scale.
#[test]
fn test_result_original_scale() {
    let result = RbfExecutor::run(&ramp(), &ramp_config()).unwrap();

    // Interval is 10 and min is 0
    assert_eq!(result.transform.min, 0.0);
    assert_eq!(result.transform.interval, 10.0);
    assert_relative_eq!(result.bandwidth_original(), 8.414669730100325, max_relative = 1e-12);

    let points = result.center_points();
    assert_relative_eq!(points[0], -1.0, epsilon = 1e-10);
    assert_relative_eq!(points[1], 5.0, epsilon = 1e-10);
    assert_relative_eq!(points[2], 10.9, epsilon = 1e-10);

    let original = result.coefficients_original();
    assert_relative_eq!(original[0], result.coefficients[0] * 10.0, max_relative = 1e-12);
    assert_relative_eq!(original[3], result.coefficients[3] * 10.0, max_relative = 1e-12);

    assert_eq!(result.training_points, 10);
    assert_relative_eq!(result.statistics.mean, 5.0);
    assert_relative_eq!(result.statistics.std_dev, 10.0f64.sqrt(), epsilon = 1e-12);
}

/// Test the human-readable summary.
#[test]
fn test_result_display() {
    let result = RbfExecutor::run(&ramp(), &ramp_config()).unwrap();
    let text = format!("{}", result);

    assert!(text.starts_with("Summary:"));
    assert!(text.contains("Prediction: 10.284290"));
    assert!(text.contains("Embedding: dimension=1 delay=1 step=1"));
    assert!(text.contains("Centers: 3 (drift on)"));
    assert!(text.contains("Bandwidth: 8.414670 (normalized 0.841467)"));
    assert!(text.contains("Training points: 10"));
    assert!(text.contains("Series: mean=5.000000 std=3.162278"));
}
