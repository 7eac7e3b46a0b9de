//! Inference throughput estimation
//!
//! Memory-bandwidth-bound estimate of decode throughput for a large language
//! model. Every generated token streams the full weight set through the GPU
//! once, so tokens/sec is bandwidth divided by model footprint, scaled by the
//! quantization scheme.
//!
//! # Formula
//!
//! ```text
//! model_size_gb   = params_billion × BYTES_PER_PARAM
//! theoretical_tps = (bandwidth_gb_s / model_size_gb) × quantization_factor
//! real_tps        = theoretical_tps × REAL_WORLD_EFFICIENCY
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;

/// Storage assumed per parameter at the FP8 reference point.
///
/// Heuristic: parameter count in billions is read directly as gigabytes. The
/// quantization factor is applied to throughput only, never to this size.
pub const BYTES_PER_PARAM: f64 = 1.0;

/// Fraction of theoretical throughput reached in practice.
///
/// Rough allowance for batching, context length and I/O overhead. Not
/// calibrated against any hardware.
pub const REAL_WORLD_EFFICIENCY: f64 = 0.5;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimateError {
    #[error("{field} must be a positive finite number, got {value}")]
    InvalidInput { field: &'static str, value: f64 },

    #[error("unknown quantization '{0}'. Available: FP8, FP4, FP16")]
    InvalidEnum(String),
}

/// Weight precision of the served model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum QuantizationScheme {
    #[default]
    #[serde(rename = "FP8")]
    Fp8,
    #[serde(rename = "FP4")]
    Fp4,
    #[serde(rename = "FP16")]
    Fp16,
}

impl QuantizationScheme {
    /// Selector order; the first entry is the default choice.
    pub const ALL: [QuantizationScheme; 3] = [Self::Fp8, Self::Fp4, Self::Fp16];

    /// Throughput multiplier relative to FP8
    pub fn factor(self) -> f64 {
        match self {
            Self::Fp8 => 1.0,
            Self::Fp4 => 2.0,
            Self::Fp16 => 0.5,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Fp8 => "FP8",
            Self::Fp4 => "FP4",
            Self::Fp16 => "FP16",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Fp8 => "8-bit floating point",
            Self::Fp4 => "4-bit floating point",
            Self::Fp16 => "16-bit floating point",
        }
    }
}

impl fmt::Display for QuantizationScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for QuantizationScheme {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim();
        Self::ALL
            .into_iter()
            .find(|q| q.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| EstimateError::InvalidEnum(s.to_string()))
    }
}

/// One estimation request
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationInput {
    pub params_billion: f64,
    pub quantization: QuantizationScheme,
    pub bandwidth_gb_s: f64,
}

impl EstimationInput {
    pub fn new(
        params_billion: f64,
        quantization: QuantizationScheme,
        bandwidth_gb_s: f64,
    ) -> Self {
        Self {
            params_billion,
            quantization,
            bandwidth_gb_s,
        }
    }

    pub fn estimate(&self) -> Result<EstimationResult, EstimateError> {
        estimate(self.params_billion, self.quantization, self.bandwidth_gb_s)
    }
}

/// Unrounded estimate; rounding is left to the renderer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EstimationResult {
    pub model_size_gb: f64,
    pub theoretical_tps: f64,
    pub real_tps: f64,
}

fn require_positive(field: &'static str, value: f64) -> Result<f64, EstimateError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(EstimateError::InvalidInput { field, value })
    }
}

/// Estimate tokens/sec for a model of `params_billion` parameters served at
/// `quantization` from a GPU with `bandwidth_gb_s` of memory bandwidth.
///
/// # Errors
///
/// * [`EstimateError::InvalidInput`] when either number is zero, negative,
///   NaN or infinite, or when their ratio overflows or underflows `f64`.
pub fn estimate(
    params_billion: f64,
    quantization: QuantizationScheme,
    bandwidth_gb_s: f64,
) -> Result<EstimationResult, EstimateError> {
    let params_billion = require_positive("params_billion", params_billion)?;
    let bandwidth_gb_s = require_positive("bandwidth_gb_s", bandwidth_gb_s)?;

    // 1e9 params × bytes / 1e9 bytes-per-GB; the powers of ten cancel
    let model_size_gb = params_billion * BYTES_PER_PARAM;
    let theoretical_tps = (bandwidth_gb_s / model_size_gb) * quantization.factor();
    let real_tps = theoretical_tps * REAL_WORLD_EFFICIENCY;

    // Extreme ratios can overflow to infinity or underflow to zero
    if !theoretical_tps.is_finite() {
        return Err(EstimateError::InvalidInput {
            field: "bandwidth_gb_s",
            value: bandwidth_gb_s,
        });
    }
    if theoretical_tps <= 0.0 || real_tps <= 0.0 {
        return Err(EstimateError::InvalidInput {
            field: "params_billion",
            value: params_billion,
        });
    }

    debug!(
        params_billion,
        %quantization,
        bandwidth_gb_s,
        theoretical_tps,
        real_tps,
        "estimated throughput"
    );

    Ok(EstimationResult {
        model_size_gb,
        theoretical_tps,
        real_tps,
    })
}

/// Same as [`estimate`] with the quantization given by name
pub fn estimate_named(
    params_billion: f64,
    quantization: &str,
    bandwidth_gb_s: f64,
) -> Result<EstimationResult, EstimateError> {
    let quantization: QuantizationScheme = quantization.parse()?;
    estimate(params_billion, quantization, bandwidth_gb_s)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn round2(x: f64) -> f64 {
        (x * 100.0).round() / 100.0
    }

    #[test]
    fn test_default_form_values() {
        let r = estimate(13.0, QuantizationScheme::Fp8, 600.0).unwrap();
        assert_eq!(r.model_size_gb, 13.0);
        assert_eq!(round2(r.theoretical_tps), 46.15);
        assert_eq!(round2(r.real_tps), 23.08);
    }

    #[test]
    fn test_large_model() {
        let r = estimate(70.0, QuantizationScheme::Fp8, 1000.0).unwrap();
        assert_eq!(r.model_size_gb, 70.0);
        assert_eq!(round2(r.theoretical_tps), 14.29);
        assert_eq!(round2(r.real_tps), 7.14);
    }

    #[test]
    fn test_factor_table() {
        assert_eq!(QuantizationScheme::Fp8.factor(), 1.0);
        assert_eq!(QuantizationScheme::Fp4.factor(), 2.0);
        assert_eq!(QuantizationScheme::Fp16.factor(), 0.5);
    }

    #[test]
    fn test_parse_quantization() {
        assert_eq!(
            "FP4".parse::<QuantizationScheme>().unwrap(),
            QuantizationScheme::Fp4
        );
        assert_eq!(
            " fp16 ".parse::<QuantizationScheme>().unwrap(),
            QuantizationScheme::Fp16
        );
        assert_eq!(
            "INT4".parse::<QuantizationScheme>(),
            Err(EstimateError::InvalidEnum("INT4".to_string()))
        );
    }

    #[test]
    fn test_rejects_non_positive() {
        assert!(matches!(
            estimate(0.0, QuantizationScheme::Fp8, 600.0),
            Err(EstimateError::InvalidInput { field: "params_billion", .. })
        ));
        assert!(matches!(
            estimate(13.0, QuantizationScheme::Fp8, -1.0),
            Err(EstimateError::InvalidInput { field: "bandwidth_gb_s", .. })
        ));
        assert!(estimate(f64::NAN, QuantizationScheme::Fp8, 600.0).is_err());
        assert!(estimate(13.0, QuantizationScheme::Fp8, f64::INFINITY).is_err());
    }

    #[test]
    fn test_overflow_is_rejected() {
        assert!(estimate(f64::MIN_POSITIVE, QuantizationScheme::Fp4, f64::MAX).is_err());
    }

    #[test]
    fn test_underflow_is_rejected() {
        assert!(matches!(
            estimate(f64::MAX, QuantizationScheme::Fp16, f64::MIN_POSITIVE),
            Err(EstimateError::InvalidInput { field: "params_billion", .. })
        ));
        // theoretical survives but halving it lands on zero
        let smallest = f64::from_bits(1);
        assert!(estimate(1.0, QuantizationScheme::Fp8, smallest).is_err());
    }

    #[test]
    fn test_estimate_named_unknown() {
        assert!(matches!(
            estimate_named(13.0, "BF16", 600.0),
            Err(EstimateError::InvalidEnum(_))
        ));
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&QuantizationScheme::Fp16).unwrap();
        assert_eq!(json, "\"FP16\"");
    }
}
