//! Terminal form for the estimator
//!
//! Collects the three inputs the way the web form did: free-text numeric
//! entry filtered to digits and a single decimal point, per-field minimums,
//! and a fixed quantization selector. Invalid entries are caught here so the
//! estimator only ever sees values the form accepted.

use crate::config::{FormConfig, NumericField};
use crate::estimator::{EstimateError, EstimationInput, EstimationResult, QuantizationScheme};
use once_cell::sync::Lazy;
use regex::Regex;
use std::io::{BufRead, Write};
use thiserror::Error;
use tracing::warn;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FormError {
    #[error("{label}: '{text}' is not a number")]
    InvalidInput { label: String, text: String },

    #[error("{label}: {value} is below the minimum of {min}")]
    BelowMinimum { label: String, value: f64, min: f64 },

    #[error(transparent)]
    Estimate(#[from] EstimateError),
}

static NUMERIC_ENTRY: Lazy<Regex> = Lazy::new(|| Regex::new(r"^\d*\.?\d*$").unwrap());

/// Parse a free-text numeric entry. Blank input yields `None`.
pub fn parse_entry(field: &NumericField, text: &str) -> Result<Option<f64>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }

    let invalid = || FormError::InvalidInput {
        label: field.label.clone(),
        text: text.to_string(),
    };

    if !NUMERIC_ENTRY.is_match(text) {
        return Err(invalid());
    }
    // "." passes the filter but is not a number; long digit runs overflow to inf
    match text.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(Some(value)),
        _ => Err(invalid()),
    }
}

/// Enforce the field minimum. NaN never satisfies it.
pub fn check_minimum(field: &NumericField, value: f64) -> Result<f64, FormError> {
    if value >= field.min {
        Ok(value)
    } else {
        Err(FormError::BelowMinimum {
            label: field.label.clone(),
            value,
            min: field.min,
        })
    }
}

/// Validate a filled-in form and run the estimate
pub fn submit(
    config: &FormConfig,
    input: EstimationInput,
) -> Result<EstimationResult, FormError> {
    check_minimum(&config.params, input.params_billion)?;
    check_minimum(&config.bandwidth, input.bandwidth_gb_s)?;
    Ok(input.estimate()?)
}

/// Parse a selector answer: a 1-based option number or a scheme name
pub fn parse_choice(text: &str) -> Result<Option<QuantizationScheme>, FormError> {
    let text = text.trim();
    if text.is_empty() {
        return Ok(None);
    }
    if let Ok(n) = text.parse::<usize>() {
        return n
            .checked_sub(1)
            .and_then(|i| QuantizationScheme::ALL.get(i).copied())
            .map(Some)
            .ok_or_else(|| FormError::Estimate(EstimateError::InvalidEnum(text.to_string())));
    }
    Ok(Some(text.parse()?))
}

/// Read one line; `None` on end of input
fn read_answer<R: BufRead>(input: &mut R) -> anyhow::Result<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line))
}

fn prompt_numeric<R: BufRead, W: Write>(
    field: &NumericField,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<f64> {
    loop {
        if let Some(hint) = &field.hint {
            writeln!(out, "  {}", hint)?;
        }
        write!(out, "{} [{}]: ", field.label, field.default)?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            writeln!(out)?;
            return Ok(field.default);
        };

        let parsed = parse_entry(field, &answer)
            .map(|v| v.unwrap_or(field.default))
            .and_then(|v| check_minimum(field, v));
        match parsed {
            Ok(value) => return Ok(value),
            Err(e) => {
                warn!("rejected form entry: {}", e);
                writeln!(out, "  ✗ {}", e)?;
            }
        }
    }
}

fn prompt_quantization<R: BufRead, W: Write>(
    config: &FormConfig,
    input: &mut R,
    out: &mut W,
) -> anyhow::Result<QuantizationScheme> {
    loop {
        writeln!(out, "{}:", config.quantization_label)?;
        for (i, q) in QuantizationScheme::ALL.iter().enumerate() {
            writeln!(out, "  {}) {} ({})", i + 1, q, q.description())?;
        }
        write!(out, "Choice [{}]: ", config.quantization)?;
        out.flush()?;

        let Some(answer) = read_answer(input)? else {
            writeln!(out)?;
            return Ok(config.quantization);
        };

        match parse_choice(&answer) {
            Ok(choice) => return Ok(choice.unwrap_or(config.quantization)),
            Err(e) => {
                warn!("rejected form entry: {}", e);
                writeln!(out, "  ✗ {}", e)?;
            }
        }
    }
}

/// Prompt for all three fields, re-asking on invalid entries.
/// Blank answers and end of input take the field default.
pub fn run_interactive<R: BufRead, W: Write>(
    config: &FormConfig,
    mut input: R,
    mut out: W,
) -> anyhow::Result<EstimationInput> {
    let params_billion = prompt_numeric(&config.params, &mut input, &mut out)?;
    let quantization = prompt_quantization(config, &mut input, &mut out)?;
    let bandwidth_gb_s = prompt_numeric(&config.bandwidth, &mut input, &mut out)?;

    Ok(EstimationInput::new(
        params_billion,
        quantization,
        bandwidth_gb_s,
    ))
}
