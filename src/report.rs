//! Rendering of estimates for the terminal

use crate::config::{OutputConfig, OutputFormat};
use crate::estimator::{
    EstimationInput, EstimationResult, QuantizationScheme, REAL_WORLD_EFFICIENCY,
};
use anyhow::Result;
use serde_json::json;
use std::fmt::Write;

pub const FORMULA: &str = "TPS = (Bandwidth / Model Size) × Quantization Factor";

/// The three result lines plus the factor indicator
pub fn result_lines(
    input: &EstimationInput,
    result: &EstimationResult,
    precision: usize,
) -> Vec<String> {
    vec![
        format!("Model Size: {:.*} GB", precision, result.model_size_gb),
        format!(
            "Theoretical TPS: {:.*} tokens/sec",
            precision, result.theoretical_tps
        ),
        format!(
            "Estimated Real TPS (~{:.0}%): {:.*} tokens/sec",
            REAL_WORLD_EFFICIENCY * 100.0,
            precision,
            result.real_tps
        ),
        format!("Quantization Factor: {}x", input.quantization.factor()),
    ]
}

/// Static explanation shown under the results
pub fn notes(format: OutputFormat) -> String {
    let mut s = String::new();
    let efficiency = REAL_WORLD_EFFICIENCY * 100.0;
    match format {
        OutputFormat::Markdown => {
            let _ = writeln!(s, "---");
            let _ = writeln!(s, "### 📘 Formula");
            let _ = writeln!(s, "**{}**", FORMULA);
            let _ = writeln!(s);
            let _ = writeln!(s, "**Quantization Factors:**");
            for q in QuantizationScheme::ALL {
                let _ = writeln!(s, "- {} → {}", q, q.factor());
            }
            let _ = writeln!(s);
            let _ = writeln!(
                s,
                "**Real-world TPS ≈ {:.0}%** of theoretical due to overhead (batching, context length, I/O, etc).",
                efficiency
            );
        }
        OutputFormat::Json => {
            let factors: serde_json::Map<String, serde_json::Value> = QuantizationScheme::ALL
                .into_iter()
                .map(|q| (q.name().to_string(), json!(q.factor())))
                .collect();
            let doc = json!({
                "formula": FORMULA,
                "quantization_factors": factors,
                "real_world_efficiency": REAL_WORLD_EFFICIENCY,
            });
            let _ = writeln!(s, "{:#}", doc);
        }
        OutputFormat::Text => {
            let _ = writeln!(s, "Formula");
            let _ = writeln!(s, "  {}", FORMULA);
            let _ = writeln!(s);
            let _ = writeln!(s, "Quantization Factors");
            for q in QuantizationScheme::ALL {
                let _ = writeln!(s, "  {:<5} ({}) → {}x", q.name(), q.description(), q.factor());
            }
            let _ = writeln!(s);
            let _ = writeln!(
                s,
                "Real-world TPS ≈ {:.0}% of theoretical due to overhead (batching, context length, I/O, etc).",
                efficiency
            );
        }
    }
    s
}

/// Render an estimate in the configured format
pub fn render(
    input: &EstimationInput,
    result: &EstimationResult,
    config: &OutputConfig,
) -> Result<String> {
    let lines = result_lines(input, result, config.precision);
    let mut s = String::new();

    match config.format {
        OutputFormat::Json => {
            let mut doc = json!({
                "input": input,
                "result": result,
                "quantization_factor": input.quantization.factor(),
            });
            if config.show_notes {
                doc["formula"] = json!(FORMULA);
                doc["real_world_efficiency"] = json!(REAL_WORLD_EFFICIENCY);
            }
            s.push_str(&serde_json::to_string_pretty(&doc)?);
            s.push('\n');
            return Ok(s);
        }
        OutputFormat::Markdown => {
            writeln!(s, "### 📊 Results")?;
            for line in &lines {
                let (label, value) = line.split_once(": ").unwrap_or((line.as_str(), ""));
                writeln!(s, "• {}: **{}**", label, value)?;
            }
        }
        OutputFormat::Text => {
            writeln!(s, "Results")?;
            for line in &lines {
                writeln!(s, "  • {}", line)?;
            }
        }
    }

    if config.show_notes {
        writeln!(s)?;
        s.push_str(&notes(config.format));
    }
    Ok(s)
}
