use crate::estimator::QuantizationScheme;
use serde::{Deserialize, Serialize};

/// A numeric form control
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NumericField {
    pub label: String,
    pub default: f64,
    pub min: f64,
    /// Hint shown under the field
    pub hint: Option<String>,
}

/// Form layout and defaults
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FormConfig {
    pub params: NumericField,
    pub quantization_label: String,
    pub quantization: QuantizationScheme,
    pub bandwidth: NumericField,
}

impl Default for FormConfig {
    fn default() -> Self {
        Self {
            params: NumericField {
                label: "Model size (Billion parameters)".to_string(),
                default: 13.0,
                min: 1.0,
                hint: Some("Examples: 7, 13, 70, 175, 405".to_string()),
            },
            quantization_label: "Quantization".to_string(),
            quantization: QuantizationScheme::ALL[0],
            bandwidth: NumericField {
                label: "GPU Memory Bandwidth (GB/s)".to_string(),
                default: 600.0,
                min: 100.0,
                hint: Some(
                    "Common values: H100 (3350), A100 (1935), V100 (900), RTX 4090 (1008)"
                        .to_string(),
                ),
            },
        }
    }
}
