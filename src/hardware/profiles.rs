//! GPU memory bandwidth presets

use anyhow::Result;
use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::BTreeMap;

/// Reference bandwidth for a GPU model
#[derive(Debug, Clone, Serialize)]
pub struct GpuProfile {
    pub id: String,
    pub display_name: String,
    pub bandwidth_gb_s: f64,
}

/// Common datacenter and consumer GPUs, keyed by lower-case id
pub static GPU_PROFILES: Lazy<BTreeMap<String, GpuProfile>> = Lazy::new(|| {
    let mut profiles = BTreeMap::new();

    for (id, display_name, bandwidth_gb_s) in [
        ("h100", "NVIDIA H100", 3350.0),
        ("a100", "NVIDIA A100", 1935.0),
        ("v100", "NVIDIA V100", 900.0),
        ("rtx-4090", "NVIDIA RTX 4090", 1008.0),
    ] {
        profiles.insert(
            id.to_string(),
            GpuProfile {
                id: id.to_string(),
                display_name: display_name.to_string(),
                bandwidth_gb_s,
            },
        );
    }

    profiles
});

/// Find a preset by id, ignoring case and `_`/space vs `-`
pub fn lookup_gpu(id: &str) -> Result<&'static GpuProfile> {
    let key = id.trim().to_lowercase().replace(['_', ' '], "-");
    GPU_PROFILES.get(&key).ok_or_else(|| {
        anyhow::anyhow!(
            "Unknown GPU preset: {}. Available: {:?}",
            id,
            GPU_PROFILES.keys().collect::<Vec<_>>()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_gpu() {
        assert_eq!(lookup_gpu("h100").unwrap().bandwidth_gb_s, 3350.0);
        assert_eq!(lookup_gpu("RTX_4090").unwrap().bandwidth_gb_s, 1008.0);
        assert_eq!(lookup_gpu(" A100 ").unwrap().display_name, "NVIDIA A100");
    }

    #[test]
    fn test_unknown_gpu() {
        let err = lookup_gpu("tpu-v5").unwrap_err().to_string();
        assert!(err.contains("tpu-v5"));
        assert!(err.contains("v100"));
    }
}
