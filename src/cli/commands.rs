//! CLI command implementations

use anyhow::Result;
use std::io;
use std::path::PathBuf;
use tps_estimator::config::{Config, OutputFormat};
use tps_estimator::estimator::{EstimationInput, QuantizationScheme};
use tps_estimator::form::{self, run_interactive};
use tps_estimator::hardware::{lookup_gpu, GPU_PROFILES};
use tps_estimator::report;
use tracing::{debug, info};

fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(path) => {
            info!("loading config from {}", path.display());
            Config::load(path)
        }
        None => Ok(Config::default()),
    }
}

fn apply_format(config: &mut Config, format: Option<String>) -> Result<()> {
    if let Some(format) = format {
        config.output.format = format.parse()?;
    }
    Ok(())
}

fn print_estimate(config: &Config, input: EstimationInput) -> Result<()> {
    let result = form::submit(&config.form, input)?;
    print!("{}", report::render(&input, &result, &config.output)?);
    Ok(())
}

pub fn estimate(
    params: Option<f64>,
    quantization: Option<String>,
    bandwidth: Option<f64>,
    gpu: Option<String>,
    format: Option<String>,
    no_notes: bool,
    config_path: Option<PathBuf>,
) -> Result<()> {
    let mut config = load_config(config_path)?;
    apply_format(&mut config, format)?;
    if no_notes {
        config.output.show_notes = false;
    }

    let quantization = match quantization {
        Some(name) => name.parse::<QuantizationScheme>()?,
        None => config.form.quantization,
    };

    let bandwidth_gb_s = match (bandwidth, gpu) {
        (Some(bw), _) => bw,
        (None, Some(id)) => {
            let profile = lookup_gpu(&id)?;
            debug!("using {} bandwidth preset", profile.display_name);
            profile.bandwidth_gb_s
        }
        (None, None) => config.form.bandwidth.default,
    };

    let input = EstimationInput::new(
        params.unwrap_or(config.form.params.default),
        quantization,
        bandwidth_gb_s,
    );

    print_estimate(&config, input)
}

pub fn form(format: Option<String>, config_path: Option<PathBuf>) -> Result<()> {
    let mut config = load_config(config_path)?;
    apply_format(&mut config, format)?;

    // Prompts go to stderr so stdout carries only the report
    eprintln!("╔═══════════════════════════════════════════════════════════════╗");
    eprintln!("║                    LLM TPS Estimator                          ║");
    eprintln!("╚═══════════════════════════════════════════════════════════════╝");
    eprintln!("Press Enter to accept the default shown in brackets.");
    eprintln!();

    let input = run_interactive(&config.form, io::stdin().lock(), io::stderr())?;

    eprintln!();
    print_estimate(&config, input)
}

pub fn init_config(path: PathBuf, force: bool) -> Result<()> {
    if path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite",
            path.display()
        );
    }
    Config::default().save(&path)?;
    info!("wrote default config to {}", path.display());
    println!("Default config written to {}", path.display());
    println!("Use with: tps-estimator estimate --config {}", path.display());
    Ok(())
}

pub fn gpus() -> Result<()> {
    println!("GPU memory bandwidth presets");
    println!();
    for profile in GPU_PROFILES.values() {
        println!(
            "  {:<10} {:<18} {:>7.0} GB/s",
            profile.id, profile.display_name, profile.bandwidth_gb_s
        );
    }
    println!();
    println!("Use with: tps-estimator estimate --gpu <id>");
    Ok(())
}

pub fn notes(format: Option<String>) -> Result<()> {
    let format = match format {
        Some(f) => f.parse()?,
        None => OutputFormat::Text,
    };
    print!("{}", report::notes(format));
    Ok(())
}
