pub mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tps-estimator")]
#[command(about = "Estimate LLM inference tokens/sec from model size and GPU bandwidth", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Estimate throughput for one configuration
    Estimate {
        /// Model size in billions of parameters
        #[arg(long)]
        params: Option<f64>,
        /// Quantization scheme (FP8, FP4, FP16)
        #[arg(long, short)]
        quantization: Option<String>,
        /// GPU memory bandwidth in GB/s
        #[arg(long, conflicts_with = "gpu")]
        bandwidth: Option<f64>,
        /// Use a GPU preset's bandwidth (see `gpus`)
        #[arg(long)]
        gpu: Option<String>,
        /// Output format (text, markdown, json)
        #[arg(long)]
        format: Option<String>,
        /// Omit the formula and notes block
        #[arg(long)]
        no_notes: bool,
        /// JSON config file with form and output defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Fill in the estimator form interactively
    Form {
        /// Output format (text, markdown, json)
        #[arg(long)]
        format: Option<String>,
        /// JSON config file with form and output defaults
        #[arg(long)]
        config: Option<PathBuf>,
    },
    /// Write the default config to a JSON file for editing
    InitConfig {
        /// Destination path
        #[arg(long, default_value = "tps-estimator.json")]
        output: PathBuf,
        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
    /// List GPU bandwidth presets
    Gpus,
    /// Show the formula and quantization factors
    Notes {
        /// Output format (text, markdown, json)
        #[arg(long)]
        format: Option<String>,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Estimate {
            params,
            quantization,
            bandwidth,
            gpu,
            format,
            no_notes,
            config,
        } => commands::estimate(
            params,
            quantization,
            bandwidth,
            gpu,
            format,
            no_notes,
            config,
        ),
        Commands::Form { format, config } => commands::form(format, config),
        Commands::InitConfig { output, force } => commands::init_config(output, force),
        Commands::Gpus => commands::gpus(),
        Commands::Notes { format } => commands::notes(format),
    }
}
