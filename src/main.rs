use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use log::{info, warn};
use station_coverage::{
    ConfigurationManager, CsvFormatter, JsonFormatter, Method, RegionResult, TextFormatter,
};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum MethodArg {
    DiffRange,
    DirectRange,
    AngleMeasuring,
    All,
}

impl MethodArg {
    fn methods(self) -> Vec<Method> {
        match self {
            MethodArg::DiffRange => vec![Method::DiffRange],
            MethodArg::DirectRange => vec![Method::DirectRange],
            MethodArg::AngleMeasuring => vec![Method::AngleMeasuring],
            MethodArg::All => Method::ALL.to_vec(),
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Text,
    Json,
    Csv,
}

/// Compute acceptable-accuracy regions for two-station positioning methods
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// JSON configuration file (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Method to compute
    #[arg(short, long, value_enum, default_value = "all")]
    method: MethodArg,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    format: FormatArg,

    /// Write output to this file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Override the number of radial steps for every method
    #[arg(long)]
    steps: Option<u32>,

    /// Override the radial spacing for every method
    #[arg(long)]
    spacing: Option<f64>,

    /// Write the default configuration to this file and exit
    #[arg(long)]
    write_default_config: Option<PathBuf>,
}

fn render(format: FormatArg, results: &[RegionResult]) -> Result<String> {
    let output = match format {
        FormatArg::Text => results
            .iter()
            .map(|r| TextFormatter::new().format_text(r))
            .collect::<Vec<_>>()
            .join("\n"),
        FormatArg::Json => JsonFormatter::pretty().format_json_batch(results)?,
        FormatArg::Csv => {
            let mut csv = String::new();
            for (i, result) in results.iter().enumerate() {
                let formatter = CsvFormatter { include_header: i == 0 };
                csv.push_str(&formatter.format_csv(result));
            }
            csv
        }
    };
    Ok(output)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if let Some(path) = &args.write_default_config {
        ConfigurationManager::new()
            .save_to_file(path)
            .with_context(|| format!("writing default config to {}", path.display()))?;
        println!("Default configuration written to {}", path.display());
        return Ok(());
    }

    let mut manager = match &args.config {
        Some(path) => ConfigurationManager::from_file(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => ConfigurationManager::new(),
    };

    let methods = args.method.methods();
    for &method in &methods {
        let mut grid = manager.config().setup(method).grid;
        if let Some(steps) = args.steps {
            grid.steps = steps;
        }
        if let Some(spacing) = args.spacing {
            grid.spacing = spacing;
        }
        manager.set_grid(method, grid)?;
    }

    let planner = manager.planner();
    let mut results = Vec::with_capacity(methods.len());
    for method in methods {
        let request = manager.config().setup(method);
        let result = planner
            .compute_request(request)
            .with_context(|| format!("computing {} region", method))?;
        info!("{}: {} accepted samples", method, result.accepted_count());
        results.push(result);
    }

    if results.iter().all(|r| r.is_empty()) {
        warn!("no method produced an acceptable region");
    }

    let output = render(args.format, &results)?;
    match &args.output {
        Some(path) => fs::write(path, output).with_context(|| format!("writing {}", path.display()))?,
        None => print!("{}", output),
    }

    Ok(())
}
