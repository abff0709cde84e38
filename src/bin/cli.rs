//! LP Hedge CLI
//!
//! Command-line front end: loads hedge parameters, composes the curves and
//! prints them as a table or JSON.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};
use tracing_subscriber::EnvFilter;

use lp_hedge::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum ModeArg {
    Expiry,
    Theoretical,
}

impl From<ModeArg> for PayoffMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Expiry => PayoffMode::Expiry,
            ModeArg::Theoretical => PayoffMode::Theoretical,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Value a concentrated-liquidity position hedged with a put
#[derive(Debug, Parser)]
#[command(name = "lp-hedge", version, about)]
struct Cli {
    /// JSON hedge configuration (defaults are used when omitted)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Override the option payoff mode
    #[arg(short, long, value_enum)]
    mode: Option<ModeArg>,

    /// Override the number of grid samples
    #[arg(short, long)]
    samples: Option<usize>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Table rows to print (evenly thinned from the full grid)
    #[arg(long, default_value_t = 21)]
    rows: usize,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> HedgeResult<()> {
    let mut config = match &cli.config {
        Some(path) => HedgeConfig::from_json_file(path)?,
        None => HedgeConfig::default(),
    };
    if let Some(mode) = cli.mode {
        config.composition.mode = mode.into();
    }
    if let Some(samples) = cli.samples {
        config.composition.sample_count = samples;
    }

    let (position, mut warnings) = config.build_position()?;
    let contract = config.build_contract()?;
    let mut curves = config.composer().compose(&position, &contract)?;
    warnings.append(&mut curves.warnings);
    curves.warnings = warnings;

    match cli.format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&curves)
                .map_err(|e| HedgeError::serialization(e.to_string()))?;
            println!("{}", json);
        }
        OutputFormat::Table => print_table(&position, &contract, &curves, cli.rows),
    }

    Ok(())
}

fn print_table(
    position: &LiquidityPosition,
    contract: &OptionContract,
    curves: &HedgeCurves,
    rows: usize,
) {
    println!("LP + Put Hedge");
    println!("==============\n");

    println!("Liquidity Position:");
    println!("  Reference price (S0): {:.4}", position.reference_price);
    println!(
        "  Range:                [{:.4}, {:.4}]",
        position.range.lower(),
        position.range.upper()
    );
    println!("  Reference value (V0): {:.2}", position.reference_value);
    println!("  K:                    {:.4}", curves.liquidity.k);
    println!("  r:                    {:.6}", curves.liquidity.r);
    println!("  alpha:                {:.4}", curves.liquidity.alpha);
    println!("  L:                    {:.4}\n", curves.liquidity.liquidity);

    println!("Put Option ({}):", contract.side.label());
    println!("  Strike:   {:.4}", contract.strike);
    println!("  Premium:  {:.4}", contract.premium);
    println!("  Quantity: {}", contract.quantity);
    println!("  Mode:     {}", curves.mode.label());
    if curves.mode == PayoffMode::Theoretical {
        println!("  T (years):      {:.4}", curves.option_diagnostics.time_to_expiry);
        println!(
            "  Sigma (annual): {:.2}%",
            curves.option_diagnostics.sigma_annual * 100.0
        );
    }
    println!();

    for warning in &curves.warnings {
        println!("Warning: {}", warning);
    }
    if !curves.warnings.is_empty() {
        println!();
    }

    println!(
        "{:>12} | {:>14} | {:>14} | {:>14}",
        "Price", curves.position.label, "Put", "Combined"
    );
    println!("{}", "-".repeat(63));

    let n = curves.len();
    let shown = rows.max(2).min(n);
    for r in 0..shown {
        let i = r * (n - 1) / (shown - 1);
        println!(
            "{:>12.4} | {:>14.2} | {:>14.2} | {:>14.2}",
            curves.combined.points[i].price,
            curves.position.points[i].value,
            curves.option.points[i].value,
            curves.combined.points[i].value,
        );
    }

    if let (Some(worst), Some(best)) = (curves.min_combined(), curves.max_combined()) {
        println!(
            "\nCombined range: worst {:.2} at {:.4}, best {:.2} at {:.4}",
            worst.value, worst.price, best.value, best.price
        );
    }
}
