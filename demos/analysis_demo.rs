// demos/analysis_demo.rs

//! Load a contract from TOML, analyse it and export the spot ladder.
//!
//!     cargo run --example analysis_demo -- [path/to/request.toml]
//!
//! Prints the analysis as JSON and writes the ladder to sensitivity.csv.

use std::env;
use std::fs::File;

use anyhow::{Context, Result};
use bs_pricer_lib::{analyze, write_sensitivity_csv, AnalysisFile};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/analysis.toml".to_string());
    let request =
        AnalysisFile::from_file(&path).with_context(|| format!("loading {}", path))?;

    let result = analyze(&request.inputs, &request.analysis)?;
    println!("{}", serde_json::to_string_pretty(&result)?);

    println!("\nSummary ({}):", request.inputs.kind);
    println!("  Option price:    ${:.2}", result.option_price);
    println!("  Intrinsic value: ${:.2}", result.intrinsic_value);
    println!("  Time value:      ${:.2}", result.time_value);
    println!(
        "  Delta {:.4}  Gamma {:.4}  Theta {:.4}  Vega {:.4}  Rho {:.4}",
        result.greeks.delta,
        result.greeks.gamma,
        result.greeks.theta,
        result.greeks.vega,
        result.greeks.rho
    );

    let out = File::create("sensitivity.csv").context("creating sensitivity.csv")?;
    write_sensitivity_csv(out, &result.sensitivity)?;
    println!(
        "\nWrote {} ladder points to sensitivity.csv",
        result.sensitivity.len()
    );

    Ok(())
}
