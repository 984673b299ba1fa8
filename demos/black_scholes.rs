// demos/black_scholes.rs

//! Price the reference European call and print it to four decimals.
//!
//!     cargo run --example black_scholes
//!
//! Set `RUST_LOG=debug` to see library events on stderr.

use anyhow::Result;
use bs_pricer_lib::{format_price_line, price, OptionKind};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let s = 100.0; // Current stock price
    let k = 100.0; // Strike price
    let t = 240.0 / 365.0; // Time to maturity (in years)
    let r = 0.01; // Risk-free rate
    let sigma = 0.30; // Volatility
    let option_kind = "call";

    let value = price(s, k, t, r, sigma, option_kind)?;
    let kind: OptionKind = option_kind.parse()?;
    println!("{}", format_price_line(kind, value));

    Ok(())
}
