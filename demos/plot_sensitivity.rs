// Example: plot_sensitivity.rs
// Plots option price and intrinsic value against the underlying spot for the
// contract described in a request file.
//
// Usage:
//     cargo run --example plot_sensitivity -- [path/to/request.toml]
//
// The output image will be written to sensitivity.svg in the working directory.

use std::env;
use std::error::Error;

use bs_pricer_lib::{sensitivity_ladder, AnalysisFile, SensitivityConfig};
use plotters::prelude::*;

fn main() -> Result<(), Box<dyn Error>> {
    let path = env::args()
        .nth(1)
        .unwrap_or_else(|| "demos/analysis.toml".to_string());
    let request = AnalysisFile::from_file(&path)?;
    let inputs = request.inputs;
    inputs.validate()?;

    // Keep the configured range but sample densely for a smooth curve
    let cfg = SensitivityConfig {
        steps: 250,
        round_decimals: None,
        ..request.analysis.sensitivity
    };
    let ladder = sensitivity_ladder(&inputs, &cfg);

    let price_line: Vec<(f64, f64)> = ladder.iter().map(|p| (p.spot, p.option_price)).collect();
    let intrinsic_line: Vec<(f64, f64)> =
        ladder.iter().map(|p| (p.spot, p.intrinsic_value)).collect();

    let x_min = ladder.first().map(|p| p.spot).unwrap_or(0.0);
    let x_max = ladder.last().map(|p| p.spot).unwrap_or(1.0);
    let y_max = ladder
        .iter()
        .map(|p| p.option_price.max(p.intrinsic_value))
        .fold(0.0_f64, f64::max)
        * 1.1;

    let root = SVGBackend::new("sensitivity.svg", (1280, 768)).into_drawing_area();
    root.fill(&WHITE)?;
    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption(
            format!(
                "Black-Scholes {} | K={} T={:.4}y r={:.2}% sigma={:.1}%",
                inputs.kind,
                inputs.strike,
                inputs.time_to_maturity,
                inputs.rate * 100.0,
                inputs.volatility * 100.0
            ),
            ("sans-serif", 30),
        )
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, 0.0..y_max.max(1e-6))?;

    chart
        .configure_mesh()
        .x_desc("Stock Price ($)")
        .y_desc("Option Price ($)")
        .draw()?;

    chart
        .draw_series(vec![PathElement::new(price_line, BLUE.stroke_width(3))])?
        .label("Option Price")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], BLUE));
    chart
        .draw_series(vec![PathElement::new(intrinsic_line, GREEN.stroke_width(2))])?
        .label("Intrinsic Value")
        .legend(|(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], GREEN));

    chart
        .configure_series_labels()
        .background_style(WHITE.mix(0.8))
        .border_style(BLACK)
        .draw()?;

    root.present()?;
    println!("Chart saved to sensitivity.svg");
    Ok(())
}
