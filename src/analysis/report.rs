use std::io;

use super::SensitivityPoint;
use crate::error::Result;
use crate::types::OptionKind;

/// One-line summary printed by the example driver, price to four decimals.
pub fn format_price_line(kind: OptionKind, price: f64) -> String {
    format!("The {} option price is: {:.4}", kind, price)
}

/// Write a sensitivity ladder as CSV with a header row.
pub fn write_sensitivity_csv<W: io::Write>(writer: W, points: &[SensitivityPoint]) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(["spot", "option_price", "intrinsic_value", "time_value"])?;
    for p in points {
        wtr.write_record(&[
            p.spot.to_string(),
            p.option_price.to_string(),
            p.intrinsic_value.to_string(),
            p.time_value.to_string(),
        ])?;
    }
    wtr.flush()?;
    Ok(())
}
