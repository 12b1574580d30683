//! Serializes a generated series for the command-line tool.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::io::Write;

use crate::domain::market::types::SeriesResult;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full series with stats, same shape as the HTTP `data` field
    Json,
    /// One row per bar, no stats
    Csv,
}

pub fn write_series<W: Write>(
    writer: W,
    series: &SeriesResult,
    format: OutputFormat,
) -> Result<()> {
    match format {
        OutputFormat::Json => write_json(writer, series),
        OutputFormat::Csv => write_csv(writer, series),
    }
}

fn write_json<W: Write>(mut writer: W, series: &SeriesResult) -> Result<()> {
    serde_json::to_writer_pretty(&mut writer, series).context("Failed to serialize series")?;
    writeln!(writer)?;
    Ok(())
}

fn write_csv<W: Write>(writer: W, series: &SeriesResult) -> Result<()> {
    let mut wtr = csv::WriterBuilder::new().has_headers(true).from_writer(writer);
    for bar in &series.bars {
        wtr.serialize(bar)
            .with_context(|| format!("Failed to serialize bar for {}", bar.date))?;
    }
    wtr.flush().context("Failed to flush CSV writer")?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::market_data::PriceSeriesGenerator;
    use chrono::NaiveDate;

    fn series() -> SeriesResult {
        let now = NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap();
        PriceSeriesGenerator::generate_as_of("AAPL", 5, now).unwrap()
    }

    #[test]
    fn test_csv_has_header_and_one_row_per_bar() {
        let mut buf = Vec::new();
        write_series(&mut buf, &series(), OutputFormat::Csv).unwrap();

        let text = String::from_utf8(buf).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[0], "date,open,high,low,close,volume");
        assert!(lines[1].starts_with("2024-03-13,"));
    }

    #[test]
    fn test_json_matches_http_shape() {
        let mut buf = Vec::new();
        write_series(&mut buf, &series(), OutputFormat::Json).unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        assert_eq!(value["symbol"], "AAPL");
        assert_eq!(value["data"].as_array().unwrap().len(), 5);
        assert_eq!(value["stats"]["start_price"], 170.0);
    }
}
