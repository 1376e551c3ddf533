use crate::date_range::DateRange;
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;

/// Fetch exchange rates from a server and render them as a line chart page.
#[derive(Debug, Clone, Parser)]
#[command(name = "rates-chart", version)]
pub struct Config {
    /// Base url of the server exposing `/data`
    #[arg(long, env = "RATES_SERVER", default_value = "http://127.0.0.1:5000")]
    pub server: String,

    /// Where the html page is written after every chart update
    #[arg(long, env = "RATES_OUTPUT", default_value = "exchange_rates.html")]
    pub output: PathBuf,

    /// Also write the series shown on the chart as json
    #[arg(long)]
    pub series_json: Option<PathBuf>,

    #[arg(long, default_value_t = 10_000)]
    pub timeout_ms: u64,

    /// Initial start date, defaults to 30 days ago
    #[arg(long)]
    pub start_date: Option<String>,

    /// Initial end date, defaults to today
    #[arg(long)]
    pub end_date: Option<String>,

    /// Keep reading filter requests (`<start> <end>`) from stdin
    #[arg(long, short)]
    pub interactive: bool,
}

impl Config {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }

    /// Default last-month range, with any date given on the command line taking precedence.
    pub fn initial_range(&self, default: DateRange) -> DateRange {
        DateRange {
            start: self.start_date.clone().unwrap_or(default.start),
            end: self.end_date.clone().unwrap_or(default.end),
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::try_parse_from(["rates-chart"]).unwrap();
        assert_eq!(config.output, PathBuf::from("exchange_rates.html"));
        assert_eq!(config.timeout(), Duration::from_secs(10));
        assert!(!config.interactive);
        let range = config.initial_range(DateRange::new("2024-01-01", "2024-01-31"));
        assert_eq!(range, DateRange::new("2024-01-01", "2024-01-31"));
    }

    #[test]
    fn test_overrides() {
        let config = Config::try_parse_from([
            "rates-chart",
            "--server",
            "http://rates.test",
            "--start-date",
            "2023-06-01",
            "-i",
        ])
        .unwrap();
        assert_eq!(config.server, "http://rates.test");
        assert!(config.interactive);
        let range = config.initial_range(DateRange::new("2024-01-01", "2024-01-31"));
        assert_eq!(range, DateRange::new("2023-06-01", "2024-01-31"));
    }
}
