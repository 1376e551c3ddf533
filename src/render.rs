use crate::charts::{Chart, Dataset, Kind};
use crate::record::{Currency, ExchangeRateRecord};
use log::info;
use serde::Serialize;

pub const CANVAS_ID: &str = "exchangeRatesChart";

/// Per-currency view of a response, aligned positionally with `labels`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesSet {
    pub labels: Vec<String>,
    #[serde(rename = "EUR")]
    pub eur: Vec<f64>,
    #[serde(rename = "GBP")]
    pub gbp: Vec<f64>,
    #[serde(rename = "RUB")]
    pub rub: Vec<f64>,
    #[serde(rename = "USD")]
    pub usd: Vec<f64>,
}

impl SeriesSet {
    /// Keeps the order the server delivered.
    pub fn from_records(records: &[ExchangeRateRecord]) -> SeriesSet {
        let column = |c: Currency| -> Vec<f64> { records.iter().map(|r| r.rate(c)).collect() };
        SeriesSet {
            labels: records.iter().map(|r| r.date.clone()).collect(),
            eur: column(Currency::Eur),
            gbp: column(Currency::Gbp),
            rub: column(Currency::Rub),
            usd: column(Currency::Usd),
        }
    }

    pub fn series(&self, currency: Currency) -> &[f64] {
        match currency {
            Currency::Eur => &self.eur,
            Currency::Gbp => &self.gbp,
            Currency::Rub => &self.rub,
            Currency::Usd => &self.usd,
        }
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    pub fn to_chart(&self) -> Chart {
        let mut chart = Chart::new(Kind::Line, self.labels.clone(), "Date", "Exchange Rate");
        for currency in Currency::ALL.iter() {
            chart.add_dataset(Dataset {
                label: currency.to_string(),
                data: self.series(*currency).to_vec(),
                border_color: currency.color(),
                fill: false,
            });
        }
        chart
    }
}

/// The rendering surface. Holds at most one chart instance.
#[derive(Debug)]
pub struct Canvas {
    id: &'static str,
    chart: Option<Chart>,
    series: Option<SeriesSet>,
    destroyed: usize,
}

impl Canvas {
    pub fn new(id: &'static str) -> Canvas {
        Canvas {
            id,
            chart: None,
            series: None,
            destroyed: 0,
        }
    }

    pub fn chart(&self) -> Option<&Chart> {
        self.chart.as_ref()
    }

    pub fn series(&self) -> Option<&SeriesSet> {
        self.series.as_ref()
    }

    /// Number of chart instances torn down so far.
    #[cfg(test)]
    pub fn destroyed(&self) -> usize {
        self.destroyed
    }

    pub fn destroy(&mut self) {
        if self.chart.take().is_some() {
            self.series = None;
            self.destroyed += 1;
        }
    }

    /// Builds a new chart from `records`, destroying the one currently bound.
    pub fn render_chart(&mut self, records: &[ExchangeRateRecord]) -> &Chart {
        let series = SeriesSet::from_records(records);
        self.destroy();
        info!(
            "rendering {} points on '{}' ({} to {})",
            series.len(),
            self.id,
            series.labels.first().map(String::as_str).unwrap_or("-"),
            series.labels.last().map(String::as_str).unwrap_or("-"),
        );
        let chart = series.to_chart();
        self.series = Some(series);
        self.chart.insert(chart)
    }
}
