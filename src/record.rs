use crate::charts::Color;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// One server-returned row of exchange rates for a single date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRateRecord {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "EUR")]
    pub eur: f64,
    #[serde(rename = "GBP")]
    pub gbp: f64,
    #[serde(rename = "RUB")]
    pub rub: f64,
    #[serde(rename = "USD")]
    pub usd: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Eur,
    Gbp,
    Rub,
    Usd,
}

impl Currency {
    /// Chart order.
    pub const ALL: [Currency; 4] = [Currency::Eur, Currency::Gbp, Currency::Rub, Currency::Usd];

    pub fn code(&self) -> &'static str {
        match self {
            Currency::Eur => "EUR",
            Currency::Gbp => "GBP",
            Currency::Rub => "RUB",
            Currency::Usd => "USD",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Currency::Eur => Color::Blue,
            Currency::Gbp => Color::Green,
            Currency::Rub => Color::Red,
            Currency::Usd => Color::Orange,
        }
    }
}

impl Display for Currency {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

impl ExchangeRateRecord {
    pub fn rate(&self, currency: Currency) -> f64 {
        match currency {
            Currency::Eur => self.eur,
            Currency::Gbp => self.gbp,
            Currency::Rub => self.rub,
            Currency::Usd => self.usd,
        }
    }
}

#[cfg(test)]
pub mod test {
    use super::*;

    pub fn mock_record(date: &str, eur: f64, gbp: f64, rub: f64, usd: f64) -> ExchangeRateRecord {
        ExchangeRateRecord {
            date: date.to_string(),
            eur,
            gbp,
            rub,
            usd,
        }
    }

    #[test]
    fn test_deserialize_wire_names() {
        let json = r#"{"Date":"2024-01-01","EUR":1.1,"GBP":0.9,"RUB":95.0,"USD":1.0}"#;
        let record: ExchangeRateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record, mock_record("2024-01-01", 1.1, 0.9, 95.0, 1.0));
        assert_eq!(record.rate(Currency::Rub), 95.0);
    }

    #[test]
    fn test_integer_rates() {
        let json = r#"{"Date":"2024-01-02","EUR":430,"GBP":505,"RUB":4,"USD":390}"#;
        let record: ExchangeRateRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.usd, 390.0);
    }

    #[test]
    fn test_currency_order() {
        let codes: Vec<_> = Currency::ALL.iter().map(|c| c.to_string()).collect();
        assert_eq!(codes, vec!["EUR", "GBP", "RUB", "USD"]);
    }
}
