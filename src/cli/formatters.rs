use chrono::NaiveDate;

use duesboard_config::Config;
use duesboard_core::{CurrencyFormatter, DateFormatter};

/// Lightweight formatter implementations backed by the active configuration.
#[derive(Clone)]
pub struct CliFormatters {
    currency: String,
}

impl CliFormatters {
    pub fn new(config: &Config) -> Self {
        Self {
            currency: config.currency.clone(),
        }
    }

    /// Amount in the configured currency.
    pub fn amount(&self, value: f64) -> String {
        self.format_amount(value, "")
    }

    /// Long-form date for the dashboard header.
    pub fn long_date(&self, date: NaiveDate) -> String {
        date.format("%A, %B %-d, %Y").to_string()
    }
}

impl CurrencyFormatter for CliFormatters {
    fn format_amount(&self, amount: f64, currency: &str) -> String {
        let code = if currency.is_empty() {
            self.currency.as_str()
        } else {
            currency
        };
        format!("{amount:.2} {code}")
    }
}

impl DateFormatter for CliFormatters {
    fn format_date(&self, date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amounts_use_the_configured_currency() {
        let formatters = CliFormatters::new(&Config::default());
        assert_eq!(formatters.amount(12.5), "12.50 PLN");
        assert_eq!(formatters.format_amount(3.0, "EUR"), "3.00 EUR");
    }

    #[test]
    fn long_date_spells_out_the_weekday() {
        let formatters = CliFormatters::new(&Config::default());
        let date = NaiveDate::from_ymd_opt(2026, 8, 4).unwrap();
        assert_eq!(formatters.long_date(date), "Tuesday, August 4, 2026");
    }
}
