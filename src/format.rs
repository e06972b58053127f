//! Display helpers shared by the CLI report and the TUI.

use chrono::NaiveDate;

/// Formats an amount as rupees with two decimals, e.g. `₹830.72`.
pub fn rupees(amount: f64) -> String {
    format!("₹{amount:.2}")
}

/// Formats a history date as `dd/mm/yyyy`.
pub fn date(date: NaiveDate) -> String {
    date.format("%d/%m/%Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rupees_rounds_to_two_decimals() {
        assert_eq!(rupees(830.72), "₹830.72");
        assert_eq!(rupees(0.0), "₹0.00");
        assert_eq!(rupees(1.005_1), "₹1.01");
    }

    #[test]
    fn date_is_day_first() {
        let d = NaiveDate::from_ymd_opt(2025, 12, 1).unwrap_or_default();
        assert_eq!(date(d), "01/12/2025");
    }
}
