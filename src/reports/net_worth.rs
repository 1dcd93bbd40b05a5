//! Monthly Net Worth Report
//!
//! Twelve cumulative points for one year. The series opens from the
//! baseline balance carried forward through every counted transaction
//! dated before January 1st, then rolls each month's signed flow into the
//! running total.

use chrono::Datelike;
use std::io::Write;
use tracing::debug;

use crate::error::LedgerResult;
use crate::models::{Ledger, LedgerConfig, Money, Transaction, Year};

use super::{signed_total, MonthLabels, MONTH_LABELS};

/// One month of the series
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NetWorthPoint {
    /// 1-based month number
    pub month: u32,
    pub label: &'static str,
    /// Signed flow of this month alone
    pub flow: Money,
    /// Running total at the end of the month
    pub value: Money,
}

/// Monthly cumulative net-worth series for one year
#[derive(Debug, Clone)]
pub struct MonthlyNetWorthReport {
    pub year: Year,
    /// Total carried into January
    pub opening: Money,
    /// Always twelve points, January first
    pub points: Vec<NetWorthPoint>,
}

/// Baseline balance plus counted flows from the baseline date up to the start of `year`
pub fn year_opening_total(
    config: &LedgerConfig,
    transactions: &[Transaction],
    year: Year,
) -> Money {
    let carried = transactions
        .iter()
        .filter(|t| t.date >= config.baseline_date && t.date.year() < year.value());

    config.baseline_balance + signed_total(&config.categories, carried)
}

impl MonthlyNetWorthReport {
    /// Generate the series for `year`
    ///
    /// In-year transactions count by month regardless of the baseline date;
    /// only the carry into January is bounded by it.
    pub fn generate(ledger: &Ledger, year: Year) -> Self {
        let config = &ledger.config;
        let opening = year_opening_total(config, &ledger.transactions, year);

        let in_year: Vec<&Transaction> = ledger
            .transactions
            .iter()
            .filter(|t| t.is_in_year(year))
            .collect();

        let mut running = opening;
        let points: Vec<NetWorthPoint> = (1..=12u32)
            .zip(MONTH_LABELS)
            .map(|(month, label)| {
                let flow = signed_total(
                    &config.categories,
                    in_year.iter().copied().filter(|t| t.date.month() == month),
                );
                running += flow;
                NetWorthPoint {
                    month,
                    label,
                    flow,
                    value: running,
                }
            })
            .collect();

        debug!(%year, %opening, closing = %running, "computed monthly net worth");

        Self {
            year,
            opening,
            points,
        }
    }

    /// Value at the end of December
    pub fn closing(&self) -> Money {
        self.points.last().map(|p| p.value).unwrap_or(self.opening)
    }

    /// Value at the end of a 1-based month
    pub fn value_at(&self, month: u32) -> Option<Money> {
        self.points.iter().find(|p| p.month == month).map(|p| p.value)
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: MonthLabels, currency_symbol: &str) -> String {
        let mut output = String::new();

        output.push_str(&format!("Monthly Net Worth {}\n", self.year));
        output.push_str(&"=".repeat(44));
        output.push('\n');
        output.push_str(&format!(
            "Opening: {}\n\n",
            self.opening.format_with_symbol(currency_symbol)
        ));
        output.push_str(&format!("{:<6} {:>16} {:>20}\n", "Month", "Flow", "Value"));
        output.push_str(&"-".repeat(44));
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!(
                "{:<6} {:>16} {:>20}\n",
                labels.label(point.month),
                point.flow.format_with_symbol(currency_symbol),
                point.value.format_with_symbol(currency_symbol)
            ));
        }

        output
    }

    /// Export the series to CSV format
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);
        csv.write_record(["Month", "Label", "Flow", "Value"])?;

        for point in &self.points {
            csv.write_record([
                point.month.to_string(),
                point.label.to_string(),
                format!("{:.2}", point.flow.to_f64()),
                format!("{:.2}", point.value.to_f64()),
            ])?;
        }

        csv.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Category, FlowType, TransactionId};
    use chrono::NaiveDate;

    fn date(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    fn year(s: &str) -> Year {
        Year::parse(s).unwrap()
    }

    fn ledger(transactions: Vec<(i64, &str, &str)>) -> Ledger {
        let mut config = LedgerConfig::with_storage_path("/tmp");
        config.baseline_balance = Money::from_units(10_000);
        config.baseline_date = date("2024-01-01");
        config.categories = vec![
            Category::new("stipendio", FlowType::Income),
            Category::new("affitto", FlowType::Expense),
            Category::new("documenti", FlowType::Neutral),
        ];
        let transactions = transactions
            .into_iter()
            .enumerate()
            .map(|(i, (units, category, on))| {
                Transaction::new(
                    TransactionId::new(i as i64),
                    Money::from_units(units),
                    category,
                    date(on),
                )
            })
            .collect();
        Ledger::new(config, transactions)
    }

    #[test]
    fn test_series_is_cumulative() {
        let ledger = ledger(vec![
            (2000, "stipendio", "2024-02-01"),
            (800, "affitto", "2024-03-01"),
        ]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2024"));

        assert_eq!(report.points.len(), 12);
        assert_eq!(report.opening, Money::from_units(10_000));
        assert_eq!(report.value_at(1), Some(Money::from_units(10_000)));
        assert_eq!(report.value_at(2), Some(Money::from_units(12_000)));
        assert_eq!(report.value_at(3), Some(Money::from_units(11_200)));
        assert_eq!(report.value_at(12), Some(Money::from_units(11_200)));
        assert_eq!(report.points[2].flow, Money::from_units(-800));
        assert_eq!(report.points[0].label, "Jan");
        assert_eq!(report.points[11].label, "Dec");
    }

    #[test]
    fn test_december_matches_current_balance() {
        let ledger = ledger(vec![
            (2000, "stipendio", "2024-02-01"),
            (800, "affitto", "2024-03-01"),
            (50, "documenti", "2024-07-15"),
            (300, "affitto", "2024-12-31"),
        ]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2024"));
        let balance = crate::reports::current_balance(&ledger.config, &ledger.transactions);
        assert_eq!(report.closing(), balance);
    }

    #[test]
    fn test_opening_carries_prior_years() {
        let ledger = ledger(vec![
            (2000, "stipendio", "2024-02-01"),
            (800, "affitto", "2024-03-01"),
            (100, "affitto", "2025-01-10"),
            // before baseline, never carried
            (5000, "stipendio", "2023-05-01"),
        ]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2025"));
        assert_eq!(report.opening, Money::from_units(11_200));
        assert_eq!(report.value_at(1), Some(Money::from_units(11_100)));
        assert_eq!(report.closing(), Money::from_units(11_100));
    }

    #[test]
    fn test_year_before_baseline_opens_at_baseline() {
        let ledger = ledger(vec![(5000, "stipendio", "2023-05-01")]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2023"));
        assert_eq!(report.opening, Money::from_units(10_000));
        // in-year flows are not bounded by the baseline date
        assert_eq!(report.value_at(5), Some(Money::from_units(15_000)));
    }

    #[test]
    fn test_dangling_excluded_from_series() {
        let ledger = ledger(vec![(700, "palestra", "2024-04-01")]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2024"));
        assert!(report.points.iter().all(|p| p.value == Money::from_units(10_000)));
    }

    #[test]
    fn test_export_csv() {
        let ledger = ledger(vec![(800, "affitto", "2024-03-01")]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2024"));

        let mut out = Vec::new();
        report.export_csv(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 13);
        assert_eq!(lines[0], "Month,Label,Flow,Value");
        assert_eq!(lines[3], "3,Mar,-800.00,9200.00");
    }

    #[test]
    fn test_format_terminal_uses_labels() {
        let ledger = ledger(vec![]);
        let report = MonthlyNetWorthReport::generate(&ledger, year("2024"));
        let text = report.format_terminal(MonthLabels::Italian, "€");
        assert!(text.contains("Monthly Net Worth 2024"));
        assert!(text.contains("Gen"));
        assert!(text.contains("Dic"));
    }
}
