//! Category Comparison Report
//!
//! Raw monthly volume per selected category for one year. Amounts are
//! summed as recorded: no sign from the flow type, no carry between months.

use chrono::Datelike;
use std::io::Write;

use crate::error::LedgerResult;
use crate::models::{Ledger, Money, Transaction, Year};

use super::{MonthLabels, MONTH_LABELS};

/// One month of the comparison
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComparisonPoint {
    /// 1-based month number
    pub month: u32,
    pub label: &'static str,
    /// Sum per selected category, in selection order
    pub sums: Vec<(String, Money)>,
}

impl ComparisonPoint {
    /// Sum for one category, zero when it was not selected
    pub fn sum_for(&self, category: &str) -> Money {
        self.sums
            .iter()
            .find(|(name, _)| name == category)
            .map(|(_, sum)| *sum)
            .unwrap_or_default()
    }
}

/// Category Comparison Report
#[derive(Debug, Clone)]
pub struct CategoryComparisonReport {
    pub year: Year,
    /// Selected categories, duplicates dropped, first occurrence kept
    pub categories: Vec<String>,
    pub points: Vec<ComparisonPoint>,
}

impl CategoryComparisonReport {
    /// Generate the comparison for `year` and the selected category names
    ///
    /// Names are matched against transactions as-is, so a category that was
    /// removed from the taxonomy can still be compared.
    pub fn generate<S: AsRef<str>>(ledger: &Ledger, year: Year, selected: &[S]) -> Self {
        let mut categories: Vec<String> = Vec::with_capacity(selected.len());
        for name in selected {
            let name = name.as_ref();
            if !categories.iter().any(|c| c == name) {
                categories.push(name.to_string());
            }
        }

        let in_year: Vec<&Transaction> = ledger
            .transactions
            .iter()
            .filter(|t| t.is_in_year(year))
            .collect();

        let points: Vec<ComparisonPoint> = (1..=12u32)
            .zip(MONTH_LABELS)
            .map(|(month, label)| {
                let sums = categories
                    .iter()
                    .map(|category| {
                        let sum: Money = in_year
                            .iter()
                            .filter(|t| t.date.month() == month && &t.category == category)
                            .map(|t| t.amount)
                            .sum();
                        (category.clone(), sum)
                    })
                    .collect();
                ComparisonPoint { month, label, sums }
            })
            .collect();

        Self {
            year,
            categories,
            points,
        }
    }

    /// Yearly total for one category
    pub fn total_for(&self, category: &str) -> Money {
        self.points.iter().map(|p| p.sum_for(category)).sum()
    }

    /// Format the report for terminal display
    pub fn format_terminal(&self, labels: MonthLabels) -> String {
        let mut output = String::new();

        output.push_str(&format!("Category Comparison {}\n", self.year));

        if self.categories.is_empty() {
            output.push_str("No categories selected.\n");
            return output;
        }

        let width = self
            .categories
            .iter()
            .map(|c| c.len())
            .max()
            .unwrap_or(0)
            .max(12);

        output.push_str(&"=".repeat(7 + (width + 1) * self.categories.len()));
        output.push('\n');

        output.push_str(&format!("{:<6}", "Month"));
        for category in &self.categories {
            output.push_str(&format!(" {:>width$}", category.to_uppercase(), width = width));
        }
        output.push('\n');

        for point in &self.points {
            output.push_str(&format!("{:<6}", labels.label(point.month)));
            for (_, sum) in &point.sums {
                output.push_str(&format!(" {:>width$}", sum, width = width));
            }
            output.push('\n');
        }

        output.push_str(&format!("{:<6}", "Total"));
        for category in &self.categories {
            output.push_str(&format!(
                " {:>width$}",
                self.total_for(category),
                width = width
            ));
        }
        output.push('\n');

        output
    }

    /// Export the comparison to CSV format, one column per category
    pub fn export_csv<W: Write>(&self, writer: W) -> LedgerResult<()> {
        let mut csv = csv::Writer::from_writer(writer);

        let mut header = vec!["Month".to_string(), "Label".to_string()];
        header.extend(self.categories.iter().cloned());
        csv.write_record(&header)?;

        for point in &self.points {
            let mut record = vec![point.month.to_string(), point.label.to_string()];
            record.extend(point.sums.iter().map(|(_, sum)| format!("{:.2}", sum.to_f64())));
            csv.write_record(&record)?;
        }

        csv.flush()?;
        Ok(())
    }
}
