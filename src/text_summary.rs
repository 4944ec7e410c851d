//! Text audit report builder.
//!
//! Formats the collected inputs and derived metrics as the fixed-width report block
//! printed at the end of a session.

use crate::model::AuditReport;
use rust_decimal::{Decimal, RoundingStrategy};

const RULE_WIDTH: usize = 60;

/// Pre-formatted lines for text output.
pub(crate) struct TextSummary {
    pub lines: Vec<String>,
}

/// Build the audit report lines, including the blank lines around the block.
pub(crate) fn build_text_summary(report: &AuditReport) -> TextSummary {
    let major = "=".repeat(RULE_WIDTH);
    let minor = "-".repeat(RULE_WIDTH);
    let profile = &report.profile;
    let summary = &report.summary;

    let mut lines = vec![
        String::new(),
        major.clone(),
        "                    AUDIT REPORT".to_string(),
        major.clone(),
        format!("Driver Name:              {}", profile.driver_name),
        format!(
            "Total Distance (km):      {}",
            format_number(profile.total_distance_km)
        ),
        format!(
            "Weekly Fuel Budget:       {}",
            format_currency(profile.weekly_fuel_budget)
        ),
        minor.clone(),
        "5-Day Fuel Expense Breakdown:".to_string(),
    ];

    for (day, cost) in report.fuel_log.days() {
        lines.push(format!("  Day {day}: {}", format_currency(cost)));
    }

    lines.push(minor);
    lines.push(format!(
        "Total Fuel Spent:         {}",
        format_currency(summary.total_fuel_spent)
    ));
    lines.push(format!(
        "Average Daily Expense:    {}",
        format_currency(summary.average_daily_fuel_expense)
    ));
    lines.push(format!(
        "Fuel Efficiency Rating:   {}",
        summary.efficiency_rating
    ));
    lines.push(format!(
        "Stayed Under Budget:      {}",
        if summary.stayed_under_budget {
            "True"
        } else {
            "False"
        }
    ));
    lines.push(major);
    lines.push(String::new());
    lines.push("Report generated for Codac Logistics Accounting.".to_string());

    TextSummary { lines }
}

/// `$1,234.57` style: two decimals, midpoints rounded away from zero, leading minus.
pub(crate) fn format_currency(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let digits = group_thousands(&format!("{:.2}", rounded.abs()));
    if rounded.is_sign_negative() && !rounded.is_zero() {
        format!("-${digits}")
    } else {
        format!("${digits}")
    }
}

/// `1,200.50` style: grouped thousands, two decimals, midpoints rounded away from zero.
pub(crate) fn format_number(value: f64) -> String {
    let rounded = (value.abs() * 100.0).round() / 100.0;
    let digits = group_thousands(&format!("{rounded:.2}"));
    if value < 0.0 && digits.bytes().any(|b| matches!(b, b'1'..=b'9')) {
        format!("-{digits}")
    } else {
        digits
    }
}

/// Insert `,` between thousands in the integer part of an unsigned decimal string.
fn group_thousands(unsigned: &str) -> String {
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(unsigned.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }
    if let Some(frac) = frac_part {
        grouped.push('.');
        grouped.push_str(frac);
    }
    grouped
}
