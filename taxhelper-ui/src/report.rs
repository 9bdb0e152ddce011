//! The report surface: renders a computed result as summary and breakdown
//! tables plus a proportional bar chart.

use rust_decimal::{Decimal, RoundingStrategy};
use tabled::{Table, Tabled, settings::Style};

use taxhelper_core::{SlabSchedule, TaxResult};

use crate::capabilities::DisplayScale;
use crate::form::Taxpayer;
use crate::format::format_inr;

#[derive(Tabled)]
struct SummaryRow {
    #[tabled(rename = "Line")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
}

#[derive(Tabled)]
struct DeductionRow {
    #[tabled(rename = "Deduction")]
    label: &'static str,
    #[tabled(rename = "Amount")]
    amount: String,
    #[tabled(rename = "Share")]
    share: String,
}

/// Percentage of `part` in `whole` with one decimal, or "—" for an empty
/// whole.
fn share(part: Decimal, whole: Decimal) -> String {
    if whole.is_zero() {
        return "—".to_string();
    }
    let pct = (part / whole * Decimal::from(100))
        .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero);
    format!("{pct}%")
}

fn bar(value: Decimal, max: Decimal, width: usize) -> String {
    if max <= Decimal::ZERO || value <= Decimal::ZERO {
        return String::new();
    }
    let filled = (value / max * Decimal::from(width as u64))
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    let filled = usize::try_from(filled.mantissa()).unwrap_or(width).min(width);
    "█".repeat(filled)
}

/// Renders the full report as one printable block.
pub fn render_report(
    taxpayer: &Taxpayer,
    result: &TaxResult,
    schedule: &SlabSchedule,
    scale: DisplayScale,
) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "Tax report for {} ({})\n\n",
        taxpayer.name,
        schedule.name()
    ));

    let summary = vec![
        SummaryRow {
            label: "Total Income",
            amount: format_inr(result.total_income),
        },
        SummaryRow {
            label: "Total Deductions",
            amount: format_inr(result.total_deductions),
        },
        SummaryRow {
            label: "Taxable Income",
            amount: format_inr(result.taxable_income),
        },
        SummaryRow {
            label: "Tax Payable",
            amount: format_inr(result.tax),
        },
    ];
    out.push_str(&Table::new(summary).with(Style::rounded()).to_string());
    out.push('\n');

    if !result.deduction_breakdown.is_empty() {
        let rows: Vec<DeductionRow> = result
            .deduction_breakdown
            .iter()
            .map(|line| DeductionRow {
                label: line.label(),
                amount: format_inr(line.amount),
                share: share(line.amount, result.total_deductions),
            })
            .collect();
        out.push('\n');
        out.push_str(&Table::new(rows).with(Style::rounded()).to_string());
        out.push('\n');
    }

    out.push('\n');
    let width = scale.bar_width();
    let max = result.total_income;
    for (label, value) in [
        ("Total Income  ", result.total_income),
        ("Taxable Income", result.taxable_income),
        ("Tax Payable   ", result.tax),
    ] {
        out.push_str(&format!("{label} {}\n", bar(value, max, width)));
    }

    out
}
