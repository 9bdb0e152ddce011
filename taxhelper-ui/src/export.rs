//! Export collaborator: writes the rendered report as a standalone HTML
//! document.

use std::path::Path;

use chrono::Local;
use tracing::info;

use taxhelper_core::TaxResult;
use taxhelper_core::assistant::suggest_investments;

use crate::form::Taxpayer;
use crate::format::format_inr;

const TEMPLATE: &str = include_str!("report_template.html");

fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

fn table_row(label: &str, amount: &str) -> String {
    format!("  <tr><td>{label}</td><td class=\"amount\">{amount}</td></tr>\n")
}

/// Builds the report document.
pub fn generate_html(taxpayer: &Taxpayer, result: &TaxResult, policy_name: &str) -> String {
    let mut summary_rows = String::new();
    for (label, amount) in [
        ("Total Income", result.total_income),
        ("Total Deductions", result.total_deductions),
        ("Taxable Income", result.taxable_income),
        ("Tax Payable", result.tax),
    ] {
        summary_rows.push_str(&table_row(label, &format_inr(amount)));
    }

    let mut deduction_rows = String::new();
    for line in &result.deduction_breakdown {
        deduction_rows.push_str(&table_row(line.label(), &format_inr(line.amount)));
    }
    if deduction_rows.is_empty() {
        deduction_rows.push_str("  <tr><td colspan=\"2\">No deductions claimed</td></tr>\n");
    }

    TEMPLATE
        .replace("__NAME__", &escape_html(&taxpayer.name))
        .replace(
            "__GENERATED__",
            &Local::now().format("%Y-%m-%d %H:%M").to_string(),
        )
        .replace("__POLICY__", &escape_html(policy_name))
        .replace("__SUMMARY_ROWS__", &summary_rows)
        .replace("__DEDUCTION_ROWS__", &deduction_rows)
        .replace(
            "__SUGGESTION__",
            suggest_investments(result.total_income),
        )
}

/// Writes the report document to `path`.
pub fn write_html(
    path: &Path,
    taxpayer: &Taxpayer,
    result: &TaxResult,
    policy_name: &str,
) -> anyhow::Result<()> {
    let html = generate_html(taxpayer, result, policy_name);
    std::fs::write(path, html)?;
    info!(path = %path.display(), "report exported");
    Ok(())
}
