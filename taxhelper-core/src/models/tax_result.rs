use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Deduction categories in their fixed report order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum DeductionCategory {
    Section80c,
    Hra,
    HomeLoan,
    Standard,
}

impl DeductionCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Section80c => "80C",
            Self::Hra => "HRA",
            Self::HomeLoan => "Home Loan",
            Self::Standard => "Standard",
        }
    }
}

/// One line of the categorized deduction breakdown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeductionLine {
    pub category: DeductionCategory,
    pub amount: Decimal,
}

impl DeductionLine {
    pub fn label(&self) -> &'static str {
        self.category.as_str()
    }
}

/// Output of one tax computation. Derived from an [`crate::IncomeProfile`]
/// and never mutated after creation.
///
/// `slab_tax` is the pre-cess slab amount and `tax` the final payable amount
/// including the 4% health and education cess; both are carried so callers
/// can show either. Values are exact decimals; rounding for display is the
/// presentation surface's job.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxResult {
    pub total_income: Decimal,
    pub total_deductions: Decimal,
    pub taxable_income: Decimal,
    pub slab_tax: Decimal,
    pub tax: Decimal,

    /// Non-zero deduction lines in fixed category order:
    /// 80C, HRA, Home Loan, Standard.
    pub deduction_breakdown: Vec<DeductionLine>,
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn category_labels_match_report_names() {
        assert_eq!(DeductionCategory::Section80c.as_str(), "80C");
        assert_eq!(DeductionCategory::Hra.as_str(), "HRA");
        assert_eq!(DeductionCategory::HomeLoan.as_str(), "Home Loan");
        assert_eq!(DeductionCategory::Standard.as_str(), "Standard");
    }
}
