//! Deduction aggregation and the end-to-end tax computation.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxhelper_core::calculations::{SlabSchedule, TaxCalculator};
//! use taxhelper_core::{IncomeProfile, IncomeSource};
//!
//! let profile = IncomeProfile {
//!     annual_income: dec!(1200000),
//!     income_source: IncomeSource::Salaried,
//!     has_tax_saving_investments: true,
//!     ppf_investment: dec!(150000),
//!     ..IncomeProfile::default()
//! };
//!
//! let schedule = SlabSchedule::policy_a();
//! let result = TaxCalculator::new(&schedule).compute(&profile);
//!
//! assert_eq!(result.total_deductions, dec!(200000));
//! assert_eq!(result.taxable_income, dec!(1000000));
//! assert_eq!(result.tax, dec!(78000.00));
//! ```

use rust_decimal::Decimal;
use tracing::debug;

use crate::calculations::common::max;
use crate::calculations::schedule::SlabSchedule;
use crate::{DeductionCategory, DeductionLine, IncomeProfile, TaxResult};

/// Computes a [`TaxResult`] from an [`IncomeProfile`] against one slab
/// schedule.
///
/// `compute` is a pure function of its input: no I/O, no shared state,
/// deterministic for identical profiles, and total. Invalid numeric input
/// is the form surface's problem, not guarded against here.
#[derive(Debug, Clone)]
pub struct TaxCalculator<'a> {
    schedule: &'a SlabSchedule,
}

impl<'a> TaxCalculator<'a> {
    pub fn new(schedule: &'a SlabSchedule) -> Self {
        Self { schedule }
    }

    /// Runs the full computation: deduction aggregation, taxable income,
    /// slab tax with cess, and the categorized breakdown.
    pub fn compute(&self, profile: &IncomeProfile) -> TaxResult {
        let investment_deduction = self.investment_deduction(profile);
        let total_deductions = self.total_deductions(profile, investment_deduction);
        let taxable_income = self.taxable_income(profile.annual_income, total_deductions);
        let slab_tax = self.schedule.slab_tax(taxable_income);
        let tax = self.schedule.tax_payable(taxable_income);

        debug!(
            schedule = self.schedule.name(),
            %taxable_income,
            %tax,
            "computed tax result"
        );

        TaxResult {
            total_income: profile.annual_income,
            total_deductions,
            taxable_income,
            slab_tax,
            tax,
            deduction_breakdown: self.deduction_breakdown(profile),
        }
    }

    /// Sum of the 80C-style investments, gated on the profile flag.
    ///
    /// Deliberately uncapped: the statutory ₹1.5 lakh 80C ceiling is not
    /// enforced anywhere in this pipeline.
    fn investment_deduction(&self, profile: &IncomeProfile) -> Decimal {
        if profile.has_tax_saving_investments {
            profile.ppf_investment + profile.elss_investment + profile.nps_investment
        } else {
            Decimal::ZERO
        }
    }

    fn total_deductions(&self, profile: &IncomeProfile, investment_deduction: Decimal) -> Decimal {
        investment_deduction
            + profile.home_loan_emi
            + profile.rent_paid
            + profile.income_source.standard_deduction()
    }

    fn taxable_income(&self, annual_income: Decimal, total_deductions: Decimal) -> Decimal {
        max(annual_income - total_deductions, Decimal::ZERO)
    }

    /// Non-zero deduction lines in fixed category order.
    ///
    /// The 80C line sums the investment fields without consulting
    /// `has_tax_saving_investments`; only the deduction total honors the
    /// flag. Do not "fix" the asymmetry here without a product decision.
    fn deduction_breakdown(&self, profile: &IncomeProfile) -> Vec<DeductionLine> {
        let lines = [
            (
                DeductionCategory::Section80c,
                profile.ppf_investment + profile.elss_investment + profile.nps_investment,
            ),
            (DeductionCategory::Hra, profile.rent_paid),
            (DeductionCategory::HomeLoan, profile.home_loan_emi),
            (
                DeductionCategory::Standard,
                profile.income_source.standard_deduction(),
            ),
        ];

        lines
            .into_iter()
            .filter(|(_, amount)| *amount > Decimal::ZERO)
            .map(|(category, amount)| DeductionLine { category, amount })
            .collect()
    }
}
