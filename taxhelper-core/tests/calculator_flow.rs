//! End-to-end calculation flow: profile in, result out, under both slab
//! policies.

use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use taxhelper_core::{
    DeductionLine, IncomeProfile, IncomeSource, SlabSchedule, TaxCalculator, TaxResult,
};

fn profile() -> IncomeProfile {
    IncomeProfile {
        annual_income: dec!(1200000),
        income_source: IncomeSource::Salaried,
        has_tax_saving_investments: true,
        ppf_investment: dec!(150000),
        ..IncomeProfile::default()
    }
}

#[test]
fn salaried_twelve_lakh_under_policy_a() {
    let schedule = SlabSchedule::policy_a();

    let result = TaxCalculator::new(&schedule).compute(&profile());

    assert_eq!(result.total_income, dec!(1200000));
    assert_eq!(result.total_deductions, dec!(200000));
    assert_eq!(result.taxable_income, dec!(1000000));
    assert_eq!(result.slab_tax, dec!(75000.00));
    assert_eq!(result.tax, dec!(78000.00));
}

#[test]
fn same_profile_under_policy_b_owes_more() {
    let schedule = SlabSchedule::policy_b();

    let result = TaxCalculator::new(&schedule).compute(&profile());

    // 12500 + 500000 * 0.20 = 112500, plus cess
    assert_eq!(result.slab_tax, dec!(112500.00));
    assert_eq!(result.tax, dec!(117000.0000));
}

#[test]
fn result_serializes_to_json_and_back() {
    let schedule = SlabSchedule::policy_a();
    let result = TaxCalculator::new(&schedule).compute(&profile());

    let json = serde_json::to_string(&result).unwrap();
    let decoded: TaxResult = serde_json::from_str(&json).unwrap();

    assert_eq!(decoded, result);
}

#[test]
fn breakdown_carries_only_positive_lines() {
    let schedule = SlabSchedule::policy_a();
    let result = TaxCalculator::new(&schedule).compute(&profile());

    assert!(
        result
            .deduction_breakdown
            .iter()
            .all(|line| line.amount > dec!(0))
    );
    let labels: Vec<&str> = result
        .deduction_breakdown
        .iter()
        .map(DeductionLine::label)
        .collect();
    assert_eq!(labels, vec!["80C", "Standard"]);
}
