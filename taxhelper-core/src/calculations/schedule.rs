//! Progressive slab schedules for old-regime Indian income tax.
//!
//! Two built-in schedules are carried side by side. They disagree above
//! ₹5,00,000, and the divergence is deliberate product surface rather than a
//! defect to unify:
//!
//! | Band (₹)            | Policy A | Policy B |
//! |---------------------|----------|----------|
//! | 0 – 2,50,000        | nil      | nil      |
//! | 2,50,001 – 5,00,000 | 5%       | 5%       |
//! | 5,00,001 – 7,50,000 | 10%      | 20%      |
//! | 7,50,001 – 10,00,000| 15%      | 20%      |
//! | 10,00,001 – 12,50,000| 20%     | 30%      |
//! | 12,50,001 – 15,00,000| 25%     | 30%      |
//! | above 15,00,000     | 30%      | 30%      |
//!
//! Each band taxes only the portion of taxable income falling inside it;
//! the cumulative tax on lower bands is carried in [`TaxSlab::base_tax`].
//! Both schedules apply a flat 4% health and education cess on top of the
//! slab tax.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use taxhelper_core::calculations::SlabSchedule;
//!
//! let schedule = SlabSchedule::policy_a();
//!
//! assert_eq!(schedule.slab_tax(dec!(1000000)), dec!(75000));
//! assert_eq!(schedule.tax_payable(dec!(1000000)), dec!(78000.00));
//! ```

use rust_decimal::Decimal;
use thiserror::Error;

use crate::TaxSlab;

/// Errors that can occur when building a custom slab schedule.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// The slab table contains no bands.
    #[error("slab table is empty")]
    Empty,

    /// The first band does not start at zero.
    #[error("first slab must start at zero, got {0}")]
    NonZeroFirstFloor(Decimal),

    /// A band's ceiling does not meet the next band's floor.
    #[error("slab table has a gap or overlap at {0}")]
    Discontinuous(Decimal),

    /// The final band has a ceiling, leaving high incomes uncovered.
    #[error("final slab must be open-ended")]
    CappedFinalSlab,
}

/// An ordered, contiguous progressive slab table plus the cess applied on
/// top of it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SlabSchedule {
    name: String,
    slabs: Vec<TaxSlab>,
}

/// Health and education cess applied to the slab tax by every schedule.
pub fn cess_rate() -> Decimal {
    Decimal::new(4, 2)
}

impl SlabSchedule {
    /// Builds a schedule from a custom slab table.
    ///
    /// The table must be non-empty, start at zero, be contiguous (each
    /// band's ceiling is the next band's floor), and end with an open-ended
    /// band so every non-negative income is covered.
    ///
    /// # Errors
    ///
    /// Returns [`ScheduleError`] when any of those conditions fails.
    pub fn new(name: impl Into<String>, slabs: Vec<TaxSlab>) -> Result<Self, ScheduleError> {
        let Some(first) = slabs.first() else {
            return Err(ScheduleError::Empty);
        };
        if !first.floor.is_zero() {
            return Err(ScheduleError::NonZeroFirstFloor(first.floor));
        }
        for pair in slabs.windows(2) {
            match pair[0].ceiling {
                Some(ceiling) if ceiling == pair[1].floor => {}
                Some(ceiling) => return Err(ScheduleError::Discontinuous(ceiling)),
                None => return Err(ScheduleError::Discontinuous(pair[1].floor)),
            }
        }
        // windows(2) checked every band but the last
        if slabs[slabs.len() - 1].ceiling.is_some() {
            return Err(ScheduleError::CappedFinalSlab);
        }
        Ok(Self {
            name: name.into(),
            slabs,
        })
    }

    /// The six-band schedule used by the submission flow. Default.
    pub fn policy_a() -> Self {
        Self {
            name: "Policy A".to_string(),
            slabs: vec![
                band(0, Some(250_000), 0, 0),
                band(250_000, Some(500_000), 5, 0),
                band(500_000, Some(750_000), 10, 12_500),
                band(750_000, Some(1_000_000), 15, 37_500),
                band(1_000_000, Some(1_250_000), 20, 75_000),
                band(1_250_000, Some(1_500_000), 25, 125_000),
                band(1_500_000, None, 30, 187_500),
            ],
        }
    }

    /// The three-band schedule carried by the report surface.
    pub fn policy_b() -> Self {
        Self {
            name: "Policy B".to_string(),
            slabs: vec![
                band(0, Some(250_000), 0, 0),
                band(250_000, Some(500_000), 5, 0),
                band(500_000, Some(1_000_000), 20, 12_500),
                band(1_000_000, None, 30, 112_500),
            ],
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn slabs(&self) -> &[TaxSlab] {
        &self.slabs
    }

    /// Marginal slab tax on `taxable_income`, before cess.
    ///
    /// Total for every input: non-positive amounts owe nothing, and the
    /// schedule invariants guarantee a covering band for everything else.
    pub fn slab_tax(&self, taxable_income: Decimal) -> Decimal {
        if taxable_income <= Decimal::ZERO {
            return Decimal::ZERO;
        }
        match self.slabs.iter().find(|s| s.covers(taxable_income)) {
            Some(slab) => slab.base_tax + (taxable_income - slab.floor) * slab.rate,
            // unreachable: new() and the built-in tables cover (0, ∞)
            None => Decimal::ZERO,
        }
    }

    /// Final tax payable: slab tax plus the flat 4% cess, unrounded.
    pub fn tax_payable(&self, taxable_income: Decimal) -> Decimal {
        self.slab_tax(taxable_income) * (Decimal::ONE + cess_rate())
    }
}

fn band(floor: i64, ceiling: Option<i64>, rate_pct: i64, base_tax: i64) -> TaxSlab {
    TaxSlab {
        floor: Decimal::from(floor),
        ceiling: ceiling.map(Decimal::from),
        rate: Decimal::new(rate_pct, 2),
        base_tax: Decimal::from(base_tax),
    }
}
