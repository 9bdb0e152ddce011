use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One band of a progressive slab table.
///
/// `base_tax` is the cumulative tax owed on all income below `floor`, so the
/// tax for an amount landing in this band is `base_tax + (amount - floor) *
/// rate`. The open-ended top band has `ceiling = None`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxSlab {
    pub floor: Decimal,
    pub ceiling: Option<Decimal>,
    pub rate: Decimal,
    pub base_tax: Decimal,
}

impl TaxSlab {
    /// Whether `amount` is taxed at this band's marginal rate.
    pub fn covers(&self, amount: Decimal) -> bool {
        amount > self.floor && self.ceiling.is_none_or(|c| amount <= c)
    }
}
