mod conversation;
mod income_profile;
mod tax_result;
mod tax_slab;

pub use conversation::{ChatRole, ChatTurn, Conversation};
pub use income_profile::{City, IncomeProfile, IncomeSource};
pub use tax_result::{DeductionCategory, DeductionLine, TaxResult};
pub use tax_slab::TaxSlab;
