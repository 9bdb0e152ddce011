use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum IncomeSource {
    Salaried,
    SelfEmployed,
    Business,
    Investments,
    Others,
}

impl IncomeSource {
    pub const ALL: [IncomeSource; 5] = [
        Self::Salaried,
        Self::SelfEmployed,
        Self::Business,
        Self::Investments,
        Self::Others,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salaried => "Salaried",
            Self::SelfEmployed => "Self-Employed",
            Self::Business => "Business",
            Self::Investments => "Investments",
            Self::Others => "Others",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Salaried" => Some(Self::Salaried),
            "Self-Employed" => Some(Self::SelfEmployed),
            "Business" => Some(Self::Business),
            "Investments" => Some(Self::Investments),
            "Others" => Some(Self::Others),
            _ => None,
        }
    }

    /// Flat standard deduction available to this income source.
    ///
    /// Only salaried income carries the ₹50,000 standard deduction; every
    /// other source gets zero.
    pub fn standard_deduction(&self) -> Decimal {
        match self {
            Self::Salaried => Decimal::from(50_000),
            _ => Decimal::ZERO,
        }
    }
}

/// City of residence. Carried on the profile for future HRA metro/non-metro
/// treatment; the current calculation does not read it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum City {
    Delhi,
    Mumbai,
    Bangalore,
    Chennai,
    Kolkata,
    Hyderabad,
    Pune,
    Other,
}

impl City {
    pub const ALL: [City; 8] = [
        Self::Delhi,
        Self::Mumbai,
        Self::Bangalore,
        Self::Chennai,
        Self::Kolkata,
        Self::Hyderabad,
        Self::Pune,
        Self::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Delhi => "Delhi",
            Self::Mumbai => "Mumbai",
            Self::Bangalore => "Bangalore",
            Self::Chennai => "Chennai",
            Self::Kolkata => "Kolkata",
            Self::Hyderabad => "Hyderabad",
            Self::Pune => "Pune",
            Self::Other => "Other",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "Delhi" => Some(Self::Delhi),
            "Mumbai" => Some(Self::Mumbai),
            "Bangalore" => Some(Self::Bangalore),
            "Chennai" => Some(Self::Chennai),
            "Kolkata" => Some(Self::Kolkata),
            "Hyderabad" => Some(Self::Hyderabad),
            "Pune" => Some(Self::Pune),
            "Other" => Some(Self::Other),
            _ => None,
        }
    }
}

/// Self-reported income and deduction inputs for one calculation.
///
/// Built by the form surface and treated as immutable once submitted.
/// All monetary fields are non-negative; the form surface is responsible
/// for enforcing that before handing the profile to the calculator.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IncomeProfile {
    pub annual_income: Decimal,
    pub income_source: IncomeSource,

    /// Gates the 80C-style investment fields below. When false, the
    /// investment amounts are ignored by deduction aggregation even if set.
    pub has_tax_saving_investments: bool,
    pub ppf_investment: Decimal,
    pub elss_investment: Decimal,
    pub nps_investment: Decimal,

    pub home_loan_emi: Decimal,
    pub rent_paid: Decimal,
    pub city_of_residence: City,
}

impl Default for IncomeProfile {
    fn default() -> Self {
        Self {
            annual_income: Decimal::ZERO,
            income_source: IncomeSource::Salaried,
            has_tax_saving_investments: false,
            ppf_investment: Decimal::ZERO,
            elss_investment: Decimal::ZERO,
            nps_investment: Decimal::ZERO,
            home_loan_emi: Decimal::ZERO,
            rent_paid: Decimal::ZERO,
            city_of_residence: City::Delhi,
        }
    }
}
