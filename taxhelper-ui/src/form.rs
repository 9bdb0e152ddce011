//! The form surface: collects taxpayer details and an income profile over
//! an interactive prompt stream.
//!
//! Validation lives here, not in the core. Amounts must parse and be
//! non-negative before a profile is handed to the calculator; the core
//! itself computes whatever it is given.

use std::io::{self, BufRead, Write};
use std::sync::OnceLock;

use regex::Regex;
use rust_decimal::Decimal;
use thiserror::Error;
use tracing::debug;

use taxhelper_core::{City, IncomeProfile, IncomeSource};

use crate::capabilities::DictationProvider;

/// Contact details collected alongside the profile. Used only by the
/// report heading and the acknowledgment notifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Taxpayer {
    pub name: String,
    pub email: String,
}

/// Error returned when a string cannot be read as a monetary amount.
#[derive(Debug, Error)]
pub enum ParseAmountError {
    #[error("invalid amount '{input}': {source}")]
    Invalid {
        input: String,
        #[source]
        source: rust_decimal::Error,
    },

    #[error("amount '{input}' must not be negative")]
    Negative { input: String },
}

/// Parses a monetary amount.
///
/// Accepts comma grouping (`"1,50,000"`), trims whitespace, and treats
/// blank input as zero. Negative amounts are rejected here so they never
/// reach the calculator.
pub fn parse_amount(s: &str) -> Result<Decimal, ParseAmountError> {
    let normalized = s.trim().replace(',', "");
    if normalized.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let value: Decimal = normalized.parse().map_err(|e| ParseAmountError::Invalid {
        input: s.to_string(),
        source: e,
    })?;
    if value.is_sign_negative() {
        return Err(ParseAmountError::Negative {
            input: s.to_string(),
        });
    }
    Ok(value)
}

/// Shallow shape check for an email address; real verification is the
/// notifier backend's problem.
pub fn is_valid_email(s: &str) -> bool {
    static EMAIL: OnceLock<Regex> = OnceLock::new();
    EMAIL
        .get_or_init(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("email pattern compiles"))
        .is_match(s)
}

fn prompt_line<R: BufRead, W: Write>(input: &mut R, output: &mut W, label: &str) -> io::Result<String> {
    write!(output, "{label}: ")?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "input stream closed",
        ));
    }
    Ok(line.trim().to_string())
}

fn prompt_amount<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<Decimal> {
    loop {
        let line = prompt_line(input, output, label)?;
        match parse_amount(&line) {
            Ok(amount) => return Ok(amount),
            Err(e) => writeln!(output, "{e}")?,
        }
    }
}

fn prompt_yes_no<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    label: &str,
) -> io::Result<bool> {
    let line = prompt_line(input, output, &format!("{label} [y/N]"))?;
    Ok(matches!(line.as_str(), "y" | "Y" | "yes" | "Yes"))
}

fn prompt_choice<R: BufRead, W: Write, T: Copy>(
    input: &mut R,
    output: &mut W,
    label: &str,
    options: &[T],
    display: fn(&T) -> &'static str,
) -> io::Result<T> {
    for (index, option) in options.iter().enumerate() {
        writeln!(output, "  {}. {}", index + 1, display(option))?;
    }
    loop {
        let line = prompt_line(input, output, label)?;
        if line.is_empty() {
            return Ok(options[0]);
        }
        if let Ok(index) = line.parse::<usize>()
            && (1..=options.len()).contains(&index)
        {
            return Ok(options[index - 1]);
        }
        if let Some(option) = options.iter().find(|&o| display(o) == line) {
            return Ok(*option);
        }
        writeln!(output, "Pick a number between 1 and {}.", options.len())?;
    }
}

/// Collects the taxpayer's name and email.
///
/// The name field tries the dictation capability first and falls back to
/// typed input, so hands-free hosts behave like the rest of the form.
pub fn collect_taxpayer<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    dictation: &mut dyn DictationProvider,
) -> io::Result<Taxpayer> {
    let name = loop {
        if dictation.is_available()
            && let Some(spoken) = dictation.capture()
        {
            let spoken = spoken.trim().to_string();
            if !spoken.is_empty() {
                writeln!(output, "Name (dictated): {spoken}")?;
                break spoken;
            }
        }
        let typed = prompt_line(input, output, "Your name")?;
        if !typed.is_empty() {
            break typed;
        }
        writeln!(output, "A name is required.")?;
    };

    let email = loop {
        let typed = prompt_line(input, output, "Email")?;
        if is_valid_email(&typed) {
            break typed;
        }
        writeln!(output, "That doesn't look like an email address.")?;
    };

    Ok(Taxpayer { name, email })
}

/// Collects a complete income profile, enforcing non-negative amounts.
pub fn collect_profile<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
) -> io::Result<IncomeProfile> {
    let annual_income = prompt_amount(input, output, "Annual income (₹)")?;

    writeln!(output, "Income source:")?;
    let income_source = prompt_choice(
        input,
        output,
        "Source",
        &IncomeSource::ALL,
        IncomeSource::as_str,
    )?;

    let has_tax_saving_investments =
        prompt_yes_no(input, output, "Do you have tax saving investments?")?;

    let (ppf_investment, elss_investment, nps_investment) = if has_tax_saving_investments {
        (
            prompt_amount(input, output, "PPF investment (₹)")?,
            prompt_amount(input, output, "ELSS investment (₹)")?,
            prompt_amount(input, output, "NPS investment (₹)")?,
        )
    } else {
        (Decimal::ZERO, Decimal::ZERO, Decimal::ZERO)
    };

    let home_loan_emi = prompt_amount(input, output, "Home loan EMI (₹)")?;
    let rent_paid = prompt_amount(input, output, "Rent paid (₹)")?;

    writeln!(output, "City of residence:")?;
    let city_of_residence = prompt_choice(input, output, "City", &City::ALL, City::as_str)?;

    let profile = IncomeProfile {
        annual_income,
        income_source,
        has_tax_saving_investments,
        ppf_investment,
        elss_investment,
        nps_investment,
        home_loan_emi,
        rent_paid,
        city_of_residence,
    };
    debug!(?profile, "profile collected");
    Ok(profile)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;
    use std::io::Cursor;

    use super::*;
    use crate::capabilities::NoDictation;

    // =========================================================================
    // parse_amount tests
    // =========================================================================

    #[test]
    fn parse_amount_accepts_comma_grouping() {
        assert_eq!(parse_amount("1,50,000").unwrap(), dec!(150000));
        assert_eq!(parse_amount("1,234,567.89").unwrap(), dec!(1234567.89));
    }

    #[test]
    fn parse_amount_trims_and_defaults_blank_to_zero() {
        assert_eq!(parse_amount("  120000 ").unwrap(), dec!(120000));
        assert_eq!(parse_amount("").unwrap(), dec!(0));
        assert_eq!(parse_amount("   ").unwrap(), dec!(0));
    }

    #[test]
    fn parse_amount_rejects_garbage() {
        assert!(matches!(
            parse_amount("12a45"),
            Err(ParseAmountError::Invalid { .. })
        ));
    }

    #[test]
    fn parse_amount_rejects_negatives() {
        assert!(matches!(
            parse_amount("-500"),
            Err(ParseAmountError::Negative { .. })
        ));
    }

    // =========================================================================
    // email tests
    // =========================================================================

    #[test]
    fn email_shape_check() {
        assert!(is_valid_email("asha@example.com"));
        assert!(!is_valid_email("asha@example"));
        assert!(!is_valid_email("not an email"));
        assert!(!is_valid_email("two@@example.com"));
    }

    // =========================================================================
    // interactive flow tests
    // =========================================================================

    #[test]
    fn collects_taxpayer_with_retries() {
        let mut input = Cursor::new("\nAsha\nnot-an-email\nasha@example.com\n");
        let mut output = Vec::new();
        let mut dictation = NoDictation;

        let taxpayer = collect_taxpayer(&mut input, &mut output, &mut dictation).unwrap();

        assert_eq!(taxpayer.name, "Asha");
        assert_eq!(taxpayer.email, "asha@example.com");
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("A name is required."));
        assert!(transcript.contains("doesn't look like an email"));
    }

    #[test]
    fn collects_full_profile() {
        // income, source, investments y + three amounts, emi, rent, city
        let mut input = Cursor::new("12,00,000\n1\ny\n1,50,000\n\n\n0\n0\n2\n");
        let mut output = Vec::new();

        let profile = collect_profile(&mut input, &mut output).unwrap();

        assert_eq!(profile.annual_income, dec!(1200000));
        assert_eq!(profile.income_source, IncomeSource::Salaried);
        assert!(profile.has_tax_saving_investments);
        assert_eq!(profile.ppf_investment, dec!(150000));
        assert_eq!(profile.elss_investment, dec!(0));
        assert_eq!(profile.nps_investment, dec!(0));
        assert_eq!(profile.city_of_residence, City::Mumbai);
    }

    #[test]
    fn profile_skips_investment_amounts_when_flag_off() {
        let mut input = Cursor::new("500000\nBusiness\nn\n0\n10000\n\n");
        let mut output = Vec::new();

        let profile = collect_profile(&mut input, &mut output).unwrap();

        assert_eq!(profile.income_source, IncomeSource::Business);
        assert!(!profile.has_tax_saving_investments);
        assert_eq!(profile.ppf_investment, dec!(0));
        assert_eq!(profile.rent_paid, dec!(10000));
        assert_eq!(profile.city_of_residence, City::Delhi);
    }

    #[test]
    fn negative_amount_is_reprompted() {
        let mut input = Cursor::new("-100\n250000\n\nn\n\n\n\n");
        let mut output = Vec::new();

        let profile = collect_profile(&mut input, &mut output).unwrap();

        assert_eq!(profile.annual_income, dec!(250000));
        let transcript = String::from_utf8(output).unwrap();
        assert!(transcript.contains("must not be negative"));
    }

    #[test]
    fn eof_surfaces_as_error() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();

        let result = collect_profile(&mut input, &mut output);

        assert!(result.is_err());
    }
}
