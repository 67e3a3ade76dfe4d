//! Single-shot evaluation of three free-text fields, as a web form would
//! submit them. Only positivity is checked here; the console range limits
//! in [`crate::config::InputBounds`] do not apply.

use crate::error::{InputError, LoanError};
use crate::loan::{LoanTerms, ScheduleResult};
use log::{debug, info};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

pub const INVALID_FIELDS_MESSAGE: &str = "Please enter valid positive numbers for all fields.";
pub const NOT_COMPUTABLE_MESSAGE: &str =
    "Could not calculate payment. Please check your inputs (e.g., interest rate might be too high for the term).";

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FormSummary {
    pub terms: LoanTerms,
    pub monthly_payment: f64,
    pub total_interest: f64,
    pub total_amount: f64,
    pub schedule: ScheduleResult,
}

impl fmt::Display for FormSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Monthly Payment: ${:.2}", self.monthly_payment)?;
        writeln!(f, "Total Interest: ${:.2}", self.total_interest)?;
        write!(f, "Total Amount: ${:.2}", self.total_amount)
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FormOutcome {
    Computed(FormSummary),
    Rejected(String),
}

impl fmt::Display for FormOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FormOutcome::Computed(summary) => write!(f, "{}", summary),
            FormOutcome::Rejected(message) => write!(f, "{}", message),
        }
    }
}

fn parse_field<T: std::str::FromStr>(raw: &str) -> Result<T, InputError> {
    let trimmed = raw.trim();
    trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })
}

/// Turns the raw field values into loan terms. Amount and years must be
/// positive; a zero rate is accepted.
pub fn validate_fields(amount: &str, rate: &str, years: &str) -> Result<LoanTerms, InputError> {
    let principal: f64 = parse_field(amount)?;
    if principal.is_nan() || principal <= 0. {
        return Err(InputError::NotPositive { field: "loan amount" });
    }
    let annual_rate: f64 = parse_field(rate)?;
    if annual_rate.is_nan() || annual_rate < 0. {
        return Err(InputError::NotPositive {
            field: "interest rate",
        });
    }
    let years: u32 = parse_field(years)?;
    if years == 0 {
        return Err(InputError::NotPositive { field: "loan term" });
    }
    let term_months = years
        .checked_mul(12)
        .ok_or_else(|| InputError::AboveMaximum {
            value: years.to_string(),
            max: (u32::MAX / 12).to_string(),
        })?;

    Ok(LoanTerms::new(principal, annual_rate, term_months))
}

/// Evaluates one form submission. Every failure becomes a message suitable
/// for showing in place of the results.
pub fn evaluate(amount: &str, rate: &str, years: &str) -> FormOutcome {
    let terms = match validate_fields(amount, rate, years) {
        Ok(terms) => terms,
        Err(e) => {
            debug!("form rejected: {}", e);
            return FormOutcome::Rejected(INVALID_FIELDS_MESSAGE.to_string());
        }
    };

    match terms.amortize() {
        Ok(amortization) => {
            info!("form computed EMI {:.2} for {}", amortization.emi, terms);
            FormOutcome::Computed(FormSummary {
                terms,
                monthly_payment: amortization.emi,
                total_interest: amortization.schedule.total_interest,
                total_amount: amortization.schedule.total_paid,
                schedule: amortization.schedule,
            })
        }
        Err(LoanError::InvalidTerm { .. }) => {
            FormOutcome::Rejected(INVALID_FIELDS_MESSAGE.to_string())
        }
        Err(e @ LoanError::NonFinitePayment { .. }) => {
            debug!("form rejected: {}", e);
            FormOutcome::Rejected(NOT_COMPUTABLE_MESSAGE.to_string())
        }
    }
}
