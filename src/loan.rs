use crate::error::{LoanError, Result};
use log::{debug, trace, warn};
use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

// balances closer to zero than this are treated as paid off
const BALANCE_EPSILON: f64 = 0.01;

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LoanTerms {
    pub principal: f64,
    pub annual_rate_percent: f64, // annual interest rate as percent (i.e., 7.5, 10.0)
    pub term_months: u32,
}

impl LoanTerms {
    pub fn new(principal: f64, annual_rate_percent: f64, term_months: u32) -> Self {
        Self {
            principal,
            annual_rate_percent,
            term_months,
        }
    }

    pub fn monthly_rate(&self) -> f64 {
        monthly_rate(self.annual_rate_percent)
    }

    /// Computes the EMI and feeds it straight into the schedule generator.
    pub fn amortize(&self) -> Result<Amortization> {
        let emi = compute_emi(self.principal, self.annual_rate_percent, self.term_months)?;
        let schedule = generate_schedule(
            self.principal,
            self.annual_rate_percent,
            self.term_months,
            emi,
        );
        Ok(Amortization { emi, schedule })
    }
}

impl fmt::Display for LoanTerms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "principal {:.2}, rate {:.2}%, term {} months",
            self.principal, self.annual_rate_percent, self.term_months
        )
    }
}

#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct PaymentRecord {
    pub period: u32,
    pub opening_balance: f64,
    pub interest_portion: f64,
    pub principal_portion: f64,
    pub closing_balance: f64,
}

impl PaymentRecord {
    pub fn new(
        period: u32,
        opening_balance: f64,
        interest_portion: f64,
        principal_portion: f64,
        closing_balance: f64,
    ) -> Self {
        Self {
            period,
            opening_balance,
            interest_portion,
            principal_portion,
            closing_balance,
        }
    }

    /// Total paid in this period.
    pub fn payment(&self) -> f64 {
        self.interest_portion + self.principal_portion
    }
}

impl fmt::Display for PaymentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:<7} | {:<18.2} | {:<15.2} | {:<16.2} | {:<18.2}",
            self.period,
            self.opening_balance,
            self.interest_portion,
            self.principal_portion,
            self.closing_balance
        )
    }
}

#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ScheduleResult {
    pub records: Vec<PaymentRecord>,
    pub total_interest: f64,
    pub total_paid: f64,
}

impl ScheduleResult {
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by its 1-based period number.
    pub fn record(&self, period: u32) -> Option<&PaymentRecord> {
        let idx = (period as usize).checked_sub(1)?;
        self.records.get(idx)
    }

    pub fn last(&self) -> Option<&PaymentRecord> {
        self.records.last()
    }
}

/// EMI together with the schedule it produced.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Amortization {
    pub emi: f64,
    pub schedule: ScheduleResult,
}

fn monthly_rate(annual_rate_percent: f64) -> f64 {
    (annual_rate_percent / 100.) / 12.
}

/// Equated monthly installment: `P * r * (1 + r)^n / ((1 + r)^n - 1)` with
/// `r` the monthly rate. A zero rate falls back to `P / n`.
///
/// The result is left unrounded; rounding is up to whoever displays it.
pub fn compute_emi(principal: f64, annual_rate_percent: f64, term_months: u32) -> Result<f64> {
    if term_months == 0 {
        return Err(LoanError::InvalidTerm { term_months });
    }

    let emi = if annual_rate_percent == 0. {
        principal / term_months as f64
    } else {
        let rate = monthly_rate(annual_rate_percent);
        let factor = (1. + rate).powf(term_months as f64);
        principal * rate * factor / (factor - 1.)
    };

    if !emi.is_finite() {
        warn!(
            "non-finite EMI for principal {}, rate {}%, term {}",
            principal, annual_rate_percent, term_months
        );
        return Err(LoanError::NonFinitePayment {
            principal,
            annual_rate_percent,
            term_months,
        });
    }
    debug!(
        "EMI {} for principal {}, rate {}%, term {} months",
        emi, principal, annual_rate_percent, term_months
    );
    Ok(emi)
}

/// Builds the period-by-period repayment schedule for a fixed `emi`.
///
/// The final period pays off whatever balance remains so the schedule always
/// closes at exactly zero. Expects `term_months >= 1`, which `compute_emi`
/// already guarantees for any EMI it hands out.
pub fn generate_schedule(
    principal: f64,
    annual_rate_percent: f64,
    term_months: u32,
    emi: f64,
) -> ScheduleResult {
    let rate = monthly_rate(annual_rate_percent);
    let mut records = Vec::with_capacity(term_months as usize);
    let mut remaining_balance = principal;
    let mut total_interest = 0.;

    for period in 1..=term_months {
        let interest = remaining_balance * rate;
        let principal_paid = if period == term_months {
            remaining_balance
        } else {
            emi - interest
        };
        let closing_balance = remaining_balance - principal_paid;
        total_interest += interest;

        trace!(
            "period {}, opening {}, interest {}, principal {}, closing {}",
            period,
            remaining_balance,
            interest,
            principal_paid,
            closing_balance
        );
        records.push(PaymentRecord::new(
            period,
            remaining_balance,
            interest,
            principal_paid,
            closing_balance,
        ));

        remaining_balance = closing_balance;
        if remaining_balance.abs() < BALANCE_EPSILON {
            remaining_balance = 0.;
        }
    }

    ScheduleResult {
        records,
        total_interest,
        total_paid: principal + total_interest,
    }
}
