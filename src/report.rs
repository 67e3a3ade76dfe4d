use crate::loan::{LoanTerms, ScheduleResult};
use std::io::{self, Write};

const RULE_WIDTH: usize = 90;

pub fn write_summary<W: Write>(out: &mut W, terms: &LoanTerms, years: u32) -> io::Result<()> {
    writeln!(out, "\n--- Loan Summary ---")?;
    writeln!(out, "Loan Amount: {:.2}", terms.principal)?;
    writeln!(out, "Annual Interest Rate: {:.2}%", terms.annual_rate_percent)?;
    writeln!(out, "Loan Term: {} years ({} months)", years, terms.term_months)
}

/// Writes the repayment table followed by the totals.
pub fn write_schedule<W: Write>(out: &mut W, schedule: &ScheduleResult) -> io::Result<()> {
    writeln!(out, "\n--- Loan Repayment Schedule ---")?;
    writeln!(
        out,
        "{:<7} | {:<18} | {:<15} | {:<16} | {:<18}",
        "Month", "Opening Balance", "Interest Paid", "Principal Paid", "Closing Balance"
    )?;
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;
    for record in &schedule.records {
        writeln!(out, "{}", record)?;
    }
    writeln!(out, "{}", "-".repeat(RULE_WIDTH))?;

    writeln!(out, "\nTotal Interest Paid: {:.2}", schedule.total_interest)?;
    writeln!(
        out,
        "Total Amount Paid (Principal + Interest): {:.2}",
        schedule.total_paid
    )
}
