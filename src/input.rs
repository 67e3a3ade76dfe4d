use crate::config::InputBounds;
use crate::error::InputError;
use crate::loan::LoanTerms;
use log::debug;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Parses `raw` and checks it lies within `[min, max]`.
pub fn parse_bounded<T>(raw: &str, min: T, max: T) -> Result<T, InputError>
where
    T: FromStr + PartialOrd + Display,
{
    let trimmed = raw.trim();
    let value: T = trimmed.parse().map_err(|_| InputError::NotANumber {
        input: trimmed.to_string(),
    })?;
    // NaN is unordered and would slip past both range checks
    if value.partial_cmp(&value).is_none() {
        return Err(InputError::NotANumber {
            input: trimmed.to_string(),
        });
    }

    if value < min {
        Err(InputError::BelowMinimum {
            value: value.to_string(),
            min: min.to_string(),
        })
    } else if value > max {
        Err(InputError::AboveMaximum {
            value: value.to_string(),
            max: max.to_string(),
        })
    } else {
        Ok(value)
    }
}

/// Prompts until the reader yields a value within `[min, max]`.
///
/// Rejected lines are reported on `output` and the prompt repeats. Running
/// out of input is an error since there is nothing left to retry with.
pub fn prompt_bounded<T, R, W>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    min: T,
    max: T,
) -> Result<T, InputError>
where
    T: FromStr + PartialOrd + Display + Copy,
    R: BufRead,
    W: Write,
{
    let mut line = String::new();
    loop {
        write!(output, "{}", prompt)?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Err(InputError::Io(io::Error::new(
                io::ErrorKind::UnexpectedEof,
                "input closed before a valid value was entered",
            )));
        }

        match parse_bounded(&line, min, max) {
            Ok(value) => return Ok(value),
            Err(e) => {
                debug!("rejected input {:?}: {}", line.trim(), e);
                writeln!(output, "Error: {}", e)?;
            }
        }
    }
}

/// Collects amount, annual rate and term in years. Returns the terms
/// (term converted to months) and the term in years as entered.
pub fn read_loan_terms<R, W>(
    input: &mut R,
    output: &mut W,
    bounds: &InputBounds,
) -> Result<(LoanTerms, u32), InputError>
where
    R: BufRead,
    W: Write,
{
    let principal = prompt_bounded(
        input,
        output,
        &format!(
            "Enter the loan amount (between {} and {}): ",
            bounds.min_amount, bounds.max_amount
        ),
        bounds.min_amount,
        bounds.max_amount,
    )?;

    let annual_rate = prompt_bounded(
        input,
        output,
        &format!(
            "Enter the annual interest rate (in % e.g., 7.5 for 7.5%, between {} and {}): ",
            bounds.min_rate, bounds.max_rate
        ),
        bounds.min_rate,
        bounds.max_rate,
    )?;

    let years: u32 = prompt_bounded(
        input,
        output,
        &format!(
            "Enter the loan term in years (between {} and {}): ",
            bounds.min_term_years(),
            bounds.max_term_years()
        ),
        bounds.min_term_years(),
        bounds.max_term_years(),
    )?;

    Ok((LoanTerms::new(principal, annual_rate, years * 12), years))
}
