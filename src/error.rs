use thiserror::Error;

/// Failures of the amortization core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum LoanError {
    #[error("invalid loan term: {term_months} months, must be at least 1")]
    InvalidTerm { term_months: u32 },

    #[error(
        "payment is not a finite number for principal {principal}, rate {annual_rate_percent}%, term {term_months} months"
    )]
    NonFinitePayment {
        principal: f64,
        annual_rate_percent: f64,
        term_months: u32,
    },
}

pub type Result<T> = std::result::Result<T, LoanError>;

/// Failures while collecting loan figures from a user.
#[derive(Error, Debug)]
pub enum InputError {
    #[error("Invalid input. Please enter a numeric value.")]
    NotANumber { input: String },

    #[error("Value must be at least {min}.")]
    BelowMinimum { value: String, min: String },

    #[error("Value must be at most {max}.")]
    AboveMaximum { value: String, max: String },

    #[error("{field} must be a positive number.")]
    NotPositive { field: &'static str },

    #[error("input unavailable: {0}")]
    Io(#[from] std::io::Error),
}
