pub mod config;
pub mod error;
pub mod form;
pub mod input;
pub mod loan;
pub mod report;

pub use config::InputBounds;
pub use error::{InputError, LoanError};
pub use loan::{
    compute_emi, generate_schedule, Amortization, LoanTerms, PaymentRecord, ScheduleResult,
};
