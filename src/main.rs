use clap::{Parser, Subcommand, ValueEnum};
use emi::form::{self, FormOutcome};
use emi::input::read_loan_terms;
use emi::report::{write_schedule, write_summary};
use emi::InputBounds;
use log::LevelFilter;
use simple_logger::SimpleLogger;
use std::io::{self, Write};
use std::process;

/// Loan EMI calculator
#[derive(Parser)]
#[command(name = "emi", version, about = "Equated monthly installment and repayment schedule")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Log level
    #[arg(long, value_enum, default_value_t = LogLevel::Warn, global = true)]
    log_level: LogLevel,
}

#[derive(Clone, Copy, PartialEq, Debug, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Off => LevelFilter::Off,
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Prompt for the loan details and print the full schedule
    Interactive,
    /// Compute payment and totals from the given values in one shot
    Quick {
        /// Loan amount
        #[arg(long, allow_hyphen_values = true)]
        amount: String,
        /// Annual interest rate in percent
        #[arg(long, allow_hyphen_values = true)]
        rate: String,
        /// Loan term in years
        #[arg(long, allow_hyphen_values = true)]
        years: String,
    },
}

fn main() {
    let cli = Cli::parse();

    if let Err(e) = SimpleLogger::new().with_level(cli.log_level.into()).init() {
        eprintln!("could not initialise logging: {}", e);
    }

    let code = match cli.command.unwrap_or(Commands::Interactive) {
        Commands::Interactive => match run_interactive() {
            Ok(()) => 0,
            Err(e) => {
                eprintln!("Error: {}", e);
                1
            }
        },
        Commands::Quick {
            amount,
            rate,
            years,
        } => run_quick(&amount, &rate, &years),
    };
    process::exit(code);
}

fn run_interactive() -> Result<(), Box<dyn std::error::Error>> {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "Welcome to the Loan Calculator!")?;
    writeln!(out, "-------------------------------")?;

    let bounds = InputBounds::default();
    let (terms, years) = read_loan_terms(&mut input, &mut out, &bounds)?;
    write_summary(&mut out, &terms, years)?;

    match terms.amortize() {
        Ok(amortization) => {
            writeln!(
                out,
                "\nYour Equated Monthly Installment (EMI): {:.2}",
                amortization.emi
            )?;
            write_schedule(&mut out, &amortization.schedule)?;
        }
        Err(_) => {
            writeln!(out, "\nCould not calculate EMI. Please check your input values.")?;
        }
    }

    writeln!(out, "\nThank you for using the Loan Calculator!")?;
    Ok(())
}

fn run_quick(amount: &str, rate: &str, years: &str) -> i32 {
    let outcome = form::evaluate(amount, rate, years);
    let written = report_outcome(&outcome, &mut io::stdout().lock(), &mut io::stderr().lock());
    match written {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Results go to `out` with exit code 0, rejections to `err` with exit code 1.
fn report_outcome<O: Write, E: Write>(
    outcome: &FormOutcome,
    out: &mut O,
    err: &mut E,
) -> io::Result<i32> {
    match outcome {
        FormOutcome::Computed(_) => {
            writeln!(out, "{}", outcome)?;
            Ok(0)
        }
        FormOutcome::Rejected(_) => {
            writeln!(err, "{}", outcome)?;
            Ok(1)
        }
    }
}

// verifies that types can implement the gated traits below
#[cfg(test)]
fn is_normal<T: Sized + Send + Sync + Unpin>() {}

#[test]
fn normal_types() {
    is_normal::<emi::PaymentRecord>();
    is_normal::<emi::ScheduleResult>();
    is_normal::<emi::LoanError>();
    is_normal::<FormOutcome>();
}
