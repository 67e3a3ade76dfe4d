#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Accepted ranges for console input. The core itself enforces none of these.
#[derive(Clone, Copy, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct InputBounds {
    pub min_amount: f64,
    pub max_amount: f64,
    pub min_rate: f64, // annual, percent
    pub max_rate: f64,
    pub min_term_months: u32,
    pub max_term_months: u32,
}

impl Default for InputBounds {
    fn default() -> Self {
        Self {
            min_amount: 10_000.,
            max_amount: 10_000_000.,
            min_rate: 1.0,
            max_rate: 30.0,
            min_term_months: 12,
            max_term_months: 360,
        }
    }
}

impl InputBounds {
    pub fn min_term_years(&self) -> u32 {
        self.min_term_months / 12
    }

    pub fn max_term_years(&self) -> u32 {
        self.max_term_months / 12
    }
}
