//! Core projection engine for compound-interest growth projections

use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use super::result::ProjectionResult;

/// Compounding periods per year. Growth is always modeled monthly.
pub const PERIODS_PER_YEAR: f64 = 12.0;

/// Validated inputs for a single projection
///
/// Amounts are in the base currency (IDR). Construct through
/// [`crate::input::parse_input`] or make sure the domain holds yourself:
/// non-negative amounts and rate, positive years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionInput {
    /// Initial lump sum
    pub principal: f64,

    /// Contribution added at the end of every month
    pub monthly_contribution: f64,

    /// Nominal annual rate in percent (12.0 means 12%)
    pub annual_rate_percent: f64,

    /// Horizon in years, fractional years allowed
    pub years: f64,
}

impl ProjectionInput {
    pub fn new(principal: f64, monthly_contribution: f64, annual_rate_percent: f64, years: f64) -> Self {
        Self {
            principal,
            monthly_contribution,
            annual_rate_percent,
            years,
        }
    }

    /// Number of monthly compounding periods (may be fractional)
    pub fn periods(&self) -> f64 {
        self.years * PERIODS_PER_YEAR
    }

    /// Per-period rate as a decimal
    pub fn monthly_rate(&self) -> f64 {
        (self.annual_rate_percent / 100.0) / PERIODS_PER_YEAR
    }

    /// Same input at a different annual rate
    pub fn with_rate(&self, annual_rate_percent: f64) -> Self {
        Self {
            annual_rate_percent,
            ..*self
        }
    }
}

/// Main projection engine
///
/// Stateless: every call is a pure function of its input.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProjectionEngine;

impl ProjectionEngine {
    pub fn new() -> Self {
        Self
    }

    /// Project the future value of the principal and the contribution stream
    pub fn project(&self, input: &ProjectionInput) -> ProjectionResult {
        debug_assert!(input.principal >= 0.0, "principal must be non-negative");
        debug_assert!(input.monthly_contribution >= 0.0, "contribution must be non-negative");
        debug_assert!(input.annual_rate_percent >= 0.0, "rate must be non-negative");
        debug_assert!(input.years > 0.0, "years must be positive");

        let periods = input.periods();
        let monthly_rate = input.monthly_rate();

        let principal_future_value = input.principal * (1.0 + monthly_rate).powf(periods);

        // Ordinary annuity: contributions land at the end of each month.
        // At a zero rate the annuity factor is 0/0, so it degenerates to a plain sum.
        let contribution_future_value = if monthly_rate == 0.0 {
            input.monthly_contribution * periods
        } else {
            input.monthly_contribution * (((1.0 + monthly_rate).powf(periods) - 1.0) / monthly_rate)
        };

        let result = ProjectionResult::new(
            principal_future_value,
            contribution_future_value,
            input.annual_rate_percent,
            input.years,
        );

        log::debug!(
            "projected {:?} -> total {:.2} (principal {:.2}, contributions {:.2})",
            input,
            result.total_value,
            result.principal_future_value,
            result.contribution_future_value,
        );

        result
    }

    /// Project the same input at several annual rates
    ///
    /// Results come back in the order of `rates`.
    pub fn project_sweep(&self, input: &ProjectionInput, rates: &[f64]) -> Vec<ProjectionResult> {
        rates
            .par_iter()
            .map(|&rate| self.project(&input.with_rate(rate)))
            .collect()
    }
}

/// Project with a default engine
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    ProjectionEngine::new().project(input)
}
