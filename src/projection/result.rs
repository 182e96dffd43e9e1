//! Projection output structures

use serde::{Deserialize, Serialize};

/// Complete projection result
///
/// All amounts are in the base currency. `total_value` is always the exact
/// sum of the two component future values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    /// Future value of the whole savings plan
    pub total_value: f64,

    /// Future value of the initial lump sum
    pub principal_future_value: f64,

    /// Future value of the monthly contribution stream
    pub contribution_future_value: f64,

    /// Annual rate in percent, echoed from the input
    pub annual_rate_percent: f64,

    /// Horizon in years, echoed from the input
    pub years: f64,
}

impl ProjectionResult {
    pub fn new(
        principal_future_value: f64,
        contribution_future_value: f64,
        annual_rate_percent: f64,
        years: f64,
    ) -> Self {
        Self {
            total_value: principal_future_value + contribution_future_value,
            principal_future_value,
            contribution_future_value,
            annual_rate_percent,
            years,
        }
    }
}
