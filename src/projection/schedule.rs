//! Month-by-month balance schedule for a projection

use serde::{Deserialize, Serialize};
use std::io::Write;
use super::engine::{ProjectionInput, PERIODS_PER_YEAR};
use crate::error::ScheduleError;

/// Fractional remainders below this are treated as a whole-month horizon
const PARTIAL_MONTH_EPSILON: f64 = 1e-9;

/// Longest schedule that will be built, in months (1000 years)
pub const MAX_SCHEDULE_MONTHS: u32 = 12_000;

/// A single row of the schedule for one month
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScheduleRow {
    /// Projection month (1-indexed)
    #[serde(rename = "Month")]
    pub month: u32,

    /// Year of the plan (1-indexed)
    #[serde(rename = "Year")]
    pub year: u32,

    /// Month within the plan year (1-12)
    #[serde(rename = "MonthInYear")]
    pub month_in_year: u32,

    #[serde(rename = "OpeningBalance")]
    pub opening_balance: f64,

    /// Interest credited on the opening balance
    #[serde(rename = "Interest")]
    pub interest: f64,

    /// Contribution added at month end
    #[serde(rename = "Contribution")]
    pub contribution: f64,

    #[serde(rename = "ClosingBalance")]
    pub closing_balance: f64,
}

/// Running state while stepping through the months
#[derive(Debug, Clone)]
struct ScheduleState {
    month: u32,
    year: u32,
    month_in_year: u32,
    balance: f64,
}

impl ScheduleState {
    fn from_input(input: &ProjectionInput) -> Self {
        Self {
            month: 0,
            year: 1,
            month_in_year: 0,
            balance: input.principal,
        }
    }

    fn advance_month(&mut self) {
        self.month += 1;
        self.year = (self.month - 1) / PERIODS_PER_YEAR as u32 + 1;
        self.month_in_year = (self.month - 1) % PERIODS_PER_YEAR as u32 + 1;
    }

    /// Accrue `fraction` of a month of interest, then add the scaled contribution
    fn step(&mut self, monthly_rate: f64, contribution: f64, fraction: f64) -> ScheduleRow {
        self.advance_month();

        let opening_balance = self.balance;
        let grown = opening_balance * (1.0 + monthly_rate).powf(fraction);
        let interest = grown - opening_balance;
        let contribution = contribution * fraction;
        self.balance = grown + contribution;

        ScheduleRow {
            month: self.month,
            year: self.year,
            month_in_year: self.month_in_year,
            opening_balance,
            interest,
            contribution,
            closing_balance: self.balance,
        }
    }
}

/// Build the monthly schedule for an input
///
/// A fractional horizon ends with one partial month whose growth and
/// contribution are both pro-rated. Horizons longer than
/// [`MAX_SCHEDULE_MONTHS`] are refused before anything is allocated.
pub fn schedule(input: &ProjectionInput) -> Result<Vec<ScheduleRow>, ScheduleError> {
    let periods = input.periods();
    let monthly_rate = input.monthly_rate();
    let whole_months = periods.floor();
    let remainder = periods - whole_months;
    let has_partial = remainder > PARTIAL_MONTH_EPSILON;

    let row_count = whole_months + if has_partial { 1.0 } else { 0.0 };
    if row_count > MAX_SCHEDULE_MONTHS as f64 {
        return Err(ScheduleError::HorizonTooLong {
            years: input.years,
            max_months: MAX_SCHEDULE_MONTHS,
        });
    }

    let whole_months = whole_months as u32;
    let mut state = ScheduleState::from_input(input);
    let mut rows = Vec::with_capacity(row_count as usize);

    for _ in 0..whole_months {
        rows.push(state.step(monthly_rate, input.monthly_contribution, 1.0));
    }

    if has_partial {
        rows.push(state.step(monthly_rate, input.monthly_contribution, remainder));
    }

    Ok(rows)
}

/// Write schedule rows as CSV with a header line
pub fn write_schedule_csv<W: Write>(rows: &[ScheduleRow], writer: W) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    for row in rows {
        csv_writer.serialize(row)?;
    }
    csv_writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::{parse_input, ParseMode, RawInput};
    use crate::projection::project;
    use approx::assert_relative_eq;

    #[test]
    fn test_schedule_matches_closed_form() {
        let input = ProjectionInput::new(1_000_000.0, 100_000.0, 12.0, 1.0);
        let rows = schedule(&input).unwrap();

        assert_eq!(rows.len(), 12);
        let last = rows.last().unwrap();
        assert_relative_eq!(last.closing_balance, project(&input).total_value, max_relative = 1e-10);
    }

    #[test]
    fn test_schedule_zero_rate() {
        let input = ProjectionInput::new(0.0, 100_000.0, 0.0, 1.0);
        let rows = schedule(&input).unwrap();

        assert!(rows.iter().all(|r| r.interest == 0.0));
        assert_eq!(rows.last().unwrap().closing_balance, 1_200_000.0);
    }

    #[test]
    fn test_schedule_timing() {
        let rows = schedule(&ProjectionInput::new(100.0, 10.0, 5.0, 2.0)).unwrap();

        assert_eq!(rows.len(), 24);
        assert_eq!((rows[0].year, rows[0].month_in_year), (1, 1));
        assert_eq!((rows[11].year, rows[11].month_in_year), (1, 12));
        assert_eq!((rows[12].year, rows[12].month_in_year), (2, 1));

        // Each month opens where the previous one closed
        for pair in rows.windows(2) {
            assert_eq!(pair[1].opening_balance, pair[0].closing_balance);
        }
    }

    #[test]
    fn test_schedule_partial_month() {
        // 0.5 years plus a bit -> 6 whole months and one partial
        let input = ProjectionInput::new(1000.0, 0.0, 12.0, 6.5 / 12.0);
        let rows = schedule(&input).unwrap();

        assert_eq!(rows.len(), 7);
        assert_relative_eq!(rows[6].closing_balance, project(&input).total_value, max_relative = 1e-10);
    }

    #[test]
    fn test_schedule_at_month_limit() {
        let years = MAX_SCHEDULE_MONTHS as f64 / 12.0;
        let rows = schedule(&ProjectionInput::new(1.0, 0.0, 0.0, years)).unwrap();
        assert_eq!(rows.len(), MAX_SCHEDULE_MONTHS as usize);
    }

    #[test]
    fn test_schedule_rejects_oversized_horizon() {
        // Accepted by the input boundary, far too long to tabulate
        let validated = parse_input(&RawInput::new("1", "0", "0", "1e300", ""), ParseMode::Strict).unwrap();
        assert_eq!(
            schedule(&validated.projection),
            Err(ScheduleError::HorizonTooLong {
                years: 1e300,
                max_months: MAX_SCHEDULE_MONTHS
            })
        );

        // One partial month past the limit
        let just_over = MAX_SCHEDULE_MONTHS as f64 / 12.0 + 0.5 / 12.0;
        assert!(schedule(&ProjectionInput::new(1.0, 0.0, 0.0, just_over)).is_err());
        assert!(schedule(&ProjectionInput::new(1.0, 0.0, 0.0, 1e9)).is_err());
    }

    #[test]
    fn test_write_schedule_csv() {
        let rows = schedule(&ProjectionInput::new(100.0, 0.0, 0.0, 0.25)).unwrap();
        let mut buffer = Vec::new();
        write_schedule_csv(&rows, &mut buffer).unwrap();

        let text = String::from_utf8(buffer).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Month,Year,MonthInYear,OpeningBalance,Interest,Contribution,ClosingBalance")
        );
        assert_eq!(lines.count(), 3);
    }
}
