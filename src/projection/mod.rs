//! Projection engine for compound-interest savings projections

mod engine;
mod result;
pub mod schedule;

pub use engine::{project, ProjectionEngine, ProjectionInput, PERIODS_PER_YEAR};
pub use result::ProjectionResult;
pub use schedule::{schedule, write_schedule_csv, ScheduleRow, MAX_SCHEDULE_MONTHS};
