//! Simulator: one calculation from user input to a renderable report
//!
//! The projection is always computed first and never depends on the
//! conversion. A failed or skipped conversion only drops the converted line
//! from the summary.
//!
//! # Example
//! ```ignore
//! let simulator = Simulator::new(&SimulatorConfig::from_env()?)?;
//! let raw = RawInput::new("1000000", "100000", "12", "1", "USD");
//! let report = simulator.calculate(&raw).await?;
//! for line in report.summary_lines() {
//!     println!("{}", line);
//! }
//! ```

use serde::{Deserialize, Serialize};
use crate::config::SimulatorConfig;
use crate::conversion::{ConversionError, ConversionOutcome, ConversionRequest, ExchangeRateClient, RateProvider};
use crate::currency::CurrencyCode;
use crate::format::{format_currency, format_rate, format_rupiah, format_years};
use crate::input::{parse_input, ParseMode, RawInput, ValidatedInput, ValidationResult};
use crate::projection::{ProjectionEngine, ProjectionInput, ProjectionResult};

/// Everything the presentation layer needs for one calculation
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SimulationReport {
    pub input: ProjectionInput,
    pub currency: CurrencyCode,
    pub projection: ProjectionResult,
    /// `None` when the requested currency is the base currency and no lookup ran
    pub conversion: Option<ConversionOutcome>,
}

impl SimulationReport {
    /// Converted total, if a conversion ran and succeeded
    pub fn converted_amount(&self) -> Option<f64> {
        self.conversion.and_then(|outcome| outcome.amount())
    }

    /// Human-readable summary, one line per entry
    pub fn summary_lines(&self) -> Vec<String> {
        let unit = if self.projection.years == 1.0 { "year" } else { "years" };
        let mut lines = vec![format!(
            "Projected total after {} {}: {}",
            format_years(self.projection.years),
            unit,
            format_rupiah(self.projection.total_value)
        )];

        if let Some(amount) = self.converted_amount() {
            lines.push(format!("≈ {}", format_currency(amount, self.currency)));
        }

        lines.push(format!("Initial amount: {}", format_rupiah(self.input.principal)));
        lines.push(format!(
            "Monthly contribution: {}",
            format_rupiah(self.input.monthly_contribution)
        ));
        lines.push(format!(
            "Estimated return: {} p.a.",
            format_rate(self.projection.annual_rate_percent)
        ));
        lines
    }
}

/// Runs calculations against a rate provider
#[derive(Debug, Clone)]
pub struct Simulator<P = ExchangeRateClient> {
    engine: ProjectionEngine,
    rates: P,
    mode: ParseMode,
}

impl Simulator<ExchangeRateClient> {
    /// Create a simulator backed by the configured rate service
    pub fn new(config: &SimulatorConfig) -> Result<Self, ConversionError> {
        Ok(Self::with_provider(
            ExchangeRateClient::new(config)?,
            ParseMode::from_lenient(config.lenient_parsing),
        ))
    }
}

impl<P: RateProvider> Simulator<P> {
    /// Create a simulator with a custom rate provider
    pub fn with_provider(rates: P, mode: ParseMode) -> Self {
        Self {
            engine: ProjectionEngine::new(),
            rates,
            mode,
        }
    }

    /// Parse and validate raw input with this simulator's parse mode
    pub fn validate(&self, raw: &RawInput) -> ValidationResult<ValidatedInput> {
        parse_input(raw, self.mode)
    }

    /// Validate, project, and convert. Only validation can fail.
    pub async fn calculate(&self, raw: &RawInput) -> ValidationResult<SimulationReport> {
        let input = self.validate(raw)?;
        Ok(self.run(&input).await)
    }

    /// Project a validated input and convert the total when a foreign currency is requested
    pub async fn run(&self, input: &ValidatedInput) -> SimulationReport {
        let projection = self.engine.project(&input.projection);

        let conversion = if input.currency.is_base() {
            None
        } else {
            let request = ConversionRequest::from_idr(projection.total_value, input.currency);
            Some(self.rates.convert(&request).await)
        };

        SimulationReport {
            input: input.projection,
            currency: input.currency,
            projection,
            conversion,
        }
    }

    /// Project the same input at several annual rates, in the order given
    pub fn sweep(&self, input: &ProjectionInput, rates: &[f64]) -> Vec<ProjectionResult> {
        self.engine.project_sweep(input, rates)
    }

    pub fn parse_mode(&self) -> ParseMode {
        self.mode
    }

    /// Reference to the rate provider
    pub fn rates(&self) -> &P {
        &self.rates
    }
}
