//! Growth Simulator CLI
//!
//! Command-line interface for savings projections, rate sweeps, and the mock
//! contact form. Configuration comes from the environment (see
//! `growth_simulator::config`); flags given here take precedence.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use growth_simulator::contact::{self, ContactForm};
use growth_simulator::format::{format_rate, format_rupiah};
use growth_simulator::input::{parse_amount, ParseMode};
use growth_simulator::projection::{schedule, write_schedule_csv};
use growth_simulator::{RawInput, Simulator, SimulatorConfig};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "growth-simulator", version, about = "Compound-interest savings projections")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Project one savings plan and optionally convert the total
    Calc(CalcArgs),
    /// Compare the same plan across several annual rates
    Sweep(SweepArgs),
    /// Submit the mock contact form
    Contact(ContactArgs),
}

/// Plan fields are taken as text and validated like form input
#[derive(Args)]
struct PlanArgs {
    /// Initial amount in IDR (default 0)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    principal: String,

    /// Monthly contribution in IDR (default 0)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    contribution: String,

    /// Horizon in years (default 1)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    years: String,

    /// Coerce non-numeric values to defaults instead of rejecting them
    #[arg(long)]
    lenient: bool,
}

#[derive(Args)]
struct CalcArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Expected annual return in percent (default 0)
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    rate: String,

    /// Currency to show the total in (default IDR)
    #[arg(long, default_value = "")]
    currency: String,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the monthly schedule to this CSV file
    #[arg(long)]
    schedule: Option<PathBuf>,

    /// Override the exchange-rate service base URL
    #[arg(long)]
    rate_api: Option<String>,
}

#[derive(Args)]
struct SweepArgs {
    #[command(flatten)]
    plan: PlanArgs,

    /// Comma-separated annual rates in percent
    #[arg(long, value_delimiter = ',', default_value = "0,4,8,12")]
    rates: Vec<String>,
}

#[derive(Args)]
struct ContactArgs {
    #[arg(long, default_value = "")]
    name: String,
    #[arg(long, default_value = "")]
    email: String,
    #[arg(long, default_value = "")]
    message: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let mut config = SimulatorConfig::from_env().context("invalid configuration")?;

    match cli.command {
        Command::Calc(args) => run_calc(args, &mut config).await,
        Command::Sweep(args) => run_sweep(args, &mut config),
        Command::Contact(args) => run_contact(args, &config).await,
    }
}

async fn run_calc(args: CalcArgs, config: &mut SimulatorConfig) -> Result<()> {
    config.lenient_parsing |= args.plan.lenient;
    if let Some(url) = args.rate_api {
        config.rate_api_base_url = url;
    }

    let simulator = Simulator::new(config).context("failed to set up the rate client")?;
    let raw = RawInput::new(
        args.plan.principal,
        args.plan.contribution,
        args.rate,
        args.plan.years,
        args.currency,
    );

    let input = simulator.validate(&raw).context("invalid input")?;
    let report = simulator.run(&input).await;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for line in report.summary_lines() {
            println!("{}", line);
        }
    }

    if let Some(path) = args.schedule {
        let rows = schedule(&input.projection).context("unable to build the schedule")?;
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        write_schedule_csv(&rows, BufWriter::new(file))
            .with_context(|| format!("unable to write {}", path.display()))?;
        eprintln!("Schedule ({} months) written to: {}", rows.len(), path.display());
    }

    Ok(())
}

fn run_sweep(args: SweepArgs, config: &mut SimulatorConfig) -> Result<()> {
    config.lenient_parsing |= args.plan.lenient;
    let mode = ParseMode::from_lenient(config.lenient_parsing);

    let simulator = Simulator::new(config).context("failed to set up the rate client")?;
    let raw = RawInput::new(args.plan.principal, args.plan.contribution, "", args.plan.years, "");
    let input = simulator.validate(&raw).context("invalid input")?;

    let rates = args
        .rates
        .iter()
        .map(|rate| parse_amount("rate", rate, mode))
        .collect::<Result<Vec<f64>, _>>()
        .context("invalid rate")?;

    let results = simulator.sweep(&input.projection, &rates);

    println!("{:>10} {:>22} {:>22} {:>22}", "Rate", "Principal FV", "Contribution FV", "Total");
    println!("{}", "-".repeat(79));
    for result in &results {
        println!(
            "{:>10} {:>22} {:>22} {:>22}",
            format_rate(result.annual_rate_percent),
            format_rupiah(result.principal_future_value),
            format_rupiah(result.contribution_future_value),
            format_rupiah(result.total_value),
        );
    }

    Ok(())
}

async fn run_contact(args: ContactArgs, config: &SimulatorConfig) -> Result<()> {
    let form = ContactForm::new(args.name, args.email, args.message);
    eprintln!("Sending...");

    let receipt = contact::submit(&form, config).await?;

    println!("{}", receipt.message);
    if let Some(link) = &receipt.attachment {
        println!("Attachment: {}", link);
    }
    println!("Received at: {}", receipt.received_at.to_rfc3339());

    Ok(())
}
