use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;

use fleet_rental_core::{audit_all, logging, parse_input, ValidationLimits};

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    /// One "<customer> <result>" line per customer
    Text,
    /// One JSON report per test case
    Json,
}

#[derive(Parser)]
#[command(name = "fleet-audit")]
#[command(about = "Reconcile fleet rental logs and print what each customer owes", long_about = None)]
struct Cli {
    /// Input file; reads stdin when omitted
    input: Option<PathBuf>,

    /// JSON file overriding the default validation limits
    #[arg(long)]
    limits: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    #[arg(long, default_value = "warn")]
    log_level: String,

    /// Emit logs as JSON lines
    #[arg(long, default_value_t = false)]
    log_json: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init_tracing(&cli.log_level, cli.log_json)?;

    let limits = match &cli.limits {
        Some(path) => ValidationLimits::load(path)?,
        None => ValidationLimits::default(),
    };

    let input = match &cli.input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("reading input {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let cases = parse_input(&input, &limits)?;
    let reports = audit_all(cases, &limits).await?;

    for report in &reports {
        match cli.format {
            OutputFormat::Text => {
                for line in report.render() {
                    println!("{}", line);
                }
            }
            OutputFormat::Json => {
                println!("{}", serde_json::to_string(report).context("serializing report")?);
            }
        }
    }

    Ok(())
}
