use crate::{
    config::{Config, GatewayKind},
    flows::{self, GeocodeFileSettings},
    gateways,
};
use anyhow::{bail, Result};
use clap::{Parser, ValueEnum};
use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
    time::Duration,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Gateway {
    Nominatim,
    Opencage,
}

impl From<Gateway> for GatewayKind {
    fn from(from: Gateway) -> Self {
        match from {
            Gateway::Nominatim => Self::Nominatim,
            Gateway::Opencage => Self::Opencage,
        }
    }
}

fn parse_duration(s: &str) -> Result<Duration, String> {
    duration_str::parse(s).map_err(|err| err.to_string())
}

/// Resolve the geographic coordinates of address records in a JSON file.
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON file with an array of address records (prompted if omitted)
    input: Option<PathBuf>,

    /// JSON file for the enriched records (prompted if omitted)
    output: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Geocoding provider
    #[arg(long, value_enum)]
    gateway: Option<Gateway>,

    /// Pause after each lookup, e.g. "1s" or "500ms"
    #[arg(long, value_name = "DURATION", value_parser = parse_duration)]
    delay: Option<Duration>,
}

fn prompt_file_name<R, W>(input: &mut R, output: &mut W, question: &str) -> Result<PathBuf>
where
    R: BufRead,
    W: Write,
{
    write!(output, "{question}")?;
    output.flush()?;
    let mut answer = String::new();
    input.read_line(&mut answer)?;
    let answer = answer.trim();
    if answer.is_empty() {
        bail!("No file name given");
    }
    Ok(PathBuf::from(answer))
}

fn file_name_or_prompt(file_name: Option<PathBuf>, question: &str) -> Result<PathBuf> {
    match file_name {
        Some(file_name) => Ok(file_name),
        None => prompt_file_name(&mut io::stdin().lock(), &mut io::stdout(), question),
    }
}

pub fn run() -> Result<()> {
    let Args {
        input,
        output,
        config,
        gateway,
        delay,
    } = Args::parse();

    let input = file_name_or_prompt(input, "Enter the name of the input JSON file: ")?;
    let output = file_name_or_prompt(output, "Enter the name of the output JSON file: ")?;

    let mut cfg = Config::try_load_from_file_or_default(config, gateway.map(Into::into))?;
    if let Some(delay) = delay {
        cfg.geocoding.delay = delay;
    }

    let gateway = gateways::geocoding_gateway(&cfg.geocoding)?;
    let settings = GeocodeFileSettings {
        address_field: &cfg.records.address_field,
        delay: cfg.geocoding.delay,
    };
    let report = flows::geocode_records_file(&gateway, &input, &output, &settings)?;
    log::info!(
        "Looked up {} records ({} resolved, {} unresolved), skipped {} records with known position",
        report.looked_up(),
        report.resolved,
        report.unresolved,
        report.skipped
    );
    log::info!("Geocoding done! Output file: {}", output.display());
    Ok(())
}
