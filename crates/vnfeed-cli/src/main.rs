use std::fs;
use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::{Parser, Subcommand};

use vnfeed_core::{LineSource, ReaderLineSource, Reading};

mod serial;

#[derive(Parser, Debug)]
#[command(name = "vnfeed")]
#[command(version)]
#[command(long_version = concat!(
    env!("CARGO_PKG_VERSION"),
    " (", env!("VNFEED_BUILD_COMMIT"), " ", env!("VNFEED_BUILD_DATE"), ")"
))]
#[command(
    about = "Serial feed toolkit for VectorNav $VNYMR IMU sentences.",
    long_about = None,
    after_help = "Examples:\n  vnfeed parse capture.log -o readings.json\n  vnfeed serial watch --port /dev/ttyUSB0\n  vnfeed serial serve --port /dev/ttyUSB0 --listen 0.0.0.0:8080"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Parse a file of captured sentences into a JSON array of readings.
    #[command(
        after_help = "Examples:\n  vnfeed parse capture.log -o readings.json\n  vnfeed parse capture.log --stdout --pretty"
    )]
    Parse {
        /// Path to a file with one sentence per line
        input: PathBuf,

        /// Output report path (JSON)
        #[arg(short = 'o', long, required_unless_present = "stdout")]
        report: Option<PathBuf>,

        /// Write JSON to stdout
        #[arg(long, conflicts_with = "report")]
        stdout: bool,

        /// Pretty-print JSON output
        #[arg(long, conflicts_with = "compact")]
        pretty: bool,

        /// Compact JSON output (default)
        #[arg(long)]
        compact: bool,

        /// Suppress non-error output
        #[arg(long)]
        quiet: bool,

        /// Exit with a non-zero code if any line failed to parse
        #[arg(long)]
        strict: bool,
    },
    /// Operations on a live serial port.
    Serial {
        #[command(subcommand)]
        command: SerialCommands,
    },
}

#[derive(Subcommand, Debug)]
enum SerialCommands {
    /// Dump raw framed lines from the port.
    Watch {
        /// Serial device path (e.g. /dev/ttyUSB0)
        #[arg(long)]
        port: String,

        /// Baud rate
        #[arg(long, default_value_t = 115_200)]
        baud: u32,
    },
    /// Parse the stream and publish the latest reading over HTTP.
    #[command(
        after_help = "Endpoints:\n  GET /imu       orientation only (yaw/pitch/roll)\n  GET /imu/full  full reading"
    )]
    Serve {
        /// Serial device path (e.g. /dev/ttyUSB0)
        #[arg(long)]
        port: String,

        /// Baud rate
        #[arg(long, default_value_t = 115_200)]
        baud: u32,

        /// HTTP listen address
        #[arg(long, default_value = "127.0.0.1:8080")]
        listen: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Parse {
            input,
            report,
            stdout,
            pretty,
            compact,
            quiet,
            strict,
        } => cmd_parse(input, report, stdout, pretty, compact, quiet, strict),
        Commands::Serial { command } => {
            serial::init_tracing();
            match command {
                SerialCommands::Watch { port, baud } => {
                    serial::watch_port(&port, baud).map_err(Into::into)
                }
                SerialCommands::Serve { port, baud, listen } => {
                    serial::serve(&port, baud, &listen).map_err(Into::into)
                }
            }
        }
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("error: {}", err.message);
            if let Some(hint) = err.hint {
                eprintln!("hint: {}", hint);
            }
            ExitCode::from(2)
        }
    }
}

#[derive(Debug)]
struct CliError {
    message: String,
    hint: Option<String>,
}

impl CliError {
    fn new(message: impl Into<String>, hint: Option<String>) -> Self {
        Self {
            message: message.into(),
            hint,
        }
    }
}

impl std::fmt::Display for CliError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

impl From<anyhow::Error> for CliError {
    fn from(err: anyhow::Error) -> Self {
        CliError::new(format!("{err:#}"), None)
    }
}

fn cmd_parse(
    input: PathBuf,
    report: Option<PathBuf>,
    stdout: bool,
    pretty: bool,
    compact: bool,
    quiet: bool,
    strict: bool,
) -> Result<(), CliError> {
    if !input.exists() {
        return Err(CliError::new(
            format!("input file not found: {}", input.display()),
            Some("pass a file with one $VNYMR sentence per line".to_string()),
        ));
    }

    let file = File::open(&input)
        .with_context(|| format!("Failed to open input file: {}", input.display()))?;
    let (readings, failed_lines) = parse_lines(ReaderLineSource::new(file), quiet)?;

    let json = serialize_readings(&readings, pretty, compact)?;

    if stdout {
        print!("{}", json);
    } else {
        let report = report.expect("report required when not using stdout");
        if let Some(parent) = report.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).with_context(|| {
                    format!("Failed to create output directory: {}", parent.display())
                })?;
            }
        }
        fs::write(&report, json)
            .with_context(|| format!("Failed to write report: {}", report.display()))?;
        if !quiet {
            eprintln!(
                "OK: {} readings written -> {}",
                readings.len(),
                report.display()
            );
        }
    }

    if strict && failed_lines > 0 {
        return Err(CliError::new(
            format!("{failed_lines} lines failed to parse"),
            Some("run without --quiet to see per-line errors".to_string()),
        ));
    }
    Ok(())
}

fn parse_lines<S: LineSource>(mut source: S, quiet: bool) -> Result<(Vec<Reading>, u64), CliError> {
    let mut readings = Vec::new();
    let mut failed_lines = 0u64;
    let mut line_number = 0u64;

    while let Some(line) = source
        .next_line()
        .map_err(|err| anyhow::Error::from(err).context("Failed to read input"))?
    {
        line_number += 1;
        if line.trim().is_empty() {
            continue;
        }
        match vnfeed_core::parse_sentence(&line) {
            Ok(reading) => readings.push(reading),
            Err(err) => {
                failed_lines += 1;
                if !quiet {
                    eprintln!("line {line_number}: {err}");
                }
            }
        }
    }

    Ok((readings, failed_lines))
}

fn serialize_readings(
    readings: &[Reading],
    pretty: bool,
    compact: bool,
) -> Result<String, CliError> {
    if pretty && compact {
        return Err(CliError::new(
            "cannot use --pretty and --compact together",
            Some("choose one output format".to_string()),
        ));
    }
    if pretty {
        serde_json::to_string_pretty(readings)
            .context("JSON serialization failed")
            .map_err(Into::into)
    } else {
        serde_json::to_string(readings)
            .context("JSON serialization failed")
            .map_err(Into::into)
    }
}
