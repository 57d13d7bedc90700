//! Live serial-port commands: raw line dumping and the HTTP publisher.
//!
//! The read loop is the only producer: it frames the serial byte stream
//! into lines, parses each one and replaces the latest reading in a watch
//! cell. HTTP handlers only ever borrow the current value, so a reader can
//! never observe a half-updated reading. Malformed sentences are logged
//! and skipped; the previously published reading stays in place.

use std::io::ErrorKind;
use std::time::Duration;

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serialport::SerialPort;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use vnfeed_core::{LineSource, ReaderLineSource, Reading, SourceError, parse_sentence};

const SERIAL_READ_TIMEOUT: Duration = Duration::from_secs(10);

pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

fn open_port(port: &str, baud: u32) -> Result<Box<dyn SerialPort>> {
    serialport::new(port, baud)
        .timeout(SERIAL_READ_TIMEOUT)
        .open()
        .with_context(|| format!("Failed to open serial port: {port}"))
}

/// Dump raw framed lines from the serial port to stdout.
pub fn watch_port(port: &str, baud: u32) -> Result<()> {
    let mut source = ReaderLineSource::new(open_port(port, baud)?);
    loop {
        match source.next_line() {
            Ok(Some(line)) => println!("{line:?}"),
            Ok(None) => return Ok(()),
            Err(SourceError::Io(err)) if err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => return Err(err).context("serial read failed"),
        }
    }
}

/// Read the port, parse each sentence and serve the latest reading.
///
/// Endpoints: `GET /imu` returns the orientation-only view, `GET /imu/full`
/// the full reading. Both answer 503 until the first valid sentence.
pub fn serve(port: &str, baud: u32, listen: &str) -> Result<()> {
    let reader = open_port(port, baud)?;
    let (tx, rx) = watch::channel(None::<Reading>);
    std::thread::spawn(move || read_loop(reader, tx));

    let runtime = tokio::runtime::Runtime::new().context("Failed to start async runtime")?;
    runtime.block_on(async {
        let app = Router::new()
            .route("/imu", get(imu_orientation))
            .route("/imu/full", get(imu_full))
            .with_state(rx);
        let listener = tokio::net::TcpListener::bind(listen)
            .await
            .with_context(|| format!("Failed to bind HTTP listener: {listen}"))?;
        tracing::info!(listen, "serving IMU feed");
        axum::serve(listener, app).await.context("HTTP server failed")
    })
}

fn read_loop(reader: Box<dyn SerialPort>, tx: watch::Sender<Option<Reading>>) {
    let mut source = ReaderLineSource::new(reader);
    loop {
        match source.next_line() {
            Ok(Some(line)) => match parse_sentence(&line) {
                Ok(reading) => {
                    tx.send_replace(Some(reading));
                }
                Err(err) => {
                    tracing::warn!(%err, line = line.trim_end(), "skipping sentence");
                }
            },
            Ok(None) => {
                tracing::info!("serial stream closed");
                return;
            }
            Err(SourceError::Io(err)) if err.kind() == ErrorKind::TimedOut => continue,
            Err(err) => {
                tracing::error!(%err, "serial read failed");
                return;
            }
        }
    }
}

async fn imu_orientation(State(rx): State<watch::Receiver<Option<Reading>>>) -> Response {
    match *rx.borrow() {
        Some(reading) => Json(reading.orientation()).into_response(),
        None => no_reading_yet(),
    }
}

async fn imu_full(State(rx): State<watch::Receiver<Option<Reading>>>) -> Response {
    match *rx.borrow() {
        Some(reading) => Json(reading).into_response(),
        None => no_reading_yet(),
    }
}

fn no_reading_yet() -> Response {
    (StatusCode::SERVICE_UNAVAILABLE, "no reading yet").into_response()
}
