//! Prints a Markdown deadline report for a directory of meeting records.
//!
//! Usage:
//!
//! ```text
//! deadline_report <atas-dir> [DD/MM/YYYY]
//! ```
//!
//! `atas-dir` holds one JSON document per meeting record. Statuses are
//! derived for the given reference date, or for the local date when it is
//! omitted. The report goes to stdout; logs go to stderr and honour
//! `RUST_LOG`.

use atas::{
    ata::{adapters::json_file::JsonFileAtaRepository, services::DeadlineTrackingService},
    clock::FixedClock,
    config::TrackingConfig,
    deadline::date::parse_display_date,
    report::render_markdown,
    telemetry::init_tracing,
};
use camino::Utf8PathBuf;
use mockable::{Clock, DefaultClock};
use std::env;
use std::io::{self, Write};
use std::sync::Arc;
use thiserror::Error;
use tokio::runtime::Builder;

/// Boxed error type for the main result.
type BoxError = Box<dyn std::error::Error + Send + Sync>;

#[derive(Debug, Error)]
enum ReportCliError {
    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
    #[error("runtime init failed: {0}")]
    RuntimeInit(#[source] io::Error),
}

#[derive(Debug)]
struct Args {
    atas_dir: Utf8PathBuf,
    reference_date: Option<String>,
}

fn main() -> Result<(), BoxError> {
    init_tracing("info")?;
    let args = parse_args(env::args_os().skip(1))?;
    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(ReportCliError::RuntimeInit)?;

    let report = match args.reference_date.as_deref() {
        Some(raw) => {
            let date = parse_display_date(raw).ok_or_else(|| {
                ReportCliError::InvalidArgs(format!(
                    "reference date '{raw}' is not a valid DD/MM/YYYY date"
                ))
            })?;
            runtime.block_on(build_report(&args, FixedClock::at_date(date)))?
        }
        None => runtime.block_on(build_report(&args, DefaultClock))?,
    };

    let mut stdout = io::stdout().lock();
    stdout.write_all(report.as_bytes())?;
    stdout.flush()?;
    Ok(())
}

fn parse_args(mut args: impl Iterator<Item = std::ffi::OsString>) -> Result<Args, ReportCliError> {
    let atas_dir = args
        .next()
        .ok_or_else(|| ReportCliError::InvalidArgs("missing atas directory argument".into()))
        .and_then(|arg| {
            arg.into_string()
                .map(Utf8PathBuf::from)
                .map_err(|_| ReportCliError::InvalidArgs("path is not valid UTF-8".into()))
        })?;
    let reference_date = args
        .next()
        .map(|arg| {
            arg.into_string()
                .map_err(|_| ReportCliError::InvalidArgs("date is not valid UTF-8".into()))
        })
        .transpose()?;
    if let Some(extra) = args.next() {
        let extra_arg = extra.to_string_lossy();
        return Err(ReportCliError::InvalidArgs(format!(
            "unexpected extra argument: {extra_arg}"
        )));
    }
    Ok(Args {
        atas_dir,
        reference_date,
    })
}

async fn build_report<C>(args: &Args, clock: C) -> Result<String, BoxError>
where
    C: Clock + Send + Sync,
{
    let repository = JsonFileAtaRepository::open(&args.atas_dir)?;
    let service = DeadlineTrackingService::with_config(
        Arc::new(repository),
        Arc::new(clock),
        TrackingConfig::default(),
    );
    let today = service.today();
    let tasks = service.tasks_on(today).await?;
    tracing::info!(atas_dir = %args.atas_dir, tasks = tasks.len(), %today, "loaded tasks");
    Ok(render_markdown(&tasks, today, service.config())?)
}
