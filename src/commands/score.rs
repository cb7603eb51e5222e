use super::Host;
use super::common::{ColorMode, LogLevel, init_logging};
use super::config::Config;
use super::url_file::read_identifiers;
use crate::Result;
use crate::facts::hub::HubContextBuilder;
use crate::reports::{generate_ndjson, generate_summary};
use crate::scoring::{Dispatcher, Outcome, OutputRecord, Scorer};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use core::num::NonZero;
use ohno::IntoAppError;
use owo_colors::OwoColorize;
use std::fs;
use std::io::{IsTerminal, Write, stderr};
use std::sync::Arc;

const LOG_TARGET: &str = "     score";

#[derive(Parser, Debug)]
pub struct ScoreArgs {
    /// File listing the model URLs to score, separated by newlines or commas
    #[arg(value_name = "URL_FILE")]
    pub url_file: Utf8PathBuf,

    /// Path to configuration file (default is `model-rank.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Number of models scored concurrently (overrides the configuration file)
    #[arg(long, value_name = "COUNT")]
    pub workers: Option<NonZero<usize>>,

    /// Seconds allowed to gather the facts of one model (overrides the configuration file)
    #[arg(long, value_name = "SECONDS")]
    pub timeout_secs: Option<u64>,

    /// Hugging Face access token
    #[arg(long, value_name = "TOKEN", env = "HF_TOKEN", hide_env_values = true)]
    pub hub_token: Option<String>,

    /// Control when to use colored output
    #[arg(long, value_name = "WHEN", default_value = "auto")]
    pub color: ColorMode,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,

    /// Append diagnostic output to this file instead of stderr
    #[arg(long, value_name = "PATH", env = "LOG_FILE")]
    pub log_file: Option<Utf8PathBuf>,

    /// Write NDJSON records to this file instead of stdout
    #[arg(long, short = 'o', value_name = "PATH", help_heading = "Report Output")]
    pub output: Option<Utf8PathBuf>,

    /// Write a human-readable summary of the run to this file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub summary: Option<Utf8PathBuf>,

    /// Write NDJSON records of failed identifiers to this file
    #[arg(long, value_name = "PATH", help_heading = "Report Output")]
    pub error_file: Option<Utf8PathBuf>,
}

/// Score every identifier listed in the URL file and write the reports.
///
/// Exits with status 1 when any identifier failed.
pub async fn score_models<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<()> {
    match score_models_inner(host, args).await {
        Ok(records) => {
            let failed = records.iter().filter(|record| record.is_failed()).count();
            if failed > 0 {
                host.exit(1);
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ {e}");
            host.exit(1);
            Err(e)
        }
    }
}

async fn score_models_inner<H: Host>(host: &mut H, args: &ScoreArgs) -> Result<Vec<OutputRecord>> {
    init_logging(args.log_level, args.log_file.as_deref())?;

    let identifiers = read_identifiers(&args.url_file)?;

    let mut config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    if let Some(workers) = args.workers {
        config.workers = Some(workers.get());
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.task_timeout_secs = timeout_secs;
    }
    config.validate()?;

    let registry = Arc::new(config.registry()?);
    let token = args.hub_token.as_deref().filter(|token| !token.trim().is_empty());
    let builder = HubContextBuilder::new(token, config.hub_base_url.as_str())?;

    let mut dispatcher = Dispatcher::new(Arc::new(builder), Scorer::new(registry)).with_task_timeout(Some(config.task_timeout()));
    if let Some(workers) = config.workers() {
        dispatcher = dispatcher.with_workers(workers);
    }

    log::debug!(target: LOG_TARGET, "Read {} identifier(s) from '{}'", identifiers.len(), args.url_file);
    let records = dispatcher.run(identifiers).await;

    let mut ndjson = String::new();
    generate_ndjson(records.iter().filter(|record| !matches!(record.outcome, Outcome::Unscored)), &mut ndjson)?;
    if let Some(path) = &args.output {
        write_file(path, &ndjson, "NDJSON report")?;
    } else {
        host.output().write_all(ndjson.as_bytes()).into_app_err("writing NDJSON records")?;
    }

    if let Some(path) = &args.error_file {
        let mut errors = String::new();
        generate_ndjson(records.iter().filter(|record| record.is_failed()), &mut errors)?;
        write_file(path, &errors, "error report")?;
    }

    if let Some(path) = &args.summary {
        let mut summary = String::new();
        generate_summary(&records, args.color.enabled(false), &mut summary)?;
        write_file(path, &summary, "summary report")?;
    }

    report_status(host, &records, args.color.enabled(stderr().is_terminal()));
    Ok(records)
}

fn write_file(path: &Utf8Path, contents: &str, what: &str) -> Result<()> {
    fs::write(path, contents).into_app_err_with(|| format!("writing {what} to '{path}'"))?;
    log::info!(target: LOG_TARGET, "Wrote {what} to '{path}'");
    Ok(())
}

fn report_status<H: Host>(host: &mut H, records: &[OutputRecord], use_colors: bool) {
    let scored = records.iter().filter(|record| record.scorecard().is_some()).count();
    let failed = records.iter().filter(|record| record.is_failed()).count();
    let skipped = records.len() - scored - failed;

    let failed_str = if use_colors && failed > 0 {
        format!("{failed} failed").red().to_string()
    } else {
        format!("{failed} failed")
    };

    let _ = writeln!(host.error(), "Scored {scored} model(s), skipped {skipped}, {failed_str}");
}
