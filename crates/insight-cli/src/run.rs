//! Command workflows shared by the binary and its tests.

use std::path::Path;

use anyhow::{Context, Result};
use insight_ingest::{SampleOptions, generate_sample_records, load_records};
use insight_model::{ProfileReport, Record};
use tracing::{info, info_span};

use crate::settings::Settings;

/// Generated records together with their profile.
#[derive(Debug, Clone)]
pub struct SampleRun {
    pub records: Vec<Record>,
    pub report: ProfileReport,
}

/// Loads a dataset file and profiles it.
pub fn analyze_file(path: &Path, settings: &Settings) -> Result<ProfileReport> {
    let span = info_span!("analyze", path = %path.display());
    let _guard = span.enter();

    let loaded = load_records(path, &settings.load_options())
        .with_context(|| format!("load {}", path.display()))?;
    settings
        .profiler()
        .profile(&loaded.records)
        .with_context(|| format!("profile {}", path.display()))
}

/// Generates sample order data and profiles it.
pub fn analyze_sample(options: &SampleOptions, settings: &Settings) -> Result<SampleRun> {
    let span = info_span!("sample", rows = options.rows);
    let _guard = span.enter();

    let records = generate_sample_records(options);
    info!(rows = records.len(), seeded = options.seed.is_some(), "generated sample data");
    let report = settings
        .profiler()
        .profile(&records)
        .context("profile sample data")?;
    Ok(SampleRun { records, report })
}

/// Report as pretty-printed JSON.
pub fn report_json(report: &ProfileReport) -> Result<String> {
    serde_json::to_string_pretty(report).context("serialize report")
}

/// Writes the report JSON to `path`.
pub fn write_report(path: &Path, report: &ProfileReport) -> Result<()> {
    let json = report_json(report)?;
    std::fs::write(path, json).with_context(|| format!("write report {}", path.display()))?;
    info!(path = %path.display(), "wrote report");
    Ok(())
}
