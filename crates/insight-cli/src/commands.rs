use anyhow::{Context, Result};
use tracing::info;

use insight_cli::run::{analyze_file, analyze_sample, report_json, write_report};
use insight_cli::settings::Settings;
use insight_cli::summary::print_summary;
use insight_ingest::{SampleOptions, write_json_records};
use insight_model::{ColumnPolicy, ProfileReport};

use crate::cli::{AnalyzeArgs, OutputFormatArg, ReportArgs, SampleArgs};

pub fn run_analyze(args: &AnalyzeArgs) -> Result<()> {
    let mut settings = Settings::load_optional(args.report.config.as_deref())?;
    if let Some(delimiter) = args.delimiter {
        settings.csv.delimiter = delimiter;
    }
    if args.union_columns {
        settings.profile.column_policy = ColumnPolicy::Union;
    }

    let report = analyze_file(&args.input, &settings)?;
    emit(&report, &args.report, &args.input.display().to_string())
}

pub fn run_sample(args: &SampleArgs) -> Result<()> {
    let settings = Settings::load_optional(args.report.config.as_deref())?;
    let options = SampleOptions {
        rows: args.rows,
        seed: args.seed,
    };

    let run = analyze_sample(&options, &settings)?;
    if let Some(path) = &args.save_data {
        write_json_records(path, &run.records)
            .with_context(|| format!("save sample data to {}", path.display()))?;
        info!(path = %path.display(), rows = run.records.len(), "saved sample data");
    }
    emit(&run.report, &args.report, "sample data")
}

fn emit(report: &ProfileReport, args: &ReportArgs, source: &str) -> Result<()> {
    if let Some(path) = &args.output {
        write_report(path, report)?;
    }
    match args.format {
        OutputFormatArg::Table => print_summary(report, source),
        OutputFormatArg::Json => println!("{}", report_json(report)?),
    }
    Ok(())
}
