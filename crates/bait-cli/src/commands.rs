use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use comfy_table::Table;
use tracing::{info, info_span};

use bait_core::build_report;
use bait_ingest::{discover_input_files, load_and_merge};
use bait_model::TrialReport;

use crate::cli::{InputArgs, ReportArgs};
use crate::config::{ReportConfig, Settings};
use crate::summary::{apply_table_style, render_markdown};

/// Result of a `report` run, ready for printing.
#[derive(Debug)]
pub struct ReportOutcome {
    pub settings: Settings,
    pub files: Vec<PathBuf>,
    pub report: TrialReport,
    pub json: Option<PathBuf>,
    pub markdown: Option<PathBuf>,
}

fn settings_for(input: &InputArgs, args: Option<&ReportArgs>) -> Result<Settings> {
    let config = ReportConfig::discover(&input.data_dir, input.config.as_deref())?;
    Ok(Settings::resolve(
        &input.data_dir,
        config,
        input.pattern.as_deref(),
        args.and_then(|a| a.empty_rows).map(Into::into),
    ))
}

pub fn run_files(input: &InputArgs) -> Result<()> {
    let settings = settings_for(input, None)?;
    let files = discover_input_files(&settings.data_dir, &settings.pattern)
        .with_context(|| format!("discover files in {}", settings.data_dir.display()))?;
    let mut table = Table::new();
    table.set_header(vec!["#", "File"]);
    apply_table_style(&mut table);
    for (idx, path) in files.iter().enumerate() {
        table.add_row(vec![(idx + 1).to_string(), path.display().to_string()]);
    }
    println!("Pattern: {}", settings.pattern);
    println!("{table}");
    Ok(())
}

pub fn run_report(args: &ReportArgs) -> Result<ReportOutcome> {
    let settings = settings_for(&args.input, Some(args))?;
    let span = info_span!(
        "report",
        data_dir = %settings.data_dir.display(),
        pattern = %settings.pattern
    );
    let _guard = span.enter();
    let start = Instant::now();

    let files = discover_input_files(&settings.data_dir, &settings.pattern)
        .with_context(|| format!("discover files in {}", settings.data_dir.display()))?;
    let records = load_and_merge(&files, &settings.columns).with_context(|| {
        format!(
            "load observations matching '{}' in {}",
            settings.pattern,
            settings.data_dir.display()
        )
    })?;
    let report = build_report(&records, settings.empty_rows).context("aggregate observations")?;

    if let Some(path) = &args.json {
        write_json(path, &report)?;
    }
    if let Some(path) = &args.markdown {
        std::fs::write(path, render_markdown(&report))
            .with_context(|| format!("write markdown: {}", path.display()))?;
        info!(path = %path.display(), "Wrote Markdown report");
    }

    info!(
        files = files.len(),
        records = records.len(),
        duration_ms = start.elapsed().as_millis(),
        "Report complete"
    );

    Ok(ReportOutcome {
        settings,
        files,
        report,
        json: args.json.clone(),
        markdown: args.markdown.clone(),
    })
}

fn write_json(path: &Path, report: &TrialReport) -> Result<()> {
    let json = serde_json::to_string_pretty(report).context("serialize report")?;
    std::fs::write(path, json).with_context(|| format!("write json: {}", path.display()))?;
    info!(path = %path.display(), "Wrote JSON report");
    Ok(())
}
