//! End-to-end tests for the report command.

use std::fs;
use std::path::Path;

use clap::Parser;
use tempfile::TempDir;
use tracing::level_filters::LevelFilter;

use bait_cli::cli::{Cli, Command, EmptyRowsArg, InputArgs, ReportArgs};
use bait_cli::commands::run_report;
use bait_cli::logging::LogFormat;
use bait_cli::summary::{render_markdown, summary_table, unassigned_notes, write_report};
use bait_model::{BaitType, InteractionType};

const WEEK1: &str = "\
KakapoID,RelativePath,Interaction20R,InteractionRMS
A,WH/CBS-1/img01.jpg,Bite,
A,WH/CBS-1/img02.jpg,Look,
,WH/CBS-1/img03.jpg,Bite,Bite
";

const WEEK2: &str = "\
KakapoID,RelativePath,Interaction20R,InteractionRMS
B,WH/ABS-2/img11.jpg,,Touch
C,WH/depot/img12.jpg,,Touch accidental
";

fn study_dir() -> TempDir {
    let dir = TempDir::new().expect("temp dir");
    fs::write(dir.path().join("kakapo_week1.csv"), WEEK1).expect("write week1");
    fs::write(dir.path().join("kakapo_week2.csv"), WEEK2).expect("write week2");
    dir
}

fn report_args(dir: &Path) -> ReportArgs {
    ReportArgs {
        input: InputArgs {
            data_dir: dir.to_path_buf(),
            pattern: None,
            config: None,
        },
        empty_rows: None,
        json: None,
        markdown: None,
    }
}

#[test]
fn report_summary_snapshot() {
    let dir = study_dir();
    let outcome = run_report(&report_args(dir.path())).expect("report");

    assert_eq!(outcome.files.len(), 2);
    insta::assert_json_snapshot!(outcome.report.summary, @r#"
    {
      "rows": [
        {
          "bait": "cereal",
          "close": 2,
          "away": 0,
          "total": 2
        },
        {
          "bait": "meat",
          "close": 0,
          "away": 1,
          "total": 2
        }
      ]
    }
    "#);
}

#[test]
fn report_omits_noise_only_subjects_by_default() {
    let dir = study_dir();
    let outcome = run_report(&report_args(dir.path())).expect("report");

    let meat = outcome.report.proportions(BaitType::Meat);
    assert_eq!(meat.subjects().collect::<Vec<_>>(), vec!["B"]);
    assert_eq!(meat.omitted_subjects, vec!["C".to_string()]);
    assert_eq!(meat.value("B", InteractionType::Touch), Some(100.0));

    let cereal = outcome.report.proportions(BaitType::Cereal);
    assert_eq!(cereal.value("A", InteractionType::Bite), Some(50.0));
    assert_eq!(outcome.report.overview.subjects, 3);
    assert_eq!(outcome.report.overview.stations, 4);
}

#[test]
fn terminal_report_lists_omitted_subjects() {
    let dir = study_dir();
    let outcome = run_report(&report_args(dir.path())).expect("report");

    let mut out = Vec::new();
    write_report(&mut out, &outcome.report).expect("render");
    let text = String::from_utf8(out).expect("utf8");
    assert!(text.starts_with("Bait trial preliminary findings"));
    assert!(text.contains("RMS proportion of interactions for each subject (%):"));
    assert!(text.contains("omitted (accidental touches only): C"));
}

#[test]
fn fail_policy_aborts_report() {
    let dir = study_dir();
    let mut args = report_args(dir.path());
    args.empty_rows = Some(EmptyRowsArg::Fail);

    let err = run_report(&args).unwrap_err();
    assert!(format!("{err:#}").contains("subject 'C' has no qualifying RMS interactions"));
}

#[test]
fn empty_directory_reports_empty_input() {
    let dir = TempDir::new().expect("temp dir");
    let err = run_report(&report_args(dir.path())).unwrap_err();
    assert!(format!("{err:#}").contains("no input files to load"));
}

#[test]
fn config_file_in_data_dir_is_used() {
    let dir = TempDir::new().expect("temp dir");
    fs::write(
        dir.path().join("survey_1.csv"),
        "Bird,Station,Cereal,Meat\nA,CBS-1,Look,\n",
    )
    .expect("write data");
    fs::write(
        dir.path().join("bait-report.toml"),
        r#"
pattern = "survey_*.csv"

[columns]
subject_id = "Bird"
station_path = "Station"
interaction_cereal = "Cereal"
interaction_meat = "Meat"
"#,
    )
    .expect("write config");

    let outcome = run_report(&report_args(dir.path())).expect("report");
    assert_eq!(outcome.settings.pattern, "survey_*.csv");
    assert_eq!(outcome.report.summary.row(BaitType::Cereal).unwrap().close, 1);
}

#[test]
fn writes_json_and_markdown_exports() {
    let dir = study_dir();
    let out = TempDir::new().expect("out dir");
    let mut args = report_args(dir.path());
    args.json = Some(out.path().join("report.json"));
    args.markdown = Some(out.path().join("report.md"));

    run_report(&args).expect("report");

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(out.path().join("report.json")).unwrap())
            .expect("parse json");
    assert_eq!(json["overview"]["subjects"], 3);
    assert_eq!(json["meat_proportions"]["columns"][3], "Bite");

    let markdown = fs::read_to_string(out.path().join("report.md")).unwrap();
    assert!(markdown.starts_with("# Bait trial preliminary findings"));
    assert!(markdown.contains("## RMS proportion of interactions for each subject"));
    assert!(markdown.contains("Omitted (accidental touches only): C"));
}

#[test]
fn notes_flag_unassigned_interactions() {
    let dir = study_dir();
    let outcome = run_report(&report_args(dir.path())).expect("report");

    let notes = unassigned_notes(&outcome.report.summary);
    assert_eq!(notes.len(), 1);
    assert!(notes[0].starts_with("RMS: Close + Away = 1 but Total = 2"));

    let rendered = summary_table(&outcome.report.summary).to_string();
    assert!(rendered.contains("20R"));
    assert!(rendered.contains("Away"));
    assert!(render_markdown(&outcome.report).contains("| Bait Type"));
}

#[test]
fn parses_report_command_line() {
    let cli = Cli::try_parse_from([
        "bait-report",
        "report",
        "data",
        "--pattern",
        "kakapo_2023*.csv",
        "--empty-rows",
        "zero-fill",
        "-v",
    ])
    .expect("parse");

    let Command::Report(args) = cli.command else {
        panic!("expected report command");
    };
    assert_eq!(args.input.data_dir, Path::new("data"));
    assert_eq!(args.input.pattern.as_deref(), Some("kakapo_2023*.csv"));
    assert!(matches!(args.empty_rows, Some(EmptyRowsArg::ZeroFill)));
}

#[test]
fn log_flags_build_log_config() {
    let cli = Cli::try_parse_from([
        "bait-report",
        "--log-level",
        "debug",
        "--log-format",
        "compact",
        "--log-timestamps",
        "--log-target",
        "--log-file",
        "bait.log",
        "files",
    ])
    .expect("parse");

    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::DEBUG);
    assert_eq!(config.format, LogFormat::Compact);
    assert!(config.with_timestamps);
    assert!(config.with_target);
    assert!(!config.with_ansi);
    assert!(!config.use_env_filter);
    assert_eq!(config.log_file.as_deref(), Some(Path::new("bait.log")));
}

#[test]
fn log_config_defaults_defer_to_environment() {
    let cli = Cli::try_parse_from(["bait-report", "files"]).expect("parse");

    let config = cli.log_config();
    assert_eq!(config.level_filter, LevelFilter::WARN);
    assert!(config.use_env_filter);
    assert!(!config.with_timestamps);
    assert!(!config.with_target);
}
