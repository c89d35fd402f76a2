//! Terminal and Markdown rendering of the trial report.

use std::io::{self, Write};

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{ASCII_MARKDOWN, UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use bait_model::{
    BaitType, ProportionTable, StationGroup, SummaryTable, TrialOverview, TrialReport,
};

/// Title printed above the report.
pub const REPORT_TITLE: &str = "Bait trial preliminary findings";

/// Prints the report to stdout.
pub fn print_report(report: &TrialReport) -> io::Result<()> {
    write_report(&mut io::stdout().lock(), report)
}

/// Writes the terminal rendering of the report to `out`.
pub fn write_report<W: Write>(out: &mut W, report: &TrialReport) -> io::Result<()> {
    writeln!(out, "{REPORT_TITLE}")?;
    writeln!(out)?;
    writeln!(out, "{}", overview_table(&report.overview))?;
    writeln!(out)?;
    writeln!(out, "Number of interactions by study design and bait type:")?;
    writeln!(out, "{}", summary_table(&report.summary))?;
    for note in unassigned_notes(&report.summary) {
        writeln!(out, "  note: {note}")?;
    }
    for bait in BaitType::ALL {
        let table = report.proportions(bait);
        writeln!(out)?;
        writeln!(out, "{} proportion of interactions for each subject (%):", bait.code())?;
        if table.rows.is_empty() {
            writeln!(out, "  no interactions recorded")?;
        } else {
            writeln!(out, "{}", proportion_table(table))?;
        }
        if !table.omitted_subjects.is_empty() {
            writeln!(
                out,
                "  omitted (accidental touches only): {}",
                table.omitted_subjects.join(", ")
            )?;
        }
    }
    Ok(())
}

pub fn overview_table(overview: &TrialOverview) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Value")]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Individual subjects in trial"), Cell::new(overview.subjects)]);
    table.add_row(vec![Cell::new("Bait stations in trial"), Cell::new(overview.stations)]);
    table.add_row(vec![Cell::new("Valid records"), Cell::new(overview.records)]);
    for coverage in &overview.coverage {
        table.add_row(vec![
            Cell::new(format!("{} records without interaction", coverage.bait.code())),
            count_cell(coverage.without_interaction),
        ]);
    }
    table
}

pub fn summary_table(summary: &SummaryTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Bait Type")];
    header.extend(StationGroup::ALL.iter().map(|group| header_cell(group.label())));
    header.push(header_cell("Total"));
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for idx in 1..=3 {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for row in &summary.rows {
        let mut cells = vec![bait_cell(row.bait)];
        cells.extend(
            StationGroup::ALL
                .iter()
                .map(|group| count_cell(row.group_count(*group))),
        );
        cells.push(Cell::new(row.total).add_attribute(Attribute::Bold));
        table.add_row(cells);
    }
    table
}

/// Explains rows whose group counts do not add up to the total.
pub fn unassigned_notes(summary: &SummaryTable) -> Vec<String> {
    summary
        .rows
        .iter()
        .filter(|row| row.has_unassigned())
        .map(|row| {
            format!(
                "{}: Close + Away = {} but Total = {} (stations outside or in both groups)",
                row.bait.code(),
                row.close + row.away,
                row.total
            )
        })
        .collect()
}

pub fn proportion_table(proportions: &ProportionTable) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Subject")];
    header.extend(proportions.columns.iter().map(|kind| header_cell(kind.as_str())));
    table.set_header(header);
    apply_table_style(&mut table);
    for idx in 1..=proportions.columns.len() {
        align_column(&mut table, idx, CellAlignment::Right);
    }
    for row in &proportions.rows {
        let mut cells = vec![Cell::new(&row.subject_id).fg(Color::Blue)];
        cells.extend(row.values.iter().map(|value| percent_cell(*value)));
        table.add_row(cells);
    }
    table
}

/// Renders the report as a Markdown document.
pub fn render_markdown(report: &TrialReport) -> String {
    let mut out = format!("# {REPORT_TITLE}\n\n## Number of subjects and bait stations\n\n");
    out.push_str(&format!(
        "- Individual subjects in trial: {}\n- Bait stations in trial: {}\n\n",
        report.overview.subjects, report.overview.stations
    ));

    out.push_str("## Number of interactions\n\n");
    let mut summary = Table::new();
    summary.load_preset(ASCII_MARKDOWN);
    summary.set_header(vec!["Bait Type", "Close", "Away", "Total"]);
    for row in &report.summary.rows {
        summary.add_row(vec![
            row.bait.code().to_string(),
            row.close.to_string(),
            row.away.to_string(),
            row.total.to_string(),
        ]);
    }
    out.push_str(&format!("{summary}\n"));
    for note in unassigned_notes(&report.summary) {
        out.push_str(&format!("\n> {note}\n"));
    }

    for bait in BaitType::ALL {
        let proportions = report.proportions(bait);
        out.push_str(&format!(
            "\n## {} proportion of interactions for each subject\n\n",
            bait.code()
        ));
        let mut table = Table::new();
        table.load_preset(ASCII_MARKDOWN);
        let mut header = vec!["Subject".to_string()];
        header.extend(proportions.columns.iter().map(ToString::to_string));
        table.set_header(header);
        for row in &proportions.rows {
            let mut cells = vec![row.subject_id.clone()];
            cells.extend(row.values.iter().map(|value| format!("{value:.1}")));
            table.add_row(cells);
        }
        out.push_str(&format!("{table}\n"));
        if !proportions.omitted_subjects.is_empty() {
            out.push_str(&format!(
                "\nOmitted (accidental touches only): {}\n",
                proportions.omitted_subjects.join(", ")
            ));
        }
    }
    out
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn bait_cell(bait: BaitType) -> Cell {
    Cell::new(format!("{} ({})", bait.code(), bait.description()))
        .fg(Color::Blue)
        .add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
    } else {
        dim_cell(count)
    }
}

fn percent_cell(value: f64) -> Cell {
    if value > 0.0 {
        Cell::new(format!("{value:.1}"))
    } else {
        dim_cell("0.0")
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
