//! ASCII tables for the per-language statistics.
//!
//! Layout:
//!
//! ```text
//! +HeadHunter Moscow-----------+---------------------+----------------+
//! | Language | Vacancies found | Vacancies processed | Average salary |
//! +----------+-----------------+---------------------+----------------+
//! | python   |            1823 |                 417 |         243562 |
//! +----------+-----------------+---------------------+----------------+
//! ```

use crate::domain::{PlatformReport, StatsReport};

const HEADER: [&str; 4] = [
    "Language",
    "Vacancies found",
    "Vacancies processed",
    "Average salary",
];

/// Render one platform's table, with the title embedded in the top border.
pub fn format_stats_table(title: &str, report: &StatsReport) -> String {
    let rows: Vec<[String; 4]> = report
        .iter()
        .map(|(language, s)| {
            [
                language.to_string(),
                s.vacancies_found.to_string(),
                s.vacancies_processed.to_string(),
                s.average_salary.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADER.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let border = border_line(&widths);
    let mut out = String::new();

    out.push_str(&titled_border(title, &border));
    out.push('\n');
    out.push_str(&format_row(&HEADER.map(String::from), &widths, false));
    out.push('\n');
    out.push_str(&border);
    out.push('\n');
    for row in &rows {
        out.push_str(&format_row(row, &widths, true));
        out.push('\n');
    }
    out.push_str(&border);
    out.push('\n');

    out
}

/// Render all platform tables separated by a blank line.
pub fn format_reports(reports: &[PlatformReport]) -> String {
    reports
        .iter()
        .map(|r| format_stats_table(&r.title, &r.languages))
        .collect::<Vec<_>>()
        .join("\n")
}

fn border_line(widths: &[usize]) -> String {
    let mut line = String::from("+");
    for w in widths {
        line.push_str(&"-".repeat(w + 2));
        line.push('+');
    }
    line
}

/// Overlay the title onto the border, right after the leading `+`.
/// Titles that do not fit leave the border untouched.
fn titled_border(title: &str, border: &str) -> String {
    let title_len = title.chars().count();
    if title.is_empty() || title_len + 2 > border.len() {
        return border.to_string();
    }
    format!("+{title}{}", &border[1 + title_len..])
}

/// Numbers are right-aligned in data rows.
fn format_row(cells: &[String; 4], widths: &[usize; 4], numeric: bool) -> String {
    let mut line = String::from("|");
    for (i, (cell, &w)) in cells.iter().zip(widths).enumerate() {
        if numeric && i > 0 {
            line.push_str(&format!(" {cell:>w$} |"));
        } else {
            line.push_str(&format!(" {cell:<w$} |"));
        }
    }
    line
}
