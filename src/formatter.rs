use crate::github::RepositoryRecord;
use unicode_width::UnicodeWidthStr;

const HEADERS: [&str; 8] = [
    "Name",
    "Created At",
    "Description",
    "Stars",
    "Forks",
    "Watchers",
    "Issues",
    "Pull Requests",
];

pub fn format_table(records: &[RepositoryRecord]) -> String {
    let rows: Vec<[String; 8]> = records.iter().map(cells).collect();

    let mut widths = HEADERS.map(|header| header.width());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.width());
        }
    }

    let border = border_line(&widths);
    let mut lines = vec![border.clone(), header_line(&widths), border.clone()];
    lines.extend(rows.iter().map(|row| row_line(row, &widths)));
    if !rows.is_empty() {
        lines.push(border);
    }

    lines.join("\n")
}

fn cells(record: &RepositoryRecord) -> [String; 8] {
    [
        single_line(&record.name),
        single_line(&record.created_at),
        record.description.as_deref().map(single_line).unwrap_or_default(),
        record.stargazer_count.to_string(),
        record.fork_count.to_string(),
        record.watcher_count.to_string(),
        record.issue_count.to_string(),
        record.pull_request_count.to_string(),
    ]
}

fn single_line(text: &str) -> String {
    text.replace(['\r', '\n'], " ")
}

fn border_line(widths: &[usize; 8]) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.push_str(&"-".repeat(width + 2));
        out.push('+');
    }
    out
}

fn header_line(widths: &[usize; 8]) -> String {
    let mut out = String::from("|");
    for (header, &width) in HEADERS.iter().zip(widths) {
        push_centered(&mut out, header, width);
    }
    out
}

fn row_line(row: &[String; 8], widths: &[usize; 8]) -> String {
    let mut out = String::from("|");
    for (cell, &width) in row.iter().zip(widths) {
        push_centered(&mut out, cell, width);
    }
    out
}

// Pads by terminal display width, so wide glyphs keep the borders aligned.
// An odd remainder goes to the right.
fn push_centered(out: &mut String, text: &str, width: usize) {
    let slack = width.saturating_sub(text.width());
    let left = slack / 2;
    out.push(' ');
    out.push_str(&" ".repeat(left));
    out.push_str(text);
    out.push_str(&" ".repeat(slack - left));
    out.push_str(" |");
}
