use crate::task::Task;
use chrono::Local;

pub const NO_TASKS: &str = "No tasks found";

const HEADERS: [&str; 4] = ["ID", "Status", "Created", "Description"];
const CREATED_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Renders tasks as a left-aligned table framed by blank lines.
///
/// An empty slice still renders the header and separator rows.
pub fn render(tasks: &[&Task]) -> String {
    let rows: Vec<[String; 4]> = tasks
        .iter()
        .map(|task| {
            [
                task.id().to_string(),
                task.status().to_string(),
                task.created_at()
                    .with_timezone(&Local)
                    .format(CREATED_FORMAT)
                    .to_string(),
                task.description().to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let separators = widths.map(|width| "-".repeat(width));
    let mut out = String::from("\n");
    push_row(&mut out, &HEADERS, &widths);
    push_row(&mut out, &separators, &widths);
    for row in &rows {
        push_row(&mut out, row, &widths);
    }
    out.push('\n');
    out
}

fn push_row<S: AsRef<str>>(out: &mut String, cells: &[S; 4], widths: &[usize; 4]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell.as_ref(), width = *width))
        .collect::<Vec<_>>()
        .join("  ");
    out.push_str(line.trim_end());
    out.push('\n');
}
