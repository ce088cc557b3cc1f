//! Plain-text rendering of run results.
//!
//! Mirrors the three views of an interactive front end: the per-process
//! result table, the Gantt bar sequence, and the averages rounded to two
//! decimals.

use crate::models::{Averages, RunResult};

const HEADERS: [&str; 5] = [
    "Process ID",
    "Arrival Time",
    "Burst Time",
    "Turnaround Time",
    "Waiting Time",
];

/// Renders the completed processes as an aligned text table.
///
/// Rows follow completion order.
pub fn render_table(result: &RunResult) -> String {
    let rows: Vec<[String; 5]> = result
        .completed
        .iter()
        .map(|p| {
            [
                p.id.clone(),
                p.arrival.to_string(),
                p.burst.to_string(),
                p.turnaround_time.to_string(),
                p.waiting_time.to_string(),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    push_row(&mut out, HEADERS.iter().copied(), &widths);
    let rule: Vec<String> = widths.iter().map(|&w| "-".repeat(w)).collect();
    push_row(&mut out, rule.iter().map(String::as_str), &widths);
    for row in &rows {
        push_row(&mut out, row.iter().map(String::as_str), &widths);
    }
    out
}

fn push_row<'a>(out: &mut String, cells: impl Iterator<Item = &'a str>, widths: &[usize; 5]) {
    let line: Vec<String> = cells
        .zip(widths)
        .map(|(cell, &w)| format!("{cell:<w$}"))
        .collect();
    out.push_str(line.join(" | ").trim_end());
    out.push('\n');
}

/// Gantt bar labels in chronological order, e.g. `["P1 (0-5)", "P2 (5-8)"]`.
pub fn gantt_labels(result: &RunResult) -> Vec<String> {
    result.gantt.iter().map(ToString::to_string).collect()
}

/// Renders the Gantt chart on one line, bars separated by `|`.
pub fn render_gantt(result: &RunResult) -> String {
    gantt_labels(result).join(" | ")
}

/// Formats the averages with two decimals, or `N/A` when undefined.
pub fn format_averages(averages: Option<&Averages>) -> String {
    match averages {
        Some(avg) => format!(
            "Average Turnaround Time: {:.2}\nAverage Waiting Time: {:.2}",
            avg.avg_turnaround, avg.avg_waiting
        ),
        None => "Average Turnaround Time: N/A\nAverage Waiting Time: N/A".to_string(),
    }
}

/// Renders the full report: heading, table, Gantt chart and averages.
pub fn render(result: &RunResult) -> String {
    format!(
        "{}\n\n{}\nGantt Chart: {}\n\n{}\n",
        result.algorithm,
        render_table(result),
        render_gantt(result),
        format_averages(result.averages.as_ref())
    )
}
