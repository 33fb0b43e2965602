use crate::model::history::SessionRecord;

pub const CSV_HEADER: [&str; 7] = [
    "Date",
    "Time",
    "Startup",
    "Judge Type",
    "Duration",
    "Score",
    "Status",
];

pub const DEFAULT_CSV_NAME: &str = "pitch-sessions.csv";

/// Header plus one row per record, joined by `\n` with no trailing newline.
pub fn render_sessions_csv<'a, I>(records: I) -> String
where
    I: IntoIterator<Item = &'a SessionRecord>,
{
    let mut lines = vec![join_row(CSV_HEADER.iter().map(|s| s.to_string()))];
    for record in records {
        let score = record.score.to_string();
        lines.push(join_row(
            [
                record.date.as_str(),
                record.time.as_str(),
                record.startup.as_str(),
                record.judge_type.as_str(),
                record.duration.as_str(),
                score.as_str(),
                record.status.label(),
            ]
            .into_iter()
            .map(escape_field),
        ));
    }
    lines.join("\n")
}

fn join_row<I: Iterator<Item = String>>(fields: I) -> String {
    fields.collect::<Vec<_>>().join(",")
}

/// Line breaks become spaces so each record stays on one line; fields with a
/// comma or quote are quoted.
fn escape_field(field: &str) -> String {
    let flat: String = field
        .chars()
        .map(|c| if c == '\n' || c == '\r' { ' ' } else { c })
        .collect();
    if flat.contains(',') || flat.contains('"') {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/csv.rs"]
mod tests;
