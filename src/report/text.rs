use crate::report::{FieldStats, SummaryData, format_f64_6};

pub fn render_report_text(data: &SummaryData) -> String {
    let mut out = String::new();

    let title = format!("Diet Quality Report: {}", data.label);
    out.push_str(&title);
    out.push('\n');
    out.push_str(&"=".repeat(title.len()));
    out.push_str("\n\n");

    out.push_str("1. Input\n");
    out.push_str(&format!("Tool: {} {}\n", data.tool, data.version));
    out.push_str(&format!("Index: {}\n", data.index));
    out.push_str(&format!("Respondents: {}\n", data.n_records));
    if !data.groups.is_empty() {
        let groups: Vec<String> = data
            .groups
            .iter()
            .map(|g| format!("{}={}", g.key, g.n))
            .collect();
        out.push_str(&format!("Groups (GENDER): {}\n", groups.join(", ")));
    }
    out.push('\n');

    out.push_str("2. Score distribution\n");
    out.push_str(&format!(
        "{:<24} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        "field", "mean", "median", "p10", "p90", "min", "max"
    ));
    for stats in &data.fields {
        out.push_str(&stats_row(stats));
    }

    out
}

fn stats_row(s: &FieldStats) -> String {
    format!(
        "{:<24} {:>12} {:>12} {:>12} {:>12} {:>12} {:>12}\n",
        s.name,
        format_f64_6(s.mean),
        format_f64_6(s.median),
        format_f64_6(s.p10),
        format_f64_6(s.p90),
        format_f64_6(s.min),
        format_f64_6(s.max)
    )
}

#[cfg(test)]
#[path = "../../tests/src_inline/report/text.rs"]
mod tests;
