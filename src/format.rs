//! Text formatting shared by the tables and the stats view.

use crate::data::model::CellValue;

/// Round to whole units and group thousands with `sep`.
fn group_thousands(value: f64, sep: char) -> String {
    let rounded = format!("{:.0}", value.abs());
    let mut out = String::with_capacity(rounded.len() + rounded.len() / 3 + 1);
    for (i, ch) in rounded.chars().enumerate() {
        if i > 0 && (rounded.len() - i) % 3 == 0 {
            out.push(sep);
        }
        out.push(ch);
    }
    if value < 0.0 && out.chars().any(|c| c != '0' && c != sep) {
        out.insert(0, '-');
    }
    out
}

/// `"Rp 12,500"`: whole units, comma thousands separator.
pub fn currency(label: &str, value: f64) -> String {
    format!("{label} {}", group_thousands(value, ','))
}

/// `"+20.00%"`, or `"N/A"` for the undefined-change sentinel.
pub fn percent_change(value: f64) -> String {
    if value.is_nan() {
        "N/A".to_string()
    } else {
        format!("{value:+.2}%")
    }
}

/// Raw-table style: whole units, `.` as thousands separator.
pub fn table_cell(value: &CellValue) -> String {
    match value {
        CellValue::Number(v) => group_thousands(*v, '.'),
        other => other.to_string(),
    }
}
