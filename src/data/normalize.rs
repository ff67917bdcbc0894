use std::collections::HashSet;

use chrono::{NaiveDate, NaiveDateTime};

use super::model::{CanonicalRow, CanonicalSeries, CellValue, ColumnKind, Field, RawDataset};
use crate::error::{DashboardError, Result};

/// Canonical name given to the region's date column.
pub const DATE_FIELD: &str = "tahun_raw";

// ---------------------------------------------------------------------------
// Normalizer
// ---------------------------------------------------------------------------

/// Turn a raw table into a sorted [`CanonicalSeries`].
///
/// 1. trim every column name (collisions are an error)
/// 2. rename the resolved date column to [`DATE_FIELD`]
/// 3. parse each date permissively
/// 4. drop rows whose date does not parse
/// 5. stable-sort by date
pub fn normalize(raw: RawDataset) -> Result<CanonicalSeries> {
    let trimmed: Vec<String> = raw.headers.iter().map(|h| h.trim().to_string()).collect();
    let mut seen = HashSet::new();
    if let Some(dup) = trimmed.iter().find(|name| !seen.insert(name.as_str())) {
        return Err(DashboardError::DuplicateColumn(dup.clone()));
    }

    let date_idx = trimmed
        .iter()
        .position(|h| h == raw.date_column.trim())
        .ok_or_else(|| DashboardError::DateColumnNotFound {
            region: raw.region.clone(),
        })?;
    if trimmed.iter().enumerate().any(|(i, h)| i != date_idx && h == DATE_FIELD) {
        return Err(DashboardError::DuplicateColumn(DATE_FIELD.to_string()));
    }

    let width = trimmed.len() - 1;
    let total = raw.rows.len();
    let mut rows: Vec<CanonicalRow> = Vec::with_capacity(total);
    for record in raw.rows {
        let raw_date = record.get(date_idx).map(|d| d.trim().to_string()).unwrap_or_default();
        let Some(observation_date) = parse_observation_date(&raw_date) else {
            continue;
        };
        // Ragged rows: one value per field, absent cells count as missing.
        let mut values: Vec<CellValue> = record
            .iter()
            .enumerate()
            .filter(|(i, _)| *i != date_idx)
            .map(|(_, v)| CellValue::parse(v))
            .collect();
        values.resize(width, CellValue::Missing);
        rows.push(CanonicalRow {
            observation_date,
            raw_date,
            values,
        });
    }

    let dropped_rows = total - rows.len();
    if rows.is_empty() {
        return Err(DashboardError::EmptyDataset(format!(
            "no row of '{}' has a parseable date",
            raw.source.display()
        )));
    }
    if dropped_rows > 0 {
        log::warn!(
            "{}: dropped {dropped_rows} of {total} rows with an unparseable date",
            raw.region
        );
    }

    // `sort_by_key` is stable, so equal dates keep file order.
    rows.sort_by_key(|r| r.observation_date);

    let names: Vec<String> = trimmed
        .into_iter()
        .enumerate()
        .filter(|(i, _)| *i != date_idx)
        .map(|(_, name)| name)
        .collect();
    let fields = names
        .into_iter()
        .enumerate()
        .map(|(col, name)| Field {
            kind: column_kind(&rows, col),
            name,
        })
        .collect();

    Ok(CanonicalSeries {
        region: raw.region,
        fields,
        rows,
        dropped_rows,
    })
}

fn column_kind(rows: &[CanonicalRow], col: usize) -> ColumnKind {
    let mut any_number = false;
    for row in rows {
        match row.values.get(col) {
            Some(CellValue::Number(_)) => any_number = true,
            Some(CellValue::Missing) | None => {}
            Some(CellValue::Text(_)) => return ColumnKind::Other,
        }
    }
    if any_number {
        ColumnKind::Numeric
    } else {
        ColumnKind::Other
    }
}

// ---------------------------------------------------------------------------
// Date parsing
// ---------------------------------------------------------------------------

const FULL_DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y", "%d/%m/%Y", "%m-%d-%Y", "%d-%m-%Y", "%d.%m.%Y",
];

const MONTHS: &[(&str, u32)] = &[
    ("jan", 1), ("january", 1), ("januari", 1),
    ("feb", 2), ("february", 2), ("februari", 2), ("peb", 2), ("pebruari", 2),
    ("mar", 3), ("march", 3), ("maret", 3),
    ("apr", 4), ("april", 4),
    ("may", 5), ("mei", 5),
    ("jun", 6), ("june", 6), ("juni", 6),
    ("jul", 7), ("july", 7), ("juli", 7),
    ("aug", 8), ("august", 8), ("agu", 8), ("agt", 8), ("agustus", 8),
    ("sep", 9), ("sept", 9), ("september", 9),
    ("oct", 10), ("october", 10), ("okt", 10), ("oktober", 10),
    ("nov", 11), ("november", 11), ("nop", 11), ("nopember", 11),
    ("dec", 12), ("december", 12), ("des", 12), ("desember", 12),
];

/// Parse a period label into a calendar date, or `None` if it is not one.
///
/// Month-level labels map to the first of the month, bare years to 1 January.
pub fn parse_observation_date(raw: &str) -> Option<NaiveDate> {
    let text = raw.trim();
    if text.is_empty() {
        return None;
    }

    if let Ok(dt) = NaiveDateTime::parse_from_str(text, "%Y-%m-%d %H:%M:%S") {
        return Some(dt.date());
    }

    // "01/ 2019" and similar: spacing around separators is noise.
    let compact: String = text.chars().filter(|c| !c.is_whitespace()).collect();
    FULL_DATE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDate::parse_from_str(&compact, fmt).ok())
        .or_else(|| parse_year_month(&compact))
        .or_else(|| parse_month_name(text))
        .or_else(|| parse_year(&compact))
}

fn parse_year_month(s: &str) -> Option<NaiveDate> {
    let mut parts = s.split(|c| c == '/' || c == '-' || c == '.');
    let (a, b) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || !is_digits(a) || !is_digits(b) {
        return None;
    }
    let (year, month) = match (a.len(), b.len()) {
        (4, 1..=2) => (a, b),
        (1..=2, 4) => (b, a),
        _ => return None,
    };
    NaiveDate::from_ymd_opt(year.parse().ok()?, month.parse().ok()?, 1)
}

fn parse_month_name(s: &str) -> Option<NaiveDate> {
    let mut parts = s
        .split(|c: char| c.is_whitespace() || c == '-' || c == '/')
        .filter(|p| !p.is_empty());
    let (name, year) = (parts.next()?, parts.next()?);
    if parts.next().is_some() || year.len() != 4 || !is_digits(year) {
        return None;
    }
    let name = name.trim_end_matches('.').to_lowercase();
    let month = MONTHS.iter().find(|(n, _)| *n == name).map(|(_, m)| *m)?;
    NaiveDate::from_ymd_opt(year.parse().ok()?, month, 1)
}

fn parse_year(s: &str) -> Option<NaiveDate> {
    if s.len() != 4 || !is_digits(s) {
        return None;
    }
    NaiveDate::from_ymd_opt(s.parse().ok()?, 1, 1)
}

fn is_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn raw(headers: &[&str], date_column: &str, rows: &[&[&str]]) -> RawDataset {
        RawDataset {
            region: "Aceh".to_string(),
            source: PathBuf::from("aceh.csv"),
            headers: headers.iter().map(|s| s.to_string()).collect(),
            rows: rows
                .iter()
                .map(|r| r.iter().map(|s| s.to_string()).collect())
                .collect(),
            date_column: date_column.to_string(),
        }
    }

    #[test]
    fn parses_supported_period_formats() {
        assert_eq!(parse_observation_date("2019-03-15"), Some(ymd(2019, 3, 15)));
        assert_eq!(parse_observation_date("2019/03/15"), Some(ymd(2019, 3, 15)));
        assert_eq!(parse_observation_date("03/15/2019"), Some(ymd(2019, 3, 15)));
        assert_eq!(parse_observation_date("15/03/2019"), Some(ymd(2019, 3, 15)));
        assert_eq!(parse_observation_date("2019-03"), Some(ymd(2019, 3, 1)));
        assert_eq!(parse_observation_date(" 03/ 2019 "), Some(ymd(2019, 3, 1)));
        assert_eq!(parse_observation_date("Maret 2019"), Some(ymd(2019, 3, 1)));
        assert_eq!(parse_observation_date("Mar 2019"), Some(ymd(2019, 3, 1)));
        assert_eq!(parse_observation_date("2019"), Some(ymd(2019, 1, 1)));
        assert_eq!(
            parse_observation_date("2019-03-15 00:00:00"),
            Some(ymd(2019, 3, 15))
        );
    }

    #[test]
    fn garbage_dates_are_none() {
        for s in ["", "  ", "Rata-rata", "2019-13", "13/2019", "Sumber: BPS", "19"] {
            assert_eq!(parse_observation_date(s), None, "{s:?}");
        }
    }

    #[test]
    fn trims_headers_and_renames_date_column() {
        let ds = raw(&["tahun ", " Beras "], "tahun ", &[&["2019-01", "10000"]]);
        let series = normalize(ds).unwrap();
        assert_eq!(series.fields.len(), 1);
        assert_eq!(series.fields[0].name, "Beras");
        assert_eq!(series.fields[0].kind, ColumnKind::Numeric);
        assert_eq!(series.rows[0].raw_date, "2019-01");
    }

    #[test]
    fn collision_after_trimming_is_an_error() {
        let ds = raw(&["tahun", "Beras", "Beras "], "tahun", &[&["2019", "1", "2"]]);
        match normalize(ds).unwrap_err() {
            DashboardError::DuplicateColumn(name) => assert_eq!(name, "Beras"),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn drops_undated_rows_and_sorts_stably() {
        let ds = raw(
            &["tahun", "Beras"],
            "tahun",
            &[
                &["2020-02", "3"],
                &["2020-01", "1"],
                &["", ""],
                &["2020-01", "2"],
                &["Rata-rata", "2"],
            ],
        );
        let series = normalize(ds).unwrap();
        assert_eq!(series.dropped_rows, 2);
        let beras: Vec<f64> = series
            .rows
            .iter()
            .filter_map(|r| r.values[0].as_f64())
            .collect();
        assert_eq!(beras, vec![1.0, 2.0, 3.0]);
        assert!(series
            .rows
            .windows(2)
            .all(|w| w[0].observation_date <= w[1].observation_date));
    }

    #[test]
    fn all_rows_undated_is_empty_dataset() {
        let ds = raw(&["tahun", "Beras"], "tahun", &[&["n/a", "1"], &["", ""]]);
        assert!(matches!(
            normalize(ds).unwrap_err(),
            DashboardError::EmptyDataset(_)
        ));
    }

    #[test]
    fn ragged_rows_get_one_value_per_field() {
        let ds = raw(
            &["tahun", "Beras", "Gula Pasir"],
            "tahun",
            &[&["2019-01", "1"], &["2019-02", "2", "3", "4"], &["2019-03"]],
        );
        let series = normalize(ds).unwrap();
        assert!(series.rows.iter().all(|r| r.values.len() == 2));
        assert_eq!(series.rows[0].values[1], CellValue::Missing);
        assert_eq!(series.rows[1].values[1], CellValue::Number(3.0));
        assert_eq!(series.rows[2].values, vec![CellValue::Missing, CellValue::Missing]);
        assert_eq!(series.fields[1].kind, ColumnKind::Numeric);
    }

    #[test]
    fn text_column_is_not_numeric() {
        let ds = raw(
            &["tahun", "Beras", "Catatan"],
            "tahun",
            &[&["2019-01", "10000", "ok"], &["2019-02", "", ""]],
        );
        let series = normalize(ds).unwrap();
        assert_eq!(series.fields[0].kind, ColumnKind::Numeric);
        assert_eq!(series.fields[1].kind, ColumnKind::Other);
    }
}
