use std::fmt;
use std::path::PathBuf;

use chrono::{Datelike, NaiveDate};

// ---------------------------------------------------------------------------
// CellValue – a single cell of the price table
// ---------------------------------------------------------------------------

/// A loosely typed cell as read from the CSV file.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Missing,
}

impl CellValue {
    /// Classify a raw CSV field.
    ///
    /// Numbers may carry comma thousands separators (`"12,500"`); the dot is
    /// always the decimal point. Empty fields, `-`, `nan` and non-finite
    /// numbers are treated as missing.
    pub fn parse(raw: &str) -> Self {
        let s = raw.trim();
        if s.is_empty() || s == "-" || s.eq_ignore_ascii_case("nan") {
            return CellValue::Missing;
        }
        let digits = s.replace(',', "");
        match digits.parse::<f64>() {
            Ok(v) if v.is_finite() => CellValue::Number(v),
            Ok(_) => CellValue::Missing,
            Err(_) => CellValue::Text(s.to_string()),
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            CellValue::Number(v) => Some(*v),
            _ => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

impl fmt::Display for CellValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CellValue::Number(v) => write!(f, "{v}"),
            CellValue::Text(s) => write!(f, "{s}"),
            CellValue::Missing => write!(f, ""),
        }
    }
}

// ---------------------------------------------------------------------------
// RawDataset – loader output
// ---------------------------------------------------------------------------

/// The table exactly as read from disk, before any cleaning.
#[derive(Debug, Clone)]
pub struct RawDataset {
    /// Region the file belongs to (used in error messages).
    pub region: String,
    pub source: PathBuf,
    /// Header names, untrimmed.
    pub headers: Vec<String>,
    /// Data rows as raw strings. The loader pads them to `headers.len()`;
    /// the normalizer does not rely on it.
    pub rows: Vec<Vec<String>>,
    /// Header name (as found in `headers`) holding the observation period.
    pub date_column: String,
}

impl RawDataset {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

// ---------------------------------------------------------------------------
// Canonical series – normalizer output
// ---------------------------------------------------------------------------

/// Type of a non-date column, decided once over the canonical rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    /// Every present value is a number (and at least one is present).
    Numeric,
    /// Anything else: text, mixed, or entirely empty.
    Other,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Field {
    pub name: String,
    pub kind: ColumnKind,
}

/// One record with a definite observation date.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalRow {
    pub observation_date: NaiveDate,
    /// Original text of the date column (`tahun_raw`).
    pub raw_date: String,
    /// One value per entry of [`CanonicalSeries::fields`].
    pub values: Vec<CellValue>,
}

impl CanonicalRow {
    pub fn year(&self) -> i32 {
        self.observation_date.year()
    }
}

/// The validated, chronologically sorted series for one region load.
#[derive(Debug, Clone, PartialEq)]
pub struct CanonicalSeries {
    pub region: String,
    /// Non-date columns, in file order, with trimmed names.
    pub fields: Vec<Field>,
    /// Sorted by `observation_date`, ties in input order.
    pub rows: Vec<CanonicalRow>,
    /// Rows removed because their date did not parse.
    pub dropped_rows: usize,
}

impl CanonicalSeries {
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Position of a field by (trimmed) name.
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.name == name)
    }

    pub fn field_names(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|f| f.name.as_str())
    }

    /// `(first year, last year)` covered by the series.
    pub fn year_bounds(&self) -> Option<(i32, i32)> {
        let first = self.rows.first()?.year();
        let last = self.rows.last()?.year();
        Some((first, last))
    }
}
