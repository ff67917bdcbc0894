use super::model::{CanonicalRow, CanonicalSeries};

// ---------------------------------------------------------------------------
// Year-range filter
// ---------------------------------------------------------------------------

/// Inclusive range of calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct YearRange {
    pub lo: i32,
    pub hi: i32,
}

impl YearRange {
    pub fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }

    /// Clamp to `(min, max)`. The result may be inverted (`lo > hi`),
    /// which selects nothing.
    pub fn clamp_to(self, (min, max): (i32, i32)) -> Self {
        Self {
            lo: self.lo.max(min),
            hi: self.hi.min(max),
        }
    }

    pub fn contains(&self, year: i32) -> bool {
        self.lo <= year && year <= self.hi
    }

    pub fn is_empty(&self) -> bool {
        self.lo > self.hi
    }
}

/// Rows of `series` whose year lies in `range`.
///
/// The series is sorted by date, so the matching rows form one contiguous
/// slice of it. Out-of-range or inverted requests give an empty slice.
pub fn filter_by_year(series: &CanonicalSeries, range: YearRange) -> &[CanonicalRow] {
    let Some(bounds) = series.year_bounds() else {
        return &[];
    };
    let range = range.clamp_to(bounds);
    if range.is_empty() {
        return &[];
    }
    let rows = series.rows.as_slice();
    let start = rows.partition_point(|r| r.year() < range.lo);
    let end = rows.partition_point(|r| r.year() <= range.hi);
    &rows[start..end.max(start)]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{CellValue, ColumnKind, Field};
    use chrono::NaiveDate;

    fn series(dates: &[(i32, u32)]) -> CanonicalSeries {
        CanonicalSeries {
            region: "Jambi".to_string(),
            fields: vec![Field {
                name: "Beras".to_string(),
                kind: ColumnKind::Numeric,
            }],
            rows: dates
                .iter()
                .enumerate()
                .map(|(i, &(y, m))| CanonicalRow {
                    observation_date: NaiveDate::from_ymd_opt(y, m, 1).unwrap(),
                    raw_date: format!("{y}-{m:02}"),
                    values: vec![CellValue::Number(i as f64)],
                })
                .collect(),
            dropped_rows: 0,
        }
    }

    fn years(rows: &[CanonicalRow]) -> Vec<i32> {
        rows.iter().map(|r| r.year()).collect()
    }

    #[test]
    fn keeps_inclusive_year_window_in_order() {
        let s = series(&[(2018, 12), (2019, 1), (2019, 6), (2020, 1), (2021, 3)]);
        let rows = filter_by_year(&s, YearRange::new(2019, 2020));
        assert_eq!(years(rows), vec![2019, 2019, 2020]);
        assert_eq!(rows[0].values[0], CellValue::Number(1.0));
    }

    #[test]
    fn clamps_requests_outside_the_series() {
        let s = series(&[(2019, 1), (2020, 1)]);
        assert_eq!(filter_by_year(&s, YearRange::new(1990, 2100)).len(), 2);
        assert!(filter_by_year(&s, YearRange::new(2030, 2040)).is_empty());
        assert!(filter_by_year(&s, YearRange::new(2010, 2015)).is_empty());
    }

    #[test]
    fn inverted_range_is_empty_not_an_error() {
        let s = series(&[(2019, 1), (2020, 1)]);
        assert!(filter_by_year(&s, YearRange::new(2020, 2019)).is_empty());
    }

    #[test]
    fn output_is_a_subsequence_of_the_input() {
        let s = series(&[(2018, 1), (2019, 1), (2019, 2), (2020, 1)]);
        let rows = filter_by_year(&s, YearRange::new(2019, 2019));
        let start = s.rows.iter().position(|r| r == &rows[0]).unwrap();
        assert_eq!(&s.rows[start..start + rows.len()], rows);
    }
}
