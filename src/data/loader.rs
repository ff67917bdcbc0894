use std::path::{Path, PathBuf};

use csv::ReaderBuilder;

use super::model::RawDataset;
use super::region::RegionDescriptor;
use crate::error::{DashboardError, Result};

// ---------------------------------------------------------------------------
// Public entry-point
// ---------------------------------------------------------------------------

/// Resolve a region's file inside `data_dir`.
pub fn region_path(region: &RegionDescriptor, data_dir: &Path) -> PathBuf {
    if region.file.is_absolute() {
        region.file.clone()
    } else {
        data_dir.join(&region.file)
    }
}

/// Read a region's CSV file into a [`RawDataset`].
///
/// Rows above `header_row` are skipped, the header row names the columns,
/// and the date column is picked according to the region's rule.
pub fn load_region(region: &RegionDescriptor, data_dir: &Path) -> Result<RawDataset> {
    let path = region_path(region, data_dir);
    if !path.exists() {
        return Err(DashboardError::FileNotFound(path));
    }

    // Metadata lines above the header rarely have the full column count.
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(&path)?;

    let mut records = reader.records();
    for _ in 0..region.header_row {
        if records.next().transpose()?.is_none() {
            return Err(DashboardError::EmptyDataset(format!(
                "'{}' ends before header row {}",
                path.display(),
                region.header_row
            )));
        }
    }

    let header = records.next().transpose()?.ok_or_else(|| {
        DashboardError::EmptyDataset(format!("'{}' has no header row", path.display()))
    })?;
    let headers: Vec<String> = header
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if name.trim().is_empty() {
                format!("Unnamed: {idx}")
            } else {
                name.to_string()
            }
        })
        .collect();

    let mut rows = Vec::new();
    for result in records {
        let record = result?;
        let mut row: Vec<String> = record.iter().map(|v| v.to_string()).collect();
        if row.len() > headers.len() {
            // Blank trailing cells are spreadsheet padding; anything else is data.
            if row[headers.len()..].iter().any(|v| !v.trim().is_empty()) {
                return Err(DashboardError::RowTooLong {
                    line: record.position().map_or(0, |p| p.line()),
                    expected: headers.len(),
                    found: row.len(),
                });
            }
            log::debug!(
                "{}: dropping {} blank trailing cells",
                path.display(),
                row.len() - headers.len()
            );
        }
        row.resize(headers.len(), String::new());
        rows.push(row);
    }

    if rows.is_empty() {
        return Err(DashboardError::EmptyDataset(format!(
            "'{}' contains no data rows",
            path.display()
        )));
    }

    let date_column = region.resolve_date_column(&headers)?;

    log::debug!(
        "Read {} rows from {} (date column {date_column:?})",
        rows.len(),
        path.display()
    );

    Ok(RawDataset {
        region: region.name.clone(),
        source: path,
        headers,
        rows,
        date_column,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::region::DateColumnRule;

    fn write(dir: &Path, name: &str, content: &str) {
        std::fs::write(dir.join(name), content).unwrap();
    }

    fn tahun_region(file: &str) -> RegionDescriptor {
        RegionDescriptor::new(
            "Aceh",
            file,
            0,
            DateColumnRule::Candidates(vec!["tahun ".into(), "tahun".into()]),
        )
    }

    #[test]
    fn missing_file_is_reported_with_its_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = load_region(&tahun_region("nope.csv"), dir.path()).unwrap_err();
        match err {
            DashboardError::FileNotFound(p) => assert!(p.ends_with("nope.csv")),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn header_only_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "tahun,Beras\n");
        let err = load_region(&tahun_region("a.csv"), dir.path()).unwrap_err();
        assert!(matches!(err, DashboardError::EmptyDataset(_)));
    }

    #[test]
    fn skips_metadata_rows_above_header() {
        let dir = tempfile::tempdir().unwrap();
        write(
            dir.path(),
            "g.csv",
            "Harga Konsumen Gorontalo\nKomoditas (Rp),Beras,Gula Pasir\nJanuari 2020,11000,14000\n",
        );
        let region = RegionDescriptor::new(
            "Gorontalo",
            "g.csv",
            1,
            DateColumnRule::Exact("Komoditas (Rp)".into()),
        );
        let raw = load_region(&region, dir.path()).unwrap();
        assert_eq!(raw.headers, vec!["Komoditas (Rp)", "Beras", "Gula Pasir"]);
        assert_eq!(raw.date_column, "Komoditas (Rp)");
        assert_eq!(raw.len(), 1);
    }

    #[test]
    fn short_rows_are_padded_and_blank_headers_named() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "tahun,Beras,\n2020-01,10000\n");
        let raw = load_region(&tahun_region("a.csv"), dir.path()).unwrap();
        assert_eq!(raw.headers[2], "Unnamed: 2");
        assert_eq!(raw.rows[0], vec!["2020-01", "10000", ""]);
    }

    #[test]
    fn blank_trailing_cells_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "tahun,Beras\n2019-01,1,, \n");
        let raw = load_region(&tahun_region("a.csv"), dir.path()).unwrap();
        assert_eq!(raw.rows[0], vec!["2019-01", "1"]);
    }

    #[test]
    fn extra_data_cells_are_rejected() {
        let dir = tempfile::tempdir().unwrap();
        write(dir.path(), "a.csv", "tahun,Beras\n2019-01,1\n2019-02,1,999\n");
        match load_region(&tahun_region("a.csv"), dir.path()).unwrap_err() {
            DashboardError::RowTooLong {
                line,
                expected,
                found,
            } => {
                assert_eq!(line, 3);
                assert_eq!(expected, 2);
                assert_eq!(found, 3);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
