use super::model::{CanonicalSeries, ColumnKind};
use crate::error::{DashboardError, Result};

/// Staple commodities tracked by default, in display priority.
pub const DEFAULT_COMMODITIES: &[&str] = &[
    "Beras",
    "Daging Ayam",
    "Daging Sapi",
    "Bawang Merah",
    "Cabai Rawit",
    "Minyak Goreng",
    "Gula Pasir",
];

/// Decide which fields of `series` are offered as commodities.
///
/// Known names present in the series win, in `priority` order. Otherwise
/// every numeric field is used, in column order.
pub fn resolve_commodities(series: &CanonicalSeries, priority: &[String]) -> Result<Vec<String>> {
    let known: Vec<String> = priority
        .iter()
        .filter(|name| series.field_index(name).is_some())
        .cloned()
        .collect();
    if !known.is_empty() {
        return Ok(known);
    }

    let numeric: Vec<String> = series
        .fields
        .iter()
        .filter(|f| f.kind == ColumnKind::Numeric)
        .map(|f| f.name.clone())
        .collect();
    if numeric.is_empty() {
        return Err(DashboardError::NoCommodityColumns);
    }
    log::info!(
        "{}: no known commodity columns, falling back to numeric columns {numeric:?}",
        series.region
    );
    Ok(numeric)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::Field;

    fn series(fields: &[(&str, ColumnKind)]) -> CanonicalSeries {
        CanonicalSeries {
            region: "Aceh".to_string(),
            fields: fields
                .iter()
                .map(|(name, kind)| Field {
                    name: name.to_string(),
                    kind: *kind,
                })
                .collect(),
            rows: Vec::new(),
            dropped_rows: 0,
        }
    }

    fn defaults() -> Vec<String> {
        DEFAULT_COMMODITIES.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn known_names_follow_priority_order() {
        let s = series(&[
            ("Gula Pasir", ColumnKind::Numeric),
            ("Telur", ColumnKind::Numeric),
            ("Beras", ColumnKind::Numeric),
        ]);
        let found = resolve_commodities(&s, &defaults()).unwrap();
        assert_eq!(found, vec!["Beras", "Gula Pasir"]);
        assert_eq!(resolve_commodities(&s, &defaults()).unwrap(), found);
    }

    #[test]
    fn falls_back_to_numeric_columns_in_column_order() {
        let s = series(&[
            ("Telur", ColumnKind::Numeric),
            ("Keterangan", ColumnKind::Other),
            ("Jagung", ColumnKind::Numeric),
        ]);
        let found = resolve_commodities(&s, &defaults()).unwrap();
        assert_eq!(found, vec!["Telur", "Jagung"]);
    }

    #[test]
    fn no_numeric_columns_is_an_error() {
        let s = series(&[("Keterangan", ColumnKind::Other)]);
        assert!(matches!(
            resolve_commodities(&s, &defaults()),
            Err(DashboardError::NoCommodityColumns)
        ));
    }
}
