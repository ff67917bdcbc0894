use std::path::Path;

use chrono::NaiveDate;

use super::commodity::resolve_commodities;
use super::filter::{filter_by_year, YearRange};
use super::loader::load_region;
use super::model::{CanonicalRow, CanonicalSeries};
use super::normalize::normalize;
use super::region::RegionDescriptor;
use super::stats::{aggregate, CommodityStat};
use crate::error::Result;

/// Load and normalize one region's file.
pub fn load_series(region: &RegionDescriptor, data_dir: &Path) -> Result<CanonicalSeries> {
    let raw = load_region(region, data_dir)?;
    let date_column = raw.date_column.clone();
    let series = normalize(raw)?;
    log::info!(
        "Loaded {}: {} rows ({} dropped), date column {date_column:?}, years {:?}",
        series.region,
        series.len(),
        series.dropped_rows,
        series.year_bounds()
    );
    Ok(series)
}

/// Prices of one commodity over time, missing values left out.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceSeries {
    pub commodity: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Chart data for the selected commodities over `rows`.
pub fn price_series(
    series: &CanonicalSeries,
    rows: &[CanonicalRow],
    selection: &[String],
) -> Vec<PriceSeries> {
    selection
        .iter()
        .filter_map(|commodity| {
            let col = series.field_index(commodity)?;
            let points = rows
                .iter()
                .filter_map(|r| Some((r.observation_date, r.values.get(col)?.as_f64()?)))
                .collect();
            Some(PriceSeries {
                commodity: commodity.clone(),
                points,
            })
        })
        .collect()
}

/// Stats and chart data of one year window and selection.
#[derive(Debug, Clone, Default)]
pub struct Summary {
    pub stats: Vec<CommodityStat>,
    pub chart: Vec<PriceSeries>,
}

/// Filter and aggregate an already resolved selection.
pub fn summarize(series: &CanonicalSeries, range: YearRange, selection: &[String]) -> Summary {
    let rows = filter_by_year(series, range);
    let stats = aggregate(series, rows, selection);
    let chart = price_series(series, rows, selection);
    log::debug!(
        "{}: {} rows in {}..={}, {} stats",
        series.region,
        rows.len(),
        range.lo,
        range.hi,
        stats.len()
    );
    Summary { stats, chart }
}

/// Everything the dashboard renders for one filter/selection state.
#[derive(Debug, Clone)]
pub struct Analysis<'a> {
    /// Filtered rows, borrowed from the series.
    pub rows: &'a [CanonicalRow],
    /// Commodities offered for selection.
    pub commodities: Vec<String>,
    pub stats: Vec<CommodityStat>,
    pub chart: Vec<PriceSeries>,
}

/// Filter, resolve commodities and aggregate.
///
/// `selection = None` selects every resolved commodity.
pub fn analyze<'a>(
    series: &'a CanonicalSeries,
    range: YearRange,
    selection: Option<&[String]>,
    priority: &[String],
) -> Result<Analysis<'a>> {
    let commodities = resolve_commodities(series, priority)?;
    let Summary { stats, chart } =
        summarize(series, range, selection.unwrap_or(commodities.as_slice()));
    Ok(Analysis {
        rows: filter_by_year(series, range),
        commodities,
        stats,
        chart,
    })
}
