use super::model::{CanonicalRow, CanonicalSeries};

/// Summary of one commodity over the filter window.
#[derive(Debug, Clone, PartialEq)]
pub struct CommodityStat {
    pub commodity: String,
    /// Number of non-missing observations the figures are based on.
    pub observations: usize,
    pub mean: f64,
    pub max: f64,
    pub min: f64,
    pub first_value: f64,
    pub last_value: f64,
    /// `(last - first) / first * 100`; NaN when `first_value` is zero.
    pub percent_change: f64,
}

impl CommodityStat {
    /// Build the summary from chronologically ordered prices.
    /// `None` when there are no prices.
    pub fn from_values(commodity: &str, values: &[f64]) -> Option<Self> {
        let (&first_value, &last_value) = (values.first()?, values.last()?);
        let mean = values.iter().sum::<f64>() / values.len() as f64;
        let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        let min = values.iter().copied().fold(f64::INFINITY, f64::min);
        let percent_change = if first_value == 0.0 {
            f64::NAN
        } else {
            (last_value - first_value) / first_value * 100.0
        };
        Some(Self {
            commodity: commodity.to_string(),
            observations: values.len(),
            mean,
            max,
            min,
            first_value,
            last_value,
            percent_change,
        })
    }

    pub fn has_percent_change(&self) -> bool {
        !self.percent_change.is_nan()
    }
}

/// Non-missing prices of `commodity` across `rows`, in row order.
pub fn commodity_values(series: &CanonicalSeries, rows: &[CanonicalRow], commodity: &str) -> Vec<f64> {
    let Some(col) = series.field_index(commodity) else {
        return Vec::new();
    };
    rows.iter()
        .filter_map(|r| r.values.get(col).and_then(|v| v.as_f64()))
        .collect()
}

/// One [`CommodityStat`] per selected commodity that has data in `rows`,
/// in selection order. Commodities without any price are left out.
pub fn aggregate(
    series: &CanonicalSeries,
    rows: &[CanonicalRow],
    selection: &[String],
) -> Vec<CommodityStat> {
    selection
        .iter()
        .filter_map(|commodity| {
            let values = commodity_values(series, rows, commodity);
            let stat = CommodityStat::from_values(commodity, &values);
            if stat.is_none() {
                log::warn!("{commodity}: no prices in the selected period");
            }
            stat
        })
        .collect()
}
