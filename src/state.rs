use crate::config::DashboardConfig;
use crate::data::commodity::resolve_commodities;
use crate::data::filter::{filter_by_year, YearRange};
use crate::data::model::{CanonicalRow, CanonicalSeries};
use crate::data::pipeline::{load_series, summarize, PriceSeries};
use crate::data::stats::CommodityStat;

// ---------------------------------------------------------------------------
// Loaded region cache
// ---------------------------------------------------------------------------

/// Normalized series of the currently selected region.
///
/// Kept across filter and selection changes; replaced when the region
/// changes.
pub struct LoadedRegion {
    pub series: CanonicalSeries,
    pub year_bounds: (i32, i32),
    /// Commodities offered for selection, resolved once per load.
    pub commodities: Vec<String>,
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: DashboardConfig,

    /// Selected region name.
    pub region: String,

    /// Cached series for `region` (None until loaded or after a failure).
    pub loaded: Option<LoadedRegion>,

    /// Inclusive year window.
    pub year_range: YearRange,

    /// Selected commodities, in the order they were picked.
    pub selected: Vec<String>,

    /// Whether the filtered raw table is shown.
    pub show_table: bool,

    /// Summary for the current window and selection (cached).
    pub stats: Vec<CommodityStat>,

    /// Chart data for the current window and selection (cached).
    pub chart: Vec<PriceSeries>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Build the state and load the first configured region.
    pub fn new(config: DashboardConfig) -> Self {
        let region = config.region_names().next().unwrap_or_default().to_string();
        let mut state = Self {
            config,
            region: String::new(),
            loaded: None,
            year_range: YearRange::new(0, 0),
            selected: Vec::new(),
            show_table: false,
            stats: Vec::new(),
            chart: Vec::new(),
            status_message: None,
        };
        state.select_region(&region);
        state
    }

    /// Switch region: drop the cached series and load the new one.
    /// Selecting the already loaded region is a no-op.
    pub fn select_region(&mut self, name: &str) {
        if self.region == name && self.loaded.is_some() {
            log::debug!("{name}: using cached series");
            return;
        }
        self.region = name.to_string();
        self.loaded = None;
        self.selected.clear();
        self.stats.clear();
        self.chart.clear();

        match self.load(name) {
            Ok(loaded) => {
                self.year_range = YearRange::new(loaded.year_bounds.0, loaded.year_bounds.1);
                self.selected = loaded.commodities.clone();
                self.loaded = Some(loaded);
                self.status_message = None;
                self.refresh();
            }
            Err(e) => {
                log::error!("Failed to load {name}: {e:#}");
                self.status_message = Some(format!("Error: {e:#}"));
            }
        }
    }

    fn load(&self, name: &str) -> anyhow::Result<LoadedRegion> {
        let descriptor = self.config.region(name)?;
        let series = load_series(descriptor, &self.config.data_dir)?;
        let year_bounds = series
            .year_bounds()
            .ok_or_else(|| anyhow::anyhow!("{name}: series has no rows"))?;
        let commodities = resolve_commodities(&series, &self.config.commodities)?;
        Ok(LoadedRegion {
            series,
            year_bounds,
            commodities,
        })
    }

    /// Recompute stats and chart data after a filter or selection change.
    ///
    /// Commodities were resolved at load time; only the window is redone.
    pub fn refresh(&mut self) {
        let Some(loaded) = &self.loaded else {
            return;
        };
        let summary = summarize(&loaded.series, self.year_range, &self.selected);
        self.stats = summary.stats;
        self.chart = summary.chart;
    }

    pub fn set_year_range(&mut self, lo: i32, hi: i32) {
        let range = YearRange::new(lo, hi);
        if range != self.year_range {
            self.year_range = range;
            self.refresh();
        }
    }

    /// Toggle one commodity; newly picked ones go to the end.
    pub fn toggle_commodity(&mut self, commodity: &str) {
        if let Some(pos) = self.selected.iter().position(|c| c == commodity) {
            self.selected.remove(pos);
        } else {
            self.selected.push(commodity.to_string());
        }
        self.refresh();
    }

    /// Select every offered commodity.
    pub fn select_all(&mut self) {
        if let Some(loaded) = &self.loaded {
            self.selected = loaded.commodities.clone();
            self.refresh();
        }
    }

    /// Deselect every commodity.
    pub fn select_none(&mut self) {
        self.selected.clear();
        self.refresh();
    }

    /// Rows of the current year window.
    pub fn visible_rows(&self) -> &[CanonicalRow] {
        match &self.loaded {
            Some(loaded) => filter_by_year(&loaded.series, self.year_range),
            None => &[],
        }
    }
}
