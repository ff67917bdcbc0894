use std::collections::HashSet;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::data::commodity::DEFAULT_COMMODITIES;
use crate::data::region::{default_regions, DateColumnRule, RegionDescriptor};
use crate::error::{DashboardError, Result};

/// Optional override file, looked up in the working directory.
pub const CONFIG_FILE: &str = "dashboard.json";

/// Static dashboard configuration, immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    /// Directory the region files are resolved against.
    pub data_dir: PathBuf,
    /// Currency label used when formatting prices.
    pub currency: String,
    /// Known commodity names, in display priority.
    pub commodities: Vec<String>,
    /// Regions offered in the selector, in display order.
    pub regions: Vec<RegionDescriptor>,
    /// Picture shown above the charts when the file exists.
    pub illustration: Option<PathBuf>,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("."),
            currency: "Rp".to_string(),
            commodities: DEFAULT_COMMODITIES.iter().map(|s| s.to_string()).collect(),
            regions: default_regions(),
            illustration: Some(PathBuf::from("foto/foto.jpg")),
        }
    }
}

impl DashboardConfig {
    /// Read `path` if it exists, otherwise use the defaults.
    pub fn load_or_default(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::info!("{} not found, using built-in configuration", path.display());
            return Ok(Self::default());
        }
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config: Self = serde_json::from_str(&text)
            .with_context(|| format!("parsing {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("validating {}", path.display()))?;
        log::info!(
            "Loaded configuration from {} ({} regions)",
            path.display(),
            config.regions.len()
        );
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if self.regions.is_empty() {
            return Err(DashboardError::Configuration(
                "at least one region must be configured".to_string(),
            ));
        }
        let mut names = HashSet::new();
        for region in &self.regions {
            if !names.insert(region.name.as_str()) {
                return Err(DashboardError::Configuration(format!(
                    "region '{}' is listed twice",
                    region.name
                )));
            }
            if let DateColumnRule::Candidates(list) = &region.date_column {
                if list.is_empty() {
                    return Err(DashboardError::Configuration(format!(
                        "region '{}' has no date column candidates",
                        region.name
                    )));
                }
            }
        }
        Ok(())
    }

    pub fn region(&self, name: &str) -> Result<&RegionDescriptor> {
        self.regions
            .iter()
            .find(|r| r.name == name)
            .ok_or_else(|| DashboardError::UnknownRegion(name.to_string()))
    }

    pub fn region_names(&self) -> impl Iterator<Item = &str> {
        self.regions.iter().map(|r| r.name.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = DashboardConfig::default();
        config.validate().unwrap();
        let names: Vec<&str> = config.region_names().collect();
        assert_eq!(names, vec!["DKI Jakarta", "Jambi", "Gorontalo", "Aceh"]);
        assert_eq!(config.region("Gorontalo").unwrap().header_row, 1);
    }

    #[test]
    fn partial_json_fills_in_defaults() {
        let config: DashboardConfig = serde_json::from_str(
            r#"{
                "data_dir": "data",
                "regions": [
                    { "name": "Bali", "file": "bali.csv", "date_column": { "exact": "Periode" } }
                ]
            }"#,
        )
        .unwrap();
        assert_eq!(config.currency, "Rp");
        assert_eq!(config.commodities.len(), DEFAULT_COMMODITIES.len());
        assert_eq!(config.regions[0].header_row, 0);
        assert!(matches!(
            config.region("Aceh"),
            Err(DashboardError::UnknownRegion(_))
        ));
    }

    #[test]
    fn duplicate_regions_are_rejected() {
        let mut config = DashboardConfig::default();
        config.regions.push(config.regions[0].clone());
        assert!(matches!(
            config.validate(),
            Err(DashboardError::Configuration(_))
        ));
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = DashboardConfig::load_or_default(&dir.path().join(CONFIG_FILE)).unwrap();
        assert_eq!(config, DashboardConfig::default());
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(CONFIG_FILE);
        std::fs::write(&path, "{ not json").unwrap();
        let err = DashboardConfig::load_or_default(&path).unwrap_err();
        assert!(format!("{err:#}").contains("parsing"));
    }
}
