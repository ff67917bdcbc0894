use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{DashboardError, Result};

/// How a region's date column is located in the parsed header.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DateColumnRule {
    /// The header must contain exactly this name.
    Exact(String),
    /// First candidate present in the header wins.
    Candidates(Vec<String>),
}

impl DateColumnRule {
    fn candidates(&self) -> &[String] {
        match self {
            DateColumnRule::Exact(name) => std::slice::from_ref(name),
            DateColumnRule::Candidates(names) => names,
        }
    }
}

/// Static description of one region's price file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDescriptor {
    pub name: String,
    /// Relative to the configured data directory unless absolute.
    pub file: PathBuf,
    /// 0-based row holding the column names; rows above it are skipped.
    #[serde(default)]
    pub header_row: usize,
    pub date_column: DateColumnRule,
}

impl RegionDescriptor {
    pub fn new(name: &str, file: &str, header_row: usize, date_column: DateColumnRule) -> Self {
        Self {
            name: name.to_string(),
            file: PathBuf::from(file),
            header_row,
            date_column,
        }
    }

    /// Pick the date column out of a parsed header.
    pub fn resolve_date_column(&self, headers: &[String]) -> Result<String> {
        self.date_column
            .candidates()
            .iter()
            .find(|candidate| headers.iter().any(|h| h == *candidate))
            .cloned()
            .ok_or_else(|| DashboardError::DateColumnNotFound {
                region: self.name.clone(),
            })
    }
}

/// Candidate names for the `tahun` column, trailing-space variant first.
fn tahun_candidates() -> DateColumnRule {
    DateColumnRule::Candidates(vec!["tahun ".to_string(), "tahun".to_string()])
}

/// The regions shipped with the dashboard.
pub fn default_regions() -> Vec<RegionDescriptor> {
    vec![
        RegionDescriptor::new("DKI Jakarta", "data dki jkt.csv", 0, tahun_candidates()),
        RegionDescriptor::new("Jambi", "data jambi.csv", 0, tahun_candidates()),
        // One metadata line sits above the header in this file.
        RegionDescriptor::new(
            "Gorontalo",
            "data gorontalo.csv",
            1,
            DateColumnRule::Exact("Komoditas (Rp)".to_string()),
        ),
        RegionDescriptor::new("Aceh", "data aceh.csv", 0, tahun_candidates()),
    ]
}
