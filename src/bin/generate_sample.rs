use std::path::Path;

use anyhow::{Context, Result};
use csv::WriterBuilder;

use pangan_dashboard::config::DashboardConfig;
use pangan_dashboard::data::loader::region_path;
use pangan_dashboard::data::region::{DateColumnRule, RegionDescriptor};

const FIRST_YEAR: i32 = 2019;
const LAST_YEAR: i32 = 2023;

const BULAN: [&str; 12] = [
    "Januari", "Februari", "Maret", "April", "Mei", "Juni", "Juli", "Agustus", "September",
    "Oktober", "November", "Desember",
];

/// (commodity, base price in Rp, monthly drift, relative volatility)
const COMMODITIES: [(&str, f64, f64, f64); 7] = [
    ("Beras", 11_500.0, 0.003, 0.01),
    ("Daging Ayam", 34_000.0, 0.002, 0.04),
    ("Daging Sapi", 118_000.0, 0.002, 0.01),
    ("Bawang Merah", 32_000.0, 0.001, 0.12),
    ("Cabai Rawit", 45_000.0, 0.001, 0.20),
    ("Minyak Goreng", 13_500.0, 0.004, 0.03),
    ("Gula Pasir", 13_000.0, 0.003, 0.01),
];

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

/// Period label in the style each region's file uses.
fn period_label(region: &str, year: i32, month: usize) -> String {
    match region {
        "DKI Jakarta" => format!("{:02}/ {year}", month + 1),
        "Jambi" => format!("{year}-{:02}-01", month + 1),
        "Gorontalo" => format!("{} {year}", BULAN[month]),
        _ => format!("{year}-{:02}", month + 1),
    }
}

/// Header name for the date column, taken from the region's rule.
fn date_header(region: &RegionDescriptor) -> String {
    match &region.date_column {
        DateColumnRule::Exact(name) => name.clone(),
        // Aceh's file carries the stray trailing space.
        DateColumnRule::Candidates(names) if region.name == "Aceh" => {
            names.first().cloned().unwrap_or_default()
        }
        DateColumnRule::Candidates(names) => names.last().cloned().unwrap_or_default(),
    }
}

fn write_region(region: &RegionDescriptor, path: &Path, rng: &mut SimpleRng) -> Result<usize> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    let mut writer = WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for row in 0..region.header_row {
        let title = format!("Harga Rata-rata Konsumen Provinsi {} (baris {row})", region.name);
        writer.write_record([title])?;
    }

    let mut header = vec![date_header(region)];
    header.extend(COMMODITIES.iter().map(|(name, ..)| name.to_string()));
    writer.write_record(&header)?;

    let mut prices: Vec<f64> = COMMODITIES
        .iter()
        .map(|&(_, base, ..)| base * rng.gauss(1.0, 0.05))
        .collect();
    let mut rows = 0;
    for year in FIRST_YEAR..=LAST_YEAR {
        for month in 0..12 {
            let mut record = vec![period_label(&region.name, year, month)];
            for (price, &(_, _, drift, vol)) in prices.iter_mut().zip(COMMODITIES.iter()) {
                *price *= 1.0 + drift + rng.gauss(0.0, vol / 3.0);
                // Roughly one reading in forty is missing.
                if rng.next_f64() < 0.025 {
                    record.push(String::new());
                } else {
                    record.push(format!("{:.0}", (*price / 50.0).round() * 50.0));
                }
            }
            writer.write_record(&record)?;
            rows += 1;
        }
    }

    // Spreadsheet exports usually end with blank rows.
    for _ in 0..2 {
        writer.write_record(vec![""; header.len()])?;
    }
    writer.flush()?;
    Ok(rows)
}

fn main() -> Result<()> {
    let config = DashboardConfig::default();
    let mut rng = SimpleRng::new(42);

    for region in &config.regions {
        let path = region_path(region, &config.data_dir);
        let rows = write_region(region, &path, &mut rng)?;
        println!("Wrote {rows} monthly rows for {} to {}", region.name, path.display());
    }
    Ok(())
}
