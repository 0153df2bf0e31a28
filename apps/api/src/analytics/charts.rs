//! Bar charts for the analytics pages.
//!
//! Building a `ChartSpec` is pure. Rasterizing happens in `ChartRenderer`, which only
//! rewrites the PNG files when the data behind them has changed since the last render.

use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use plotters::prelude::*;
use serde::Serialize;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::analytics::metrics::{format_amount, growth};
use crate::models::catalog::Branch;

const WIDTH: u32 = 1000;
const HEIGHT: u32 = 600;
const MARGIN: i32 = 40;
/// Share of each label slot covered by bars.
const GROUP_FILL: f64 = 0.7;

const COLOR_2024: &str = "#3498db";
const COLOR_2026: &str = "#e74c3c";
const SALARY_PALETTE: [&str; 6] = [
    "#2ecc71", "#3498db", "#9b59b6", "#e67e22", "#1abc9c", "#e74c3c",
];
const GROWTH_UP: &str = "#27ae60";
const GROWTH_DOWN: &str = "#c0392b";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ChartKind {
    Placement,
    Salary,
    Growth,
}

impl ChartKind {
    pub fn file_name(&self) -> &'static str {
        match self {
            ChartKind::Placement => "placement_chart.png",
            ChartKind::Salary => "salary_chart.png",
            ChartKind::Growth => "growth_chart.png",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Series {
    pub name: String,
    pub values: Vec<f64>,
    /// One hex colour per bar.
    pub colors: Vec<&'static str>,
    /// Text annotation per bar, e.g. "88%" or "+3.0%".
    pub value_labels: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub title: &'static str,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub labels: Vec<String>,
    pub series: Vec<Series>,
}

fn names(branches: &[Branch]) -> Vec<String> {
    branches.iter().map(|b| b.name.clone()).collect()
}

/// 2024 vs 2026 placement rates, grouped per branch. `None` for an empty collection.
pub fn placement_chart(branches: &[Branch]) -> Option<ChartSpec> {
    if branches.is_empty() {
        return None;
    }
    let series = |name: &str, color: &'static str, pick: fn(&Branch) -> i32| Series {
        name: name.to_string(),
        values: branches.iter().map(|b| f64::from(pick(b))).collect(),
        colors: vec![color; branches.len()],
        value_labels: branches.iter().map(|b| format!("{}%", pick(b))).collect(),
    };
    Some(ChartSpec {
        kind: ChartKind::Placement,
        title: "Placement Rates: 2024 vs 2026",
        x_label: "Engineering Branches",
        y_label: "Placement Percentage (%)",
        labels: names(branches),
        series: vec![
            series("2024", COLOR_2024, |b| b.placement_2024),
            series("2026", COLOR_2026, |b| b.placement_2026),
        ],
    })
}

pub fn salary_chart(branches: &[Branch]) -> Option<ChartSpec> {
    if branches.is_empty() {
        return None;
    }
    Some(ChartSpec {
        kind: ChartKind::Salary,
        title: "Average Salary Package 2024",
        x_label: "Engineering Branches",
        y_label: "Salary (Lakhs per Annum)",
        labels: names(branches),
        series: vec![Series {
            name: "2024".to_string(),
            values: branches.iter().map(|b| b.salary_2024).collect(),
            colors: (0..branches.len())
                .map(|i| SALARY_PALETTE[i % SALARY_PALETTE.len()])
                .collect(),
            value_labels: branches
                .iter()
                .map(|b| format!("₹{}L", format_amount(b.salary_2024)))
                .collect(),
        }],
    })
}

pub fn growth_chart(branches: &[Branch]) -> Option<ChartSpec> {
    if branches.is_empty() {
        return None;
    }
    let growths: Vec<i32> = branches.iter().map(growth).collect();
    Some(ChartSpec {
        kind: ChartKind::Growth,
        title: "Placement Growth: 2024 to 2026",
        x_label: "Engineering Branches",
        y_label: "Growth (%)",
        labels: names(branches),
        series: vec![Series {
            name: "growth".to_string(),
            values: growths.iter().map(|&g| f64::from(g)).collect(),
            colors: growths
                .iter()
                .map(|&g| if g > 0 { GROWTH_UP } else { GROWTH_DOWN })
                .collect(),
            value_labels: growths
                .iter()
                .map(|&g| format!("{:+.1}%", f64::from(g)))
                .collect(),
        }],
    })
}

/// Every chart that has data to show.
pub fn chart_specs(branches: &[Branch]) -> Vec<ChartSpec> {
    [placement_chart, salary_chart, growth_chart]
        .iter()
        .filter_map(|build| build(branches))
        .collect()
}

/// Public paths of the rendered charts; `None` when a chart is unavailable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ChartFiles {
    pub placement_chart: Option<String>,
    pub salary_chart: Option<String>,
    pub growth_chart: Option<String>,
}

impl ChartFiles {
    fn from_specs(specs: &[ChartSpec]) -> Self {
        let mut files = ChartFiles::default();
        for spec in specs {
            let url = Some(format!("/media/{}", spec.kind.file_name()));
            match spec.kind {
                ChartKind::Placement => files.placement_chart = url,
                ChartKind::Salary => files.salary_chart = url,
                ChartKind::Growth => files.growth_chart = url,
            }
        }
        files
    }
}

/// Writes charts to the media directory on demand.
pub struct ChartRenderer {
    media_root: PathBuf,
    /// Specs currently on disk. Also serializes writers of the fixed file names.
    rendered: Mutex<Option<Vec<ChartSpec>>>,
}

impl ChartRenderer {
    pub fn new(media_root: impl Into<PathBuf>) -> Self {
        Self {
            media_root: media_root.into(),
            rendered: Mutex::new(None),
        }
    }

    #[cfg(test)]
    pub fn media_root(&self) -> &Path {
        &self.media_root
    }

    /// Renders the charts for `branches` unless identical ones are already on disk.
    /// Failures are logged and reported as missing charts.
    pub async fn ensure_rendered(&self, branches: &[Branch]) -> ChartFiles {
        let specs = chart_specs(branches);
        if specs.is_empty() {
            return ChartFiles::default();
        }

        let mut rendered = self.rendered.lock().await;
        let on_disk = specs
            .iter()
            .all(|s| self.media_root.join(s.kind.file_name()).exists());
        if on_disk && rendered.as_ref() == Some(&specs) {
            debug!("Charts up to date, skipping render");
            return ChartFiles::from_specs(&specs);
        }

        let root = self.media_root.clone();
        let to_render = specs.clone();
        match tokio::task::spawn_blocking(move || render_all(&root, &to_render)).await {
            Ok(Ok(())) => {
                debug!("Rendered {} charts into {}", specs.len(), self.media_root.display());
                *rendered = Some(specs.clone());
                ChartFiles::from_specs(&specs)
            }
            Ok(Err(e)) => {
                warn!("Chart rendering failed: {e:#}");
                *rendered = None;
                ChartFiles::default()
            }
            Err(e) => {
                warn!("Chart rendering task panicked: {e}");
                *rendered = None;
                ChartFiles::default()
            }
        }
    }
}

fn render_all(root: &Path, specs: &[ChartSpec]) -> Result<()> {
    std::fs::create_dir_all(root)
        .with_context(|| format!("creating media directory {}", root.display()))?;
    for spec in specs {
        render_chart(&root.join(spec.kind.file_name()), spec)?;
    }
    Ok(())
}

fn parse_hex(hex: &str) -> Result<RGBColor> {
    let digits = hex.trim_start_matches('#');
    if digits.len() != 6 {
        return Err(anyhow!("invalid colour '{hex}'"));
    }
    let channel = |i: usize| -> Result<u8> {
        let pair = digits
            .get(i..i + 2)
            .with_context(|| format!("invalid colour '{hex}'"))?;
        u8::from_str_radix(pair, 16).with_context(|| format!("invalid colour '{hex}'"))
    };
    Ok(RGBColor(channel(0)?, channel(2)?, channel(4)?))
}

/// Draws plain bars with a zero baseline. Text stays in the JSON spec.
fn render_chart(path: &Path, spec: &ChartSpec) -> Result<()> {
    let area = BitMapBackend::new(path, (WIDTH, HEIGHT)).into_drawing_area();
    area.fill(&WHITE).map_err(|e| anyhow!("{e}"))?;

    let values = spec.series.iter().flat_map(|s| s.values.iter().copied());
    let lo = values.clone().fold(0.0_f64, f64::min);
    let mut hi = values.fold(0.0_f64, f64::max);
    if hi <= lo {
        hi = lo + 1.0;
    }

    let left = MARGIN;
    let right = WIDTH as i32 - MARGIN;
    let top = MARGIN;
    let bottom = HEIGHT as i32 - MARGIN;
    let plot_h = f64::from(bottom - top);
    let y_of = |v: f64| bottom - ((v - lo) / (hi - lo) * plot_h).round() as i32;

    let slots = spec.labels.len().max(1);
    let slot_w = f64::from(right - left) / slots as f64;
    let bar_w = slot_w * GROUP_FILL / spec.series.len().max(1) as f64;
    let zero = y_of(0.0);

    for (s_idx, series) in spec.series.iter().enumerate() {
        for (i, (&value, color)) in series.values.iter().zip(&series.colors).enumerate() {
            let x0 = f64::from(left) + slot_w * i as f64 + slot_w * (1.0 - GROUP_FILL) / 2.0
                + bar_w * s_idx as f64;
            let x1 = x0 + bar_w;
            let y = y_of(value);
            area.draw(&Rectangle::new(
                [(x0.round() as i32, zero.min(y)), (x1.round() as i32, zero.max(y))],
                parse_hex(color)?.filled(),
            ))
            .map_err(|e| anyhow!("{e}"))?;
        }
    }

    area.draw(&Rectangle::new([(left, zero), (right, zero + 1)], BLACK.filled()))
        .map_err(|e| anyhow!("{e}"))?;
    area.present().map_err(|e| anyhow!("{e}"))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analytics::metrics::tests::branch;

    fn sample() -> Vec<Branch> {
        vec![
            branch(1, "Computer Science", 88, 91, 9.2),
            branch(2, "Civil", 68, 70, 5.9),
            branch(3, "Shrinking", 60, 55, 4.0),
        ]
    }

    #[test]
    fn test_empty_collection_has_no_charts() {
        assert!(placement_chart(&[]).is_none());
        assert!(salary_chart(&[]).is_none());
        assert!(growth_chart(&[]).is_none());
        assert!(chart_specs(&[]).is_empty());
    }

    #[test]
    fn test_placement_chart_has_two_series() {
        let spec = placement_chart(&sample()).unwrap();
        assert_eq!(spec.series.len(), 2);
        assert_eq!(spec.series[0].values, vec![88.0, 68.0, 60.0]);
        assert_eq!(spec.series[1].value_labels[0], "91%");
        assert_eq!(spec.labels[1], "Civil");
    }

    #[test]
    fn test_salary_labels_keep_decimal() {
        let mut branches = sample();
        branches[2].salary_2024 = 6.0;
        let spec = salary_chart(&branches).unwrap();
        assert_eq!(spec.series[0].value_labels, vec!["₹9.2L", "₹5.9L", "₹6.0L"]);
        assert_eq!(spec.series[0].colors[..3], SALARY_PALETTE[..3]);
    }

    #[test]
    fn test_growth_chart_colours_by_sign() {
        let spec = growth_chart(&sample()).unwrap();
        let series = &spec.series[0];
        assert_eq!(series.values, vec![3.0, 2.0, -5.0]);
        assert_eq!(series.colors, vec![GROWTH_UP, GROWTH_UP, GROWTH_DOWN]);
        assert_eq!(series.value_labels, vec!["+3.0%", "+2.0%", "-5.0%"]);
    }

    #[test]
    fn test_parse_hex() {
        let c = parse_hex("#3498db").unwrap();
        assert_eq!((c.0, c.1, c.2), (0x34, 0x98, 0xdb));
        assert!(parse_hex("#fff").is_err());
    }

    #[test]
    fn test_parse_hex_rejects_non_ascii_without_panicking() {
        // six bytes, but the char boundaries do not line up with the channel pairs
        assert!(parse_hex("#aé€").is_err());
        assert!(parse_hex("#ééé").is_err());
    }

    #[tokio::test]
    async fn test_ensure_rendered_writes_png_files() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(dir.path().join("media"));

        let files = renderer.ensure_rendered(&sample()).await;

        assert_eq!(files.placement_chart.as_deref(), Some("/media/placement_chart.png"));
        for kind in [ChartKind::Placement, ChartKind::Salary, ChartKind::Growth] {
            let bytes = std::fs::read(renderer.media_root().join(kind.file_name())).unwrap();
            assert_eq!(&bytes[..4], b"\x89PNG");
        }
    }

    #[tokio::test]
    async fn test_ensure_rendered_skips_unchanged_data() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(dir.path());
        renderer.ensure_rendered(&sample()).await;

        let path = dir.path().join("salary_chart.png");
        std::fs::write(&path, b"sentinel").unwrap();
        renderer.ensure_rendered(&sample()).await;
        assert_eq!(std::fs::read(&path).unwrap(), b"sentinel");

        let mut changed = sample();
        changed[0].salary_2024 = 9.9;
        renderer.ensure_rendered(&changed).await;
        assert_ne!(std::fs::read(&path).unwrap(), b"sentinel");
    }

    #[tokio::test]
    async fn test_ensure_rendered_empty_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let renderer = ChartRenderer::new(dir.path().join("media"));
        assert_eq!(renderer.ensure_rendered(&[]).await, ChartFiles::default());
        assert!(!dir.path().join("media").exists());
    }
}
