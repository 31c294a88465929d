//! SVG charts for the result page.
//!
//! Rendering is a pure function of the assessment, its category figures and
//! the totals of every stored assessment. [`ChartStore`] writes the output
//! under a directory of its own per assessment id.

mod bar;
mod histogram;
mod pie;
mod radar;
mod scatter;

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};

use color_eyre::Result;
use plotters::coord::Shift;
use plotters::prelude::*;
use plotters::style::text_anchor::Pos;

use crate::{
    models::{Catalog, Scores},
    scoring::CategoryScore,
};

pub use histogram::histogram_bins;

const SANS: &str = "sans-serif";

/// Highest value offered by the questionnaire form; charts scale to at least this.
pub(crate) const SCALE_MAX: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    Bar,
    Pie,
    Histogram,
    Scatter,
    Radar,
}

impl ChartKind {
    pub const ALL: [ChartKind; 5] = [
        ChartKind::Bar,
        ChartKind::Pie,
        ChartKind::Histogram,
        ChartKind::Scatter,
        ChartKind::Radar,
    ];

    pub fn file_name(self) -> &'static str {
        match self {
            ChartKind::Bar => "bar_chart.svg",
            ChartKind::Pie => "pie_chart.svg",
            ChartKind::Histogram => "histogram.svg",
            ChartKind::Scatter => "scatter_plot.svg",
            ChartKind::Radar => "radar_chart.svg",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            ChartKind::Bar => "Scores for Each Question",
            ChartKind::Pie => "Distribution of Scores by Category",
            ChartKind::Histogram => "Distribution of Total Scores",
            ChartKind::Scatter => "Relationship between Eye Contact and Verbal Communication",
            ChartKind::Radar => "Radar Chart of Assessment Scores",
        }
    }

    pub fn from_file_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.file_name() == name)
    }
}

pub struct ChartInput<'a> {
    pub catalog: &'a Catalog,
    pub scores: &'a Scores,
    pub categories: &'a [CategoryScore],
    /// Totals of all stored assessments, including this one.
    pub totals: &'a [i64],
}

pub type RenderedCharts = Vec<(ChartKind, String)>;

pub fn render(kind: ChartKind, input: &ChartInput<'_>) -> Result<String> {
    match kind {
        ChartKind::Bar => bar::render(input),
        ChartKind::Pie => pie::render(input),
        ChartKind::Histogram => histogram::render(input),
        ChartKind::Scatter => scatter::render(input),
        ChartKind::Radar => radar::render(input),
    }
}

pub fn render_all(input: &ChartInput<'_>) -> Result<RenderedCharts> {
    ChartKind::ALL
        .into_iter()
        .map(|kind| Ok((kind, render(kind, input)?)))
        .collect()
}

/// Draw onto a blank SVG canvas and return the document.
fn svg(
    size: (u32, u32),
    draw: impl FnOnce(&DrawingArea<SVGBackend<'_>, Shift>) -> Result<()>,
) -> Result<String> {
    let mut out = String::new();
    {
        let root = SVGBackend::with_string(&mut out, size).into_drawing_area();
        root.fill(&WHITE)?;
        draw(&root)?;
        root.present()?;
    }
    Ok(out)
}

fn text(size: f64, pos: Pos) -> TextStyle<'static> {
    (SANS, size).into_font().color(&BLACK).pos(pos)
}

static TMP_COUNTER: AtomicU64 = AtomicU64::new(0);

/// Filesystem home for rendered charts, one directory per assessment.
#[derive(Debug, Clone)]
pub struct ChartStore {
    root: PathBuf,
}

impl ChartStore {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn path(&self, id: i64, kind: ChartKind) -> PathBuf {
        self.root.join(id.to_string()).join(kind.file_name())
    }

    /// Replace the stored charts of an assessment. Each file is written to a
    /// temporary sibling first and renamed into place.
    pub async fn save(&self, id: i64, charts: &RenderedCharts) -> Result<()> {
        let dir = self.root.join(id.to_string());
        tokio::fs::create_dir_all(&dir).await?;

        for (kind, svg) in charts {
            let tmp = dir.join(format!(
                ".{}.{}.tmp",
                kind.file_name(),
                TMP_COUNTER.fetch_add(1, Ordering::Relaxed)
            ));
            tokio::fs::write(&tmp, svg).await?;
            tokio::fs::rename(&tmp, dir.join(kind.file_name())).await?;
        }

        tracing::debug!(id, dir = %dir.display(), "charts written");
        Ok(())
    }

    pub async fn load(&self, id: i64, kind: ChartKind) -> Result<Option<Vec<u8>>> {
        match tokio::fs::read(self.path(id, kind)).await {
            Ok(bytes) => Ok(Some(bytes)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}
