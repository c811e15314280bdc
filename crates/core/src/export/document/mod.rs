//! Paginated document renderer.
//!
//! Rendering happens in two steps. [`paginate::plan_document`] lays the table
//! and chart out as backend-independent [`DrawOp`]s per page; [`pdf::encode`]
//! turns that plan into PDF bytes.

pub mod chart;
pub mod layout;
pub mod paginate;
pub mod pdf;

#[cfg(test)]
mod paginate_props;

pub use layout::{ChartKind, DocumentLayout};
pub use paginate::{ChartData, plan_document};

use super::error::ExportError;
use super::table::Table;
use super::types::ExportKind;

/// An RGB colour with components in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgb(pub f32, pub f32, pub f32);

impl Rgb {
    /// Text.
    pub const BLACK: Self = Self(0.0, 0.0, 0.0);
    /// Chart axes.
    pub const GREY: Self = Self(0.8, 0.8, 0.8);
    /// Income bars.
    pub const GREEN: Self = Self(0.09, 0.64, 0.29);
    /// Expense bars.
    pub const RED: Self = Self(0.86, 0.15, 0.15);
    /// Category bars.
    pub const BLUE: Self = Self(0.22, 0.51, 0.96);
}

/// A single drawing primitive in page coordinates (origin bottom-left).
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// Text with its baseline starting at `(x, y)`.
    Text {
        /// Left edge.
        x: f32,
        /// Baseline.
        y: f32,
        /// Font size.
        size: f32,
        /// Content.
        text: String,
    },
    /// Filled rectangle with its lower-left corner at `(x, y)`.
    Rect {
        /// Left edge.
        x: f32,
        /// Bottom edge.
        y: f32,
        /// Width.
        width: f32,
        /// Height.
        height: f32,
        /// Fill colour.
        fill: Rgb,
    },
    /// One-point stroked line.
    Line {
        /// Start point.
        from: (f32, f32),
        /// End point.
        to: (f32, f32),
        /// Stroke colour.
        stroke: Rgb,
    },
}

/// Everything drawn on one page.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PagePlan {
    /// Drawing operations in paint order.
    pub ops: Vec<DrawOp>,
    /// Data rows placed on this page.
    pub table_rows: usize,
    /// Whether the chart was placed on this page.
    pub has_chart: bool,
}

impl PagePlan {
    /// Text drawn on the page, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.ops.iter().filter_map(|op| match op {
            DrawOp::Text { text, .. } => Some(text.as_str()),
            _ => None,
        })
    }
}

/// A laid-out document.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentPlan {
    /// Page width in points.
    pub width: u16,
    /// Page height in points.
    pub height: u16,
    /// Pages in order.
    pub pages: Vec<PagePlan>,
}

/// Lays out and encodes `table` for `kind`, with the chart when given.
///
/// # Errors
///
/// Returns [`ExportError::Layout`] if the layout table does not fit the data.
pub fn render_document(
    kind: ExportKind,
    table: &Table,
    chart: Option<ChartData<'_>>,
) -> Result<Vec<u8>, ExportError> {
    let plan = plan_document(&DocumentLayout::for_kind(kind), table, chart)?;
    pdf::encode(&plan)
}
