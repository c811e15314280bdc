//! Table pagination and chart placement.

use super::chart::{category_chart, trend_chart};
use super::layout::{
    CHART_GAP, ChartKind, DocumentLayout, MARGIN, NO_DATA_SIZE, TITLE_SIZE, truncate_cell,
};
use super::{DocumentPlan, DrawOp, PagePlan};
use crate::export::error::ExportError;
use crate::export::table::{Cell, NO_DATA, Table};
use crate::reports::{CategoryTotal, MonthlyBucket};

/// Aggregates drawn as the chart under the table.
#[derive(Debug, Clone, Copy)]
pub enum ChartData<'a> {
    /// Monthly buckets in ascending order.
    Trend(&'a [MonthlyBucket]),
    /// Category totals in any order.
    Category(&'a [CategoryTotal]),
}

impl ChartData<'_> {
    const fn kind(self) -> ChartKind {
        match self {
            Self::Trend(_) => ChartKind::Trend,
            Self::Category(_) => ChartKind::Category,
        }
    }
}

#[allow(clippy::cast_precision_loss)]
fn pt(v: i32) -> f32 {
    v as f32
}

fn text(x: i32, y: i32, size: u16, content: String) -> DrawOp {
    DrawOp::Text {
        x: pt(x),
        y: pt(y),
        size: f32::from(size),
        text: content,
    }
}

/// Lays `table` out across pages and places `chart` after the last row.
///
/// Each table page repeats the title and header row and takes rows until the
/// next one would land on or below the table boundary. The chart goes on the
/// last table page when that page's rows all sit above the chart band;
/// otherwise it gets one extra page under a repeated title. An empty table
/// yields a single page carrying only the no-data marker.
///
/// # Errors
///
/// Returns [`ExportError::Layout`] when the layout does not match the table
/// or a chart is requested that the layout has no band for.
pub fn plan_document(
    layout: &DocumentLayout,
    table: &Table,
    chart: Option<ChartData<'_>>,
) -> Result<DocumentPlan, ExportError> {
    layout.check(table.headers.len())?;

    let mut plan = DocumentPlan {
        width: layout.page_width,
        height: layout.page_height,
        pages: Vec::new(),
    };

    if table.rows.is_empty() {
        plan.pages.push(no_data_page(layout));
        return Ok(plan);
    }

    let chart_rows = match (chart, layout.chart) {
        (None, _) => None,
        (Some(data), Some(band)) if band.kind == data.kind() => {
            Some((data, layout.rows_above(band.boundary)))
        }
        (Some(data), _) => {
            return Err(ExportError::Layout(format!(
                "{}: no band for a {:?} chart",
                layout.title,
                data.kind()
            )));
        }
    };

    let offsets = layout.column_offsets();
    let mut chunks = table.rows.chunks(layout.table_capacity()).peekable();

    while let Some(chunk) = chunks.next() {
        let (mut page, cursor) = table_page(layout, table.headers, &offsets, chunk);

        if let (None, Some((data, capacity))) = (chunks.peek(), chart_rows) {
            if chunk.len() <= capacity {
                place_chart(&mut page, layout, data, cursor);
            } else {
                plan.pages.push(page);
                page = title_page(layout);
                place_chart(&mut page, layout, data, layout.header_y());
            }
        }

        plan.pages.push(page);
    }

    Ok(plan)
}

fn title_page(layout: &DocumentLayout) -> PagePlan {
    PagePlan {
        ops: vec![text(
            i32::from(MARGIN),
            layout.title_y(),
            TITLE_SIZE,
            layout.title.to_string(),
        )],
        ..PagePlan::default()
    }
}

/// Draws title, header, and `rows`; returns the page and the cursor below
/// the last row.
fn table_page(
    layout: &DocumentLayout,
    headers: &[&str],
    offsets: &[u32],
    rows: &[Vec<Cell>],
) -> (PagePlan, i32) {
    let mut page = title_page(layout);
    let line = i32::from(layout.line_height);

    let mut cursor = layout.header_y();
    for (header, x) in headers.iter().zip(offsets) {
        page.ops.push(text(
            i32::try_from(*x).unwrap_or(i32::MAX),
            cursor,
            layout.font_size,
            (*header).to_string(),
        ));
    }
    cursor -= line;

    for row in rows {
        for (cell, x) in row.iter().zip(offsets) {
            let content = cell.display();
            if content.is_empty() {
                continue;
            }
            page.ops.push(text(
                i32::try_from(*x).unwrap_or(i32::MAX),
                cursor,
                layout.font_size,
                truncate_cell(&content),
            ));
        }
        cursor -= line;
    }

    page.table_rows = rows.len();
    (page, cursor)
}

fn place_chart(page: &mut PagePlan, layout: &DocumentLayout, data: ChartData<'_>, cursor: i32) {
    let left = f32::from(MARGIN);
    let top = pt(cursor - i32::from(CHART_GAP));
    let width = pt(i32::from(layout.page_width) - 2 * i32::from(MARGIN));

    let ops = match data {
        ChartData::Trend(buckets) => trend_chart(buckets, left, top, width),
        ChartData::Category(totals) => category_chart(totals, left, top, width),
    };
    page.ops.extend(ops);
    page.has_chart = true;
}

fn no_data_page(layout: &DocumentLayout) -> PagePlan {
    PagePlan {
        ops: vec![text(
            i32::from(MARGIN),
            layout.title_y(),
            NO_DATA_SIZE,
            NO_DATA.to_string(),
        )],
        ..PagePlan::default()
    }
}
