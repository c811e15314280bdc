//! Fixed page layouts per export kind.

use crate::export::error::ExportError;
use crate::export::types::ExportKind;

/// Left, right, top, and bottom page margin in points.
pub const MARGIN: u16 = 40;

/// Title font size.
pub const TITLE_SIZE: u16 = 14;

/// Font size of the zero-row marker.
pub const NO_DATA_SIZE: u16 = 12;

/// Longest cell text drawn without truncation, in characters.
pub const CELL_BUDGET: usize = 40;

/// Gap between the last table row and the top of a chart.
pub const CHART_GAP: u16 = 16;

/// Chart drawn below the table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Paired credit/debit bars per month.
    Trend,
    /// Horizontal bar per expense category.
    Category,
}

/// Reserved band for a chart on the page that hosts it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartBand {
    /// Rows are drawn only while the cursor is above this height.
    pub boundary: u16,
    /// Chart drawn inside the band.
    pub kind: ChartKind,
}

/// Page geometry for one export kind. All lengths are in points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DocumentLayout {
    /// Page width.
    pub page_width: u16,
    /// Page height.
    pub page_height: u16,
    /// Title drawn at the top of every table page.
    pub title: &'static str,
    /// Distance from title baseline to header baseline.
    pub title_gap: u16,
    /// Font size of header and data rows.
    pub font_size: u16,
    /// Vertical advance per row.
    pub line_height: u16,
    /// Width of each column, left to right.
    pub column_widths: &'static [u16],
    /// Rows are drawn only while the cursor is above this height.
    pub table_boundary: u16,
    /// Chart band, for kinds that carry a chart.
    pub chart: Option<ChartBand>,
}

impl DocumentLayout {
    /// Landscape layout for the wide transaction table.
    pub const TRANSACTIONS: Self = Self {
        page_width: 842,
        page_height: 595,
        title: "Transactions Export",
        title_gap: 20,
        font_size: 9,
        line_height: 14,
        column_widths: &[90, 45, 65, 80, 90, 90, 150, 110, 70, 120],
        table_boundary: MARGIN,
        chart: None,
    };

    /// Portrait layout with a trend chart.
    pub const MONTHLY: Self = Self {
        page_width: 595,
        page_height: 842,
        title: "Monthly Summary",
        title_gap: 22,
        font_size: 10,
        line_height: 16,
        column_widths: &[120, 180, 180],
        table_boundary: MARGIN,
        chart: Some(ChartBand {
            boundary: 320,
            kind: ChartKind::Trend,
        }),
    };

    /// Portrait layout with a category chart.
    pub const EXPENSES: Self = Self {
        page_width: 595,
        page_height: 842,
        title: "Expense by Category",
        title_gap: 22,
        font_size: 10,
        line_height: 16,
        column_widths: &[240, 240],
        table_boundary: MARGIN,
        chart: Some(ChartBand {
            boundary: 340,
            kind: ChartKind::Category,
        }),
    };

    /// Layout used for `kind`.
    #[must_use]
    pub const fn for_kind(kind: ExportKind) -> Self {
        match kind {
            ExportKind::Transactions => Self::TRANSACTIONS,
            ExportKind::Monthly => Self::MONTHLY,
            ExportKind::Expenses => Self::EXPENSES,
        }
    }

    /// Baseline of the title.
    #[must_use]
    pub fn title_y(&self) -> i32 {
        i32::from(self.page_height) - i32::from(MARGIN)
    }

    /// Baseline of the header row.
    #[must_use]
    pub fn header_y(&self) -> i32 {
        self.title_y() - i32::from(self.title_gap)
    }

    /// Baseline of the first data row.
    #[must_use]
    pub fn first_row_y(&self) -> i32 {
        self.header_y() - i32::from(self.line_height)
    }

    /// Number of rows that fit strictly above `boundary`.
    #[must_use]
    pub fn rows_above(&self, boundary: u16) -> usize {
        let span = self.first_row_y() - i32::from(boundary);
        if span <= 0 || self.line_height == 0 {
            return 0;
        }
        usize::try_from((span - 1) / i32::from(self.line_height) + 1).unwrap_or(0)
    }

    /// Rows per table-only page.
    #[must_use]
    pub fn table_capacity(&self) -> usize {
        self.rows_above(self.table_boundary)
    }

    /// Rows the chart-hosting page may carry, if the kind has a chart.
    #[must_use]
    pub fn chart_capacity(&self) -> Option<usize> {
        self.chart.map(|band| self.rows_above(band.boundary))
    }

    /// Left edge of each column.
    #[must_use]
    pub fn column_offsets(&self) -> Vec<u32> {
        self.column_widths
            .iter()
            .scan(u32::from(MARGIN), |x, w| {
                let left = *x;
                *x += u32::from(*w);
                Some(left)
            })
            .collect()
    }

    /// Checks the layout against a table with `columns` columns.
    ///
    /// # Errors
    ///
    /// Returns [`ExportError::Layout`] when the column table does not match
    /// or no row fits on a page.
    pub fn check(&self, columns: usize) -> Result<(), ExportError> {
        if self.column_widths.len() != columns {
            return Err(ExportError::Layout(format!(
                "{}: {} column widths for {} columns",
                self.title,
                self.column_widths.len(),
                columns
            )));
        }
        if self.column_widths.contains(&0) {
            return Err(ExportError::Layout(format!(
                "{}: zero column width",
                self.title
            )));
        }
        if self.table_capacity() == 0 {
            return Err(ExportError::Layout(format!(
                "{}: no row fits above the table boundary",
                self.title
            )));
        }
        Ok(())
    }
}

/// Shortens text longer than [`CELL_BUDGET`] to `CELL_BUDGET - 3` characters
/// plus an ellipsis.
#[must_use]
pub fn truncate_cell(text: &str) -> String {
    truncate_to(text, CELL_BUDGET)
}

/// Shortens text longer than `budget` characters to `budget - 3` characters
/// plus an ellipsis.
#[must_use]
pub fn truncate_to(text: &str, budget: usize) -> String {
    if text.chars().count() > budget {
        let mut short: String = text.chars().take(budget.saturating_sub(3)).collect();
        short.push('…');
        short
    } else {
        text.to_string()
    }
}
