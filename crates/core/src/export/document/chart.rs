//! Chart geometry.
//!
//! Values are first normalised to `[0, 1]` against the visible maximum; only
//! that ratio crosses into floating point, where it is scaled to points.

#![allow(clippy::float_arithmetic)]

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::layout::truncate_to;
use super::{DrawOp, Rgb};
use crate::reports::{CategoryTotal, MonthlyBucket};

/// Most recent months shown by the trend chart.
pub const TREND_MONTHS: usize = 12;

/// Height of the trend chart plot area.
pub const TREND_HEIGHT: f32 = 220.0;

/// Categories shown by the category chart.
pub const CATEGORY_LIMIT: usize = 10;

/// Tallest the category chart grows.
pub const CATEGORY_MAX_HEIGHT: f32 = 260.0;

/// Vertical pitch between category bars.
const CATEGORY_PITCH: f32 = 20.0;

/// Width reserved for category labels left of the bars.
const CATEGORY_LABEL_WIDTH: f32 = 100.0;

/// Longest category label that fits the label gutter at size 8.
pub const CATEGORY_LABEL_CHARS: usize = 18;

/// Ratio of `value` to `max`, clamped to `[0, 1]`.
#[must_use]
pub fn normalize(value: Decimal, max: Decimal) -> f32 {
    if max <= Decimal::ZERO {
        return 0.0;
    }
    value
        .checked_div(max)
        .map(|r| r.clamp(Decimal::ZERO, Decimal::ONE))
        .and_then(|r| r.to_f32())
        .unwrap_or(0.0)
}

/// The last [`TREND_MONTHS`] buckets.
#[must_use]
pub fn visible_months(buckets: &[MonthlyBucket]) -> &[MonthlyBucket] {
    &buckets[buckets.len().saturating_sub(TREND_MONTHS)..]
}

/// The [`CATEGORY_LIMIT`] largest totals, largest first.
#[must_use]
pub fn visible_categories(totals: &[CategoryTotal]) -> Vec<CategoryTotal> {
    let mut ranked = totals.to_vec();
    ranked.sort_by(|a, b| b.total.cmp(&a.total));
    ranked.truncate(CATEGORY_LIMIT);
    ranked
}

fn count(n: usize) -> f32 {
    f32::from(u16::try_from(n).unwrap_or(u16::MAX))
}

/// Paired income/expense bars for the visible months, rising from a baseline
/// `TREND_HEIGHT` below `top`, with month ticks and a two-entry legend.
#[must_use]
pub fn trend_chart(buckets: &[MonthlyBucket], left: f32, top: f32, width: f32) -> Vec<DrawOp> {
    let recent = visible_months(buckets);
    let max = recent
        .iter()
        .map(MonthlyBucket::peak)
        .fold(Decimal::ONE, Decimal::max);

    let baseline = top - TREND_HEIGHT;
    let group_width = width / count(recent.len().max(1));
    let bar_width = ((group_width - 8.0) / 2.0).max(6.0);

    let mut ops = vec![
        DrawOp::Line {
            from: (left, baseline),
            to: (left + width, baseline),
            stroke: Rgb::GREY,
        },
        DrawOp::Line {
            from: (left, baseline),
            to: (left, top),
            stroke: Rgb::GREY,
        },
    ];

    for (i, bucket) in recent.iter().enumerate() {
        let group_x = left + count(i) * group_width + 4.0;
        let credit_height = (normalize(bucket.credit_total, max) * TREND_HEIGHT).round();
        let debit_height = (normalize(bucket.debit_total, max) * TREND_HEIGHT).round();

        ops.push(DrawOp::Rect {
            x: group_x,
            y: baseline,
            width: bar_width,
            height: credit_height,
            fill: Rgb::GREEN,
        });
        ops.push(DrawOp::Rect {
            x: group_x + bar_width + 2.0,
            y: baseline,
            width: bar_width,
            height: debit_height,
            fill: Rgb::RED,
        });
        ops.push(DrawOp::Text {
            x: group_x,
            y: baseline - 12.0,
            size: 7.0,
            text: bucket.month.get(2..).unwrap_or(&bucket.month).to_string(),
        });
    }

    ops.extend(legend(left, top));
    ops
}

fn legend(left: f32, top: f32) -> [DrawOp; 4] {
    [
        DrawOp::Rect {
            x: left,
            y: top + 4.0,
            width: 8.0,
            height: 8.0,
            fill: Rgb::GREEN,
        },
        DrawOp::Text {
            x: left + 12.0,
            y: top + 3.0,
            size: 9.0,
            text: "Income".to_string(),
        },
        DrawOp::Rect {
            x: left + 70.0,
            y: top + 4.0,
            width: 8.0,
            height: 8.0,
            fill: Rgb::RED,
        },
        DrawOp::Text {
            x: left + 84.0,
            y: top + 3.0,
            size: 9.0,
            text: "Expense".to_string(),
        },
    ]
}

/// Height taken by the category chart for `bars` bars.
#[must_use]
pub fn category_height(bars: usize) -> f32 {
    (count(bars) * CATEGORY_PITCH + 30.0).min(CATEGORY_MAX_HEIGHT)
}

/// Horizontal bars for the top categories, largest first, each labelled on
/// the left.
#[must_use]
pub fn category_chart(totals: &[CategoryTotal], left: f32, top: f32, width: f32) -> Vec<DrawOp> {
    let ranked = visible_categories(totals);
    let max = ranked.iter().map(|c| c.total).fold(Decimal::ONE, Decimal::max);
    let height = category_height(ranked.len());
    let bar_span = width - CATEGORY_LABEL_WIDTH;

    let mut ops = vec![
        DrawOp::Line {
            from: (left, top),
            to: (left, top - height),
            stroke: Rgb::GREY,
        },
        DrawOp::Line {
            from: (left, top - height),
            to: (left + width, top - height),
            stroke: Rgb::GREY,
        },
    ];

    for (i, item) in ranked.iter().enumerate() {
        let bar_y = top - CATEGORY_PITCH - count(i) * CATEGORY_PITCH;
        let bar_width = (normalize(item.total, max) * bar_span).round().max(2.0);

        ops.push(DrawOp::Text {
            x: left,
            y: bar_y,
            size: 8.0,
            text: truncate_to(&item.category, CATEGORY_LABEL_CHARS),
        });
        ops.push(DrawOp::Rect {
            x: left + CATEGORY_LABEL_WIDTH,
            y: bar_y,
            width: bar_width,
            height: 10.0,
            fill: Rgb::BLUE,
        });
    }

    ops
}
