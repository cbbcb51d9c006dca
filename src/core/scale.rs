use serde::{Deserialize, Serialize};

use crate::core::types::ScalePoint;
use crate::core::primitives::estimate_text_width;
use crate::error::{ChartError, ChartResult};

/// Number of graduations on the value axis, including the zero tick.
pub const VALUE_TICK_COUNT: usize = 5;

/// Rounds `value` up to the next multiple of five.
///
/// Exact multiples still move up by five so the tallest datum never
/// touches the top gridline.
#[must_use]
pub fn nice_round_up(value: f64) -> f64 {
    (value / 5.0).floor() * 5.0 + 5.0
}

/// Space reserved around the plot area, in semantic pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisPadding {
    pub left: f64,
    pub top: f64,
    pub bottom: f64,
}

impl AxisPadding {
    /// Paddings used by bar charts: two text lines on top, three below.
    #[must_use]
    pub fn bar(left: f64, text_size: f64) -> Self {
        Self {
            left,
            top: text_size * 2.0,
            bottom: text_size * 3.0,
        }
    }

    /// Paddings used by line charts: two text lines on top and below.
    #[must_use]
    pub fn line(left: f64, text_size: f64) -> Self {
        Self {
            left,
            top: text_size * 2.0,
            bottom: text_size * 2.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueTick {
    pub value: f64,
    pub y: f64,
    pub label: String,
}

/// Vertical value axis: rounded maximum, tick positions and the plot height
/// they span.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueAxisLayout {
    pub scale_max: f64,
    pub baseline: f64,
    pub available_height: f64,
    pub ticks: Vec<ValueTick>,
}

impl ValueAxisLayout {
    /// Lays out the value axis for data whose largest value is `max_value`.
    ///
    /// Negative maxima are clamped to zero so the scale always spans at
    /// least `0..5`.
    pub fn compute(
        max_value: f64,
        height: f64,
        padding: AxisPadding,
        text_size: f64,
    ) -> ChartResult<Self> {
        if !max_value.is_finite() {
            return Err(ChartError::InvalidData(
                "value axis maximum must be finite".to_owned(),
            ));
        }

        let scale_max = nice_round_up(max_value.max(0.0));
        let available_height = height - padding.bottom - text_size / 2.0 - padding.top;
        let intervals = (VALUE_TICK_COUNT - 1) as f64;
        let value_interval = scale_max / intervals;
        let space_interval = available_height / intervals;

        let ticks = (0..VALUE_TICK_COUNT)
            .map(|index| {
                let value = value_interval * index as f64;
                ValueTick {
                    value,
                    y: padding.bottom + space_interval * index as f64,
                    label: format!("{}", value.floor()),
                }
            })
            .collect();

        Ok(Self {
            scale_max,
            baseline: padding.bottom,
            available_height,
            ticks,
        })
    }

    /// Semantic y of `value` on this axis.
    #[must_use]
    pub fn value_to_y(&self, value: f64) -> f64 {
        self.baseline + (value / self.scale_max) * self.available_height
    }
}

/// Category anchors for a bar chart.
///
/// Bars are spread over `min(90% of the plot width, plot width - bar width)`
/// and the first bar starts after `max(5% of the total width, half a bar)`.
#[must_use]
pub fn bar_category_anchors(
    count: usize,
    width: f64,
    padding: AxisPadding,
    bar_width: f64,
) -> Vec<ScalePoint> {
    let plot_width = width - padding.left;
    let spread = (plot_width * 0.9).min(plot_width - bar_width);
    let interval = step_between(spread, count);
    let first = padding.left + (width * 0.05).max(bar_width / 2.0);

    (0..count)
        .map(|index| ScalePoint::new(first + interval * index as f64, padding.bottom))
        .collect()
}

/// Horizontal span used by the line chart's time axis.
#[must_use]
pub fn time_axis_span(width: f64, padding: AxisPadding) -> f64 {
    (width - padding.left) * 0.8
}

/// Anchors for a line chart's time axis, centered in the plot area.
#[must_use]
pub fn time_axis_anchors(count: usize, width: f64, padding: AxisPadding) -> Vec<ScalePoint> {
    let span = time_axis_span(width, padding);
    let interval = step_between(span, count);
    let first = padding.left / 2.0 + (width - span) / 2.0;

    (0..count)
        .map(|index| ScalePoint::new(first + interval * index as f64, padding.bottom))
        .collect()
}

fn step_between(span: f64, count: usize) -> f64 {
    if count > 1 {
        span / (count - 1) as f64
    } else {
        0.0
    }
}

/// Minimum spacing between two drawn time labels.
///
/// `max_fit = floor((span - label) / label / 2)` labels are assumed to fit
/// between the first and the last, giving `(span - label) / (max_fit + 1)`.
/// When not even one label fits, only the first one is drawn.
#[must_use]
pub fn min_label_interval(span: f64, label_width: f64) -> f64 {
    let remaining = span - label_width;
    if remaining <= 0.0 {
        return f64::INFINITY;
    }
    if label_width <= 0.0 {
        return 0.0;
    }
    let max_fit = (remaining / label_width / 2.0).floor();
    remaining / (max_fit + 1.0)
}

/// Greedy left-to-right label thinning.
///
/// The first anchor is always labeled; a later anchor is labeled only when
/// it lies strictly farther than `min_interval` from the last labeled one.
/// Returns the indexes of labeled anchors.
#[must_use]
pub fn thin_labels(anchors: &[ScalePoint], min_interval: f64) -> Vec<usize> {
    let mut drawn = Vec::new();
    let mut last_x = None;
    for (index, anchor) in anchors.iter().enumerate() {
        match last_x {
            Some(last) if anchor.x - last <= min_interval => continue,
            _ => {
                drawn.push(index);
                last_x = Some(anchor.x);
            }
        }
    }
    drawn
}

/// Time-axis label placement for a line chart.
#[derive(Debug, Clone, PartialEq)]
pub struct TimeAxisLayout {
    pub anchors: Vec<ScalePoint>,
    pub min_label_interval: f64,
    pub labeled: Vec<usize>,
}

impl TimeAxisLayout {
    /// `format` is only measured here; label widths use the text-unit
    /// estimate scaled by `text_size`.
    #[must_use]
    pub fn compute(
        count: usize,
        width: f64,
        padding: AxisPadding,
        format: &str,
        text_size: f64,
    ) -> Self {
        let anchors = time_axis_anchors(count, width, padding);
        let label_width = estimate_text_width(format, text_size);
        let min_label_interval = min_label_interval(time_axis_span(width, padding), label_width);
        let labeled = thin_labels(&anchors, min_label_interval);
        Self {
            anchors,
            min_label_interval,
            labeled,
        }
    }
}
