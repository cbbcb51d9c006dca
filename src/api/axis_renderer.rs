use crate::core::{AxisPadding, ValueAxisLayout};
use crate::error::ChartResult;
use crate::render::{DrawingSurface, TextAlign, TransformedSurface};

use super::chart_options::{CommonOptions, DrawScaleOptions};

/// Dash pattern of horizontal value gridlines.
pub(super) const GRIDLINE_DASH: [f64; 2] = [15.0, 5.0];

/// Axis labels are drawn slightly smaller than body text.
pub(super) const AXIS_FONT_RATIO: f64 = 0.9;

/// Horizontal gap between the y axis and its tick labels.
const VALUE_LABEL_GAP: f64 = 10.0;

/// Applies the shared scale stroke and label text style to `layer`.
pub(super) fn apply_scale_style<S: DrawingSurface>(
    layer: &mut TransformedSurface<S>,
    common: &CommonOptions,
) {
    layer.set_line_width(common.scale.width);
    layer.set_stroke_style(common.scale.color);
    layer.set_fill_style(common.text.color);
    layer.set_font_size(common.text.size * AXIS_FONT_RATIO);
}

/// Draws the x and y axis lines meeting at the plot origin.
pub(super) fn draw_axis_lines<S: DrawingSurface>(
    layer: &mut TransformedSurface<S>,
    padding: AxisPadding,
    width: f64,
    height: f64,
    draw_scale: DrawScaleOptions,
    dash: &[f64],
) -> ChartResult<()> {
    let origin = (padding.left, padding.bottom);
    if draw_scale.x {
        layer.draw_line(origin, (width, padding.bottom), Some(dash))?;
    }
    if draw_scale.y {
        layer.draw_line(origin, (padding.left, height - padding.top), Some(dash))?;
    }
    Ok(())
}

/// Draws value gridlines above the baseline, value labels and the short
/// tick under the y axis.
pub(super) fn draw_value_axis<S: DrawingSurface>(
    layer: &mut TransformedSurface<S>,
    axis: &ValueAxisLayout,
    padding: AxisPadding,
    width: f64,
    text_size: f64,
) -> ChartResult<()> {
    layer.set_text_align(TextAlign::Right);
    for (index, tick) in axis.ticks.iter().enumerate() {
        if index != 0 {
            layer.draw_line(
                (padding.left, tick.y),
                (width, tick.y),
                Some(&GRIDLINE_DASH),
            )?;
        }
        layer.fill_text(
            &tick.label,
            padding.left - VALUE_LABEL_GAP,
            tick.y - text_size / 2.0,
        )?;
    }
    layer.draw_line(
        (padding.left, padding.bottom),
        (padding.left, padding.bottom - text_size / 2.0),
        Some(&[]),
    )
}
