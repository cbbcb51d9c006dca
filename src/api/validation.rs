use crate::core::{ChartDatum, TimeSeriesDatum, Viewport};
use crate::error::{ChartError, ChartResult};

use super::chart_options::{BarChartOptions, CommonOptions, LineChartOptions, PieChartOptions};

fn require_finite(name: &str, value: f64) -> ChartResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!("{name} must be finite")))
    }
}

fn require_non_negative(name: &str, value: f64) -> ChartResult<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!(
            "{name} must be finite and >= 0"
        )))
    }
}

fn require_positive(name: &str, value: f64) -> ChartResult<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(ChartError::InvalidData(format!(
            "{name} must be finite and > 0"
        )))
    }
}

pub(super) fn validate_common(options: &CommonOptions) -> ChartResult<Viewport> {
    if options.mount_point.is_none() {
        return Err(ChartError::MissingMountPoint);
    }
    let viewport = Viewport::new(options.width, options.height).validate()?;
    require_positive("dpi", options.dpi)?;
    require_positive("text size", options.text.size)?;
    require_non_negative("line width", options.line.width)?;
    require_non_negative("scale width", options.scale.width)?;
    if options.scale.dash.iter().any(|segment| !segment.is_finite() || *segment < 0.0) {
        return Err(ChartError::InvalidData(
            "scale dash segments must be finite and >= 0".to_owned(),
        ));
    }
    if options
        .line
        .gradient
        .iter()
        .any(|stop| !(0.0..=1.0).contains(&stop.offset))
    {
        return Err(ChartError::InvalidData(
            "gradient stop offsets must be within 0..=1".to_owned(),
        ));
    }

    let colors = options
        .colors
        .iter()
        .chain(&options.tooltip.color)
        .chain(options.line.gradient.iter().map(|stop| &stop.color))
        .chain([&options.text.color, &options.line.color, &options.scale.color]);
    for color in colors {
        color.validate()?;
    }
    Ok(viewport)
}

pub(super) fn validate_chart_data(chart: &'static str, data: &[ChartDatum]) -> ChartResult<()> {
    if data.is_empty() {
        return Err(ChartError::EmptyData { chart });
    }
    for datum in data {
        require_finite(&format!("{chart} value for `{}`", datum.item), datum.value)?;
    }
    Ok(())
}

pub(super) fn validate_time_series(data: &[TimeSeriesDatum]) -> ChartResult<()> {
    if data.is_empty() {
        return Err(ChartError::EmptyData { chart: "line" });
    }
    for datum in data {
        require_finite(&format!("line value at {}", datum.time), datum.value)?;
    }
    Ok(())
}

pub(super) fn validate_bar_options(options: &BarChartOptions) -> ChartResult<Viewport> {
    let viewport = validate_common(&options.common)?;
    validate_chart_data("bar", &options.data)?;
    require_non_negative("bar width", options.bar_style.width)?;
    require_finite("scale padding left", options.scale_padding_left)?;
    require_positive("animation step", options.animation.step)?;
    Ok(viewport)
}

pub(super) fn validate_line_options(options: &LineChartOptions) -> ChartResult<Viewport> {
    let viewport = validate_common(&options.common)?;
    validate_time_series(&options.data)?;
    require_finite("scale padding left", options.scale_padding_left)?;
    Ok(viewport)
}

pub(super) fn validate_pie_options(options: &PieChartOptions) -> ChartResult<Viewport> {
    let viewport = validate_common(&options.common)?;
    validate_chart_data("pie", &options.data)?;
    let inner = require_non_negative("inner radius", options.radius.inner)?;
    let outer = require_positive("outer radius", options.radius.outer)?;
    if inner > outer {
        return Err(ChartError::InvalidData(format!(
            "inner radius {inner} exceeds outer radius {outer}"
        )));
    }
    require_non_negative("slice gap", options.gap)?;
    require_finite("start angle", options.start_angle)?;
    Ok(viewport)
}
