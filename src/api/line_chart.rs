use tracing::{debug, warn};

use crate::core::line_series::{area_outline, highest_y, is_time_sorted};
use crate::core::{
    AxisPadding, ChartDatum, PointRegion, RegionRegistry, Registered, ScalePoint,
    TimeAxisLayout, TimeSeriesDatum, ValueAxisLayout, ValueTick, Viewport, bezier_path,
    format_time, project_line_points,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{MountPoint, PointerInput};
use crate::render::{
    CoordinateTransform, DrawingSurface, LayerKind, LayerStack, TextAlign, TransformedSurface,
};

use super::axis_renderer::{AXIS_FONT_RATIO, apply_scale_style, draw_axis_lines, draw_value_axis};
use super::chart_options::LineChartOptions;
use super::settings::{LineChartSettings, Merge};
use super::validation::{validate_line_options, validate_time_series};

/// Dash pattern of the line tooltip indicator.
const TOOLTIP_DASH: [f64; 2] = [10.0, 10.0];

const TOOLTIP_LINE_WIDTH: f64 = 2.0;

/// Distance of the tooltip label above the plot area.
const TOOLTIP_LABEL_RAISE: f64 = 10.0;

struct LineLayout {
    padding: AxisPadding,
    axis: ValueAxisLayout,
    time_axis: TimeAxisLayout,
    points: Vec<ScalePoint>,
}

impl LineLayout {
    fn compute(options: &LineChartOptions, data: &[TimeSeriesDatum]) -> ChartResult<Self> {
        let common = &options.common;
        let text_size = common.text.size;
        let padding = AxisPadding::line(options.scale_padding_left, text_size);
        let max_value = data
            .iter()
            .map(|datum| datum.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let axis = ValueAxisLayout::compute(max_value, common.height, padding, text_size)?;
        let time_axis = TimeAxisLayout::compute(
            data.len(),
            common.width,
            padding,
            &common.scale.x.format,
            text_size,
        );
        let points = project_line_points(data, &time_axis.anchors, &axis)?;
        Ok(Self {
            padding,
            axis,
            time_axis,
            points,
        })
    }
}

fn warn_if_unsorted(data: &[TimeSeriesDatum]) {
    if !is_time_sorted(data) {
        warn!(
            points = data.len(),
            "line data is not sorted by time; axis labels will not read in time order"
        );
    }
}

/// Time-series line chart with optional smoothing and gradient fill.
pub struct LineChart<S: DrawingSurface> {
    options: LineChartOptions,
    viewport: Viewport,
    mount_point: MountPoint,
    layers: LayerStack<TransformedSurface<S>>,
    layout: LineLayout,
    regions: RegionRegistry<PointRegion, TimeSeriesDatum>,
}

impl<S: DrawingSurface> LineChart<S> {
    pub fn new(settings: LineChartSettings, surfaces: LayerStack<S>) -> ChartResult<Self> {
        let options = settings.merge(&LineChartOptions::default());
        let viewport = validate_line_options(&options)?;
        let mount_point = options
            .common
            .mount_point
            .clone()
            .ok_or(ChartError::MissingMountPoint)?;
        let layout = LineLayout::compute(&options, &options.data)?;
        warn_if_unsorted(&options.data);

        let transform =
            CoordinateTransform::cartesian(viewport.width, viewport.height, options.common.dpi);
        let mut chart = Self {
            options,
            viewport,
            mount_point,
            layers: surfaces.transformed(transform),
            layout,
            regions: RegionRegistry::default(),
        };
        chart.draw()?;
        debug!(
            points = chart.options.data.len(),
            labeled = chart.layout.time_axis.labeled.len(),
            scale_max = chart.layout.axis.scale_max,
            "line chart mounted"
        );
        Ok(chart)
    }

    /// Replaces the data, clears every layer and redraws.
    pub fn rerender(&mut self, data: Vec<TimeSeriesDatum>) -> ChartResult<()> {
        validate_time_series(&data)?;
        let layout = LineLayout::compute(&self.options, &data)?;
        warn_if_unsorted(&data);

        self.options.data = data;
        self.layout = layout;
        self.regions.clear();
        self.layers.clear_all()?;
        self.draw()?;
        debug!(points = self.options.data.len(), "line chart rerendered");
        Ok(())
    }

    /// Marks the point nearest to the pointer horizontally.
    ///
    /// Only the pointer's x coordinate is used, so every input on the
    /// surface selects a point.
    pub fn handle_input(&mut self, input: PointerInput) -> ChartResult<Option<TimeSeriesDatum>> {
        let (x, _) = input.cartesian_position(&self.mount_point, self.viewport.height);
        let hit = self
            .regions
            .nearest(x, self.options.nearest_point)
            .map(|(_, region)| (region.shape, region.datum.clone()));

        let overlay = &mut self.layers.overlay;
        overlay.begin_path();
        overlay.clear()?;
        let Some((point, datum)) = hit else {
            return Ok(None);
        };

        let common = &self.options.common;
        let padding = self.layout.padding;
        let plot_top = self.viewport.height - padding.top;
        let color = common.tooltip.primary_color();
        overlay.set_stroke_style(color);
        overlay.set_fill_style(color);
        overlay.set_line_width(TOOLTIP_LINE_WIDTH);
        overlay.set_font_size(common.text.size * AXIS_FONT_RATIO);
        overlay.set_text_align(TextAlign::Center);
        overlay.draw_line(
            (point.x, padding.bottom),
            (point.x, plot_top),
            Some(&TOOLTIP_DASH),
        )?;

        let tip_y = plot_top + TOOLTIP_LABEL_RAISE;
        let item = match &datum.item {
            Some(item) => item.clone(),
            None => format_time(datum.time, &common.scale.x.format)?,
        };
        let label = common
            .tooltip
            .label_for(&ChartDatum::new(item, datum.value), point.x, tip_y);
        overlay.fill_text(&label, point.x, tip_y)?;
        Ok(Some(datum))
    }

    #[must_use]
    pub fn options(&self) -> &LineChartOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale_coordinates(&self) -> &[ScalePoint] {
        &self.layout.time_axis.anchors
    }

    #[must_use]
    pub fn value_axis(&self) -> &ValueAxisLayout {
        &self.layout.axis
    }

    #[must_use]
    pub fn value_ticks(&self) -> &[ValueTick] {
        &self.layout.axis.ticks
    }

    /// Indexes of anchors whose time label is drawn.
    #[must_use]
    pub fn labeled_anchors(&self) -> &[usize] {
        &self.layout.time_axis.labeled
    }

    #[must_use]
    pub fn points(&self) -> &[ScalePoint] {
        &self.layout.points
    }

    #[must_use]
    pub fn registered_regions(&self) -> &[Registered<PointRegion, TimeSeriesDatum>] {
        self.regions.regions()
    }

    #[must_use]
    pub fn layer(&self, kind: LayerKind) -> &S {
        self.layers.get(kind).inner()
    }

    #[must_use]
    pub fn into_layers(self) -> LayerStack<S> {
        self.layers.into_inner()
    }

    fn draw(&mut self) -> ChartResult<()> {
        self.draw_scales()?;
        self.draw_line()
    }

    fn draw_scales(&mut self) -> ChartResult<()> {
        let LineChartOptions {
            common,
            data,
            draw_scale,
            ..
        } = &self.options;
        let LineLayout {
            padding,
            axis,
            time_axis,
            ..
        } = &self.layout;
        let (width, height) = (self.viewport.width, self.viewport.height);
        let text_size = common.text.size;

        let layer = &mut self.layers.scale;
        apply_scale_style(layer, common);
        draw_axis_lines(layer, *padding, width, height, *draw_scale, &common.scale.dash)?;
        if draw_scale.y {
            draw_value_axis(layer, axis, *padding, width, text_size)?;
        }
        if !draw_scale.x {
            return Ok(());
        }

        let tip = common.scale.x.tip;
        let tick_end = padding.bottom - text_size / 2.0;
        let label_base = if tip { tick_end } else { padding.bottom };
        let label_y = label_base - text_size * 1.5;
        layer.set_text_align(TextAlign::Center);
        for &index in &time_axis.labeled {
            let anchor = time_axis.anchors[index];
            if tip {
                layer.draw_line((anchor.x, anchor.y), (anchor.x, tick_end), Some(&[]))?;
            }
            let text = format_time(data[index].time, &common.scale.x.format)?;
            layer.fill_text(&text, anchor.x, label_y)?;
        }
        Ok(())
    }

    fn draw_line(&mut self) -> ChartResult<()> {
        let LineChartOptions { common, data, .. } = &self.options;
        let LineLayout {
            padding, points, ..
        } = &self.layout;
        let line = &common.line;

        for (point, datum) in points.iter().zip(data) {
            self.regions.register(PointRegion::new(point.x, point.y), datum.clone());
        }

        let layer = &mut self.layers.data;
        layer.set_stroke_style(common.color_at(0));
        layer.set_line_width(line.width);
        layer.set_line_dash(&[]);
        layer.begin_path();
        let smoothed = if line.bezier_curve {
            bezier_path(points)
        } else {
            None
        };
        match smoothed {
            Some(path) => {
                layer.move_to(path.start.x, path.start.y);
                for segment in &path.segments {
                    let control = segment.control;
                    layer.bezier_curve_to(
                        control.x,
                        control.y,
                        control.x,
                        control.y,
                        segment.end.x,
                        segment.end.y,
                    );
                }
            }
            None => {
                let floor = padding.bottom + common.scale.width / 2.0;
                let outline = area_outline(points, floor);
                if let Some((first, rest)) = outline.split_first() {
                    layer.move_to(first.x, first.y);
                    for point in rest {
                        layer.line_to(point.x, point.y);
                    }
                }
            }
        }

        if !line.gradient.is_empty() {
            let top = highest_y(points, padding.bottom);
            let mut gradient = layer.create_linear_gradient(0.0, top, 0.0, padding.bottom);
            for stop in &line.gradient {
                gradient.add_color_stop(*stop);
            }
            layer.set_fill_style(gradient);
            layer.fill()?;

            if let (Some(first), Some(last)) = (points.first(), points.last()) {
                let (width, height) = (self.viewport.width, self.viewport.height);
                layer.clear_rect(0.0, height, first.x + 1.0, height)?;
                layer.clear_rect(last.x - 1.0, height, width - last.x + 1.0, height)?;
            }
        }
        layer.stroke()
    }
}
