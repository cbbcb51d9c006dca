use std::time::Duration;

use tracing::debug;

use crate::core::scale::bar_category_anchors;
use crate::core::{
    AxisPadding, BarGeometry, ChartDatum, RectRegion, RegionRegistry, Registered, ScalePoint,
    ValueAxisLayout, ValueTick, Viewport, project_bars,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{MountPoint, PointerInput};
use crate::render::{
    CoordinateTransform, DrawingSurface, LayerKind, LayerStack, TextAlign, TransformedSurface,
};

use super::animation::AnimationScheduler;
use super::axis_renderer::{AXIS_FONT_RATIO, apply_scale_style, draw_axis_lines, draw_value_axis};
use super::chart_options::BarChartOptions;
use super::settings::{BarChartSettings, Merge};
use super::validation::{validate_bar_options, validate_chart_data};

/// Dash pattern of the bar tooltip indicator.
const TOOLTIP_DASH: [f64; 2] = [15.0, 15.0];

/// Gap between the indicator's upper end and the tooltip label.
const TOOLTIP_LABEL_GAP: f64 = 10.0;

struct BarLayout {
    padding: AxisPadding,
    axis: ValueAxisLayout,
    anchors: Vec<ScalePoint>,
    bars: Vec<BarGeometry>,
}

impl BarLayout {
    fn compute(options: &BarChartOptions, data: &[ChartDatum]) -> ChartResult<Self> {
        let common = &options.common;
        let padding = AxisPadding::bar(options.scale_padding_left, common.text.size);
        let max_value = data
            .iter()
            .map(|datum| datum.value)
            .fold(f64::NEG_INFINITY, f64::max);
        let axis = ValueAxisLayout::compute(max_value, common.height, padding, common.text.size)?;
        let anchors =
            bar_category_anchors(data.len(), common.width, padding, options.bar_style.width);
        let bars = project_bars(data, &anchors, &axis, options.bar_style.width)?;
        Ok(Self {
            padding,
            axis,
            anchors,
            bars,
        })
    }
}

/// Animated bar chart drawn onto three stacked surfaces.
pub struct BarChart<S: DrawingSurface> {
    options: BarChartOptions,
    viewport: Viewport,
    mount_point: MountPoint,
    layers: LayerStack<TransformedSurface<S>>,
    layout: BarLayout,
    regions: RegionRegistry<RectRegion, ChartDatum>,
    animations: AnimationScheduler,
}

impl<S: DrawingSurface> BarChart<S> {
    /// Resolves `settings`, validates them and draws the first frame.
    ///
    /// Non-zero bars are queued for growth; drive them with
    /// [`BarChart::on_animation_frame`].
    pub fn new(settings: BarChartSettings, surfaces: LayerStack<S>) -> ChartResult<Self> {
        let mut options = settings.merge(&BarChartOptions::default());
        options.common.extend_with_default_palette();
        let viewport = validate_bar_options(&options)?;
        let mount_point = options
            .common
            .mount_point
            .clone()
            .ok_or(ChartError::MissingMountPoint)?;
        let layout = BarLayout::compute(&options, &options.data)?;

        let transform =
            CoordinateTransform::cartesian(viewport.width, viewport.height, options.common.dpi);
        let mut chart = Self {
            options,
            viewport,
            mount_point,
            layers: surfaces.transformed(transform),
            layout,
            regions: RegionRegistry::default(),
            animations: AnimationScheduler::default(),
        };
        chart.draw()?;
        debug!(
            bars = chart.options.data.len(),
            scale_max = chart.layout.axis.scale_max,
            "bar chart mounted"
        );
        Ok(chart)
    }

    /// Replaces the data, clears every layer and redraws.
    ///
    /// Growth animations still running from the previous data are dropped.
    pub fn rerender(&mut self, data: Vec<ChartDatum>) -> ChartResult<()> {
        validate_chart_data("bar", &data)?;
        let layout = BarLayout::compute(&self.options, &data)?;

        self.options.data = data;
        self.layout = layout;
        self.regions.clear();
        self.layers.clear_all()?;
        let generation = self.animations.restart();
        self.draw()?;
        debug!(bars = self.options.data.len(), generation, "bar chart rerendered");
        Ok(())
    }

    /// Advances bar growth by `delta`; returns `true` while frames remain.
    pub fn on_animation_frame(&mut self, delta: Duration) -> ChartResult<bool> {
        let layer = &mut self.layers.data;
        for step in self.animations.advance(delta) {
            layer.begin_path();
            layer.move_to(step.x, step.baseline);
            layer.line_to(step.x, step.position);
            layer.stroke()?;
        }
        Ok(!self.animations.is_idle())
    }

    /// Hit-tests `input` against the bars and updates the tooltip overlay.
    ///
    /// Returns the hit datum, or `None` after clearing the overlay.
    pub fn handle_input(&mut self, input: PointerInput) -> ChartResult<Option<ChartDatum>> {
        let (x, y) = input.cartesian_position(&self.mount_point, self.viewport.height);
        let hit = self
            .regions
            .hit_rect(x, y)
            .map(|(index, region)| (index, region.datum.clone()));

        let overlay = &mut self.layers.overlay;
        overlay.begin_path();
        overlay.clear()?;
        let Some((index, datum)) = hit else {
            return Ok(None);
        };

        let common = &self.options.common;
        let padding = self.layout.padding;
        let anchor = self.layout.anchors[index];
        let tip_y = self.viewport.height - padding.bottom + padding.top;
        let color = common.tooltip.primary_color();
        overlay.set_stroke_style(color);
        overlay.set_fill_style(color);
        overlay.set_line_width(common.line.width);
        overlay.set_font_size(common.text.size * AXIS_FONT_RATIO);
        overlay.set_text_align(TextAlign::Center);
        overlay.draw_line(
            (anchor.x, anchor.y),
            (anchor.x, tip_y - TOOLTIP_LABEL_GAP),
            Some(&TOOLTIP_DASH),
        )?;
        let label = common.tooltip.label_for(&datum, anchor.x, tip_y);
        overlay.fill_text(&label, anchor.x, tip_y)?;
        Ok(Some(datum))
    }

    #[must_use]
    pub fn options(&self) -> &BarChartOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn scale_coordinates(&self) -> &[ScalePoint] {
        &self.layout.anchors
    }

    #[must_use]
    pub fn value_axis(&self) -> &ValueAxisLayout {
        &self.layout.axis
    }

    #[must_use]
    pub fn value_ticks(&self) -> &[ValueTick] {
        &self.layout.axis.ticks
    }

    #[must_use]
    pub fn bars(&self) -> &[BarGeometry] {
        &self.layout.bars
    }

    #[must_use]
    pub fn registered_regions(&self) -> &[Registered<RectRegion, ChartDatum>] {
        self.regions.regions()
    }

    #[must_use]
    pub fn animations(&self) -> &AnimationScheduler {
        &self.animations
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
        self.draw_bars()
    }

    fn draw_scales(&mut self) -> ChartResult<()> {
        let common = &self.options.common;
        let draw_scale = self.options.draw_scale;
        let BarLayout {
            padding,
            axis,
            anchors,
            ..
        } = &self.layout;
        let (width, height) = (self.viewport.width, self.viewport.height);
        let text_size = common.text.size;

        let layer = &mut self.layers.scale;
        apply_scale_style(layer, common);
        draw_axis_lines(layer, *padding, width, height, draw_scale, &[])?;
        if draw_scale.y {
            draw_value_axis(layer, axis, *padding, width, text_size)?;
        }
        if draw_scale.x {
            let tick_end = padding.bottom - text_size / 2.0;
            layer.set_text_align(TextAlign::Center);
            for (anchor, datum) in anchors.iter().zip(&self.options.data) {
                layer.draw_line((anchor.x, anchor.y), (anchor.x, tick_end), Some(&[]))?;
                layer.fill_text(&datum.item, anchor.x, tick_end - text_size * 1.5)?;
            }
        }
        Ok(())
    }

    fn draw_bars(&mut self) -> ChartResult<()> {
        let BarChartOptions {
            common,
            data,
            bar_style,
            animation,
            ..
        } = &self.options;
        let layer = &mut self.layers.data;
        layer.set_stroke_style(common.color_at(0));
        layer.set_line_width(bar_style.width);
        layer.set_line_dash(&[]);

        for (index, (bar, datum)) in self.layout.bars.iter().zip(data).enumerate() {
            self.regions.register(bar.hit_region, datum.clone());
            if !bar.is_drawn() {
                continue;
            }
            if animation.enabled {
                let order = u32::try_from(index).unwrap_or(u32::MAX);
                let delay = animation.stagger().saturating_mul(order);
                self.animations
                    .schedule(index, bar.center_x, bar.baseline, bar.top, animation.step, delay);
            } else {
                layer.draw_line((bar.center_x, bar.baseline), (bar.center_x, bar.top), None)?;
            }
        }
        Ok(())
    }
}
