use tracing::debug;

use crate::core::pie_series::enlarged;
use crate::core::{
    ChartDatum, LabelSide, PieLabel, RegionRegistry, Registered, SectorRegion, Viewport,
    layout_labels, project_slices,
};
use crate::error::{ChartError, ChartResult};
use crate::interaction::{HoverState, MountPoint, PointerInput};
use crate::render::{
    Color, CoordinateTransform, DrawingSurface, LayerKind, LayerStack, TextAlign,
    TransformedSurface,
};

use super::chart_options::PieChartOptions;
use super::settings::{Merge, PieChartSettings};
use super::validation::{validate_chart_data, validate_pie_options};

fn slice_layout(
    options: &PieChartOptions,
    data: &[ChartDatum],
) -> ChartResult<(Vec<SectorRegion>, Vec<PieLabel>)> {
    let sectors = project_slices(
        data,
        options.radius.inner,
        options.radius.outer,
        options.start_angle,
        options.gap,
    )?;
    let labels = if options.legends {
        let common = &options.common;
        layout_labels(data, &sectors, common.width, common.height, common.text.size)
    } else {
        Vec::new()
    };
    Ok((sectors, labels))
}

fn fill_wedge<S: DrawingSurface>(
    layer: &mut TransformedSurface<S>,
    sector: &SectorRegion,
    color: Color,
) -> ChartResult<()> {
    layer.begin_path();
    layer.set_fill_style(color);
    layer.arc(
        0.0,
        0.0,
        sector.outer_radius,
        sector.start_angle,
        sector.end_angle,
        false,
    );
    layer.arc(
        0.0,
        0.0,
        sector.inner_radius,
        sector.end_angle,
        sector.start_angle,
        true,
    );
    layer.fill()?;
    layer.close_path();
    Ok(())
}

/// Donut chart drawn in polar-centered coordinates.
pub struct PieChart<S: DrawingSurface> {
    options: PieChartOptions,
    viewport: Viewport,
    mount_point: MountPoint,
    layers: LayerStack<TransformedSurface<S>>,
    labels: Vec<PieLabel>,
    regions: RegionRegistry<SectorRegion, ChartDatum>,
    hover: HoverState,
}

impl<S: DrawingSurface> PieChart<S> {
    pub fn new(settings: PieChartSettings, surfaces: LayerStack<S>) -> ChartResult<Self> {
        let mut options = settings.merge(&PieChartOptions::default());
        options.common.extend_with_default_palette();
        let viewport = validate_pie_options(&options)?;
        let mount_point = options
            .common
            .mount_point
            .clone()
            .ok_or(ChartError::MissingMountPoint)?;
        let (sectors, labels) = slice_layout(&options, &options.data)?;

        let transform =
            CoordinateTransform::polar(viewport.width, viewport.height, options.common.dpi);
        let mut chart = Self {
            options,
            viewport,
            mount_point,
            layers: surfaces.transformed(transform),
            labels,
            regions: RegionRegistry::default(),
            hover: HoverState::default(),
        };
        chart.draw(&sectors)?;
        debug!(slices = sectors.len(), "pie chart mounted");
        Ok(chart)
    }

    /// Replaces the data, clears every layer and redraws.
    pub fn rerender(&mut self, data: Vec<ChartDatum>) -> ChartResult<()> {
        validate_chart_data("pie", &data)?;
        let (sectors, labels) = slice_layout(&self.options, &data)?;

        self.options.data = data;
        self.labels = labels;
        self.regions.clear();
        self.hover.reset();
        self.layers.clear_all()?;
        self.draw(&sectors)?;
        debug!(slices = sectors.len(), "pie chart rerendered");
        Ok(())
    }

    /// Highlights the wedge under the pointer on the overlay.
    ///
    /// The enlarged wedge is redrawn only when the hovered wedge changes; a
    /// miss clears the overlay.
    pub fn handle_input(&mut self, input: PointerInput) -> ChartResult<Option<ChartDatum>> {
        let (x, y) = input.polar_position(
            &self.mount_point,
            self.viewport.width,
            self.viewport.height,
        );
        let hit = self
            .regions
            .hit_sector(x, y)
            .map(|(index, region)| (index, region.shape, region.datum.clone()));

        let overlay = &mut self.layers.overlay;
        let Some((index, sector, datum)) = hit else {
            self.hover.leave();
            overlay.begin_path();
            overlay.clear()?;
            return Ok(None);
        };

        if self.hover.enter(index) {
            overlay.begin_path();
            overlay.clear()?;
            fill_wedge(overlay, &enlarged(&sector), self.options.common.color_at(index))?;
        }
        Ok(Some(datum))
    }

    #[must_use]
    pub fn options(&self) -> &PieChartOptions {
        &self.options
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[must_use]
    pub fn labels(&self) -> &[PieLabel] {
        &self.labels
    }

    /// Index of the currently enlarged wedge.
    #[must_use]
    pub fn hovered(&self) -> Option<usize> {
        self.hover.current()
    }

    #[must_use]
    pub fn registered_regions(&self) -> &[Registered<SectorRegion, ChartDatum>] {
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

    fn draw(&mut self, sectors: &[SectorRegion]) -> ChartResult<()> {
        let common = &self.options.common;
        let layer = &mut self.layers.data;
        layer.set_line_width(common.line.width);
        layer.set_line_dash(&[]);
        for (index, (sector, datum)) in sectors.iter().zip(&self.options.data).enumerate() {
            fill_wedge(layer, sector, common.color_at(index))?;
            self.regions.register(*sector, datum.clone());
        }

        layer.set_font_size(common.text.size);
        for label in &self.labels {
            let color = common.color_at(label.slice);
            layer.set_stroke_style(color);
            layer.set_fill_style(color);
            layer.set_text_align(match label.side {
                LabelSide::Right => TextAlign::Right,
                LabelSide::Left => TextAlign::Left,
            });
            layer.fill_text(&label.text, label.x, label.y)?;
            layer.draw_line(label.leader_start, label.leader_end, None)?;
        }
        Ok(())
    }
}
