use std::f64::consts::FRAC_PI_2;

use crate::error::ChartResult;
use crate::render::{DrawingSurface, LinearGradient, Paint, TextAlign};

/// Semantic coordinate space a chart draws in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CoordinateProfile {
    /// Origin bottom-left, y up. Used by bar and line charts.
    Cartesian { width: f64, height: f64 },
    /// Origin at the surface center, y up, angle 0 pointing up and
    /// increasing clockwise. Used by the pie chart.
    Polar { width: f64, height: f64 },
}

/// Maps semantic coordinates to device pixels for one surface.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    profile: CoordinateProfile,
    dpi: f64,
}

impl CoordinateTransform {
    #[must_use]
    pub const fn cartesian(width: f64, height: f64, dpi: f64) -> Self {
        Self {
            profile: CoordinateProfile::Cartesian { width, height },
            dpi,
        }
    }

    #[must_use]
    pub const fn polar(width: f64, height: f64, dpi: f64) -> Self {
        Self {
            profile: CoordinateProfile::Polar { width, height },
            dpi,
        }
    }

    #[must_use]
    pub fn profile(self) -> CoordinateProfile {
        self.profile
    }

    #[must_use]
    pub fn dpi(self) -> f64 {
        self.dpi
    }

    #[must_use]
    pub fn x(self, x: f64) -> f64 {
        match self.profile {
            CoordinateProfile::Cartesian { .. } => x * self.dpi,
            CoordinateProfile::Polar { width, .. } => (x + width / 2.0) * self.dpi,
        }
    }

    #[must_use]
    pub fn y(self, y: f64) -> f64 {
        match self.profile {
            CoordinateProfile::Cartesian { height, .. } => (height - y) * self.dpi,
            CoordinateProfile::Polar { height, .. } => (height / 2.0 - y) * self.dpi,
        }
    }

    #[must_use]
    pub fn point(self, x: f64, y: f64) -> (f64, f64) {
        (self.x(x), self.y(y))
    }

    /// Scales a length (radius, width, stroke, font size) to device pixels.
    #[must_use]
    pub fn length(self, value: f64) -> f64 {
        value * self.dpi
    }

    #[must_use]
    pub fn angle(self, angle: f64) -> f64 {
        match self.profile {
            CoordinateProfile::Cartesian { .. } => angle,
            CoordinateProfile::Polar { .. } => angle - FRAC_PI_2,
        }
    }
}

/// Decorates a device-space surface so every call takes semantic
/// coordinates.
///
/// Points go through the transform's x/y mapping; radii, rectangle
/// extents, stroke widths and font sizes are only multiplied by dpi.
/// Rectangles are addressed by their top-left corner in semantic space.
#[derive(Debug)]
pub struct TransformedSurface<S> {
    inner: S,
    transform: CoordinateTransform,
}

impl<S: DrawingSurface> TransformedSurface<S> {
    #[must_use]
    pub fn new(inner: S, transform: CoordinateTransform) -> Self {
        Self { inner, transform }
    }

    #[must_use]
    pub fn transform(&self) -> CoordinateTransform {
        self.transform
    }

    #[must_use]
    pub fn inner(&self) -> &S {
        &self.inner
    }

    pub fn inner_mut(&mut self) -> &mut S {
        &mut self.inner
    }

    #[must_use]
    pub fn into_inner(self) -> S {
        self.inner
    }

    pub fn begin_path(&mut self) {
        self.inner.begin_path();
    }

    pub fn close_path(&mut self) {
        self.inner.close_path();
    }

    pub fn move_to(&mut self, x: f64, y: f64) {
        let (x, y) = self.transform.point(x, y);
        self.inner.move_to(x, y);
    }

    pub fn line_to(&mut self, x: f64, y: f64) {
        let (x, y) = self.transform.point(x, y);
        self.inner.line_to(x, y);
    }

    pub fn bezier_curve_to(
        &mut self,
        cp1x: f64,
        cp1y: f64,
        cp2x: f64,
        cp2y: f64,
        x: f64,
        y: f64,
    ) {
        let t = self.transform;
        self.inner.bezier_curve_to(
            t.x(cp1x),
            t.y(cp1y),
            t.x(cp2x),
            t.y(cp2y),
            t.x(x),
            t.y(y),
        );
    }

    pub fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        let t = self.transform;
        self.inner.arc(
            t.x(x),
            t.y(y),
            t.length(radius),
            t.angle(start_angle),
            t.angle(end_angle),
            anticlockwise,
        );
    }

    pub fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let t = self.transform;
        self.inner
            .rect(t.x(x), t.y(y), t.length(width), t.length(height));
    }

    pub fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        let t = self.transform;
        self.inner
            .fill_rect(t.x(x), t.y(y), t.length(width), t.length(height))
    }

    pub fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        let t = self.transform;
        self.inner
            .clear_rect(t.x(x), t.y(y), t.length(width), t.length(height))
    }

    pub fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()> {
        let (x, y) = self.transform.point(x, y);
        self.inner.fill_text(text, x, y)
    }

    /// Creates a gradient whose endpoints are given in semantic space.
    #[must_use]
    pub fn create_linear_gradient(&self, x0: f64, y0: f64, x1: f64, y1: f64) -> LinearGradient {
        let t = self.transform;
        LinearGradient::new(t.x(x0), t.y(y0), t.x(x1), t.y(y1))
    }

    pub fn stroke(&mut self) -> ChartResult<()> {
        self.inner.stroke()
    }

    pub fn fill(&mut self) -> ChartResult<()> {
        self.inner.fill()
    }

    pub fn set_stroke_style(&mut self, paint: impl Into<Paint>) {
        self.inner.set_stroke_style(paint.into());
    }

    pub fn set_fill_style(&mut self, paint: impl Into<Paint>) {
        self.inner.set_fill_style(paint.into());
    }

    pub fn set_line_width(&mut self, width: f64) {
        let width = self.transform.length(width);
        self.inner.set_line_width(width);
    }

    pub fn set_line_dash(&mut self, dash: &[f64]) {
        self.inner.set_line_dash(dash);
    }

    pub fn set_font_size(&mut self, size_px: f64) {
        let size = self.transform.length(size_px);
        self.inner.set_font_size(size);
    }

    pub fn set_text_align(&mut self, align: TextAlign) {
        self.inner.set_text_align(align);
    }

    /// Strokes a single segment as its own path, optionally dashed.
    pub fn draw_line(
        &mut self,
        from: (f64, f64),
        to: (f64, f64),
        dash: Option<&[f64]>,
    ) -> ChartResult<()> {
        self.begin_path();
        if let Some(dash) = dash {
            self.set_line_dash(dash);
        }
        self.move_to(from.0, from.1);
        self.line_to(to.0, to.1);
        self.stroke()?;
        self.close_path();
        Ok(())
    }

    /// Clears the entire surface.
    pub fn clear(&mut self) -> ChartResult<()> {
        let (x, y, width, height) = self.semantic_bounds();
        self.clear_rect(x, y, width, height)
    }

    /// Top-left corner and extent of the whole surface in semantic space.
    #[must_use]
    pub fn semantic_bounds(&self) -> (f64, f64, f64, f64) {
        match self.transform.profile {
            CoordinateProfile::Cartesian { width, height } => (0.0, height, width, height),
            CoordinateProfile::Polar { width, height } => {
                (-width / 2.0, height / 2.0, width, height)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, PI};

    use super::{CoordinateTransform, TransformedSurface};
    use crate::render::{DrawCommand, RecordingSurface};

    #[test]
    fn cartesian_profile_flips_y_and_scales_by_dpi() {
        let t = CoordinateTransform::cartesian(800.0, 500.0, 2.0);
        assert_eq!(t.point(10.0, 0.0), (20.0, 1000.0));
        assert_eq!(t.point(10.0, 500.0), (20.0, 0.0));
        assert_eq!(t.angle(PI), PI);
    }

    #[test]
    fn polar_profile_centers_origin_and_rotates_angles() {
        let t = CoordinateTransform::polar(800.0, 500.0, 2.0);
        assert_eq!(t.point(0.0, 0.0), (800.0, 500.0));
        assert_eq!(t.point(-400.0, 250.0), (0.0, 0.0));
        assert!((t.angle(0.0) + FRAC_PI_2).abs() <= 1e-12);
    }

    #[test]
    fn clear_covers_whole_device_surface_in_both_profiles() {
        let mut cartesian = TransformedSurface::new(
            RecordingSurface::new(1600, 1000),
            CoordinateTransform::cartesian(800.0, 500.0, 2.0),
        );
        cartesian.clear().expect("clear");
        let mut polar = TransformedSurface::new(
            RecordingSurface::new(1600, 1000),
            CoordinateTransform::polar(800.0, 500.0, 2.0),
        );
        polar.clear().expect("clear");

        let expected = DrawCommand::ClearRect {
            x: 0.0,
            y: 0.0,
            width: 1600.0,
            height: 1000.0,
        };
        assert_eq!(cartesian.inner().commands(), &[expected.clone()]);
        assert_eq!(polar.inner().commands(), &[expected]);
    }

    #[test]
    fn arc_scales_radius_but_not_through_point_transform() {
        let mut surface = TransformedSurface::new(
            RecordingSurface::new(1600, 1000),
            CoordinateTransform::polar(800.0, 500.0, 2.0),
        );
        surface.arc(0.0, 0.0, 100.0, 0.0, PI, false);
        assert_eq!(
            surface.inner().commands(),
            &[DrawCommand::Arc {
                x: 800.0,
                y: 500.0,
                radius: 200.0,
                start_angle: -FRAC_PI_2,
                end_angle: PI - FRAC_PI_2,
                anticlockwise: false,
            }]
        );
    }
}
