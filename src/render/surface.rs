use crate::error::ChartResult;
use crate::render::{Paint, TextAlign};

/// Raw 2D drawing surface in device pixels (origin top-left, y down).
///
/// The primitive set mirrors an immediate-mode canvas: path building is
/// infallible, while operations that rasterize (`stroke`, `fill`,
/// `fill_rect`, `clear_rect`, `fill_text`) may fail in the backend.
/// Angles are radians measured clockwise from +x, as on a canvas.
pub trait DrawingSurface {
    fn begin_path(&mut self);
    fn close_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64);
    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    );
    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64);

    fn stroke(&mut self) -> ChartResult<()>;
    fn fill(&mut self) -> ChartResult<()>;
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;
    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()>;
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()>;

    fn set_stroke_style(&mut self, paint: Paint);
    fn set_fill_style(&mut self, paint: Paint);
    fn set_line_width(&mut self, width: f64);
    fn set_line_dash(&mut self, dash: &[f64]);
    fn set_font_size(&mut self, size_px: f64);
    fn set_text_align(&mut self, align: TextAlign);
}
