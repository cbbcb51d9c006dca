use cairo::{Context, Format, ImageSurface, Operator};
use pango::FontDescription;

use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DrawingSurface, Paint, TextAlign};

/// Cairo + Pango + PangoCairo drawing surface.
///
/// Emulates canvas semantics on top of Cairo: the current path survives
/// `stroke`/`fill`/`clear_rect`/`fill_text` until the next `begin_path`,
/// and text is anchored on its baseline.
#[derive(Debug)]
pub struct CairoSurface {
    context: Context,
    stroke: Paint,
    fill: Paint,
    line_width: f64,
    font_size: f64,
    text_align: TextAlign,
}

impl CairoSurface {
    /// Creates an offscreen ARGB32 surface of `width` x `height` device pixels.
    pub fn new(width: i32, height: i32) -> ChartResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(ChartError::InvalidData(
                "cairo surface size must be > 0".to_owned(),
            ));
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| map_backend_error("failed to create cairo surface", err))?;
        let context = Context::new(&surface)
            .map_err(|err| map_backend_error("failed to create cairo context", err))?;
        Ok(Self::from_context(context))
    }

    /// Draws into an external context, for example a GTK draw callback.
    #[must_use]
    pub fn from_context(context: Context) -> Self {
        Self {
            context,
            stroke: Paint::Solid(Color::rgb(0.0, 0.0, 0.0)),
            fill: Paint::Solid(Color::rgb(0.0, 0.0, 0.0)),
            line_width: 1.0,
            font_size: 10.0,
            text_align: TextAlign::Left,
        }
    }

    #[must_use]
    pub fn backend_name(&self) -> &'static str {
        "cairo+pango+pangocairo"
    }

    #[must_use]
    pub fn context(&self) -> &Context {
        &self.context
    }

    fn apply_paint(&self, paint: &Paint) -> ChartResult<()> {
        match paint {
            Paint::Solid(color) => {
                self.context
                    .set_source_rgba(color.red, color.green, color.blue, color.alpha);
            }
            Paint::Linear(gradient) => {
                let pattern =
                    cairo::LinearGradient::new(gradient.x0, gradient.y0, gradient.x1, gradient.y1);
                for stop in &gradient.stops {
                    pattern.add_color_stop_rgba(
                        stop.offset,
                        stop.color.red,
                        stop.color.green,
                        stop.color.blue,
                        stop.color.alpha,
                    );
                }
                self.context
                    .set_source(&pattern)
                    .map_err(|err| map_backend_error("failed to set gradient source", err))?;
            }
        }
        Ok(())
    }

    /// Runs `draw` on a fresh path and restores the caller's path afterwards.
    fn with_detached_path(
        &mut self,
        op: &str,
        draw: impl FnOnce(&Context) -> Result<(), cairo::Error>,
    ) -> ChartResult<()> {
        let saved = self
            .context
            .copy_path()
            .map_err(|err| map_backend_error("failed to copy path", err))?;
        self.context.new_path();
        let result = draw(&self.context);
        self.context.new_path();
        self.context.append_path(&saved);
        result.map_err(|err| map_backend_error(op, err))
    }
}

impl DrawingSurface for CairoSurface {
    fn begin_path(&mut self) {
        self.context.new_path();
    }

    fn close_path(&mut self) {
        self.context.close_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.context.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.context.line_to(x, y);
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.context.curve_to(cp1x, cp1y, cp2x, cp2y, x, y);
    }

    fn arc(
        &mut self,
        x: f64,
        y: f64,
        radius: f64,
        start_angle: f64,
        end_angle: f64,
        anticlockwise: bool,
    ) {
        if anticlockwise {
            self.context.arc_negative(x, y, radius, start_angle, end_angle);
        } else {
            self.context.arc(x, y, radius, start_angle, end_angle);
        }
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.context.rectangle(x, y, width, height);
    }

    fn stroke(&mut self) -> ChartResult<()> {
        let paint = self.stroke.clone();
        self.apply_paint(&paint)?;
        self.context.set_line_width(self.line_width);
        self.context
            .stroke_preserve()
            .map_err(|err| map_backend_error("failed to stroke path", err))
    }

    fn fill(&mut self) -> ChartResult<()> {
        let paint = self.fill.clone();
        self.apply_paint(&paint)?;
        self.context
            .fill_preserve()
            .map_err(|err| map_backend_error("failed to fill path", err))
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        let paint = self.fill.clone();
        self.apply_paint(&paint)?;
        self.with_detached_path("failed to fill rectangle", |context| {
            context.rectangle(x, y, width, height);
            context.fill()
        })
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        self.with_detached_path("failed to clear rectangle", |context| {
            context.save()?;
            context.set_operator(Operator::Clear);
            context.rectangle(x, y, width, height);
            let filled = context.fill();
            context.restore()?;
            filled
        })
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()> {
        let paint = self.fill.clone();
        self.apply_paint(&paint)?;
        let font_size = self.font_size;
        let align = self.text_align;
        self.with_detached_path("failed to draw text", |context| {
            let layout = pangocairo::functions::create_layout(context);
            let font_description = FontDescription::from_string(&format!("Sans {font_size}px"));
            layout.set_font_description(Some(&font_description));
            layout.set_text(text);

            let (text_width, _text_height) = layout.pixel_size();
            let left = match align {
                TextAlign::Left => x,
                TextAlign::Center => x - f64::from(text_width) / 2.0,
                TextAlign::Right => x - f64::from(text_width),
            };
            let baseline = f64::from(layout.baseline()) / f64::from(pango::SCALE);
            context.move_to(left, y - baseline);
            pangocairo::functions::show_layout(context, &layout);
            Ok(())
        })
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.stroke = paint;
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.fill = paint;
    }

    fn set_line_width(&mut self, width: f64) {
        self.line_width = width;
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.context.set_dash(dash, 0.0);
    }

    fn set_font_size(&mut self, size_px: f64) {
        self.font_size = size_px;
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }
}

fn map_backend_error(prefix: &str, err: cairo::Error) -> ChartError {
    ChartError::Backend(format!("{prefix}: {err}"))
}
