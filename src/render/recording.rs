use crate::error::{ChartError, ChartResult};
use crate::render::{DrawingSurface, Paint, TextAlign};

/// One recorded call on a [`RecordingSurface`], in device pixels.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    BeginPath,
    ClosePath,
    MoveTo { x: f64, y: f64 },
    LineTo { x: f64, y: f64 },
    BezierCurveTo { cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64 },
    Arc { x: f64, y: f64, radius: f64, start_angle: f64, end_angle: f64, anticlockwise: bool },
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Stroke,
    Fill,
    FillRect { x: f64, y: f64, width: f64, height: f64 },
    ClearRect { x: f64, y: f64, width: f64, height: f64 },
    FillText { text: String, x: f64, y: f64 },
    SetStrokeStyle(Paint),
    SetFillStyle(Paint),
    SetLineWidth(f64),
    SetLineDash(Vec<f64>),
    SetFontSize(f64),
    SetTextAlign(TextAlign),
}

/// Headless surface that records every primitive.
///
/// Used by tests and headless hosts. Rasterizing calls validate their
/// geometry so non-finite coordinates surface as errors before a real
/// backend is involved.
#[derive(Debug, Clone)]
pub struct RecordingSurface {
    width: u32,
    height: u32,
    commands: Vec<DrawCommand>,
    path_is_finite: bool,
}

impl RecordingSurface {
    #[must_use]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
            path_is_finite: true,
        }
    }

    #[must_use]
    pub fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Commands recorded after the most recent full-surface clear.
    #[must_use]
    pub fn commands_since_clear(&self) -> &[DrawCommand] {
        let (width, height) = (f64::from(self.width), f64::from(self.height));
        let start = self
            .commands
            .iter()
            .rposition(|command| match command {
                DrawCommand::ClearRect {
                    x,
                    y,
                    width: w,
                    height: h,
                } => *x <= 0.0 && *y <= 0.0 && x + w >= width && y + h >= height,
                _ => false,
            })
            .map_or(0, |index| index + 1);
        &self.commands[start..]
    }

    #[must_use]
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|command| predicate(command)).count()
    }

    #[must_use]
    pub fn texts(&self) -> Vec<&str> {
        self.commands_since_clear()
            .iter()
            .filter_map(|command| match command {
                DrawCommand::FillText { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    fn track_point(&mut self, coords: &[f64]) {
        if coords.iter().any(|value| !value.is_finite()) {
            self.path_is_finite = false;
        }
    }

    fn check_path(&self, op: &str) -> ChartResult<()> {
        if self.path_is_finite {
            Ok(())
        } else {
            Err(ChartError::InvalidData(format!(
                "{op} on a path with non-finite coordinates"
            )))
        }
    }
}

fn check_rect(op: &str, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
    if [x, y, width, height].iter().all(|value| value.is_finite()) {
        Ok(())
    } else {
        Err(ChartError::InvalidData(format!(
            "{op} rectangle must be finite"
        )))
    }
}

impl DrawingSurface for RecordingSurface {
    fn begin_path(&mut self) {
        self.path_is_finite = true;
        self.commands.push(DrawCommand::BeginPath);
    }

    fn close_path(&mut self) {
        self.commands.push(DrawCommand::ClosePath);
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.track_point(&[x, y]);
        self.commands.push(DrawCommand::MoveTo { x, y });
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.track_point(&[x, y]);
        self.commands.push(DrawCommand::LineTo { x, y });
    }

    fn bezier_curve_to(&mut self, cp1x: f64, cp1y: f64, cp2x: f64, cp2y: f64, x: f64, y: f64) {
        self.track_point(&[cp1x, cp1y, cp2x, cp2y, x, y]);
        self.commands.push(DrawCommand::BezierCurveTo {
            cp1x,
            cp1y,
            cp2x,
            cp2y,
            x,
            y,
        });
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
        self.track_point(&[x, y, radius, start_angle, end_angle]);
        self.commands.push(DrawCommand::Arc {
            x,
            y,
            radius,
            start_angle,
            end_angle,
            anticlockwise,
        });
    }

    fn rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        self.track_point(&[x, y, width, height]);
        self.commands.push(DrawCommand::Rect {
            x,
            y,
            width,
            height,
        });
    }

    fn stroke(&mut self) -> ChartResult<()> {
        self.check_path("stroke")?;
        self.commands.push(DrawCommand::Stroke);
        Ok(())
    }

    fn fill(&mut self) -> ChartResult<()> {
        self.check_path("fill")?;
        self.commands.push(DrawCommand::Fill);
        Ok(())
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        check_rect("fill_rect", x, y, width, height)?;
        self.commands.push(DrawCommand::FillRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn clear_rect(&mut self, x: f64, y: f64, width: f64, height: f64) -> ChartResult<()> {
        check_rect("clear_rect", x, y, width, height)?;
        self.commands.push(DrawCommand::ClearRect {
            x,
            y,
            width,
            height,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> ChartResult<()> {
        if !x.is_finite() || !y.is_finite() {
            return Err(ChartError::InvalidData(
                "text coordinates must be finite".to_owned(),
            ));
        }
        self.commands.push(DrawCommand::FillText {
            text: text.to_owned(),
            x,
            y,
        });
        Ok(())
    }

    fn set_stroke_style(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::SetStrokeStyle(paint));
    }

    fn set_fill_style(&mut self, paint: Paint) {
        self.commands.push(DrawCommand::SetFillStyle(paint));
    }

    fn set_line_width(&mut self, width: f64) {
        self.commands.push(DrawCommand::SetLineWidth(width));
    }

    fn set_line_dash(&mut self, dash: &[f64]) {
        self.commands.push(DrawCommand::SetLineDash(dash.to_vec()));
    }

    fn set_font_size(&mut self, size_px: f64) {
        self.commands.push(DrawCommand::SetFontSize(size_px));
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.commands.push(DrawCommand::SetTextAlign(align));
    }
}

#[cfg(test)]
mod tests {
    use super::{DrawCommand, RecordingSurface};
    use crate::render::DrawingSurface;

    #[test]
    fn stroke_rejects_non_finite_path() {
        let mut surface = RecordingSurface::new(100, 100);
        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(f64::NAN, 10.0);
        assert!(surface.stroke().is_err());

        surface.begin_path();
        surface.move_to(0.0, 0.0);
        surface.line_to(10.0, 10.0);
        surface.stroke().expect("finite path strokes");
    }

    #[test]
    fn commands_since_clear_skips_everything_before_full_clear() {
        let mut surface = RecordingSurface::new(100, 50);
        surface.fill_text("old", 1.0, 1.0).expect("text");
        surface.clear_rect(10.0, 10.0, 5.0, 5.0).expect("partial clear");
        surface.clear_rect(0.0, 0.0, 100.0, 50.0).expect("full clear");
        surface.fill_text("new", 1.0, 1.0).expect("text");

        assert_eq!(
            surface.commands_since_clear(),
            &[DrawCommand::FillText {
                text: "new".to_owned(),
                x: 1.0,
                y: 1.0
            }]
        );
        assert_eq!(surface.texts(), vec!["new"]);
    }
}
