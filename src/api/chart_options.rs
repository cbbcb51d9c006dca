use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::core::{ChartDatum, NearestPointStrategy, TimeSeriesDatum};
use crate::interaction::MountPoint;
use crate::render::{Color, ColorStop};

/// Builds the tooltip label for a hit datum. Receives the datum and the
/// semantic anchor at which the label is drawn.
#[derive(Clone)]
pub struct TooltipRenderer(Arc<dyn Fn(&ChartDatum, f64, f64) -> String + Send + Sync>);

impl TooltipRenderer {
    pub fn new(render: impl Fn(&ChartDatum, f64, f64) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(render))
    }

    #[must_use]
    pub fn render(&self, datum: &ChartDatum, x: f64, y: f64) -> String {
        (self.0)(datum, x, y)
    }
}

impl fmt::Debug for TooltipRenderer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("TooltipRenderer(..)")
    }
}

impl PartialEq for TooltipRenderer {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextOptions {
    pub size: f64,
    pub color: Color,
}

impl Default for TextOptions {
    fn default() -> Self {
        Self {
            size: 12.0,
            color: Color::rgb8(0x66, 0x66, 0x66),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineOptions {
    pub width: f64,
    /// Accepted and validated for configuration parity only; the line is
    /// stroked with the first palette color.
    pub color: Color,
    /// Vertical fill under the line; empty disables the fill.
    pub gradient: Vec<ColorStop>,
    pub bezier_curve: bool,
}

impl Default for LineOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::rgb8(0x66, 0x66, 0x66),
            gradient: Vec::new(),
            bezier_curve: false,
        }
    }
}

/// Time-axis label options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisLabelOptions {
    /// Token format understood by [`crate::core::format_time`].
    pub format: String,
    /// Draws a short tick under each labeled anchor.
    pub tip: bool,
}

impl Default for AxisLabelOptions {
    fn default() -> Self {
        Self {
            format: "MM-DD".to_owned(),
            tip: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScaleOptions {
    pub width: f64,
    pub color: Color,
    pub dash: Vec<f64>,
    pub x: AxisLabelOptions,
}

impl Default for ScaleOptions {
    fn default() -> Self {
        Self {
            width: 1.0,
            color: Color::rgb8(0x66, 0x66, 0x66),
            dash: vec![10.0, 10.0],
            x: AxisLabelOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TooltipOptions {
    /// Falls back to the datum value when unset.
    #[serde(skip)]
    pub renderer: Option<TooltipRenderer>,
    /// Only the first color is used, for both indicator and label.
    pub color: Vec<Color>,
}

impl TooltipOptions {
    #[must_use]
    pub fn label_for(&self, datum: &ChartDatum, x: f64, y: f64) -> String {
        match &self.renderer {
            Some(renderer) => renderer.render(datum, x, y),
            None => datum.value.to_string(),
        }
    }

    #[must_use]
    pub fn primary_color(&self) -> Color {
        self.color
            .first()
            .copied()
            .unwrap_or(Color::rgb8(0xff, 0x00, 0x00))
    }
}

impl Default for TooltipOptions {
    fn default() -> Self {
        Self {
            renderer: None,
            color: vec![Color::rgb8(0xff, 0x00, 0x00)],
        }
    }
}

/// Palette shared by every chart family.
#[must_use]
pub fn default_palette() -> Vec<Color> {
    vec![
        Color::rgb8(0x0e, 0x4a, 0xb3),
        Color::rgb8(0x1b, 0x68, 0xd9),
        Color::rgb8(0x2f, 0x88, 0xff),
        Color::rgb8(0x57, 0xa5, 0xff),
        Color::rgb8(0xa8, 0xd7, 0xff),
        Color::rgb8(0xd1, 0xeb, 0xff),
        Color::rgb8(0xf1, 0xf9, 0xff),
    ]
}

/// Options every chart family resolves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CommonOptions {
    pub mount_point: Option<MountPoint>,
    pub width: f64,
    pub height: f64,
    /// Device pixel ratio.
    pub dpi: f64,
    pub colors: Vec<Color>,
    pub text: TextOptions,
    pub line: LineOptions,
    pub scale: ScaleOptions,
    pub tooltip: TooltipOptions,
}

impl CommonOptions {
    /// Palette entry for `index`, cycling through the palette.
    #[must_use]
    pub fn color_at(&self, index: usize) -> Color {
        if self.colors.is_empty() {
            return Color::rgb8(0, 0, 0);
        }
        self.colors[index % self.colors.len()]
    }

    /// Appends the shared default palette after the configured colors.
    pub fn extend_with_default_palette(&mut self) {
        self.colors.extend(default_palette());
    }
}

impl Default for CommonOptions {
    fn default() -> Self {
        Self {
            mount_point: None,
            width: 800.0,
            height: 500.0,
            dpi: 2.0,
            colors: default_palette(),
            text: TextOptions::default(),
            line: LineOptions::default(),
            scale: ScaleOptions::default(),
            tooltip: TooltipOptions::default(),
        }
    }
}

/// Which axes a cartesian chart draws.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawScaleOptions {
    pub x: bool,
    pub y: bool,
}

impl Default for DrawScaleOptions {
    fn default() -> Self {
        Self { x: true, y: true }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarStyle {
    /// Stroke width of a bar in semantic pixels.
    pub width: f64,
}

impl Default for BarStyle {
    fn default() -> Self {
        Self { width: 10.0 }
    }
}

/// Bar growth animation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub enabled: bool,
    /// Growth per frame in semantic pixels.
    pub step: f64,
    /// Start delay between consecutive bars.
    pub stagger_ms: u64,
}

impl AnimationOptions {
    #[must_use]
    pub fn stagger(&self) -> Duration {
        Duration::from_millis(self.stagger_ms)
    }
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            enabled: true,
            step: 4.0,
            stagger_ms: 200,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChartOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    pub data: Vec<ChartDatum>,
    pub draw_scale: DrawScaleOptions,
    pub bar_style: BarStyle,
    pub scale_padding_left: f64,
    pub animation: AnimationOptions,
}

impl Default for BarChartOptions {
    fn default() -> Self {
        Self {
            common: CommonOptions::default(),
            data: Vec::new(),
            draw_scale: DrawScaleOptions::default(),
            bar_style: BarStyle::default(),
            scale_padding_left: 48.0,
            animation: AnimationOptions::default(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChartOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    pub data: Vec<TimeSeriesDatum>,
    pub draw_scale: DrawScaleOptions,
    pub scale_padding_left: f64,
    pub nearest_point: NearestPointStrategy,
}

impl Default for LineChartOptions {
    fn default() -> Self {
        Self {
            common: CommonOptions::default(),
            data: Vec::new(),
            draw_scale: DrawScaleOptions::default(),
            scale_padding_left: 48.0,
            nearest_point: NearestPointStrategy::default(),
        }
    }
}

/// Donut radii in semantic pixels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RadiusOptions {
    pub inner: f64,
    pub outer: f64,
}

impl Default for RadiusOptions {
    fn default() -> Self {
        Self {
            inner: 200.0,
            outer: 400.0,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieChartOptions {
    #[serde(flatten)]
    pub common: CommonOptions,
    pub data: Vec<ChartDatum>,
    pub radius: RadiusOptions,
    /// Clockwise rotation of the first slice from "up", in radians.
    pub start_angle: f64,
    /// Angular gap between slices, in radians.
    pub gap: f64,
    pub legends: bool,
}

impl Default for PieChartOptions {
    fn default() -> Self {
        Self {
            common: CommonOptions::default(),
            data: Vec::new(),
            radius: RadiusOptions::default(),
            start_angle: 0.0,
            gap: 0.0,
            legends: true,
        }
    }
}
