use serde::{Deserialize, Serialize};

use crate::core::{ChartDatum, NearestPointStrategy, TimeSeriesDatum};
use crate::error::{ChartError, ChartResult};
use crate::interaction::MountPoint;
use crate::render::{Color, ColorStop};

use super::chart_options::{
    AnimationOptions, AxisLabelOptions, BarChartOptions, BarStyle, CommonOptions,
    DrawScaleOptions, LineChartOptions, LineOptions, PieChartOptions, RadiusOptions,
    ScaleOptions, TextOptions, TooltipOptions, TooltipRenderer,
};

/// Resolves caller-supplied settings against a fully populated default.
///
/// `Some` always wins, including `Some(0.0)`, `Some(false)` and empty
/// strings or vectors. Nested categories merge field by field; vectors and
/// opaque values (mount point, tooltip renderer) are taken as supplied.
/// `None` copies the default.
pub trait Merge {
    type Resolved;

    fn merge(self, defaults: &Self::Resolved) -> Self::Resolved;
}

fn pick<T: Clone>(supplied: Option<T>, default: &T) -> T {
    supplied.unwrap_or_else(|| default.clone())
}

fn nested<M: Merge>(supplied: Option<M>, default: &M::Resolved) -> M::Resolved
where
    M::Resolved: Clone,
{
    match supplied {
        Some(settings) => settings.merge(default),
        None => default.clone(),
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TextSettings {
    pub size: Option<f64>,
    pub color: Option<Color>,
}

impl Merge for TextSettings {
    type Resolved = TextOptions;

    fn merge(self, defaults: &TextOptions) -> TextOptions {
        TextOptions {
            size: pick(self.size, &defaults.size),
            color: pick(self.color, &defaults.color),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineSettings {
    pub width: Option<f64>,
    pub color: Option<Color>,
    pub gradient: Option<Vec<ColorStop>>,
    pub bezier_curve: Option<bool>,
}

impl Merge for LineSettings {
    type Resolved = LineOptions;

    fn merge(self, defaults: &LineOptions) -> LineOptions {
        LineOptions {
            width: pick(self.width, &defaults.width),
            color: pick(self.color, &defaults.color),
            gradient: pick(self.gradient, &defaults.gradient),
            bezier_curve: pick(self.bezier_curve, &defaults.bezier_curve),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AxisLabelSettings {
    pub format: Option<String>,
    pub tip: Option<bool>,
}

impl Merge for AxisLabelSettings {
    type Resolved = AxisLabelOptions;

    fn merge(self, defaults: &AxisLabelOptions) -> AxisLabelOptions {
        AxisLabelOptions {
            format: pick(self.format, &defaults.format),
            tip: pick(self.tip, &defaults.tip),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScaleSettings {
    pub width: Option<f64>,
    pub color: Option<Color>,
    pub dash: Option<Vec<f64>>,
    pub x: Option<AxisLabelSettings>,
}

impl Merge for ScaleSettings {
    type Resolved = ScaleOptions;

    fn merge(self, defaults: &ScaleOptions) -> ScaleOptions {
        ScaleOptions {
            width: pick(self.width, &defaults.width),
            color: pick(self.color, &defaults.color),
            dash: pick(self.dash, &defaults.dash),
            x: nested(self.x, &defaults.x),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TooltipSettings {
    #[serde(skip)]
    pub renderer: Option<TooltipRenderer>,
    pub color: Option<Vec<Color>>,
}

impl Merge for TooltipSettings {
    type Resolved = TooltipOptions;

    fn merge(self, defaults: &TooltipOptions) -> TooltipOptions {
        TooltipOptions {
            renderer: self.renderer.or_else(|| defaults.renderer.clone()),
            color: pick(self.color, &defaults.color),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CommonSettings {
    pub mount_point: Option<MountPoint>,
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub dpi: Option<f64>,
    pub colors: Option<Vec<Color>>,
    pub text: Option<TextSettings>,
    pub line: Option<LineSettings>,
    pub scale: Option<ScaleSettings>,
    pub tooltip: Option<TooltipSettings>,
}

impl Merge for CommonSettings {
    type Resolved = CommonOptions;

    fn merge(self, defaults: &CommonOptions) -> CommonOptions {
        CommonOptions {
            mount_point: self.mount_point.or_else(|| defaults.mount_point.clone()),
            width: pick(self.width, &defaults.width),
            height: pick(self.height, &defaults.height),
            dpi: pick(self.dpi, &defaults.dpi),
            colors: pick(self.colors, &defaults.colors),
            text: nested(self.text, &defaults.text),
            line: nested(self.line, &defaults.line),
            scale: nested(self.scale, &defaults.scale),
            tooltip: nested(self.tooltip, &defaults.tooltip),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DrawScaleSettings {
    pub x: Option<bool>,
    pub y: Option<bool>,
}

impl Merge for DrawScaleSettings {
    type Resolved = DrawScaleOptions;

    fn merge(self, defaults: &DrawScaleOptions) -> DrawScaleOptions {
        DrawScaleOptions {
            x: pick(self.x, &defaults.x),
            y: pick(self.y, &defaults.y),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarStyleSettings {
    pub width: Option<f64>,
}

impl Merge for BarStyleSettings {
    type Resolved = BarStyle;

    fn merge(self, defaults: &BarStyle) -> BarStyle {
        BarStyle {
            width: pick(self.width, &defaults.width),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationSettings {
    pub enabled: Option<bool>,
    pub step: Option<f64>,
    pub stagger_ms: Option<u64>,
}

impl Merge for AnimationSettings {
    type Resolved = AnimationOptions;

    fn merge(self, defaults: &AnimationOptions) -> AnimationOptions {
        AnimationOptions {
            enabled: pick(self.enabled, &defaults.enabled),
            step: pick(self.step, &defaults.step),
            stagger_ms: pick(self.stagger_ms, &defaults.stagger_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RadiusSettings {
    pub inner: Option<f64>,
    pub outer: Option<f64>,
}

impl Merge for RadiusSettings {
    type Resolved = RadiusOptions;

    fn merge(self, defaults: &RadiusOptions) -> RadiusOptions {
        RadiusOptions {
            inner: pick(self.inner, &defaults.inner),
            outer: pick(self.outer, &defaults.outer),
        }
    }
}

/// Caller-facing bar chart configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub data: Option<Vec<ChartDatum>>,
    pub draw_scale: Option<DrawScaleSettings>,
    pub bar_style: Option<BarStyleSettings>,
    pub scale_padding_left: Option<f64>,
    pub animation: Option<AnimationSettings>,
}

impl Merge for BarChartSettings {
    type Resolved = BarChartOptions;

    fn merge(self, defaults: &BarChartOptions) -> BarChartOptions {
        BarChartOptions {
            common: self.common.merge(&defaults.common),
            data: pick(self.data, &defaults.data),
            draw_scale: nested(self.draw_scale, &defaults.draw_scale),
            bar_style: nested(self.bar_style, &defaults.bar_style),
            scale_padding_left: pick(self.scale_padding_left, &defaults.scale_padding_left),
            animation: nested(self.animation, &defaults.animation),
        }
    }
}

/// Caller-facing line chart configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub data: Option<Vec<TimeSeriesDatum>>,
    pub draw_scale: Option<DrawScaleSettings>,
    pub scale_padding_left: Option<f64>,
    pub nearest_point: Option<NearestPointStrategy>,
}

impl Merge for LineChartSettings {
    type Resolved = LineChartOptions;

    fn merge(self, defaults: &LineChartOptions) -> LineChartOptions {
        LineChartOptions {
            common: self.common.merge(&defaults.common),
            data: pick(self.data, &defaults.data),
            draw_scale: nested(self.draw_scale, &defaults.draw_scale),
            scale_padding_left: pick(self.scale_padding_left, &defaults.scale_padding_left),
            nearest_point: pick(self.nearest_point, &defaults.nearest_point),
        }
    }
}

/// Caller-facing pie chart configuration; every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PieChartSettings {
    #[serde(flatten)]
    pub common: CommonSettings,
    pub data: Option<Vec<ChartDatum>>,
    pub radius: Option<RadiusSettings>,
    pub start_angle: Option<f64>,
    pub gap: Option<f64>,
    pub legends: Option<bool>,
}

impl Merge for PieChartSettings {
    type Resolved = PieChartOptions;

    fn merge(self, defaults: &PieChartOptions) -> PieChartOptions {
        PieChartOptions {
            common: self.common.merge(&defaults.common),
            data: pick(self.data, &defaults.data),
            radius: nested(self.radius, &defaults.radius),
            start_angle: pick(self.start_angle, &defaults.start_angle),
            gap: pick(self.gap, &defaults.gap),
            legends: pick(self.legends, &defaults.legends),
        }
    }
}

macro_rules! impl_json_settings {
    ($($settings:ty),+ $(,)?) => {
        $(
            impl $settings {
                /// Deserializes settings from JSON; absent keys stay unset.
                pub fn from_json_str(input: &str) -> ChartResult<Self> {
                    serde_json::from_str(input).map_err(|e| {
                        ChartError::InvalidData(format!("failed to parse settings: {e}"))
                    })
                }

                /// Serializes settings to pretty JSON.
                pub fn to_json_pretty(&self) -> ChartResult<String> {
                    serde_json::to_string_pretty(self).map_err(|e| {
                        ChartError::InvalidData(format!("failed to serialize settings: {e}"))
                    })
                }
            }
        )+
    };
}

impl_json_settings!(BarChartSettings, LineChartSettings, PieChartSettings);

#[cfg(test)]
mod tests {
    use super::{BarChartSettings, CommonSettings, Merge, ScaleSettings, TextSettings};
    use crate::api::chart_options::{BarChartOptions, CommonOptions, ScaleOptions};

    #[test]
    fn present_values_win_even_when_falsy() {
        let defaults = BarChartOptions::default();
        let resolved = BarChartSettings {
            scale_padding_left: Some(0.0),
            ..BarChartSettings::default()
        }
        .merge(&defaults);
        assert_eq!(resolved.scale_padding_left, 0.0);
        assert_eq!(resolved.bar_style, defaults.bar_style);
    }

    #[test]
    fn supplied_vectors_replace_defaults_wholesale() {
        let defaults = ScaleOptions::default();
        let resolved = ScaleSettings {
            dash: Some(vec![1.0]),
            ..ScaleSettings::default()
        }
        .merge(&defaults);
        assert_eq!(resolved.dash, vec![1.0]);
        assert_eq!(resolved.x, defaults.x);
    }

    #[test]
    fn nested_categories_merge_field_by_field() {
        let defaults = CommonOptions::default();
        let resolved = CommonSettings {
            text: Some(TextSettings {
                size: Some(20.0),
                color: None,
            }),
            ..CommonSettings::default()
        }
        .merge(&defaults);
        assert_eq!(resolved.text.size, 20.0);
        assert_eq!(resolved.text.color, defaults.text.color);
        assert_eq!(resolved.width, 800.0);
    }
}
