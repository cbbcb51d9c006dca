mod animation;
mod axis_renderer;
mod bar_chart;
mod chart_options;
mod line_chart;
mod pie_chart;
mod settings;
mod validation;

pub use animation::{AnimationScheduler, AnimationStep, BarAnimation};
pub use bar_chart::BarChart;
pub use chart_options::{
    AnimationOptions, AxisLabelOptions, BarChartOptions, BarStyle, CommonOptions,
    DrawScaleOptions, LineChartOptions, LineOptions, PieChartOptions, RadiusOptions,
    ScaleOptions, TextOptions, TooltipOptions, TooltipRenderer, default_palette,
};
pub use line_chart::LineChart;
pub use pie_chart::PieChart;
pub use settings::{
    AnimationSettings, AxisLabelSettings, BarChartSettings, BarStyleSettings, CommonSettings,
    DrawScaleSettings, LineChartSettings, LineSettings, Merge, PieChartSettings, RadiusSettings,
    ScaleSettings, TextSettings, TooltipSettings,
};
