pub mod bar_series;
pub mod line_series;
pub mod pie_series;
pub mod primitives;
pub mod scale;
pub mod types;

pub use bar_series::{BarGeometry, ZERO_BAR_HIT_HEIGHT, project_bars};
pub use hit_test::{
    NearestPointStrategy, PointRegion, RectRegion, RegionRegistry, Registered, SectorRegion,
    angle_from_up, nearest_point_index,
};
pub use line_series::{BezierPath, BezierSegment, bezier_path, project_line_points};
pub use pie_series::{LabelSide, PieLabel, layout_labels, project_slices};
pub use primitives::{estimate_text_width, format_time, text_units};
pub use scale::{AxisPadding, TimeAxisLayout, ValueAxisLayout, ValueTick, nice_round_up};
pub use types::{ChartDatum, ScalePoint, TimeSeriesDatum, Viewport};
