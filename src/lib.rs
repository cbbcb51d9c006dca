//! mcharts: layered bar, line and donut chart rendering engine.
//!
//! Charts draw onto three host-provided surfaces (scale, data and overlay
//! layers) through a coordinate-transform adapter, register the screen
//! region owned by every datum, and answer pointer/touch hit-tests against
//! those regions.

pub mod api;
pub mod core;
pub mod error;
pub mod interaction;
pub mod render;
pub mod telemetry;

pub use api::{
    BarChart, BarChartSettings, LineChart, LineChartSettings, Merge, PieChart, PieChartSettings,
};
pub use error::{ChartError, ChartResult};
pub use interaction::{MountPoint, PointerInput};
