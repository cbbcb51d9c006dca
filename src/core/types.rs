use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Semantic (CSS-pixel) size of a chart.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<Self> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }

    /// Backing-store size in device pixels for the given device pixel ratio.
    #[must_use]
    pub fn device_size(self, dpi: f64) -> (u32, u32) {
        let scale = |value: f64| (value * dpi).round().clamp(0.0, f64::from(u32::MAX)) as u32;
        (scale(self.width), scale(self.height))
    }
}

/// Labeled value used by bar and pie charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartDatum {
    pub item: String,
    pub value: f64,
}

impl ChartDatum {
    #[must_use]
    pub fn new(item: impl Into<String>, value: f64) -> Self {
        Self {
            item: item.into(),
            value,
        }
    }
}

/// Timestamped value used by line charts. `time` is milliseconds since the
/// Unix epoch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeSeriesDatum {
    pub time: i64,
    pub value: f64,
    #[serde(default)]
    pub item: Option<String>,
}

impl TimeSeriesDatum {
    #[must_use]
    pub fn new(time: i64, value: f64) -> Self {
        Self {
            time,
            value,
            item: None,
        }
    }

    #[must_use]
    pub fn with_item(mut self, item: impl Into<String>) -> Self {
        self.item = Some(item.into());
        self
    }
}

/// Anchor point on an axis baseline, in semantic y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScalePoint {
    pub x: f64,
    pub y: f64,
}

impl ScalePoint {
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
