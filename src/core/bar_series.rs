use crate::core::hit_test::RectRegion;
use crate::core::scale::ValueAxisLayout;
use crate::core::types::{ChartDatum, ScalePoint};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Height of the hit region registered for a zero-valued bar, so empty
/// categories still answer tooltips.
pub const ZERO_BAR_HIT_HEIGHT: f64 = 100.0;

/// Deterministic bar geometry in semantic y-up coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BarGeometry {
    pub center_x: f64,
    pub baseline: f64,
    pub top: f64,
    pub hit_region: RectRegion,
}

impl BarGeometry {
    /// Zero-height bars are registered for hit-testing but never drawn.
    #[must_use]
    pub fn is_drawn(&self) -> bool {
        self.top != self.baseline
    }
}

/// Projects bar data onto category anchors and the value axis.
///
/// Bars are stroked as vertical segments `bar_width` wide, so the hit
/// region spans half a bar on each side of the anchor.
pub fn project_bars(
    data: &[ChartDatum],
    anchors: &[ScalePoint],
    axis: &ValueAxisLayout,
    bar_width: f64,
) -> ChartResult<Vec<BarGeometry>> {
    if data.len() != anchors.len() {
        return Err(ChartError::InvalidData(format!(
            "bar data has {} items but {} anchors were laid out",
            data.len(),
            anchors.len()
        )));
    }

    let half = bar_width / 2.0;
    let projected = data
        .iter()
        .zip(anchors)
        .map(|(datum, anchor)| {
            let baseline = anchor.y;
            let top = axis.value_to_y(datum.value);
            let hit_top = if datum.value == 0.0 {
                baseline + ZERO_BAR_HIT_HEIGHT
            } else {
                top
            };
            BarGeometry {
                center_x: anchor.x,
                baseline,
                top,
                hit_region: RectRegion::new(
                    anchor.x - half,
                    baseline.min(hit_top),
                    anchor.x + half,
                    baseline.max(hit_top),
                ),
            }
        })
        .collect();

    Ok(projected)
}
