use std::f64::consts::{FRAC_PI_2, TAU};

use serde::{Deserialize, Serialize};

use crate::core::hit_test::SectorRegion;
use crate::core::primitives::text_units;
use crate::core::types::ChartDatum;
use crate::error::{ChartError, ChartResult};

/// Radial growth of a hovered wedge on each side.
pub const HOVER_ENLARGE: f64 = 10.0;

/// Vertical pitch between stacked labels, in multiples of the text size.
const LABEL_PITCH: f64 = 1.5;

/// Gap between a label and the start of its leader line.
const LEADER_GAP: f64 = 5.0;

/// Splits a full turn into donut wedges proportional to each value.
///
/// Each wedge is inset by `gap / 2` on both sides and the whole layout is
/// rotated clockwise by `start_angle`.
pub fn project_slices(
    data: &[ChartDatum],
    inner_radius: f64,
    outer_radius: f64,
    start_angle: f64,
    gap: f64,
) -> ChartResult<Vec<SectorRegion>> {
    if let Some(datum) = data
        .iter()
        .find(|datum| !datum.value.is_finite() || datum.value < 0.0)
    {
        return Err(ChartError::InvalidData(format!(
            "pie value for `{}` must be finite and >= 0, got {}",
            datum.item, datum.value
        )));
    }
    let sum: f64 = data.iter().map(|datum| datum.value).sum();
    if sum <= 0.0 {
        return Err(ChartError::InvalidData(
            "pie values must sum to a positive total".to_owned(),
        ));
    }

    let mut accumulated = 0.0;
    Ok(data
        .iter()
        .map(|datum| {
            let start = start_angle + accumulated / sum * TAU + gap / 2.0;
            accumulated += datum.value;
            let end = start_angle + accumulated / sum * TAU - gap / 2.0;
            SectorRegion::new(inner_radius, outer_radius, start, end)
        })
        .collect())
}

/// Wedge drawn on the overlay while hovered.
#[must_use]
pub fn enlarged(sector: &SectorRegion) -> SectorRegion {
    SectorRegion::new(
        sector.inner_radius - HOVER_ENLARGE,
        sector.outer_radius + HOVER_ENLARGE,
        sector.start_angle,
        sector.end_angle,
    )
}

/// Quadrant (0 = top right, clockwise) containing the wedge's mid-angle.
#[must_use]
pub fn quadrant(sector: &SectorRegion) -> usize {
    let mid = sector.mid_angle().rem_euclid(TAU);
    ((mid / FRAC_PI_2).floor() as usize).min(3)
}

/// Which edge of the chart a label hugs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelSide {
    /// Right-aligned against the right edge.
    Right,
    /// Left-aligned against the left edge.
    Left,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PieLabel {
    /// Index of the labeled slice, also its palette index.
    pub slice: usize,
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub side: LabelSide,
    pub leader_start: (f64, f64),
    pub leader_end: (f64, f64),
}

/// Places one label per slice in polar-centered coordinates.
///
/// Labels are grouped by quadrant (quadrants 0 and 1 on the right edge, 2 and
/// 3 on the left) and stacked in data order within each quadrant. Each label
/// gets a leader line to the middle of its wedge's outer arc.
#[must_use]
pub fn layout_labels(
    data: &[ChartDatum],
    sectors: &[SectorRegion],
    width: f64,
    height: f64,
    text_size: f64,
) -> Vec<PieLabel> {
    let mut stacked = [0_usize; 4];
    let mut labels = Vec::with_capacity(sectors.len());
    for section in 0..4 {
        for (slice, (datum, sector)) in data.iter().zip(sectors).enumerate() {
            if quadrant(sector) != section {
                continue;
            }
            let offset = text_size * LABEL_PITCH * stacked[section] as f64;
            stacked[section] += 1;

            let y = match section {
                0 => height / 2.0 - text_size - offset,
                1 => -text_size - offset,
                2 => -height / 2.0 + text_size + offset,
                _ => -text_size + offset,
            };
            let (side, x, direction) = if section <= 1 {
                (LabelSide::Right, width / 2.0, -1.0)
            } else {
                (LabelSide::Left, -width / 2.0, 1.0)
            };
            let text_width = text_units(&datum.item) * text_size;
            labels.push(PieLabel {
                slice,
                text: datum.item.clone(),
                x,
                y,
                side,
                leader_start: (x + (text_width + LEADER_GAP) * direction, y),
                leader_end: sector.outer_midpoint(),
            });
        }
    }
    labels
}
