use crate::core::scale::ValueAxisLayout;
use crate::core::types::{ScalePoint, TimeSeriesDatum};
use crate::error::{ChartError, ChartResult};
use serde::{Deserialize, Serialize};

/// Projects time-series values onto their time-axis anchors.
///
/// Point heights share the value axis' available height so every point lines
/// up with the gridlines drawn for the same value.
pub fn project_line_points(
    data: &[TimeSeriesDatum],
    anchors: &[ScalePoint],
    axis: &ValueAxisLayout,
) -> ChartResult<Vec<ScalePoint>> {
    if data.len() != anchors.len() {
        return Err(ChartError::InvalidData(format!(
            "line data has {} items but {} anchors were laid out",
            data.len(),
            anchors.len()
        )));
    }

    Ok(data
        .iter()
        .zip(anchors)
        .map(|(datum, anchor)| ScalePoint::new(anchor.x, axis.value_to_y(datum.value)))
        .collect())
}

/// Highest point y, never below `baseline`.
#[must_use]
pub fn highest_y(points: &[ScalePoint], baseline: f64) -> f64 {
    points.iter().map(|point| point.y).fold(baseline, f64::max)
}

/// True when times strictly increase, which monotonic nearest-point lookup
/// relies on.
#[must_use]
pub fn is_time_sorted(data: &[TimeSeriesDatum]) -> bool {
    data.windows(2).all(|pair| pair[0].time < pair[1].time)
}

/// Straight outline of the area under the line: it rises from `floor_y` at
/// the first point, follows every point and drops back at the last one.
#[must_use]
pub fn area_outline(points: &[ScalePoint], floor_y: f64) -> Vec<ScalePoint> {
    let (Some(first), Some(last)) = (points.first(), points.last()) else {
        return Vec::new();
    };
    let mut outline = Vec::with_capacity(points.len() + 2);
    outline.push(ScalePoint::new(first.x, floor_y));
    outline.extend_from_slice(points);
    outline.push(ScalePoint::new(last.x, floor_y));
    outline
}

/// One cubic segment whose two control points coincide with a data point.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BezierSegment {
    pub control: ScalePoint,
    pub end: ScalePoint,
}

/// Smoothed path passing near every data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BezierPath {
    pub start: ScalePoint,
    pub segments: Vec<BezierSegment>,
}

/// Builds a smoothed path through `points`.
///
/// Each segment runs between consecutive midpoints and bends through the data
/// point between them. The first segment starts at the mirror of the first
/// midpoint across the first point, and the last ends at the mirror of the
/// last midpoint across the last point. Fewer than two points yield `None`.
#[must_use]
pub fn bezier_path(points: &[ScalePoint]) -> Option<BezierPath> {
    if points.len() < 2 {
        return None;
    }

    let midpoint =
        |a: ScalePoint, b: ScalePoint| ScalePoint::new((a.x + b.x) / 2.0, (a.y + b.y) / 2.0);
    let first = points[0];
    let first_mid = midpoint(first, points[1]);
    let start = ScalePoint::new(2.0 * first.x - first_mid.x, first_mid.y);

    let mut segments = Vec::with_capacity(points.len());
    let mut previous_end = start;
    for (index, &point) in points.iter().enumerate() {
        let end = match points.get(index + 1) {
            Some(&next) => midpoint(point, next),
            None => ScalePoint::new(2.0 * point.x - previous_end.x, previous_end.y),
        };
        segments.push(BezierSegment {
            control: point,
            end,
        });
        previous_end = end;
    }

    Some(BezierPath { start, segments })
}

#[cfg(test)]
mod tests {
    use super::{area_outline, bezier_path, highest_y, is_time_sorted};
    use crate::core::{ScalePoint, TimeSeriesDatum};

    #[test]
    fn bezier_path_is_continuous_through_midpoints() {
        let points = [
            ScalePoint::new(10.0, 10.0),
            ScalePoint::new(20.0, 30.0),
            ScalePoint::new(30.0, 20.0),
        ];
        let path = bezier_path(&points).expect("path");
        assert_eq!(path.start, ScalePoint::new(5.0, 20.0));
        assert_eq!(path.segments.len(), 3);
        assert_eq!(path.segments[0].end, ScalePoint::new(15.0, 20.0));
        assert_eq!(path.segments[1].end, ScalePoint::new(25.0, 25.0));
        assert_eq!(path.segments[2].end, ScalePoint::new(35.0, 25.0));
        assert_eq!(path.segments[1].control, points[1]);
    }

    #[test]
    fn bezier_path_needs_two_points() {
        assert!(bezier_path(&[ScalePoint::new(1.0, 1.0)]).is_none());
    }

    #[test]
    fn outline_drops_to_floor_on_both_ends() {
        let points = [ScalePoint::new(10.0, 50.0), ScalePoint::new(20.0, 60.0)];
        let outline = area_outline(&points, 24.5);
        assert_eq!(outline.first(), Some(&ScalePoint::new(10.0, 24.5)));
        assert_eq!(outline.last(), Some(&ScalePoint::new(20.0, 24.5)));
        assert_eq!(outline.len(), 4);
        assert_eq!(highest_y(&points, 24.0), 60.0);
    }

    #[test]
    fn detects_unsorted_times() {
        let sorted = [TimeSeriesDatum::new(1, 0.0), TimeSeriesDatum::new(2, 0.0)];
        let unsorted = [TimeSeriesDatum::new(2, 0.0), TimeSeriesDatum::new(1, 0.0)];
        assert!(is_time_sorted(&sorted));
        assert!(!is_time_sorted(&unsorted));
    }
}
