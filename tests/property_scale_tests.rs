use std::f64::consts::TAU;

use mcharts::core::{
    AxisPadding, ChartDatum, RectRegion, ScalePoint, SectorRegion, ValueAxisLayout, bezier_path,
    nice_round_up, project_slices,
};
use proptest::prelude::*;

proptest! {
    #[test]
    fn nice_round_up_exceeds_value_on_multiples_of_five(value in 0.0f64..1_000_000.0) {
        let rounded = nice_round_up(value);
        prop_assert!(rounded > value);
        prop_assert!(rounded - value <= 5.0);
        prop_assert_eq!(rounded % 5.0, 0.0);
    }

    #[test]
    fn value_axis_places_data_inside_plot(
        max_value in 0.0f64..100_000.0,
        fraction in 0.0f64..=1.0,
        height in 200.0f64..4_000.0,
    ) {
        let padding = AxisPadding::bar(48.0, 12.0);
        let axis = ValueAxisLayout::compute(max_value, height, padding, 12.0).expect("axis");
        let y = axis.value_to_y(max_value * fraction);

        prop_assert!(y >= padding.bottom - 1e-9);
        prop_assert!(y < padding.bottom + axis.available_height);
        prop_assert_eq!(axis.ticks.len(), 5);
        prop_assert_eq!(axis.ticks[0].y, padding.bottom);
    }

    #[test]
    fn rect_contains_every_boundary_point(
        left in -1_000.0f64..1_000.0,
        bottom in -1_000.0f64..1_000.0,
        width in 0.0f64..500.0,
        height in 0.0f64..500.0,
        tx in 0.0f64..=1.0,
        ty in 0.0f64..=1.0,
    ) {
        let rect = RectRegion::new(left, bottom, left + width, bottom + height);
        prop_assert!(rect.contains(rect.left, rect.bottom));
        prop_assert!(rect.contains(rect.right, rect.top));
        prop_assert!(rect.contains(left + width * tx, rect.bottom));
        prop_assert!(rect.contains(rect.left, bottom + height * ty));
        prop_assert!(!rect.contains(rect.right + 1.0, rect.bottom));
        prop_assert!(!rect.contains(rect.left, rect.top + 1.0));
    }

    #[test]
    fn sector_contains_inner_edge_and_start_corner_but_not_beyond_outer(
        inner in 1.0f64..200.0,
        thickness in 1.0f64..200.0,
        start in 0.0f64..6.0,
        sweep_fraction in 0.05f64..1.0,
    ) {
        let end = start + (TAU - start) * sweep_fraction;
        let sector = SectorRegion::new(inner, inner + thickness, start, end);
        let mid = sector.mid_angle();

        let on_inner = (inner * mid.sin(), inner * mid.cos());
        prop_assert!(sector.contains(on_inner.0 * (1.0 + 1e-9), on_inner.1 * (1.0 + 1e-9)));

        let corner = (inner * start.sin(), inner * start.cos());
        prop_assert!(sector.contains(corner.0, corner.1));

        let beyond = inner + thickness + 1e-6;
        prop_assert!(!sector.contains(beyond * mid.sin(), beyond * mid.cos()));
    }

    #[test]
    fn slices_tile_the_circle_in_order(
        values in prop::collection::vec(0.0f64..1_000.0, 1..12),
        bump in 0.001f64..10.0,
    ) {
        let mut data: Vec<ChartDatum> = values
            .iter()
            .enumerate()
            .map(|(index, value)| ChartDatum::new(format!("s{index}"), *value))
            .collect();
        data[0].value += bump;

        let slices = project_slices(&data, 100.0, 200.0, 0.0, 0.0).expect("slices");
        prop_assert_eq!(slices.len(), data.len());
        prop_assert!(slices[0].start_angle.abs() <= 1e-12);
        prop_assert!((slices[slices.len() - 1].end_angle - TAU).abs() <= 1e-9);
        for pair in slices.windows(2) {
            prop_assert!((pair[0].end_angle - pair[1].start_angle).abs() <= 1e-9);
            prop_assert!(pair[0].start_angle <= pair[0].end_angle);
        }
    }

    #[test]
    fn bezier_segments_end_where_the_next_begins(
        ys in prop::collection::vec(-500.0f64..500.0, 2..40),
    ) {
        let points: Vec<ScalePoint> = ys
            .iter()
            .enumerate()
            .map(|(index, y)| ScalePoint::new(index as f64 * 10.0, *y))
            .collect();
        let path = bezier_path(&points).expect("path");

        prop_assert_eq!(path.segments.len(), points.len());
        for (segment, point) in path.segments.iter().zip(&points) {
            prop_assert_eq!(segment.control, *point);
        }
        for (segment, pair) in path.segments.iter().zip(points.windows(2)) {
            prop_assert!((segment.end.x - (pair[0].x + pair[1].x) / 2.0).abs() <= 1e-9);
            prop_assert!((segment.end.y - (pair[0].y + pair[1].y) / 2.0).abs() <= 1e-9);
        }
    }
}
