use std::f64::consts::{FRAC_PI_2, FRAC_PI_4, PI, TAU};

use approx::assert_relative_eq;
use mcharts::api::CommonSettings;
use mcharts::core::{ChartDatum, LabelSide, Viewport};
use mcharts::render::{DrawCommand, LayerKind, LayerStack, RecordingSurface};
use mcharts::{ChartError, MountPoint, PieChart, PieChartSettings, PointerInput};

fn layers() -> LayerStack<RecordingSurface> {
    let (width, height) = Viewport::new(800.0, 500.0).device_size(2.0);
    LayerStack::from_fn(|_| RecordingSurface::new(width, height))
}

fn settings(data: Vec<ChartDatum>) -> PieChartSettings {
    PieChartSettings {
        common: CommonSettings {
            mount_point: Some(MountPoint::new("chart")),
            ..CommonSettings::default()
        },
        data: Some(data),
        ..PieChartSettings::default()
    }
}

fn two_slices() -> Vec<ChartDatum> {
    vec![ChartDatum::new("a", 5.0), ChartDatum::new("b", 15.0)]
}

/// Pointer at `radius` from the center of an 800x500 chart, `angle`
/// clockwise from up.
fn pointer_at(radius: f64, angle: f64) -> PointerInput {
    PointerInput::PointerMove {
        offset_x: 400.0 + radius * angle.sin(),
        offset_y: 250.0 - radius * angle.cos(),
    }
}

#[test]
fn slices_split_the_circle_by_value() {
    let chart = PieChart::new(settings(two_slices()), layers()).expect("mount");
    let regions = chart.registered_regions();

    assert_eq!(regions.len(), 2);
    assert_relative_eq!(regions[0].shape.start_angle, 0.0);
    assert_relative_eq!(regions[0].shape.end_angle, FRAC_PI_2);
    assert_relative_eq!(regions[1].shape.start_angle, FRAC_PI_2);
    assert_relative_eq!(regions[1].shape.end_angle, TAU);
    assert_eq!(regions[0].shape.inner_radius, 200.0);
    assert_eq!(regions[0].shape.outer_radius, 400.0);

    let fills = chart
        .layer(LayerKind::Data)
        .count(|command| matches!(command, DrawCommand::Fill));
    assert_eq!(fills, 2);
}

#[test]
fn labels_sit_on_the_side_of_their_quadrant() {
    let chart = PieChart::new(settings(two_slices()), layers()).expect("mount");
    let labels = chart.labels();

    assert_eq!(labels.len(), 2);
    assert_eq!(labels[0].slice, 0);
    assert_eq!(labels[0].side, LabelSide::Right);
    assert_eq!((labels[0].x, labels[0].y), (400.0, 238.0));
    assert_eq!(labels[1].slice, 1);
    assert_eq!(labels[1].side, LabelSide::Left);
    assert_eq!((labels[1].x, labels[1].y), (-400.0, -238.0));

    // leader ends on the middle of the outer arc
    assert_relative_eq!(labels[0].leader_end.0, 400.0 * FRAC_PI_4.sin());
    assert_relative_eq!(labels[0].leader_end.1, 400.0 * FRAC_PI_4.cos());
    assert_eq!(chart.layer(LayerKind::Data).texts(), vec!["a", "b"]);
}

#[test]
fn legends_can_be_disabled() {
    let mut settings = settings(two_slices());
    settings.legends = Some(false);
    let chart = PieChart::new(settings, layers()).expect("mount");

    assert!(chart.labels().is_empty());
    assert!(chart.layer(LayerKind::Data).texts().is_empty());
}

#[test]
fn hover_enlarges_wedge_only_when_it_changes() {
    let mut chart = PieChart::new(settings(two_slices()), layers()).expect("mount");

    let hit = chart.handle_input(pointer_at(300.0, FRAC_PI_4)).expect("input");
    assert_eq!(hit, Some(ChartDatum::new("a", 5.0)));
    assert_eq!(chart.hovered(), Some(0));
    let overlay = chart.layer(LayerKind::Overlay);
    assert_eq!(overlay.count(|command| matches!(command, DrawCommand::Fill)), 1);
    assert!(overlay.commands().iter().any(|command| matches!(
        command,
        DrawCommand::Arc { radius, .. } if *radius == 820.0
    )));
    let drawn = overlay.commands().len();

    let hit = chart.handle_input(pointer_at(250.0, 0.5)).expect("input");
    assert_eq!(hit, Some(ChartDatum::new("a", 5.0)));
    assert_eq!(chart.layer(LayerKind::Overlay).commands().len(), drawn);

    let hit = chart.handle_input(pointer_at(300.0, 3.0 * FRAC_PI_2)).expect("input");
    assert_eq!(hit, Some(ChartDatum::new("b", 15.0)));
    assert_eq!(chart.hovered(), Some(1));
    assert_eq!(
        chart
            .layer(LayerKind::Overlay)
            .count(|command| matches!(command, DrawCommand::Fill)),
        2
    );
}

#[test]
fn miss_clears_overlay_and_hover() {
    let mut chart = PieChart::new(settings(two_slices()), layers()).expect("mount");
    chart.handle_input(pointer_at(300.0, PI)).expect("input");
    assert_eq!(chart.hovered(), Some(1));

    // inside the donut hole
    let hit = chart.handle_input(pointer_at(100.0, PI)).expect("input");
    assert_eq!(hit, None);
    assert_eq!(chart.hovered(), None);
    assert!(chart.layer(LayerKind::Overlay).commands_since_clear().is_empty());

    let hit = chart.handle_input(pointer_at(401.0, PI)).expect("input");
    assert_eq!(hit, None);
}

#[test]
fn rerender_resets_hover_and_regions() {
    let mut chart = PieChart::new(settings(two_slices()), layers()).expect("mount");
    chart.handle_input(pointer_at(300.0, FRAC_PI_4)).expect("input");

    chart
        .rerender(vec![
            ChartDatum::new("x", 1.0),
            ChartDatum::new("y", 1.0),
            ChartDatum::new("z", 2.0),
        ])
        .expect("rerender");
    assert_eq!(chart.hovered(), None);
    assert_eq!(chart.registered_regions().len(), 3);
    assert_relative_eq!(chart.registered_regions()[2].shape.start_angle, PI);
}

#[test]
fn invalid_totals_are_rejected() {
    let err = PieChart::new(settings(vec![ChartDatum::new("a", 0.0)]), layers())
        .err()
        .expect("zero total must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = PieChart::new(
        settings(vec![ChartDatum::new("a", 3.0), ChartDatum::new("b", -1.0)]),
        layers(),
    )
    .err()
    .expect("negative value must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let mut chart = PieChart::new(settings(two_slices()), layers()).expect("mount");
    let err = chart.rerender(Vec::new()).expect_err("empty data must fail");
    assert!(matches!(err, ChartError::EmptyData { chart: "pie" }));
    assert_eq!(chart.registered_regions().len(), 2);
}
