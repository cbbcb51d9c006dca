use mcharts::api::{
    BarChartOptions, CommonSettings, LineChartOptions, PieChartOptions, RadiusSettings,
    ScaleSettings, TextOptions, default_palette,
};
use mcharts::core::{ChartDatum, NearestPointStrategy};
use mcharts::render::{Color, LayerStack, RecordingSurface};
use mcharts::{
    BarChartSettings, ChartError, LineChartSettings, Merge, MountPoint, PieChart,
    PieChartSettings,
};

#[test]
fn empty_settings_resolve_to_defaults() {
    let resolved = BarChartSettings::default().merge(&BarChartOptions::default());
    assert_eq!(resolved, BarChartOptions::default());
    assert_eq!(resolved.common.width, 800.0);
    assert_eq!(resolved.common.height, 500.0);
    assert_eq!(resolved.common.dpi, 2.0);
    assert_eq!(resolved.common.text.size, 12.0);
    assert_eq!(resolved.common.scale.dash, vec![10.0, 10.0]);
    assert_eq!(resolved.common.scale.x.format, "MM-DD");
    assert_eq!(resolved.scale_padding_left, 48.0);
    assert_eq!(resolved.bar_style.width, 10.0);
}

#[test]
fn falsy_values_override_defaults() {
    let settings = LineChartSettings {
        common: CommonSettings {
            dpi: Some(1.0),
            colors: Some(Vec::new()),
            scale: Some(ScaleSettings {
                width: Some(0.0),
                dash: Some(Vec::new()),
                ..ScaleSettings::default()
            }),
            ..CommonSettings::default()
        },
        scale_padding_left: Some(0.0),
        nearest_point: Some(NearestPointStrategy::Exhaustive),
        ..LineChartSettings::default()
    };
    let resolved = settings.merge(&LineChartOptions::default());

    assert_eq!(resolved.common.dpi, 1.0);
    assert!(resolved.common.colors.is_empty());
    assert_eq!(resolved.common.scale.width, 0.0);
    assert!(resolved.common.scale.dash.is_empty());
    assert_eq!(resolved.scale_padding_left, 0.0);
    assert_eq!(resolved.nearest_point, NearestPointStrategy::Exhaustive);
    assert_eq!(resolved.common.scale.x, LineChartOptions::default().common.scale.x);
}

#[test]
fn nested_radius_keeps_unset_fields() {
    let settings = PieChartSettings {
        radius: Some(RadiusSettings {
            inner: Some(0.0),
            outer: None,
        }),
        ..PieChartSettings::default()
    };
    let resolved = settings.merge(&PieChartOptions::default());
    assert_eq!(resolved.radius.inner, 0.0);
    assert_eq!(resolved.radius.outer, 400.0);
}

#[test]
fn json_settings_merge_with_defaults() {
    let settings = BarChartSettings::from_json_str(
        r##"{
            "mount_point": { "id": "chart" },
            "width": 600,
            "colors": ["#ff0000"],
            "text": { "size": 14 },
            "data": [{ "item": "a", "value": 5 }],
            "bar_style": { "width": 0 },
            "animation": { "enabled": false }
        }"##,
    )
    .expect("parse");
    let resolved = settings.merge(&BarChartOptions::default());

    assert_eq!(resolved.common.mount_point, Some(MountPoint::new("chart")));
    assert_eq!(resolved.common.width, 600.0);
    assert_eq!(resolved.common.height, 500.0);
    assert_eq!(resolved.common.colors, vec![Color::rgb8(0xff, 0x00, 0x00)]);
    assert_eq!(resolved.common.text.size, 14.0);
    assert_eq!(resolved.common.text.color, TextOptions::default().color);
    assert_eq!(resolved.data, vec![ChartDatum::new("a", 5.0)]);
    assert_eq!(resolved.bar_style.width, 0.0);
    assert!(!resolved.animation.enabled);
    assert_eq!(resolved.animation.step, 4.0);
}

#[test]
fn json_settings_survive_serialization() {
    let settings = PieChartSettings::from_json_str(
        r#"{ "mount_point": { "id": "pie", "left": 8, "top": 16 }, "gap": 0.05 }"#,
    )
    .expect("parse");
    let json = settings.to_json_pretty().expect("serialize");
    let reparsed = PieChartSettings::from_json_str(&json).expect("reparse");
    assert_eq!(reparsed, settings);
    assert_eq!(
        reparsed.common.mount_point,
        Some(MountPoint::new("pie").with_offset(8.0, 16.0))
    );
}

#[test]
fn malformed_json_is_invalid_data() {
    let err = BarChartSettings::from_json_str("{ \"width\": ").expect_err("truncated json");
    assert!(matches!(err, ChartError::InvalidData(_)));

    let err = BarChartSettings::from_json_str(r##"{ "colors": ["#12"] }"##)
        .expect_err("bad color");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn pie_chart_appends_default_palette() {
    let settings = PieChartSettings {
        common: CommonSettings {
            mount_point: Some(MountPoint::new("chart")),
            colors: Some(vec![Color::rgb8(0, 0, 0)]),
            ..CommonSettings::default()
        },
        data: Some(vec![ChartDatum::new("a", 1.0)]),
        ..PieChartSettings::default()
    };
    let layers = LayerStack::from_fn(|_| RecordingSurface::new(1600, 1000));
    let chart = PieChart::new(settings, layers).expect("mount");

    let colors = &chart.options().common.colors;
    assert_eq!(colors.len(), 1 + default_palette().len());
    assert_eq!(colors[0], Color::rgb8(0, 0, 0));
    assert_eq!(&colors[1..], default_palette().as_slice());
}
