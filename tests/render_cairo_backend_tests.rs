#![cfg(feature = "cairo-backend")]

use std::time::Duration;

use cairo::{Context, Format, ImageSurface};
use mcharts::api::CommonSettings;
use mcharts::core::ChartDatum;
use mcharts::render::{CairoSurface, LayerKind, LayerStack};
use mcharts::{BarChart, BarChartSettings, ChartError, MountPoint, PieChart, PieChartSettings};

fn common(dpi: f64) -> CommonSettings {
    CommonSettings {
        mount_point: Some(MountPoint::new("chart")),
        dpi: Some(dpi),
        ..CommonSettings::default()
    }
}

#[test]
fn cairo_surface_rejects_invalid_size() {
    let err = CairoSurface::new(0, 480).expect_err("invalid width must fail");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn bar_chart_renders_and_animates_on_cairo() {
    let layers = LayerStack::from_fn(|_| CairoSurface::new(1600, 1000).expect("surface"));
    let settings = BarChartSettings {
        common: common(2.0),
        data: Some(vec![ChartDatum::new("a", 5.0), ChartDatum::new("b", 15.0)]),
        ..BarChartSettings::default()
    };
    let mut chart = BarChart::new(settings, layers).expect("mount");

    let mut frames = 0;
    while chart
        .on_animation_frame(Duration::from_millis(16))
        .expect("frame")
    {
        frames += 1;
        assert!(frames < 1000);
    }
    assert_eq!(
        chart.layer(LayerKind::Data).backend_name(),
        "cairo+pango+pangocairo"
    );
}

#[test]
fn pie_chart_draws_on_external_context() {
    let surface = ImageSurface::create(Format::ARgb32, 800, 500).expect("image surface");
    let layers = LayerStack::from_fn(|_| {
        CairoSurface::from_context(Context::new(&surface).expect("context"))
    });
    let settings = PieChartSettings {
        common: common(1.0),
        data: Some(vec![ChartDatum::new("a", 1.0), ChartDatum::new("b", 3.0)]),
        ..PieChartSettings::default()
    };
    let chart = PieChart::new(settings, layers).expect("mount");
    drop(chart);

    let mut surface = surface;
    surface.flush();
    let data = surface.data().expect("exclusive surface data");
    assert!(data.chunks_exact(4).any(|pixel| pixel[3] != 0));
}
