use metrics_chart::data_types::{Bounds, ChartType, ProjectedPoint, RenderStyle, Sample};
use metrics_chart::opacity::OpacityPolicy;
use metrics_chart::plot_types::{AreaPlot, BarPlot, ChartRenderer, LinePlot, RendererRegistry};
use metrics_chart::rendering::{area_polygon_svg, points_to_svg, VisualPrimitive};
use metrics_chart::data_types::PlotPoint;
use metrics_chart::transform::CoordinateProjector;

fn project(values: &[f64]) -> Vec<ProjectedPoint> {
    let samples: Vec<Sample> = values
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::new(i as i64, v))
        .collect();
    let bounds = Bounds::from_samples(&samples).unwrap_or_default();
    CoordinateProjector::new().project(&samples, &bounds)
}

fn style() -> RenderStyle {
    RenderStyle::new("hsl(var(--chart-4))", 60)
}

#[test]
fn test_bar_uses_last_twelve_samples() {
    let values: Vec<f64> = (0..20).map(|v| v as f64).collect();
    let primitive = BarPlot::default().render(&project(&values), &style());

    let VisualPrimitive::Bars { bars, .. } = primitive else {
        panic!("expected bars");
    };
    assert_eq!(bars.len(), 12);
    let stamps: Vec<i64> = bars.iter().map(|b| b.timestamp).collect();
    assert_eq!(stamps, (8..20).collect::<Vec<i64>>());
}

#[test]
fn test_bar_keeps_short_series() {
    let primitive = BarPlot::default().render(&project(&[1.0, 2.0, 3.0, 4.0, 5.0]), &style());
    let VisualPrimitive::Bars { bars, .. } = primitive else {
        panic!("expected bars");
    };
    assert_eq!(bars.len(), 5);
    // Bars are laid out left to right without overlapping.
    for pair in bars.windows(2) {
        assert!(pair[0].x + pair[0].width <= pair[1].x + 1e-9);
    }
}

#[test]
fn test_bar_heights_and_minimum() {
    let samples = vec![Sample::new(0, 0.0), Sample::new(1, 50.0), Sample::new(2, 100.0)];
    let points = CoordinateProjector::new().project(&samples, &Bounds::new(0.0, 100.0));
    let VisualPrimitive::Bars { bars, .. } = BarPlot::default().render(&points, &style()) else {
        panic!("expected bars");
    };

    assert_eq!(bars[0].height, 2.0, "near-zero bars keep a visible height");
    assert!((bars[1].height - 40.0).abs() < 1e-9);
    assert!((bars[2].height - 80.0).abs() < 1e-9);
    for bar in &bars {
        assert!((bar.y + bar.height - 90.0).abs() < 1e-9, "bars share the baseline");
    }
}

#[test]
fn test_line_polyline_and_fill() {
    let points = project(&[1.0, 4.0, 2.0, 8.0]);
    let VisualPrimitive::Polyline {
        points: path,
        fill,
        markers,
        stroke,
    } = LinePlot::default().render(&points, &style())
    else {
        panic!("expected polyline");
    };

    assert_eq!(path.len(), 4);
    assert!(markers.is_empty());
    assert_eq!(stroke.opacity, 60);

    let fill = fill.expect("line fill enabled by default");
    assert_eq!(fill.polygon.len(), 6);
    assert_eq!(fill.polygon.first(), Some(&PlotPoint::new(0.0, 100.0)));
    assert_eq!(fill.polygon.last(), Some(&PlotPoint::new(100.0, 100.0)));
}

#[test]
fn test_line_markers_in_expanded_mode() {
    let points = project(&[1.0, 4.0, 2.0]);
    let VisualPrimitive::Polyline { markers, .. } = LinePlot::default().render(&points, &style().expanded(true))
    else {
        panic!("expected polyline");
    };
    assert_eq!(markers.len(), 3);
}

#[test]
fn test_area_gradient_and_border() {
    let points = project(&[3.0, 1.0, 2.0]);
    let VisualPrimitive::Area { fill, border, .. } = AreaPlot::default().render(&points, &style()) else {
        panic!("expected area");
    };

    assert_eq!(border.len(), 3);
    assert_eq!(fill.polygon.len(), 5);
    let stops = &fill.gradient.stops;
    assert!(stops.first().map(|s| s.opacity) > stops.last().map(|s| s.opacity));
    assert!(fill.gradient.id.starts_with("gradient-"));
}

#[test]
fn test_empty_input_renders_placeholder() {
    for chart_type in ChartType::ALL {
        let registry = RendererRegistry::default();
        assert!(registry.render(chart_type, &[], &style()).is_no_data());
    }
}

#[test]
fn test_non_finite_points_render_placeholder() {
    let bad = ProjectedPoint {
        x: f64::NAN,
        y: 50.0,
        source: Sample::new(0, f64::NAN),
    };
    assert!(LinePlot::default().render(&[bad], &style()).is_no_data());
    assert!(BarPlot::default().render(&[bad], &style()).is_no_data());
}

#[test]
fn test_registry_dispatch() {
    let registry = RendererRegistry::default();
    let points = project(&[1.0, 2.0]);
    assert!(matches!(
        registry.render(ChartType::Line, &points, &style()),
        VisualPrimitive::Polyline { .. }
    ));
    assert!(matches!(
        registry.render(ChartType::Area, &points, &style()),
        VisualPrimitive::Area { .. }
    ));
    assert!(matches!(
        registry.render(ChartType::Bar, &points, &style()),
        VisualPrimitive::Bars { .. }
    ));

    let empty = RendererRegistry::empty();
    assert!(empty.render(ChartType::Line, &points, &style()).is_no_data());
}

#[test]
fn test_opacity_policy() {
    let policy = OpacityPolicy::default();
    assert_eq!(policy.resolve(ChartType::Line, false, None), 60);
    assert_eq!(policy.resolve(ChartType::Area, false, None), 40);
    assert_eq!(policy.resolve(ChartType::Bar, false, None), 80);
    assert_eq!(policy.resolve(ChartType::Area, true, None), 90);
    assert_eq!(policy.resolve(ChartType::Area, true, Some(55.4)), 55);
    assert_eq!(policy.resolve(ChartType::Bar, false, Some(140.0)), 100);

    assert_eq!(policy.grid(ChartType::Line, Some(60.0)), 18);
    assert_eq!(policy.grid(ChartType::Line, Some(20.0)), 10);
    assert_eq!(policy.grid(ChartType::Line, None), 20);
    assert_eq!(policy.grid(ChartType::Area, None), 15);
    assert_eq!(policy.grid(ChartType::Bar, None), 25);
}

#[test]
fn test_svg_point_strings() {
    let points = [PlotPoint::new(0.0, 50.0), PlotPoint::new(100.0, 12.5)];
    assert_eq!(points_to_svg(&points), "0,50 100,12.5");
    assert_eq!(area_polygon_svg(&points), "0,100 0,50 100,12.5 100,100");
    assert_eq!(area_polygon_svg(&[]), "");
}
