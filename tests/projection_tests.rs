use metrics_chart::data_types::{Bounds, Sample};
use metrics_chart::transform::CoordinateProjector;
use metrics_chart::DataBoundsTracker;
use rand::Rng;

fn series(values: &[f64]) -> Vec<Sample> {
    values
        .iter()
        .enumerate()
        .map(|(i, &v)| Sample::new(1_000 * i as i64, v))
        .collect()
}

fn assert_close(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-9, "{a} != {b}");
}

#[test]
fn test_projection_ranges_randomized() {
    let mut rng = rand::rng();
    let projector = CoordinateProjector::new();

    for _ in 0..100 {
        let len = rng.random_range(1..100);
        let values: Vec<f64> = (0..len).map(|_| rng.random_range(-50.0..50.0)).collect();
        let samples = series(&values);
        let mut tracker = DataBoundsTracker::new();
        let bounds = tracker.update(&samples);
        let points = projector.project(&samples, &bounds);

        assert_eq!(points.len(), samples.len());
        for p in &points {
            assert!((0.0..=100.0).contains(&p.x), "x out of range: {}", p.x);
            assert!((10.0..=90.0).contains(&p.y), "y out of range: {}", p.y);
        }
    }
}

#[test]
fn test_projection_scenario() {
    let samples = series(&[10.0, 20.0, 30.0]);
    let points = CoordinateProjector::new().project(&samples, &Bounds::new(8.0, 32.0));

    assert_close(points[0].x, 0.0);
    assert_close(points[1].x, 50.0);
    assert_close(points[2].x, 100.0);

    assert_close(points[0].y, 90.0 - 2.0 / 24.0 * 80.0);
    assert_close(points[1].y, 50.0);
    assert_close(points[2].y, 90.0 - 22.0 / 24.0 * 80.0);
    assert!(points[2].y < points[0].y, "larger values must sit higher");
}

#[test]
fn test_projection_preserves_order_and_source() {
    let samples = series(&[3.0, 1.0, 2.0]);
    let points = CoordinateProjector::new().project(&samples, &Bounds::new(0.0, 4.0));
    let sources: Vec<Sample> = points.iter().map(|p| p.source).collect();
    assert_eq!(sources, samples);
}

#[test]
fn test_single_sample_sits_at_origin() {
    let points = CoordinateProjector::new().project(&series(&[7.0]), &Bounds::new(0.0, 10.0));
    assert_eq!(points.len(), 1);
    assert_eq!(points[0].x, 0.0);
}

#[test]
fn test_degenerate_series_is_finite() {
    let samples = series(&[10.0, 10.0]);
    let mut tracker = DataBoundsTracker::new();
    let bounds = tracker.update(&samples);
    let points = CoordinateProjector::new().project(&samples, &bounds);

    assert_eq!(points.len(), 2);
    for p in &points {
        assert!(p.x.is_finite() && p.y.is_finite());
    }
    assert_close(points[0].y, 50.0);
}

#[test]
fn test_degenerate_bounds_do_not_divide_by_zero() {
    let points = CoordinateProjector::new().project(&series(&[10.0, 10.0]), &Bounds::new(10.0, 10.0));
    for p in &points {
        assert!(p.y.is_finite());
        assert!((10.0..=90.0).contains(&p.y));
    }
}

#[test]
fn test_values_outside_bounds_are_confined() {
    let points = CoordinateProjector::new().project(&series(&[-100.0, 500.0]), &Bounds::new(0.0, 10.0));
    assert_eq!(points[0].y, 90.0);
    assert_eq!(points[1].y, 10.0);
}

#[test]
fn test_empty_projection() {
    assert!(CoordinateProjector::new()
        .project(&[], &Bounds::new(0.0, 1.0))
        .is_empty());
}
