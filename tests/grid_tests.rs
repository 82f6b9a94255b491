use metrics_chart::data_types::{Bounds, GridDirection, GridOptions, Sample};
use metrics_chart::grid::GridAnnotator;

fn samples(n: usize) -> Vec<Sample> {
    (0..n).map(|i| Sample::new(i as i64 * 60_000, i as f64)).collect()
}

#[test]
fn test_y_ticks_scenario() {
    let annotation = GridAnnotator::new().annotate(&Bounds::new(8.0, 32.0), &samples(3), &GridOptions::all());

    let values: Vec<f64> = annotation.y_ticks.iter().map(|t| t.value).collect();
    assert_eq!(values, vec![32.0, 26.0, 20.0, 14.0, 8.0]);

    let positions: Vec<f64> = annotation.y_ticks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![10.0, 27.5, 45.0, 62.5, 80.0]);

    assert_eq!(annotation.y_ticks[0].label, "32");
}

#[test]
fn test_y_ticks_with_degenerate_bounds() {
    let ticks = GridAnnotator::y_ticks(&Bounds::new(5.0, 5.0));
    assert_eq!(ticks.len(), 5);
    assert_eq!(ticks[0].value, 6.0);
    assert_eq!(ticks[4].value, 5.0);
}

#[test]
fn test_x_ticks_indices() {
    let ticks = GridAnnotator::x_ticks(&samples(10));
    let stamps: Vec<i64> = ticks.iter().map(|t| t.timestamp / 60_000).collect();
    assert_eq!(stamps, vec![0, 2, 4, 6, 9]);

    let positions: Vec<f64> = ticks.iter().map(|t| t.position).collect();
    assert_eq!(positions, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(ticks[1].label, "00:02");
}

#[test]
fn test_x_ticks_single_sample() {
    let ticks = GridAnnotator::x_ticks(&samples(1));
    assert_eq!(ticks.len(), 5);
    assert!(ticks.iter().all(|t| t.timestamp == 0));
}

#[test]
fn test_empty_series_gives_no_x_ticks() {
    let annotation = GridAnnotator::new().annotate(&Bounds::UNSET, &[], &GridOptions::all());
    assert!(annotation.x_ticks.is_empty());
    assert_eq!(annotation.y_ticks.len(), 5);
}

#[test]
fn test_grid_lines() {
    let annotation = GridAnnotator::new().annotate(&Bounds::new(0.0, 10.0), &samples(4), &GridOptions::all());
    let horizontal = annotation
        .grid_lines
        .iter()
        .filter(|l| l.direction == GridDirection::Horizontal)
        .count();
    let vertical: Vec<f64> = annotation
        .grid_lines
        .iter()
        .filter(|l| l.direction == GridDirection::Vertical)
        .map(|l| l.x1)
        .collect();

    assert_eq!(horizontal, 5);
    assert_eq!(vertical, vec![25.0, 50.0, 75.0]);
    for line in &annotation.grid_lines {
        if line.direction == GridDirection::Vertical {
            assert_eq!((line.y1, line.y2), (10.0, 90.0));
        } else {
            assert_eq!((line.x1, line.x2), (0.0, 100.0));
        }
    }
}

#[test]
fn test_options_gate_outputs() {
    let annotation = GridAnnotator::new().annotate(&Bounds::new(0.0, 10.0), &samples(4), &GridOptions::default());
    assert!(annotation.is_empty());

    let only_y = GridOptions {
        show_y_axis: true,
        ..GridOptions::default()
    };
    let annotation = GridAnnotator::new().annotate(&Bounds::new(0.0, 10.0), &samples(4), &only_y);
    assert!(annotation.grid_lines.is_empty());
    assert!(annotation.x_ticks.is_empty());
    assert_eq!(annotation.y_ticks.len(), 5);
}
