//! Bucketed-mean aggregation tests.

use polars::prelude::{Column, DataFrame};
use tracklab_model::{RangeKind, RangeRequest};
use tracklab_report::create_ranges;

fn frame(columns: Vec<Column>) -> DataFrame {
    DataFrame::new(columns).unwrap()
}

fn pace_request(min: f64, max: f64, step: f64) -> RangeRequest {
    RangeRequest {
        source_column: "Avg Pace".to_string(),
        value_column: "Avg HR".to_string(),
        min,
        max,
        step,
        kind: RangeKind::Pace,
    }
}

#[test]
fn pace_buckets_label_and_average() {
    let df = frame(vec![
        Column::new(
            "Avg Pace".into(),
            vec![
                Some(250.0),
                Some(290.0),
                Some(310.0),
                Some(350.0),
                None,
                Some(400.0),
            ],
        ),
        Column::new(
            "Avg HR".into(),
            vec![
                Some(150.0),
                Some(148.0),
                Some(160.0),
                Some(155.0),
                Some(170.0),
                Some(162.0),
            ],
        ),
    ]);
    let summary = create_ranges(&df, &pace_request(240.0, 360.0, 30.0)).unwrap();

    let labels: Vec<&str> = summary.rows.iter().map(|row| row.range.as_str()).collect();
    assert_eq!(
        labels,
        vec!["4:00 - 4:30", "4:30 - 5:00", "5:00 - 5:30", "5:30 - 6:00"]
    );
    assert_eq!(summary.rows[0].mean, 150.0);
    assert_eq!(summary.rows[1].mean, 148.0);
    assert_eq!(summary.rows[2].mean, 160.0);
    assert_eq!(summary.rows[3].mean, 155.0);
    assert_eq!(summary.source_column, "Avg Pace");
    assert_eq!(summary.value_column, "Avg HR");
}

#[test]
fn boundary_samples_count_in_both_buckets() {
    let df = frame(vec![
        Column::new("Avg Pace".into(), vec![Some(270.0), Some(250.0)]),
        Column::new("Avg HR".into(), vec![Some(160.0), Some(150.0)]),
    ]);
    let summary = create_ranges(&df, &pace_request(240.0, 300.0, 30.0)).unwrap();

    // 270 sits on the shared edge of [240, 270] and [270, 300].
    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].range, "4:00 - 4:30");
    assert_eq!(summary.rows[0].mean, 155.0);
    assert_eq!(summary.rows[1].range, "4:30 - 5:00");
    assert_eq!(summary.rows[1].mean, 160.0);
}

#[test]
fn power_buckets_use_watt_labels_and_round_means() {
    let df = frame(vec![
        Column::new(
            "Avg Power".into(),
            vec![Some(205.0), Some(248.0), Some(250.0), Some(260.0), Some(300.0)],
        ),
        Column::new(
            "Avg Speed".into(),
            vec![Some(30.0), Some(32.0), Some(33.0), Some(35.0), Some(40.0)],
        ),
    ]);
    let request = RangeRequest {
        source_column: "Avg Power".to_string(),
        value_column: "Avg Speed".to_string(),
        min: 200.0,
        max: 300.0,
        step: 50.0,
        kind: RangeKind::Power,
    };
    let summary = create_ranges(&df, &request).unwrap();

    assert_eq!(summary.rows.len(), 2);
    assert_eq!(summary.rows[0].range, "200-250 W");
    assert_eq!(summary.rows[0].mean, 31.67);
    assert_eq!(summary.rows[1].range, "250-300 W");
    assert_eq!(summary.rows[1].mean, 36.0);
}

#[test]
fn buckets_without_samples_or_values_are_dropped() {
    let df = frame(vec![
        Column::new("Avg Pace".into(), vec![Some(250.0), Some(340.0)]),
        Column::new("Avg HR".into(), vec![Some(150.0), None]),
    ]);
    let summary = create_ranges(&df, &pace_request(240.0, 360.0, 30.0)).unwrap();

    // [270, 300] and [300, 330] catch nothing; [330, 360] catches one
    // sample whose value is null.
    assert_eq!(summary.rows.len(), 1);
    assert_eq!(summary.rows[0].range, "4:00 - 4:30");
}

#[test]
fn inverted_bounds_yield_an_empty_summary() {
    let df = frame(vec![
        Column::new("Avg Pace".into(), vec![Some(250.0)]),
        Column::new("Avg HR".into(), vec![Some(150.0)]),
    ]);
    let summary = create_ranges(&df, &pace_request(360.0, 240.0, 30.0)).unwrap();
    assert!(summary.is_empty());
}

#[test]
fn missing_columns_surface_as_errors() {
    let df = frame(vec![Column::new("Avg Pace".into(), vec![Some(250.0)])]);
    assert!(create_ranges(&df, &pace_request(240.0, 360.0, 30.0)).is_err());
}

#[test]
fn textual_columns_surface_as_errors() {
    let df = frame(vec![
        Column::new("Avg Pace".into(), vec![Some(250.0)]),
        Column::new("Avg HR".into(), vec!["high"]),
    ]);
    assert!(create_ranges(&df, &pace_request(240.0, 360.0, 30.0)).is_err());
}
