//! End-to-end cleaning tests over raw export tables.

use polars::prelude::{DataFrame, DataType};
use tracklab_ingest::CsvTable;
use tracklab_transform::clean_table;

fn export(headers: &[&str], rows: &[&[&str]]) -> CsvTable {
    CsvTable {
        headers: headers.iter().map(|h| (*h).to_string()).collect(),
        rows: rows
            .iter()
            .map(|row| row.iter().map(|c| (*c).to_string()).collect())
            .collect(),
    }
}

fn garmin_export() -> CsvTable {
    export(
        &[
            "Activity Type",
            "Date",
            "Favorite",
            "Title",
            "Distance",
            "Calories",
            "Time",
            "Avg HR",
            "Avg Pace",
            "L/R Balance",
        ],
        &[
            &[
                "Running",
                "2023-06-04 17:12:33",
                "false",
                "Lisbon Run",
                "10.01",
                "1,024",
                "00:52:30",
                "155",
                "5:15",
                "--",
            ],
            &[
                "Cycling",
                "2023-06-05 09:30:00",
                "false",
                "Morning Ride",
                "40.2",
                "980",
                "01:45:10",
                "142",
                "--",
                "48-52",
            ],
            &[
                "Pool Swim",
                "2023-06-06 07:05:00",
                "true",
                "Laps",
                "1500",
                "450",
                "00:35:00",
                "--",
                "2:05",
                "--",
            ],
        ],
    )
}

#[test]
fn cleaning_keeps_every_row_and_prunes_junk_columns() {
    let df = clean_table(&garmin_export()).unwrap();
    assert_eq!(df.height(), 3);
    assert_eq!(
        df.get_column_names()
            .iter()
            .map(|name| name.as_str())
            .collect::<Vec<_>>(),
        vec![
            "Activity Type",
            "Date",
            "Distance",
            "Calories",
            "Time",
            "Avg HR",
            "Avg Pace",
            "L/R Balance",
        ]
    );
}

#[test]
fn activity_times_coerce_to_minutes_and_paces_to_seconds() {
    let df = clean_table(&garmin_export()).unwrap();

    let time = df.column("Time").unwrap().f64().unwrap();
    assert_eq!(time.get(0), Some(52.0));
    assert_eq!(time.get(1), Some(105.0));
    assert_eq!(time.get(2), Some(35.0));

    let pace = df.column("Avg Pace").unwrap().f64().unwrap();
    assert_eq!(pace.get(0), Some(315.0));
    assert_eq!(pace.get(1), None);
    assert_eq!(pace.get(2), Some(125.0));
}

#[test]
fn grouped_decimals_parse_and_sentinels_become_null() {
    let df = clean_table(&garmin_export()).unwrap();

    let calories = df.column("Calories").unwrap().f64().unwrap();
    assert_eq!(calories.get(0), Some(1024.0));

    let hr = df.column("Avg HR").unwrap().f64().unwrap();
    assert_eq!(hr.get(0), Some(155.0));
    assert_eq!(hr.get(2), None);
}

#[test]
fn exempt_columns_stay_textual() {
    let df = clean_table(&garmin_export()).unwrap();

    let balance = df.column("L/R Balance").unwrap();
    assert_eq!(balance.dtype(), &DataType::String);
    let balance = balance.str().unwrap();
    assert_eq!(balance.get(0), None);
    assert_eq!(balance.get(1), Some("48-52"));

    let activity = df.column("Activity Type").unwrap().str().unwrap();
    assert_eq!(activity.get(2), Some("Pool Swim"));
}

#[test]
fn dates_reduce_to_iso_calendar_days() {
    let df = clean_table(&garmin_export()).unwrap();
    let date = df.column("Date").unwrap().str().unwrap();
    assert_eq!(date.get(0), Some("2023-06-04"));
    assert_eq!(date.get(2), Some("2023-06-06"));
}

#[test]
fn swim_rows_convert_distance_to_kilometres() {
    let df = clean_table(&garmin_export()).unwrap();
    let distance = df.column("Distance").unwrap().f64().unwrap();
    assert_eq!(distance.get(0), Some(10.01));
    assert_eq!(distance.get(1), Some(40.2));
    assert_eq!(distance.get(2), Some(1.5));
}

#[test]
fn bad_cells_become_null_instead_of_failing() {
    let table = export(
        &["Activity Type", "Date", "Distance", "Avg HR", "Best Pace"],
        &[
            &["Running", "someday", "fast", "abc", "3:40"],
            &["Running", "2023-06-04 10:00:00", "5.0", "150", "oops:"],
        ],
    );
    let df = clean_table(&table).unwrap();
    assert_eq!(df.height(), 2);

    let date = df.column("Date").unwrap().str().unwrap();
    assert_eq!(date.get(0), None);
    assert_eq!(date.get(1), Some("2023-06-04"));

    let distance = df.column("Distance").unwrap().f64().unwrap();
    assert_eq!(distance.get(0), None);
    assert_eq!(distance.get(1), Some(5.0));

    let pace = df.column("Best Pace").unwrap().f64().unwrap();
    assert_eq!(pace.get(0), Some(220.0));
    assert_eq!(pace.get(1), None);
}

fn render(df: &DataFrame) -> CsvTable {
    let headers: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|name| name.to_string())
        .collect();
    let mut rows = vec![Vec::with_capacity(headers.len()); df.height()];
    for column in df.get_columns() {
        match column.dtype() {
            DataType::Float64 => {
                let values = column.f64().unwrap();
                for (idx, row) in rows.iter_mut().enumerate() {
                    row.push(values.get(idx).map(|v| format!("{v}")).unwrap_or_default());
                }
            }
            _ => {
                let values = column.str().unwrap();
                for (idx, row) in rows.iter_mut().enumerate() {
                    row.push(values.get(idx).unwrap_or("").to_string());
                }
            }
        }
    }
    CsvTable { headers, rows }
}

#[test]
fn recleaning_a_clean_table_changes_nothing() {
    // Swim rows are excluded on purpose: the meters-to-kilometres
    // conversion reapplies on every clean.
    let table = export(
        &["Activity Type", "Date", "Distance", "Time", "Avg Pace"],
        &[
            &["Running", "2023-06-04 17:12:33", "10.01", "00:52:30", "5:15"],
            &["Cycling", "2023-06-05 09:30:00", "40.2", "01:45:10", "--"],
        ],
    );
    let first = clean_table(&table).unwrap();
    let second = clean_table(&render(&first)).unwrap();
    assert!(first.equals_missing(&second));
}
