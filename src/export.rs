// 💾 Export - merged table → CSV, summaries → JSON

use crate::aggregate::Summary;
use crate::error::Result;
use crate::table::{Table, Value};
use std::fs::File;
use std::path::Path;

/// Default output file name
pub const OUTPUT_FILE: &str = "ventas_con_devoluciones_persona.csv";

/// Write a table as comma-separated text: header row, no index column
///
/// Null → empty field, dates as YYYY-MM-DD[ HH:MM:SS].
pub fn write_csv(table: &Table, path: &Path) -> Result<usize> {
    let mut writer = csv::Writer::from_path(path)?;

    writer.write_record(table.columns())?;
    for row in table.rows() {
        writer.write_record(row.iter().map(Value::render))?;
    }
    writer.flush()?;

    log::info!("Wrote {} rows to {}", table.len(), path.display());
    Ok(table.len())
}

/// Read a CSV written by `write_csv` back; every non-empty field is Text
pub fn read_csv(path: &Path) -> Result<Table> {
    let mut reader = csv::Reader::from_path(path)?;

    let columns: Vec<String> = reader.headers()?.iter().map(String::from).collect();
    let name = path
        .file_stem()
        .and_then(|n| n.to_str())
        .unwrap_or("csv")
        .to_string();
    let mut table = Table::new(name, columns);

    for result in reader.records() {
        let record = result?;
        table.push_row(
            record
                .iter()
                .map(|field| if field.is_empty() { Value::Null } else { Value::text(field) })
                .collect(),
        );
    }

    Ok(table)
}

/// Write both summaries as pretty JSON
pub fn write_summary_json(summary: &Summary, path: &Path) -> Result<()> {
    let file = File::create(path)?;
    serde_json::to_writer_pretty(file, summary)?;
    log::info!("Wrote summary JSON to {}", path.display());
    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregate::{PersonSales, ReturnImpact};
    use chrono::NaiveDate;

    fn merged() -> Table {
        let date = NaiveDate::from_ymd_opt(2016, 11, 8)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap();
        let mut t = Table::with_columns(
            "orders",
            &["Order ID", "Customer Name", "Sales", "Order Date", "Returned", "Person"],
        );
        t.push_row(vec![
            "O1".into(),
            "Doe, Jane".into(),
            100.5.into(),
            Value::Date(date),
            "No".into(),
            "Anna".into(),
        ]);
        t.push_row(vec![
            "O2".into(),
            "Smith".into(),
            7.0.into(),
            Value::Null,
            "Yes".into(),
            Value::Null,
        ]);
        t
    }

    #[test]
    fn test_round_trip_keeps_rows_and_columns() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(OUTPUT_FILE);
        let table = merged();

        let written = write_csv(&table, &path).unwrap();
        let back = read_csv(&path).unwrap();

        assert_eq!(written, 2);
        assert_eq!(back.len(), table.len());
        assert_eq!(back.columns(), table.columns());
        assert_eq!(back.value(0, "Customer Name"), Some(&Value::text("Doe, Jane")));
        assert_eq!(back.value(0, "Sales"), Some(&Value::text("100.5")));
        assert_eq!(back.value(0, "Order Date"), Some(&Value::text("2016-11-08")));
        assert_eq!(back.value(1, "Person"), Some(&Value::Null));
    }

    #[test]
    fn test_output_has_header_and_no_index_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        write_csv(&merged(), &path).unwrap();

        let text = std::fs::read_to_string(&path).unwrap();
        let mut lines = text.lines();
        assert_eq!(
            lines.next(),
            Some("Order ID,Customer Name,Sales,Order Date,Returned,Person")
        );
        assert_eq!(lines.next(), Some("O1,\"Doe, Jane\",100.5,2016-11-08,No,Anna"));
        assert_eq!(lines.next(), Some("O2,Smith,7,,Yes,"));
    }

    #[test]
    fn test_write_summary_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("summary.json");
        let summary = Summary {
            returns_impact: vec![ReturnImpact {
                returned: "No".to_string(),
                orders: 1,
                sales: 100.5,
                profit: 3.0,
            }],
            sales_by_person: vec![PersonSales {
                person: "Anna".to_string(),
                sales: 100.5,
            }],
        };

        write_summary_json(&summary, &path).unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(json["returns_impact"][0]["returned"], "No");
        assert_eq!(json["sales_by_person"][0]["sales"], 100.5);
    }

    #[test]
    fn test_write_csv_to_missing_directory_fails() {
        let result = write_csv(&merged(), Path::new("/nonexistent/dir/out.csv"));
        assert!(result.is_err());
    }
}
