// End-to-end: raw sheets → merged table → summaries → CSV

use returns_analysis::{
    analyze, read_csv, write_csv, AnalysisError, Cardinality, JoinOptions, SourceTables, Table, Value,
};

fn orders() -> Table {
    let mut t = Table::with_columns(
        "orders",
        &["Row ID", "Order ID", "Order Date", "Region", "Sales", "Profit", "Discount"],
    );
    t.push_row(vec![
        1.0.into(),
        "O1".into(),
        "08/11/2016".into(),
        "East".into(),
        "100,50".into(),
        "20,10".into(),
        "0".into(),
    ]);
    t.push_row(vec![
        2.0.into(),
        "O2".into(),
        "12/06/2016".into(),
        "West".into(),
        "1.234,56".into(),
        "-3,5".into(),
        "0,2".into(),
    ]);
    t.push_row(vec![
        3.0.into(),
        "O3".into(),
        "no date".into(),
        "West".into(),
        "300".into(),
        "50".into(),
        "0,1".into(),
    ]);
    t.push_row(vec![
        4.0.into(),
        "O4".into(),
        "15/04/2015".into(),
        "Central".into(),
        "10".into(),
        "1".into(),
        "0".into(),
    ]);
    t
}

fn returns() -> Table {
    let mut t = Table::with_columns("returns", &["Returned", "Order ID"]);
    t.push_row(vec!["Yes".into(), "O2".into()]);
    t
}

fn people() -> Table {
    let mut t = Table::with_columns("people", &["Person", "Region"]);
    t.push_row(vec!["Anna Andreadi".into(), "West".into()]);
    t.push_row(vec!["Chuck Magee".into(), "East".into()]);
    t
}

fn sources() -> SourceTables {
    SourceTables {
        orders: orders(),
        returns: returns(),
        people: people(),
    }
}

#[test]
fn test_order_without_return_scenario() {
    let outcome = analyze(sources(), &JoinOptions::default()).unwrap();
    let merged = &outcome.merged;

    assert_eq!(merged.value(0, "Order ID"), Some(&Value::text("O1")));
    assert_eq!(merged.value(0, "Sales"), Some(&Value::Number(100.5)));
    assert_eq!(merged.value(0, "Returned"), Some(&Value::text("No")));
    assert_eq!(merged.value(0, "Person"), Some(&Value::text("Chuck Magee")));
}

#[test]
fn test_merged_shape_and_defaults() {
    let outcome = analyze(sources(), &JoinOptions::default()).unwrap();
    let merged = &outcome.merged;

    assert_eq!(merged.len(), 4);
    assert_eq!(
        merged.columns(),
        &[
            "Row ID", "Order ID", "Order Date", "Region", "Sales", "Profit", "Discount", "Returned", "Person"
        ]
    );
    assert_eq!(merged.value(1, "Returned"), Some(&Value::text("Yes")));
    assert_eq!(merged.value(1, "Sales"), Some(&Value::Number(1234.56)));
    // Central has no person
    assert_eq!(merged.value(3, "Person"), Some(&Value::Null));
    // Lenient date: unparseable becomes null, run continues
    assert_eq!(merged.value(2, "Order Date"), Some(&Value::Null));
    assert_eq!(outcome.cleaning.dates_coerced, 1);

    for column in ["Sales", "Profit", "Discount"] {
        assert!(merged.column(column).unwrap().iter().all(|v| v.as_number().is_some()));
    }
}

#[test]
fn test_summaries() {
    let outcome = analyze(sources(), &JoinOptions::default()).unwrap();
    let summary = &outcome.summary;

    let total_orders_sales = 100.5 + 1234.56 + 300.0 + 10.0;
    assert!((summary.total_sales() - total_orders_sales).abs() < 1e-9);

    assert_eq!(summary.returns_impact.len(), 2);
    assert_eq!(summary.returns_impact[0].returned, "No");
    assert_eq!(summary.returns_impact[0].orders, 3);
    assert_eq!(summary.returns_impact[1].returned, "Yes");
    assert_eq!(summary.returns_impact[1].sales, 1234.56);

    let names: Vec<&str> = summary.sales_by_person.iter().map(|p| p.person.as_str()).collect();
    assert_eq!(names, vec!["Anna Andreadi", "Chuck Magee"]);
    assert!(summary
        .sales_by_person
        .windows(2)
        .all(|w| w[0].sales >= w[1].sales));

    assert_eq!(outcome.charts.len(), 2);
    assert_eq!(outcome.charts[0].bars.len(), 2);
}

#[test]
fn test_duplicate_returns_policy() {
    let mut dup = sources();
    dup.returns.push_row(vec!["Yes".into(), "O2".into()]);

    let err = analyze(dup.clone(), &JoinOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::DuplicateKey { .. }));

    let fan_out = JoinOptions {
        returns: Cardinality::ManyToMany,
        ..JoinOptions::default()
    };
    let outcome = analyze(dup, &fan_out).unwrap();
    assert_eq!(outcome.merged.len(), 5);
}

#[test]
fn test_bad_number_aborts() {
    let mut bad = sources();
    bad.orders.push_row(vec![
        5.0.into(),
        "O5".into(),
        "01/01/2016".into(),
        "East".into(),
        "twelve".into(),
        "1".into(),
        "0".into(),
    ]);

    let err = analyze(bad, &JoinOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::InvalidNumber { ref column, .. } if column == "Sales"));
}

#[test]
fn test_missing_column_aborts() {
    let mut broken = sources();
    broken.people = Table::with_columns("people", &["Person"]);

    let err = analyze(broken, &JoinOptions::default()).unwrap_err();
    assert!(matches!(err, AnalysisError::MissingColumn { ref column, .. } if column == "Region"));
}

#[test]
fn test_csv_round_trip() {
    let outcome = analyze(sources(), &JoinOptions::default()).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("ventas_con_devoluciones_persona.csv");

    write_csv(&outcome.merged, &path).unwrap();
    let back = read_csv(&path).unwrap();

    assert_eq!(back.len(), outcome.merged.len());
    assert_eq!(back.columns(), outcome.merged.columns());
    assert_eq!(back.value(0, "Order Date"), Some(&Value::text("2016-11-08")));
    assert_eq!(back.value(1, "Sales"), Some(&Value::text("1234.56")));
}
