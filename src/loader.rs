// 📂 Loader - Workbook sheets → Tables
// Sheet order is fixed: orders, returns, people

use crate::error::{AnalysisError, Result};
use crate::table::{Table, Value};
use calamine::{open_workbook_auto, Data, Reader, Sheets};
use std::io::{Read, Seek};
use std::path::Path;

/// Columns each sheet must provide
pub const ORDER_COLUMNS: [&str; 6] = ["Order ID", "Region", "Sales", "Profit", "Discount", "Order Date"];
pub const RETURN_COLUMNS: [&str; 2] = ["Order ID", "Returned"];
pub const PEOPLE_COLUMNS: [&str; 2] = ["Region", "Person"];

/// Which sheet index holds which table
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SheetLayout {
    pub orders: usize,
    pub returns: usize,
    pub people: usize,
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout {
            orders: 0,
            returns: 1,
            people: 2,
        }
    }
}

/// The three raw input tables
#[derive(Debug, Clone)]
pub struct SourceTables {
    pub orders: Table,
    pub returns: Table,
    pub people: Table,
}

impl SourceTables {
    /// Check every required column up-front
    pub fn validate(&self) -> Result<()> {
        self.orders.require_columns(&ORDER_COLUMNS)?;
        self.returns.require_columns(&RETURN_COLUMNS)?;
        self.people.require_columns(&PEOPLE_COLUMNS)?;
        Ok(())
    }
}

/// Load orders, returns and people from one workbook
///
/// Format (.xls, .xlsx, .xlsb, .ods) is detected from the extension.
pub fn load_workbook(path: &Path, layout: &SheetLayout) -> Result<SourceTables> {
    let mut workbook = open_workbook_auto(path).map_err(|source| AnalysisError::Workbook {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("Workbook sheets: {:?}", workbook.sheet_names());

    let tables = SourceTables {
        orders: load_sheet(&mut workbook, path, layout.orders, "orders")?,
        returns: load_sheet(&mut workbook, path, layout.returns, "returns")?,
        people: load_sheet(&mut workbook, path, layout.people, "people")?,
    };

    log::info!(
        "Loaded {} orders, {} returns, {} people from {}",
        tables.orders.len(),
        tables.returns.len(),
        tables.people.len(),
        path.display()
    );

    Ok(tables)
}

/// Load one sheet by index: first row is the header
pub fn load_sheet<RS: Read + Seek>(
    workbook: &mut Sheets<RS>,
    path: &Path,
    index: usize,
    name: &str,
) -> Result<Table> {
    let range = match workbook.worksheet_range_at(index) {
        Some(range) => range.map_err(|source| AnalysisError::Workbook {
            path: path.to_path_buf(),
            source,
        })?,
        None => {
            return Err(AnalysisError::SheetNotFound {
                index,
                available: workbook.sheet_names(),
            })
        }
    };

    let rows = range
        .rows()
        .map(|row| row.iter().map(cell_to_value).collect::<Vec<_>>());

    Ok(table_from_rows(name, rows))
}

/// Build a table from raw rows; the first row becomes the header.
///
/// Blank header cells are named `Unnamed: <i>`; fully empty rows at the end
/// of the sheet are dropped.
pub fn table_from_rows<I>(name: &str, rows: I) -> Table
where
    I: IntoIterator<Item = Vec<Value>>,
{
    let mut rows = rows.into_iter();

    let columns: Vec<String> = rows
        .next()
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(i, v)| match v {
            Value::Null => format!("Unnamed: {}", i),
            other => other.render(),
        })
        .collect();

    let mut body: Vec<Vec<Value>> = rows.collect();
    while body
        .last()
        .map(|r| r.iter().all(Value::is_null))
        .unwrap_or(false)
    {
        body.pop();
    }

    let mut table = Table::new(name, columns);
    for row in body {
        table.push_row(row);
    }
    table
}

/// Spreadsheet cell → Value
pub fn cell_to_value(cell: &Data) -> Value {
    match cell {
        Data::Empty | Data::Error(_) => Value::Null,
        Data::String(s) if s.trim().is_empty() => Value::Null,
        Data::String(s) => Value::Text(s.clone()),
        Data::Int(i) => Value::Number(*i as f64),
        Data::Float(f) => Value::Number(*f),
        Data::Bool(b) => Value::Text(b.to_string()),
        // as_datetime honours the workbook's 1900/1904 date system
        Data::DateTime(dt) => dt.as_datetime().map(Value::Date).unwrap_or(Value::Null),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
    }
}

// ============================================================================
// TESTS
// ============================================================================
