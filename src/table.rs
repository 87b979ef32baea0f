// 📋 Table Model - column names + ordered rows of loosely typed cells
// Every stage consumes a Table and produces a new (or updated) Table

use crate::error::{AnalysisError, Result};
use chrono::{NaiveDateTime, Timelike};

// ============================================================================
// CELL VALUE
// ============================================================================

/// Value - one cell
///
/// `Null` is the single missing marker: empty cells, unmatched join
/// columns and unparseable dates all end up here.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Text(String),
    Number(f64),
    Date(NaiveDateTime),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_date(&self) -> Option<NaiveDateTime> {
        match self {
            Value::Date(d) => Some(*d),
            _ => None,
        }
    }

    /// Textual rendering used for CSV output, join keys and group keys.
    /// Null renders as the empty string.
    pub fn render(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Text(s) => s.clone(),
            Value::Number(n) => format!("{}", n),
            Value::Date(d) => {
                if d.hour() == 0 && d.minute() == 0 && d.second() == 0 {
                    d.format("%Y-%m-%d").to_string()
                } else {
                    d.format("%Y-%m-%d %H:%M:%S").to_string()
                }
            }
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

// ============================================================================
// TABLE
// ============================================================================

/// Table - named, ordered columns and rows
///
/// Rows are always exactly as wide as `columns`.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub name: String,
    columns: Vec<String>,
    rows: Vec<Vec<Value>>,
}

impl Table {
    pub fn new(name: impl Into<String>, columns: Vec<String>) -> Self {
        Table {
            name: name.into(),
            columns,
            rows: Vec::new(),
        }
    }

    /// Builder: create a table from string column names
    pub fn with_columns(name: impl Into<String>, columns: &[&str]) -> Self {
        Self::new(name, columns.iter().map(|c| c.to_string()).collect())
    }

    /// Append a row, padding with nulls or truncating to the table width
    pub fn push_row(&mut self, mut row: Vec<Value>) {
        row.resize(self.columns.len(), Value::Null);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == column)
    }

    /// Column index or `MissingColumn`
    pub fn require_column(&self, column: &str) -> Result<usize> {
        self.column_index(column)
            .ok_or_else(|| AnalysisError::MissingColumn {
                table: self.name.clone(),
                column: column.to_string(),
            })
    }

    /// Fail on the first absent column
    pub fn require_columns(&self, columns: &[&str]) -> Result<()> {
        for column in columns {
            self.require_column(column)?;
        }
        Ok(())
    }

    /// Cell at (row, column name)
    pub fn value(&self, row: usize, column: &str) -> Option<&Value> {
        let idx = self.column_index(column)?;
        self.rows.get(row).map(|r| &r[idx])
    }

    /// All cells of one column, in row order
    pub fn column(&self, column: &str) -> Result<Vec<&Value>> {
        let idx = self.require_column(column)?;
        Ok(self.rows.iter().map(|r| &r[idx]).collect())
    }

    /// Rewrite every cell of a column; the closure gets (row index, cell)
    pub fn try_map_column<F>(&mut self, column: &str, mut f: F) -> Result<()>
    where
        F: FnMut(usize, &Value) -> Result<Value>,
    {
        let idx = self.require_column(column)?;
        for (row_idx, row) in self.rows.iter_mut().enumerate() {
            row[idx] = f(row_idx, &row[idx])?;
        }
        Ok(())
    }

    /// Split into (name, columns, rows) for stages that rebuild the table
    pub(crate) fn into_parts(self) -> (String, Vec<String>, Vec<Vec<Value>>) {
        (self.name, self.columns, self.rows)
    }
}

// ============================================================================
// TESTS
// ============================================================================
