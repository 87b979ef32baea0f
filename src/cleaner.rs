// 🧹 Cleaner - decimal-comma numerics + day-first dates
//
// Numeric parsing is STRICT: a value that cannot be parsed aborts the run.
// Date parsing is LENIENT: a value that cannot be parsed becomes Null.

use crate::error::{AnalysisError, Result};
use crate::table::{Table, Value};
use chrono::{NaiveDate, NaiveDateTime};

/// Numeric columns of the orders sheet
pub const NUMERIC_COLUMNS: [&str; 3] = ["Sales", "Profit", "Discount"];

/// Date column of the orders sheet
pub const DATE_COLUMN: &str = "Order Date";

/// Day-first formats tried in order; ISO is year-first and unambiguous
const DATETIME_FORMATS: &[&str] = &[
    "%d/%m/%Y %H:%M:%S",
    "%d/%m/%Y %H:%M",
    "%d-%m-%Y %H:%M:%S",
    "%d-%m-%Y %H:%M",
    "%d.%m.%Y %H:%M:%S",
    "%d.%m.%Y %H:%M",
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
];

// Two-digit years first: %Y would read "16" as the year 16
const DATE_FORMATS: &[&str] = &[
    "%d/%m/%y", // 08/11/16
    "%d-%m-%y", // 08-11-16
    "%d.%m.%y", // 08.11.16
    "%d/%m/%Y", // 08/11/2016
    "%d-%m-%Y", // 08-11-2016
    "%d.%m.%Y", // 08.11.2016
    "%Y-%m-%d", // 2016-11-08
];

/// Result of cleaning the orders table
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CleaningReport {
    pub rows: usize,
    pub numeric_columns: usize,
    /// Non-empty dates that could not be parsed and were set to Null
    pub dates_coerced: usize,
}

impl CleaningReport {
    pub fn summary(&self) -> String {
        format!(
            "Cleaned {} rows: {} numeric columns, {} unparseable dates set to null",
            self.rows, self.numeric_columns, self.dates_coerced
        )
    }
}

// ============================================================================
// NUMERICS
// ============================================================================

/// Parse a decimal-comma number
///
/// # Examples:
/// ```
/// use returns_analysis::cleaner::parse_decimal_comma;
/// assert_eq!(parse_decimal_comma("100,50"), Some(100.5));
/// assert_eq!(parse_decimal_comma("1.234,56"), Some(1234.56));
/// assert_eq!(parse_decimal_comma("0.2"), Some(0.2));
/// assert_eq!(parse_decimal_comma("abc"), None);
/// ```
pub fn parse_decimal_comma(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    // With a comma present, periods can only be thousands separators
    let normalized = if trimmed.contains(',') {
        trimmed.replace('.', "").replace(',', ".")
    } else {
        trimmed.to_string()
    };

    normalized.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// Convert one column to numbers in place
///
/// Numbers pass through, empty cells stay Null, anything else must parse.
pub fn clean_numeric_column(table: &mut Table, column: &str) -> Result<()> {
    table.try_map_column(column, |row, value| match value {
        Value::Null => Ok(Value::Null),
        Value::Number(n) => Ok(Value::Number(*n)),
        other => {
            let raw = other.render();
            parse_decimal_comma(&raw)
                .map(Value::Number)
                .ok_or_else(|| AnalysisError::InvalidNumber {
                    column: column.to_string(),
                    row,
                    value: raw,
                })
        }
    })?;

    log::debug!("Normalized numeric column '{}'", column);
    Ok(())
}

// ============================================================================
// DATES
// ============================================================================

/// Parse a date with the day before the month
///
/// Returns `None` for anything unparseable, including impossible dates.
pub fn parse_day_first(raw: &str) -> Option<NaiveDateTime> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    for format in DATETIME_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(trimmed, format) {
            return Some(dt);
        }
    }

    for format in DATE_FORMATS {
        if let Ok(date) = NaiveDate::parse_from_str(trimmed, format) {
            return date.and_hms_opt(0, 0, 0);
        }
    }

    None
}

/// Parse a date column in place; returns how many values were coerced to Null
pub fn clean_date_column(table: &mut Table, column: &str) -> Result<usize> {
    let mut coerced = 0;

    table.try_map_column(column, |_, value| {
        Ok(match value {
            Value::Null => Value::Null,
            Value::Date(d) => Value::Date(*d),
            other => match parse_day_first(&other.render()) {
                Some(dt) => Value::Date(dt),
                None => {
                    coerced += 1;
                    Value::Null
                }
            },
        })
    })?;

    if coerced > 0 {
        log::warn!("{} value(s) in '{}' could not be parsed as dates and were set to null", coerced, column);
    }

    Ok(coerced)
}

/// Clean the orders table: numeric columns first, then the date column
pub fn clean_orders(orders: &mut Table) -> Result<CleaningReport> {
    for column in NUMERIC_COLUMNS {
        clean_numeric_column(orders, column)?;
    }
    let dates_coerced = clean_date_column(orders, DATE_COLUMN)?;

    let report = CleaningReport {
        rows: orders.len(),
        numeric_columns: NUMERIC_COLUMNS.len(),
        dates_coerced,
    };
    log::info!("{}", report.summary());
    Ok(report)
}

// ============================================================================
// TESTS
// ============================================================================
