// 🔗 Joiner - left outer joins on a shared key column
//
// Order matters: returns-join → fill "Returned" → people-join

use crate::error::{AnalysisError, Result};
use crate::table::{Table, Value};
use std::collections::HashMap;

/// Default for orders with no return record
pub const NOT_RETURNED: &str = "No";

pub const ORDER_KEY: &str = "Order ID";
pub const REGION_KEY: &str = "Region";
pub const RETURNED_COLUMN: &str = "Returned";
pub const PERSON_COLUMN: &str = "Person";

/// How many right-hand rows one key may match
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Cardinality {
    /// Right-hand keys must be unique; duplicates abort the join
    ManyToOne,
    /// Duplicates fan out into one output row per match
    ManyToMany,
}

/// Join policies for the two joins of `merge_orders`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JoinOptions {
    pub returns: Cardinality,
    pub people: Cardinality,
}

impl Default for JoinOptions {
    fn default() -> Self {
        JoinOptions {
            returns: Cardinality::ManyToOne,
            // One person per region is assumed, not validated
            people: Cardinality::ManyToMany,
        }
    }
}

/// Join key as text; Null never matches
fn key_of(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(other.render()),
    }
}

/// Left outer join of `left` and `right` on `key`
///
/// Every left row is kept, in order. Unmatched right columns are Null.
/// Non-key columns present on both sides get `_x` / `_y` suffixes.
pub fn left_join(left: Table, right: &Table, key: &str, cardinality: Cardinality) -> Result<Table> {
    let left_key = left.require_column(key)?;
    let right_key = right.require_column(key)?;

    // Index right rows by key, first appearance order preserved per key
    let mut index: HashMap<String, Vec<usize>> = HashMap::new();
    for (i, row) in right.rows().iter().enumerate() {
        if let Some(k) = key_of(&row[right_key]) {
            let matches = index.entry(k.clone()).or_default();
            if cardinality == Cardinality::ManyToOne && !matches.is_empty() {
                return Err(AnalysisError::DuplicateKey {
                    column: key.to_string(),
                    key: k,
                });
            }
            matches.push(i);
        }
    }

    let right_carry: Vec<usize> = (0..right.columns().len()).filter(|&i| i != right_key).collect();

    // Column names, suffixing collisions
    let (name, mut left_columns, left_rows) = left.into_parts();
    let mut right_columns: Vec<String> = right_carry.iter().map(|&i| right.columns()[i].clone()).collect();
    for (li, column) in left_columns.iter_mut().enumerate() {
        if li == left_key {
            continue;
        }
        if let Some(rc) = right_columns.iter_mut().find(|c| c.as_str() == column.as_str()) {
            rc.push_str("_y");
            column.push_str("_x");
        }
    }

    let mut columns = left_columns;
    columns.extend(right_columns);
    let mut joined = Table::new(name, columns);

    let mut fanned_out = 0usize;
    for row in left_rows {
        let matches = key_of(&row[left_key]).and_then(|k| index.get(&k));
        match matches {
            Some(matches) => {
                fanned_out += matches.len() - 1;
                for &ri in matches {
                    let mut out = row.clone();
                    out.extend(right_carry.iter().map(|&ci| right.rows()[ri][ci].clone()));
                    joined.push_row(out);
                }
            }
            None => {
                let mut out = row;
                out.extend(std::iter::repeat(Value::Null).take(right_carry.len()));
                joined.push_row(out);
            }
        }
    }

    if fanned_out > 0 {
        log::warn!(
            "Join on '{}' with '{}' added {} row(s) through duplicate keys",
            key,
            right.name,
            fanned_out
        );
    }

    Ok(joined)
}

/// Replace Null cells in `column` with `default`; returns the count filled
pub fn fill_null(table: &mut Table, column: &str, default: &str) -> Result<usize> {
    let mut filled = 0;
    table.try_map_column(column, |_, value| {
        Ok(match value {
            Value::Null => {
                filled += 1;
                Value::text(default)
            }
            other => other.clone(),
        })
    })?;
    Ok(filled)
}

/// Orders ⟕ returns (on Order ID), default "No", then ⟕ people (on Region)
pub fn merge_orders(orders: Table, returns: &Table, people: &Table, options: &JoinOptions) -> Result<Table> {
    let order_count = orders.len();

    let mut merged = left_join(orders, returns, ORDER_KEY, options.returns)?;
    let filled = fill_null(&mut merged, RETURNED_COLUMN, NOT_RETURNED)?;
    log::info!(
        "Joined returns: {} rows ({} orders), {} without a return record",
        merged.len(),
        order_count,
        filled
    );

    let merged = left_join(merged, people, REGION_KEY, options.people)?;
    let unassigned = merged.column(PERSON_COLUMN)?.iter().filter(|v| v.is_null()).count();
    if unassigned > 0 {
        log::warn!("{} row(s) have no person assigned to their region", unassigned);
    }

    Ok(merged)
}

// ============================================================================
// TESTS
// ============================================================================
