// 📊 Aggregates - grouped sums over the merged table

use crate::error::Result;
use crate::joiner::{PERSON_COLUMN, RETURNED_COLUMN};
use crate::table::{Table, Value};
use serde::Serialize;
use std::collections::{BTreeMap, HashMap};

pub const SALES_COLUMN: &str = "Sales";
pub const PROFIT_COLUMN: &str = "Profit";

/// Totals for one `Returned` value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReturnImpact {
    pub returned: String,
    pub orders: usize,
    pub sales: f64,
    pub profit: f64,
}

/// Sales total for one person
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PersonSales {
    pub person: String,
    pub sales: f64,
}

/// Both summaries of one run
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub returns_impact: Vec<ReturnImpact>,
    pub sales_by_person: Vec<PersonSales>,
}

impl Summary {
    pub fn from_merged(merged: &Table) -> Result<Self> {
        Ok(Summary {
            returns_impact: returns_impact(merged)?,
            sales_by_person: sales_by_person(merged)?,
        })
    }

    pub fn total_sales(&self) -> f64 {
        self.returns_impact.iter().map(|r| r.sales).sum()
    }
}

/// Group key as text; Null keys are dropped from every grouping
fn group_key(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        other => Some(other.render()),
    }
}

/// Nulls contribute nothing to a sum
fn amount(value: &Value) -> f64 {
    value.as_number().unwrap_or(0.0)
}

/// Sales and profit per `Returned` value, ordered by key
pub fn returns_impact(merged: &Table) -> Result<Vec<ReturnImpact>> {
    let returned = merged.require_column(RETURNED_COLUMN)?;
    let sales = merged.require_column(SALES_COLUMN)?;
    let profit = merged.require_column(PROFIT_COLUMN)?;

    let mut groups: BTreeMap<String, ReturnImpact> = BTreeMap::new();
    for row in merged.rows() {
        let Some(key) = group_key(&row[returned]) else {
            continue;
        };
        let entry = groups.entry(key.clone()).or_insert_with(|| ReturnImpact {
            returned: key,
            orders: 0,
            sales: 0.0,
            profit: 0.0,
        });
        entry.orders += 1;
        entry.sales += amount(&row[sales]);
        entry.profit += amount(&row[profit]);
    }

    Ok(groups.into_values().collect())
}

/// Sales per person, highest first; ties keep first-appearance order
pub fn sales_by_person(merged: &Table) -> Result<Vec<PersonSales>> {
    let person = merged.require_column(PERSON_COLUMN)?;
    let sales = merged.require_column(SALES_COLUMN)?;

    let mut positions: HashMap<String, usize> = HashMap::new();
    let mut result: Vec<PersonSales> = Vec::new();
    for row in merged.rows() {
        let Some(key) = group_key(&row[person]) else {
            continue;
        };
        let pos = *positions.entry(key.clone()).or_insert_with(|| {
            result.push(PersonSales {
                person: key,
                sales: 0.0,
            });
            result.len() - 1
        });
        result[pos].sales += amount(&row[sales]);
    }

    // sort_by is stable
    result.sort_by(|a, b| b.sales.total_cmp(&a.sales));
    Ok(result)
}

/// Row count per `Returned` value, ordered by key
pub fn return_counts(merged: &Table) -> Result<Vec<(String, u64)>> {
    let returned = merged.require_column(RETURNED_COLUMN)?;

    let mut counts: BTreeMap<String, u64> = BTreeMap::new();
    for row in merged.rows() {
        if let Some(key) = group_key(&row[returned]) {
            *counts.entry(key).or_insert(0) += 1;
        }
    }

    Ok(counts.into_iter().collect())
}

// ============================================================================
// TESTS
// ============================================================================
