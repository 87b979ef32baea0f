// 🔄 Pipeline - clean → join → aggregate, in memory
// Loading and writing stay at the edges (see main.rs) so tests can feed tables directly

use crate::aggregate::{return_counts, Summary};
use crate::charts::ChartView;
use crate::cleaner::{clean_orders, CleaningReport};
use crate::error::Result;
use crate::joiner::{merge_orders, JoinOptions};
use crate::loader::SourceTables;
use crate::table::Table;

/// Everything one run produces before output
#[derive(Debug, Clone)]
pub struct AnalysisOutcome {
    pub cleaning: CleaningReport,
    pub merged: Table,
    pub summary: Summary,
    pub charts: Vec<ChartView>,
}

/// Run the transform stages on loaded tables
pub fn analyze(sources: SourceTables, options: &JoinOptions) -> Result<AnalysisOutcome> {
    sources.validate()?;

    let SourceTables {
        mut orders,
        returns,
        people,
    } = sources;

    let cleaning = clean_orders(&mut orders)?;
    let merged = merge_orders(orders, &returns, &people, options)?;
    let summary = Summary::from_merged(&merged)?;

    let charts = vec![
        ChartView::return_counts(&return_counts(&merged)?),
        ChartView::sales_by_person(&summary.sales_by_person),
    ];

    Ok(AnalysisOutcome {
        cleaning,
        merged,
        summary,
        charts,
    })
}
