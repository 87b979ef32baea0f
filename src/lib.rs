// Returns Analysis - Core Library
// Exposes all modules for use in the CLI and tests

pub mod table;
pub mod error;
pub mod loader;     // Workbook sheets → tables
pub mod cleaner;    // Decimal-comma numerics, day-first dates
pub mod joiner;     // Left joins: returns, then people
pub mod aggregate;  // Grouped sums
pub mod report;     // Console summaries
pub mod charts;     // Bar charts (terminal view behind `tui`)
pub mod export;     // CSV / JSON output
pub mod config;
pub mod pipeline;

// Re-export commonly used types
pub use table::{Table, Value};
pub use error::{AnalysisError, Result};
pub use loader::{load_workbook, SheetLayout, SourceTables};
pub use cleaner::{clean_orders, parse_day_first, parse_decimal_comma, CleaningReport};
pub use joiner::{fill_null, left_join, merge_orders, Cardinality, JoinOptions, NOT_RETURNED};
pub use aggregate::{return_counts, returns_impact, sales_by_person, PersonSales, ReturnImpact, Summary};
pub use report::{format_returns_impact, format_sales_by_person, print_summaries};
pub use charts::{show_charts, ChartView};
pub use export::{read_csv, write_csv, write_summary_json, OUTPUT_FILE};
pub use config::AnalysisConfig;
pub use pipeline::{analyze, AnalysisOutcome};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
