// ⚙️ Configuration - command line flags, all optional
// A bare invocation reads the default workbook and writes the default CSV

use crate::export::OUTPUT_FILE;
use crate::joiner::{Cardinality, JoinOptions};
use crate::loader::SheetLayout;
use clap::Parser;
use std::path::PathBuf;

/// Default input workbook
pub const INPUT_FILE: &str = "Sample - Superstore.xls";

#[derive(Debug, Clone, Parser)]
#[command(
    name = "returns-analysis",
    version,
    about = "Join orders, returns and regional managers; summarize the impact of returns"
)]
pub struct AnalysisConfig {
    /// Workbook with orders, returns and people sheets
    #[arg(short, long, env = "RETURNS_INPUT", default_value = INPUT_FILE)]
    pub input: PathBuf,

    /// Merged CSV output
    #[arg(short, long, env = "RETURNS_OUTPUT", default_value = OUTPUT_FILE)]
    pub output: PathBuf,

    #[arg(long, default_value_t = 0)]
    pub orders_sheet: usize,

    #[arg(long, default_value_t = 1)]
    pub returns_sheet: usize,

    #[arg(long, default_value_t = 2)]
    pub people_sheet: usize,

    /// Skip the interactive chart view
    #[arg(long)]
    pub no_charts: bool,

    /// Accept several return records per order (rows fan out)
    #[arg(long)]
    pub allow_duplicate_returns: bool,

    /// Also write both summaries as JSON
    #[arg(long)]
    pub summary_json: Option<PathBuf>,
}

impl AnalysisConfig {
    pub fn sheet_layout(&self) -> SheetLayout {
        SheetLayout {
            orders: self.orders_sheet,
            returns: self.returns_sheet,
            people: self.people_sheet,
        }
    }

    pub fn join_options(&self) -> JoinOptions {
        JoinOptions {
            returns: if self.allow_duplicate_returns {
                Cardinality::ManyToMany
            } else {
                Cardinality::ManyToOne
            },
            ..JoinOptions::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_fixed_script() {
        let config = AnalysisConfig::parse_from(["returns-analysis"]);

        assert_eq!(config.input, PathBuf::from("Sample - Superstore.xls"));
        assert_eq!(config.output, PathBuf::from("ventas_con_devoluciones_persona.csv"));
        assert_eq!(config.sheet_layout(), SheetLayout::default());
        assert_eq!(config.join_options(), JoinOptions::default());
        assert!(!config.no_charts);
        assert!(config.summary_json.is_none());
    }

    #[test]
    fn test_flags() {
        let config = AnalysisConfig::parse_from([
            "returns-analysis",
            "--input",
            "data.xlsx",
            "--people-sheet",
            "3",
            "--no-charts",
            "--allow-duplicate-returns",
        ]);

        assert_eq!(config.input, PathBuf::from("data.xlsx"));
        assert_eq!(config.sheet_layout().people, 3);
        assert!(config.no_charts);
        assert_eq!(config.join_options().returns, Cardinality::ManyToMany);
    }
}
