use anyhow::{Context, Result};
use clap::Parser;

use returns_analysis::{
    analyze, load_workbook, print_summaries, show_charts, write_csv, write_summary_json, AnalysisConfig,
};

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = AnalysisConfig::parse();
    run(&config)
}

fn run(config: &AnalysisConfig) -> Result<()> {
    println!("📊 Returns Analysis v{}", returns_analysis::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Load sheets
    println!("\n📂 Loading {}...", config.input.display());
    let sources = load_workbook(&config.input, &config.sheet_layout())
        .with_context(|| format!("Failed to load workbook {}", config.input.display()))?;
    println!(
        "✓ Loaded {} orders, {} returns, {} people",
        sources.orders.len(),
        sources.returns.len(),
        sources.people.len()
    );

    // 2-4. Clean, join, aggregate
    println!("\n🧹 Cleaning and joining...");
    let outcome = analyze(sources, &config.join_options()).context("Failed to analyze orders")?;
    println!("✓ {}", outcome.cleaning.summary());
    println!("✓ Merged table: {} rows, {} columns", outcome.merged.len(), outcome.merged.columns().len());

    // 5. Summaries
    print_summaries(&outcome.summary);

    // 6. Output
    let rows = write_csv(&outcome.merged, &config.output)
        .with_context(|| format!("Failed to write {}", config.output.display()))?;
    println!("\n💾 Saved {} rows to {}", rows, config.output.display());

    if let Some(path) = &config.summary_json {
        write_summary_json(&outcome.summary, path)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        println!("💾 Saved summaries to {}", path.display());
    }

    // 7. Charts
    if config.no_charts {
        log::info!("Chart view disabled");
    } else {
        println!("\n📈 Showing charts... (Press 'q' or Enter for the next one)");
        if let Err(err) = show_charts(&outcome.charts) {
            log::warn!("Could not display charts: {}", err);
        }
    }

    println!("\n✅ Done");
    Ok(())
}
