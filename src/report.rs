// 🖨️ Console Report - human-readable summaries, no machine contract

use crate::aggregate::{PersonSales, ReturnImpact, Summary};

/// Returned | Orders | Sales | Profit
pub fn format_returns_impact(rows: &[ReturnImpact]) -> String {
    let key_width = rows
        .iter()
        .map(|r| r.returned.chars().count())
        .chain(std::iter::once("Returned".len()))
        .max()
        .unwrap_or(8);

    let mut out = format!(
        "{:<kw$}  {:>8}  {:>14}  {:>14}\n",
        "Returned",
        "Orders",
        "Sales",
        "Profit",
        kw = key_width
    );
    for r in rows {
        out.push_str(&format!(
            "{:<kw$}  {:>8}  {:>14.2}  {:>14.2}\n",
            r.returned,
            r.orders,
            r.sales,
            r.profit,
            kw = key_width
        ));
    }
    out
}

/// Rank | Person | Sales
pub fn format_sales_by_person(rows: &[PersonSales]) -> String {
    let name_width = rows
        .iter()
        .map(|p| p.person.chars().count())
        .chain(std::iter::once("Person".len()))
        .max()
        .unwrap_or(6);

    let mut out = format!("{:>4}  {:<nw$}  {:>14}\n", "#", "Person", "Sales", nw = name_width);
    for (i, p) in rows.iter().enumerate() {
        out.push_str(&format!(
            "{:>4}  {:<nw$}  {:>14.2}\n",
            i + 1,
            p.person,
            p.sales,
            nw = name_width
        ));
    }
    out
}

/// Print both summaries to stdout
pub fn print_summaries(summary: &Summary) {
    println!("\n📦 Return impact:");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    print!("{}", format_returns_impact(&summary.returns_impact));

    println!("\n👥 Sales by person:");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    if summary.sales_by_person.is_empty() {
        println!("(no orders matched a regional person)");
    } else {
        print!("{}", format_sales_by_person(&summary.sales_by_person));
    }
}
