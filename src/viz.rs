//! Console reporting and support chart rendering with Plotters

use crate::data::BasketData;
use crate::miner::{format_itemset, FrequentItemsets};
use crate::rules::{top_rules_by_lift, Rule};
use plotters::prelude::*;

/// Print dataset statistics, top itemsets, and top rules to the console
///
/// Itemsets are ranked by support descending, rules by lift descending.
pub fn print_mining_summary(
    data: &BasketData,
    itemsets: &FrequentItemsets,
    rules: &[Rule],
    top_items: usize,
    top_rules: usize,
) {
    println!("\n=== Mining Statistics ===");
    println!("Transactions: {}", data.len());
    println!("Distinct items: {}", data.distinct_item_count());
    println!("Frequent itemsets: {}", itemsets.len());
    println!("Association rules: {}", rules.len());

    println!("\n=== Frequent Itemsets (Top {} by Support) ===", top_items);
    println!("  {:<40} | {:>8}", "Itemset", "Support");
    println!("  {:-<40}-|-{:->8}", "", "");
    for (itemset, support) in itemsets.sorted_by_support().into_iter().take(top_items) {
        println!("  {:<40} | {:>8.4}", format_itemset(itemset), support);
    }

    println!("\n=== Association Rules (Top {} by Lift) ===", top_rules);
    if rules.is_empty() {
        println!("  No rules met the minimum confidence threshold");
        return;
    }

    println!(
        "  {:<44} | {:>8} | {:>10} | {:>8}",
        "Rule", "Support", "Confidence", "Lift"
    );
    println!("  {:-<44}-|-{:->8}-|-{:->10}-|-{:->8}", "", "", "", "");
    for rule in top_rules_by_lift(rules, top_rules) {
        println!(
            "  {:<44} | {:>8.4} | {:>10.4} | {:>8.4}",
            rule.to_string(),
            rule.support,
            rule.confidence,
            rule.lift
        );
    }
}

/// Create a bar chart of the top frequent itemsets by support
///
/// # Arguments
/// * `itemsets` - Mined frequent itemsets; must be non-empty
/// * `output_path` - Path to save the PNG plot
/// * `top_n` - Number of itemsets to chart
///
/// # Returns
/// * Result indicating success or failure
pub fn create_support_chart(
    itemsets: &FrequentItemsets,
    output_path: &str,
    top_n: usize,
) -> crate::Result<()> {
    let ranked: Vec<_> = itemsets.sorted_by_support().into_iter().take(top_n).collect();
    if ranked.is_empty() {
        anyhow::bail!("No frequent itemsets to chart");
    }

    let max_support = ranked
        .iter()
        .map(|(_, support)| *support)
        .fold(0.0f64, f64::max);

    let root = BitMapBackend::new(output_path, (800, 600)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .caption("Frequent Itemsets by Support", ("sans-serif", 30))
        .margin(10)
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(0f64..(ranked.len() as f64), 0f64..(max_support * 1.1))?;

    chart
        .configure_mesh()
        .x_desc("Itemset Rank")
        .y_desc("Support")
        .axis_desc_style(("sans-serif", 15))
        .draw()?;

    // Draw bars for each ranked itemset
    for (rank, (_, support)) in ranked.iter().enumerate() {
        chart.draw_series(std::iter::once(Rectangle::new(
            [
                (rank as f64 + 0.1, 0.0),
                (rank as f64 + 0.9, *support),
            ],
            BLUE.filled(),
        )))?;
    }

    root.present()?;
    println!("Support chart saved to: {}", output_path);

    // The x axis carries ranks, so list the itemsets behind them
    println!("Charted itemsets by rank:");
    for (rank, (itemset, support)) in ranked.iter().enumerate() {
        println!("  {}: {} (support {:.4})", rank, format_itemset(itemset), support);
    }

    Ok(())
}
