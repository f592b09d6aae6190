//! BasketForge: Market basket analysis CLI using the Apriori algorithm
//!
//! This is the main entrypoint that orchestrates data loading, frequent
//! itemset mining, rule derivation, reporting, and basket recommendations.

use anyhow::Result;
use basketforge::{
    generate_rules, load_transactions, mine_frequent_itemsets, recommend_items, viz, Args,
    Transaction,
};
use clap::Parser;
use std::time::Instant;

fn main() -> Result<()> {
    // Parse and validate command-line arguments
    let args = Args::parse();
    args.validate()?;

    if args.verbose {
        println!("BasketForge - Market Basket Analysis using Apriori");
        println!("==================================================\n");
    }

    // Check if in recommendation mode
    if let Some(basket_items) = args.parse_basket_items()? {
        run_recommend_mode(&args, basket_items)?;
    } else {
        run_full_pipeline(&args)?;
    }

    Ok(())
}

/// Run recommendation mode for a single basket
fn run_recommend_mode(args: &Args, basket_items: Vec<String>) -> Result<()> {
    println!("=== Recommendation Mode ===");
    println!("Basket contents: {}", basket_items.join(", "));

    let start_time = Instant::now();

    // Mine the dataset to derive the rule collection
    if args.verbose {
        println!("\nLoading transactions from: {}", args.input);
    }
    let data = load_transactions(&args.input)?;

    if args.verbose {
        println!("Loaded {} transactions", data.len());
        println!(
            "\nMining frequent itemsets (min support {})...",
            args.min_support
        );
    }

    let itemsets = mine_frequent_itemsets(&data, args.min_support)?;
    if itemsets.is_empty() {
        println!(
            "\nNo frequent itemsets found with min support {}; nothing to recommend",
            args.min_support
        );
        return Ok(());
    }

    let rules = generate_rules(&itemsets, args.min_confidence);

    let basket: Transaction = basket_items.into_iter().collect();
    let suggestions = recommend_items(&rules, &basket);

    let elapsed = start_time.elapsed();

    if suggestions.is_empty() {
        println!("\nNo applicable rules found for this basket");
    } else {
        println!("\n✓ Suggestions ({} applicable rules):", suggestions.len());
        for rule in suggestions.iter().take(args.top_rules) {
            let new_items: Vec<&str> = rule
                .consequent
                .iter()
                .filter(|item| !basket.contains(*item))
                .map(|item| item.as_str())
                .collect();
            println!(
                "  {} (confidence {:.2}, lift {:.2})",
                new_items.join(", "),
                rule.confidence,
                rule.lift
            );
        }
    }
    println!("  Processing time: {:.2}s", elapsed.as_secs_f64());

    Ok(())
}

/// Run the full mining pipeline
fn run_full_pipeline(args: &Args) -> Result<()> {
    println!("=== Full Mining Pipeline ===\n");

    let start_time = Instant::now();

    // Step 1: Load transactions
    if args.verbose {
        println!("Step 1: Loading transactions");
        println!("  Input file: {}", args.input);
    }

    let data_start = Instant::now();
    let data = load_transactions(&args.input)?;
    let data_time = data_start.elapsed();

    println!("✓ Data loaded: {} transactions", data.len());
    if args.verbose {
        println!("  Loading time: {:.2}s", data_time.as_secs_f64());
        println!("  Distinct items: {}", data.distinct_item_count());
    }

    // Step 2: Mine frequent itemsets
    if args.verbose {
        println!("\nStep 2: Mining frequent itemsets");
        println!("  Min support: {}", args.min_support);
    }

    let mining_start = Instant::now();
    let itemsets = mine_frequent_itemsets(&data, args.min_support)?;
    let mining_time = mining_start.elapsed();

    if itemsets.is_empty() {
        println!(
            "\nNo frequent itemsets found with min support {}",
            args.min_support
        );
        return Ok(());
    }

    println!("✓ Mined {} frequent itemsets", itemsets.len());
    if args.verbose {
        println!("  Mining time: {:.2}s", mining_time.as_secs_f64());
    }

    // Step 3: Derive association rules
    if args.verbose {
        println!("\nStep 3: Deriving association rules");
        println!("  Min confidence: {}", args.min_confidence);
    }

    let rules_start = Instant::now();
    let rules = generate_rules(&itemsets, args.min_confidence);
    let rules_time = rules_start.elapsed();

    println!("✓ Derived {} association rules", rules.len());
    if args.verbose {
        println!("  Derivation time: {:.2}s", rules_time.as_secs_f64());
    }

    // Step 4: Report results
    viz::print_mining_summary(&data, &itemsets, &rules, args.top_items, args.top_rules);

    if args.verbose {
        println!("\nStep 4: Generating support chart");
        println!("  Output file: {}", args.output);
    }

    let viz_start = Instant::now();
    viz::create_support_chart(&itemsets, &args.output, args.top_items)?;
    let viz_time = viz_start.elapsed();

    if args.verbose {
        println!("  Chart time: {:.2}s", viz_time.as_secs_f64());
    }

    let total_time = start_time.elapsed();
    println!("\n=== Pipeline Complete ===");
    println!("Total processing time: {:.2}s", total_time.as_secs_f64());
    println!("Support chart saved to: {}", args.output);

    Ok(())
}
