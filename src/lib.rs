//! BasketForge: A Rust CLI application for market basket analysis using the
//! Apriori algorithm
//!
//! This library mines frequent itemsets from retail transaction data and
//! derives association rules ranked by confidence and lift.

pub mod cli;
pub mod data;
pub mod miner;
pub mod rules;
pub mod viz;

// Re-export public items for easier access
pub use cli::Args;
pub use data::{load_transactions, BasketData, Transaction};
pub use miner::{calculate_support, mine_frequent_itemsets, FrequentItemsets, Itemset};
pub use rules::{generate_rules, recommend_items, Rule};

/// Common result type used throughout the application
pub type Result<T> = anyhow::Result<T>;
