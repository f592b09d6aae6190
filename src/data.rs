//! Transaction loading from basket-format CSV files using Polars

use polars::prelude::*;
use std::collections::HashSet;

/// A single transaction: an unordered collection of distinct item identifiers
pub type Transaction = HashSet<String>;

/// Loaded transaction data ready for mining
#[derive(Debug)]
pub struct BasketData {
    /// One entry per CSV row; rows left empty after filtering still count
    /// toward the transaction total
    pub transactions: Vec<Transaction>,
}

impl BasketData {
    /// Total number of transactions
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Number of distinct items across all transactions
    pub fn distinct_item_count(&self) -> usize {
        let mut items: HashSet<&str> = HashSet::new();
        for transaction in &self.transactions {
            for item in transaction {
                items.insert(item.as_str());
            }
        }
        items.len()
    }
}

/// Load transactions from a basket-format CSV file
///
/// The expected layout is one transaction per row and one item per column,
/// with no header. Rows may have varying numbers of items; missing and blank
/// fields are discarded.
///
/// # Arguments
/// * `file_path` - Path to the CSV file
///
/// # Returns
/// * `BasketData` containing one item set per input row
pub fn load_transactions(file_path: &str) -> crate::Result<BasketData> {
    // Scan the whole file for schema inference so ragged rows are accepted
    let df = LazyCsvReader::new(file_path)
        .has_header(false)
        .with_infer_schema_length(None)
        .finish()?
        .collect()?;

    if df.height() == 0 {
        anyhow::bail!("No transactions found in '{}'", file_path);
    }

    let mut transactions = vec![Transaction::new(); df.height()];

    for column in df.get_columns() {
        // Columns may infer as non-string dtypes; items are compared as text
        let column = column.cast(&DataType::Utf8)?;
        let values = column.utf8()?;

        for (row, value) in values.into_iter().enumerate() {
            if let Some(item) = value {
                let item = item.trim();
                if !item.is_empty() {
                    transactions[row].insert(item.to_string());
                }
            }
        }
    }

    Ok(BasketData { transactions })
}
