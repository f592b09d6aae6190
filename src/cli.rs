//! Command-line interface definitions and argument parsing

use clap::Parser;

/// Market basket analysis CLI using Apriori association rule mining
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Path to the input CSV file (one transaction per row, one item per column)
    #[arg(short, long, default_value = "transactions.csv")]
    pub input: String,

    /// Minimum support threshold in (0, 1]
    #[arg(short = 's', long, default_value = "0.01")]
    pub min_support: f64,

    /// Minimum confidence threshold in [0, 1]
    #[arg(short = 'c', long, default_value = "0.2")]
    pub min_confidence: f64,

    /// Number of top frequent itemsets to display
    #[arg(long, default_value = "5")]
    pub top_items: usize,

    /// Number of top rules (by lift) to display
    #[arg(long, default_value = "10")]
    pub top_rules: usize,

    /// Output path for the support chart
    #[arg(short, long, default_value = "support_plot.png")]
    pub output: String,

    /// Recommendation mode: provide basket contents as a comma-separated string
    /// Example: --basket "milk,bread" to get suggestions for a basket holding milk and bread
    #[arg(short, long)]
    pub basket: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

impl Args {
    /// Validate threshold arguments before running the pipeline
    ///
    /// `min_support` must lie in (0, 1] and `min_confidence` in [0, 1].
    pub fn validate(&self) -> crate::Result<()> {
        if self.min_support <= 0.0 || self.min_support > 1.0 {
            anyhow::bail!(
                "Minimum support must be in (0, 1], got {}",
                self.min_support
            );
        }

        if !(0.0..=1.0).contains(&self.min_confidence) {
            anyhow::bail!(
                "Minimum confidence must be in [0, 1], got {}",
                self.min_confidence
            );
        }

        Ok(())
    }

    /// Parse basket items from the basket string
    /// Expected format: "item1,item2,..."
    pub fn parse_basket_items(&self) -> crate::Result<Option<Vec<String>>> {
        if let Some(ref basket_str) = self.basket {
            let mut items = Vec::new();
            for part in basket_str.split(',') {
                let item = part.trim();
                if item.is_empty() {
                    anyhow::bail!("Basket contains an empty item: '{}'", basket_str);
                }
                items.push(item.to_string());
            }

            if items.is_empty() {
                anyhow::bail!("Basket must contain at least one item");
            }

            Ok(Some(items))
        } else {
            Ok(None)
        }
    }
}
