//! Frequent itemset mining via the level-wise Apriori algorithm

use crate::data::{BasketData, Transaction};
use itertools::Itertools;
use std::collections::{BTreeSet, HashMap, HashSet};

/// An unordered set of distinct item identifiers, kept in canonical sorted
/// order so equal itemsets hash and compare equally regardless of insertion
/// order
pub type Itemset = BTreeSet<String>;

/// Mapping from every frequent itemset (across all levels) to its support
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemsets {
    support: HashMap<Itemset, f64>,
}

impl FrequentItemsets {
    /// Support of the given itemset, if it is frequent
    pub fn support_of(&self, itemset: &Itemset) -> Option<f64> {
        self.support.get(itemset).copied()
    }

    /// Number of frequent itemsets found
    pub fn len(&self) -> usize {
        self.support.len()
    }

    pub fn is_empty(&self) -> bool {
        self.support.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset, f64)> {
        self.support.iter().map(|(itemset, &support)| (itemset, support))
    }

    /// All entries sorted by support descending, ties broken by itemset order
    /// for stable display
    pub fn sorted_by_support(&self) -> Vec<(&Itemset, f64)> {
        let mut entries: Vec<(&Itemset, f64)> = self.iter().collect();
        entries.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        entries
    }
}

impl FromIterator<(Itemset, f64)> for FrequentItemsets {
    fn from_iter<I: IntoIterator<Item = (Itemset, f64)>>(iter: I) -> Self {
        FrequentItemsets {
            support: iter.into_iter().collect(),
        }
    }
}

/// Compute the support of an itemset over a transaction collection
///
/// Support is the fraction of transactions of which the itemset is a subset.
/// Callers must ensure the transaction collection is non-empty.
pub fn calculate_support(itemset: &Itemset, transactions: &[Transaction]) -> f64 {
    let count = transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count();

    count as f64 / transactions.len() as f64
}

/// Generate size-k candidates by self-joining the previous frequent level
///
/// Two size-(k-1) itemsets union to size k only when they differ in exactly
/// one element; all other unions are discarded. The self-join is quadratic in
/// the level size; a sorted-prefix join would cut the pair count for large
/// vocabularies.
fn generate_candidates(prev_frequent: &HashSet<Itemset>, k: usize) -> HashSet<Itemset> {
    let mut candidates = HashSet::new();

    for itemset1 in prev_frequent {
        for itemset2 in prev_frequent {
            let union: Itemset = itemset1.union(itemset2).cloned().collect();
            if union.len() == k {
                candidates.insert(union);
            }
        }
    }

    candidates
}

/// Prune candidates whose (k-1)-subsets are not all frequent
///
/// The (k-1)-subsets of a size-k candidate are exactly the remove-one-element
/// subsets. A candidate with any infrequent subset cannot itself be frequent,
/// so it is dropped before its support is ever computed.
fn prune_candidates(
    candidates: HashSet<Itemset>,
    prev_frequent: &HashSet<Itemset>,
) -> Vec<Itemset> {
    candidates
        .into_iter()
        .filter(|candidate| {
            candidate.iter().all(|item| {
                let mut subset = candidate.clone();
                subset.remove(item);
                prev_frequent.contains(&subset)
            })
        })
        .collect()
}

/// Mine all frequent itemsets from the transaction data
///
/// Runs the level-wise Apriori loop: singleton supports first, then repeated
/// candidate generation, pruning, and support filtering until a level yields
/// no frequent itemsets. An empty result is a legitimate outcome (no itemset
/// met the threshold), not an error.
///
/// # Arguments
/// * `data` - Loaded transaction data; must contain at least one transaction
/// * `min_support` - Inclusive support threshold in (0, 1]
///
/// # Returns
/// * `FrequentItemsets` mapping every frequent itemset to its support
pub fn mine_frequent_itemsets(
    data: &BasketData,
    min_support: f64,
) -> crate::Result<FrequentItemsets> {
    if data.is_empty() {
        anyhow::bail!("No transactions to mine: the dataset is empty");
    }

    let transactions = &data.transactions;

    // Level 1: the universe of distinct items as singleton candidates
    let universe: BTreeSet<&String> = transactions.iter().flatten().collect();

    let mut support_map: HashMap<Itemset, f64> = HashMap::new();
    let mut current_level: HashSet<Itemset> = HashSet::new();

    for item in universe {
        let itemset: Itemset = [item.clone()].into_iter().collect();
        let support = calculate_support(&itemset, transactions);
        if support >= min_support {
            support_map.insert(itemset.clone(), support);
            current_level.insert(itemset);
        }
    }

    // Levels 2..: generate, prune, filter until a level comes up empty
    let mut k = 2;
    while !current_level.is_empty() {
        let candidates = generate_candidates(&current_level, k);
        let surviving = prune_candidates(candidates, &current_level);

        let mut next_level: HashSet<Itemset> = HashSet::new();
        for candidate in surviving {
            let support = calculate_support(&candidate, transactions);
            if support >= min_support {
                support_map.insert(candidate.clone(), support);
                next_level.insert(candidate);
            }
        }

        current_level = next_level;
        k += 1;
    }

    Ok(FrequentItemsets {
        support: support_map,
    })
}

/// Render an itemset as a comma-separated list of its items
pub fn format_itemset(itemset: &Itemset) -> String {
    itemset.iter().join(", ")
}
