//! Association rule derivation from mined frequent itemsets

use crate::data::Transaction;
use crate::miner::{format_itemset, FrequentItemsets, Itemset};
use itertools::Itertools;
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// A directional association rule between two disjoint itemsets
#[derive(Debug, Clone, PartialEq)]
pub struct Rule {
    /// Left-hand side; non-empty
    pub antecedent: Itemset,
    /// Right-hand side; non-empty and disjoint from the antecedent
    pub consequent: Itemset,
    /// Support of antecedent and consequent together
    pub support: f64,
    /// support(antecedent u consequent) / support(antecedent)
    pub confidence: f64,
    /// Ratio of observed to expected co-occurrence under independence
    pub lift: f64,
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} => {{{}}}",
            format_itemset(&self.antecedent),
            format_itemset(&self.consequent)
        )
    }
}

/// Derive association rules from the frequent itemsets
///
/// Every frequent itemset of size >= 2 is split into every non-empty
/// antecedent and its complementary consequent, in deterministic order
/// (ascending antecedent size, lexicographic within a size). Each unordered
/// {antecedent, consequent} pair yields at most one rule: once a direction is
/// emitted the reverse is skipped, while a direction that fails the
/// confidence test leaves the reverse free to qualify on its own.
///
/// Splits whose antecedent or consequent is missing from the mapping are
/// skipped silently; the anti-monotonicity of support means this does not
/// happen for miner-produced input.
///
/// # Arguments
/// * `itemsets` - Mapping produced by the miner
/// * `min_confidence` - Inclusive confidence threshold in [0, 1]
///
/// # Returns
/// * Qualifying rules in no particular order
pub fn generate_rules(itemsets: &FrequentItemsets, min_confidence: f64) -> Vec<Rule> {
    let mut rules = Vec::new();
    let mut seen_pairs: HashSet<BTreeSet<Itemset>> = HashSet::new();

    for (itemset, support) in itemsets.iter() {
        if itemset.len() < 2 {
            continue;
        }

        for size in 1..itemset.len() {
            for combination in itemset.iter().combinations(size) {
                let antecedent: Itemset = combination.into_iter().cloned().collect();
                let consequent: Itemset = itemset.difference(&antecedent).cloned().collect();

                let pair: BTreeSet<Itemset> =
                    [antecedent.clone(), consequent.clone()].into_iter().collect();
                if seen_pairs.contains(&pair) {
                    continue;
                }

                let Some(antecedent_support) = itemsets.support_of(&antecedent) else {
                    continue;
                };
                let Some(consequent_support) = itemsets.support_of(&consequent) else {
                    continue;
                };

                let confidence = support / antecedent_support;
                let lift = support / (antecedent_support * consequent_support);

                if confidence >= min_confidence {
                    rules.push(Rule {
                        antecedent,
                        consequent,
                        support,
                        confidence,
                        lift,
                    });
                    seen_pairs.insert(pair);
                }
            }
        }
    }

    rules
}

/// The top `n` rules ranked by lift descending
pub fn top_rules_by_lift(rules: &[Rule], n: usize) -> Vec<&Rule> {
    let mut ranked: Vec<&Rule> = rules.iter().collect();
    ranked.sort_by(|a, b| {
        b.lift
            .total_cmp(&a.lift)
            .then_with(|| a.antecedent.cmp(&b.antecedent))
    });
    ranked.truncate(n);
    ranked
}

/// Suggest rules applicable to a given basket
///
/// A rule applies when its antecedent is fully contained in the basket and
/// its consequent would add at least one new item. Results are ranked by
/// lift descending.
pub fn recommend_items<'a>(rules: &'a [Rule], basket: &Transaction) -> Vec<&'a Rule> {
    let mut matching: Vec<&Rule> = rules
        .iter()
        .filter(|rule| rule.antecedent.iter().all(|item| basket.contains(item)))
        .filter(|rule| rule.consequent.iter().any(|item| !basket.contains(item)))
        .collect();

    matching.sort_by(|a, b| b.lift.total_cmp(&a.lift));
    matching
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::BasketData;
    use crate::miner::mine_frequent_itemsets;

    fn itemset(items: &[&str]) -> Itemset {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn sample_itemsets() -> FrequentItemsets {
        let data = BasketData {
            transactions: vec![
                ["A", "B"].iter().map(|s| s.to_string()).collect(),
                ["A", "B", "C"].iter().map(|s| s.to_string()).collect(),
                ["A"].iter().map(|s| s.to_string()).collect(),
                ["B", "C"].iter().map(|s| s.to_string()).collect(),
                ["A", "B", "C"].iter().map(|s| s.to_string()).collect(),
            ],
        };
        mine_frequent_itemsets(&data, 0.4).unwrap()
    }

    fn find<'a>(rules: &'a [Rule], antecedent: &Itemset, consequent: &Itemset) -> Option<&'a Rule> {
        rules
            .iter()
            .find(|r| &r.antecedent == antecedent && &r.consequent == consequent)
    }

    #[test]
    fn test_generate_rules_confidence_and_lift() {
        let itemsets = sample_itemsets();
        let rules = generate_rules(&itemsets, 0.5);

        // {A} => {B}: confidence 0.6 / 0.8 = 0.75, lift 0.6 / (0.8 * 0.8)
        let rule = find(&rules, &itemset(&["A"]), &itemset(&["B"])).unwrap();
        assert!((rule.support - 0.6).abs() < 1e-10);
        assert!((rule.confidence - 0.75).abs() < 1e-10);
        assert!((rule.lift - 0.9375).abs() < 1e-10);

        // {C} => {A, B}: confidence 0.4 / 0.6, first qualifying direction of
        // the pair since one-item antecedents are enumerated first
        let rule = find(&rules, &itemset(&["C"]), &itemset(&["A", "B"])).unwrap();
        assert!((rule.confidence - 0.4 / 0.6).abs() < 1e-10);
    }

    #[test]
    fn test_rule_validity() {
        let itemsets = sample_itemsets();
        let rules = generate_rules(&itemsets, 0.5);

        assert!(!rules.is_empty());

        for rule in &rules {
            assert!(!rule.antecedent.is_empty());
            assert!(!rule.consequent.is_empty());
            assert!(rule.antecedent.is_disjoint(&rule.consequent));

            let union: Itemset = rule.antecedent.union(&rule.consequent).cloned().collect();
            let union_support = itemsets.support_of(&union).unwrap();
            let antecedent_support = itemsets.support_of(&rule.antecedent).unwrap();

            assert!((rule.support - union_support).abs() < 1e-10);
            assert!((rule.confidence - union_support / antecedent_support).abs() < 1e-10);
            assert!(rule.confidence >= 0.5);
        }
    }

    #[test]
    fn test_no_symmetric_duplicates() {
        let itemsets = sample_itemsets();
        let rules = generate_rules(&itemsets, 0.0);

        let mut pairs: HashSet<BTreeSet<Itemset>> = HashSet::new();
        for rule in &rules {
            let pair: BTreeSet<Itemset> = [rule.antecedent.clone(), rule.consequent.clone()]
                .into_iter()
                .collect();
            assert!(pairs.insert(pair), "duplicate pair for rule {}", rule);
        }
    }

    #[test]
    fn test_reverse_direction_evaluated_when_first_fails() {
        // {X}: 0.9, {Y}: 0.3, {X,Y}: 0.3
        // X => Y has confidence 1/3 and fails at 0.5; Y => X has confidence
        // 1.0 and must still be emitted
        let itemsets: FrequentItemsets = [
            (itemset(&["X"]), 0.9),
            (itemset(&["Y"]), 0.3),
            (itemset(&["X", "Y"]), 0.3),
        ]
        .into_iter()
        .collect();

        let rules = generate_rules(&itemsets, 0.5);

        assert_eq!(rules.len(), 1);
        assert_eq!(rules[0].antecedent, itemset(&["Y"]));
        assert_eq!(rules[0].consequent, itemset(&["X"]));
        assert!((rules[0].confidence - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_missing_subset_skipped_silently() {
        // {Y} is absent from the mapping, so no split of {X,Y} can price its
        // consequent or antecedent; the generator must skip, not fail
        let itemsets: FrequentItemsets =
            [(itemset(&["X"]), 0.6), (itemset(&["X", "Y"]), 0.5)]
                .into_iter()
                .collect();

        let rules = generate_rules(&itemsets, 0.0);
        assert!(rules.is_empty());
    }

    #[test]
    fn test_confidence_threshold_filters() {
        let itemsets = sample_itemsets();

        let rules = generate_rules(&itemsets, 1.1);
        assert!(rules.is_empty());

        let permissive = generate_rules(&itemsets, 0.0);
        let strict = generate_rules(&itemsets, 0.7);
        assert!(strict.len() < permissive.len());
        for rule in &strict {
            assert!(rule.confidence >= 0.7);
        }
    }

    #[test]
    fn test_top_rules_by_lift() {
        let itemsets = sample_itemsets();
        let rules = generate_rules(&itemsets, 0.0);

        let top = top_rules_by_lift(&rules, 3);
        assert_eq!(top.len(), 3);
        for pair in top.windows(2) {
            assert!(pair[0].lift >= pair[1].lift);
        }

        let all = top_rules_by_lift(&rules, rules.len() + 10);
        assert_eq!(all.len(), rules.len());
    }

    #[test]
    fn test_recommend_items() {
        let itemsets = sample_itemsets();
        let rules = generate_rules(&itemsets, 0.5);

        let basket: Transaction = ["A"].iter().map(|s| s.to_string()).collect();
        let suggestions = recommend_items(&rules, &basket);

        assert!(!suggestions.is_empty());
        for rule in &suggestions {
            assert!(rule.antecedent.iter().all(|item| basket.contains(item)));
            assert!(rule.consequent.iter().any(|item| !basket.contains(item)));
        }
        for pair in suggestions.windows(2) {
            assert!(pair[0].lift >= pair[1].lift);
        }

        // A basket holding every frequent item has nothing left to suggest
        let basket: Transaction = ["A", "B", "C"].iter().map(|s| s.to_string()).collect();
        assert!(recommend_items(&rules, &basket).is_empty());
    }

    #[test]
    fn test_rule_display() {
        let rule = Rule {
            antecedent: itemset(&["bread", "milk"]),
            consequent: itemset(&["butter"]),
            support: 0.4,
            confidence: 0.8,
            lift: 1.2,
        };
        assert_eq!(rule.to_string(), "{bread, milk} => {butter}");
    }
}
