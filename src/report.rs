//! Plain-text console tables.
//!
//! Tab-separated tables for transactions, itemset levels and rules.
//! Percentages print as the rounded value followed by `" %"`.

use crate::apriori::{AssociationRule, ItemSetTable, TransactionSet};
use std::fmt::Write;

const RULE: &str = "------------------------------------------------------";

/// Lists transactions with their zero-based index.
pub fn transactions_table(transactions: &TransactionSet) -> String {
    let mut out = String::new();
    if transactions.is_empty() {
        return out;
    }
    out.push_str("Transactions\n");
    out.push_str("Index\t\tItems\n");
    out.push_str(RULE);
    out.push('\n');
    for (i, t) in transactions.iter().enumerate() {
        let _ = writeln!(out, "{i}\t\t{}", t.line());
    }
    out.push('\n');
    out
}

/// Lists one level's itemsets and their counts.
pub fn item_set_table(table: &ItemSetTable) -> String {
    let mut out = String::new();
    if table.is_empty() {
        return out;
    }
    let _ = writeln!(out, "{}", table.label);
    out.push_str("Item Set\t\tCount\n");
    out.push_str(RULE);
    out.push('\n');
    for (itemset, count) in &table.entries {
        let _ = writeln!(out, "{itemset}\t\t{count}");
    }
    out.push('\n');
    out
}

/// Lists rules with confidence and support percentages.
pub fn rules_table(rules: &[AssociationRule]) -> String {
    let mut out = String::new();
    if rules.is_empty() {
        return out;
    }
    out.push_str("Rule\t\tConfidence\t\tSupport\n");
    out.push_str(RULE);
    out.push('\n');
    for rule in rules {
        let _ = writeln!(
            out,
            "{rule}\t\t{}\t\t{}",
            percent(rule.confidence),
            percent(rule.support)
        );
    }
    out.push('\n');
    out
}

/// `66.67` → `"66.67 %"`, `50.0` → `"50 %"`.
pub fn percent(value: f64) -> String {
    format!("{value} %")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apriori::{ItemSetKind, Itemset};

    #[test]
    fn test_percent() {
        assert_eq!(percent(66.67), "66.67 %");
        assert_eq!(percent(50.0), "50 %");
    }

    #[test]
    fn test_item_set_table() {
        let mut table = ItemSetTable::new(2, 2, ItemSetKind::Frequent);
        table.entries.push((Itemset::new(["a", "b"]), 2));
        let out = item_set_table(&table);
        assert!(out.starts_with("L2\nItem Set\t\tCount\n"));
        assert!(out.contains("a, b\t\t2\n"));
    }

    #[test]
    fn test_rules_table() {
        let rules = vec![AssociationRule {
            antecedent: Itemset::new(["a"]),
            consequent: Itemset::new(["b"]),
            confidence: 66.67,
            support: 50.0,
        }];
        let out = rules_table(&rules);
        assert!(out.contains("a => b\t\t66.67 %\t\t50 %\n"));
    }

    #[test]
    fn test_empty_inputs_render_nothing() {
        assert!(rules_table(&[]).is_empty());
        assert!(transactions_table(&TransactionSet::default()).is_empty());
        let table = ItemSetTable::new(1, 2, ItemSetKind::Frequent);
        assert!(item_set_table(&table).is_empty());
    }

    #[test]
    fn test_transactions_table() {
        let set = TransactionSet::from_text("a b\nc");
        let out = transactions_table(&set);
        assert!(out.contains("0\t\ta b\n"));
        assert!(out.contains("1\t\tc\n"));
    }
}
