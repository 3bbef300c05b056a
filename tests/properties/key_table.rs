//! Property tests for the canonical key table.

use proptest::prelude::*;

use xkbgen::domain::entities::{KeyEntry, KeyIndex};
use xkbgen::KeyTable;

fn physical_key() -> impl Strategy<Value = String> {
    proptest::string::string_regex("<[A-Z][A-Z0-9]{1,3}>").unwrap()
}

fn symbol() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[a-zA-Z0-9]|[A-Z][a-z_]{2,8}").unwrap()
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: merging the same entry twice changes nothing and warns never.
    #[test]
    fn property_canonicalize_is_idempotent(
        key in physical_key(),
        group in 0u32..4,
        level in 0u32..8,
        sym in symbol(),
    ) {
        let entry = KeyEntry::new(KeyIndex::new(key, group, level)).with_symbol(sym);
        let mut table = KeyTable::new();
        let first = table.canonicalize(entry.clone()).clone();
        let second = table.canonicalize(entry).clone();

        prop_assert_eq!(first, second);
        prop_assert_eq!(table.len(), 1);
        prop_assert!(table.warnings().is_empty());
    }

    /// PROPERTY: the last symbol written wins, with one warning per change.
    #[test]
    fn property_last_write_wins(
        key in physical_key(),
        symbols in proptest::collection::vec(symbol(), 1..6),
    ) {
        let mut table = KeyTable::new();
        let index = KeyIndex::new(key, 0, 1);
        for sym in &symbols {
            table.canonicalize(KeyEntry::new(index.clone()).with_symbol(sym.as_str()));
        }

        let changes = symbols.windows(2).filter(|w| w[0] != w[1]).count();
        prop_assert_eq!(table.warnings().len(), changes);
        let stored = table.get(&index).unwrap();
        prop_assert_eq!(stored.symbol.as_deref(), symbols.last().map(String::as_str));
    }

    /// PROPERTY: a base-layer symbol always points back at its key.
    #[test]
    fn property_base_layer_lookup(key in physical_key(), sym in symbol()) {
        let mut table = KeyTable::new();
        table.canonicalize(KeyEntry::new(KeyIndex::new(key.as_str(), 0, 0)).with_symbol(sym.as_str()));

        prop_assert_eq!(table.base_key_for(&sym), Some(key.as_str()));
    }
}
