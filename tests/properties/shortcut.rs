//! Property tests for shortcut parsing.

use proptest::prelude::*;

use xkbgen::domain::services::ShortcutExpr;
use xkbgen::KeyToken;

fn modifier_name() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z][A-Za-z0-9_]{1,8}").unwrap()
}

proptest! {
    /// PROPERTY: parsing never panics on arbitrary input.
    #[test]
    fn property_parse_never_panics(text in "(?s).{0,64}") {
        let _ = ShortcutExpr::parse(&text);
    }

    /// PROPERTY: `m1+...+<KEY>` yields the lowercased names and the key.
    #[test]
    fn property_modifiers_then_physical_key(
        names in proptest::collection::vec(modifier_name(), 0..4),
        key in proptest::string::string_regex("<[A-Z0-9]{2,4}>").unwrap(),
    ) {
        let mut text = names.join(" + ");
        if !text.is_empty() {
            text.push('+');
        }
        text.push_str(&key);

        let expr = ShortcutExpr::parse(&text).unwrap();
        let expected: Vec<String> = names.iter().map(|n| n.to_lowercase()).collect();
        prop_assert_eq!(expr.modifiers, expected);
        prop_assert_eq!(expr.key, Some(KeyToken::Physical(key)));
    }
}
