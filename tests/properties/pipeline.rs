//! Property tests for whole-document compilation.

use proptest::prelude::*;

use xkbgen::KeymapPipeline;

const HEADER: &str = "\
MODIFIERS:
  shift:
    mod: Shift
    keycodes: <LFSH>
    keysyms: Shift_L
";

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 64,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: compilation never panics on arbitrary small documents.
    #[test]
    fn property_compile_never_panics(yaml in "(?s).{0,256}") {
        let _ = KeymapPipeline::default().compile_str(&yaml);
    }

    /// PROPERTY: a case pair lands on levels 1 and 2 of a TWO_LEVEL key.
    #[test]
    fn property_case_pair_renders_both_levels(
        lower in proptest::char::range('a', 'z'),
        upper in proptest::char::range('A', 'Z'),
    ) {
        let yaml = format!("{HEADER}BASE:\n  <AC01>: {lower}{upper}\n");
        let keymap = KeymapPipeline::default().compile_str(&yaml).unwrap().keymap;

        let expected = format!(
            "type = \"TWO_LEVEL\",\n      symbols[Group1] = [\n        U{:04X}, //",
            lower as u32
        );
        prop_assert!(keymap.contains(&expected), "{}", keymap);
        let second = format!("U{:04X} // ", upper as u32);
        prop_assert!(keymap.contains(&second), "{}", keymap);
    }
}
