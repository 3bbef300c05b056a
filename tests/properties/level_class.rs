//! Property tests for level class selection.

use proptest::prelude::*;

use xkbgen::domain::value_objects::LevelClass;
use xkbgen::XkbgenError;

proptest! {
    /// PROPERTY: the class is the smallest of 1, 2, 4, 8 levels that fits.
    #[test]
    fn property_smallest_class_that_fits(max_level in 0u32..8) {
        let class = LevelClass::for_max_level("<AD01>", max_level).unwrap();
        let levels = class.levels() as u32;

        prop_assert!(levels > max_level);
        prop_assert!(levels == 1 || levels / 2 <= max_level);
    }

    /// PROPERTY: anything past the eighth level is rejected.
    #[test]
    fn property_overflow_is_rejected(max_level in 8u32..64) {
        let err = LevelClass::for_max_level("<AD01>", max_level).unwrap_err();
        let is_overflow = matches!(err, XkbgenError::LevelOverflow { .. });
        prop_assert!(is_overflow);
    }
}
