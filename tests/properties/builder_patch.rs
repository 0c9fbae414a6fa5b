//! Property tests for the LittleFS builder patch.

use proptest::prelude::*;

use fwkit::domain::services::{patch_builder_source, PatchOutcome};

const NEEDLE: &str = r#"p["subtype"] in ("spiffs", "fat", "littlefs")"#;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: applying the builder patch to its own output changes nothing.
    #[test]
    fn property_builder_patch_is_idempotent(
        before in "[a-z \n=()]{0,64}",
        after in "[a-z \n=()]{0,64}",
    ) {
        let source = format!("{}{}{}", before, NEEDLE, after);

        let patched = match patch_builder_source(&source) {
            PatchOutcome::Patched(text) => text,
            other => return Err(TestCaseError::fail(format!("expected a patch, got {:?}", other))),
        };
        prop_assert_eq!(patch_builder_source(&patched), PatchOutcome::AlreadyApplied);
        prop_assert!(patched.starts_with(&before));
        prop_assert!(patched.ends_with(&after));
    }
}
