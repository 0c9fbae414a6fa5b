//! Property tests for the platformio.ini reader.

use proptest::prelude::*;

use fwkit::infrastructure::IniDocument;

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: the ini reader never panics and finds simple keys.
    #[test]
    fn property_ini_reads_simple_keys(
        text in "(?s).{0,256}",
        key in "[a-z_]{1,12}",
        value in "[A-Za-z0-9.]{1,12}",
    ) {
        let _ = IniDocument::parse(&text);

        let doc = IniDocument::parse(&format!("[env:dev]\n{} = {}\n", key, value));
        prop_assert_eq!(doc.env_value("dev", &key), Some(value.as_str()));
    }
}
