//! Property tests for asset identifiers and header rendering.

use proptest::prelude::*;

use fwkit::domain::entities::EmbeddedAsset;
use fwkit::domain::services::HeaderRenderer;
use fwkit::domain::value_objects::{AssetIdentifier, HeaderDialect};

fn is_c_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c == '_' || c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    chars.all(|c| c == '_' || c.is_ascii_alphanumeric())
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: any file name maps to a valid C identifier.
    #[test]
    fn property_identifier_is_valid_c(name in "(?s).{0,48}") {
        let ident = AssetIdentifier::from_filename(&name);
        prop_assert!(is_c_identifier(ident.as_str()), "{:?} -> {:?}", name, ident.as_str());
    }

    /// PROPERTY: the same asset always renders byte-identical headers.
    #[test]
    fn property_headers_are_reproducible(
        body in proptest::collection::vec(any::<u8>(), 0..512),
        idf in any::<bool>(),
    ) {
        let renderer = HeaderRenderer::new(HeaderDialect::from_idf_flag(idf));
        let a = EmbeddedAsset::compress("index.html", &body).unwrap();
        let b = EmbeddedAsset::compress("index.html", &body).unwrap();

        let first = renderer.render_asset(&a);
        let second = renderer.render_asset(&b);

        prop_assert_eq!(a.data(), b.data());
        prop_assert_eq!(first.content(), second.content());
    }
}
