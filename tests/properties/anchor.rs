//! Properties of anchor-relative destination paths.

use std::path::{Path, PathBuf};

use proptest::prelude::*;

use rulesnap::domain::services::{anchor_relative, AnchoredPath};

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9._-]{1,12}")
        .unwrap()
        .prop_filter("not a dot segment", |s| s != "." && s != "..")
}

fn segments(max: usize) -> impl Strategy<Value = Vec<String>> {
    proptest::collection::vec(segment(), 0..=max)
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: anchor computation never panics on arbitrary input.
    #[test]
    fn property_anchor_never_panics(path in "(?s).{0,200}", anchor in "(?s).{0,20}") {
        let _ = anchor_relative(Path::new(&path), &anchor);
    }

    /// PROPERTY: with the anchor present and something after it, the result
    /// is exactly the components after the first anchor.
    #[test]
    fn property_anchor_keeps_suffix(
        prefix in segments(4),
        suffix in proptest::collection::vec(segment(), 1..=4),
    ) {
        prop_assume!(!prefix.iter().any(|s| s.eq_ignore_ascii_case("policy")));

        let anchor = "policy".to_string();
        let mut path = PathBuf::from("/");
        for part in prefix.iter().chain(std::iter::once(&anchor)).chain(suffix.iter()) {
            path.push(part);
        }

        let result = anchor_relative(&path, "policy");
        prop_assert_eq!(result, AnchoredPath::Anchored(suffix.join("/")));
    }

    /// PROPERTY: without the anchor the file name is used.
    #[test]
    fn property_missing_anchor_falls_back_to_file_name(parts in proptest::collection::vec(segment(), 1..=6)) {
        prop_assume!(!parts.iter().any(|s| s.eq_ignore_ascii_case("policy")));

        let path: PathBuf = std::iter::once("/".to_string()).chain(parts.iter().cloned()).collect();
        let result = anchor_relative(&path, "policy");

        prop_assert!(result.is_fallback());
        prop_assert_eq!(result.as_str(), parts.last().unwrap().as_str());
    }
}

#[test]
fn zeek_policy_script_keeps_protocol_subdirectories() {
    let path = Path::new("/opt/zeek/share/zeek/policy/protocols/ssh/detect-bruteforcing.zeek");
    assert_eq!(
        anchor_relative(path, "policy").as_str(),
        "protocols/ssh/detect-bruteforcing.zeek"
    );
}
