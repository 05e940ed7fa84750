//! Property-based tests for the page helpers

use proptest::prelude::*;

use pcb_inspect::backend::pages::{encode_query_value, escape_html, safe_callback};

proptest! {
    #[test]
    fn test_escaped_html_has_no_markup(input in ".*") {
        let escaped = escape_html(&input);
        prop_assert!(!escaped.contains('<'));
        prop_assert!(!escaped.contains('>'));
        prop_assert!(!escaped.contains('"'));
    }

    #[test]
    fn test_encoded_value_is_unreserved(input in ".*") {
        let encoded = encode_query_value(&input);
        prop_assert!(encoded
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || "-_.~%".contains(c)));
    }

    #[test]
    fn test_callback_never_leaves_site(input in ".*") {
        let target = safe_callback(Some(&input));
        prop_assert!(target.starts_with('/'));
        prop_assert!(!target.starts_with("//"));
    }
}
