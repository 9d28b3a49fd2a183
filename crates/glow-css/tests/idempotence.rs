// ABOUTME: Property test: synchronizing a stylesheet twice yields identical text
// ABOUTME: Surrounding text and stale region content are generated arbitrarily

use glow_css::{Markers, StylesheetSync};
use glow_tokens::DesignSystem;
use proptest::prelude::*;

fn filler() -> impl Strategy<Value = String> {
    "[a-z0-9 \n{}-]{0,40}"
}

proptest! {
    #[test]
    fn sync_is_idempotent(
        head in filler(),
        stale_light in filler(),
        between in filler(),
        stale_dark in filler(),
        tail in filler(),
    ) {
        let css = format!(
            "{head}color-scheme: light;{stale_light}/* Sidebar */{between}\
             color-scheme: dark;{stale_dark}/* Sidebar */{tail}"
        );

        let markers = Markers::default();
        let sync = StylesheetSync::new(DesignSystem::builtin(), &markers);

        let first = sync.sync_text(&css);
        prop_assert_eq!(&first.report.replaced, &vec!["light".to_string(), "dark".to_string()]);

        let second = sync.sync_text(&first.text);
        prop_assert_eq!(&second.text, &first.text);
        prop_assert!(!second.report.changed);

        prop_assert!(first.text.starts_with(&head));
        prop_assert!(first.text.ends_with(&tail));
    }
}
