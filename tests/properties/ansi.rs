//! Property tests for ANSI to HTML conversion.

use proptest::prelude::*;

use logview::{ansi_to_html, AnsiConverter};

fn sgr_params() -> impl Strategy<Value = String> {
    proptest::collection::vec(0u8..110, 1..=4).prop_map(|codes| {
        codes
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>()
            .join(";")
    })
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: conversion never panics on arbitrary input.
    #[test]
    fn property_convert_never_panics(text in "(?s).{0,256}") {
        let _ = ansi_to_html(&text);
        let _ = AnsiConverter::new().with_html_escaping(true).convert(&text);
    }

    /// PROPERTY: text without escape introducers passes through unchanged.
    #[test]
    fn property_plain_text_is_identity(text in "[^\\x1b\\\\]{0,200}") {
        prop_assert_eq!(ansi_to_html(&text), text);
    }

    /// PROPERTY: with escaping on, plain text never yields raw markup.
    #[test]
    fn property_escaped_plain_text_has_no_tags(text in "[^\\x1b\\\\]{0,200}") {
        let html = AnsiConverter::new().with_html_escaping(true).convert(&text);
        prop_assert!(!html.contains('<'));
        prop_assert!(!html.contains('>'));
    }

    /// PROPERTY: every non-zero-led sequence opens exactly one span and
    /// every reset closes one, leaving the surrounding text intact.
    #[test]
    fn property_one_span_per_sequence(
        params in sgr_params(),
        body in "[a-z ]{0,40}",
    ) {
        let input = format!("\u{1b}[{params}m{body}\u{1b}[0m");
        let html = ansi_to_html(&input);
        if params.starts_with('0') {
            prop_assert!(!html.contains("<span"));
        } else {
            prop_assert!(html.starts_with("<span style=\""));
            prop_assert_eq!(html.matches("<span").count(), 1);
            let expected_tail = format!("{body}</span>");
            prop_assert!(html.ends_with(&expected_tail));
        }
    }
}
