//! Property tests for inline style composition.

use larkmd_babel::block::{Link, TextElementStyle};
use larkmd_babel::markdown::style::render_run;
use larkmd_babel::ConvertOptions;
use proptest::prelude::*;

proptest! {
    /// Any combination of flags keeps the content intact, emits spans only
    /// under the highlight option with a resolvable color, and keeps span
    /// tags balanced.
    #[test]
    fn style_composition_holds(
        content in "[a-zA-Z0-9 ]{1,16}",
        bold in any::<bool>(),
        italic in any::<bool>(),
        strikethrough in any::<bool>(),
        inline_code in any::<bool>(),
        linked in any::<bool>(),
        text_color in 0..10i32,
        background_color in 0..10i32,
        highlight in any::<bool>(),
    ) {
        let style = TextElementStyle {
            bold: bold.then_some(true),
            italic: italic.then_some(true),
            strikethrough: strikethrough.then_some(true),
            inline_code: inline_code.then_some(true),
            link: linked.then(|| Link { url: "https://example.com".to_string() }),
            text_color: Some(text_color),
            background_color: Some(background_color),
        };
        let out = render_run(&content, Some(&style), &ConvertOptions { highlight });

        prop_assert!(out.contains(content.as_str()));

        let resolvable = (1..=7).contains(&text_color) || (1..=7).contains(&background_color);
        prop_assert_eq!(out.contains("<span"), highlight && resolvable);
        prop_assert_eq!(out.matches("<span").count(), out.matches("</span>").count());

        if bold {
            prop_assert!(out.contains("**"));
        }
        if linked {
            prop_assert!(out.contains("](https://example.com)"));
        }
    }
}
