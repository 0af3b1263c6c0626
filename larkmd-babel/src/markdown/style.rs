//! Inline run styling.
//!
//! Composes a run's orthogonal style flags into Markdown markup, innermost
//! first: inline code, strikethrough, italic, bold, link. When highlighting
//! is enabled and the run carries a non-zero color index, the fully
//! composed markup is wrapped in an HTML span with the palette-resolved
//! declarations.

use crate::block::{TextElement, TextElementStyle};
use crate::options::ConvertOptions;
use crate::palette;

/// Render a run's content with its style flags applied.
pub fn render_run(content: &str, style: Option<&TextElementStyle>, options: &ConvertOptions) -> String {
    let style = match style {
        Some(style) => style,
        None => return content.to_string(),
    };

    let mut out = content.to_string();
    if style.inline_code.unwrap_or(false) {
        out = format!("`{out}`");
    }
    if style.strikethrough.unwrap_or(false) {
        out = format!("~~{out}~~");
    }
    if style.italic.unwrap_or(false) {
        out = format!("*{out}*");
    }
    if style.bold.unwrap_or(false) {
        out = format!("**{out}**");
    }
    if let Some(link) = &style.link {
        out = format!("[{out}]({})", link.url);
    }
    if options.highlight {
        if let Some(span) = span_style(style) {
            out = format!(r#"<span style="{span}">{out}</span>"#);
        }
    }
    out
}

/// Render an ordered element sequence, concatenating styled runs.
pub fn render_elements(elements: &[TextElement], options: &ConvertOptions) -> String {
    let mut out = String::new();
    for element in elements {
        if let Some(run) = &element.text_run {
            out.push_str(&render_run(
                &run.content,
                run.text_element_style.as_ref(),
                options,
            ));
        }
    }
    out
}

/// The span `style` attribute for a run's colors, if any color resolves.
fn span_style(style: &TextElementStyle) -> Option<String> {
    let font = style
        .text_color
        .and_then(palette::font_color_hex)
        .map(|hex| format!("color: {hex}"));
    let background = style
        .background_color
        .and_then(palette::background_color_hex)
        .map(|hex| format!("background-color: {hex}"));

    match (font, background) {
        (Some(f), Some(b)) => Some(format!("{f}; {b}")),
        (Some(f), None) => Some(f),
        (None, Some(b)) => Some(b),
        (None, None) => None,
    }
}
