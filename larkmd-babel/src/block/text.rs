//! Text payload structures shared by most block variants.
//!
//! A block's textual content is an ordered sequence of runs, each run
//! carrying its own independent style flags. Flags compose orthogonally:
//! a run may be bold, linked, and colored at the same time. Block-level
//! knobs (code language, todo done state, heading sequence mode) live on
//! the container's [`TextStyle`], not on the runs.

use serde::{Deserialize, Serialize};

/// Ordered run container attached to text-bearing blocks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub style: Option<TextStyle>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub elements: Vec<TextElement>,
}

/// One entry in a [`Text`] container.
///
/// The vendor schema allows several element kinds (mentions, reminders,
/// inline files); only text runs survive conversion, so only text runs are
/// modeled. An element without a run contributes nothing.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_run: Option<TextRun>,
}

/// An atomic span of text with its own style flags.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextRun {
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_element_style: Option<TextElementStyle>,
}

/// Per-run style flags. All flags are independent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextElementStyle {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bold: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub italic: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub strikethrough: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub inline_code: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<Link>,
    /// Font color palette index; 0 means unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text_color: Option<i32>,
    /// Background color palette index; 0 means unset.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub background_color: Option<i32>,
}

/// Hyperlink target for a linked run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

/// Block-level style knobs carried by the [`Text`] container.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Code block language code (see [`crate::lang`]).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<i32>,
    /// Todo done flag.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub done: Option<bool>,
    /// Heading numbering mode: `"auto"` for counter-driven numbering, any
    /// other non-empty value is an explicit literal.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sequence: Option<String>,
}

impl Text {
    /// A container holding a single unstyled run.
    pub fn from_plain(content: impl Into<String>) -> Self {
        Text {
            style: None,
            elements: vec![TextElement {
                text_run: Some(TextRun {
                    content: content.into(),
                    text_element_style: None,
                }),
            }],
        }
    }

    /// A container holding the given runs, no block-level style.
    pub fn from_elements(elements: Vec<TextElement>) -> Self {
        Text {
            style: None,
            elements,
        }
    }

    /// Concatenated run contents, styles ignored.
    pub fn plain_content(&self) -> String {
        let mut out = String::new();
        for element in &self.elements {
            if let Some(run) = &element.text_run {
                out.push_str(&run.content);
            }
        }
        out
    }

    /// The heading sequence mode, if set and non-empty.
    pub fn sequence(&self) -> Option<&str> {
        self.style
            .as_ref()
            .and_then(|s| s.sequence.as_deref())
            .filter(|s| !s.is_empty())
    }

    /// The code language code, if set.
    pub fn language(&self) -> Option<i32> {
        self.style.as_ref().and_then(|s| s.language)
    }

    /// The todo done flag; absent means not done.
    pub fn done(&self) -> bool {
        self.style
            .as_ref()
            .and_then(|s| s.done)
            .unwrap_or(false)
    }
}

impl TextElement {
    /// An element wrapping a plain, unstyled run.
    pub fn plain(content: impl Into<String>) -> Self {
        TextElement {
            text_run: Some(TextRun {
                content: content.into(),
                text_element_style: None,
            }),
        }
    }

    /// An element wrapping a styled run.
    pub fn styled(content: impl Into<String>, style: TextElementStyle) -> Self {
        TextElement {
            text_run: Some(TextRun {
                content: content.into(),
                text_element_style: Some(style),
            }),
        }
    }
}
