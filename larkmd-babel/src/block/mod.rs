//! The document block model.
//!
//! Blocks mirror the vendor document schema: every block carries an opaque
//! string ID, a numeric type tag, an ordered list of child IDs, and one
//! type-keyed payload. The hierarchy is a forest rooted at a single Page
//! block; parent/child edges are expressed through `children` ID lists
//! rather than nested owning pointers, so a document is a flat `Vec<Block>`
//! plus an index (see [`collection::BlockCollection`]).

pub mod collection;
pub mod text;

pub use collection::BlockCollection;
pub use text::{Link, Text, TextElement, TextElementStyle, TextRun, TextStyle};

use serde::{Deserialize, Serialize};

/// Closed enumeration of known numeric block type tags.
///
/// Codes outside the enumeration map to [`BlockType::Unknown`] and render
/// as an HTML comment rather than failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockType {
    Page,
    Text,
    Heading1,
    Heading2,
    Heading3,
    Heading4,
    Heading5,
    Heading6,
    Heading7,
    Heading8,
    Heading9,
    Bullet,
    Ordered,
    Code,
    Quote,
    Equation,
    Todo,
    Divider,
    Image,
    Isv,
    Unknown(i32),
}

impl BlockType {
    /// Map a numeric type tag to its variant. Total: unmapped codes become
    /// [`BlockType::Unknown`].
    pub fn from_code(code: i32) -> Self {
        match code {
            1 => BlockType::Page,
            2 => BlockType::Text,
            3 => BlockType::Heading1,
            4 => BlockType::Heading2,
            5 => BlockType::Heading3,
            6 => BlockType::Heading4,
            7 => BlockType::Heading5,
            8 => BlockType::Heading6,
            9 => BlockType::Heading7,
            10 => BlockType::Heading8,
            11 => BlockType::Heading9,
            12 => BlockType::Bullet,
            13 => BlockType::Ordered,
            14 => BlockType::Code,
            15 => BlockType::Quote,
            16 => BlockType::Equation,
            17 => BlockType::Todo,
            22 => BlockType::Divider,
            27 => BlockType::Image,
            28 => BlockType::Isv,
            other => BlockType::Unknown(other),
        }
    }

    /// The numeric tag for this variant.
    pub fn code(&self) -> i32 {
        match self {
            BlockType::Page => 1,
            BlockType::Text => 2,
            BlockType::Heading1 => 3,
            BlockType::Heading2 => 4,
            BlockType::Heading3 => 5,
            BlockType::Heading4 => 6,
            BlockType::Heading5 => 7,
            BlockType::Heading6 => 8,
            BlockType::Heading7 => 9,
            BlockType::Heading8 => 10,
            BlockType::Heading9 => 11,
            BlockType::Bullet => 12,
            BlockType::Ordered => 13,
            BlockType::Code => 14,
            BlockType::Quote => 15,
            BlockType::Equation => 16,
            BlockType::Todo => 17,
            BlockType::Divider => 22,
            BlockType::Image => 27,
            BlockType::Isv => 28,
            BlockType::Unknown(code) => *code,
        }
    }

    /// Heading level 1..=9 for heading variants, `None` otherwise.
    pub fn heading_level(&self) -> Option<usize> {
        let code = self.code();
        if (3..=11).contains(&code) {
            Some((code - 2) as usize)
        } else {
            None
        }
    }
}

/// Embedded third-party component payload.
///
/// Component source content is not retrievable through the document API;
/// export dispatches on `component_type_id` to a placeholder renderer.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Isv {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_type_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub component_id: Option<String>,
}

/// Image payload. The token references an uploaded media resource.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Image {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
}

/// A node of the document tree.
///
/// Exactly one payload field matches `block_type`; the rest stay `None`.
/// A block with no `block_type` at all is tolerated and skipped on export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Block {
    pub block_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub block_type: Option<i32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading1: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading2: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading3: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading4: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading5: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading6: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading7: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading8: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub heading9: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bullet: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ordered: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub code: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub quote: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub equation: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub todo: Option<Text>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image: Option<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub isv: Option<Isv>,
}

impl Block {
    fn with_type(block_id: impl Into<String>, block_type: BlockType) -> Self {
        Block {
            block_id: block_id.into(),
            block_type: Some(block_type.code()),
            ..Block::default()
        }
    }

    /// The typed tag, if any tag is set at all.
    pub fn block_type(&self) -> Option<BlockType> {
        self.block_type.map(BlockType::from_code)
    }

    /// The text payload matching this block's type, if it has one.
    pub fn text_payload(&self) -> Option<&Text> {
        match self.block_type()? {
            BlockType::Page => self.page.as_ref(),
            BlockType::Text => self.text.as_ref(),
            BlockType::Heading1 => self.heading1.as_ref(),
            BlockType::Heading2 => self.heading2.as_ref(),
            BlockType::Heading3 => self.heading3.as_ref(),
            BlockType::Heading4 => self.heading4.as_ref(),
            BlockType::Heading5 => self.heading5.as_ref(),
            BlockType::Heading6 => self.heading6.as_ref(),
            BlockType::Heading7 => self.heading7.as_ref(),
            BlockType::Heading8 => self.heading8.as_ref(),
            BlockType::Heading9 => self.heading9.as_ref(),
            BlockType::Bullet => self.bullet.as_ref(),
            BlockType::Ordered => self.ordered.as_ref(),
            BlockType::Code => self.code.as_ref(),
            BlockType::Quote => self.quote.as_ref(),
            BlockType::Equation => self.equation.as_ref(),
            BlockType::Todo => self.todo.as_ref(),
            BlockType::Divider | BlockType::Image | BlockType::Isv | BlockType::Unknown(_) => None,
        }
    }

    /// A synthetic page root with no children yet.
    pub fn page(block_id: impl Into<String>) -> Self {
        Block::with_type(block_id, BlockType::Page)
    }

    /// A paragraph block from run elements.
    pub fn text(block_id: impl Into<String>, elements: Vec<TextElement>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Text);
        block.text = Some(Text::from_elements(elements));
        block
    }

    /// A heading block. Levels outside 1..=9 are clamped.
    pub fn heading(block_id: impl Into<String>, level: usize, payload: Text) -> Self {
        let level = level.clamp(1, 9);
        let block_type = BlockType::from_code(2 + level as i32);
        let mut block = Block::with_type(block_id, block_type);
        match level {
            1 => block.heading1 = Some(payload),
            2 => block.heading2 = Some(payload),
            3 => block.heading3 = Some(payload),
            4 => block.heading4 = Some(payload),
            5 => block.heading5 = Some(payload),
            6 => block.heading6 = Some(payload),
            7 => block.heading7 = Some(payload),
            8 => block.heading8 = Some(payload),
            _ => block.heading9 = Some(payload),
        }
        block
    }

    /// An unordered list item block.
    pub fn bullet(block_id: impl Into<String>, elements: Vec<TextElement>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Bullet);
        block.bullet = Some(Text::from_elements(elements));
        block
    }

    /// An ordered list item block.
    pub fn ordered(block_id: impl Into<String>, elements: Vec<TextElement>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Ordered);
        block.ordered = Some(Text::from_elements(elements));
        block
    }

    /// A fenced code block with a numeric language code.
    pub fn code(block_id: impl Into<String>, language: i32, content: impl Into<String>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Code);
        block.code = Some(Text {
            style: Some(TextStyle {
                language: Some(language),
                ..TextStyle::default()
            }),
            elements: vec![TextElement::plain(content)],
        });
        block
    }

    /// A quote block.
    pub fn quote(block_id: impl Into<String>, elements: Vec<TextElement>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Quote);
        block.quote = Some(Text::from_elements(elements));
        block
    }

    /// A todo block with its done flag.
    pub fn todo(block_id: impl Into<String>, elements: Vec<TextElement>, done: bool) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Todo);
        block.todo = Some(Text {
            style: Some(TextStyle {
                done: Some(done),
                ..TextStyle::default()
            }),
            elements,
        });
        block
    }

    /// A divider block. No payload.
    pub fn divider(block_id: impl Into<String>) -> Self {
        Block::with_type(block_id, BlockType::Divider)
    }

    /// A display equation block.
    pub fn equation(block_id: impl Into<String>, formula: impl Into<String>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Equation);
        block.equation = Some(Text::from_plain(formula));
        block
    }

    /// An image block referencing an uploaded media token.
    pub fn image(block_id: impl Into<String>, token: impl Into<String>) -> Self {
        let mut block = Block::with_type(block_id, BlockType::Image);
        block.image = Some(Image {
            token: Some(token.into()),
        });
        block
    }
}
