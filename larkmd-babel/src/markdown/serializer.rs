//! Markdown serialization (blocks → Markdown export)
//!
//! Walks the block tree in document order and emits Markdown text. The
//! target forms are exact (fence layout, todo markers, placeholder
//! comments), so fragments are built by hand rather than through a Markdown
//! AST, one fragment per block, joined at the end.
//!
//! Export never fails on malformed input: blocks without a type tag are
//! skipped, unknown type tags become HTML comments, dangling child IDs are
//! ignored, and a revisited ID renders once.

use std::collections::HashSet;

use crate::block::{Block, BlockCollection, BlockType};
use crate::error::ConvertError;
use crate::lang::language_code_to_name;
use crate::markdown::isv::ComponentRegistry;
use crate::markdown::sequence::HeadingSequence;
use crate::markdown::style;
use crate::options::ConvertOptions;

/// List flavor of a fragment, used for tight joining of consecutive items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Bullet,
    Ordered,
    Todo,
}

/// One rendered block plus the joining information it carries.
struct Fragment {
    text: String,
    list: Option<ListKind>,
}

/// Converter from a block collection to Markdown text.
pub struct BlockToMarkdown {
    blocks: BlockCollection,
    options: ConvertOptions,
    components: ComponentRegistry,
}

impl BlockToMarkdown {
    /// Create a converter over the given blocks.
    pub fn new(blocks: Vec<Block>, options: ConvertOptions) -> Self {
        BlockToMarkdown {
            blocks: BlockCollection::new(blocks),
            options,
            components: ComponentRegistry::with_defaults(),
        }
    }

    /// Replace the embedded-component registry (additive renderers).
    pub fn with_components(mut self, components: ComponentRegistry) -> Self {
        self.components = components;
        self
    }

    /// Render the collection to Markdown.
    ///
    /// Traversal starts from the Page block's children when a Page exists;
    /// otherwise root blocks render in input order. Blocks are separated by
    /// a blank line, except consecutive list items of the same kind which
    /// join tightly. An empty result is exactly `"\n"`.
    pub fn convert(&self) -> Result<String, ConvertError> {
        let mut seq = HeadingSequence::new();
        let mut fragments = Vec::new();
        let mut visited = HashSet::new();

        if let Some(page) = self.blocks.page() {
            visited.insert(page.block_id.clone());
            self.render_children(&page.children, &mut seq, &mut fragments, &mut visited);
        }
        // Roots not reachable from the Page (or the whole collection when
        // there is no Page) render in input order.
        for block in self.blocks.roots() {
            self.render_block(block, &mut seq, &mut fragments, &mut visited);
        }

        let mut out = String::new();
        for (i, fragment) in fragments.iter().enumerate() {
            if i > 0 {
                let tight = fragment.list.is_some() && fragment.list == fragments[i - 1].list;
                out.push_str(if tight { "\n" } else { "\n\n" });
            }
            out.push_str(&fragment.text);
        }
        out.push('\n');
        Ok(out)
    }

    fn render_children(
        &self,
        children: &[String],
        seq: &mut HeadingSequence,
        fragments: &mut Vec<Fragment>,
        visited: &mut HashSet<String>,
    ) {
        for child_id in children {
            if let Some(child) = self.blocks.get(child_id) {
                self.render_block(child, seq, fragments, visited);
            }
        }
    }

    fn render_block(
        &self,
        block: &Block,
        seq: &mut HeadingSequence,
        fragments: &mut Vec<Fragment>,
        visited: &mut HashSet<String>,
    ) {
        if !visited.insert(block.block_id.clone()) {
            return;
        }

        // A block without a type tag contributes nothing, children included.
        let block_type = match block.block_type() {
            Some(block_type) => block_type,
            None => return,
        };

        let fragment = match block_type {
            BlockType::Page => None,
            BlockType::Text => Some(Fragment {
                text: self.inline(block),
                list: None,
            }),
            BlockType::Heading1
            | BlockType::Heading2
            | BlockType::Heading3
            | BlockType::Heading4
            | BlockType::Heading5
            | BlockType::Heading6
            | BlockType::Heading7
            | BlockType::Heading8
            | BlockType::Heading9 => Some(Fragment {
                text: self.heading(block, block_type, seq),
                list: None,
            }),
            BlockType::Bullet => Some(Fragment {
                text: format!("- {}", self.inline(block)),
                list: Some(ListKind::Bullet),
            }),
            // Each ordered item renders with a literal `1. ` marker; there
            // is no list-relative running counter across siblings.
            BlockType::Ordered => Some(Fragment {
                text: format!("1. {}", self.inline(block)),
                list: Some(ListKind::Ordered),
            }),
            BlockType::Code => Some(Fragment {
                text: self.code_fence(block),
                list: None,
            }),
            BlockType::Quote => Some(Fragment {
                text: format!("> {}", self.inline(block)),
                list: None,
            }),
            BlockType::Equation => {
                let formula = block
                    .text_payload()
                    .map(|t| t.plain_content())
                    .unwrap_or_default();
                Some(Fragment {
                    text: format!("$$\n{formula}\n$$"),
                    list: None,
                })
            }
            BlockType::Todo => {
                let done = block.text_payload().map(|t| t.done()).unwrap_or(false);
                let marker = if done { "- [x] " } else { "- [ ] " };
                Some(Fragment {
                    text: format!("{marker}{}", self.inline(block)),
                    list: Some(ListKind::Todo),
                })
            }
            BlockType::Divider => Some(Fragment {
                text: "---".to_string(),
                list: None,
            }),
            BlockType::Image => {
                let token = block
                    .image
                    .as_ref()
                    .and_then(|i| i.token.as_deref())
                    .unwrap_or("");
                Some(Fragment {
                    text: format!("![image]({token})"),
                    list: None,
                })
            }
            BlockType::Isv => {
                let text = match &block.isv {
                    Some(isv) => self.components.render(isv),
                    None => return,
                };
                Some(Fragment { text, list: None })
            }
            BlockType::Unknown(code) => Some(Fragment {
                text: format!("<!-- Unknown block type {code} -->"),
                list: None,
            }),
        };

        if let Some(fragment) = fragment {
            fragments.push(fragment);
        }

        if block_type != BlockType::Page {
            self.render_children(&block.children, seq, fragments, visited);
        }
    }

    /// Styled inline content of the block's text payload.
    fn inline(&self, block: &Block) -> String {
        block
            .text_payload()
            .map(|text| style::render_elements(&text.elements, &self.options))
            .unwrap_or_default()
    }

    fn heading(&self, block: &Block, block_type: BlockType, seq: &mut HeadingSequence) -> String {
        // Levels 7-9 render with six markers.
        let level = block_type.heading_level().unwrap_or(1);
        let depth = level.min(6);

        let mut line = "#".repeat(depth);
        line.push(' ');

        if let Some(text) = block.text_payload() {
            match text.sequence() {
                Some("auto") => {
                    line.push_str(&format!("{}. ", seq.next(depth)));
                }
                Some(literal) => {
                    line.push_str(literal);
                    line.push_str(". ");
                }
                None => {}
            }
            line.push_str(&style::render_elements(&text.elements, &self.options));
        }
        line
    }

    fn code_fence(&self, block: &Block) -> String {
        let payload = block.text_payload();
        let language = payload
            .and_then(|t| t.language())
            .map(language_code_to_name)
            .unwrap_or(crate::lang::FALLBACK_LANGUAGE);
        let content = payload.map(|t| t.plain_content()).unwrap_or_default();
        format!("```{language}\n{content}\n```")
    }
}
