//! Markdown conversion pair
//!
//! This module implements bidirectional conversion between document block
//! collections and Markdown text.
//!
//! # Library Choice
//!
//! Import goes through the `comrak` AST: robust CommonMark compliance plus
//! the extensions this pair needs (tables, strikethrough, task lists).
//! Export is hand-serialized instead of built through a Markdown AST: the
//! target forms are exact (fence layout, literal `1. ` markers, todo
//! checkboxes, placeholder comments), and a serializing library would
//! re-wrap them.
//!
//! # Element Mapping Table
//!
//! | Block           | Markdown                  | Export notes                              | Import notes                      |
//! |-----------------|---------------------------|-------------------------------------------|-----------------------------------|
//! | Page            | —                         | Never emitted; children traversed         | Synthesized as the root           |
//! | Text            | Paragraph                 | Runs styled and concatenated              | Direct                            |
//! | Heading 1-9     | `#`..`######`             | Levels 7-9 clamp to 6; auto/literal seq   | Levels 1-6                        |
//! | Bullet          | `- item`                  | Tight join between consecutive items      | One block per item; nesting → children |
//! | Ordered         | `1. item`                 | Literal `1. ` per block, no counter       | One block per item                |
//! | Code            | Fenced block              | Language via the numeric code table       | Info string → code, fallback 1    |
//! | Quote           | `> text`                  | Runs on one line                          | Inner paragraphs flattened        |
//! | Todo            | `- [ ]` / `- [x]`         | Done flag from block style                | Task list items                   |
//! | Divider         | `---`                     | Direct                                    | Thematic break                    |
//! | Equation        | `$$ ... $$`               | Display math fence                        | `$$` paragraph                    |
//! | Image           | `![image](token)`         | Token reference only (documented loss)    | Upload via injected capability    |
//! | ISV             | Placeholder               | Dispatch on component type tag            | Not representable                 |
//! | Unknown         | HTML comment              | `<!-- Unknown block type N -->`           | —                                 |
//!
//! # Lossy Conversions
//!
//! Raster images, embedded tables/sheets, drawing boards, and ISV component
//! payloads are not retrievable from the source document representation;
//! their placeholders are the documented contract, not a defect.

pub mod isv;
pub mod parser;
pub mod sequence;
pub mod serializer;
pub mod style;

pub use isv::{ComponentRegistry, ComponentRenderer};
pub use parser::MarkdownToBlocks;
pub use serializer::BlockToMarkdown;
