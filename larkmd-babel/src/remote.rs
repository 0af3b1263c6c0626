//! Collaborator interfaces.
//!
//! The converters are pure; everything that touches a document service is
//! abstracted behind these traits. Transport, auth, and retry policy belong
//! to the implementations, not to this crate. Tests (and callers that work
//! offline) use in-memory fakes.

use crate::block::Block;
use crate::error::ConvertError;
use crate::markdown::{BlockToMarkdown, MarkdownToBlocks};
use crate::options::ConvertOptions;

/// Fetches the block collection of a document.
pub trait DocumentSource {
    fn fetch_blocks(&self, document_id: &str) -> Result<Vec<Block>, ConvertError>;
}

/// Writes a block collection into a document.
pub trait DocumentSink {
    fn write_blocks(&self, document_id: &str, blocks: &[Block]) -> Result<(), ConvertError>;
}

/// Uploads an embedded binary resource, returning a reusable token.
///
/// This is the parser's only suspension point; it must stay behind a trait
/// so the parsing logic remains deterministic under a fake implementation.
pub trait ImageUploader {
    fn upload(&self, data: &[u8], parent_node: &str) -> Result<String, ConvertError>;
}

/// Fetch a document's blocks and render them to Markdown.
pub fn export_document(
    source: &dyn DocumentSource,
    document_id: &str,
    options: ConvertOptions,
) -> Result<String, ConvertError> {
    let blocks = source.fetch_blocks(document_id)?;
    BlockToMarkdown::new(blocks, options).convert()
}

/// Parse Markdown and write the resulting blocks into a document.
pub fn import_document(
    sink: &dyn DocumentSink,
    document_id: &str,
    markdown: &[u8],
    options: ConvertOptions,
) -> Result<(), ConvertError> {
    let blocks = MarkdownToBlocks::new(markdown, options, document_id).convert()?;
    sink.write_blocks(document_id, &blocks)
}
