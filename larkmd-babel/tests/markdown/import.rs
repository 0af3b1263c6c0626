//! Import tests (Markdown → blocks)
//!
//! These tests verify that Markdown documents are correctly converted to
//! block collections by checking the resulting block structure.

use std::cell::RefCell;
use std::path::PathBuf;

use larkmd_babel::block::{Block, BlockType};
use larkmd_babel::{ConvertError, ConvertOptions, ImageUploader, MarkdownToBlocks};

/// Helper to parse Markdown into blocks.
fn md_to_blocks(md: &str) -> Vec<Block> {
    MarkdownToBlocks::new(md.as_bytes(), ConvertOptions::default(), "")
        .convert()
        .expect("should parse markdown")
}

fn block_types(blocks: &[Block]) -> Vec<BlockType> {
    blocks.iter().filter_map(|b| b.block_type()).collect()
}

#[test]
fn test_kitchensink_fixture() {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join("kitchensink.md");
    let md = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

    let blocks = md_to_blocks(&md);
    let page = &blocks[0];
    assert_eq!(page.block_type(), Some(BlockType::Page));

    let types = block_types(&blocks[1..]);
    assert!(types.contains(&BlockType::Heading1));
    assert!(types.contains(&BlockType::Heading2));
    assert!(types.contains(&BlockType::Text));
    assert!(types.contains(&BlockType::Bullet));
    assert!(types.contains(&BlockType::Ordered));
    assert!(types.contains(&BlockType::Todo));
    assert!(types.contains(&BlockType::Quote));
    assert!(types.contains(&BlockType::Code));
    assert!(types.contains(&BlockType::Divider));
    assert!(types.contains(&BlockType::Equation));

    // The nested bullet hangs off its parent item, not the page.
    let nested = blocks
        .iter()
        .find(|b| {
            b.text_payload()
                .map(|t| t.plain_content() == "嵌套项目")
                .unwrap_or(false)
        })
        .expect("nested item parsed");
    assert_ne!(nested.parent_id.as_deref(), Some(page.block_id.as_str()));
}

#[test]
fn test_every_block_links_back_to_its_parent() {
    let blocks = md_to_blocks("# Title\n\nBody.\n\n- a\n  - b\n");
    for block in &blocks[1..] {
        let parent = block.parent_id.as_deref().expect("parent wired");
        let parent_block = blocks
            .iter()
            .find(|b| b.block_id == parent)
            .expect("parent exists");
        assert!(
            parent_block.children.contains(&block.block_id),
            "{} missing from children of {parent}",
            block.block_id
        );
    }
}

#[test]
fn test_heading_levels_map_to_heading_blocks() {
    let blocks = md_to_blocks("# 一\n\n## 二\n\n### 三\n\n###### 六\n");
    assert_eq!(
        block_types(&blocks[1..]),
        vec![
            BlockType::Heading1,
            BlockType::Heading2,
            BlockType::Heading3,
            BlockType::Heading6,
        ]
    );
}

#[test]
fn test_code_fence_language_resolution() {
    let blocks = md_to_blocks("```python\nprint(1)\n```\n");
    assert_eq!(blocks[1].text_payload().unwrap().language(), Some(47));

    let blocks = md_to_blocks("```klingon\nqapla'\n```\n");
    assert_eq!(blocks[1].text_payload().unwrap().language(), Some(1));
}

#[test]
fn test_unterminated_fence_aborts_the_parse() {
    let err = MarkdownToBlocks::new(b"# ok\n\n```rust\nfn main() {}\n", ConvertOptions::default(), "")
        .convert()
        .unwrap_err();
    match err {
        ConvertError::Parse(msg) => assert!(msg.contains("unterminated code fence"), "{msg}"),
        other => panic!("expected parse error, got {other:?}"),
    }
}

/// Uploader fake recording every call.
struct RecordingUploader {
    token: &'static str,
    calls: RefCell<Vec<(Vec<u8>, String)>>,
}

impl RecordingUploader {
    fn new(token: &'static str) -> Self {
        RecordingUploader {
            token,
            calls: RefCell::new(Vec::new()),
        }
    }
}

impl ImageUploader for RecordingUploader {
    fn upload(&self, data: &[u8], parent_node: &str) -> Result<String, ConvertError> {
        self.calls
            .borrow_mut()
            .push((data.to_vec(), parent_node.to_string()));
        Ok(self.token.to_string())
    }
}

#[test]
fn test_local_image_uploads_through_the_injected_capability() {
    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("logo.png");
    std::fs::write(&image_path, b"\x89PNG fake bytes").unwrap();

    let md = format!("前文\n\n![logo]({})\n", image_path.display());
    let uploader = RecordingUploader::new("img_tok_1");
    let blocks = MarkdownToBlocks::new(md.as_bytes(), ConvertOptions::default(), "doc_node")
        .with_uploader(&uploader)
        .convert()
        .unwrap();

    let image = blocks
        .iter()
        .find(|b| b.block_type() == Some(BlockType::Image))
        .expect("image block produced");
    assert_eq!(image.image.as_ref().unwrap().token.as_deref(), Some("img_tok_1"));

    let calls = uploader.calls.borrow();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, b"\x89PNG fake bytes");
    assert_eq!(calls[0].1, "doc_node");
}

#[test]
fn test_image_without_uploader_keeps_markdown_text() {
    let blocks = md_to_blocks("![logo](missing.png)\n");
    let text = &blocks[1];
    assert_eq!(text.block_type(), Some(BlockType::Text));
    assert_eq!(
        text.text_payload().unwrap().plain_content(),
        "![logo](missing.png)"
    );
}

#[test]
fn test_uploader_failure_propagates() {
    struct FailingUploader;
    impl ImageUploader for FailingUploader {
        fn upload(&self, _data: &[u8], _parent_node: &str) -> Result<String, ConvertError> {
            Err(ConvertError::Upload("quota exceeded".to_string()))
        }
    }

    let dir = tempfile::tempdir().unwrap();
    let image_path = dir.path().join("big.png");
    std::fs::write(&image_path, b"bytes").unwrap();

    let md = format!("![big]({})\n", image_path.display());
    let err = MarkdownToBlocks::new(md.as_bytes(), ConvertOptions::default(), "doc_node")
        .with_uploader(&FailingUploader)
        .convert()
        .unwrap_err();
    assert!(matches!(err, ConvertError::Upload(_)));
}
