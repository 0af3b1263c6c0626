//! Round-trip tests (Markdown → blocks → Markdown)
//!
//! For supported constructs the pair reproduces the original text exactly.
//! Constructs with documented losses (images, tables, ISV components) are
//! deliberately absent here.

use larkmd_babel::{BlockToMarkdown, ConvertOptions, MarkdownToBlocks};

/// Parse, re-render, and trim the trailing newline the exporter adds.
fn roundtrip(markdown: &str) -> String {
    let blocks = MarkdownToBlocks::new(markdown.as_bytes(), ConvertOptions::default(), "")
        .convert()
        .expect("parse should succeed");
    assert!(!blocks.is_empty(), "blocks should not be empty");
    let rendered = BlockToMarkdown::new(blocks, ConvertOptions::default())
        .convert()
        .expect("render should succeed");
    rendered.trim_end().to_string()
}

fn assert_roundtrip(markdown: &str) {
    assert_eq!(roundtrip(markdown), markdown, "round-trip diverged");
}

#[test]
fn test_headings() {
    assert_roundtrip("# 标题一");
    assert_roundtrip("## 标题二");
    assert_roundtrip("### 标题三");
}

#[test]
fn test_plain_paragraph() {
    assert_roundtrip("普通文本");
}

#[test]
fn test_code_block() {
    assert_roundtrip("```go\nfmt.Println(\"Hello\")\n```");
}

#[test]
fn test_bullet_list() {
    assert_roundtrip("- 项目一\n- 项目二");
}

#[test]
fn test_todo_list() {
    assert_roundtrip("- [ ] 未完成任务\n- [x] 已完成任务");
}

#[test]
fn test_quote() {
    assert_roundtrip("> 这是一段引用");
}

#[test]
fn test_divider() {
    assert_roundtrip("---");
}

#[test]
fn test_equation() {
    assert_roundtrip("$$\nE = mc^2\n$$");
}

#[test]
fn test_styled_paragraph() {
    assert_roundtrip("**粗体**文本");
    assert_roundtrip("*斜体* 与 ~~删除线~~");
    assert_roundtrip("行内 `code` 片段");
    assert_roundtrip("[链接文本](https://example.com)");
}

#[test]
fn test_multi_block_document() {
    assert_roundtrip("# 标题\n\n段落内容\n\n- 项目一\n- 项目二\n\n> 引用");
}
