//! Export tests (blocks → Markdown)
//!
//! These tests verify the exact textual forms the serializer emits,
//! including the graceful degradations for malformed input.

use insta::assert_snapshot;
use larkmd_babel::block::{Block, Isv, Text, TextElement, TextElementStyle, TextStyle};
use larkmd_babel::markdown::isv::{COMPONENT_TYPE_TEXT_DRAWING, COMPONENT_TYPE_TIMELINE};
use larkmd_babel::{BlockToMarkdown, ConvertOptions};

fn convert(blocks: Vec<Block>) -> String {
    BlockToMarkdown::new(blocks, ConvertOptions::default())
        .convert()
        .expect("export should not fail")
}

fn convert_highlighted(blocks: Vec<Block>) -> String {
    BlockToMarkdown::new(blocks, ConvertOptions { highlight: true })
        .convert()
        .expect("export should not fail")
}

fn page_with(children: &[&str]) -> Block {
    let mut page = Block::page("page");
    page.children = children.iter().map(|s| s.to_string()).collect();
    page
}

fn colored_run(content: &str, text_color: Option<i32>, background_color: Option<i32>) -> TextElement {
    TextElement::styled(
        content,
        TextElementStyle {
            text_color,
            background_color,
            ..TextElementStyle::default()
        },
    )
}

#[test]
fn test_mixed_document_snapshot() {
    let markdown = convert(vec![
        Block::heading("h1", 1, Text::from_plain("文档标题")),
        Block::text("p1", vec![TextElement::plain("段落内容")]),
        Block::bullet("b1", vec![TextElement::plain("列表项一")]),
        Block::bullet("b2", vec![TextElement::plain("列表项二")]),
        Block::divider("d1"),
        Block::code("c1", 22, "fmt.Println()"),
        Block::quote("q1", vec![TextElement::plain("引用内容")]),
        Block::todo("t1", vec![TextElement::plain("待办事项")], false),
        Block::equation("e1", "E = mc^2"),
    ]);

    assert_snapshot!(markdown.trim_end(), @r###"
    # 文档标题

    段落内容

    - 列表项一
    - 列表项二

    ---

    ```go
    fmt.Println()
    ```

    > 引用内容

    - [ ] 待办事项

    $$
    E = mc^2
    $$
    "###);
}

#[test]
fn test_empty_collection_renders_single_newline() {
    assert_eq!(convert(vec![]), "\n");
}

#[test]
fn test_nil_type_block_renders_single_newline() {
    let block = Block {
        block_id: "b1".to_string(),
        ..Block::default()
    };
    assert_eq!(convert(vec![block]), "\n");
}

#[test]
fn test_unknown_block_type_becomes_comment() {
    let block = Block {
        block_id: "u1".to_string(),
        block_type: Some(999),
        ..Block::default()
    };
    let out = convert(vec![block]);
    assert!(out.contains("<!-- Unknown block type 999 -->"), "{out}");
}

#[test]
fn test_heading_clamp_renders_at_most_six_markers() {
    for level in 7..=9 {
        let out = convert(vec![Block::heading(
            "h",
            level,
            Text::from_plain("标题内容"),
        )]);
        assert!(out.starts_with("###### "), "level {level}: {out:?}");
        assert!(!out.starts_with("#######"), "level {level}: {out:?}");
    }
}

#[test]
fn test_heading_auto_and_literal_sequences() {
    let heading = |id: &str, seq: &str, content: &str| {
        Block::heading(
            id,
            1,
            Text {
                style: Some(TextStyle {
                    sequence: Some(seq.to_string()),
                    ..TextStyle::default()
                }),
                elements: vec![TextElement::plain(content)],
            },
        )
    };
    let out = convert(vec![
        page_with(&["h1", "h2", "h3"]),
        heading("h1", "auto", "第一章"),
        heading("h2", "auto", "第二章"),
        heading("h3", "5", "第三章"),
    ]);
    assert!(out.contains("# 1. 第一章"), "{out}");
    assert!(out.contains("# 2. 第二章"), "{out}");
    assert!(out.contains("# 5. 第三章"), "{out}");
}

#[test]
fn test_isv_dispatch() {
    let isv_block = |id: &str, type_id: &str, comp_id: &str| {
        let mut block = Block {
            block_id: id.to_string(),
            block_type: Some(28),
            ..Block::default()
        };
        block.isv = Some(Isv {
            component_type_id: Some(type_id.to_string()),
            component_id: Some(comp_id.to_string()),
        });
        block
    };

    let drawing = convert(vec![
        page_with(&["isv1"]),
        isv_block("isv1", COMPONENT_TYPE_TEXT_DRAWING, "comp123"),
    ]);
    assert!(drawing.contains("```mermaid"), "{drawing}");

    let timeline = convert(vec![
        page_with(&["isv1"]),
        isv_block("isv1", COMPONENT_TYPE_TIMELINE, "comp456"),
    ]);
    assert!(timeline.contains("timeline"), "{timeline}");

    let unknown = convert(vec![
        page_with(&["isv1"]),
        isv_block("isv1", "blk_unknown", "comp789"),
    ]);
    assert!(unknown.contains("ISV 应用块"), "{unknown}");
}

#[test]
fn test_highlight_disabled_emits_no_span() {
    let block = Block::text(
        "t1",
        vec![
            colored_run("红色文本", Some(1), None),
            colored_run("蓝底文本", None, Some(5)),
        ],
    );
    let out = convert(vec![page_with(&["t1"]), block]);
    assert!(!out.contains("<span"), "{out}");
}

#[test]
fn test_highlight_resolves_palette_colors() {
    let block = Block::text(
        "t1",
        vec![
            colored_run("红色文本", Some(1), None),
            colored_run("蓝底文本", None, Some(5)),
            colored_run("双色文本", Some(1), Some(5)),
        ],
    );
    let out = convert_highlighted(vec![page_with(&["t1"]), block]);
    assert!(out.contains("color: #ef4444"), "{out}");
    assert!(out.contains("background-color: #eff6ff"), "{out}");
    assert!(
        out.contains("color: #ef4444; background-color: #eff6ff"),
        "{out}"
    );
}

#[test]
fn test_highlight_zero_colors_emit_no_span() {
    let block = Block::text("t1", vec![colored_run("普通文本", Some(0), Some(0))]);
    let out = convert_highlighted(vec![page_with(&["t1"]), block]);
    assert!(!out.contains("<span"), "{out}");
}

#[test]
fn test_styled_runs() {
    let styled = |content: &str, style: TextElementStyle| {
        convert(vec![Block::text("t1", vec![TextElement::styled(content, style)])])
    };

    let bold = styled(
        "粗体文本",
        TextElementStyle {
            bold: Some(true),
            ..TextElementStyle::default()
        },
    );
    assert!(bold.contains("**粗体文本**"), "{bold}");

    let italic = styled(
        "斜体文本",
        TextElementStyle {
            italic: Some(true),
            ..TextElementStyle::default()
        },
    );
    assert!(italic.contains("*斜体文本*"), "{italic}");

    let strike = styled(
        "删除线文本",
        TextElementStyle {
            strikethrough: Some(true),
            ..TextElementStyle::default()
        },
    );
    assert!(strike.contains("~~删除线文本~~"), "{strike}");

    let code = styled(
        "code",
        TextElementStyle {
            inline_code: Some(true),
            ..TextElementStyle::default()
        },
    );
    assert!(code.contains("`code`"), "{code}");

    let link = styled(
        "链接文本",
        TextElementStyle {
            link: Some(larkmd_babel::block::Link {
                url: "https://example.com".to_string(),
            }),
            ..TextElementStyle::default()
        },
    );
    assert!(link.contains("[链接文本](https://example.com)"), "{link}");
}

#[test]
fn test_divider_and_equation_markers_survive_neighbors() {
    let out = convert(vec![
        Block::text("t1", vec![TextElement::plain("before")]),
        Block::divider("d1"),
        Block::equation("e1", "a^2 + b^2 = c^2"),
        Block::text("t2", vec![TextElement::plain("after")]),
    ]);
    assert!(out.contains("---"), "{out}");
    assert!(out.contains("$$"), "{out}");
    assert!(out.contains("a^2 + b^2 = c^2"), "{out}");
}
