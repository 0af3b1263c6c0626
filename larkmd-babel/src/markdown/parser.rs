//! Markdown parsing (Markdown → blocks import)
//!
//! Converts Markdown text to a block collection rooted at a synthetic Page
//! block. Pipeline: Markdown string → comrak AST → blocks. IDs, parent
//! links, and children lists are wired during the walk; the ID generator is
//! scoped to one conversion call.
//!
//! Malformed constructs that comrak would silently repair (an unterminated
//! code fence) fail with a parse error naming the construct; everything
//! else degrades to best-effort Text blocks.

use comrak::nodes::{AstNode, ListType, NodeValue};
use comrak::{parse_document, Arena, ComrakOptions};

use crate::block::{Block, Link, Text, TextElement, TextElementStyle};
use crate::error::ConvertError;
use crate::lang::{language_name_to_code, FALLBACK_LANGUAGE_CODE};
use crate::markdown::sequence::BlockIdGenerator;
use crate::options::ConvertOptions;
use crate::remote::ImageUploader;

/// Converter from Markdown text to a block collection.
///
/// `parent_node` is the opaque handle handed to the injected
/// [`ImageUploader`] when an embedded image needs a reusable token; the
/// parser performs no network I/O itself.
pub struct MarkdownToBlocks<'a> {
    source: Vec<u8>,
    #[allow(dead_code)]
    options: ConvertOptions,
    parent_node: String,
    uploader: Option<&'a dyn ImageUploader>,
}

impl<'a> MarkdownToBlocks<'a> {
    /// Create a converter over the given UTF-8 Markdown bytes.
    pub fn new(source: &[u8], options: ConvertOptions, parent_node: impl Into<String>) -> Self {
        MarkdownToBlocks {
            source: source.to_vec(),
            options,
            parent_node: parent_node.into(),
            uploader: None,
        }
    }

    /// Inject the upload capability used for embedded images.
    pub fn with_uploader(mut self, uploader: &'a dyn ImageUploader) -> Self {
        self.uploader = Some(uploader);
        self
    }

    /// Parse the Markdown into blocks.
    ///
    /// The first block of the result is the synthetic Page root; its
    /// `children` list the top-level blocks in document order.
    pub fn convert(&self) -> Result<Vec<Block>, ConvertError> {
        let source = std::str::from_utf8(&self.source)
            .map_err(|e| ConvertError::Parse(format!("input is not valid UTF-8: {e}")))?;
        check_code_fences(source)?;

        let arena = Arena::new();
        let root = parse_document(&arena, source, &comrak_options());

        let mut ids = BlockIdGenerator::new();
        let page_id = ids.next_id();
        let mut descendants = Vec::new();
        let mut page_children = Vec::new();
        for child in root.children() {
            self.visit_node(child, &page_id, &mut ids, &mut descendants, &mut page_children)?;
        }

        let mut page = Block::page(page_id);
        page.children = page_children;

        let mut blocks = Vec::with_capacity(descendants.len() + 1);
        blocks.push(page);
        blocks.append(&mut descendants);
        Ok(blocks)
    }

    /// Convert one block-level AST node, appending the produced blocks to
    /// `out` and their IDs to the parent's `siblings` list.
    fn visit_node<'b>(
        &self,
        node: &'b AstNode<'b>,
        parent_id: &str,
        ids: &mut BlockIdGenerator,
        out: &mut Vec<Block>,
        siblings: &mut Vec<String>,
    ) -> Result<(), ConvertError> {
        let node_data = node.data.borrow();

        match &node_data.value {
            NodeValue::FrontMatter(_) => Ok(()),

            NodeValue::Heading(heading) => {
                let payload = Text::from_elements(collect_inline_elements(node));
                let block = Block::heading(ids.next_id(), heading.level as usize, payload);
                push_block(block, parent_id, out, siblings);
                Ok(())
            }

            NodeValue::Paragraph => self.visit_paragraph(node, parent_id, ids, out, siblings),

            NodeValue::List(list) => {
                let ordered = matches!(list.list_type, ListType::Ordered);
                for item in node.children() {
                    self.visit_list_item(item, ordered, parent_id, ids, out, siblings)?;
                }
                Ok(())
            }

            NodeValue::CodeBlock(code_block) => {
                let info = code_block.info.split_whitespace().next().unwrap_or("");
                let language = if info.is_empty() {
                    FALLBACK_LANGUAGE_CODE
                } else {
                    language_name_to_code(info)
                };
                let content = code_block
                    .literal
                    .strip_suffix('\n')
                    .unwrap_or(&code_block.literal);
                let block = Block::code(ids.next_id(), language, content);
                push_block(block, parent_id, out, siblings);
                Ok(())
            }

            NodeValue::BlockQuote => {
                // Inner paragraphs flatten to runs separated by a space;
                // nested structure inside a quote is not representable.
                let mut elements = Vec::new();
                for child in node.children() {
                    if !elements.is_empty() {
                        elements.push(TextElement::plain(" "));
                    }
                    elements.extend(collect_inline_elements(child));
                }
                let block = Block::quote(ids.next_id(), elements);
                push_block(block, parent_id, out, siblings);
                Ok(())
            }

            NodeValue::ThematicBreak => {
                push_block(Block::divider(ids.next_id()), parent_id, out, siblings);
                Ok(())
            }

            // Raw HTML has no block equivalent; skipped.
            NodeValue::HtmlBlock(_) => Ok(()),

            // Tables degrade to one Text block per row.
            NodeValue::Table(_) => {
                for row in node.children() {
                    let cells: Vec<String> = row
                        .children()
                        .map(|cell| collect_plain_text(cell).trim().to_string())
                        .collect();
                    let line = cells.join(" | ");
                    if !line.is_empty() {
                        let block = Block::text(ids.next_id(), vec![TextElement::plain(line)]);
                        push_block(block, parent_id, out, siblings);
                    }
                }
                Ok(())
            }

            // Anything else degrades to a best-effort Text block.
            _ => {
                let text = collect_plain_text(node);
                if !text.trim().is_empty() {
                    let block = Block::text(ids.next_id(), vec![TextElement::plain(text)]);
                    push_block(block, parent_id, out, siblings);
                }
                Ok(())
            }
        }
    }

    fn visit_paragraph<'b>(
        &self,
        node: &'b AstNode<'b>,
        parent_id: &str,
        ids: &mut BlockIdGenerator,
        out: &mut Vec<Block>,
        siblings: &mut Vec<String>,
    ) -> Result<(), ConvertError> {
        // A paragraph consisting solely of `$$ ... $$` is a display equation.
        if let Some(formula) = equation_formula(node) {
            let block = Block::equation(ids.next_id(), formula);
            push_block(block, parent_id, out, siblings);
            return Ok(());
        }

        // A paragraph consisting of a single image becomes an Image block
        // (token obtained through the injected uploader) or degrades to
        // Markdown-preserving text.
        if let Some((url, alt)) = sole_image(node) {
            let block = self.image_block(ids, &url, &alt)?;
            push_block(block, parent_id, out, siblings);
            return Ok(());
        }

        let block = Block::text(ids.next_id(), collect_inline_elements(node));
        push_block(block, parent_id, out, siblings);
        Ok(())
    }

    fn visit_list_item<'b>(
        &self,
        item: &'b AstNode<'b>,
        ordered: bool,
        parent_id: &str,
        ids: &mut BlockIdGenerator,
        out: &mut Vec<Block>,
        siblings: &mut Vec<String>,
    ) -> Result<(), ConvertError> {
        let todo_done = match &item.data.borrow().value {
            NodeValue::TaskItem(symbol) => Some(symbol.is_some()),
            NodeValue::Item(_) => None,
            // Loose content inside a malformed list degrades through the
            // regular node path.
            _ => return self.visit_node(item, parent_id, ids, out, siblings),
        };

        let id = ids.next_id();
        let mut elements = Vec::new();
        let mut consumed_lead_paragraph = false;
        let mut nested_out = Vec::new();
        let mut child_ids = Vec::new();

        for child in item.children() {
            let is_paragraph = matches!(child.data.borrow().value, NodeValue::Paragraph);
            if is_paragraph && !consumed_lead_paragraph {
                elements = collect_inline_elements(child);
                consumed_lead_paragraph = true;
            } else {
                self.visit_node(child, &id, ids, &mut nested_out, &mut child_ids)?;
            }
        }

        let mut block = match todo_done {
            Some(done) => Block::todo(id.clone(), elements, done),
            None if ordered => Block::ordered(id.clone(), elements),
            None => Block::bullet(id.clone(), elements),
        };
        block.children = child_ids;
        push_block(block, parent_id, out, siblings);
        out.append(&mut nested_out);
        Ok(())
    }

    fn image_block(
        &self,
        ids: &mut BlockIdGenerator,
        url: &str,
        alt: &str,
    ) -> Result<Block, ConvertError> {
        if let Some(uploader) = self.uploader {
            let is_remote = url.starts_with("http://") || url.starts_with("https://");
            if !is_remote {
                if let Ok(bytes) = std::fs::read(url) {
                    let token = uploader.upload(&bytes, &self.parent_node)?;
                    return Ok(Block::image(ids.next_id(), token));
                }
            }
        }
        // No uploader, remote source, or unreadable file: keep the
        // reference as Markdown text instead of dropping it.
        Ok(Block::text(
            ids.next_id(),
            vec![TextElement::plain(format!("![{alt}]({url})"))],
        ))
    }
}

fn comrak_options() -> ComrakOptions<'static> {
    let mut options = ComrakOptions::default();
    options.extension.table = true;
    options.extension.strikethrough = true;
    options.extension.autolink = true;
    options.extension.tasklist = true;
    options
}

fn push_block(mut block: Block, parent_id: &str, out: &mut Vec<Block>, siblings: &mut Vec<String>) {
    block.parent_id = Some(parent_id.to_string());
    siblings.push(block.block_id.clone());
    out.push(block);
}

/// Style context inherited while walking nested inline nodes.
#[derive(Debug, Clone, Default)]
struct InlineContext {
    bold: bool,
    italic: bool,
    strikethrough: bool,
    link: Option<String>,
}

impl InlineContext {
    fn into_style(self, inline_code: bool) -> Option<TextElementStyle> {
        if !(self.bold || self.italic || self.strikethrough || inline_code || self.link.is_some()) {
            return None;
        }
        Some(TextElementStyle {
            bold: self.bold.then_some(true),
            italic: self.italic.then_some(true),
            strikethrough: self.strikethrough.then_some(true),
            inline_code: inline_code.then_some(true),
            link: self.link.map(|url| Link { url }),
            text_color: None,
            background_color: None,
        })
    }
}

fn make_run(content: &str, ctx: &InlineContext, inline_code: bool) -> TextElement {
    match ctx.clone().into_style(inline_code) {
        Some(style) => TextElement::styled(content, style),
        None => TextElement::plain(content),
    }
}

/// Collect the inline children of a container node into styled runs.
fn collect_inline_elements<'b>(node: &'b AstNode<'b>) -> Vec<TextElement> {
    let mut elements = Vec::new();
    let ctx = InlineContext::default();
    for child in node.children() {
        collect_inline(child, &ctx, &mut elements);
    }
    elements
}

fn collect_inline<'b>(node: &'b AstNode<'b>, ctx: &InlineContext, out: &mut Vec<TextElement>) {
    let node_data = node.data.borrow();

    match &node_data.value {
        NodeValue::Text(text) => out.push(make_run(text, ctx, false)),
        NodeValue::Code(code) => out.push(make_run(&code.literal, ctx, true)),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(make_run(" ", ctx, false)),
        NodeValue::HtmlInline(html) => out.push(make_run(html, ctx, false)),

        NodeValue::Strong => {
            let mut nested = ctx.clone();
            nested.bold = true;
            for child in node.children() {
                collect_inline(child, &nested, out);
            }
        }
        NodeValue::Emph => {
            let mut nested = ctx.clone();
            nested.italic = true;
            for child in node.children() {
                collect_inline(child, &nested, out);
            }
        }
        NodeValue::Strikethrough => {
            let mut nested = ctx.clone();
            nested.strikethrough = true;
            for child in node.children() {
                collect_inline(child, &nested, out);
            }
        }
        NodeValue::Link(link) => {
            let mut nested = ctx.clone();
            nested.link = Some(link.url.clone());
            for child in node.children() {
                collect_inline(child, &nested, out);
            }
        }

        // An inline image mixed with other content degrades to a linked run.
        NodeValue::Image(link) => {
            let alt = collect_plain_text(node);
            let mut nested = ctx.clone();
            nested.link = Some(link.url.clone());
            let label = if alt.is_empty() { "image" } else { alt.as_str() };
            out.push(make_run(label, &nested, false));
        }

        _ => {
            for child in node.children() {
                collect_inline(child, ctx, out);
            }
        }
    }
}

/// Plain text of a subtree, breaks collapsed to spaces.
fn collect_plain_text<'b>(node: &'b AstNode<'b>) -> String {
    let mut out = String::new();
    collect_plain_text_into(node, &mut out, ' ');
    out
}

fn collect_plain_text_into<'b>(node: &'b AstNode<'b>, out: &mut String, break_char: char) {
    match &node.data.borrow().value {
        NodeValue::Text(text) => out.push_str(text),
        NodeValue::Code(code) => out.push_str(&code.literal),
        NodeValue::SoftBreak | NodeValue::LineBreak => out.push(break_char),
        _ => {
            for child in node.children() {
                collect_plain_text_into(child, out, break_char);
            }
        }
    }
}

/// The formula of a `$$ ... $$` paragraph, if the paragraph is one.
fn equation_formula<'b>(node: &'b AstNode<'b>) -> Option<String> {
    let mut text = String::new();
    collect_plain_text_into(node, &mut text, '\n');
    let text = text.trim();
    if text.len() <= 4 || !text.starts_with("$$") || !text.ends_with("$$") {
        return None;
    }
    let inner = text[2..text.len() - 2].trim();
    if inner.is_empty() || inner.contains("$$") {
        return None;
    }
    Some(inner.to_string())
}

/// `Some((url, alt))` when the paragraph consists of a single image.
fn sole_image<'b>(node: &'b AstNode<'b>) -> Option<(String, String)> {
    let mut children = node.children();
    let first = children.next()?;
    if children.next().is_some() {
        return None;
    }
    match &first.data.borrow().value {
        NodeValue::Image(link) => Some((link.url.clone(), collect_plain_text(first))),
        _ => None,
    }
}

/// Pre-scan for unterminated code fences.
///
/// comrak silently closes an open fence at end of input; the conversion
/// contract treats that as a structural error instead, naming the line the
/// fence was opened on.
fn check_code_fences(source: &str) -> Result<(), ConvertError> {
    // (fence char, marker length, 1-based line number)
    let mut open: Option<(char, usize, usize)> = None;

    for (i, line) in source.lines().enumerate() {
        let trimmed = line.trim_start();
        if line.len() - trimmed.len() > 3 {
            continue;
        }
        let fence_char = match trimmed.chars().next() {
            Some(c @ ('`' | '~')) => c,
            _ => continue,
        };
        let run = trimmed.chars().take_while(|&c| c == fence_char).count();
        if run < 3 {
            continue;
        }
        match open {
            None => open = Some((fence_char, run, i + 1)),
            Some((c, len, _)) => {
                // A closing fence uses the same character, is at least as
                // long, and carries no info string.
                if c == fence_char && run >= len && trimmed[run..].trim().is_empty() {
                    open = None;
                }
            }
        }
    }

    match open {
        Some((_, _, line)) => Err(ConvertError::Parse(format!(
            "unterminated code fence opened on line {line}"
        ))),
        None => Ok(()),
    }
}
