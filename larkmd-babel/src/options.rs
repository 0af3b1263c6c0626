//! Options shared by both conversion directions.

/// Options accepted by [`BlockToMarkdown`](crate::markdown::BlockToMarkdown)
/// and [`MarkdownToBlocks`](crate::markdown::MarkdownToBlocks).
///
/// `highlight` enables `<span style="...">` emission for colored text runs
/// on export. Everything else renders identically either way.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConvertOptions {
    pub highlight: bool,
}
