//! Bidirectional conversion between document block trees and Markdown.
//!
//!     This crate converts the hierarchical "document block" model of a
//!     rich-text document (headings, lists, code, quotes, todos, embedded
//!     components) to Markdown text and back. Export walks the block tree in
//!     document order and emits exact textual forms; import parses Markdown
//!     and produces a new block tree rooted at a synthetic page node.
//!
//!     This is a pure lib: it powers the larkmd CLI but is shell agnostic —
//!     no printing, no env vars, no network. Remote concerns (document
//!     fetch/write, media upload) are consumed through the traits in
//!     ./remote.rs so the conversion core stays deterministic and testable
//!     with fakes.
//!
//!     The file structure:
//!     .
//!     ├── error.rs                # ConvertError
//!     ├── options.rs              # ConvertOptions
//!     ├── block                   # Block model (vendor schema + collection)
//!     │   ├── text.rs             # Run container, styles
//!     │   └── collection.rs       # Flat storage + ID index
//!     ├── lang.rs                 # Numeric code ↔ language tag table
//!     ├── palette.rs              # Highlight color palettes
//!     ├── remote.rs               # Collaborator traits
//!     └── markdown
//!         ├── serializer.rs       # Blocks → Markdown
//!         ├── parser.rs           # Markdown → blocks
//!         ├── style.rs            # Inline run composition
//!         ├── sequence.rs         # Call-scoped counters and IDs
//!         └── isv.rs              # Embedded component dispatch
//!
//! Core Algorithms
//!
//!     The hierarchy is stored flat: an ID-indexed map plus ordered children
//!     ID lists (arena + index), which avoids ownership cycles and gives
//!     O(1) lookup during recursive rendering. Heading auto-numbering and
//!     block ID generation are call-scoped state objects threaded through a
//!     single conversion pass, never globals, so independent conversions can
//!     run concurrently without coordination.
//!
//! Error Handling
//!
//!     Structural Markdown errors (an unterminated fence) abort the affected
//!     parse call. Everything else degrades: unknown block types become HTML
//!     comments, absent types are skipped, unsupported embedded components
//!     emit documented placeholders. Export favors best-effort text over
//!     hard failure and never panics on malformed, well-typed input.

pub mod block;
pub mod error;
pub mod lang;
pub mod markdown;
pub mod options;
pub mod palette;
pub mod remote;

pub use block::{Block, BlockCollection, BlockType};
pub use error::ConvertError;
pub use markdown::{BlockToMarkdown, MarkdownToBlocks};
pub use options::ConvertOptions;
pub use remote::{DocumentSink, DocumentSource, ImageUploader};
