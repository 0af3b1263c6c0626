//! Markdown conversion tests
//!
//! Tests for bidirectional block ↔ Markdown conversion.

mod export;
mod import;
mod roundtrip;
mod style_props;
