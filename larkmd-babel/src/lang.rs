//! Code block language table.
//!
//! Bidirectional mapping between the vendor's numeric language codes and
//! the lowercase tags used in Markdown fence info strings. The table is a
//! verbatim copy of the vendor schema enumeration; entries are never
//! inferred. Code 0 and unmapped codes fall back to `plaintext`, and
//! unmapped names fall back to code 1 on import.

use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fallback for unmapped codes and code 0.
pub const FALLBACK_LANGUAGE: &str = "plaintext";

/// Fallback code for unmapped language names.
pub const FALLBACK_LANGUAGE_CODE: i32 = 1;

/// Vendor language codes paired with their Markdown fence tags.
const LANGUAGES: &[(i32, &str)] = &[
    (1, "plaintext"),
    (2, "abap"),
    (3, "ada"),
    (4, "apache"),
    (5, "apex"),
    (6, "assembly"),
    (7, "bash"),
    (8, "csharp"),
    (9, "cpp"),
    (10, "c"),
    (11, "cobol"),
    (12, "css"),
    (13, "coffeescript"),
    (14, "d"),
    (15, "dart"),
    (16, "delphi"),
    (17, "django"),
    (18, "dockerfile"),
    (19, "erlang"),
    (20, "fortran"),
    (21, "foxpro"),
    (22, "go"),
    (23, "groovy"),
    (24, "html"),
    (25, "htmlbars"),
    (26, "http"),
    (27, "haskell"),
    (28, "json"),
    (29, "java"),
    (30, "javascript"),
    (31, "julia"),
    (32, "kotlin"),
    (33, "latex"),
    (34, "lisp"),
    (35, "logo"),
    (36, "lua"),
    (37, "matlab"),
    (38, "makefile"),
    (39, "markdown"),
    (40, "nginx"),
    (41, "objectivec"),
    (42, "openedge"),
    (43, "php"),
    (44, "perl"),
    (45, "postscript"),
    (46, "powershell"),
    (47, "python"),
    (48, "r"),
    (49, "razor"),
    (50, "ruby"),
    (51, "rust"),
    (52, "sas"),
    (53, "scss"),
    (54, "sql"),
    (55, "scala"),
    (56, "scheme"),
    (57, "scratch"),
    (58, "shell"),
    (59, "swift"),
    (60, "typescript"),
    (61, "vbscript"),
    (62, "vb"),
    (63, "xml"),
    (64, "yaml"),
];

static CODE_TO_NAME: Lazy<HashMap<i32, &'static str>> =
    Lazy::new(|| LANGUAGES.iter().copied().collect());

static NAME_TO_CODE: Lazy<HashMap<&'static str, i32>> =
    Lazy::new(|| LANGUAGES.iter().map(|&(code, name)| (name, code)).collect());

/// Resolve a numeric language code to its Markdown fence tag.
pub fn language_code_to_name(code: i32) -> &'static str {
    CODE_TO_NAME.get(&code).copied().unwrap_or(FALLBACK_LANGUAGE)
}

/// Resolve a Markdown fence tag to the vendor language code.
///
/// Matching is case-insensitive on the exact tag; no aliases.
pub fn language_name_to_code(name: &str) -> i32 {
    NAME_TO_CODE
        .get(name.to_ascii_lowercase().as_str())
        .copied()
        .unwrap_or(FALLBACK_LANGUAGE_CODE)
}
