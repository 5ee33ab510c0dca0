//! Error types for enum extraction and code generation.

use thiserror::Error;

/// Result type for proto-enum-codegen operations.
pub type Result<T> = std::result::Result<T, CodegenError>;

/// Main error type for proto-enum-codegen.
///
/// Every extraction error is fatal for the file being generated: callers are
/// expected to abort instead of writing partial output.
#[derive(Debug, Error)]
pub enum CodegenError {
    /// IO error while reading a source or writing generated code
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// No `enum <name>` header in the source
    #[error("enum `{name}` not found")]
    MissingEnum { name: String },

    /// The header was found but no `{` follows it
    #[error("enum `{name}` (line {line}) has no opening brace")]
    MissingOpenBrace { name: String, line: usize },

    /// The block is never closed
    #[error("enum `{name}` (line {line}) has no closing brace")]
    MissingCloseBrace { name: String, line: usize },

    /// A `/*` comment inside the block has no `*/`
    #[error("unterminated block comment in enum `{name}` at line {line}")]
    UnterminatedComment { name: String, line: usize },

    /// An `=` with nothing in front of it
    #[error("entry without identifier in enum `{name}` at line {line}")]
    EmptyIdentifier { name: String, line: usize },
}

/// 1-based line number of a byte offset.
pub(crate) fn line_of(source: &str, offset: usize) -> usize {
    let end = offset.min(source.len());
    source.as_bytes()[..end].iter().filter(|&&b| b == b'\n').count() + 1
}
