//! Source scanner that extracts the entries of one protobuf `enum` block.
//!
//! The scanner works directly on the text, without a protobuf grammar. It
//! walks the block with a cursor, always handling whichever of `=`, `//`, `/*`,
//! a line break or `}` comes next, and collects comments until the entry they
//! document shows up.

use crate::CodeGenerator;
use crate::error::{CodegenError, Result, line_of};
use crate::types::EnumEntry;
use std::fs;
use std::path::Path;
use tracing::{debug, trace};

/// Receives the entries of an enum block in source order.
pub trait EntrySink {
    /// Called once per entry.
    fn entry(&mut self, entry: EnumEntry);

    /// Called exactly once, when the closing brace is reached.
    fn finished(&mut self) {}
}

impl EntrySink for Vec<EnumEntry> {
    fn entry(&mut self, entry: EnumEntry) {
        self.push(entry);
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Token {
    Assign,
    LineComment,
    BlockComment,
    LineEnd,
    CloseBrace,
}

/// Candidates in tie-break order: on equal offsets the earlier one wins.
const TOKENS: [(Token, &str); 5] = [
    (Token::Assign, "="),
    (Token::LineComment, "//"),
    (Token::BlockComment, "/*"),
    (Token::LineEnd, "\n"),
    (Token::CloseBrace, "}"),
];

const BLOCK_CLOSE: &str = "*/";

struct Scanner<'a> {
    source: &'a str,
    name: &'a str,
    cursor: usize,
    /// Comment lines waiting for the next entry.
    pending: Vec<String>,
}

impl Scanner<'_> {
    fn find(&self, needle: &str, from: usize) -> Option<usize> {
        self.source.get(from..)?.find(needle).map(|i| from + i)
    }

    /// Offset just past the line break following `at`, or the end of input.
    fn past_line(&self, at: usize) -> usize {
        self.find("\n", at)
            .map(|nl| nl + 1)
            .unwrap_or(self.source.len())
    }

    fn next_token(&self) -> Option<(Token, usize)> {
        let mut best: Option<(Token, usize)> = None;
        for (token, needle) in TOKENS {
            let Some(at) = self.find(needle, self.cursor) else {
                continue;
            };
            if best.is_none_or(|(_, offset)| at < offset) {
                best = Some((token, at));
            }
        }
        best
    }

    fn run<S: EntrySink + ?Sized>(mut self, sink: &mut S) -> Result<()> {
        loop {
            let Some((token, at)) = self.next_token() else {
                return Err(CodegenError::MissingCloseBrace {
                    name: self.name.to_string(),
                    line: line_of(self.source, self.cursor),
                });
            };

            match token {
                Token::CloseBrace => {
                    trace!(
                        enum_name = self.name,
                        line = line_of(self.source, at),
                        "block closed"
                    );
                    sink.finished();
                    return Ok(());
                }
                Token::Assign => self.entry(at, sink)?,
                Token::LineComment => {
                    let end = self.find("\n", at).unwrap_or(self.source.len());
                    self.pending
                        .push(self.source[at + 2..end].trim().to_string());
                    self.cursor = self.past_line(at);
                }
                Token::BlockComment => self.cursor = self.block_comment(at)?,
                Token::LineEnd => self.cursor = at + 1,
            }
        }
    }

    fn entry<S: EntrySink + ?Sized>(&mut self, assign: usize, sink: &mut S) -> Result<()> {
        let original = self.source[self.cursor..assign].trim();
        if original.is_empty() {
            return Err(CodegenError::EmptyIdentifier {
                name: self.name.to_string(),
                line: line_of(self.source, assign),
            });
        }

        let line_end = self.find("\n", assign).unwrap_or(self.source.len());
        let close = self.find("}", assign).filter(|&c| c < line_end);
        let mut next = self.past_line(assign);

        match (close, self.trailing_comment(assign, line_end)) {
            // `LAST = 9; }` closes the block on the entry's own line, and
            // anything after that brace belongs to the enclosing file
            (Some(close), comment) if comment.is_none_or(|(_, at)| close < at) => next = close,
            (_, Some((Token::LineComment, at))) => {
                self.pending
                    .push(self.source[at + 2..line_end].trim().to_string());
            }
            (_, Some((_, at))) => {
                let after = self.block_comment(at)?;
                next = self.rest_of_comment_line(after);
            }
            (_, None) => {}
        }

        if is_option(original) {
            trace!(enum_name = self.name, statement = original, "skipping option");
            self.pending.clear();
        } else {
            let entry = EnumEntry::new(original, std::mem::take(&mut self.pending));
            debug!(
                enum_name = self.name,
                original = %entry.original_name,
                normalized = %entry.normalized_name,
                doc_lines = entry.doc_lines.len(),
                "extracted entry"
            );
            sink.entry(entry);
        }

        self.cursor = next;
        Ok(())
    }

    /// First comment opener between the `=` of an entry and the end of its line.
    fn trailing_comment(&self, assign: usize, line_end: usize) -> Option<(Token, usize)> {
        let line = self.find("//", assign).filter(|&at| at < line_end);
        let block = self.find("/*", assign).filter(|&at| at < line_end);
        match (line, block) {
            (Some(l), Some(b)) if b < l => Some((Token::BlockComment, b)),
            (Some(l), _) => Some((Token::LineComment, l)),
            (None, Some(b)) => Some((Token::BlockComment, b)),
            (None, None) => None,
        }
    }

    /// Collect the lines of the block comment opened at `open` and return the
    /// offset just past its closer.
    fn block_comment(&mut self, open: usize) -> Result<usize> {
        let body_start = open + 2;
        let close = self.find(BLOCK_CLOSE, body_start).ok_or_else(|| {
            CodegenError::UnterminatedComment {
                name: self.name.to_string(),
                line: line_of(self.source, open),
            }
        })?;

        for line in self.source[body_start..close].split('\n') {
            let line = line.trim();
            let line = line.strip_prefix('*').map(str::trim).unwrap_or(line);
            if !line.is_empty() {
                self.pending.push(line.to_string());
            }
        }
        Ok(close + BLOCK_CLOSE.len())
    }

    /// Collect a `//` comment that follows a trailing block comment on the
    /// same line, unless a `}` comes first. Returns where scanning resumes.
    fn rest_of_comment_line(&mut self, after: usize) -> usize {
        let line_end = self.find("\n", after).unwrap_or(self.source.len());
        let close = self.find("}", after).filter(|&c| c < line_end);
        match self.find("//", after).filter(|&at| at < line_end) {
            Some(at) if close.is_none_or(|c| at < c) => {
                self.pending
                    .push(self.source[at + 2..line_end].trim().to_string());
                self.past_line(at)
            }
            _ => after,
        }
    }
}

fn is_option(statement: &str) -> bool {
    statement
        .strip_prefix("option")
        .is_some_and(|rest| rest.starts_with(char::is_whitespace))
}

fn is_ident_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

/// Offset just past the `enum <name>` header, skipping longer names that
/// merely start with `name`.
fn find_header(source: &str, enum_name: &str) -> Option<usize> {
    let needle = format!("enum {enum_name}");
    let mut from = 0;
    while let Some(found) = source[from..].find(&needle) {
        let start = from + found;
        let end = start + needle.len();
        let before_ok = source[..start]
            .chars()
            .next_back()
            .is_none_or(|c| !is_ident_char(c));
        let after_ok = source[end..].chars().next().is_none_or(|c| !is_ident_char(c));
        if before_ok && after_ok {
            return Some(end);
        }
        from = start + 1;
    }
    None
}

/// Scan the block of `enum <enum_name>` in `source`, feeding every entry to
/// `sink` in source order and calling [`EntrySink::finished`] at the closing
/// brace.
///
/// Entries may already have been delivered when an error is returned for a
/// later part of the block; use [`extract_enum`] for all-or-nothing results.
pub fn scan_enum<S: EntrySink + ?Sized>(
    source: &str,
    enum_name: &str,
    sink: &mut S,
) -> Result<()> {
    let header = find_header(source, enum_name).ok_or_else(|| CodegenError::MissingEnum {
        name: enum_name.to_string(),
    })?;
    let header_line = line_of(source, header);

    let open = source[header..]
        .find('{')
        .map(|i| header + i)
        .ok_or_else(|| CodegenError::MissingOpenBrace {
            name: enum_name.to_string(),
            line: header_line,
        })?;

    Scanner {
        source,
        name: enum_name,
        cursor: open + 1,
        pending: Vec::new(),
    }
    .run(sink)
}

/// Extract all entries of `enum <enum_name>` from `source`.
///
/// # Example
///
/// ```
/// use proto_enum_codegen::extract_enum;
///
/// let source = "enum Color {\n  // The default\n  NONE = 0;\n  darkRed = 1; // Deep red\n}\n";
/// let entries = extract_enum(source, "Color").unwrap();
///
/// assert_eq!(entries.len(), 2);
/// assert_eq!(entries[0].normalized_name, "NONE");
/// assert_eq!(entries[0].doc_lines, vec!["The default"]);
/// assert_eq!(entries[1].normalized_name, "DARK_RED");
/// assert_eq!(entries[1].doc_lines, vec!["Deep red"]);
/// ```
pub fn extract_enum(source: &str, enum_name: &str) -> Result<Vec<EnumEntry>> {
    let mut entries: Vec<EnumEntry> = Vec::new();
    scan_enum(source, enum_name, &mut entries)?;
    Ok(entries)
}

impl CodeGenerator {
    /// Extract the generator's proto enum from a proto source string and add
    /// every entry to the sections.
    ///
    /// Nothing is added when the block cannot be scanned completely.
    pub fn add_source_str(&mut self, source: &str) -> Result<&mut Self> {
        let entries = extract_enum(source, self.proto_enum())?;
        Ok(self.add_entries(&entries))
    }

    /// Read a proto file and extract the generator's proto enum from it.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let mut codegen = CodeGenerator::new("ResponseCodeEnum");
    /// codegen.add_source_file("services/ResponseCode.proto")?;
    /// codegen.write_to_file("Status.java")?;
    /// ```
    pub fn add_source_file(&mut self, path: impl AsRef<Path>) -> Result<&mut Self> {
        let path = path.as_ref();
        let source = fs::read_to_string(path)?;
        debug!(path = %path.display(), enum_name = self.proto_enum(), "scanning proto file");
        self.add_source_str(&source)
    }
}
