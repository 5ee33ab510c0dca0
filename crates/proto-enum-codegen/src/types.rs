//! Type definitions shared by the extractor and the generator.

use crate::normalize::normalize;

/// One `NAME = value;` entry of a protobuf enum block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumEntry {
    /// Identifier exactly as written in the proto file.
    pub original_name: String,
    /// Upper-snake-case constant name derived from `original_name`.
    pub normalized_name: String,
    /// Documentation attached to the entry, in source order.
    pub doc_lines: Vec<String>,
}

impl EnumEntry {
    /// Create an entry, deriving the constant name from `original_name`.
    pub fn new(original_name: impl Into<String>, doc_lines: Vec<String>) -> Self {
        let original_name = original_name.into();
        let normalized_name = normalize(&original_name);
        Self {
            original_name,
            normalized_name,
            doc_lines,
        }
    }
}

/// Named output buffer of the generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Section {
    /// Enum constant declarations with their Javadoc.
    Constants,
    /// `case` arms mapping the proto enum value back to the constant.
    ValueOf,
    /// `case` arms rendering a constant as its name.
    ToString,
}

/// Piece of the generated file, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fragment {
    /// Fixed boilerplate copied verbatim.
    Text(String),
    /// Contents of a section buffer.
    Section(Section),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entry_new_normalizes() {
        let entry = EnumEntry::new("tokenMint", vec!["Mint tokens".to_string()]);
        assert_eq!(entry.original_name, "tokenMint");
        assert_eq!(entry.normalized_name, "TOKEN_MINT");
        assert_eq!(entry.doc_lines, vec!["Mint tokens"]);
    }
}
