//! Fixed find/replace tables applied to comments and proto files.

/// Ordered `(from, to)` pairs.
pub type Replacements = [(&'static str, &'static str)];

/// Rewrites applied to every documentation line before it lands in Javadoc.
pub const COMMENT_REPLACEMENTS: &Replacements = &[("&", "and"), ("<tt>", ""), ("</tt>", "")];

/// Rewrites applied to proto files copied into the SDK.
pub const PROTO_REPLACEMENTS: &Replacements = &[
    (
        "option java_package = \"com.hederahashgraph.api.proto.java\";",
        "option java_package = \"com.hedera.hashgraph.sdk.proto\";",
    ),
    (
        "option java_package = \"com.hederahashgraph.service.proto.java\";",
        "option java_package = \"com.hedera.hashgraph.sdk.proto\";",
    ),
];

/// Apply every replacement in order, each one to the result of the previous.
///
/// ```
/// use proto_enum_codegen::rewrite::{apply_replacements, COMMENT_REPLACEMENTS};
///
/// let line = apply_replacements("read <tt>A & B</tt>", COMMENT_REPLACEMENTS);
/// assert_eq!(line, "read A and B");
/// ```
pub fn apply_replacements(input: &str, replacements: &Replacements) -> String {
    replacements
        .iter()
        .fold(input.to_string(), |acc, (from, to)| acc.replace(from, to))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_comment_replacements() {
        assert_eq!(
            apply_replacements("<tt>x</tt> & <tt>y</tt>", COMMENT_REPLACEMENTS),
            "x and y"
        );
        assert_eq!(apply_replacements("plain", COMMENT_REPLACEMENTS), "plain");
    }

    #[test]
    fn test_proto_replacements() {
        let proto = "syntax = \"proto3\";\n\
                     option java_package = \"com.hederahashgraph.api.proto.java\";\n\
                     option java_multiple_files = true;\n";
        let rewritten = apply_replacements(proto, PROTO_REPLACEMENTS);
        assert!(rewritten.contains("option java_package = \"com.hedera.hashgraph.sdk.proto\";"));
        assert!(!rewritten.contains("hederahashgraph"));
        assert!(rewritten.contains("java_multiple_files"));
    }

    #[test]
    fn test_order_matters() {
        let table: &Replacements = &[("a", "b"), ("b", "c")];
        assert_eq!(apply_replacements("a", table), "c");
    }
}
