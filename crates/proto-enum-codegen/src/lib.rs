//! # proto-enum-codegen
//!
//! Java enum generator for protobuf enum blocks. This crate pulls the entries of
//! one `enum` out of a `.proto` file and renders them as Java enum constants
//! that wrap the protobuf-generated enum, keeping the documentation of every
//! entry and generating the lookup switches in both directions.
//!
//! ## Features
//!
//! - Hand-written scanner for `enum Name { ... }` blocks, no protobuf grammar needed
//! - Leading `//` comments, trailing comments and `/* ... */` blocks attach to
//!   the entry they document
//! - Constant names normalized to upper snake case (`tokenId` -> `TOKEN_ID`)
//! - Named section buffers spliced between fixed boilerplate
//!
//! ## Quick Start
//!
//! ```rust
//! use proto_enum_codegen::{CodeGenerator, Section};
//!
//! let proto = r#"
//! enum ResponseCodeEnum {
//!     OK = 0; // The transaction passed the precheck validations.
//!     /**
//!      * Insufficient balance & fees
//!      */
//!     INSUFFICIENT_PAYER_BALANCE = 10;
//! }
//! "#;
//!
//! let mut codegen = CodeGenerator::new("ResponseCodeEnum");
//! codegen
//!     .push_text("public enum Status {\n")
//!     .push_section(Section::Constants)
//!     .push_text("    static Status valueOf(ResponseCodeEnum code) {\n        switch (code) {\n")
//!     .push_section(Section::ValueOf)
//!     .push_text("        }\n    }\n}\n");
//!
//! codegen.add_source_str(proto).unwrap();
//!
//! let code = codegen.generate();
//! assert!(code.contains("     * Insufficient balance and fees\n"));
//! assert!(code.contains("    INSUFFICIENT_PAYER_BALANCE(ResponseCodeEnum.INSUFFICIENT_PAYER_BALANCE);\n"));
//! assert!(code.contains("            case OK:\n                return OK;\n"));
//! ```
//!
//! Or straight from a file:
//!
//! ```no_run
//! use proto_enum_codegen::{CodeGenerator, Section};
//!
//! fn main() -> proto_enum_codegen::Result<()> {
//!     CodeGenerator::new("HederaFunctionality")
//!         .push_section(Section::Constants)
//!         .add_source_file("services/BasicTypes.proto")?
//!         .write_to_file("RequestType.java")
//! }
//! ```
//!
//! ## Rendering
//!
//! | Section | Per entry |
//! |---------|-----------|
//! | `Constants` | Javadoc block, then `NAME(ProtoEnum.original),` (last one ends with `;`) |
//! | `ValueOf` | `case original:` / `return NAME;` |
//! | `ToString` | `case NAME:` / `return "NAME";` |

mod error;
mod extractor;
mod generator;
mod normalize;
pub mod rewrite;
mod types;

pub use error::{CodegenError, Result};
pub use extractor::{EntrySink, extract_enum, scan_enum};
pub use generator::CodeGenerator;
pub use normalize::normalize;
pub use types::{EnumEntry, Fragment, Section};
