//! The Java enums generated from the protobufs and their boilerplate.

use anyhow::{Context, Result, anyhow};
use proto_enum_codegen::{CodeGenerator, Section};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// One generated Java enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EnumTarget {
    /// Java class, also the output file stem.
    pub class_name: &'static str,
    /// Proto file holding the enum, relative to the services directory.
    pub proto_file: &'static str,
    /// Enum block extracted from `proto_file`.
    pub proto_enum: &'static str,
    /// Whether the class gets a generated `toString` switch.
    pub with_to_string: bool,
}

pub const REQUEST_TYPE: EnumTarget = EnumTarget {
    class_name: "RequestType",
    proto_file: "BasicTypes.proto",
    proto_enum: "HederaFunctionality",
    with_to_string: true,
};

pub const STATUS: EnumTarget = EnumTarget {
    class_name: "Status",
    proto_file: "ResponseCode.proto",
    proto_enum: "ResponseCodeEnum",
    with_to_string: false,
};

pub const TARGETS: [EnumTarget; 2] = [REQUEST_TYPE, STATUS];

fn embedded_premade(class_name: &str, index: usize) -> Option<&'static str> {
    let text = match (class_name, index) {
        ("RequestType", 0) => include_str!("../premade/RequestType-0.txt"),
        ("RequestType", 2) => include_str!("../premade/RequestType-2.txt"),
        ("RequestType", 4) => include_str!("../premade/RequestType-4.txt"),
        ("RequestType", 6) => include_str!("../premade/RequestType-6.txt"),
        ("Status", 0) => include_str!("../premade/Status-0.txt"),
        ("Status", 2) => include_str!("../premade/Status-2.txt"),
        ("Status", 4) => include_str!("../premade/Status-4.txt"),
        _ => return None,
    };
    Some(text)
}

impl EnumTarget {
    /// Boilerplate slots of the output, numbered by their position in the file.
    fn premade_indices(&self) -> &'static [usize] {
        if self.with_to_string {
            &[0, 2, 4, 6]
        } else {
            &[0, 2, 4]
        }
    }

    /// Load one boilerplate fragment, preferring `premade_dir` when given.
    pub fn premade(&self, index: usize, premade_dir: Option<&Path>) -> Result<String> {
        if let Some(dir) = premade_dir {
            let path = dir.join(format!("{}-{index}.txt", self.class_name));
            if path.is_file() {
                debug!(path = %path.display(), "using premade override");
                return fs::read_to_string(&path)
                    .with_context(|| format!("failed to read {}", path.display()));
            }
        }
        embedded_premade(self.class_name, index)
            .map(str::to_string)
            .ok_or_else(|| anyhow!("no premade fragment {index} for {}", self.class_name))
    }

    /// A generator with this target's layout: boilerplate interleaved with
    /// the constant, `valueOf` and optional `toString` sections.
    pub fn codegen(&self, premade_dir: Option<&Path>) -> Result<CodeGenerator> {
        let mut sections = vec![Section::Constants, Section::ValueOf];
        if self.with_to_string {
            sections.push(Section::ToString);
        }

        let mut codegen = CodeGenerator::new(self.proto_enum);
        let indices = self.premade_indices();
        for (i, &index) in indices.iter().enumerate() {
            codegen.push_text(self.premade(index, premade_dir)?);
            if let Some(&section) = sections.get(i) {
                codegen.push_section(section);
            }
        }
        Ok(codegen)
    }

    /// Scan the proto file under `proto_in` and return the filled generator.
    pub fn generate(&self, proto_in: &Path, premade_dir: Option<&Path>) -> Result<CodeGenerator> {
        info!(class = self.class_name, "generating {}.java", self.class_name);
        let proto = proto_in.join(self.proto_file);
        let mut codegen = self.codegen(premade_dir)?;
        codegen.add_source_file(&proto).with_context(|| {
            format!(
                "failed to extract enum {} from {}",
                self.proto_enum,
                proto.display()
            )
        })?;
        Ok(codegen)
    }

    pub fn output_path(&self, java_out: &Path) -> PathBuf {
        java_out.join(format!("{}.java", self.class_name))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASIC_TYPES: &str = "syntax = \"proto3\";\n\
        \n\
        /**\n * The transactions and queries supported by Hedera Hashgraph.\n */\n\
        enum HederaFunctionality {\n\
        \x20   // UNSPECIFIED - Need to keep first value as unspecified\n\
        \x20   NONE = 0;\n\
        \x20   CryptoTransfer = 1; // Crypto transfer\n\
        \x20   TokenGetNftInfo = 2; // Get NFT info & metadata\n\
        }\n";

    #[test]
    fn test_layout_interleaves_sections() {
        let codegen = REQUEST_TYPE.codegen(None).unwrap();
        assert!(codegen.has_section(Section::Constants));
        assert!(codegen.has_section(Section::ValueOf));
        assert!(codegen.has_section(Section::ToString));

        let codegen = STATUS.codegen(None).unwrap();
        assert!(!codegen.has_section(Section::ToString));
    }

    #[test]
    fn test_missing_premade_fragment() {
        let err = STATUS.premade(6, None).unwrap_err();
        assert!(err.to_string().contains("no premade fragment 6 for Status"));
    }

    #[test]
    fn test_premade_override() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("Status-0.txt"), "// custom header\n").unwrap();

        assert_eq!(STATUS.premade(0, Some(dir.path())).unwrap(), "// custom header\n");
        // Fragments without an override fall back to the built-in text
        assert!(STATUS.premade(2, Some(dir.path())).unwrap().contains("static Status valueOf"));
    }

    #[test]
    fn test_generate_request_type() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("BasicTypes.proto"), BASIC_TYPES).unwrap();

        let code = REQUEST_TYPE.generate(dir.path(), None).unwrap().generate();

        assert!(code.starts_with("package com.hedera.hashgraph.sdk;\n"));
        assert!(code.contains(
            "    /**\n     * UNSPECIFIED - Need to keep first value as unspecified\n     */\n    NONE(HederaFunctionality.NONE),\n"
        ));
        assert!(code.contains("     * Get NFT info and metadata\n"));
        assert!(code.contains("    TOKEN_GET_NFT_INFO(HederaFunctionality.TokenGetNftInfo);\n\n    final HederaFunctionality code;"));
        assert!(code.contains("            case CryptoTransfer:\n                return CRYPTO_TRANSFER;\n"));
        assert!(code.contains("            case CRYPTO_TRANSFER:\n                return \"CRYPTO_TRANSFER\";\n"));
        assert!(code.ends_with("return \"<UNKNOWN>\";\n        }\n    }\n}\n"));
    }

    #[test]
    fn test_generate_missing_enum() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("ResponseCode.proto"), "enum Other {\n}\n").unwrap();

        let err = STATUS.generate(dir.path(), None).unwrap_err();
        assert!(format!("{err:#}").contains("enum `ResponseCodeEnum` not found"));
    }

    #[test]
    fn test_output_path() {
        assert_eq!(
            STATUS.output_path(Path::new("java/sdk")),
            PathBuf::from("java/sdk/Status.java")
        );
    }
}
