//! Java enum generator for extracted protobuf enum entries.

use crate::error::Result;
use crate::rewrite::{COMMENT_REPLACEMENTS, apply_replacements};
use crate::types::{EnumEntry, Fragment, Section};
use std::collections::BTreeMap;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

const INDENT: &str = "    ";

/// Code generator that renders enum entries into named section buffers and
/// splices them between fixed boilerplate.
#[derive(Debug, Clone)]
pub struct CodeGenerator {
    /// Proto enum wrapped by the generated constants, e.g. `ResponseCodeEnum`
    proto_enum: String,

    /// Boilerplate and sections in output order
    layout: Vec<Fragment>,

    /// Section buffers, only for sections present in the layout
    sections: BTreeMap<Section, String>,

    /// Entries rendered so far
    entry_count: usize,

    /// Whether the constant list has been terminated
    finished: bool,
}

impl CodeGenerator {
    /// Create a generator for constants wrapping `proto_enum`.
    ///
    /// The layout starts out empty; build it with [`push_text`](Self::push_text)
    /// and [`push_section`](Self::push_section).
    pub fn new(proto_enum: impl Into<String>) -> Self {
        Self {
            proto_enum: proto_enum.into(),
            layout: Vec::new(),
            sections: BTreeMap::new(),
            entry_count: 0,
            finished: false,
        }
    }

    /// Name of the proto enum this generator renders.
    pub fn proto_enum(&self) -> &str {
        &self.proto_enum
    }

    /// Append fixed boilerplate to the layout.
    pub fn push_text(&mut self, text: impl Into<String>) -> &mut Self {
        self.layout.push(Fragment::Text(text.into()));
        self
    }

    /// Append a section to the layout. Entries are rendered only into
    /// sections that are part of the layout.
    pub fn push_section(&mut self, section: Section) -> &mut Self {
        self.layout.push(Fragment::Section(section));
        self.sections.entry(section).or_default();
        self
    }

    /// Whether `section` is part of the layout.
    pub fn has_section(&self, section: Section) -> bool {
        self.sections.contains_key(&section)
    }

    /// Current contents of a section buffer.
    pub fn section(&self, section: Section) -> Option<&str> {
        self.sections.get(&section).map(String::as_str)
    }

    /// Number of entries added so far.
    pub fn entry_count(&self) -> usize {
        self.entry_count
    }

    /// Render one entry into every section of the layout.
    ///
    /// # Example
    ///
    /// ```
    /// use proto_enum_codegen::{CodeGenerator, EnumEntry, Section};
    ///
    /// let mut codegen = CodeGenerator::new("ResponseCodeEnum");
    /// codegen
    ///     .push_text("public enum Status {\n")
    ///     .push_section(Section::Constants)
    ///     .push_text("}\n");
    ///
    /// codegen.add_entry(&EnumEntry::new("OK", vec!["All good".to_string()]));
    /// let code = codegen.generate();
    ///
    /// assert!(code.contains("     * All good\n"));
    /// assert!(code.contains("    OK(ResponseCodeEnum.OK);\n"));
    /// ```
    pub fn add_entry(&mut self, entry: &EnumEntry) -> &mut Self {
        if self.finished {
            self.reopen();
        }

        let rendered: Vec<(Section, String)> = self
            .sections
            .keys()
            .map(|&section| (section, self.render(section, entry)))
            .collect();
        for (section, text) in rendered {
            if let Some(buffer) = self.sections.get_mut(&section) {
                buffer.push_str(&text);
            }
        }

        self.entry_count += 1;
        debug!(
            proto_enum = %self.proto_enum,
            constant = %entry.normalized_name,
            "rendered entry"
        );
        self
    }

    /// Render a batch of entries in order.
    pub fn add_entries(&mut self, entries: &[EnumEntry]) -> &mut Self {
        for entry in entries {
            self.add_entry(entry);
        }
        self.finish()
    }

    /// Terminate the constant list, turning the last `,` into `;`.
    ///
    /// Calling this more than once has no further effect.
    pub fn finish(&mut self) -> &mut Self {
        if self.finished {
            return self;
        }
        if let Some(constants) = self.sections.get_mut(&Section::Constants) {
            terminate_constants(constants);
        }
        self.finished = true;
        self
    }

    fn reopen(&mut self) {
        if let Some(constants) = self.sections.get_mut(&Section::Constants) {
            if let Some(stripped) = constants.strip_suffix(";\n\n") {
                let len = stripped.len();
                constants.truncate(len);
                if self.entry_count > 0 {
                    constants.push_str(",\n\n");
                }
            }
        }
        self.finished = false;
    }

    /// Generate the complete file as a string.
    pub fn generate(&self) -> String {
        if !self.finished {
            let mut finished = self.clone();
            finished.finish();
            return finished.generate();
        }

        let mut output = String::new();
        for fragment in &self.layout {
            match fragment {
                Fragment::Text(text) => output.push_str(text),
                Fragment::Section(section) => {
                    if let Some(buffer) = self.sections.get(section) {
                        output.push_str(buffer);
                    }
                }
            }
        }
        output
    }

    /// Write the generated code to a file.
    pub fn write_to_file(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let code = self.generate();
        fs::write(path, code)?;
        info!(
            path = %path.display(),
            proto_enum = %self.proto_enum,
            entries = self.entry_count,
            "wrote generated enum"
        );
        Ok(())
    }

    /// Write the generated code to a writer.
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        let code = self.generate();
        writer.write_all(code.as_bytes())?;
        Ok(())
    }

    fn render(&self, section: Section, entry: &EnumEntry) -> String {
        match section {
            Section::Constants => self.render_constant(entry),
            Section::ValueOf => render_value_of(entry),
            Section::ToString => render_to_string(entry),
        }
    }

    fn render_constant(&self, entry: &EnumEntry) -> String {
        let pad = indent(1);
        let mut output = self.render_javadoc(&entry.doc_lines, 1);
        output.push_str(&format!(
            "{pad}{}({}.{}),\n\n",
            entry.normalized_name, self.proto_enum, entry.original_name
        ));
        output
    }

    fn render_javadoc(&self, lines: &[String], level: usize) -> String {
        if lines.is_empty() {
            return String::new();
        }

        let pad = indent(level);
        let mut output = format!("{pad}/**\n");
        for line in lines {
            let line = apply_replacements(line, COMMENT_REPLACEMENTS);
            if line.is_empty() {
                output.push_str(&format!("{pad} *\n"));
            } else {
                output.push_str(&format!("{pad} * {line}\n"));
            }
        }
        output.push_str(&format!("{pad} */\n"));
        output
    }
}

fn indent(level: usize) -> String {
    INDENT.repeat(level)
}

fn render_value_of(entry: &EnumEntry) -> String {
    format!(
        "{}case {}:\n{}return {};\n",
        indent(3),
        entry.original_name,
        indent(4),
        entry.normalized_name
    )
}

fn render_to_string(entry: &EnumEntry) -> String {
    format!(
        "{}case {name}:\n{}return \"{name}\";\n",
        indent(3),
        indent(4),
        name = entry.normalized_name
    )
}

fn terminate_constants(constants: &mut String) {
    if let Some(stripped) = constants.strip_suffix(",\n\n") {
        let len = stripped.len();
        constants.truncate(len);
    }
    constants.push_str(";\n\n");
}
