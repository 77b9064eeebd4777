//! The banner comment at the top of a generated file.

use crate::writer::Writer;
use ipx_common::Vlnv;
use std::path::PathBuf;

const RULE_WIDTH: usize = 77;

/// Writes the file banner identifying the generated file and its source.
pub struct VerilogHeaderWriter {
    /// Name of the generated file.
    pub file_name: String,
    /// The component the file was generated from.
    pub vlnv: Vlnv,
    /// Path of the component's IP-XACT document, if the library knows it.
    pub xml_path: Option<PathBuf>,
    /// The user running the generator.
    pub user: String,
    /// Description of the component.
    pub description: String,
    /// Version of the tool.
    pub tool_version: String,
    /// Version of the generator.
    pub generator_version: String,
}

impl VerilogHeaderWriter {
    fn field(out: &mut String, label: &str, value: &str) {
        Self::line(out, &format!("// {label:<14}: {value}"));
    }

    fn line(out: &mut String, text: &str) {
        out.push_str(text.trim_end());
        out.push('\n');
    }
}

impl Writer for VerilogHeaderWriter {
    fn write(&self, out: &mut String) {
        let rule = format!("//{}\n", "-".repeat(RULE_WIDTH));
        out.push_str(&rule);
        Self::field(out, "File", &self.file_name);

        let mut description = self.description.lines();
        Self::field(out, "Description", description.next().unwrap_or(""));
        for line in description {
            Self::line(out, &format!("//                 {line}"));
        }

        Self::field(out, "Created by", &self.user);
        Self::field(out, "Tool", &format!("ipxgen {}", self.tool_version));
        Self::field(
            out,
            "Plugin",
            &format!("Verilog generator {}", self.generator_version),
        );
        out.push_str("//\n");
        out.push_str(&format!(
            "// This file was generated based on IP-XACT component {}\n",
            self.vlnv
        ));
        let xml_path = match &self.xml_path {
            Some(path) => path.display().to_string(),
            None => "unknown".to_string(),
        };
        out.push_str(&format!("// whose XML file is {xml_path}\n"));
        out.push_str(&rule);
        out.push('\n');
    }
}
