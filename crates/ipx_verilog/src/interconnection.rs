//! SystemVerilog interface instantiations for interconnections.

use crate::writer::Writer;

/// Writes `<interface_type> <name>();`.
pub struct VerilogInterconnectionWriter {
    interface_type: String,
    name: String,
}

impl VerilogInterconnectionWriter {
    /// Creates a writer instantiating `interface_type` as `name`.
    pub fn new(interface_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            interface_type: interface_type.into(),
            name: name.into(),
        }
    }
}

impl Writer for VerilogInterconnectionWriter {
    fn write(&self, out: &mut String) {
        out.push_str(&format!("    {} {}();\n", self.interface_type, self.name));
    }
}
