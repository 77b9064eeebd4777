//! Wire declarations.

use crate::bounds::range;
use crate::writer::Writer;
use ipx_model::Bounds;

/// Writes `wire [l:r] name;`.
pub struct VerilogWireWriter {
    name: String,
    bounds: Option<Bounds>,
}

impl VerilogWireWriter {
    /// Creates a wire writer; `None` or blank bounds declare a single bit.
    pub fn new(name: impl Into<String>, bounds: Option<Bounds>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

impl Writer for VerilogWireWriter {
    fn write(&self, out: &mut String) {
        out.push_str(&format!(
            "    wire {}{};\n",
            range(self.bounds.as_ref()),
            self.name
        ));
    }
}
