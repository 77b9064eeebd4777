//! Continuous assignments between ports and wires.

use crate::bounds::select;
use crate::writer::Writer;
use ipx_model::{MetaPort, MetaPortAssignment, PortDirection};

/// Writes the `assign` connecting one port slice to one wire slice.
///
/// On the encompassing component (`hierarchical`), `in` and `inout` ports
/// drive the wire and `out` ports are driven by it. On an instance the roles
/// are reversed: `out` and `inout` ports drive the wire. An assignment
/// without a wire ties a driven port to its default value, if it has one.
pub struct VerilogAssignmentWriter {
    port_name: String,
    assignment: MetaPortAssignment,
    direction: PortDirection,
    hierarchical: bool,
}

impl VerilogAssignmentWriter {
    /// Creates a writer for `assignment` of the port (or port wire) `port_name`.
    pub fn new(
        port_name: impl Into<String>,
        assignment: MetaPortAssignment,
        direction: PortDirection,
        hierarchical: bool,
    ) -> Self {
        Self {
            port_name: port_name.into(),
            assignment,
            direction,
            hierarchical,
        }
    }

    /// Returns `true` if the port is the source of the assignment.
    fn port_drives_wire(&self) -> bool {
        match (self.hierarchical, self.direction) {
            (true, PortDirection::In | PortDirection::InOut) => true,
            (true, PortDirection::Out) => false,
            (false, PortDirection::Out | PortDirection::InOut) => true,
            (false, PortDirection::In) => false,
        }
    }

    fn port_ref(&self) -> String {
        format!(
            "{}{}",
            self.port_name,
            select(self.assignment.physical_bounds.as_ref())
        )
    }

    fn source(&self, text: String) -> String {
        if self.assignment.invert {
            format!("~{text}")
        } else {
            text
        }
    }
}

impl Writer for VerilogAssignmentWriter {
    fn write(&self, out: &mut String) {
        let (dest, src) = match &self.assignment.wire {
            Some(wire) => {
                let wire_ref = format!("{wire}{}", select(self.assignment.logical_bounds.as_ref()));
                if self.port_drives_wire() {
                    (wire_ref, self.port_ref())
                } else {
                    (self.port_ref(), wire_ref)
                }
            }
            None => {
                let default = self.assignment.default_value.trim();
                if self.port_drives_wire() || default.is_empty() {
                    return;
                }
                (self.port_ref(), default.to_string())
            }
        };
        out.push_str(&format!("    assign {dest} = {};\n", self.source(src)));
    }
}

/// Ties an unconnected output of the encompassing component to its default value.
pub struct VerilogTopDefaultWriter {
    port: MetaPort,
}

impl VerilogTopDefaultWriter {
    /// Creates a writer for `port`; nothing is written unless it is an
    /// output with a default value.
    pub fn new(port: MetaPort) -> Self {
        Self { port }
    }
}

impl Writer for VerilogTopDefaultWriter {
    fn write(&self, out: &mut String) {
        let default = self.port.default_value.trim();
        if self.port.direction != PortDirection::Out || default.is_empty() {
            return;
        }
        out.push_str(&format!("    assign {} = {default};\n", self.port.name));
    }
}
