//! Component instantiations inside a generated design.

use crate::sorter::{interface_heading, sort_ports};
use crate::writer::Writer;
use ipx_model::{MetaInstance, MetaPort, PortDirection};

/// Writes the instantiation of one component instance.
///
/// Parameters with a value are overridden by name. Each port is mapped to
/// the instance's port wire `<instance>_<port>` when it has up assignments;
/// an unconnected input with a default value is tied to that value; any
/// other port is left open.
pub struct ComponentInstanceVerilogWriter {
    instance_name: String,
    module_name: String,
    overrides: Vec<(String, String)>,
    connections: Vec<PortConnection>,
}

struct PortConnection {
    interface: Option<String>,
    port: String,
    expression: String,
}

impl ComponentInstanceVerilogWriter {
    /// Creates a writer for `instance`.
    pub fn new(instance: &MetaInstance) -> Self {
        let component = &instance.component;
        let overrides = component
            .parameters
            .iter()
            .filter(|p| !p.name.trim().is_empty() && !p.value.trim().is_empty())
            .map(|p| (p.name.clone(), p.value.clone()))
            .collect();
        let connections = sort_ports(&component.ports)
            .into_iter()
            .map(|port| PortConnection {
                interface: port.interface.clone(),
                port: port.name.clone(),
                expression: connection_for(&instance.instance_name, port),
            })
            .collect();
        Self {
            instance_name: instance.instance_name.clone(),
            module_name: component.module_name.clone(),
            overrides,
            connections,
        }
    }
}

/// Port wire name used for ports of an instance.
pub(crate) fn port_wire_name(instance: &str, port: &str) -> String {
    format!("{instance}_{port}")
}

fn connection_for(instance: &str, port: &MetaPort) -> String {
    if !port.up_assignments.is_empty() {
        port_wire_name(instance, &port.name)
    } else if port.direction == PortDirection::In && !port.default_value.trim().is_empty() {
        port.default_value.trim().to_string()
    } else {
        String::new()
    }
}

impl Writer for ComponentInstanceVerilogWriter {
    fn write(&self, out: &mut String) {
        out.push_str("    ");
        out.push_str(&self.module_name);
        if self.overrides.is_empty() {
            out.push(' ');
        } else {
            out.push_str(" #(\n");
            let lines: Vec<String> = self
                .overrides
                .iter()
                .map(|(name, value)| format!("        .{name}({value})"))
                .collect();
            out.push_str(&lines.join(",\n"));
            out.push_str(")\n    ");
        }
        out.push_str(&self.instance_name);

        if self.connections.is_empty() {
            out.push_str("();\n");
            return;
        }
        out.push_str("(\n");
        let mut current: Option<Option<&str>> = None;
        for (i, connection) in self.connections.iter().enumerate() {
            let interface = connection.interface.as_deref();
            if current != Some(interface) {
                out.push_str(&format!("        // {}\n", interface_heading(interface)));
                current = Some(interface);
            }
            out.push_str(&format!(
                "        .{}({})",
                connection.port, connection.expression
            ));
            out.push_str(if i + 1 < self.connections.len() {
                ",\n"
            } else {
                ");\n"
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipx_common::Vlnv;
    use ipx_model::{MetaComponent, MetaPortAssignment, Parameter};

    fn render(writer: &ComponentInstanceVerilogWriter) -> String {
        let mut out = String::new();
        writer.write(&mut out);
        out
    }

    fn instance() -> MetaInstance {
        let mut component = MetaComponent::new("uart", Vlnv::new("tut.fi", "ip", "uart", "1.0"));
        component.parameters = vec![Parameter::new("WIDTH", "16"), Parameter::new("UNSET", "")];
        let mut clk = MetaPort::new("clk", PortDirection::In);
        clk.up_assignments.push(MetaPortAssignment {
            wire: Some("clk_wire".to_string()),
            ..MetaPortAssignment::default()
        });
        let mut en = MetaPort::new("en", PortDirection::In);
        en.default_value = "1'b1".to_string();
        let mut irq = MetaPort::new("irq", PortDirection::Out);
        irq.default_value = "0".to_string();
        let mut data = MetaPort::new("data", PortDirection::Out);
        data.interface = Some("bus".to_string());
        component.ports = vec![clk, en, irq, data];
        MetaInstance {
            instance_name: "uart_0".to_string(),
            description: String::new(),
            component,
        }
    }

    #[test]
    fn full_instantiation() {
        let expected = "    uart #(
        .WIDTH(16))
    uart_0(
        // Interface: bus
        .data(),
        // These ports are not in any interface
        .clk(uart_0_clk),
        .en(1'b1),
        .irq());
";
        assert_eq!(render(&ComponentInstanceVerilogWriter::new(&instance())), expected);
    }

    #[test]
    fn no_parameters_no_ports() {
        let instance = MetaInstance {
            instance_name: "blank_0".to_string(),
            description: String::new(),
            component: MetaComponent::new("blank", Vlnv::new("v", "l", "blank", "1")),
        };
        assert_eq!(
            render(&ComponentInstanceVerilogWriter::new(&instance)),
            "    blank blank_0();\n"
        );
    }
}
