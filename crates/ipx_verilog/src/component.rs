//! The module declaration of the generated component.

use crate::bounds::range;
use crate::sorter::{interface_heading, sort_ports};
use crate::syntax::IMPLEMENTATION_TAG;
use crate::writer::{TextBodyWriter, Writer};
use ipx_model::{MetaComponent, MetaPort, Parameter};

/// Writes `module ... endmodule` for a component.
///
/// The declaration lists the component's parameters and its ports sorted by
/// interface, direction and name. Body writers supplied to
/// [`write_with_body`](Self::write_with_body) follow the port list, each
/// separated by a blank line. The implementation tag and any preserved
/// implementation come last, then `endmodule` and the preserved post-module
/// text.
pub struct ComponentVerilogWriter {
    module_name: String,
    parameters: Vec<Parameter>,
    ports: Vec<MetaPort>,
    implementation: Option<TextBodyWriter>,
    post_module: Option<TextBodyWriter>,
}

impl ComponentVerilogWriter {
    /// Creates a writer for the module declaration of `component`.
    pub fn new(component: &MetaComponent) -> Self {
        Self {
            module_name: component.module_name.clone(),
            parameters: component.parameters.clone(),
            ports: sort_ports(&component.ports).into_iter().cloned().collect(),
            implementation: None,
            post_module: None,
        }
    }

    /// Sets the hand-written text placed after the implementation tag.
    pub fn set_implementation(&mut self, writer: TextBodyWriter) {
        self.implementation = Some(writer);
    }

    /// Sets the text placed after `endmodule`.
    pub fn set_post_module(&mut self, writer: TextBodyWriter) {
        self.post_module = Some(writer);
    }

    /// Returns the preserved implementation text, if any.
    pub fn implementation(&self) -> Option<&str> {
        self.implementation.as_ref().map(TextBodyWriter::text)
    }

    /// Returns the preserved post-module text, if any.
    pub fn post_module(&self) -> Option<&str> {
        self.post_module.as_ref().map(TextBodyWriter::text)
    }

    /// Writes the module with `body` between the port list and the implementation.
    pub fn write_with_body(&self, out: &mut String, body: &[&dyn Writer]) {
        self.write_declaration(out);
        for writer in body {
            let mut text = String::new();
            writer.write(&mut text);
            if !text.is_empty() {
                out.push('\n');
                out.push_str(&text);
            }
        }
        out.push('\n');
        out.push_str(IMPLEMENTATION_TAG);
        out.push('\n');
        if let Some(implementation) = &self.implementation {
            implementation.write(out);
        }
        out.push_str("endmodule\n");
        if let Some(post_module) = &self.post_module {
            post_module.write(out);
        }
    }

    fn write_declaration(&self, out: &mut String) {
        out.push_str("module ");
        out.push_str(&self.module_name);
        self.write_parameters(out);
        self.write_ports(out);
    }

    fn write_parameters(&self, out: &mut String) {
        let declared: Vec<&Parameter> = self
            .parameters
            .iter()
            .filter(|p| !p.name.trim().is_empty())
            .collect();
        if declared.is_empty() {
            return;
        }
        out.push_str(" #(\n");
        for (i, parameter) in declared.iter().enumerate() {
            let vector = parameter
                .vectors
                .first()
                .map(|v| format!("[{}:{}] ", v.left.trim(), v.right.trim()))
                .unwrap_or_default();
            out.push_str(&format!(
                "    parameter {vector}{} = {}",
                parameter.name, parameter.value
            ));
            if i + 1 < declared.len() {
                out.push(',');
            }
            if !parameter.description.is_empty() {
                out.push_str(&format!(
                    " // {}",
                    parameter.description.lines().next().unwrap_or_default()
                ));
            }
            out.push('\n');
        }
        out.push(')');
    }

    fn write_ports(&self, out: &mut String) {
        if self.ports.is_empty() {
            out.push_str(" ();\n");
            return;
        }
        out.push_str(" (\n");
        let mut current: Option<Option<&str>> = None;
        for (i, port) in self.ports.iter().enumerate() {
            let interface = port.interface.as_deref();
            if current != Some(interface) {
                if current.is_some() {
                    out.push('\n');
                }
                out.push_str(&format!("    // {}\n", interface_heading(interface)));
                current = Some(interface);
            }
            out.push_str(&format!(
                "    {:<6} {}{}",
                port.direction.keyword(),
                range(port.vector_bounds.as_ref()),
                port.name
            ));
            if i + 1 < self.ports.len() {
                out.push(',');
            }
            if !port.description.is_empty() {
                out.push_str(&format!(
                    " // {}",
                    port.description.lines().next().unwrap_or_default()
                ));
            }
            out.push('\n');
        }
        out.push_str(");\n");
    }
}

impl Writer for ComponentVerilogWriter {
    fn write(&self, out: &mut String) {
        self.write_with_body(out, &[]);
    }
}
