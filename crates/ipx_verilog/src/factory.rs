//! Builds the writer tree of a component or design.

use crate::assignment::{VerilogAssignmentWriter, VerilogTopDefaultWriter};
use crate::component::ComponentVerilogWriter;
use crate::document::VerilogDocument;
use crate::error::GenerationError;
use crate::header::VerilogHeaderWriter;
use crate::instance::{port_wire_name, ComponentInstanceVerilogWriter};
use crate::interconnection::VerilogInterconnectionWriter;
use crate::library::LibraryInterface;
use crate::syntax::read_implementation;
use crate::wire::VerilogWireWriter;
use crate::writer::{CommentWriter, TextBodyWriter, WriterGroup};
use ipx_model::{MetaComponent, MetaDesign, MetaInstance};
use std::path::Path;

const BODY_INDENT: usize = 4;

/// Values stamped into generated file headers and generation switches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerationSettings {
    /// The user named in the header.
    pub user: String,
    /// Version of the tool.
    pub tool_version: String,
    /// Version of the generator.
    pub generator_version: String,
    /// Instantiate SystemVerilog interfaces for typed interconnections.
    pub generate_interfaces: bool,
}

impl Default for GenerationSettings {
    fn default() -> Self {
        Self {
            user: String::new(),
            tool_version: env!("CARGO_PKG_VERSION").to_string(),
            generator_version: env!("CARGO_PKG_VERSION").to_string(),
            generate_interfaces: false,
        }
    }
}

/// Creates [`VerilogDocument`]s for components and designs.
pub struct VerilogWriterFactory<'a> {
    library: &'a dyn LibraryInterface,
    settings: GenerationSettings,
}

impl<'a> VerilogWriterFactory<'a> {
    /// Creates a factory resolving document paths through `library`.
    pub fn new(library: &'a dyn LibraryInterface, settings: GenerationSettings) -> Self {
        Self { library, settings }
    }

    /// Returns the name of the generated language.
    pub fn language(&self) -> &'static str {
        "Verilog"
    }

    /// Returns the settings used for headers.
    pub fn settings(&self) -> &GenerationSettings {
        &self.settings
    }

    /// Prepares the document of a single component.
    ///
    /// If `<output_path>/<module>.v` exists, its implementation and
    /// post-module text are carried into the new document. A file that does
    /// not contain a complete declaration of the module is an error.
    pub fn prepare_component(
        &self,
        output_path: &Path,
        component: &MetaComponent,
    ) -> Result<VerilogDocument, GenerationError> {
        let mut document = self.document_for(component);
        self.preserve_implementation(output_path, component, &mut document)?;
        Ok(document)
    }

    /// Prepares the document of a design like [`prepare_design`](Self::prepare_design),
    /// carrying over the hand-written regions of `<output_path>/<top>.v` the
    /// way [`prepare_component`](Self::prepare_component) does.
    pub fn prepare_design_at(
        &self,
        output_path: &Path,
        design: &MetaDesign,
    ) -> Result<VerilogDocument, GenerationError> {
        let mut document = self.prepare_design(design);
        self.preserve_implementation(output_path, &design.top, &mut document)?;
        Ok(document)
    }

    /// Prepares the document of a design: the top component with its
    /// wires, assignments, and instances.
    pub fn prepare_design(&self, design: &MetaDesign) -> VerilogDocument {
        let mut document = self.document_for(&design.top);

        if self.settings.generate_interfaces {
            for interconnection in &design.interconnections {
                if let Some(interface_type) = &interconnection.interface_type {
                    document
                        .interconnection_writers
                        .add(VerilogInterconnectionWriter::new(
                            interface_type.clone(),
                            interconnection.name.clone(),
                        ));
                }
            }
        }

        for interconnection in &design.interconnections {
            if interconnection.wires.is_empty() {
                continue;
            }
            document
                .connection_wire_writers
                .add(comment(format!("{} wires:", interconnection.name)));
            for wire in &interconnection.wires {
                document
                    .connection_wire_writers
                    .add(VerilogWireWriter::new(wire.name.clone(), wire.bounds.clone()));
            }
        }

        if !design.ad_hoc_wires.is_empty() {
            document.ad_hoc_wire_writers.add(comment("Ad-hoc wires:"));
            for wire in &design.ad_hoc_wires {
                document
                    .ad_hoc_wire_writers
                    .add(VerilogWireWriter::new(wire.name.clone(), wire.bounds.clone()));
            }
        }

        self.add_top_assignments(&mut document, &design.top);
        for instance in &design.instances {
            add_instance_wires(&mut document, instance);
        }
        for instance in &design.instances {
            document.instance_groups.push(instance_group(instance));
        }

        log::debug!(
            "prepared design {} with {} instances and {} interconnections",
            design.top.module_name,
            design.instances.len(),
            design.interconnections.len()
        );
        document
    }

    fn preserve_implementation(
        &self,
        output_path: &Path,
        component: &MetaComponent,
        document: &mut VerilogDocument,
    ) -> Result<(), GenerationError> {
        let path = output_path.join(file_name(component));
        let regions = read_implementation(&path, &component.module_name).map_err(|reason| {
            GenerationError::Implementation {
                path: path.clone(),
                reason,
            }
        })?;
        log::debug!(
            "recovered {} bytes of implementation for {}",
            regions.implementation.len(),
            component.module_name
        );
        document
            .top_writer
            .set_implementation(TextBodyWriter::new(regions.implementation));
        document
            .top_writer
            .set_post_module(TextBodyWriter::new(regions.post_module));
        Ok(())
    }

    fn add_top_assignments(&self, document: &mut VerilogDocument, top: &MetaComponent) {
        if !top.ports.is_empty() {
            document.top_assignment_writers.add(comment(
                "Assignments for the ports of the encompassing component:",
            ));
        }
        for port in &top.ports {
            if port.down_assignments.is_empty() {
                document
                    .top_default_writers
                    .add(VerilogTopDefaultWriter::new(port.clone()));
                continue;
            }
            for assignment in &port.down_assignments {
                document.top_assignment_writers.add(VerilogAssignmentWriter::new(
                    port.name.clone(),
                    assignment.clone(),
                    port.direction,
                    true,
                ));
            }
        }
    }

    fn document_for(&self, component: &MetaComponent) -> VerilogDocument {
        let file_name = file_name(component);
        let header = VerilogHeaderWriter {
            file_name: file_name.clone(),
            vlnv: component.vlnv.clone(),
            xml_path: self.library.path_of(&component.vlnv),
            user: self.settings.user.clone(),
            description: component.description.clone(),
            tool_version: self.settings.tool_version.clone(),
            generator_version: self.settings.generator_version.clone(),
        };
        VerilogDocument::new(
            file_name,
            component.vlnv.clone(),
            header,
            ComponentVerilogWriter::new(component),
        )
    }
}

fn file_name(component: &MetaComponent) -> String {
    format!("{}.v", component.module_name)
}

fn comment(text: impl Into<String>) -> CommentWriter {
    CommentWriter::new(text).with_indent(BODY_INDENT)
}

/// Adds the port wires and their assignments of one instance.
fn add_instance_wires(document: &mut VerilogDocument, instance: &MetaInstance) {
    let ports = &instance.component.ports;
    if ports.is_empty() {
        return;
    }
    let name = &instance.instance_name;
    document
        .port_wire_writers
        .add(comment(format!("{name} port wires:")));
    document
        .instance_assignment_writers
        .add(comment(format!("{name} assignments:")));

    for port in ports {
        if port.up_assignments.is_empty() {
            continue;
        }
        let wire = port_wire_name(name, &port.name);
        document
            .port_wire_writers
            .add(VerilogWireWriter::new(wire.clone(), port.vector_bounds.clone()));
        for assignment in &port.up_assignments {
            document
                .instance_assignment_writers
                .add(VerilogAssignmentWriter::new(
                    wire.clone(),
                    assignment.clone(),
                    port.direction,
                    false,
                ));
        }
    }
}

fn instance_group(instance: &MetaInstance) -> WriterGroup {
    let mut header = String::new();
    if !instance.description.is_empty() {
        header.push_str(&instance.description);
        header.push('\n');
    }
    header.push_str(&format!("IP-XACT VLNV: {}", instance.component.vlnv));

    let mut group = WriterGroup::new();
    group.add(comment(header));
    group.add(ComponentInstanceVerilogWriter::new(instance));
    group
}
