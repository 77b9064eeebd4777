//! A prepared output file and the fixed order its writers are serialized in.

use crate::component::ComponentVerilogWriter;
use crate::error::GenerationError;
use crate::header::VerilogHeaderWriter;
use crate::writer::{Writer, WriterGroup};
use ipx_common::Vlnv;
use std::fs;
use std::path::{Path, PathBuf};

/// The writer tree for one generated file.
///
/// The body groups are written between the module's port list and its
/// implementation tag, in field order, followed by one group per instance.
pub struct VerilogDocument {
    /// Name of the file, `<module>.v`.
    pub file_name: String,
    /// The component the file describes.
    pub vlnv: Vlnv,
    /// The file banner.
    pub header: VerilogHeaderWriter,
    /// The module declaration of the top component.
    pub top_writer: ComponentVerilogWriter,
    /// SystemVerilog interface instances for interconnections.
    pub interconnection_writers: WriterGroup,
    /// Wires of the interconnections.
    pub connection_wire_writers: WriterGroup,
    /// Wires of ad-hoc connections.
    pub ad_hoc_wire_writers: WriterGroup,
    /// Wires connected to instance ports.
    pub port_wire_writers: WriterGroup,
    /// Assignments of the top component's ports.
    pub top_assignment_writers: WriterGroup,
    /// Default values of unconnected top outputs.
    pub top_default_writers: WriterGroup,
    /// Assignments of instance port wires.
    pub instance_assignment_writers: WriterGroup,
    /// One group per instance: its header comment and its instantiation.
    pub instance_groups: Vec<WriterGroup>,
}

impl VerilogDocument {
    /// Creates a document with empty body groups.
    pub fn new(
        file_name: impl Into<String>,
        vlnv: Vlnv,
        header: VerilogHeaderWriter,
        top_writer: ComponentVerilogWriter,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            vlnv,
            header,
            top_writer,
            interconnection_writers: WriterGroup::new(),
            connection_wire_writers: WriterGroup::new(),
            ad_hoc_wire_writers: WriterGroup::new(),
            port_wire_writers: WriterGroup::new(),
            top_assignment_writers: WriterGroup::new(),
            top_default_writers: WriterGroup::new(),
            instance_assignment_writers: WriterGroup::new(),
            instance_groups: Vec::new(),
        }
    }

    /// Serializes the whole document.
    pub fn write(&self) -> String {
        let groups = [
            &self.interconnection_writers,
            &self.connection_wire_writers,
            &self.ad_hoc_wire_writers,
            &self.port_wire_writers,
            &self.top_assignment_writers,
            &self.top_default_writers,
            &self.instance_assignment_writers,
        ];
        let mut body: Vec<&dyn Writer> = Vec::new();
        for group in groups.into_iter().chain(&self.instance_groups) {
            body.push(group);
        }

        let mut out = String::new();
        self.header.write(&mut out);
        self.top_writer.write_with_body(&mut out, &body);
        out
    }

    /// Writes the document to `<dir>/<file_name>`, creating `dir` if needed.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, GenerationError> {
        fs::create_dir_all(dir).map_err(|source| GenerationError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
        let path = dir.join(&self.file_name);
        fs::write(&path, self.write()).map_err(|source| GenerationError::Io {
            path: path.clone(),
            source,
        })?;
        log::debug!("wrote {}", path.display());
        Ok(path)
    }
}
