//! Structural Verilog generation from resolved IP-XACT components and designs.
//!
//! Output is built as a tree of small [`Writer`]s, each responsible for one
//! construct (a comment, a wire, an assignment, an instance, the module
//! declaration). [`VerilogWriterFactory`] derives that tree from a
//! [`MetaComponent`](ipx_model::MetaComponent) or
//! [`MetaDesign`](ipx_model::MetaDesign) and returns it as a
//! [`VerilogDocument`], which serializes the writers in a fixed order.
//!
//! Regenerating a component keeps the hand-written text below the
//! [`IMPLEMENTATION_TAG`] line and anything after `endmodule`.

#![warn(missing_docs)]

pub mod assignment;
mod bounds;
pub mod component;
pub mod document;
pub mod error;
pub mod factory;
pub mod header;
pub mod instance;
pub mod interconnection;
pub mod library;
pub mod sorter;
pub mod syntax;
pub mod wire;
pub mod writer;

pub use assignment::{VerilogAssignmentWriter, VerilogTopDefaultWriter};
pub use component::ComponentVerilogWriter;
pub use document::VerilogDocument;
pub use error::GenerationError;
pub use factory::{GenerationSettings, VerilogWriterFactory};
pub use header::VerilogHeaderWriter;
pub use instance::ComponentInstanceVerilogWriter;
pub use interconnection::VerilogInterconnectionWriter;
pub use library::{LibraryInterface, LibraryPaths};
pub use syntax::{find_implementation, ImplementationRegions, IMPLEMENTATION_TAG};
pub use wire::VerilogWireWriter;
pub use writer::{CommentWriter, TextBodyWriter, Writer, WriterGroup};
