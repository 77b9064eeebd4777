//! In-memory model of the IP-XACT elements consumed by validation and HDL generation.
//!
//! The model is pre-resolved: every expression has already been evaluated
//! where the generator needs a concrete value, and port-to-wire assignments
//! are recorded on the ports themselves. Everything here is plain owned data
//! that deserializes from JSON; the validator and writer factory only borrow it.

#![warn(missing_docs)]

pub mod choice;
pub mod design;
pub mod parameter;
pub mod port;

pub use choice::{Choice, Enumeration};
pub use design::{MetaComponent, MetaDesign, MetaInstance, MetaInterconnection, MetaWire};
pub use parameter::{ElementKind, Parameter, ParameterType, Resolve, Vector};
pub use port::{Bounds, MetaPort, MetaPortAssignment, PortDirection};
