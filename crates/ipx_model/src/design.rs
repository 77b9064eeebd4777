//! Components, instances, and the design graph that connects them.

use crate::choice::Choice;
use crate::parameter::Parameter;
use crate::port::{Bounds, MetaPort};
use ipx_common::Vlnv;
use serde::{Deserialize, Serialize};

/// A resolved wire declared in a design.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MetaWire {
    /// The wire name.
    pub name: String,
    /// The wire range; `None` for a single-bit wire.
    #[serde(default)]
    pub bounds: Option<Bounds>,
}

impl MetaWire {
    /// Creates a wire.
    pub fn new(name: impl Into<String>, bounds: Option<Bounds>) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }
}

/// A bus-level connection and the wires it was flattened into.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MetaInterconnection {
    /// The interconnection name.
    pub name: String,
    /// The wires carrying the connection.
    #[serde(default)]
    pub wires: Vec<MetaWire>,
    /// SystemVerilog interface type to instantiate for this connection.
    #[serde(default)]
    pub interface_type: Option<String>,
}

/// A component resolved for generation.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MetaComponent {
    /// The Verilog module name.
    pub module_name: String,
    /// The identity of the component document.
    pub vlnv: Vlnv,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Module parameters, with values as resolved for this use.
    #[serde(default)]
    pub parameters: Vec<Parameter>,
    /// Module ports.
    #[serde(default)]
    pub ports: Vec<MetaPort>,
    /// Choices referenced by the parameters.
    #[serde(default)]
    pub choices: Vec<Choice>,
}

impl MetaComponent {
    /// Creates a component with no parameters, ports, or choices.
    pub fn new(module_name: impl Into<String>, vlnv: Vlnv) -> Self {
        Self {
            module_name: module_name.into(),
            vlnv,
            description: String::new(),
            parameters: Vec::new(),
            ports: Vec::new(),
            choices: Vec::new(),
        }
    }
}

/// A named use of a component inside a design.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MetaInstance {
    /// The instance name.
    pub instance_name: String,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// The instantiated component, with parameter values and port
    /// assignments as resolved for this instance.
    pub component: MetaComponent,
}

/// A hierarchical design: a top component and its contents.
#[derive(Clone, PartialEq, Debug, Serialize, Deserialize)]
pub struct MetaDesign {
    /// The encompassing component.
    pub top: MetaComponent,
    /// Component instances, in declaration order.
    #[serde(default)]
    pub instances: Vec<MetaInstance>,
    /// Bus-level connections.
    #[serde(default)]
    pub interconnections: Vec<MetaInterconnection>,
    /// Wires of ad-hoc (port-to-port) connections.
    #[serde(default)]
    pub ad_hoc_wires: Vec<MetaWire>,
}
