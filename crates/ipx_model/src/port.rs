//! Resolved ports and their assignments to wires.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The direction of a port on a module boundary.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PortDirection {
    /// `input`
    In,
    /// `output`
    Out,
    /// `inout`
    InOut,
}

impl PortDirection {
    /// Returns the Verilog keyword for this direction.
    pub fn keyword(self) -> &'static str {
        match self {
            PortDirection::In => "input",
            PortDirection::Out => "output",
            PortDirection::InOut => "inout",
        }
    }
}

impl fmt::Display for PortDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PortDirection::In => f.write_str("in"),
            PortDirection::Out => f.write_str("out"),
            PortDirection::InOut => f.write_str("inout"),
        }
    }
}

/// A resolved `[left:right]` range.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Bounds {
    /// The left index, already evaluated.
    pub left: String,
    /// The right index, already evaluated.
    pub right: String,
}

impl Bounds {
    /// Creates bounds from two index strings.
    pub fn new(left: impl Into<String>, right: impl Into<String>) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
        }
    }

    /// Returns `true` if both indices are blank.
    pub fn is_empty(&self) -> bool {
        self.left.trim().is_empty() && self.right.trim().is_empty()
    }
}

/// A connection of (a slice of) a port to (a slice of) a wire.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct MetaPortAssignment {
    /// The wire the port is connected to; `None` for an unconnected port.
    pub wire: Option<String>,
    /// The slice of the wire.
    pub logical_bounds: Option<Bounds>,
    /// The slice of the port.
    pub physical_bounds: Option<Bounds>,
    /// Tie-off value used when there is no wire.
    pub default_value: String,
    /// Negate the driving side.
    pub invert: bool,
}

/// A port together with its resolved width and assignments.
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct MetaPort {
    /// The port name.
    pub name: String,
    /// The port direction.
    pub direction: PortDirection,
    /// The resolved vector range; `None` for a scalar port.
    #[serde(default)]
    pub vector_bounds: Option<Bounds>,
    /// Value used when the port is left unconnected.
    #[serde(default)]
    pub default_value: String,
    /// The bus interface the port belongs to, if any.
    #[serde(default)]
    pub interface: Option<String>,
    /// Free-form description.
    #[serde(default)]
    pub description: String,
    /// Assignments towards the enclosing design (used on instance ports).
    #[serde(default)]
    pub up_assignments: Vec<MetaPortAssignment>,
    /// Assignments into the design (used on top-level ports).
    #[serde(default)]
    pub down_assignments: Vec<MetaPortAssignment>,
}

impl MetaPort {
    /// Creates an unconnected port with no range.
    pub fn new(name: impl Into<String>, direction: PortDirection) -> Self {
        Self {
            name: name.into(),
            direction,
            vector_bounds: None,
            default_value: String::new(),
            interface: None,
            description: String::new(),
            up_assignments: Vec::new(),
            down_assignments: Vec::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direction_keywords() {
        assert_eq!(PortDirection::In.keyword(), "input");
        assert_eq!(PortDirection::Out.keyword(), "output");
        assert_eq!(PortDirection::InOut.keyword(), "inout");
    }

    #[test]
    fn direction_json_spelling() {
        let dir: PortDirection = serde_json::from_str("\"inout\"").unwrap();
        assert_eq!(dir, PortDirection::InOut);
        assert_eq!(dir.to_string(), "inout");
    }

    #[test]
    fn blank_bounds_are_empty() {
        assert!(Bounds::new(" ", "").is_empty());
        assert!(!Bounds::new("7", "0").is_empty());
    }

    #[test]
    fn port_from_minimal_json() {
        let json = r#"{ "name": "clk", "direction": "in" }"#;
        let port: MetaPort = serde_json::from_str(json).unwrap();
        assert_eq!(port, MetaPort::new("clk", PortDirection::In));
    }

    #[test]
    fn assignment_from_json() {
        let json = r#"{ "wire": "bus_data", "logical_bounds": { "left": "7", "right": "0" }, "invert": true }"#;
        let mpa: MetaPortAssignment = serde_json::from_str(json).unwrap();
        assert_eq!(mpa.wire.as_deref(), Some("bus_data"));
        assert!(mpa.invert);
        assert!(mpa.physical_bounds.is_none());
    }
}
