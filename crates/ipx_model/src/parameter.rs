//! Parameters and their type and resolve attributes.

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// The declared SystemVerilog type of a parameter.
///
/// Parsed from its IP-XACT spelling; anything unrecognised is kept verbatim in
/// [`Unknown`](ParameterType::Unknown) so the validator can report it.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum ParameterType {
    /// No type given (empty string).
    #[default]
    Untyped,
    /// `bit`
    Bit,
    /// `byte`
    Byte,
    /// `shortint`
    Shortint,
    /// `int`
    Int,
    /// `longint`
    Longint,
    /// `shortreal`
    Shortreal,
    /// `real`
    Real,
    /// `string`
    String,
    /// Any other spelling.
    Unknown(String),
}

impl ParameterType {
    /// Returns `true` unless this is [`Unknown`](ParameterType::Unknown).
    pub fn is_known(&self) -> bool {
        !matches!(self, ParameterType::Unknown(_))
    }

    /// Returns `true` for the floating-point types `shortreal` and `real`.
    pub fn is_real(&self) -> bool {
        matches!(self, ParameterType::Shortreal | ParameterType::Real)
    }

    /// Returns the IP-XACT spelling of this type.
    pub fn as_str(&self) -> &str {
        match self {
            ParameterType::Untyped => "",
            ParameterType::Bit => "bit",
            ParameterType::Byte => "byte",
            ParameterType::Shortint => "shortint",
            ParameterType::Int => "int",
            ParameterType::Longint => "longint",
            ParameterType::Shortreal => "shortreal",
            ParameterType::Real => "real",
            ParameterType::String => "string",
            ParameterType::Unknown(other) => other,
        }
    }
}

impl FromStr for ParameterType {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "" => ParameterType::Untyped,
            "bit" => ParameterType::Bit,
            "byte" => ParameterType::Byte,
            "shortint" => ParameterType::Shortint,
            "int" => ParameterType::Int,
            "longint" => ParameterType::Longint,
            "shortreal" => ParameterType::Shortreal,
            "real" => ParameterType::Real,
            "string" => ParameterType::String,
            other => ParameterType::Unknown(other.to_string()),
        })
    }
}

impl From<String> for ParameterType {
    fn from(s: String) -> Self {
        match s.parse() {
            Ok(ty) => ty,
            Err(never) => match never {},
        }
    }
}

impl From<ParameterType> for String {
    fn from(ty: ParameterType) -> Self {
        ty.as_str().to_string()
    }
}

impl fmt::Display for ParameterType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How the value of a parameter is decided.
#[derive(Clone, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Resolve {
    /// No resolve attribute (empty string).
    #[default]
    Unspecified,
    /// `immediate`: the value is fixed in the document.
    Immediate,
    /// `user`: the value is set by the integrator.
    User,
    /// `generated`: the value is produced by a generator.
    Generated,
    /// Any other spelling.
    Unknown(String),
}

impl Resolve {
    /// Returns `true` when a parameter with this resolve must carry a value ID.
    pub fn requires_value_id(&self) -> bool {
        matches!(self, Resolve::User | Resolve::Generated)
    }

    /// Returns the IP-XACT spelling of this resolve attribute.
    pub fn as_str(&self) -> &str {
        match self {
            Resolve::Unspecified => "",
            Resolve::Immediate => "immediate",
            Resolve::User => "user",
            Resolve::Generated => "generated",
            Resolve::Unknown(other) => other,
        }
    }
}

impl From<String> for Resolve {
    fn from(s: String) -> Self {
        match s.as_str() {
            "" => Resolve::Unspecified,
            "immediate" => Resolve::Immediate,
            "user" => Resolve::User,
            "generated" => Resolve::Generated,
            _ => Resolve::Unknown(s),
        }
    }
}

impl From<Resolve> for String {
    fn from(resolve: Resolve) -> Self {
        resolve.as_str().to_string()
    }
}

impl fmt::Display for Resolve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which IP-XACT element a parameter was declared as; used in messages.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ElementKind {
    /// A plain `parameter`.
    #[default]
    Parameter,
    /// A `moduleParameter` of a component instantiation.
    ModuleParameter,
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ElementKind::Parameter => f.write_str("parameter"),
            ElementKind::ModuleParameter => f.write_str("module parameter"),
        }
    }
}

/// A `left`/`right` pair of bit-index expressions on a parameter.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Vector {
    /// The left (usually most significant) index expression.
    pub left: String,
    /// The right index expression.
    pub right: String,
}

/// A named, typed parameter whose value is a SystemVerilog expression.
#[derive(Clone, PartialEq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Parameter {
    /// The parameter name.
    pub name: String,
    /// Whether this is a parameter or a module parameter.
    pub element: ElementKind,
    /// The declared type.
    #[serde(rename = "type")]
    pub ty: ParameterType,
    /// The value expression, possibly an array literal `{...}` or `'{...}`.
    pub value: String,
    /// Lower bound expression; empty when unbounded.
    pub minimum: String,
    /// Upper bound expression; empty when unbounded.
    pub maximum: String,
    /// Name of the choice constraining the value; empty when unconstrained.
    pub choice_ref: String,
    /// The resolve attribute.
    pub resolve: Resolve,
    /// Identifier used by configurable elements to refer to this parameter.
    pub value_id: String,
    /// Bit-vector dimensions; only meaningful for `bit` parameters.
    pub vectors: Vec<Vector>,
    /// Free-form description.
    pub description: String,
}

impl Parameter {
    /// Creates an untyped parameter with the given name and value.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn type_spellings_roundtrip() {
        for text in [
            "", "bit", "byte", "shortint", "int", "longint", "shortreal", "real", "string",
        ] {
            let ty: ParameterType = text.parse().unwrap();
            assert!(ty.is_known());
            assert_eq!(ty.to_string(), text);
        }
    }

    #[test]
    fn unknown_type_kept_verbatim() {
        let ty: ParameterType = "integer".parse().unwrap();
        assert_eq!(ty, ParameterType::Unknown("integer".to_string()));
        assert!(!ty.is_known());
        assert_eq!(ty.to_string(), "integer");
    }

    #[test]
    fn type_is_case_sensitive() {
        let ty: ParameterType = "Bit".parse().unwrap();
        assert!(!ty.is_known());
    }

    #[test]
    fn real_types() {
        assert!(ParameterType::Real.is_real());
        assert!(ParameterType::Shortreal.is_real());
        assert!(!ParameterType::Int.is_real());
    }

    #[test]
    fn resolve_spellings() {
        assert_eq!(Resolve::from(String::new()), Resolve::Unspecified);
        assert_eq!(Resolve::from("user".to_string()), Resolve::User);
        assert_eq!(
            Resolve::from("dependent".to_string()),
            Resolve::Unknown("dependent".to_string())
        );
        assert_eq!(Resolve::Generated.to_string(), "generated");
    }

    #[test]
    fn resolve_value_id_requirement() {
        assert!(Resolve::User.requires_value_id());
        assert!(Resolve::Generated.requires_value_id());
        assert!(!Resolve::Immediate.requires_value_id());
        assert!(!Resolve::Unspecified.requires_value_id());
    }

    #[test]
    fn element_kind_display() {
        assert_eq!(ElementKind::Parameter.to_string(), "parameter");
        assert_eq!(ElementKind::ModuleParameter.to_string(), "module parameter");
    }

    #[test]
    fn parameter_from_json_with_defaults() {
        let json = r#"{ "name": "WIDTH", "type": "int", "value": "8", "resolve": "user" }"#;
        let p: Parameter = serde_json::from_str(json).unwrap();
        assert_eq!(p.name, "WIDTH");
        assert_eq!(p.ty, ParameterType::Int);
        assert_eq!(p.resolve, Resolve::User);
        assert!(p.minimum.is_empty());
        assert!(p.vectors.is_empty());
        assert_eq!(p.element, ElementKind::Parameter);
    }

    #[test]
    fn parameter_json_keeps_unknown_spellings() {
        let json = r#"{ "name": "p", "type": "float", "resolve": "later" }"#;
        let p: Parameter = serde_json::from_str(json).unwrap();
        let back = serde_json::to_value(&p).unwrap();
        assert_eq!(back["type"], "float");
        assert_eq!(back["resolve"], "later");
    }
}
