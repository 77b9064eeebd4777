//! The ways a parameter can be invalid.

use ipx_diagnostics::{Category, Diagnostic, DiagnosticCode, Severity};
use ipx_model::Parameter;
use std::fmt;

/// One reason a parameter is invalid.
///
/// Variants are listed in the order [`ParameterValidator::violations`]
/// reports them when the value is present.
///
/// [`ParameterValidator::violations`]: crate::ParameterValidator::violations
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub enum ParameterViolation {
    /// The name is empty or whitespace.
    Name,
    /// The value is empty.
    MissingValue,
    /// The value is not valid for the declared type.
    ValueForType,
    /// The value is below the minimum.
    BelowMinimum,
    /// The value is above the maximum.
    AboveMaximum,
    /// The value is not an enumeration of the referenced choice.
    UnknownEnumeration,
    /// The type is not a known SystemVerilog type.
    Type,
    /// The minimum is not valid for the declared type.
    MinimumForType,
    /// The maximum is not valid for the declared type.
    MaximumForType,
    /// The referenced choice does not exist.
    UnknownChoice,
    /// The resolve attribute is not known.
    Resolve,
    /// A user or generated parameter has no value ID.
    ValueId,
    /// A parameter that is not `bit` has vectors.
    Vector,
}

impl ParameterViolation {
    /// Every violation, in reporting order.
    pub const ALL: [ParameterViolation; 13] = [
        ParameterViolation::Name,
        ParameterViolation::MissingValue,
        ParameterViolation::ValueForType,
        ParameterViolation::BelowMinimum,
        ParameterViolation::AboveMaximum,
        ParameterViolation::UnknownEnumeration,
        ParameterViolation::Type,
        ParameterViolation::MinimumForType,
        ParameterViolation::MaximumForType,
        ParameterViolation::UnknownChoice,
        ParameterViolation::Resolve,
        ParameterViolation::ValueId,
        ParameterViolation::Vector,
    ];

    /// Returns the diagnostic code (`P101`..`P113`).
    pub fn code(self) -> DiagnosticCode {
        let number = match self {
            ParameterViolation::Name => 101,
            ParameterViolation::MissingValue => 102,
            ParameterViolation::ValueForType => 103,
            ParameterViolation::BelowMinimum => 104,
            ParameterViolation::AboveMaximum => 105,
            ParameterViolation::UnknownEnumeration => 106,
            ParameterViolation::Type => 107,
            ParameterViolation::MinimumForType => 108,
            ParameterViolation::MaximumForType => 109,
            ParameterViolation::UnknownChoice => 110,
            ParameterViolation::Resolve => 111,
            ParameterViolation::ValueId => 112,
            ParameterViolation::Vector => 113,
        };
        DiagnosticCode::new(Category::Parameter, number)
    }

    /// Returns the short kebab-case name used in configuration files.
    pub fn name(self) -> &'static str {
        match self {
            ParameterViolation::Name => "name",
            ParameterViolation::MissingValue => "missing-value",
            ParameterViolation::ValueForType => "value-for-type",
            ParameterViolation::BelowMinimum => "below-minimum",
            ParameterViolation::AboveMaximum => "above-maximum",
            ParameterViolation::UnknownEnumeration => "unknown-enumeration",
            ParameterViolation::Type => "type",
            ParameterViolation::MinimumForType => "minimum-for-type",
            ParameterViolation::MaximumForType => "maximum-for-type",
            ParameterViolation::UnknownChoice => "unknown-choice",
            ParameterViolation::Resolve => "resolve",
            ParameterViolation::ValueId => "value-id",
            ParameterViolation::Vector => "vector",
        }
    }

    /// Looks up a violation by its kebab-case name.
    pub fn from_name(name: &str) -> Option<ParameterViolation> {
        Self::ALL.into_iter().find(|v| v.name() == name)
    }

    /// Every violation is an error unless configuration says otherwise.
    pub fn default_severity(self) -> Severity {
        Severity::Error
    }

    /// Formats the message for this violation of `parameter` found within `context`.
    pub fn message(self, parameter: &Parameter, context: &str) -> String {
        let el = parameter.element;
        let n = &parameter.name;
        let ty = &parameter.ty;
        match self {
            ParameterViolation::Name => {
                format!("No valid name specified for {el} {n} within {context}")
            }
            ParameterViolation::MissingValue => {
                format!("No value specified for {el} {n} within {context}")
            }
            ParameterViolation::ValueForType => format!(
                "Value {} is not valid for type {ty} in {el} {n} within {context}",
                parameter.value
            ),
            ParameterViolation::BelowMinimum => format!(
                "Value {} violates minimum value {} in {el} {n} within {context}",
                parameter.value, parameter.minimum
            ),
            ParameterViolation::AboveMaximum => format!(
                "Value {} violates maximum value {} in {el} {n} within {context}",
                parameter.value, parameter.maximum
            ),
            ParameterViolation::UnknownEnumeration => format!(
                "Value {} references unknown enumeration for choice {} in {el} {n} within {context}",
                parameter.value, parameter.choice_ref
            ),
            ParameterViolation::Type => {
                format!("Invalid type {ty} specified for {el} {n} within {context}")
            }
            ParameterViolation::MinimumForType => format!(
                "Minimum value {} is not valid for type {ty} in {el} {n} within {context}",
                parameter.minimum
            ),
            ParameterViolation::MaximumForType => format!(
                "Maximum value {} is not valid for type {ty} in {el} {n} within {context}",
                parameter.maximum
            ),
            ParameterViolation::UnknownChoice => format!(
                "Choice {} referenced in {el} {n} is not specified within {context}",
                parameter.choice_ref
            ),
            ParameterViolation::Resolve => format!(
                "Invalid resolve {} specified for {el} {n} within {context}",
                parameter.resolve
            ),
            ParameterViolation::ValueId => format!(
                "No value ID specified for {el} {n} with resolve {} within {context}",
                parameter.resolve
            ),
            ParameterViolation::Vector => {
                format!("Invalid vector specified for {el} {n} within {context}")
            }
        }
    }

    /// Builds a diagnostic for this violation with the default severity.
    pub fn to_diagnostic(self, parameter: &Parameter, context: &str) -> Diagnostic {
        let diag = Diagnostic::new(
            self.default_severity(),
            self.code(),
            self.message(parameter, context),
        )
        .with_subject(format!("{} {}", parameter.element, parameter.name));
        match self {
            ParameterViolation::Type => diag.with_help(
                "expected bit, byte, shortint, int, longint, shortreal, real, string, or no type",
            ),
            ParameterViolation::Resolve => diag.with_help("expected immediate, user or generated"),
            ParameterViolation::ValueId => {
                diag.with_help("give the parameter a value ID or make its resolve immediate")
            }
            ParameterViolation::Vector => {
                diag.with_note("vectors are only allowed on parameters of type bit")
            }
            _ => diag,
        }
    }
}

impl fmt::Display for ParameterViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
