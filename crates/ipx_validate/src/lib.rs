//! Parameter validation against SystemVerilog type, bound, and choice rules.
//!
//! [`ParameterValidator`] decides whether a [`Parameter`](ipx_model::Parameter)
//! is valid and lists every [`ParameterViolation`] it has, in a fixed order.
//! Violations render to the exact message strings tools expect, or to
//! [`Diagnostic`](ipx_diagnostics::Diagnostic)s with a `P1xx` code.
//!
//! # Violations
//!
//! | code | name | checks |
//! |---|---|---|
//! | P101 | `name` | name is not blank |
//! | P102 | `missing-value` | value is present |
//! | P103 | `value-for-type` | value fits the declared type |
//! | P104 | `below-minimum` | value is not below the minimum |
//! | P105 | `above-maximum` | value is not above the maximum |
//! | P106 | `unknown-enumeration` | value is one of the choice's enumerations |
//! | P107 | `type` | type is a known SystemVerilog type |
//! | P108 | `minimum-for-type` | minimum fits the declared type |
//! | P109 | `maximum-for-type` | maximum fits the declared type |
//! | P110 | `unknown-choice` | referenced choice exists |
//! | P111 | `resolve` | resolve attribute is known |
//! | P112 | `value-id` | user/generated parameters have a value ID |
//! | P113 | `vector` | only `bit` parameters have vectors |
//!
//! A [`ViolationPolicy`] built from these names suppresses violations or
//! reports them as warnings.

#![warn(missing_docs)]

mod component;
mod policy;
mod validator;
mod violation;

pub use component::{check_component, check_parameters, parser_for};
pub use policy::ViolationPolicy;
pub use validator::ParameterValidator;
pub use violation::ParameterViolation;
