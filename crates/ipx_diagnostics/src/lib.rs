//! Structured diagnostics for parameter validation and HDL generation.
//!
//! A [`Diagnostic`] carries a [`Severity`], a [`DiagnosticCode`], the message
//! text and the element it concerns. Diagnostics are collected in a
//! [`DiagnosticSink`] owned by the caller and formatted with a
//! [`DiagnosticRenderer`] such as [`TerminalRenderer`].

#![warn(missing_docs)]

pub mod code;
pub mod diagnostic;
pub mod renderer;
pub mod severity;
pub mod sink;

pub use code::{Category, DiagnosticCode};
pub use diagnostic::Diagnostic;
pub use renderer::{DiagnosticRenderer, TerminalRenderer};
pub use severity::Severity;
pub use sink::DiagnosticSink;
