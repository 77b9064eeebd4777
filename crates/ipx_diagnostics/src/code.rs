//! Diagnostic codes with category prefixes for structured error identification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The area of the tool a diagnostic code belongs to, determining its prefix letter.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub enum Category {
    /// Parameter validation, prefixed with `P`.
    Parameter,
    /// HDL generation, prefixed with `G`.
    Generation,
    /// Model and configuration loading, prefixed with `M`.
    Model,
}

impl Category {
    /// Returns the single-character prefix for this category.
    pub fn prefix(self) -> char {
        match self {
            Category::Parameter => 'P',
            Category::Generation => 'G',
            Category::Model => 'M',
        }
    }
}

/// A diagnostic code combining a category prefix and a numeric identifier.
///
/// Displayed as the prefix followed by a zero-padded 3-digit number, e.g. `P103`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
pub struct DiagnosticCode {
    /// The category of this diagnostic.
    pub category: Category,
    /// The numeric identifier within the category.
    pub number: u16,
}

impl DiagnosticCode {
    /// Creates a new diagnostic code.
    pub const fn new(category: Category, number: u16) -> Self {
        Self { category, number }
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:03}", self.category.prefix(), self.number)
    }
}
