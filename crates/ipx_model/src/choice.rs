//! Choices: named lists of permitted parameter values.

use serde::{Deserialize, Serialize};

/// One permitted value of a [`Choice`].
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Enumeration {
    /// The literal value a parameter may take.
    pub value: String,
    /// Display text for the value.
    pub text: Option<String>,
    /// Help text for the value.
    pub help: Option<String>,
}

impl Enumeration {
    /// Creates an enumeration with only a value.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            ..Self::default()
        }
    }
}

/// A named set of enumerations that a parameter value can be restricted to.
#[derive(Clone, PartialEq, Eq, Debug, Default, Serialize, Deserialize)]
pub struct Choice {
    /// The choice name referenced by `Parameter::choice_ref`.
    pub name: String,
    /// The permitted values, in declaration order.
    #[serde(default)]
    pub enumerations: Vec<Enumeration>,
}

impl Choice {
    /// Creates a choice from a name and a list of enumeration values.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            enumerations: values.into_iter().map(Enumeration::new).collect(),
        }
    }

    /// Returns `true` if some enumeration has exactly the given value.
    pub fn has_enumeration(&self, value: &str) -> bool {
        self.enumerations.iter().any(|e| e.value == value)
    }
}
