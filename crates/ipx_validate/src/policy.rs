//! Per-violation reporting levels taken from configuration.

use crate::violation::ParameterViolation;
use ipx_diagnostics::Severity;
use std::collections::HashSet;

/// Decides how each violation is reported.
///
/// Allowed violations are not reported at all; warned violations are
/// reported as warnings; everything else keeps its default severity.
#[derive(Clone, Debug, Default)]
pub struct ViolationPolicy {
    allowed: HashSet<ParameterViolation>,
    warned: HashSet<ParameterViolation>,
}

impl ViolationPolicy {
    /// Creates a policy that reports every violation at its default severity.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a policy from kebab-case violation names.
    ///
    /// A name that is both allowed and warned is allowed. Unknown names are
    /// an error.
    pub fn from_names<A, W>(allow: A, warn: W) -> Result<Self, String>
    where
        A: IntoIterator,
        A::Item: AsRef<str>,
        W: IntoIterator,
        W::Item: AsRef<str>,
    {
        Ok(Self {
            allowed: lookup(allow)?,
            warned: lookup(warn)?,
        })
    }

    /// Suppresses `violation`.
    pub fn allow(&mut self, violation: ParameterViolation) {
        self.allowed.insert(violation);
    }

    /// Reports `violation` as a warning.
    pub fn warn(&mut self, violation: ParameterViolation) {
        self.warned.insert(violation);
    }

    /// Returns the severity to report `violation` with, or `None` if it is suppressed.
    pub fn severity_of(&self, violation: ParameterViolation) -> Option<Severity> {
        if self.allowed.contains(&violation) {
            None
        } else if self.warned.contains(&violation) {
            Some(Severity::Warning)
        } else {
            Some(violation.default_severity())
        }
    }
}

fn lookup<I>(names: I) -> Result<HashSet<ParameterViolation>, String>
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    names
        .into_iter()
        .map(|name| {
            let name = name.as_ref();
            ParameterViolation::from_name(name)
                .ok_or_else(|| format!("unknown parameter violation '{name}'"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_policy_reports_errors() {
        let policy = ViolationPolicy::new();
        for violation in ParameterViolation::ALL {
            assert_eq!(policy.severity_of(violation), Some(Severity::Error));
        }
    }

    #[test]
    fn names_map_to_levels() {
        let policy = ViolationPolicy::from_names(["value-id"], ["vector", "value-id"]).unwrap();
        assert_eq!(policy.severity_of(ParameterViolation::ValueId), None);
        assert_eq!(
            policy.severity_of(ParameterViolation::Vector),
            Some(Severity::Warning)
        );
        assert_eq!(
            policy.severity_of(ParameterViolation::Resolve),
            Some(Severity::Error)
        );
    }

    #[test]
    fn unknown_name_is_rejected() {
        let err = ViolationPolicy::from_names(["unused-signal"], Vec::<String>::new()).unwrap_err();
        assert_eq!(err, "unknown parameter violation 'unused-signal'");
    }
}
