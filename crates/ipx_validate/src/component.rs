//! Validation of every parameter of a component.

use crate::policy::ViolationPolicy;
use crate::validator::ParameterValidator;
use ipx_diagnostics::DiagnosticSink;
use ipx_expr::SystemVerilogExpressionParser;
use ipx_model::{Choice, MetaComponent, Parameter};

/// Builds an expression parser that resolves references to `parameters`,
/// by name and by value ID.
pub fn parser_for(parameters: &[Parameter]) -> SystemVerilogExpressionParser {
    let mut parser = SystemVerilogExpressionParser::new();
    for parameter in parameters {
        if !parameter.value_id.is_empty() {
            parser.define(parameter.value_id.clone(), parameter.value.clone());
        }
        if !parameter.name.trim().is_empty() {
            parser.define(parameter.name.clone(), parameter.value.clone());
        }
    }
    parser
}

/// Validates every parameter of `component` against its own choices.
///
/// Messages use `component <vlnv>` as their context. See [`check_parameters`].
pub fn check_component(
    component: &MetaComponent,
    policy: &ViolationPolicy,
    sink: &mut DiagnosticSink,
) -> usize {
    let context = format!("component {}", component.vlnv);
    check_parameters(
        &component.parameters,
        &component.choices,
        &context,
        policy,
        sink,
    )
}

/// Validates `parameters` against `choices` and reports violations into
/// `sink` at the level `policy` gives them.
///
/// Returns the number of invalid parameters, including those whose
/// violations are all suppressed.
pub fn check_parameters(
    parameters: &[Parameter],
    choices: &[Choice],
    context: &str,
    policy: &ViolationPolicy,
    sink: &mut DiagnosticSink,
) -> usize {
    let parser = parser_for(parameters);
    let validator = ParameterValidator::new(&parser, choices);
    let mut invalid = 0;
    for parameter in parameters {
        let violations = validator.violations(parameter);
        if violations.is_empty() {
            continue;
        }
        invalid += 1;
        for violation in violations {
            if let Some(severity) = policy.severity_of(violation) {
                let mut diag = violation.to_diagnostic(parameter, context);
                diag.severity = severity;
                sink.emit(diag);
            }
        }
    }
    log::debug!(
        "checked {} parameter(s) within {context}: {invalid} invalid",
        parameters.len()
    );
    invalid
}

#[cfg(test)]
mod tests {
    use super::*;
    use ipx_common::Vlnv;
    use ipx_expr::ExpressionParser;
    use ipx_model::ParameterType;

    fn component() -> MetaComponent {
        let mut c = MetaComponent::new("uart", Vlnv::new("tut.fi", "ip", "uart", "1.0"));
        c.parameters = vec![
            Parameter {
                ty: ParameterType::Int,
                value_id: "uuid_width".to_string(),
                ..Parameter::new("WIDTH", "8")
            },
            Parameter {
                ty: ParameterType::Int,
                ..Parameter::new("DEPTH", "uuid_width * 4")
            },
        ];
        c
    }

    #[test]
    fn parser_resolves_names_and_ids() {
        let parser = parser_for(&component().parameters);
        assert_eq!(parser.parse_expression("WIDTH + 1"), "9");
        assert_eq!(parser.parse_expression("DEPTH"), "32");
    }

    #[test]
    fn valid_component_reports_nothing() {
        let mut sink = DiagnosticSink::new();
        assert_eq!(check_component(&component(), &ViolationPolicy::new(), &mut sink), 0);
        assert!(sink.diagnostics().is_empty());
    }

    #[test]
    fn invalid_parameters_are_counted_and_reported() {
        let mut c = component();
        c.parameters.push(Parameter {
            ty: ParameterType::Byte,
            choice_ref: "modes".to_string(),
            ..Parameter::new("MODE", "DEPTH * 8")
        });
        c.choices.push(Choice::new("modes", ["256"]));
        let mut sink = DiagnosticSink::new();
        assert_eq!(check_component(&c, &ViolationPolicy::new(), &mut sink), 1);
        let diags = sink.take_all();
        assert_eq!(diags.len(), 2);
        assert_eq!(
            diags[0].message,
            "Value DEPTH * 8 is not valid for type byte in parameter MODE within component tut.fi:ip:uart:1.0"
        );
        assert_eq!(diags[1].code.to_string(), "P106");
    }

    #[test]
    fn policy_suppresses_and_downgrades() {
        let mut c = component();
        c.parameters.push(Parameter {
            ty: ParameterType::Int,
            vectors: vec![ipx_model::Vector {
                left: "7".to_string(),
                right: "0".to_string(),
            }],
            ..Parameter::new("", "1")
        });
        let policy = ViolationPolicy::from_names(["name"], ["vector"]).unwrap();
        let mut sink = DiagnosticSink::new();
        assert_eq!(check_component(&c, &policy, &mut sink), 1);
        assert_eq!(sink.error_count(), 0);
        assert_eq!(sink.warning_count(), 1);
        assert_eq!(sink.diagnostics()[0].code.to_string(), "P113");
    }

    #[test]
    fn caller_supplies_context() {
        let parameters = vec![Parameter::new("N", "")];
        let mut sink = DiagnosticSink::new();
        let invalid = check_parameters(&parameters, &[], "design soc", &ViolationPolicy::new(), &mut sink);
        assert_eq!(invalid, 1);
        assert_eq!(
            sink.diagnostics()[0].message,
            "No value specified for parameter N within design soc"
        );
    }
}
