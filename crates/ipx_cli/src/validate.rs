//! `ipxgen validate`: parameter validation of a component model.

use ipx_diagnostics::DiagnosticSink;
use ipx_validate::check_parameters;

use crate::model::load_component;
use crate::pipeline::{
    is_failure, print_summary, render_diagnostics, resolve_config, violation_policy,
};
use crate::{GlobalArgs, ReportFormat, ValidateArgs};

/// Runs the `ipxgen validate` command.
///
/// Returns exit code 1 if any parameter has an error, or a warning while
/// `deny_warnings` is set.
pub fn run(args: &ValidateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let policy = violation_policy(&config, &args.allow)?;
    let component = load_component(&args.component)?;

    if !global.quiet {
        eprintln!(
            "   Validating {} ({} parameters)",
            component.vlnv,
            component.parameters.len()
        );
    }

    let context = args
        .context
        .clone()
        .unwrap_or_else(|| format!("component {}", component.vlnv));
    let mut sink = DiagnosticSink::new();
    let invalid = check_parameters(
        &component.parameters,
        &component.choices,
        &context,
        &policy,
        &mut sink,
    );
    log::debug!("{invalid} invalid parameter(s)");

    render_diagnostics(sink.diagnostics(), args.format, global.color);
    if args.format == ReportFormat::Text {
        print_summary(&sink, global);
    }

    Ok(if is_failure(&sink, config.validation.deny_warnings) {
        1
    } else {
        0
    })
}
