//! `ipxgen generate`: Verilog generation from a component or design model.
//!
//! 1. Load config and the model
//! 2. Validate the module parameters of the component (or design top)
//! 3. Prepare the document, carrying over hand-written regions
//! 4. Write `<output>/<module>.v`

use std::path::PathBuf;

use ipx_diagnostics::DiagnosticSink;
use ipx_model::MetaComponent;
use ipx_validate::check_component;
use ipx_verilog::{GenerationSettings, LibraryPaths, VerilogDocument, VerilogWriterFactory};

use crate::model::{load_component, load_design};
use crate::pipeline::{
    is_failure, print_summary, render_diagnostics, resolve_config, violation_policy,
};
use crate::{GenerateArgs, GlobalArgs, ReportFormat};

/// Runs the `ipxgen generate` command.
///
/// Returns exit code 1 if parameter validation fails or the document cannot
/// be prepared or written; nothing is written in that case.
pub fn run(args: &GenerateArgs, global: &GlobalArgs) -> Result<i32, Box<dyn std::error::Error>> {
    let config = resolve_config(global)?;
    let policy = violation_policy(&config, &[])?;
    let output: PathBuf = args
        .output
        .clone()
        .unwrap_or_else(|| config.generator.output.clone());

    let library = LibraryPaths::from(config.library.clone());
    if library.is_empty() {
        log::debug!("no library documents configured; headers name no XML file");
    } else {
        log::debug!("library knows {} documents", library.len());
    }
    let settings = GenerationSettings {
        user: config.generator.user.clone(),
        tool_version: config.generator.tool_version.clone(),
        generator_version: config.generator.generator_version.clone(),
        generate_interfaces: config.generator.generate_interfaces,
    };
    let factory = VerilogWriterFactory::new(&library, settings);

    let design = if args.design {
        Some(load_design(&args.model)?)
    } else {
        None
    };
    let component: MetaComponent = match &design {
        Some(design) => design.top.clone(),
        None => load_component(&args.model)?,
    };

    if !global.quiet {
        eprintln!(
            "   Generating {} for {}",
            factory.language(),
            component.vlnv
        );
    }

    let mut sink = DiagnosticSink::new();
    check_component(&component, &policy, &mut sink);
    if is_failure(&sink, config.validation.deny_warnings) {
        render_diagnostics(sink.diagnostics(), ReportFormat::Text, global.color);
        print_summary(&sink, global);
        eprintln!("error: parameter validation failed, nothing was generated");
        return Ok(1);
    }
    render_diagnostics(sink.diagnostics(), ReportFormat::Text, global.color);

    let prepared = match &design {
        Some(design) => factory.prepare_design_at(&output, design),
        None => factory.prepare_component(&output, &component),
    };
    let path = match prepared.and_then(|document: VerilogDocument| document.write_to(&output)) {
        Ok(path) => path,
        Err(e) => {
            render_diagnostics(&[e.to_diagnostic()], ReportFormat::Text, global.color);
            return Ok(1);
        }
    };

    if !global.quiet {
        eprintln!("    Finished {}", path.display());
    }
    Ok(0)
}
