//! Shared helpers for CLI commands.
//!
//! Configuration discovery, logger setup, diagnostic rendering, and the
//! exit status policy used by both `validate` and `generate`.

use std::fs;
use std::path::{Path, PathBuf};

use ipx_config::{GeneratorConfig, CONFIG_FILE_NAME};
use ipx_diagnostics::{Diagnostic, DiagnosticRenderer, DiagnosticSink, TerminalRenderer};
use ipx_validate::ViolationPolicy;

use crate::{GlobalArgs, ReportFormat};

/// Walks up from `start` looking for the nearest directory containing `ipxgen.toml`.
pub fn find_config_dir(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();
    loop {
        if current.join(CONFIG_FILE_NAME).is_file() {
            return Some(current);
        }
        if !current.pop() {
            return None;
        }
    }
}

/// Loads the configuration selected by the global flags.
///
/// `--config` may name a file or a directory holding `ipxgen.toml`. Without
/// it the nearest `ipxgen.toml` above the current directory is used, and
/// the defaults apply when there is none.
pub fn resolve_config(global: &GlobalArgs) -> Result<GeneratorConfig, Box<dyn std::error::Error>> {
    if let Some(ref path) = global.config {
        if path.is_dir() {
            return Ok(ipx_config::load_config(path)?);
        }
        let content = fs::read_to_string(path)
            .map_err(|e| format!("failed to read configuration {}: {e}", path.display()))?;
        return Ok(ipx_config::load_config_from_str(&content)?);
    }

    let cwd = std::env::current_dir()?;
    match find_config_dir(&cwd) {
        Some(dir) => {
            log::debug!("using {}", dir.join(CONFIG_FILE_NAME).display());
            Ok(ipx_config::load_config(&dir)?)
        }
        None => Ok(GeneratorConfig::default()),
    }
}

/// Builds the violation policy from the configuration and extra `--allow` names.
pub fn violation_policy(
    config: &GeneratorConfig,
    allow: &[String],
) -> Result<ViolationPolicy, Box<dyn std::error::Error>> {
    let validation = &config.validation;
    Ok(ViolationPolicy::from_names(
        validation.allow.iter().chain(allow),
        &validation.warn,
    )?)
}

/// Installs the logger. `--verbose` enables debug output and `--quiet`
/// limits it to errors; `RUST_LOG` overrides both.
pub fn init_logging(global: &GlobalArgs) {
    let level = if global.quiet {
        log::LevelFilter::Error
    } else if global.verbose {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Warn
    };
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .try_init();
}

/// Renders diagnostics in the requested format.
pub fn render_diagnostics(diagnostics: &[Diagnostic], format: ReportFormat, color: bool) {
    match format {
        ReportFormat::Text => {
            let renderer = TerminalRenderer::new(color);
            for diag in diagnostics {
                eprint!("{}", renderer.render(diag));
            }
        }
        ReportFormat::Json => {
            let json =
                serde_json::to_string_pretty(diagnostics).unwrap_or_else(|_| "[]".to_string());
            println!("{json}");
        }
    }
}

/// Returns `true` if the collected diagnostics should fail the command.
pub fn is_failure(sink: &DiagnosticSink, deny_warnings: bool) -> bool {
    sink.has_errors() || (deny_warnings && sink.warning_count() > 0)
}

/// Prints the error and warning totals.
pub fn print_summary(sink: &DiagnosticSink, global: &GlobalArgs) {
    if !global.quiet {
        eprintln!(
            "   Result: {} error(s), {} warning(s)",
            sink.error_count(),
            sink.warning_count()
        );
    }
}
