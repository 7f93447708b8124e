//! Command handlers.
//!
//! Each handler translates parsed arguments into a core request, runs it and
//! renders the result. No generation logic lives here.

pub mod completions;
pub mod config;
pub mod domain;
pub mod init;
pub mod subdomain;
pub mod value_object;

use std::path::Path;

use tracing::{debug, info};

use domainsmith_adapters::{
    DirectoryStubStore, InMemoryStubStore, LocalFilesystem, StubProviderScaffolder, SystemClock,
    resolve_stub_directory,
};
use domainsmith_core::{
    application::{GenerationReport, GenerationService, ports::StubStore},
    domain::{GenerationPlan, ProjectLayout},
};

use crate::{
    cli::{GlobalArgs, OutputFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Wire the generation service to the local filesystem and the stub source
/// selected by configuration.
pub(crate) fn build_service(
    global: &GlobalArgs,
    config: &AppConfig,
    output: &OutputManager,
) -> GenerationService {
    let root = global.project_root();
    let layout = config.layout(&root);
    let configured = config.stubs.directory.as_deref();

    match resolve_stub_directory(configured, &root) {
        Some(dir) if config.stubs.builtin_fallback => {
            assemble(layout, DirectoryStubStore::with_builtin_fallback(dir), output)
        }
        Some(dir) => assemble(layout, DirectoryStubStore::new(dir), output),
        None => match configured {
            Some(dir) if !config.stubs.builtin_fallback => {
                debug!(path = %dir.display(), "Configured stub directory missing, no fallback");
                assemble(layout, DirectoryStubStore::new(root.join(dir)), output)
            }
            _ => assemble(layout, InMemoryStubStore::with_builtin(), output),
        },
    }
}

fn assemble<S>(layout: ProjectLayout, stubs: S, output: &OutputManager) -> GenerationService
where
    S: StubStore + Clone + 'static,
{
    info!(stubs = %stubs.describe(), root = %layout.root().display(), "Generation service ready");
    let scaffolder = StubProviderScaffolder::new(
        LocalFilesystem::new(),
        stubs.clone(),
        layout.namespace_root().to_string(),
    );
    GenerationService::new(
        layout,
        Box::new(LocalFilesystem::new()),
        Box::new(stubs),
        Box::new(output.clone()),
        Box::new(scaffolder),
        Box::new(SystemClock),
    )
}

/// Print a plan for `--dry-run`.
pub(crate) fn show_plan(plan: &GenerationPlan, output: &OutputManager) -> CliResult<()> {
    output.header(plan.title())?;
    for step in plan.steps() {
        output.print(&format!("  {step}"))?;
    }
    output.info("Dry run: nothing was written")?;
    Ok(())
}

/// Print the closing summary, or the whole report as JSON.
pub(crate) fn show_report(report: &GenerationReport, output: &OutputManager) -> CliResult<()> {
    if output.format() == OutputFormat::Json {
        output.json(report)?;
        return Ok(());
    }

    let summary = report.summary();
    if report.is_clean() {
        output.success(&format!("Done: {summary}"))?;
    } else {
        output.warning(&format!("Finished with issues: {summary}"))?;
    }
    Ok(())
}

/// Make `path` relative to `root` for display, when possible.
pub(crate) fn relative<'a>(path: &'a Path, root: &Path) -> &'a Path {
    path.strip_prefix(root).unwrap_or(path)
}
