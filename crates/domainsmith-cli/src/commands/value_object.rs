//! `domainsmith generate-value-object`.

use tracing::instrument;

use domainsmith_core::application::ValueObjectRequest;

use super::{build_service, relative, show_plan, show_report};
use crate::{
    cli::{GlobalArgs, ValueObjectArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(value_object = %args.name))]
pub fn execute(
    args: ValueObjectArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = build_service(&global, &config, &output);
    let request = ValueObjectRequest {
        name: args.name,
        domain: args.domain,
        subdomain: args.subdomain,
        force: args.force,
    };

    if args.dry_run {
        return show_plan(&service.plan_value_object(&request)?, &output);
    }

    let report = service.generate_value_object(&request)?;
    if let Some(artifact) = report.artifacts.first() {
        let root = service.layout().root();
        output.print(&format!(
            "Value object: {}",
            relative(&artifact.path, root).display()
        ))?;
    }
    show_report(&report, &output)
}
