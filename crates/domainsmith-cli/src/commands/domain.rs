//! `domainsmith generate-domain`.

use tracing::instrument;

use domainsmith_core::application::DomainRequest;

use super::{build_service, show_plan, show_report};
use crate::{
    cli::{DomainArgs, GlobalArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[instrument(skip_all, fields(domain = %args.name))]
pub fn execute(
    args: DomainArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = build_service(&global, &config, &output);
    let request = DomainRequest {
        name: args.name,
        flags: args.generation.flags(),
    };

    if args.generation.dry_run {
        return show_plan(&service.plan_domain(&request)?, &output);
    }

    let report = service.generate_domain(&request)?;
    show_report(&report, &output)
}
