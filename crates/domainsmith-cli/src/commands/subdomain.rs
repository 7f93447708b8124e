//! `domainsmith generate-subdomain`.

use tracing::instrument;

use domainsmith_core::application::SubdomainRequest;

use super::{build_service, show_plan, show_report};
use crate::{
    cli::{GlobalArgs, SubdomainArgs},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

/// Fails before writing anything when the parent domain is missing, or when
/// the subdomain exists and `--force` was not given.
#[instrument(skip_all, fields(parent = %args.parent, subdomain = %args.name))]
pub fn execute(
    args: SubdomainArgs,
    global: GlobalArgs,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let service = build_service(&global, &config, &output);
    let request = SubdomainRequest {
        parent: args.parent,
        name: args.name,
        flags: args.generation.flags(),
    };

    if args.generation.dry_run {
        return show_plan(&service.plan_subdomain(&request)?, &output);
    }

    let report = service.generate_subdomain(&request)?;
    show_report(&report, &output)
}
