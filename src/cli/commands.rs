//! Command execution: from parsed arguments to exit code

use std::io::IsTerminal;

use tracing::{debug, instrument};

use crate::application::services::Invocation;
use crate::cli::output::{self, TerminalReporter};
use crate::cli::{Cli, CliError, CliResult};
use crate::config::{ConfigSources, HttpMethod, Profile};
use crate::domain::{ApiCommand, ParameterSet};
use crate::infrastructure::di::ServiceContainer;
use crate::infrastructure::InfraResult;

/// Run the command line against the process environment and real I/O.
pub fn execute_command(cli: &Cli) -> CliResult<i32> {
    execute_with(cli, &ConfigSources::from_env(), ServiceContainer::new)
}

/// Run the command line and return the process exit code.
///
/// Argument, command and configuration errors are raised before `connect`
/// is called, so no request is sent for them.
#[instrument(level = "debug", skip_all, fields(command = ?cli.command, region = %cli.region))]
pub fn execute_with<F>(cli: &Cli, sources: &ConfigSources, connect: F) -> CliResult<i32>
where
    F: FnOnce(Profile) -> InfraResult<ServiceContainer>,
{
    let name = cli
        .command
        .as_deref()
        .ok_or_else(|| CliError::Usage("missing COMMAND".into()))?;

    let params = ParameterSet::from_options(&cli.arguments)?;
    let request = ApiCommand::lookup(name)?.request(params)?;

    let mut profile = Profile::load_from(&cli.region, sources)?;
    if cli.post {
        profile.method = HttpMethod::Post;
    }
    if let Some(format) = cli.format {
        profile.response = format;
    }
    let theme = profile.theme.clone().unwrap_or_else(|| cli.theme.clone());
    debug!(
        "execute_with: endpoint={} method={:?} response={:?} theme={}",
        profile.endpoint, profile.method, profile.response, theme
    );

    let container = connect(profile)?;
    let invocation = Invocation {
        request,
        fire_and_forget: cli.fire_and_forget,
        select: cli.select.clone(),
    };
    let outcome = container
        .dispatcher()
        .run(&invocation, &TerminalReporter::new(cli.quiet))?;

    if let Some(payload) = &outcome.payload {
        let formatter = container.formatter(&theme, std::io::stdout().is_terminal());
        output::info(&formatter.render(payload)?);
    }
    Ok(outcome.exit_code())
}
