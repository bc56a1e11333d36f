//! CLI argument definitions using clap

use clap::{ArgAction, Parser};
use clap_complete::Shell;

use crate::config::{ResponseFormat, DEFAULT_REGION, DEFAULT_THEME};

/// CloudStack client: run an API command, wait for async jobs, pretty-print the result
#[derive(Parser, Debug)]
#[command(name = "cs")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// CloudStack region in ~/.cloudstack.ini
    #[arg(long, value_name = "REGION", env = "CLOUDSTACK_REGION", default_value = DEFAULT_REGION)]
    pub region: String,

    /// Highlighting theme (used when the region defines none)
    #[arg(long, value_name = "THEME", env = "CLOUDSTACK_THEME", default_value = DEFAULT_THEME)]
    pub theme: String,

    /// Use POST instead of GET
    #[arg(long)]
    pub post: bool,

    /// Do not wait for async result
    #[arg(long = "async")]
    pub fire_and_forget: bool,

    /// Do not display additional status messages
    #[arg(short, long)]
    pub quiet: bool,

    /// Response format (overrides the region setting)
    #[arg(long, value_enum)]
    pub format: Option<ResponseFormat>,

    /// Print only the XML elements with this tag
    #[arg(long, value_name = "TAG")]
    pub select: Option<String>,

    /// Debug output on stderr (-d info, -dd debug, -ddd trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub debug: u8,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub generate: Option<Shell>,

    /// CloudStack API command to execute
    #[arg(value_name = "COMMAND", required_unless_present = "generate")]
    pub command: Option<String>,

    /// CloudStack API argument
    #[arg(value_name = "OPTION=VALUE")]
    pub arguments: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_full_command_line() {
        let cli = Cli::try_parse_from([
            "cs",
            "--region",
            "lab",
            "--post",
            "--async",
            "-q",
            "deployVirtualMachine",
            "zoneid=z1",
            "name=\"web 1\"",
        ])
        .unwrap();

        assert_eq!(cli.region, "lab");
        assert!(cli.post && cli.fire_and_forget && cli.quiet);
        assert_eq!(cli.command.as_deref(), Some("deployVirtualMachine"));
        assert_eq!(cli.arguments, vec!["zoneid=z1", "name=\"web 1\""]);
    }

    #[test]
    fn test_command_required_unless_generating_completions() {
        assert!(Cli::try_parse_from(["cs"]).is_err());
        assert!(Cli::try_parse_from(["cs", "--generate", "bash"]).is_ok());
    }
}
