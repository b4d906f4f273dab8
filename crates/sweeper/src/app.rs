use clap::{Arg, ArgAction, Command};

pub(crate) fn build_cli() -> Command {
    Command::new("sweeper")
        .about("Best-effort janitor for stale cloud resources")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .action(ArgAction::SetTrue)
                .global(true)
                .help("Enable verbose logging"),
        )
        .subcommand(
            Command::new("sweep")
                .about("Delete stale, unprotected resources across the project")
                .arg(
                    Arg::new("project")
                        .long("project")
                        .value_name("PROJECT_ID")
                        .help("Override the configured project id"),
                )
                .arg(
                    Arg::new("older-than")
                        .long("older-than")
                        .value_name("HOURS")
                        .value_parser(clap::value_parser!(i64))
                        .help("Override the staleness window in hours (default 24)"),
                )
                .arg(
                    Arg::new("dry-run")
                        .long("dry-run")
                        .action(ArgAction::SetTrue)
                        .help("Log what would be deleted without deleting anything"),
                ),
        )
}
