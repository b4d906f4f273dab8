use clap::ArgMatches;

mod sweep;

pub(crate) fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    match matches.subcommand() {
        Some(("sweep", sub_matches)) => sweep::handle_sweep_command(sub_matches),
        _ => Err("No command specified. Use --help for usage.".into()),
    }
}
