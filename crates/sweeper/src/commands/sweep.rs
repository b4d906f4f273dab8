use chrono::TimeDelta;
use clap::ArgMatches;
use tracing::{error, info, warn};

use sweeper_core::api::HttpTransport;
use sweeper_core::events;
use sweeper_core::resources::{default_kinds, discover_locations};
use sweeper_core::{SweepSummary, Sweeper};

pub(crate) fn handle_sweep_command(
    sub_matches: &ArgMatches,
) -> Result<(), Box<dyn std::error::Error>> {
    info!(event = "cli.sweep_started");

    let mut config = match sweeper_config::SweeperConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            error!(event = "cli.sweep_config_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    if let Some(project) = sub_matches.get_one::<String>("project") {
        config.project_id = project.clone();
    }
    if let Some(hours) = sub_matches.get_one::<i64>("older-than") {
        config.stale_after_hours = *hours;
    }
    if sub_matches.get_flag("dry-run") {
        config.dry_run = true;
    }

    // Flag overrides can invalidate a previously valid config
    if let Err(e) = config.validate() {
        eprintln!("{}", e);
        error!(event = "cli.sweep_invalid_config", error = %e);
        events::log_app_error(&e);
        return Err(e.into());
    }

    let transport = match HttpTransport::new(config.access_token.clone()) {
        Ok(transport) => transport,
        Err(e) => {
            eprintln!("Failed to build API client: {}", e);
            error!(event = "cli.sweep_client_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    warn!(
        event = "cli.sweep_run_started",
        project = config.project_id.as_str(),
        stale_after_hours = config.stale_after_hours,
        dry_run = config.dry_run
    );

    // One location/zone discovery per run, shared read-only by every kind.
    // A failure here is fatal: without the location list nothing can run.
    let locations = match discover_locations(
        &transport,
        &config.endpoints.compute,
        &config.project_id,
    ) {
        Ok(locations) => locations,
        Err(e) => {
            eprintln!("Failed to discover locations: {}", e);
            error!(event = "cli.sweep_locations_failed", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    let sweeper = Sweeper::new(&transport, &config.project_id)
        .stale_after(TimeDelta::hours(config.stale_after_hours))
        .dry_run(config.dry_run);
    let kinds = default_kinds(&config.endpoints);

    let summary = sweeper.run(&kinds, &locations);

    print_summary(&summary, config.dry_run);

    info!(
        event = "cli.sweep_completed",
        deleted = summary.total_deleted(),
        failed_kinds = summary.failed_kinds()
    );

    // Best-effort batch job: partial failures are visible in the logs and
    // the summary, never in the exit status.
    Ok(())
}

fn print_summary(summary: &SweepSummary, dry_run: bool) {
    if dry_run {
        println!("Dry run complete.");
    } else {
        println!("Sweep complete.");
    }

    for outcome in &summary.outcomes {
        match &outcome.failure {
            None => println!("  {}: {} deleted", outcome.kind, outcome.deleted.len()),
            Some(err) => println!("  {}: FAILED ({})", outcome.kind, err),
        }
        for id in &outcome.deleted {
            println!("    - {}", id);
        }
    }

    let verb = if dry_run { "would be deleted" } else { "deleted" };
    println!("  Total: {} resources {}", summary.total_deleted(), verb);

    if summary.failed_kinds() > 0 {
        eprintln!(
            "  {} resource kind(s) failed; see logs for details.",
            summary.failed_kinds()
        );
    }
}
