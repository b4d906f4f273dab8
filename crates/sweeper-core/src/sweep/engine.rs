//! The sweep engine: enumerate, filter, delete.

use chrono::{DateTime, TimeDelta, Utc};
use serde_json::Value;
use tracing::{debug, error, info, warn};

use crate::api::{ApiError, RestTransport};
use crate::resources::{KindEntry, ListScope, Locations, ResourceKind};
use crate::sweep::pagination::list_all_pages;
use crate::sweep::staleness::{DEFAULT_STALE_AFTER_HOURS, is_stale_at};
use crate::sweep::summary::{KindOutcome, SweepSummary};

/// Resources labeled with this key (any value) are permanently exempt from
/// deletion.
pub const PROTECTION_LABEL: &str = "please-do-not-kill-me";

/// One sequential pass over resource kinds, locations, and resources.
///
/// Built once per run; the staleness comparison uses the construction-time
/// clock so that a long run applies one consistent cutoff.
pub struct Sweeper<'a> {
    transport: &'a dyn RestTransport,
    project: String,
    stale_after: TimeDelta,
    dry_run: bool,
    now: DateTime<Utc>,
}

impl<'a> Sweeper<'a> {
    pub fn new(transport: &'a dyn RestTransport, project: &str) -> Self {
        Self {
            transport,
            project: project.to_string(),
            stale_after: TimeDelta::hours(DEFAULT_STALE_AFTER_HOURS),
            dry_run: false,
            now: Utc::now(),
        }
    }

    /// Override the staleness window (default 24h).
    pub fn stale_after(mut self, window: TimeDelta) -> Self {
        self.stale_after = window;
        self
    }

    /// Log what would be deleted without issuing delete calls.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    /// Pin the clock the staleness comparison runs against.
    pub fn at(mut self, now: DateTime<Utc>) -> Self {
        self.now = now;
        self
    }

    /// Run every kind in order, isolating failures per kind: a kind whose
    /// sweep fails is recorded in the summary and the next kind still runs.
    pub fn run(&self, kinds: &[KindEntry], locations: &Locations) -> SweepSummary {
        let mut summary = SweepSummary::default();

        for entry in kinds {
            // Warn level so the run narrative survives quiet mode
            warn!(event = "core.sweep.kind_started", kind = entry.label);

            let (deleted, failure) = self.sweep_kind(entry.kind.as_ref(), locations);
            match &failure {
                None => {
                    info!(
                        event = "core.sweep.kind_completed",
                        kind = entry.label,
                        deleted = deleted.len()
                    );
                }
                Some(err) => {
                    error!(
                        event = "core.sweep.kind_failed",
                        kind = entry.label,
                        deleted = deleted.len(),
                        error = %err
                    );
                }
            }

            summary.outcomes.push(KindOutcome {
                kind: entry.label,
                deleted,
                failure,
            });
        }

        summary
    }

    fn sweep_kind(
        &self,
        kind: &dyn ResourceKind,
        locations: &Locations,
    ) -> (Vec<String>, Option<ApiError>) {
        match kind.scope() {
            ListScope::AllLocations => match self.sweep_scope(kind, None) {
                Ok(deleted) => (deleted, None),
                Err(err) => (Vec::new(), Some(err)),
            },
            ListScope::PerLocation => self.sweep_locations(kind, &locations.regions),
            ListScope::PerZone => self.sweep_locations(kind, &locations.zones),
        }
    }

    /// Per-location loop with the tolerance policy: server-side failures and
    /// locations the surface does not serve are skipped; anything else
    /// abandons the kind's remaining locations. Deletions made before the
    /// abort are kept.
    fn sweep_locations(
        &self,
        kind: &dyn ResourceKind,
        locations: &[String],
    ) -> (Vec<String>, Option<ApiError>) {
        let mut deleted = Vec::new();

        for location in locations {
            debug!(
                event = "core.sweep.location_started",
                kind = kind.name(),
                location = location.as_str()
            );

            match self.sweep_scope(kind, Some(location)) {
                Ok(mut ids) => deleted.append(&mut ids),
                Err(err) if err.is_server_error() => {
                    warn!(
                        event = "core.sweep.location_skipped",
                        kind = kind.name(),
                        location = location.as_str(),
                        error = %err
                    );
                }
                Err(err) if err.is_unexpected_location() => {
                    debug!(
                        event = "core.sweep.location_unsupported",
                        kind = kind.name(),
                        location = location.as_str()
                    );
                }
                Err(err) => return (deleted, Some(err)),
            }
        }

        (deleted, None)
    }

    /// Enumerate one scope unit, filter, and delete the survivors.
    fn sweep_scope(
        &self,
        kind: &dyn ResourceKind,
        location: Option<&str>,
    ) -> Result<Vec<String>, ApiError> {
        let request = kind.list_request(&self.project, location);
        let resources = list_all_pages(self.transport, &request)?;

        let mut deleted = Vec::new();
        for resource in &resources {
            if let Some(id) = kind.id(resource) {
                debug!(
                    event = "core.sweep.candidate",
                    kind = kind.name(),
                    id = id.as_str()
                );
            }

            if !self.eligible(kind, resource) {
                continue;
            }

            if let Some(id) = self.delete_resource(kind, location, resource) {
                deleted.push(id);
            }
        }

        Ok(deleted)
    }

    /// The deletion invariant: no protection label, stale, and not in use.
    fn eligible(&self, kind: &dyn ResourceKind, resource: &Value) -> bool {
        let protected = kind
            .labels(resource)
            .is_some_and(|labels| labels.get(PROTECTION_LABEL).is_some());
        if protected {
            debug!(event = "core.sweep.protected", kind = kind.name());
            return false;
        }

        let Some(timestamp) = kind.timestamp(resource) else {
            warn!(event = "core.sweep.missing_timestamp", kind = kind.name());
            return false;
        };
        if !is_stale_at(timestamp, self.now, self.stale_after) {
            return false;
        }

        !kind.in_use(resource)
    }

    /// Issue one delete. Failures are logged and swallowed here; one bad
    /// resource never aborts the rest of its location.
    fn delete_resource(
        &self,
        kind: &dyn ResourceKind,
        location: Option<&str>,
        resource: &Value,
    ) -> Option<String> {
        let singular = singular_name(kind.name());

        let Some(id) = kind.id(resource) else {
            warn!(event = "core.sweep.missing_id", kind = kind.name());
            return None;
        };

        let Some(request) = kind.delete_request(&self.project, location, resource) else {
            warn!(
                event = "core.sweep.missing_delete_fields",
                kind = singular,
                id = id.as_str()
            );
            return None;
        };

        if self.dry_run {
            info!(
                event = "core.sweep.would_delete",
                kind = singular,
                id = id.as_str()
            );
            return Some(id);
        }

        info!(event = "core.sweep.deleting", kind = singular, id = id.as_str());
        match self.transport.delete(&request) {
            Ok(()) => Some(id),
            Err(err) => {
                warn!(
                    event = "core.sweep.delete_failed",
                    kind = singular,
                    id = id.as_str(),
                    error = %err
                );
                None
            }
        }
    }
}

/// "disks" -> "disk"; already-singular names pass through.
fn singular_name(name: &str) -> &str {
    name.strip_suffix('s').unwrap_or(name)
}
