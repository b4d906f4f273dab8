//! Compute surface: zone-scoped disks and instances, plus the region/zone
//! discovery listing every per-location kind reuses.

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiError, DeleteRequest, ListRequest, RestTransport};
use crate::resources::fields::{id_string, last_segment};
use crate::resources::traits::{ListScope, ResourceKind};
use crate::sweep::list_all_pages;

/// Region and zone names for the project, discovered once per run and
/// shared read-only across kinds.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Locations {
    pub regions: Vec<String>,
    pub zones: Vec<String>,
}

/// List the project's regions. Region names become the location list; each
/// region's zone URLs contribute their last path segment to the zone list.
pub fn discover_locations(
    transport: &dyn RestTransport,
    compute_base: &str,
    project: &str,
) -> Result<Locations, ApiError> {
    let request = ListRequest::new(format!("{}/projects/{}/regions", compute_base, project));
    let regions = list_all_pages(transport, &request)?;

    let mut locations = Locations::default();
    for region in &regions {
        if let Some(name) = region.get("name").and_then(Value::as_str) {
            locations.regions.push(name.to_string());
        }
        if let Some(zone_urls) = region.get("zones").and_then(Value::as_array) {
            for zone_url in zone_urls {
                if let Some(zone) = zone_url.as_str() {
                    locations.zones.push(last_segment(zone).to_string());
                }
            }
        }
    }

    debug!(
        event = "core.compute.locations_discovered",
        regions = locations.regions.len(),
        zones = locations.zones.len()
    );

    Ok(locations)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ComputeObject {
    Disks,
    Instances,
}

/// Disks and instances share one zone-scoped enumerate+delete routine; the
/// only differences are the collection name and the disk attachment check.
#[derive(Debug)]
pub struct ComputeKind {
    base_url: String,
    object: ComputeObject,
}

impl ComputeKind {
    pub fn disks(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            object: ComputeObject::Disks,
        }
    }

    pub fn instances(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
            object: ComputeObject::Instances,
        }
    }
}

impl ResourceKind for ComputeKind {
    fn name(&self) -> &'static str {
        match self.object {
            ComputeObject::Disks => "disks",
            ComputeObject::Instances => "instances",
        }
    }

    fn scope(&self) -> ListScope {
        ListScope::PerZone
    }

    fn list_request(&self, project: &str, location: Option<&str>) -> ListRequest {
        ListRequest::new(format!(
            "{}/projects/{}/zones/{}/{}",
            self.base_url,
            project,
            location.unwrap_or_default(),
            self.name()
        ))
    }

    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
        resource.get("creationTimestamp").and_then(Value::as_str)
    }

    fn in_use(&self, resource: &Value) -> bool {
        // Disks report attachments under `users`; instances never set the
        // field, so the check is a no-op for them.
        resource
            .get("users")
            .and_then(Value::as_array)
            .is_some_and(|users| !users.is_empty())
    }

    fn id(&self, resource: &Value) -> Option<String> {
        id_string(resource, "id")
    }

    fn delete_request(
        &self,
        project: &str,
        _location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest> {
        let id = self.id(resource)?;
        // Delete against the zone the resource itself reports, not the
        // enumeration loop variable; the two can drift.
        let zone = resource
            .get("zone")
            .and_then(Value::as_str)
            .map(last_segment)?;

        Some(DeleteRequest::new(format!(
            "{}/projects/{}/zones/{}/{}/{}",
            self.base_url,
            project,
            zone,
            self.name(),
            id
        )))
    }
}
