//! Container cluster surface.
//!
//! The one kind that never iterates locations: the listing accepts the `-`
//! wildcard and returns clusters from every location in a single response.

use serde_json::Value;

use crate::api::{DeleteRequest, ListRequest};
use crate::resources::traits::{ListScope, ResourceKind};

#[derive(Debug)]
pub struct ContainerClusters {
    base_url: String,
}

impl ContainerClusters {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl ResourceKind for ContainerClusters {
    fn name(&self) -> &'static str {
        "clusters"
    }

    fn scope(&self) -> ListScope {
        ListScope::AllLocations
    }

    fn list_request(&self, project: &str, _location: Option<&str>) -> ListRequest {
        ListRequest::with_key(
            format!("{}/projects/{}/locations/-/clusters", self.base_url, project),
            "clusters",
        )
    }

    fn labels<'a>(&self, resource: &'a Value) -> Option<&'a Value> {
        // This surface calls its label map resourceLabels
        resource.get("resourceLabels")
    }

    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
        resource.get("createTime").and_then(Value::as_str)
    }

    fn id(&self, resource: &Value) -> Option<String> {
        resource.get("name").and_then(Value::as_str).map(str::to_string)
    }

    fn delete_request(
        &self,
        project: &str,
        _location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest> {
        let name = resource.get("name").and_then(Value::as_str)?;
        let zone = resource.get("zone").and_then(Value::as_str)?;

        Some(DeleteRequest::new(format!(
            "{}/projects/{}/locations/{}/clusters/{}",
            self.base_url, project, zone, name
        )))
    }
}
