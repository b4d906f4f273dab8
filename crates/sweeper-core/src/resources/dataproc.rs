//! Big-data cluster surface (region-scoped).

use serde_json::Value;

use crate::api::{DeleteRequest, ListRequest};
use crate::resources::traits::{ListScope, ResourceKind};

#[derive(Debug)]
pub struct DataprocClusters {
    base_url: String,
}

impl DataprocClusters {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl ResourceKind for DataprocClusters {
    fn name(&self) -> &'static str {
        "clusters"
    }

    fn scope(&self) -> ListScope {
        ListScope::PerLocation
    }

    fn list_request(&self, project: &str, location: Option<&str>) -> ListRequest {
        ListRequest::with_key(
            format!(
                "{}/projects/{}/regions/{}/clusters",
                self.base_url,
                project,
                location.unwrap_or_default()
            ),
            "clusters",
        )
    }

    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
        // Age is measured from the last state transition, not creation
        resource
            .pointer("/status/stateStartTime")
            .and_then(Value::as_str)
    }

    fn id(&self, resource: &Value) -> Option<String> {
        resource
            .get("clusterName")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    fn delete_request(
        &self,
        project: &str,
        location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest> {
        let region = location?;
        let name = resource.get("clusterName").and_then(Value::as_str)?;

        Some(DeleteRequest::new(format!(
            "{}/projects/{}/regions/{}/clusters/{}",
            self.base_url, project, region, name
        )))
    }
}
