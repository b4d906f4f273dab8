//! Workflow environment surface (location-scoped).

use serde_json::Value;

use crate::api::{DeleteRequest, ListRequest};
use crate::resources::fields::last_segment;
use crate::resources::traits::{ListScope, ResourceKind};

#[derive(Debug)]
pub struct ComposerEnvironments {
    base_url: String,
}

impl ComposerEnvironments {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl ResourceKind for ComposerEnvironments {
    fn name(&self) -> &'static str {
        "environments"
    }

    fn scope(&self) -> ListScope {
        ListScope::PerLocation
    }

    fn list_request(&self, project: &str, location: Option<&str>) -> ListRequest {
        ListRequest::with_key(
            format!(
                "{}/projects/{}/locations/{}/environments",
                self.base_url,
                project,
                location.unwrap_or_default()
            ),
            "environments",
        )
    }

    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
        // Environments are long-lived and mutated in place; age is measured
        // from the last update
        resource.get("updateTime").and_then(Value::as_str)
    }

    fn id(&self, resource: &Value) -> Option<String> {
        resource
            .get("name")
            .and_then(Value::as_str)
            .map(|name| last_segment(name).to_string())
    }

    fn delete_request(
        &self,
        _project: &str,
        _location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest> {
        // Deletes address the environment's full resource name
        let name = resource.get("name").and_then(Value::as_str)?;
        Some(DeleteRequest::new(format!("{}/{}", self.base_url, name)))
    }
}
