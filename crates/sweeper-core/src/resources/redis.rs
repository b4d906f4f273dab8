//! In-memory cache instance surface (location-scoped).

use serde_json::Value;

use crate::api::{DeleteRequest, ListRequest};
use crate::resources::traits::{ListScope, ResourceKind};

#[derive(Debug)]
pub struct RedisInstances {
    base_url: String,
}

impl RedisInstances {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.to_string(),
        }
    }
}

impl ResourceKind for RedisInstances {
    fn name(&self) -> &'static str {
        "instances"
    }

    fn scope(&self) -> ListScope {
        ListScope::PerLocation
    }

    fn list_request(&self, project: &str, location: Option<&str>) -> ListRequest {
        ListRequest::with_key(
            format!(
                "{}/projects/{}/locations/{}/instances",
                self.base_url,
                project,
                location.unwrap_or_default()
            ),
            "instances",
        )
    }

    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
        resource.get("createTime").and_then(Value::as_str)
    }

    fn id(&self, resource: &Value) -> Option<String> {
        // The full resource name is the identifier on this surface
        resource.get("name").and_then(Value::as_str).map(str::to_string)
    }

    fn delete_request(
        &self,
        _project: &str,
        _location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest> {
        let name = resource.get("name").and_then(Value::as_str)?;
        Some(DeleteRequest::new(format!("{}/{}", self.base_url, name)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const BASE: &str = "https://redis.googleapis.com/v1";

    #[test]
    fn test_list_request_is_location_scoped() {
        let instances = RedisInstances::new(BASE);
        let request = instances.list_request("my-project", Some("us-east1"));
        assert_eq!(
            request.url,
            format!("{}/projects/my-project/locations/us-east1/instances", BASE)
        );
        assert_eq!(request.items_key, "instances");
    }

    #[test]
    fn test_delete_request_uses_full_resource_name() {
        let instances = RedisInstances::new(BASE);
        let resource = json!({
            "name": "projects/my-project/locations/us-east1/instances/cache-1"
        });
        let request = instances
            .delete_request("my-project", Some("us-east1"), &resource)
            .unwrap();
        assert_eq!(
            request.url,
            format!(
                "{}/projects/my-project/locations/us-east1/instances/cache-1",
                BASE
            )
        );
    }

    #[test]
    fn test_delete_request_requires_name() {
        let instances = RedisInstances::new(BASE);
        assert!(
            instances
                .delete_request("my-project", Some("us-east1"), &json!({}))
                .is_none()
        );
    }
}
