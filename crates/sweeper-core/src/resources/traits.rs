//! Adapter trait the sweep engine drives resource kinds through.

use serde_json::Value;

use crate::api::{DeleteRequest, ListRequest};

/// How a kind's listing is scoped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListScope {
    /// One wildcard listing covers every location.
    AllLocations,
    /// One listing per discovered region.
    PerLocation,
    /// One listing per discovered zone.
    PerZone,
}

/// Describes one cloud resource kind to the sweep engine.
///
/// Implementations own the exact request shapes and field names of their
/// management surface; the engine owns pagination, eligibility filtering,
/// the delete loop, and the location-tolerance policy.
pub trait ResourceKind {
    /// Collection name, plural (e.g. "disks"). Singularized for per-delete
    /// log lines.
    fn name(&self) -> &'static str;

    fn scope(&self) -> ListScope;

    /// Listing request for one scope unit. `location` is `None` for
    /// [`ListScope::AllLocations`] kinds, the region or zone name otherwise.
    fn list_request(&self, project: &str, location: Option<&str>) -> ListRequest;

    /// The label map checked for the protection label.
    fn labels<'a>(&self, resource: &'a Value) -> Option<&'a Value> {
        resource.get("labels")
    }

    /// The create/update timestamp fed to the staleness predicate.
    fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str>;

    /// Whether the resource is currently in use. In-use resources survive
    /// regardless of age.
    fn in_use(&self, _resource: &Value) -> bool {
        false
    }

    /// Identifier used in logs.
    fn id(&self, resource: &Value) -> Option<String>;

    /// Delete request for one resource, or `None` when the resource lacks a
    /// field the payload needs (the engine logs and skips it).
    fn delete_request(
        &self,
        project: &str,
        location: Option<&str>,
        resource: &Value,
    ) -> Option<DeleteRequest>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct MinimalKind;

    impl ResourceKind for MinimalKind {
        fn name(&self) -> &'static str {
            "widgets"
        }

        fn scope(&self) -> ListScope {
            ListScope::AllLocations
        }

        fn list_request(&self, project: &str, _location: Option<&str>) -> ListRequest {
            ListRequest::new(format!("https://example.com/{}/widgets", project))
        }

        fn timestamp<'a>(&self, resource: &'a Value) -> Option<&'a str> {
            resource.get("createTime").and_then(Value::as_str)
        }

        fn id(&self, resource: &Value) -> Option<String> {
            resource.get("name").and_then(Value::as_str).map(str::to_string)
        }

        fn delete_request(
            &self,
            _project: &str,
            _location: Option<&str>,
            resource: &Value,
        ) -> Option<DeleteRequest> {
            let name = resource.get("name").and_then(Value::as_str)?;
            Some(DeleteRequest::new(format!("https://example.com/{}", name)))
        }
    }

    #[test]
    fn default_label_accessor_reads_labels_field() {
        let kind = MinimalKind;
        let resource = json!({ "labels": { "team": "infra" } });
        assert_eq!(kind.labels(&resource).unwrap()["team"], "infra");
        assert!(kind.labels(&json!({})).is_none());
    }

    #[test]
    fn default_liveness_is_not_in_use() {
        let kind = MinimalKind;
        assert!(!kind.in_use(&json!({ "users": ["someone"] })));
    }
}
