/// One list call against a management surface.
///
/// The URL identifies the collection with the scope already bound
/// (project, and region or zone where the surface wants one). The items
/// key names the response field holding the result array; most surfaces
/// use `items`, the cluster and environment surfaces name the collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListRequest {
    pub url: String,
    pub items_key: &'static str,
}

impl ListRequest {
    pub fn new(url: String) -> Self {
        Self {
            url,
            items_key: "items",
        }
    }

    pub fn with_key(url: String, items_key: &'static str) -> Self {
        Self { url, items_key }
    }
}

/// A delete call for one concrete resource.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeleteRequest {
    pub url: String,
}

impl DeleteRequest {
    pub fn new(url: String) -> Self {
        Self { url }
    }
}
