//! Transport trait the engine and adapters are written against.

use serde_json::Value;

use crate::api::errors::ApiError;
use crate::api::types::{DeleteRequest, ListRequest};

/// Blocking REST transport for list and delete calls.
pub trait RestTransport {
    /// Fetch one page of a listing.
    ///
    /// `page_token` is the continuation token from the previous page's
    /// response, absent on the first call. Returns the raw JSON page; the
    /// enumerator owns item extraction and continuation.
    fn list_page(&self, request: &ListRequest, page_token: Option<&str>)
    -> Result<Value, ApiError>;

    /// Delete one resource.
    fn delete(&self, request: &DeleteRequest) -> Result<(), ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    struct StaticTransport;

    impl RestTransport for StaticTransport {
        fn list_page(
            &self,
            _request: &ListRequest,
            page_token: Option<&str>,
        ) -> Result<Value, ApiError> {
            assert!(page_token.is_none());
            Ok(json!({ "items": [] }))
        }

        fn delete(&self, _request: &DeleteRequest) -> Result<(), ApiError> {
            Ok(())
        }
    }

    #[test]
    fn transport_is_object_safe() {
        let transport: &dyn RestTransport = &StaticTransport;
        let request = ListRequest::new("https://example.com/items".to_string());
        let page = transport.list_page(&request, None).unwrap();
        assert!(page.get("items").is_some());
    }
}
