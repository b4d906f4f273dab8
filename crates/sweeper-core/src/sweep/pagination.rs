//! Paginated enumeration of list responses.

use serde_json::Value;
use tracing::debug;

use crate::api::{ApiError, ListRequest, RestTransport};

/// Follow `nextPageToken` continuation until the listing is exhausted and
/// return every item under the request's response key, in page order.
///
/// A page without a continuation token ends the sequence; surfaces that
/// return everything in a single response (or that do not paginate at all)
/// terminate on the first page. Empty listings commonly omit the items key
/// entirely, so a missing key is an empty page, not an error.
pub fn list_all_pages(
    transport: &dyn RestTransport,
    request: &ListRequest,
) -> Result<Vec<Value>, ApiError> {
    let mut items = Vec::new();
    let mut page_token: Option<String> = None;

    loop {
        let response = transport.list_page(request, page_token.as_deref())?;

        match response.get(request.items_key).and_then(Value::as_array) {
            Some(page_items) => items.extend(page_items.iter().cloned()),
            None => {
                debug!(
                    event = "core.sweep.items_key_missing",
                    url = request.url.as_str(),
                    key = request.items_key
                );
            }
        }

        page_token = response
            .get("nextPageToken")
            .and_then(Value::as_str)
            .filter(|token| !token.is_empty())
            .map(str::to_string);

        if page_token.is_none() {
            return Ok(items);
        }
    }
}
