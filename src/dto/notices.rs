//! Wire types for the notice API's response envelope.

use serde::Deserialize;

use crate::domain::notice::Notice;

/// Generic `{ "data": ... }` envelope wrapping every API response.
///
/// `data` is absent on failures; extra envelope fields (message, code)
/// are ignored.
#[derive(Debug, Deserialize)]
pub struct ApiEnvelope<T> {
    pub data: Option<T>,
}

/// The paginated payload of the list endpoint.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NoticePageDto {
    pub content: Vec<Notice>,
    pub total_pages: usize,
}
