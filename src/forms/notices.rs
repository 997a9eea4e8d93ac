use serde::Deserialize;

/// Posted by the delete button; carries the page being viewed so the
/// handler can re-render it.
#[derive(Debug, Deserialize)]
pub struct DeleteNoticeForm {
    #[serde(default)]
    pub page: usize,
}
