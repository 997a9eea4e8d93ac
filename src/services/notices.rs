use crate::domain::notice::Notice;
use crate::pagination::DEFAULT_ITEMS_PER_PAGE;
use crate::repository::{NoticeListQuery, NoticeReader, NoticeWriter};
use crate::services::ServiceResult;

/// Message shown in place of the list when loading fails.
pub const LOAD_ERROR_MESSAGE: &str = "Failed to load notices.";

/// In-memory state of the notice list page.
///
/// `notices` is a page-scoped cache in server response order; it is only
/// mutated locally when a delete is acknowledged by the API. `total_pages`
/// comes from the server and is not recomputed after local mutations.
#[derive(Debug, PartialEq)]
pub struct NoticeListPage {
    pub notices: Vec<Notice>,
    pub page: usize,
    pub total_pages: usize,
    pub error: Option<String>,
}

impl NoticeListPage {
    /// Removes the notice with the matching id, keeping the order of the
    /// remaining items. No-op when the id is not on this page.
    fn remove(&mut self, id: i64) {
        self.notices.retain(|notice| notice.id != id);
    }
}

/// Fetches one page of notices and builds the page state.
///
/// Any failure, including an envelope without `data`, collapses into a
/// single generic error state; there is no retry.
pub async fn load_notices_page<R>(repo: &R, page: usize) -> NoticeListPage
where
    R: NoticeReader,
{
    let query = NoticeListQuery::new().paginate(page, DEFAULT_ITEMS_PER_PAGE);

    match repo.list_notices(query).await {
        Ok(notice_page) => NoticeListPage {
            notices: notice_page.notices,
            page,
            total_pages: notice_page.total_pages.max(1),
            error: None,
        },
        Err(err) => {
            log::error!("Failed to list notices: {err}");
            NoticeListPage {
                notices: Vec::new(),
                page,
                total_pages: 1,
                error: Some(LOAD_ERROR_MESSAGE.to_string()),
            }
        }
    }
}

/// Deletes a notice and, once the API acknowledges it, removes the item
/// from the page's in-memory sequence without re-fetching the list.
///
/// On failure the sequence is left untouched so the caller can offer a
/// retry.
pub async fn delete_notice<R>(
    repo: &R,
    state: &mut NoticeListPage,
    id: i64,
    credentials: Option<String>,
) -> ServiceResult<()>
where
    R: NoticeWriter,
{
    repo.delete_notice(id, credentials).await?;
    state.remove(id);

    Ok(())
}
