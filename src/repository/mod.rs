use crate::domain::notice::NoticePage;
use crate::repository::errors::RepositoryResult;

pub mod api;
pub mod errors;

#[derive(Debug, Clone, PartialEq)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeListQuery {
    pub pagination: Option<Pagination>,
}

impl NoticeListQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

pub trait NoticeReader {
    async fn list_notices(&self, query: NoticeListQuery) -> RepositoryResult<NoticePage>;
}

pub trait NoticeWriter {
    /// Deletes a notice by id. `credentials` is the caller's Cookie header,
    /// forwarded verbatim to the API.
    async fn delete_notice(&self, id: i64, credentials: Option<String>) -> RepositoryResult<()>;
}
