use reqwest::header;

use crate::domain::notice::NoticePage;
use crate::dto::notices::{ApiEnvelope, NoticePageDto};
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{NoticeListQuery, NoticeReader, NoticeWriter};

/// HTTP implementation of the notice repository against the backend API.
#[derive(Clone)]
pub struct ApiNoticeRepository {
    base_url: String,
    client: reqwest::Client,
}

impl ApiNoticeRepository {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            client: reqwest::Client::new(),
        }
    }
}

impl NoticeReader for ApiNoticeRepository {
    async fn list_notices(&self, query: NoticeListQuery) -> RepositoryResult<NoticePage> {
        let url = format!("{}/api/v1/notices/list", self.base_url);

        let mut request = self.client.get(url);
        if let Some(pagination) = &query.pagination {
            request = request.query(&[("page", pagination.page), ("size", pagination.per_page)]);
        }

        let envelope: ApiEnvelope<NoticePageDto> = request.send().await?.json().await?;
        let page = envelope.data.ok_or(RepositoryError::MissingData)?;

        Ok(NoticePage {
            notices: page.content,
            total_pages: page.total_pages,
        })
    }
}

impl NoticeWriter for ApiNoticeRepository {
    async fn delete_notice(&self, id: i64, credentials: Option<String>) -> RepositoryResult<()> {
        let url = format!("{}/api/v1/notices/{id}", self.base_url);

        let mut request = self
            .client
            .delete(url)
            .header(header::CONTENT_TYPE, "application/json");
        if let Some(cookies) = credentials {
            request = request.header(header::COOKIE, cookies);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(RepositoryError::Status(response.status().as_u16()));
        }

        Ok(())
    }
}
