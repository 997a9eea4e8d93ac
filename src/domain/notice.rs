use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An announcement record managed by the notice API.
///
/// `content` carries HTML markup authored in the admin editor and is
/// rendered as-is by the templates.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all(deserialize = "camelCase"))]
pub struct Notice {
    pub id: i64,
    pub title: String,
    pub content: String,
    pub create_date: NaiveDateTime,
    pub modify_date: NaiveDateTime,
}

/// One page of notices as returned by the list endpoint, in server order.
#[derive(Clone, Debug, PartialEq)]
pub struct NoticePage {
    pub notices: Vec<Notice>,
    pub total_pages: usize,
}
