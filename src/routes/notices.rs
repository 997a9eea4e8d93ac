use actix_web::http::header;
use actix_web::{HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use tera::{Context, Tera};

use crate::forms::notices::DeleteNoticeForm;
use crate::pagination::Paginated;
use crate::repository::api::ApiNoticeRepository;
use crate::routes::{redirect, render_template};
use crate::services::notices as notices_service;
use crate::services::notices::NoticeListPage;

#[derive(Deserialize)]
struct NoticesQueryParams {
    page: Option<String>,
}

impl NoticesQueryParams {
    /// Invalid or missing values fall back to the first page.
    fn page(&self) -> usize {
        self.page
            .as_deref()
            .and_then(|p| p.parse().ok())
            .unwrap_or(0)
    }
}

fn render_notices(tera: &Tera, state: NoticeListPage, alerts: Vec<(String, &str)>) -> HttpResponse {
    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "notices");

    if let Some(error) = &state.error {
        context.insert("error", error);
    }

    let notices = Paginated::new(state.notices, state.page, state.total_pages);
    context.insert("notices", &notices);

    render_template(tera, "notices/index.html", &context)
}

#[get("/")]
pub async fn index() -> impl Responder {
    redirect("/notices")
}

#[get("/notices")]
pub async fn show_notices(
    params: web::Query<NoticesQueryParams>,
    repo: web::Data<ApiNoticeRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let state = notices_service::load_notices_page(repo.get_ref(), params.page()).await;

    render_notices(&tera, state, Vec::new())
}

#[post("/notices/{id}/delete")]
pub async fn delete_notice(
    req: HttpRequest,
    path: web::Path<i64>,
    web::Form(form): web::Form<DeleteNoticeForm>,
    repo: web::Data<ApiNoticeRepository>,
    tera: web::Data<Tera>,
) -> impl Responder {
    let id = path.into_inner();
    let credentials = req
        .headers()
        .get(header::COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_string);

    // One list fetch for the page being viewed; the delete mutates that
    // sequence in place instead of fetching again.
    let mut state = notices_service::load_notices_page(repo.get_ref(), form.page).await;

    let alerts =
        match notices_service::delete_notice(repo.get_ref(), &mut state, id, credentials).await {
            Ok(()) => vec![("Notice deleted.".to_string(), "success")],
            Err(err) => {
                log::error!("Failed to delete notice {id}: {err}");
                vec![("Failed to delete notice.".to_string(), "danger")]
            }
        };

    render_notices(&tera, state, alerts)
}
