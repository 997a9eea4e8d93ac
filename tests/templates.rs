use chrono::NaiveDate;
use tera::{Context, Tera};

use notice_admin::domain::notice::Notice;
use notice_admin::pagination::Paginated;

fn notice(id: i64, title: &str, content: &str) -> Notice {
    let stamp = NaiveDate::from_ymd_opt(2025, 2, 14)
        .unwrap()
        .and_hms_opt(12, 0, 0)
        .unwrap();
    Notice {
        id,
        title: title.to_string(),
        content: content.to_string(),
        create_date: stamp,
        modify_date: stamp,
    }
}

fn render(notices: Paginated<Notice>, error: Option<&str>, alerts: Vec<(&str, &str)>) -> String {
    let tera = Tera::new("templates/**/*.html").unwrap();

    let mut context = Context::new();
    context.insert("alerts", &alerts);
    context.insert("current_page", "notices");
    if let Some(error) = error {
        context.insert("error", error);
    }
    context.insert("notices", &notices);

    tera.render("notices/index.html", &context).unwrap()
}

#[test]
fn test_error_state_replaces_all_other_content() {
    let body = render(
        Paginated::new(vec![], 0, 1),
        Some("Failed to load notices."),
        vec![],
    );

    assert!(body.contains("Failed to load notices."));
    assert!(!body.contains("New notice"));
    assert!(!body.contains("Previous"));
    assert!(!body.contains("Next"));
}

#[test]
fn test_list_state_renders_items_and_controls() {
    let notices = Paginated::new(
        vec![
            notice(1, "First", "<p>Hello <b>there</b></p>"),
            notice(2, "Second", "<p>Bye</p>"),
        ],
        1,
        3,
    );
    let body = render(notices, None, vec![("Notice deleted.", "success")]);

    assert!(body.contains("First"));
    assert!(body.contains("Second"));
    // Content is rendered as raw markup, not escaped.
    assert!(body.contains("<p>Hello <b>there</b></p>"));
    // Prev/next links move by exactly one page each way.
    assert!(body.contains("/notices?page=0"));
    assert!(body.contains("/notices?page=2"));
    assert!(body.contains("2 / 3"));
    // The delete form posts back the page being viewed.
    assert!(body.contains(r#"action="/notices/1/delete""#));
    assert!(body.contains(r#"name="page" value="1""#));
    assert!(body.contains("alert-success"));
    assert!(body.contains("Notice deleted."));
}

#[test]
fn test_bounds_disable_controls_instead_of_linking() {
    let body = render(Paginated::new(vec![notice(1, "Only", "x")], 0, 1), None, vec![]);

    assert!(!body.contains("/notices?page="));
    assert_eq!(body.matches("disabled").count(), 2);
}
