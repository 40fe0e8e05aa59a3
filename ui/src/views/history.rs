use api::QuizApi;
use dioxus::prelude::*;

use crate::app::use_services;
use crate::components::FeedbackList;
use crate::core::format::format_timestamp;
use crate::t;

#[component]
pub fn History() -> Element {
    let services = use_services();
    let history = use_resource(move || {
        let client = services.client.clone();
        async move { client.history().await }
    });

    let body = match &*history.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(items)) if items.is_empty() => {
            rsx! { div { class: "status", {t!("history-empty")} } }
        }
        Some(Ok(items)) => rsx! {
            ul { class: "history-page__list",
                for attempt in items.iter().cloned() {
                    li { key: "{attempt.id}", class: "history-page__item",
                        span { class: "history-page__score",
                            {format!("{} / {}", attempt.score, attempt.question_ids.len())}
                        }
                        span { class: "history-page__date", {format_timestamp(&attempt.created_at)} }
                        Link { class: "history-page__link", to: format!("/history/{}", attempt.id),
                            {t!("history-view-wrong")}
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page history-page",
            h2 { class: "history-page__title", {t!("history-title")} }
            {body}
        }
    }
}

/// Wrong answers of one past attempt.
#[component]
pub fn AttemptDetail(attempt_id: String) -> Element {
    let services = use_services();
    let detail = use_resource(use_reactive!(|(attempt_id,)| {
        let client = services.client.clone();
        async move { client.attempt_detail(&attempt_id, true).await }
    }));

    let body = match &*detail.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(detail)) => {
            let wrong = detail.grade.feedback.len();
            rsx! {
                h2 { class: "attempt-detail__title", {t!("attempt-wrong-title", count = wrong)} }
                p { class: "attempt-detail__summary",
                    {t!("attempt-score", score = detail.grade.score, total = detail.grade.total)}
                }
                FeedbackList { items: detail.grade.feedback.clone() }
            }
        }
    };

    rsx! {
        section { class: "page attempt-detail",
            {body}
            Link { class: "attempt-detail__back", to: "/history", {t!("attempt-back")} }
        }
    }
}
