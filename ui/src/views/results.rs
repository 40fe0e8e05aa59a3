use dioxus::prelude::*;

use crate::app::{use_quiz_state, use_services};
use crate::components::FeedbackList;
use crate::core::format::format_score;
use crate::t;

#[component]
pub fn Results() -> Element {
    let services = use_services();
    let quiz = use_quiz_state();
    let nav = navigator();

    let Some(result) = quiz().result else {
        return rsx! {
            section { class: "page results-page",
                p { class: "results-page__notice", {t!("results-empty")} }
                Link { class: "results-page__restart", to: "/", {t!("results-go-back")} }
            }
        };
    };

    let score = format_score(result.score, result.total);
    let on_restart = move |_| {
        services.quiz.reset();
        nav.push("/");
    };

    rsx! {
        section { class: "page results-page",
            div { class: "results-page__summary",
                h2 { class: "results-page__title", {t!("results-title")} }
                div { class: "results-page__score", "{score}" }
                button { class: "results-page__restart", onclick: on_restart, {t!("results-restart")} }
            }
            FeedbackList { items: result.feedback }
            Link { class: "results-page__back", to: "/history", {t!("results-view-history")} }
        }
    }
}
