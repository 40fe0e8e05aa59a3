use dioxus::prelude::*;

use crate::app::{set_if_alive, use_auth_state, use_quiz_state, use_services};
use crate::components::{QuestionCard, Select, SelectOption};
use crate::core::categories::CATEGORIES;
use crate::t;

/// Select value meaning "no category filter".
const ALL_CATEGORIES: &str = "all";

/// Start screen, then one question at a time. Moves to `/results` as soon as
/// the attempt has been graded.
#[component]
pub fn Quiz() -> Element {
    let services = use_services();
    let quiz = use_quiz_state();
    let auth = use_auth_state();
    let nav = navigator();
    let mut category = use_signal(|| ALL_CATEGORIES.to_string());
    let mut error = use_signal(|| None::<String>);

    use_effect(move || {
        if quiz.read().result.is_some() {
            nav.push("/results");
        }
    });

    let state = quiz();

    if state.questions.is_empty() {
        let session = services.quiz.clone();
        let on_start = move |_| {
            let session = session.clone();
            let chosen = category();
            error.set(None);
            // Detached from this page: the session outlives it.
            spawn_forever(async move {
                let filter = (chosen != ALL_CATEGORIES).then_some(chosen);
                if let Err(err) = session.start(filter.as_deref()).await {
                    set_if_alive(error, Some(err.user_message(&t!("error-start-failed"))));
                }
            });
        };

        let options: Vec<SelectOption> =
            std::iter::once(SelectOption::new(ALL_CATEGORIES, t!("category-all")))
                .chain(CATEGORIES.iter().map(|c| SelectOption::plain(*c)))
                .collect();

        return rsx! {
            section { class: "page quiz-page quiz-page--start",
                h2 { class: "quiz-page__heading", {t!("quiz-ready-title")} }
                p { class: "quiz-page__lead", {t!("quiz-ready-lead")} }
                div { class: "quiz-page__intro",
                    h3 { class: "quiz-page__intro-title", {t!("quiz-intro-title")} }
                    ul { class: "quiz-page__intro-list",
                        li { class: "quiz-page__intro-item", {t!("quiz-intro-practice")} }
                        li { class: "quiz-page__intro-item", {t!("quiz-intro-results")} }
                        li { class: "quiz-page__intro-item", {t!("quiz-intro-history")} }
                        li { class: "quiz-page__intro-item", {t!("quiz-intro-admin")} }
                    }
                }
                div { class: "quiz-page__category",
                    label { class: "quiz-page__category-label", {t!("field-category")} }
                    Select {
                        name: "quizCategory".to_string(),
                        value: category(),
                        options,
                        onchange: move |value: String| category.set(value),
                    }
                }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                if auth().is_signed_in() {
                    button {
                        class: "quiz-page__nav-btn quiz-page__nav-btn--primary",
                        disabled: state.loading,
                        onclick: on_start,
                        if state.loading { {t!("quiz-preparing")} } else { {t!("quiz-start")} }
                    }
                } else {
                    div { class: "quiz-page__login-cta",
                        p { {t!("quiz-login-required")} }
                        Link { class: "quiz-page__nav-btn quiz-page__nav-btn--primary", to: "/login",
                            {t!("quiz-login-cta")}
                        }
                    }
                }
            }
        };
    }

    let on_prev = {
        let session = services.quiz.clone();
        move |_| session.prev()
    };
    let on_next = {
        let session = services.quiz.clone();
        move |_| session.next()
    };
    let on_submit = {
        let session = services.quiz.clone();
        move |_| {
            let session = session.clone();
            error.set(None);
            spawn_forever(async move {
                if let Err(err) = session.submit().await {
                    set_if_alive(error, Some(err.user_message(&t!("error-submit-failed"))));
                }
            });
        }
    };
    let current = state.current_question().cloned();
    let selected = current
        .as_ref()
        .and_then(|q| state.selected_key(&q.id))
        .map(str::to_string);
    let on_select = {
        let session = services.quiz.clone();
        let question_id = current.as_ref().map(|q| q.id.clone()).unwrap_or_default();
        move |key: String| session.select(&question_id, &key)
    };
    let total = state.questions.len();

    rsx! {
        section { class: "page quiz-page",
            if let Some(question) = current {
                QuestionCard {
                    question,
                    index: state.current_index,
                    total,
                    selected_key: selected,
                    onselect: on_select,
                }
            }

            if let Some(message) = error() {
                div { class: "form-error", "{message}" }
            }

            div { class: "quiz-page__controls",
                button {
                    class: "quiz-page__nav-btn",
                    disabled: state.is_first(),
                    onclick: on_prev,
                    {t!("quiz-previous")}
                }
                if state.is_last() {
                    button {
                        class: "quiz-page__nav-btn quiz-page__nav-btn--primary",
                        disabled: state.loading,
                        onclick: on_submit,
                        {t!("quiz-submit")}
                    }
                } else {
                    button {
                        class: "quiz-page__nav-btn quiz-page__nav-btn--primary",
                        onclick: on_next,
                        {t!("quiz-next")}
                    }
                }
            }
        }
    }
}
