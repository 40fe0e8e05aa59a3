use api::models::Question;
use dioxus::prelude::*;

use crate::t;

fn option_class(selected: bool) -> &'static str {
    if selected {
        "question-card__option question-card__option--selected"
    } else {
        "question-card__option"
    }
}

/// One quiz question with radio options. Selection is reported by option
/// key, never by position.
#[component]
pub fn QuestionCard(
    question: Question,
    index: usize,
    total: usize,
    selected_key: Option<String>,
    onselect: EventHandler<String>,
) -> Element {
    let group = format!("q-{}", question.id);
    // `t!` arguments must be plain values, not expressions.
    let (current, total) = (index as u64 + 1, total as u64);

    rsx! {
        div { class: "question-card",
            div { class: "question-card__meta",
                span { class: "question-card__category", "{question.category}" }
                span { class: "question-card__progress",
                    {t!("quiz-progress", current = current, total = total)}
                }
            }
            h2 { class: "question-card__text", "{question.text}" }
            form {
                class: "question-card__options",
                onsubmit: move |evt| evt.prevent_default(),
                for opt in question.options.iter().cloned() {
                    label {
                        key: "{opt.key}",
                        class: option_class(selected_key.as_deref() == Some(opt.key.as_str())),
                        input {
                            r#type: "radio",
                            name: "{group}",
                            value: "{opt.key}",
                            checked: selected_key.as_deref() == Some(opt.key.as_str()),
                            onchange: {
                                let key = opt.key.clone();
                                move |_| onselect.call(key.clone())
                            },
                        }
                        span { class: "question-card__option-key", "{opt.key}." }
                        span { class: "question-card__option-text", "{opt.text}" }
                    }
                }
            }
        }
    }
}
