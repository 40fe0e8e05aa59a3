use api::models::FeedbackItem;
use dioxus::prelude::*;

use crate::t;

fn item_class(correct: bool) -> &'static str {
    if correct {
        "feedback__item feedback__item--correct"
    } else {
        "feedback__item feedback__item--wrong"
    }
}

/// Graded answers with the correct key and any explanation. An empty
/// selection means the question was left unanswered.
#[component]
pub fn FeedbackList(items: Vec<FeedbackItem>) -> Element {
    rsx! {
        ul { class: "feedback",
            for item in items {
                li { key: "{item.question_id}", class: item_class(item.is_correct),
                    div { class: "feedback__question", "{item.text}" }
                    div { class: "feedback__answer",
                        {t!("feedback-your-answer")}
                        " "
                        strong {
                            if item.selected_key.is_empty() {
                                {t!("feedback-no-answer")}
                            } else {
                                "{item.selected_key}"
                            }
                        }
                        " | "
                        {t!("feedback-correct")}
                        " "
                        strong { "{item.correct_key}" }
                    }
                    if let Some(explanation) = item.explanation.as_ref().filter(|e| !e.is_empty()) {
                        div { class: "feedback__explanation", "{explanation}" }
                    }
                }
            }
        }
    }
}
