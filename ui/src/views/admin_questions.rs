use api::models::BankQuestion;
use dioxus::prelude::*;
use tracing::info;

use crate::app::use_services;
use crate::bank::{QuestionDraft, OPTION_KEYS};
use crate::components::{AdminOnly, Select, SelectOption};
use crate::core::categories::CATEGORIES;
use crate::t;

const ALL_CATEGORIES: &str = "All";

#[component]
pub fn AdminQuestions() -> Element {
    rsx! {
        AdminOnly { QuestionBank {} }
    }
}

/// Questions in `category`, or all of them for [`ALL_CATEGORIES`].
fn filter_questions<'a>(list: &'a [BankQuestion], category: &str) -> Vec<&'a BankQuestion> {
    list.iter()
        .filter(|q| category == ALL_CATEGORIES || q.category == category)
        .collect()
}

#[component]
fn QuestionBank() -> Element {
    let services = use_services();
    let client = services.client.clone();
    let mut questions = use_resource(move || {
        let client = client.clone();
        async move { client.list_questions().await }
    });

    let mut draft = use_signal(QuestionDraft::default);
    let mut saving = use_signal(|| false);
    let mut error = use_signal(|| None::<String>);
    let mut filter = use_signal(|| ALL_CATEGORIES.to_string());
    let mut pending_delete = use_signal(|| None::<String>);

    let on_submit = {
        let client = services.client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let current = draft();
            if !current.can_save() {
                return;
            }
            let client = client.clone();
            spawn(async move {
                saving.set(true);
                error.set(None);
                let payload = current.payload();
                let outcome = match current.editing_id.as_deref() {
                    Some(id) => client.update_question(id, &payload).await,
                    None => client.create_question(&payload).await,
                };
                match outcome {
                    Ok(saved) => {
                        info!(question = %saved.id, "question saved");
                        draft.write().reset();
                        questions.restart();
                    }
                    Err(err) => error.set(Some(err.user_message(&t!("error-save-failed")))),
                }
                saving.set(false);
            });
        }
    };

    let delete_question = {
        let client = services.client.clone();
        move |id: String| {
            let client = client.clone();
            spawn(async move {
                pending_delete.set(None);
                if let Err(err) = client.delete_question(&id).await {
                    error.set(Some(err.user_message(&t!("error-failed"))));
                }
                questions.restart();
            });
        }
    };

    let form = draft();
    let category_options: Vec<SelectOption> =
        CATEGORIES.iter().map(|c| SelectOption::plain(*c)).collect();
    let filter_options: Vec<SelectOption> =
        std::iter::once(SelectOption::new(ALL_CATEGORIES, t!("category-all")))
            .chain(category_options.iter().cloned())
            .collect();
    let correct_options: Vec<SelectOption> = OPTION_KEYS
        .iter()
        .zip(&form.options)
        .map(|(key, text)| {
            let text = if text.is_empty() { "…" } else { text.as_str() };
            SelectOption::new(*key, format!("{key} — {text}"))
        })
        .collect();
    let submit_label = if saving() {
        t!("bank-saving")
    } else if form.is_editing() {
        t!("bank-save-changes")
    } else {
        t!("bank-create")
    };

    let list = match &*questions.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(all)) => {
            let visible: Vec<BankQuestion> = filter_questions(all, &filter())
                .into_iter()
                .cloned()
                .collect();
            rsx! {
                ul { class: "admin-questions__list",
                    for question in visible {
                        li { key: "{question.id}", class: "admin-questions__item",
                            div { class: "admin-questions__q", "{question.text}" }
                            div { class: "admin-questions__meta", "{question.category}" }
                            div { class: "admin-questions__row-actions",
                                button {
                                    class: "button",
                                    r#type: "button",
                                    onclick: {
                                        let question = question.clone();
                                        move |_| draft.set(QuestionDraft::from_question(&question))
                                    },
                                    {t!("bank-edit")}
                                }
                                if pending_delete().as_deref() == Some(question.id.as_str()) {
                                    button {
                                        class: "button button--danger",
                                        r#type: "button",
                                        onclick: {
                                            let mut delete_question = delete_question.clone();
                                            let id = question.id.clone();
                                            move |_| delete_question(id.clone())
                                        },
                                        {t!("bank-confirm-delete")}
                                    }
                                    button {
                                        class: "button",
                                        r#type: "button",
                                        onclick: move |_| pending_delete.set(None),
                                        {t!("bank-cancel")}
                                    }
                                } else {
                                    button {
                                        class: "button button--danger",
                                        r#type: "button",
                                        onclick: {
                                            let id = question.id.clone();
                                            move |_| pending_delete.set(Some(id.clone()))
                                        },
                                        {t!("bank-delete")}
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page admin-questions",
            h2 { class: "admin-questions__title", {t!("bank-title")} }

            form { class: "admin-questions__form", onsubmit: on_submit,
                label { class: "field field--inline",
                    span { class: "field__label", {t!("field-category")} }
                    Select {
                        name: "category".to_string(),
                        value: form.category.clone(),
                        options: category_options,
                        onchange: move |value: String| draft.write().category = value,
                    }
                }
                label { class: "field",
                    span { class: "field__label", {t!("bank-question")} }
                    textarea {
                        rows: "3",
                        required: true,
                        value: "{form.text}",
                        oninput: move |e| draft.write().text = e.value(),
                    }
                }
                div { class: "admin-questions__grid",
                    for (index, key) in OPTION_KEYS.iter().map(|k| k.to_string()).enumerate() {
                        label { key: "{key}", class: "field",
                            span { class: "field__label", {t!("bank-option", key = key.clone())} }
                            input {
                                required: true,
                                value: form.options[index].clone(),
                                oninput: move |e| draft.write().set_option(index, e.value()),
                            }
                        }
                    }
                }
                label { class: "field field--inline",
                    span { class: "field__label", {t!("bank-correct-option")} }
                    Select {
                        name: "correctKey".to_string(),
                        value: form.correct_key.clone(),
                        options: correct_options,
                        onchange: move |value: String| draft.write().correct_key = value,
                    }
                }
                label { class: "field",
                    span { class: "field__label", {t!("bank-explanation")} }
                    textarea {
                        rows: "2",
                        value: "{form.explanation}",
                        oninput: move |e| draft.write().explanation = e.value(),
                    }
                }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                div { class: "admin-questions__actions",
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: !form.can_save() || saving(),
                        "{submit_label}"
                    }
                    if form.is_editing() {
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: move |_| draft.write().reset(),
                            {t!("bank-cancel")}
                        }
                    }
                }
            }

            h3 { class: "admin-questions__subtitle", {t!("bank-existing")} }
            div { class: "admin-questions__filters",
                label { class: "field field--inline",
                    span { class: "field__label", {t!("bank-filter")} }
                    Select {
                        name: "filterCategory".to_string(),
                        value: filter(),
                        options: filter_options,
                        onchange: move |value: String| filter.set(value),
                    }
                }
            }
            {list}
        }
    }
}
