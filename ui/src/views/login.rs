use api::models::Role;
use dioxus::prelude::*;

use crate::app::{set_if_alive, use_auth_state, use_services};
use crate::t;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    Login,
    Register,
}

/// Sign in, or create a student account.
#[component]
pub fn Login() -> Element {
    let services = use_services();
    let auth = use_auth_state();
    let nav = navigator();
    let mut mode = use_signal(|| Mode::Login);
    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    // Leave the page once a session exists, however it got there.
    use_effect(move || {
        if auth.read().is_signed_in() {
            nav.push("/");
        }
    });

    let on_submit = move |evt: FormEvent| {
        evt.prevent_default();
        let session = services.auth.clone();
        let (mode, name, email, password) = (mode(), name(), email(), password());
        error.set(None);
        // Detached from this page: the session outlives it.
        spawn_forever(async move {
            let outcome = match mode {
                Mode::Login => session.login(&email, &password).await,
                Mode::Register => {
                    session
                        .register(&name, &email, &password, Role::default())
                        .await
                }
            };
            if let Err(err) = outcome {
                set_if_alive(error, Some(err.user_message(&t!("error-failed"))));
            }
        });
    };

    let registering = mode() == Mode::Register;
    let title = if registering {
        t!("login-register")
    } else {
        t!("login-title")
    };

    rsx! {
        section { class: "page login-page",
            h2 { class: "login-page__title", "{title}" }
            form { class: "login-page__form", onsubmit: on_submit,
                if registering {
                    label { class: "field",
                        span { class: "field__label", {t!("field-name")} }
                        input {
                            required: true,
                            value: "{name}",
                            oninput: move |e| name.set(e.value()),
                        }
                    }
                }
                label { class: "field",
                    span { class: "field__label", {t!("field-email")} }
                    input {
                        r#type: "email",
                        required: true,
                        value: "{email}",
                        oninput: move |e| email.set(e.value()),
                    }
                }
                label { class: "field",
                    span { class: "field__label", {t!("field-password")} }
                    input {
                        r#type: "password",
                        required: true,
                        value: "{password}",
                        oninput: move |e| password.set(e.value()),
                    }
                }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                div { class: "login-page__actions",
                    button {
                        class: "button button--primary",
                        r#type: "submit",
                        disabled: auth().loading,
                        "{title}"
                    }
                    button {
                        class: "button button--link",
                        r#type: "button",
                        onclick: move |_| {
                            error.set(None);
                            mode.set(if registering { Mode::Login } else { Mode::Register });
                        },
                        if registering {
                            {t!("login-have-account")}
                        } else {
                            {t!("login-need-account")}
                        }
                    }
                }
            }
        }
    }
}
