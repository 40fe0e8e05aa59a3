use api::models::{NewUser, Role, UserRow};
use dioxus::prelude::*;

use crate::app::use_services;
use crate::components::{AdminOnly, Select, SelectOption};
use crate::t;

#[component]
pub fn AdminUsers() -> Element {
    rsx! {
        AdminOnly { UserManager {} }
    }
}

fn role_from_value(value: &str) -> Role {
    match value {
        "admin" => Role::Admin,
        _ => Role::Student,
    }
}

#[component]
fn UserManager() -> Element {
    let services = use_services();
    let client = services.client.clone();
    let mut users = use_resource(move || {
        let client = client.clone();
        async move { client.list_users(None).await }
    });

    let mut name = use_signal(String::new);
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);
    // New accounts created here default to admin; students self-register.
    let mut role = use_signal(|| Role::Admin);
    let mut error = use_signal(|| None::<String>);

    let on_create = {
        let client = services.client.clone();
        move |evt: FormEvent| {
            evt.prevent_default();
            let client = client.clone();
            spawn(async move {
                error.set(None);
                let user = NewUser {
                    name: name(),
                    email: email(),
                    password: password(),
                    role: role(),
                };
                match client.create_user(&user).await {
                    Ok(_) => {
                        name.set(String::new());
                        email.set(String::new());
                        password.set(String::new());
                        role.set(Role::Admin);
                        users.restart();
                    }
                    Err(err) => {
                        error.set(Some(err.user_message(&t!("error-create-user-failed"))))
                    }
                }
            });
        }
    };

    let toggle_role = {
        let client = services.client.clone();
        move |user: UserRow| {
            let client = client.clone();
            spawn(async move {
                if let Err(err) = client.update_user_role(&user.id, user.role.toggled()).await {
                    error.set(Some(err.user_message(&t!("error-failed"))));
                }
                users.restart();
            });
        }
    };

    let role_options = vec![
        SelectOption::new(Role::Admin.as_str(), t!("role-admin")),
        SelectOption::new(Role::Student.as_str(), t!("role-student")),
    ];

    let list = match &*users.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(rows)) => rsx! {
            ul { class: "admin-users__list",
                for user in rows.iter().cloned() {
                    li { key: "{user.id}", class: "admin-users__item",
                        div { class: "admin-users__info",
                            div { class: "admin-users__name", "{user.name}" }
                            div { class: "admin-users__email", "{user.email}" }
                        }
                        div { class: "admin-users__role", {user.role.as_str()} }
                        button {
                            class: "button",
                            r#type: "button",
                            onclick: {
                                let mut toggle_role = toggle_role.clone();
                                let user = user.clone();
                                move |_| toggle_role(user.clone())
                            },
                            if user.role == Role::Admin {
                                {t!("users-make-student")}
                            } else {
                                {t!("users-make-admin")}
                            }
                        }
                    }
                }
            }
        },
    };

    rsx! {
        section { class: "page admin-users",
            h2 { class: "admin-users__title", {t!("users-title")} }

            form { class: "admin-users__form", onsubmit: on_create,
                label { class: "field",
                    span { class: "field__label", {t!("field-name")} }
                    input { required: true, value: "{name}", oninput: move |e| name.set(e.value()) }
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
                label { class: "field field--inline",
                    span { class: "field__label", {t!("field-role")} }
                    Select {
                        name: "role".to_string(),
                        value: role().as_str().to_string(),
                        options: role_options,
                        onchange: move |value: String| role.set(role_from_value(&value)),
                    }
                }
                if let Some(message) = error() {
                    div { class: "form-error", "{message}" }
                }
                button { class: "button button--primary", r#type: "submit", {t!("users-create")} }
            }

            h3 { class: "admin-users__subtitle", {t!("users-all")} }
            {list}
        }
    }
}
