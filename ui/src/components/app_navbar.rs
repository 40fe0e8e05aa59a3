use crate::app::{use_auth_state, use_services};
use crate::i18n;
use crate::t;
use dioxus::prelude::*;
use tracing::warn;

const NAVBAR_CSS: Asset = asset!("/assets/styling/navbar.css");
const NAVBAR_CSS_INLINE: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/assets/styling/navbar.css"
));

/// Top bar with role-gated links and the language switcher.
///
/// Links are plain paths so this component does not depend on a platform's
/// `Route` enum. Students see the quiz pages, admins the management pages.
/// Gating is cosmetic; the API rejects requests the role may not make.
///
/// Language changes are pushed into the `Signal<String>` context the
/// platform provides, which the platform uses to remount the routed tree.
#[component]
pub fn AppNavbar() -> Element {
    i18n::init();

    let services = use_services();
    let nav = navigator();
    let auth = use_auth_state();
    let mut current_lang = use_signal(i18n::current_language);
    let langs = use_signal(i18n::available_languages);
    let show_switcher = langs().len() > 1;
    let lang_code_ctx: Option<Signal<String>> = try_use_context::<Signal<String>>();

    let on_change = move |evt: dioxus::events::FormEvent| {
        let val = evt.value();
        match i18n::set_language(&val) {
            Ok(()) => {
                current_lang.set(val.clone());
                if let Some(mut code) = lang_code_ctx {
                    code.set(val);
                }
            }
            Err(err) => warn!(%err, lang = %val, "language switch failed"),
        }
    };

    let on_logout = move |_| {
        services.auth.logout();
        services.quiz.reset();
        nav.replace("/");
    };

    let state = auth();
    let is_admin = state.is_admin();

    rsx! {
        document::Link { rel: "stylesheet", href: NAVBAR_CSS }
        if cfg!(all(not(debug_assertions), not(target_arch = "wasm32"))) {
            document::Style { "{NAVBAR_CSS_INLINE}" }
        }

        header {
            id: "navbar",
            class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-link",
                        span { class: "navbar__brand-spark", aria_hidden: "true" }
                        span { class: "navbar__brand-mark", {t!("app-title")} }
                    }
                    span { class: "navbar__brand-subtitle", {t!("tagline")} }
                }

                nav { class: "navbar__links",
                    if is_admin {
                        Link { class: "navbar__link", active_class: "navbar__link--active", to: "/admin/questions",
                            {t!("nav-admin")}
                        }
                        Link { class: "navbar__link", active_class: "navbar__link--active", to: "/admin/analytics",
                            {t!("nav-analytics")}
                        }
                        Link { class: "navbar__link", active_class: "navbar__link--active", to: "/admin/users",
                            {t!("nav-users")}
                        }
                    } else {
                        Link { class: "navbar__link", active_class: "navbar__link--active", to: "/",
                            {t!("nav-quiz")}
                        }
                        if state.is_signed_in() {
                            Link { class: "navbar__link", active_class: "navbar__link--active", to: "/history",
                                {t!("nav-history")}
                            }
                            Link { class: "navbar__link", active_class: "navbar__link--active", to: "/insights",
                                {t!("nav-insights")}
                            }
                        }
                    }

                    if let Some(user) = state.user.as_ref() {
                        button { class: "navbar__link navbar__link--button", r#type: "button", onclick: on_logout,
                            {t!("nav-logout", name = user.name.as_str())}
                        }
                    } else {
                        Link { class: "navbar__link", active_class: "navbar__link--active", to: "/login",
                            {t!("nav-login")}
                        }
                    }
                }

                if show_switcher {
                    div { class: "navbar__locale",
                        label {
                            class: "visually-hidden",
                            r#for: "locale-select",
                            {t!("nav-language-label")}
                        }
                        select {
                            id: "locale-select",
                            value: "{current_lang()}",
                            oninput: on_change,
                            { langs().iter().map(|code| {
                                let c = code.clone();
                                rsx!{
                                    option { key: "{c}", value: "{c}", "{c}" }
                                }
                            })}
                        }
                    }
                }
            }
        }
    }
}
