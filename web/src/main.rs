use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::use_app_services;
use ui::views::{
    AdminAnalytics, AdminQuestions, AdminUsers, AttemptDetail, History, Home, Insights, Login,
    Results,
};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/results")]
    Results {},
    #[route("/history")]
    History {},
    #[route("/history/:attempt_id")]
    AttemptDetail { attempt_id: String },
    #[route("/insights")]
    Insights {},
    #[route("/admin/questions")]
    AdminQuestions {},
    #[route("/admin/analytics")]
    AdminAnalytics {},
    #[route("/admin/users")]
    AdminUsers {},
}

const MAIN_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    ui::i18n::init();

    // AppNavbar writes the chosen language here; keying on it remounts the routes.
    let lang_code = use_signal(ui::i18n::current_language);
    use_context_provider(|| lang_code);

    // Sessions outlive route changes, so they hang off the root.
    use_app_services();

    rsx! {
        document::Style { "{MAIN_CSS}" }

        div {
            key: "{lang_code()}",
            Router::<Route> {}
        }
    }
}

/// Web-specific layout around the shared `AppNavbar`, bound to this
/// crate's `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {}
        Outlet::<Route> {}
    }
}
