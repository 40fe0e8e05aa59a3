use dioxus::prelude::*;

use super::{AdminAnalytics, Quiz};
use crate::app::use_auth_state;

/// Landing page: admins get the analytics dashboard, everyone else the quiz.
#[component]
pub fn Home() -> Element {
    let auth = use_auth_state();

    if auth().is_admin() {
        rsx! { AdminAnalytics {} }
    } else {
        rsx! { Quiz {} }
    }
}
