use dioxus::prelude::*;

use crate::app::use_auth_state;
use crate::t;

/// Renders `children` for admins only. Hides UI; the API does the enforcing.
#[component]
pub fn AdminOnly(children: Element) -> Element {
    let auth = use_auth_state();
    if !auth().is_admin() {
        return rsx! {
            div { class: "page admin-denied", {t!("admin-denied")} }
        };
    }
    rsx! { {children} }
}
