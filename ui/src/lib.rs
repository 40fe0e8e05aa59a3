//! Shared UI crate for Barber Study: quiz session, charts, and every page.
//! Platform crates only supply the router and the window.

pub mod analytics;
pub mod app;
pub mod auth;
pub mod bank;
pub mod chart;
pub mod core;
pub mod i18n;
pub mod quiz;
pub mod views;

pub mod components {
    mod admin_gate;
    mod feedback_list;
    mod question_card;
    mod score_cards;
    mod select;

    // Public so launchers can reach the module path directly.
    pub mod app_navbar;
    pub use app_navbar::AppNavbar;

    pub use admin_gate::AdminOnly;
    pub use feedback_list::FeedbackList;
    pub use question_card::QuestionCard;
    pub use score_cards::{OverviewCards, StudentCards};
    pub use select::{Select, SelectOption};
}

pub use app::{use_app_services, AppServices};
