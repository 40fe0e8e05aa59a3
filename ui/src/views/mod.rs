//! Routed pages. Platforms map their `Route` variants onto these.

mod admin_analytics;
mod admin_questions;
mod admin_users;
mod history;
mod home;
mod insights;
mod login;
mod quiz;
mod results;

pub use admin_analytics::AdminAnalytics;
pub use admin_questions::AdminQuestions;
pub use admin_users::AdminUsers;
pub use history::{AttemptDetail, History};
pub use home::Home;
pub use insights::Insights;
pub use login::Login;
pub use quiz::Quiz;
pub use results::Results;
