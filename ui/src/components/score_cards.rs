use api::models::{Overview, ScoreSnapshot, StudentStats};
use dioxus::prelude::*;

use crate::core::format::{format_one_decimal, format_snapshot, format_timestamp};
use crate::t;

#[component]
pub fn OverviewCards(overview: Overview) -> Element {
    let avg_score = format_one_decimal(overview.avg_score);
    let avg_percent = format_one_decimal(overview.avg_percent);

    rsx! {
        div { class: "analytics__cards",
            div { class: "analytics__card",
                div { class: "analytics__metric", "{overview.total_attempts}" }
                div { class: "analytics__label", {t!("analytics-total-attempts")} }
            }
            div { class: "analytics__card",
                div { class: "analytics__metric", "{avg_score}" }
                div { class: "analytics__label", {t!("analytics-avg-score")} }
            }
            div { class: "analytics__card",
                div { class: "analytics__metric", "{avg_percent}%" }
                div { class: "analytics__label", {t!("analytics-avg-percent")} }
            }
        }
    }
}

/// Last and best attempt for one student.
#[component]
pub fn StudentCards(stats: StudentStats) -> Element {
    rsx! {
        div { class: "analytics__cards analytics__cards--student",
            SnapshotCard {
                title: t!("analytics-last-attempt"),
                snapshot: stats.last,
                empty_note: t!("analytics-no-attempts"),
            }
            SnapshotCard {
                title: t!("analytics-best-score"),
                snapshot: stats.best,
                empty_note: "—".to_string(),
            }
        }
    }
}

#[component]
fn SnapshotCard(title: String, snapshot: Option<ScoreSnapshot>, empty_note: String) -> Element {
    let (metric, note) = match &snapshot {
        Some(s) => (
            format_snapshot(s.score, s.total, s.percent),
            format_timestamp(&s.created_at),
        ),
        None => ("—".to_string(), empty_note),
    };

    rsx! {
        div { class: "analytics__card",
            div { class: "analytics__label", "{title}" }
            div { class: "analytics__metric", "{metric}" }
            div { class: "analytics__sub", "{note}" }
        }
    }
}
