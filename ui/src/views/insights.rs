use api::models::{CategoryRow, OverviewReport, StudentStats};
use api::{ApiClient, ApiError};
use dioxus::prelude::*;

use crate::analytics::{category_series, distribution_chart, distribution_series, student_category_chart};
use crate::app::use_services;
use crate::chart::BarChart;
use crate::components::{OverviewCards, StudentCards};
use crate::t;

struct MyInsights {
    report: OverviewReport,
    categories: Vec<CategoryRow>,
    summary: StudentStats,
}

async fn load(client: ApiClient) -> Result<MyInsights, ApiError> {
    let report = client.my_overview().await?;
    let categories = client.my_categories().await?;
    let summary = client.my_summary().await?;
    Ok(MyInsights {
        report,
        categories,
        summary,
    })
}

/// The signed-in student's own statistics.
#[component]
pub fn Insights() -> Element {
    let services = use_services();
    let insights = use_resource(move || load(services.client.clone()));

    let body = match &*insights.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(data)) => {
            let total = data.report.overview.total_attempts;
            rsx! {
                StudentCards { stats: data.summary.clone() }
                OverviewCards { overview: data.report.overview.clone() }

                div { class: "analytics__section",
                    h3 { class: "analytics__subtitle", {t!("insights-distribution")} }
                    div { class: "analytics__note", {t!("analytics-total-note", total = total)} }
                    BarChart {
                        data: distribution_series(&data.report.distribution),
                        config: distribution_chart(),
                    }
                }

                div { class: "analytics__section",
                    h3 { class: "analytics__subtitle", {t!("insights-categories")} }
                    BarChart {
                        data: category_series(&data.categories, false),
                        config: student_category_chart(),
                        empty_label: t!("analytics-no-categories"),
                    }
                }
            }
        }
    };

    rsx! {
        section { class: "page analytics",
            h2 { class: "analytics__title", {t!("insights-title")} }
            {body}
        }
    }
}
