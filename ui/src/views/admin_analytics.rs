use api::models::{AttemptRow, CategoryRow, OverviewReport, Role, StudentStats, TopStudent};
use api::{ApiClient, ApiError};
use dioxus::prelude::*;

use crate::analytics::{admin_category_chart, category_series, distribution_chart, distribution_series};
use crate::app::use_services;
use crate::chart::BarChart;
use crate::components::{AdminOnly, OverviewCards, Select, SelectOption, StudentCards};
use crate::core::format::{format_one_decimal, format_snapshot, format_timestamp};
use crate::t;

const ALL_STUDENTS: &str = "all";

#[component]
pub fn AdminAnalytics() -> Element {
    rsx! {
        AdminOnly { Dashboard {} }
    }
}

struct DashboardData {
    report: OverviewReport,
    categories: Vec<CategoryRow>,
    student: Option<StudentStats>,
    recent: Vec<AttemptRow>,
}

async fn load_dashboard(client: ApiClient, user_id: Option<String>) -> Result<DashboardData, ApiError> {
    let user = user_id.as_deref();
    let report = client.overview(user).await?;
    let categories = client.categories(user).await?;
    let student = match user {
        Some(id) => Some(client.student_stats(id).await?),
        None => None,
    };
    let recent = client.last_attempts(user).await?;
    Ok(DashboardData {
        report,
        categories,
        student,
        recent,
    })
}

#[component]
fn Dashboard() -> Element {
    let services = use_services();
    let mut selected = use_signal(|| ALL_STUDENTS.to_string());

    let students = use_resource({
        let client = services.client.clone();
        move || {
            let client = client.clone();
            async move { client.list_users(Some(Role::Student)).await }
        }
    });
    let top = use_resource({
        let client = services.client.clone();
        move || {
            let client = client.clone();
            async move { client.top_students().await }
        }
    });
    let dashboard = use_resource({
        let client = services.client.clone();
        move || {
            let choice = selected();
            let user_id = (choice != ALL_STUDENTS).then_some(choice);
            load_dashboard(client.clone(), user_id)
        }
    });

    let mut student_options = vec![SelectOption::new(ALL_STUDENTS, t!("analytics-all-students"))];
    if let Some(Ok(users)) = &*students.read() {
        student_options.extend(
            users
                .iter()
                .map(|u| SelectOption::new(u.id.clone(), format!("{} ({})", u.name, u.email))),
        );
    }

    let body = match &*dashboard.read_unchecked() {
        None => rsx! { div { class: "status", {t!("status-loading")} } },
        Some(Err(err)) => {
            let message = err.user_message(&t!("error-load-failed"));
            rsx! { div { class: "form-error", "{message}" } }
        }
        Some(Ok(data)) => {
            let total = data.report.overview.total_attempts;
            rsx! {
                OverviewCards { overview: data.report.overview.clone() }
                if let Some(stats) = data.student.clone() {
                    StudentCards { stats }
                }

                div { class: "analytics__section",
                    h3 { class: "analytics__subtitle", {t!("analytics-distribution")} }
                    div { class: "analytics__note", {t!("analytics-total-note", total = total)} }
                    BarChart {
                        data: distribution_series(&data.report.distribution),
                        config: distribution_chart(),
                    }
                }

                div { class: "analytics__section",
                    h3 { class: "analytics__subtitle", {t!("analytics-categories")} }
                    BarChart {
                        data: category_series(&data.categories, true),
                        config: admin_category_chart(),
                        empty_label: t!("analytics-no-categories"),
                    }
                }

                RecentAttempts { rows: data.recent.clone() }
            }
        }
    };

    let leaders: Vec<TopStudent> = match &*top.read() {
        Some(Ok(rows)) => rows.clone(),
        _ => Vec::new(),
    };

    rsx! {
        section { class: "page analytics",
            h2 { class: "analytics__title", {t!("analytics-title")} }
            div { class: "analytics__filters",
                label { class: "field field--inline",
                    span { class: "field__label", {t!("analytics-student-filter")} }
                    Select {
                        name: "studentFilter".to_string(),
                        value: selected(),
                        options: student_options,
                        onchange: move |value: String| selected.set(value),
                    }
                }
            }
            {body}
            TopStudents { rows: leaders }
        }
    }
}

#[component]
fn RecentAttempts(rows: Vec<AttemptRow>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "analytics__section",
            h3 { class: "analytics__subtitle", {t!("analytics-recent")} }
            ul { class: "analytics__list",
                for (index, row) in rows.into_iter().enumerate() {
                    li { key: "{index}", class: "analytics__list-item",
                        span { class: "analytics__list-name",
                            {row.name.clone().unwrap_or_else(|| "—".to_string())}
                        }
                        span { class: "analytics__list-score",
                            {format_snapshot(row.score, row.total, row.percent)}
                        }
                        span { class: "analytics__list-date", {format_timestamp(&row.created_at)} }
                    }
                }
            }
        }
    }
}

#[component]
fn TopStudents(rows: Vec<TopStudent>) -> Element {
    if rows.is_empty() {
        return rsx! {};
    }
    rsx! {
        div { class: "analytics__section",
            h3 { class: "analytics__subtitle", {t!("analytics-top-students")} }
            table { class: "analytics__table",
                thead {
                    tr {
                        th { {t!("field-name")} }
                        th { {t!("field-email")} }
                        th { {t!("analytics-attempts")} }
                        th { {t!("analytics-avg-percent")} }
                    }
                }
                tbody {
                    for row in rows {
                        tr { key: "{row.user_id}",
                            td { "{row.name}" }
                            td { "{row.email}" }
                            td { "{row.attempts}" }
                            td { {format!("{}%", format_one_decimal(row.avg_percent))} }
                        }
                    }
                }
            }
        }
    }
}
