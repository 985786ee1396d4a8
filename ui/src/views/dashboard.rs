use dioxus::prelude::*;

use crate::dashboard::{ChartCard, DashboardHeader};

/// The single dashboard page: four stacked bar charts, one per metric.
#[component]
pub fn Dashboard() -> Element {
    let report = use_server_future(api::dashboard_report)?;

    let content = match &*report.read_unchecked() {
        Some(Ok(report)) => rsx! {
            DashboardHeader {
                player_count: report.player_count,
                generated_at: report.generated_at.clone(),
            }
            div { class: "dashboard__grid",
                for panel in report.panels.iter().cloned() {
                    ChartCard { key: "{panel.id}", panel }
                }
            }
        },
        Some(Err(err)) => rsx! {
            DashboardHeader {}
            div { class: "dashboard__status dashboard__status--error", role: "alert",
                strong { "Couldn't build the dashboard." }
                p { class: "dashboard__status-detail", "{err}" }
            }
        },
        None => rsx! {
            DashboardHeader {}
            div { class: "dashboard__status", "Fetching playtest telemetry…" }
        },
    };

    rsx! {
        section { class: "page page-dashboard", {content} }
    }
}
