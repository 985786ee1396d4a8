use dioxus::prelude::*;

use crate::core::format;

/// Page title plus the snapshot facts behind the charts, when there are any.
#[component]
pub fn DashboardHeader(player_count: Option<usize>, generated_at: Option<String>) -> Element {
    let players = player_count.map(format::format_players);
    let stamp = generated_at
        .as_deref()
        .map(format::format_generated_at)
        .filter(|stamp| !stamp.is_empty());
    let datetime = generated_at.unwrap_or_default();

    rsx! {
        header { class: "dashboard__header",
            div { class: "dashboard__brand",
                h1 { class: "dashboard__title", "Portkey" }
                span { class: "dashboard__subtitle", "Playtest analytics" }
            }
            div { class: "dashboard__meta",
                if let Some(players) = players {
                    span {
                        "Snapshot: "
                        span { class: "dashboard__meta-value", "{players}" }
                    }
                }
                if let Some(stamp) = stamp {
                    span {
                        "Generated "
                        time { class: "dashboard__meta-value", datetime: "{datetime}", "{stamp}" }
                    }
                }
            }
        }
    }
}
