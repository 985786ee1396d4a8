use api::{ChartBody, ChartPanel};
use dioxus::prelude::*;

use crate::core::format;

#[component]
pub fn ChartCard(panel: ChartPanel) -> Element {
    let levels = format::format_levels(panel.levels);
    let note = format::skipped_note(panel.skipped);

    let body = match &panel.chart {
        ChartBody::Image { data_url } => rsx! {
            img {
                class: "chart-card__image",
                src: "{data_url}",
                alt: "{panel.title}",
            }
        },
        // Server-rendered SVG; titles and labels are escaped before they get here.
        ChartBody::Markup { svg } => rsx! {
            div { class: "chart-card__markup", dangerous_inner_html: "{svg}" }
        },
    };

    rsx! {
        section { class: "chart-card", id: "chart-{panel.id}",
            div { class: "chart-card__header",
                h2 { class: "chart-card__title", "{panel.title}" }
                span { class: "chart-card__meta", "{levels}" }
            }
            {body}
            if let Some(note) = note {
                p { class: "chart-card__note", "{note}" }
            }
        }
    }
}
