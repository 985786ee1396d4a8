use dioxus::prelude::*;

use ui::views::Dashboard;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Dashboard {},
}

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Portkey · Playtest analytics" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Style { "{ui::THEME_CSS}" }

        Router::<Route> {}
    }
}
