use contact_ui::ContactPage;
use dioxus::prelude::*;

const MAIN_CSS: Asset = asset!("/assets/main.css");
const DAISYUI_CSS: &str = "https://cdn.jsdelivr.net/npm/daisyui@4.12.10/dist/full.min.css";
const TAILWIND_JS: &str = "https://cdn.tailwindcss.com";

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: DAISYUI_CSS }
        document::Script { src: TAILWIND_JS }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[route("/")]
    Home {},
}

#[component]
fn Home() -> Element {
    rsx! {
        div {
            ContactPage {}
        }
    }
}
