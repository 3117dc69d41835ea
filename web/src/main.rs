use dioxus::prelude::*;
use ui::ExecutionAdmin;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "icon", href: FAVICON }
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[redirect("/", || Route::Execution {})]
    #[route("/admin/execution")]
    Execution {},
}

#[component]
fn Execution() -> Element {
    rsx! {
        div {
            ExecutionAdmin {}
        }
    }
}
