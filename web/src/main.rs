use dioxus::prelude::*;
use ui::{ClientsPanel, SuppliersPanel};

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

#[derive(Clone, Routable, Debug, PartialEq)]
enum Route {
    #[layout(Shell)]
    #[route("/")]
    Home {},
    #[route("/clients")]
    Clients {},
    #[route("/suppliers")]
    Suppliers {},
}

#[component]
fn Shell() -> Element {
    rsx! {
        nav {
            class: "top-nav",
            Link { to: Route::Home {}, "Início" }
            Link { to: Route::Clients {}, "Clientes" }
            Link { to: Route::Suppliers {}, "Fornecedores" }
        }
        main {
            class: "registry-container",
            Outlet::<Route> {}
        }
    }
}

#[component]
fn Home() -> Element {
    rsx! {
        ClientsPanel {}
        SuppliersPanel {}
    }
}

#[component]
fn Clients() -> Element {
    rsx! {
        ClientsPanel {}
    }
}

#[component]
fn Suppliers() -> Element {
    rsx! {
        SuppliersPanel {}
    }
}
