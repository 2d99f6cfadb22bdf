//! A page whose internal links never reload it.
//!
//! Internal links update the URL and re-render `Page`; the external one and the one with a
//! `target` are left to the browser. Open the console to see the `navigation` events.

use dioxus::prelude::*;
use dioxus_intercept_web::{NavigationWrapper, RoutedProps};
use wasm_bindgen::JsCast;

fn main() {
    tracing_wasm::set_as_global_default();
    dioxus::launch(app);
}

fn app() -> Element {
    use_hook(|| {
        let window = web_sys::window().expect("demo runs in a browser");
        gloo_events::EventListener::new(&window, "navigation", |event| {
            let detail = event
                .dyn_ref::<web_sys::CustomEvent>()
                .map(|event| event.detail());
            tracing::info!(?detail, "navigation");
        })
        .forget();
    });

    rsx! {
        NavigationWrapper::<&'static str> { component: Page, props: "Link demo" }
    }
}

#[allow(non_snake_case)]
fn Page(props: RoutedProps<&'static str>) -> Element {
    let query = props
        .query
        .as_ref()
        .map(|query| {
            query
                .iter()
                .map(|(key, value)| format!("{key} = {value}"))
                .collect::<Vec<_>>()
                .join(", ")
        })
        .unwrap_or_else(|| "none".to_string());
    let hash = props.hash.clone().unwrap_or_else(|| "none".to_string());

    rsx! {
        h1 { "{props.props}" }
        nav {
            a { href: "/", "Home" }
            " | "
            a { href: "/about?tab=team&lang=en", "About" }
            " | "
            a { href: "docs#install", "Docs (relative)" }
            " | "
            a { href: "https://dioxuslabs.com", "External" }
            " | "
            a { href: "/new-tab", target: "_blank", "New tab" }
        }
        dl {
            dt { "path" }
            dd { "{props.path}" }
            dt { "query" }
            dd { "{query}" }
            dt { "hash" }
            dd { "{hash}" }
        }
    }
}
