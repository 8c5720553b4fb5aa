use dioxus::prelude::*;
use dioxus_router::{Outlet, Routable};

use crate::views::HubView;

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HubView)] Hub {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            header { class: "hub-header",
                h1 { "VB.NET Learning Hub" }
                span { class: "hub-header-star", "🌟" }
            }
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}
