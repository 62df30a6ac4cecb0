use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{LibraryView, StudyView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", StudyView)] Study {},
        #[route("/cards", LibraryView)] Library {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Sidebar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Sidebar() -> Element {
    rsx! {
        nav { class: "sidebar",
            h1 { "Recall" }
            ul {
                li { Link { to: Route::Study {}, "Today" } }
                li { Link { to: Route::Library {}, "Cards" } }
            }
        }
    }
}
