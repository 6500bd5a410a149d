use dioxus::prelude::*;
use dioxus_router::{Link, Outlet, Routable};

use crate::views::{AutoPresentView, BuilderView, CompleteView, HomeView, PresentView};

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Layout)]
        #[route("/", HomeView)] Home {},
        #[route("/builder", BuilderView)] Builder {},
        #[route("/present", PresentView)] Present {},
        #[route("/present-auto", AutoPresentView)] PresentAuto {},
        #[route("/finished", CompleteView)] Finished {},
}

#[component]
fn Layout() -> Element {
    rsx! {
        div { class: "app",
            Topbar {}
            main { class: "content",
                Outlet::<Route> {}
            }
        }
    }
}

#[component]
fn Topbar() -> Element {
    rsx! {
        nav { class: "topbar",
            h1 { "QuizCast" }
            ul {
                li { Link { to: Route::Home {}, "Home" } }
                li { Link { to: Route::Builder {}, "Builder" } }
                li { Link { to: Route::Present {}, "Present" } }
                li { Link { to: Route::PresentAuto {}, "Auto Present" } }
            }
        }
    }
}
