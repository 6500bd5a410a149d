use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn HomeView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page home-page",
            header { class: "home-header",
                h2 { "Live Teaching Quiz" }
                p { "Build question sets and present them live, with a countdown and answer reveal." }
            }
            div { class: "home-cards",
                div {
                    class: "home-card",
                    onclick: move |_| { let _ = navigator.push(Route::Builder {}); },
                    h3 { "Prepare Quiz" }
                    p { "Write questions with four options and an explanation. Import and export JSON." }
                    span { class: "home-card__cta", "Start building →" }
                }
                div {
                    class: "home-card",
                    onclick: move |_| { let _ = navigator.push(Route::Present {}); },
                    h3 { "Present" }
                    p { "Load a quiz file and run it live. You control the timer and advance each question." }
                    span { class: "home-card__cta", "Start quiz →" }
                }
                div {
                    class: "home-card",
                    onclick: move |_| { let _ = navigator.push(Route::PresentAuto {}); },
                    h3 { "Auto Present" }
                    p { "Unattended mode: the answer reveals when time is up and the next question follows after 3 seconds." }
                    span { class: "home-card__cta", "Try auto mode →" }
                }
            }
        }
    }
}
