use dioxus::prelude::*;
use dioxus_router::use_navigator;

use crate::routes::Route;

#[component]
pub fn CompleteView() -> Element {
    let navigator = use_navigator();

    rsx! {
        div { class: "page complete-page",
            div { class: "complete-card",
                span { class: "complete-card__trophy", "🏆" }
                h2 { "Quiz completed!" }
                p { "You reached the end of the quiz. Great session." }
                div { class: "complete-card__actions",
                    button {
                        class: "btn btn-start",
                        r#type: "button",
                        onclick: move |_| { let _ = navigator.push(Route::Present {}); },
                        "Present another quiz"
                    }
                    button {
                        class: "btn btn-secondary",
                        r#type: "button",
                        onclick: move |_| { let _ = navigator.push(Route::Home {}); },
                        "Home"
                    }
                }
            }
        }
    }
}
