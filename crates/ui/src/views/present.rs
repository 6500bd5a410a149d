#[cfg(test)]
use std::cell::RefCell;
use std::path::Path;
#[cfg(test)]
use std::rc::Rc;
use std::time::Duration;

use dioxus::prelude::*;
use dioxus_router::use_navigator;
use keyboard_types::{Code, Key};
use tracing::warn;

use quiz_core::model::OptionLabel;
use services::{Presenter, PresenterPhase, parse_question_set};

use crate::context::AppContext;
use crate::routes::Route;
use crate::vm::{format_seconds, option_class, progress_percent, status_text};

/// Manual mode: the presenter advances every question by hand.
#[component]
pub fn PresentView() -> Element {
    rsx! {
        PresenterScreen { auto: false }
    }
}

/// Unattended mode: reveal on expiry, next question 3 s later.
#[component]
pub fn AutoPresentView() -> Element {
    rsx! {
        PresenterScreen { auto: true }
    }
}

#[component]
fn PresenterScreen(auto: bool) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let platform = ctx.platform();

    let mut presenter = use_signal(|| {
        let mut settings = ctx.initial_settings();
        settings.set_auto_advance(auto);
        let mut presenter = Presenter::new(settings);
        if let Some(set) = ctx.take_preloaded_set() {
            presenter.load(set);
        }
        presenter
    });
    let mut show_settings = use_signal(|| false);

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PresenterTestHandles>() {
                handles.register_presenter(presenter);
            }
        }
    }

    // The 1 Hz driver for both the question countdown and the auto-advance
    // delay. The future is owned by this view, so navigating away drops it
    // and nothing can tick a session that is no longer on screen.
    use_future(move || async move {
        loop {
            tokio::time::sleep(Duration::from_secs(1)).await;
            let ticking = matches!(
                presenter.peek().phase(),
                Some(PresenterPhase::Running | PresenterPhase::Revealed)
            );
            if ticking {
                presenter.write().tick();
            }
        }
    });

    // The machine reaches `Complete` only through an advance on the last
    // question; hand over to the completion screen when it does.
    use_effect(move || {
        if presenter.read().phase() == Some(PresenterPhase::Complete) {
            let _ = navigator.push(Route::Finished {});
        }
    });

    // Space toggles start/pause while the answer is hidden; Enter advances
    // while revealed (never past the last question).
    let on_key = use_callback(move |evt: KeyboardEvent| {
        if !presenter.peek().is_loaded() {
            return;
        }
        if evt.data.code() == Code::Space {
            if !presenter.peek().revealed() {
                evt.prevent_default();
                presenter.write().toggle();
            }
            return;
        }
        if evt.data.key() == Key::Enter {
            let can_advance = {
                let snapshot = presenter.peek();
                snapshot.revealed() && !snapshot.is_last_question()
            };
            if can_advance {
                evt.prevent_default();
                presenter.write().advance();
            }
        }
    });

    let snapshot = presenter.read();
    if !snapshot.is_loaded() {
        drop(snapshot);
        return rsx! {
            LoadPanel { presenter }
        };
    }

    let phase = snapshot.phase();
    let revealed = snapshot.revealed();
    let running = phase == Some(PresenterPhase::Running);
    let position = snapshot.position().unwrap_or(1);
    let total = snapshot.total().unwrap_or(1);
    let is_last = snapshot.is_last_question();
    let remaining = snapshot.remaining_secs().unwrap_or(0);
    let duration = snapshot.settings().timer_duration_secs();
    let auto_advance = snapshot.settings().auto_advance();
    let question = snapshot.current_question().cloned();
    drop(snapshot);

    let percent = progress_percent(position, total);
    let platform_for_fullscreen = platform.clone();

    rsx! {
        div { class: "page present-page", tabindex: "0", onkeydown: on_key,
            header { class: "present-header",
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| presenter.write().exit(),
                    "← Change quiz"
                }
                button {
                    class: "btn btn-link",
                    r#type: "button",
                    onclick: move |_| {
                        let current = *show_settings.peek();
                        show_settings.set(!current);
                    },
                    "Settings"
                }
            }

            if show_settings() {
                div { class: "settings-panel",
                    h3 { "Quiz settings" }
                    label { "Timer duration: {duration}s" }
                    input {
                        r#type: "range",
                        min: "10",
                        max: "60",
                        step: "5",
                        value: "{duration}",
                        oninput: move |evt| {
                            if let Ok(secs) = evt.value().parse::<u32>() {
                                let _ = presenter.write().set_timer_duration(secs);
                            }
                        },
                    }
                    label { class: "settings-panel__auto",
                        input {
                            r#type: "checkbox",
                            checked: auto_advance,
                            onchange: move |evt| presenter.write().set_auto_advance(evt.checked()),
                        }
                        "Auto-advance: show the answer for 3s, then move to the next question"
                    }
                }
            }

            div { class: "progress",
                div { class: "progress__caption",
                    span { "Question {position} of {total}" }
                    span { "{percent}%" }
                }
                div { class: "progress__track",
                    div { class: "progress__fill", style: "width: {percent}%" }
                }
            }

            div { class: "timer-bar",
                div { class: "timer-bar__controls",
                    if !running && !revealed {
                        button {
                            class: "btn btn-start",
                            r#type: "button",
                            onclick: move |_| presenter.write().start(),
                            "Start timer"
                        }
                    }
                    if running {
                        button {
                            class: "btn btn-pause",
                            r#type: "button",
                            onclick: move |_| presenter.write().pause(),
                            "Pause"
                        }
                    }
                    if revealed && !is_last {
                        button {
                            class: "btn btn-next",
                            r#type: "button",
                            onclick: move |_| presenter.write().advance(),
                            "Next question"
                        }
                    }
                    if revealed && is_last {
                        button {
                            class: "btn btn-finish",
                            r#type: "button",
                            onclick: move |_| presenter.write().advance(),
                            "Finish quiz"
                        }
                    }
                }
                div { class: "timer-bar__clock",
                    span { class: "timer-bar__seconds", "{format_seconds(remaining)}" }
                    span { class: "timer-bar__status", "{status_text(phase)}" }
                }
                button {
                    class: "btn btn-secondary",
                    r#type: "button",
                    onclick: move |_| platform_for_fullscreen.enter_fullscreen(),
                    "Fullscreen"
                }
            }

            {match &question {
                Some(question) => rsx! {
                    div { class: "question-card",
                        span { class: "question-card__number", "Question #{question.number()}" }
                        h2 { class: "question-card__prompt", "{question.prompt()}" }
                        div { class: "options",
                            for label in OptionLabel::ALL {
                                div {
                                    key: "{label}",
                                    class: "{option_class(revealed, question.correct() == label)}",
                                    span { class: "option__badge", "{label}" }
                                    p { class: "option__text", "{question.option(label)}" }
                                }
                            }
                        }
                        if revealed {
                            if let Some(explanation) = question.explanation() {
                                div { class: "explanation",
                                    p { class: "explanation__title", "Explanation" }
                                    p { "{explanation}" }
                                }
                            }
                        }
                    }
                },
                None => rsx! {
                    p { "No question to show." }
                },
            }}

            footer { class: "present-footer",
                p { "Keyboard: Space = start/pause, Enter = next question" }
                if auto_advance {
                    p { class: "present-footer__auto",
                        "Auto mode: timer → answer (3s) → next question, until the end"
                    }
                }
            }
        }
    }
}

/// Shown while no question set is loaded: pick a quiz JSON file by path.
#[component]
fn LoadPanel(presenter: Signal<Presenter>) -> Element {
    let ctx = use_context::<AppContext>();
    let navigator = use_navigator();
    let mut path_input = use_signal(String::new);
    let mut error = use_signal(|| None::<String>);

    let load_action = use_callback(move |()| {
        let path = path_input.peek().trim().to_string();
        if path.is_empty() {
            error.set(Some("Enter the path of a quiz JSON file.".to_string()));
            return;
        }
        match ctx.platform().read_text_file(Path::new(&path)) {
            Ok(contents) => match parse_question_set(&contents) {
                Ok(set) => {
                    error.set(None);
                    presenter.write().load(set);
                }
                Err(err) => {
                    warn!(%err, path, "quiz file rejected");
                    error.set(Some(err.to_string()));
                }
            },
            Err(err) => {
                error.set(Some(format!("Could not read {path}: {err}")));
            }
        }
    });

    #[cfg(test)]
    {
        let mut registered = use_signal(|| false);
        if !registered() {
            registered.set(true);
            if let Some(handles) = try_consume_context::<PresenterTestHandles>() {
                handles.register_load(path_input, load_action);
            }
        }
    }

    rsx! {
        div { class: "page load-page",
            button {
                class: "btn btn-link",
                r#type: "button",
                onclick: move |_| { let _ = navigator.push(Route::Home {}); },
                "← Home"
            }
            div { class: "load-card",
                h2 { "Start teaching" }
                p { "Load your quiz JSON to begin." }
                input {
                    class: "load-card__path",
                    r#type: "text",
                    placeholder: "/path/to/quiz.json",
                    value: "{path_input}",
                    oninput: move |evt| path_input.set(evt.value()),
                }
                button {
                    class: "btn btn-start",
                    r#type: "button",
                    onclick: move |_| load_action.call(()),
                    "Load quiz"
                }
                if let Some(message) = error() {
                    p { class: "load-card__error", "{message}" }
                }
            }
        }
    }
}

#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct PresenterTestHandles {
    presenter: Rc<RefCell<Option<Signal<Presenter>>>>,
    load_path: Rc<RefCell<Option<Signal<String>>>>,
    load_action: Rc<RefCell<Option<Callback<()>>>>,
}

#[cfg(test)]
impl PresenterTestHandles {
    pub(crate) fn register_presenter(&self, presenter: Signal<Presenter>) {
        *self.presenter.borrow_mut() = Some(presenter);
    }

    pub(crate) fn register_load(&self, path: Signal<String>, action: Callback<()>) {
        *self.load_path.borrow_mut() = Some(path);
        *self.load_action.borrow_mut() = Some(action);
    }

    pub(crate) fn presenter(&self) -> Signal<Presenter> {
        (*self.presenter.borrow()).expect("presenter signal registered")
    }

    pub(crate) fn load_path(&self) -> Signal<String> {
        (*self.load_path.borrow()).expect("load panel mounted")
    }

    pub(crate) fn load_action(&self) -> Callback<()> {
        (*self.load_action.borrow()).expect("load panel mounted")
    }
}
