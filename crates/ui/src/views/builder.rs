use std::path::Path;

use dioxus::prelude::*;
use tracing::warn;

use quiz_core::Clock;
use services::{AuthoringSession, default_export_filename, parse_question_set};

use crate::context::AppContext;
use crate::vm::{list_item_label, parse_sequence_number};

const CORRECT_CHOICES: [&str; 4] = ["a", "b", "c", "d"];

#[component]
pub fn BuilderView() -> Element {
    let ctx = use_context::<AppContext>();

    let mut session = use_signal(AuthoringSession::new);
    // One message slot for both confirmations and recoverable errors.
    let mut notice = use_signal(|| None::<String>);
    let mut file_path = use_signal(String::new);

    let commit_action = use_callback(move |()| {
        match session.write().commit_draft() {
            Ok(()) => notice.set(Some("Question saved.".to_string())),
            Err(err) => notice.set(Some(err.to_string())),
        }
    });

    let ctx_for_import = ctx.clone();
    let import_action = use_callback(move |()| {
        let path = file_path.peek().trim().to_string();
        if path.is_empty() {
            notice.set(Some("Enter a file path to import.".to_string()));
            return;
        }
        match ctx_for_import.platform().read_text_file(Path::new(&path)) {
            Ok(contents) => match parse_question_set(&contents) {
                Ok(set) => {
                    let count = set.len();
                    session.write().import(set);
                    notice.set(Some(format!("Imported {count} questions.")));
                }
                Err(err) => {
                    warn!(%err, path, "import rejected");
                    notice.set(Some(err.to_string()));
                }
            },
            Err(err) => notice.set(Some(format!("Could not read {path}: {err}"))),
        }
    });

    let ctx_for_export = ctx.clone();
    let export_action = use_callback(move |()| {
        let json = match session.peek().export_json() {
            Ok(json) => json,
            Err(err) => {
                notice.set(Some(err.to_string()));
                return;
            }
        };
        let mut path = file_path.peek().trim().to_string();
        if path.is_empty() {
            path = default_export_filename(&Clock::default_clock());
            file_path.set(path.clone());
        }
        match ctx_for_export.platform().write_text_file(Path::new(&path), &json) {
            Ok(()) => notice.set(Some(format!("Exported to {path}."))),
            Err(err) => notice.set(Some(format!("Could not write {path}: {err}"))),
        }
    });

    let ctx_for_copy = ctx.clone();
    let copy_action = use_callback(move |()| match session.peek().export_json() {
        Ok(json) => {
            ctx_for_copy.platform().copy_text(&json);
            notice.set(Some("JSON copied to clipboard.".to_string()));
        }
        Err(err) => notice.set(Some(err.to_string())),
    });

    let draft = session.read().draft().clone();
    let questions = session.read().questions().to_vec();
    let editing = session.read().editing();

    rsx! {
        div { class: "page builder-page",
            h2 { "Prepare quiz" }

            if let Some(message) = notice() {
                p { class: "builder-notice", "{message}" }
            }

            div { class: "builder-columns",
                // ── Question form ──
                div { class: "builder-form",
                    h3 {
                        if editing.is_some() { "Edit question" } else { "New question" }
                    }
                    label { "Number"
                        input {
                            r#type: "number",
                            min: "1",
                            value: "{draft.no}",
                            oninput: move |evt| {
                                session.write().draft_mut().no = parse_sequence_number(&evt.value());
                            },
                        }
                    }
                    label { "Question"
                        textarea {
                            value: "{draft.question}",
                            oninput: move |evt| session.write().draft_mut().question = evt.value(),
                        }
                    }
                    label { "Option A"
                        input {
                            value: "{draft.a}",
                            oninput: move |evt| session.write().draft_mut().a = evt.value(),
                        }
                    }
                    label { "Option B"
                        input {
                            value: "{draft.b}",
                            oninput: move |evt| session.write().draft_mut().b = evt.value(),
                        }
                    }
                    label { "Option C"
                        input {
                            value: "{draft.c}",
                            oninput: move |evt| session.write().draft_mut().c = evt.value(),
                        }
                    }
                    label { "Option D"
                        input {
                            value: "{draft.d}",
                            oninput: move |evt| session.write().draft_mut().d = evt.value(),
                        }
                    }
                    label { "Correct option"
                        select {
                            value: "{draft.correct}",
                            onchange: move |evt| session.write().draft_mut().correct = evt.value(),
                            for choice in CORRECT_CHOICES {
                                option { value: "{choice}", "{choice.to_uppercase()}" }
                            }
                        }
                    }
                    label { "Explanation (optional)"
                        textarea {
                            value: "{draft.explanation.clone().unwrap_or_default()}",
                            oninput: move |evt| {
                                let value = evt.value();
                                session.write().draft_mut().explanation =
                                    if value.trim().is_empty() { None } else { Some(value) };
                            },
                        }
                    }
                    div { class: "builder-form__actions",
                        button {
                            class: "btn btn-start",
                            r#type: "button",
                            onclick: move |_| commit_action.call(()),
                            if editing.is_some() { "Update question" } else { "Add question" }
                        }
                        if editing.is_some() {
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| session.write().cancel_edit(),
                                "Cancel edit"
                            }
                        }
                    }
                }

                // ── Committed questions + file actions ──
                div { class: "builder-list",
                    h3 { "Questions ({questions.len()})" }
                    if questions.is_empty() {
                        p { class: "builder-list__empty", "Nothing yet. Add a question or import a file." }
                    }
                    ul {
                        for (index, question) in questions.iter().enumerate() {
                            li { key: "{index}", class: "builder-list__item",
                                span { "{list_item_label(question)}" }
                                span { class: "builder-list__item-actions",
                                    button {
                                        class: "btn btn-link",
                                        r#type: "button",
                                        onclick: move |_| session.write().edit(index),
                                        "Edit"
                                    }
                                    button {
                                        class: "btn btn-link btn-danger",
                                        r#type: "button",
                                        onclick: move |_| session.write().remove(index),
                                        "Delete"
                                    }
                                }
                            }
                        }
                    }

                    div { class: "builder-file",
                        label { "Quiz file path"
                            input {
                                r#type: "text",
                                placeholder: "quiz.json",
                                value: "{file_path}",
                                oninput: move |evt| file_path.set(evt.value()),
                            }
                        }
                        div { class: "builder-file__actions",
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| import_action.call(()),
                                "Import JSON"
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| export_action.call(()),
                                "Export JSON"
                            }
                            button {
                                class: "btn btn-secondary",
                                r#type: "button",
                                onclick: move |_| copy_action.call(()),
                                "Copy JSON"
                            }
                        }
                    }
                }
            }
        }
    }
}
