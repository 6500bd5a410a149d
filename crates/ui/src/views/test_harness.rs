use std::collections::HashMap;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};

use quiz_core::model::{PresenterSettings, QuestionDraft, QuestionSet};

use crate::context::{UiApp, build_app_context};
use crate::platform::{PlatformRef, PlatformServices};
use crate::views::present::PresenterTestHandles;
use crate::views::{BuilderView, CompleteView, HomeView, PresentView};

/// In-memory platform services: files live in a map, clipboard writes are
/// recorded, fullscreen is a no-op.
#[derive(Default)]
pub struct TestPlatform {
    files: Mutex<HashMap<PathBuf, String>>,
    clipboard: Mutex<Vec<String>>,
}

impl TestPlatform {
    pub fn put_file(&self, path: &str, contents: &str) {
        if let Ok(mut files) = self.files.lock() {
            files.insert(PathBuf::from(path), contents.to_string());
        }
    }
}

impl PlatformServices for TestPlatform {
    fn read_text_file(&self, path: &Path) -> io::Result<String> {
        self.files
            .lock()
            .ok()
            .and_then(|files| files.get(path).cloned())
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, "no such test file"))
    }

    fn write_text_file(&self, path: &Path, contents: &str) -> io::Result<()> {
        if let Ok(mut files) = self.files.lock() {
            files.insert(path.to_path_buf(), contents.to_string());
        }
        Ok(())
    }

    fn copy_text(&self, text: &str) {
        if let Ok(mut clipboard) = self.clipboard.lock() {
            clipboard.push(text.to_string());
        }
    }

    fn enter_fullscreen(&self) {}
}

struct TestApp {
    platform: PlatformRef,
    settings: PresenterSettings,
    preloaded: Mutex<Option<QuestionSet>>,
}

impl UiApp for TestApp {
    fn platform(&self) -> PlatformRef {
        Arc::clone(&self.platform)
    }

    fn initial_settings(&self) -> PresenterSettings {
        self.settings
    }

    fn preloaded_set(&self) -> Option<QuestionSet> {
        self.preloaded.lock().ok().and_then(|mut guard| guard.take())
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Builder,
    Present,
    Finished,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<dyn UiApp>,
    view: ViewKind,
    handles: PresenterTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for ViewHarnessProps {}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    use_context_provider(|| props.view);
    use_context_provider(|| props.handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Builder => rsx! { BuilderView {} },
        ViewKind::Present => rsx! { PresentView {} },
        ViewKind::Finished => rsx! { CompleteView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub platform: Arc<TestPlatform>,
    pub handles: PresenterTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(view: ViewKind, preloaded: Option<QuestionSet>) -> ViewHarness {
    let platform = Arc::new(TestPlatform::default());
    let app: Arc<dyn UiApp> = Arc::new(TestApp {
        platform: Arc::clone(&platform) as PlatformRef,
        settings: PresenterSettings::new(30, false).expect("valid settings"),
        preloaded: Mutex::new(preloaded),
    });
    let handles = PresenterTestHandles::default();

    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            handles: handles.clone(),
        },
    );

    ViewHarness {
        dom,
        platform,
        handles,
    }
}

pub fn sample_set() -> QuestionSet {
    let mut first = QuestionDraft::empty(0);
    first.question = "Capital of France?".to_string();
    first.a = "Paris".to_string();
    first.b = "Lyon".to_string();
    first.c = "Marseille".to_string();
    first.d = "Nice".to_string();
    first.explanation = Some("Paris has been the capital since 987.".to_string());

    let mut second = QuestionDraft::empty(1);
    second.question = "2 + 2?".to_string();
    second.a = "3".to_string();
    second.b = "4".to_string();
    second.c = "5".to_string();
    second.d = "22".to_string();
    second.correct = "b".to_string();

    let questions = vec![
        first.validate().expect("valid question"),
        second.validate().expect("valid question"),
    ];
    QuestionSet::new(questions).expect("non-empty set")
}
