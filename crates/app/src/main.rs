use std::fmt;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use dioxus::LaunchBuilder;
use dioxus::desktop::{Config as DesktopConfig, WindowBuilder};
use tracing::info;
use tracing_subscriber::EnvFilter;

use quiz_core::model::{PresenterSettings, QuestionSet};
use services::load_question_set;
use ui::platform::{DesktopPlatform, PlatformRef};
use ui::{App, UiApp, build_app_context};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    UnknownArg(String),
    InvalidDuration { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidDuration { raw } => write!(f, "invalid --duration value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  cargo run -p app -- [--quiz <path>] [--duration <secs>] [--auto]");
    eprintln!();
    eprintln!("Options:");
    eprintln!("  --quiz <path>       preload a quiz JSON file into the presenter");
    eprintln!("  --duration <secs>   per-question countdown (default 30)");
    eprintln!("  --auto              enable auto-advance by default");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  QUIZCAST_QUIZ, QUIZCAST_DURATION");
}

struct Args {
    quiz: Option<PathBuf>,
    duration_secs: u32,
    auto: bool,
}

impl Args {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut quiz = std::env::var("QUIZCAST_QUIZ").ok().map(PathBuf::from);
        let mut duration_secs = std::env::var("QUIZCAST_DURATION")
            .ok()
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(PresenterSettings::DEFAULT_TIMER_SECS);
        let mut auto = false;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--quiz" => {
                    let value = require_value(args, "--quiz")?;
                    quiz = Some(PathBuf::from(value));
                }
                "--duration" => {
                    let value = require_value(args, "--duration")?;
                    duration_secs = value
                        .parse::<u32>()
                        .ok()
                        .filter(|secs| *secs > 0)
                        .ok_or(ArgsError::InvalidDuration { raw: value.clone() })?;
                }
                "--auto" => auto = true,
                "--help" | "-h" => {
                    print_usage();
                    std::process::exit(0);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            quiz,
            duration_secs,
            auto,
        })
    }
}

struct DesktopApp {
    platform: PlatformRef,
    settings: PresenterSettings,
    preloaded: Mutex<Option<QuestionSet>>,
}

impl UiApp for DesktopApp {
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

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);
    let args = Args::parse(&mut argv).map_err(|err| {
        eprintln!("{err}");
        print_usage();
        err
    })?;

    let settings = PresenterSettings::new(args.duration_secs, args.auto)?;

    // Resolve the preload before the window opens so a bad path fails loudly
    // instead of as a silent empty presenter.
    let preloaded = match &args.quiz {
        Some(path) => {
            let set = load_question_set(path)
                .map_err(|err| format!("could not load {}: {err}", path.display()))?;
            info!(path = %path.display(), questions = set.len(), "quiz preloaded");
            Some(set)
        }
        None => None,
    };

    let app = DesktopApp {
        platform: Arc::new(DesktopPlatform::new()),
        settings,
        preloaded: Mutex::new(preloaded),
    };
    let context = build_app_context(&(Arc::new(app) as Arc<dyn UiApp>));

    let desktop_cfg = DesktopConfig::new().with_window(
        WindowBuilder::new()
            .with_title("QuizCast")
            .with_always_on_top(false),
    );

    LaunchBuilder::desktop()
        .with_cfg(desktop_cfg)
        .with_context(context)
        .launch(App);
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    if let Err(err) = run() {
        // At this layer (binary glue), printing once is fine.
        eprintln!("{err}");
        std::process::exit(2);
    }
}
