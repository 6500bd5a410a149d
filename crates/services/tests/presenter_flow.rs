//! End-to-end flows across the file loader and the presenter, exercising
//! the paths the UI drives: load a file, run the countdown, reveal, advance
//! (manually and unattended), finish, restart.

use quiz_core::model::PresenterSettings;
use services::{Presenter, PresenterPhase, TickEvent, parse_question_set};

const QUIZ: &str = r#"[
    {"no": 1, "question": "Q1", "a": "1", "b": "2", "c": "3", "d": "4", "correct": "a",
     "explanation": "first"},
    {"no": 2, "question": "Q2", "a": "1", "b": "2", "c": "3", "d": "4", "correct": "c"},
    {"no": 3, "question": "Q3", "a": "1", "b": "2", "c": "3", "d": "4", "correct": "d"}
]"#;

fn tick_n(presenter: &mut Presenter, n: u32) -> Vec<TickEvent> {
    (0..n).map(|_| presenter.tick()).collect()
}

#[test]
fn manual_presentation_from_file_to_completion() {
    let set = parse_question_set(QUIZ).expect("sample quiz parses");
    let mut presenter = Presenter::new(PresenterSettings::new(3, false).unwrap());
    presenter.load(set);

    for position in 1..=3 {
        assert_eq!(presenter.position(), Some(position));
        assert_eq!(presenter.phase(), Some(PresenterPhase::AwaitingStart));
        assert_eq!(presenter.remaining_secs(), Some(3));

        presenter.start();
        let events = tick_n(&mut presenter, 3);
        assert_eq!(
            events,
            vec![TickEvent::Counted, TickEvent::Counted, TickEvent::Revealed]
        );
        assert!(presenter.revealed());

        // Manual mode: time alone never moves the session forward.
        assert_eq!(tick_n(&mut presenter, 5), vec![TickEvent::Idle; 5]);
        presenter.advance();
    }

    assert_eq!(presenter.phase(), Some(PresenterPhase::Complete));
}

#[test]
fn unattended_presentation_walks_the_whole_set() {
    let set = parse_question_set(QUIZ).expect("sample quiz parses");
    let mut presenter = Presenter::new(PresenterSettings::new(2, true).unwrap());
    presenter.load(set);
    presenter.start();

    let mut positions = vec![presenter.position().unwrap()];
    // Each question costs 2 ticks of countdown + 3 ticks of reveal delay;
    // the last question has no delay and waits for the presenter.
    for _ in 0..60 {
        if presenter.tick() == TickEvent::AutoAdvanced {
            positions.push(presenter.position().unwrap());
        }
        if presenter.revealed() && presenter.is_last_question() {
            break;
        }
    }

    assert_eq!(positions, vec![1, 2, 3]);
    assert_eq!(presenter.phase(), Some(PresenterPhase::Revealed));

    presenter.advance();
    assert_eq!(presenter.phase(), Some(PresenterPhase::Complete));
}

#[test]
fn restart_after_completion_runs_the_set_again() {
    let set = parse_question_set(QUIZ).expect("sample quiz parses");
    let mut presenter = Presenter::new(PresenterSettings::new(5, false).unwrap());
    presenter.load(set);

    for _ in 0..3 {
        presenter.reveal();
        presenter.advance();
    }
    assert_eq!(presenter.phase(), Some(PresenterPhase::Complete));

    presenter.restart();
    assert_eq!(presenter.position(), Some(1));
    assert_eq!(presenter.phase(), Some(PresenterPhase::AwaitingStart));
    assert_eq!(presenter.remaining_secs(), Some(5));
    assert_eq!(
        presenter.current_question().map(quiz_core::model::Question::prompt),
        Some("Q1")
    );
}

#[test]
fn rejected_file_leaves_a_running_session_untouched() {
    let set = parse_question_set(QUIZ).expect("sample quiz parses");
    let mut presenter = Presenter::new(PresenterSettings::default());
    presenter.load(set);
    presenter.start();
    presenter.tick();

    // The surface would only call `load` with a successfully parsed set;
    // a parse failure therefore cannot disturb the session.
    assert!(parse_question_set("{}").is_err());
    assert!(parse_question_set("[]").is_err());
    assert_eq!(presenter.phase(), Some(PresenterPhase::Running));
    assert_eq!(presenter.position(), Some(1));
}

#[test]
fn settings_changes_mid_session_apply_to_the_current_question() {
    let set = parse_question_set(QUIZ).expect("sample quiz parses");
    let mut presenter = Presenter::new(PresenterSettings::new(10, false).unwrap());
    presenter.load(set);
    presenter.start();
    tick_n(&mut presenter, 4);
    assert_eq!(presenter.remaining_secs(), Some(6));

    presenter.set_timer_duration(15).unwrap();
    assert_eq!(presenter.remaining_secs(), Some(15));
    assert_eq!(presenter.position(), Some(1));

    // Flipping auto-advance mid-question takes effect at the next reveal.
    presenter.set_auto_advance(true);
    presenter.start();
    tick_n(&mut presenter, 15);
    assert!(presenter.revealed());
    assert_eq!(tick_n(&mut presenter, 3).last(), Some(&TickEvent::AutoAdvanced));
    assert_eq!(presenter.position(), Some(2));
    assert_eq!(presenter.phase(), Some(PresenterPhase::Running));
}
