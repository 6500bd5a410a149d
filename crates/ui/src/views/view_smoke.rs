use super::test_harness::{ViewKind, sample_set, setup_view_harness};

#[tokio::test(flavor = "current_thread")]
async fn home_view_smoke_renders_the_three_mode_cards() {
    let mut harness = setup_view_harness(ViewKind::Home, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Prepare Quiz"), "missing builder card in {html}");
    assert!(html.contains("Unattended mode"), "missing auto card in {html}");
    assert!(html.contains("Start quiz"), "missing present card in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn present_view_smoke_offers_the_load_panel_when_nothing_is_loaded() {
    let mut harness = setup_view_harness(ViewKind::Present, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Start teaching"), "missing load panel in {html}");
    assert!(html.contains("Load quiz"), "missing load button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn load_panel_smoke_reports_a_rejected_quiz_file() {
    let mut harness = setup_view_harness(ViewKind::Present, None);
    harness.platform.put_file("quiz.json", r#"{"no": 1}"#);
    harness.rebuild();

    harness
        .handles
        .load_path()
        .set("quiz.json".to_string());
    harness.handles.load_action().call(());
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("must contain a JSON array"),
        "missing rejection message in {html}"
    );
    // The rejected file must not have produced a session.
    assert!(html.contains("Start teaching"), "left the load panel in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn present_view_smoke_renders_question_progress_and_timer() {
    let mut harness = setup_view_harness(ViewKind::Present, Some(sample_set()));
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Question 1 of 2"), "missing progress in {html}");
    assert!(html.contains("30s"), "missing countdown in {html}");
    assert!(html.contains("Start timer"), "missing start button in {html}");
    assert!(html.contains("Capital of France?"), "missing prompt in {html}");
    assert!(
        !html.contains("option--correct"),
        "answer visible before reveal in {html}"
    );
}

#[tokio::test(flavor = "current_thread")]
async fn present_view_smoke_marks_the_correct_option_after_reveal() {
    let mut harness = setup_view_harness(ViewKind::Present, Some(sample_set()));
    harness.rebuild();

    let mut presenter = harness.handles.presenter();
    presenter.write().reveal();
    harness.drive_async().await;

    let html = harness.render();
    assert!(
        html.contains("option--correct"),
        "correct option not highlighted in {html}"
    );
    assert!(
        html.contains("Paris has been the capital since 987."),
        "missing explanation in {html}"
    );
    assert!(html.contains("Next question"), "missing advance button in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn builder_view_smoke_renders_form_and_empty_list() {
    let mut harness = setup_view_harness(ViewKind::Builder, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("New question"), "missing form heading in {html}");
    assert!(html.contains("Questions (0)"), "missing list heading in {html}");
    assert!(html.contains("Nothing yet"), "missing empty hint in {html}");
    assert!(html.contains("Import JSON"), "missing file actions in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn complete_view_smoke_offers_the_next_steps() {
    let mut harness = setup_view_harness(ViewKind::Finished, None);
    harness.rebuild();
    let html = harness.render();
    assert!(html.contains("Quiz completed!"), "missing headline in {html}");
    assert!(
        html.contains("Present another quiz"),
        "missing restart action in {html}"
    );
}
