use catalog::BuiltinCatalog;
use guide_core::model::{StageId, StepId};
use guide_core::{ChecklistIntent, Progress};
use services::ChecklistService;

fn step(id: &str) -> StepId {
    StepId::new(id).unwrap()
}

fn stage(id: &str) -> StageId {
    StageId::new(id).unwrap()
}

fn formation(svc: &ChecklistService) -> Progress {
    svc.stage_progress(&stage("formation")).unwrap()
}

#[test]
fn completion_walkthrough_on_builtin_catalog() {
    let mut svc = ChecklistService::from_source(&BuiltinCatalog).unwrap();

    // 1. Nothing done yet.
    assert_eq!(svc.global_progress(), Progress::from_counts(0, 6));
    assert_eq!(svc.global_progress().percentage, 0);
    assert_eq!(formation(&svc).percentage, 0);

    // 2. One formation step.
    svc.toggle_step_completion(&step("name-search"));
    assert_eq!(svc.global_progress().completed, 1);
    assert_eq!(svc.global_progress().percentage, 17);
    assert_eq!(formation(&svc).percentage, 50);

    // 3. Formation finished, other stages untouched.
    svc.toggle_step_completion(&step("basic-agreement"));
    assert_eq!(svc.global_progress().percentage, 33);
    assert_eq!(formation(&svc).percentage, 100);
    let report = svc.progress_report();
    for item in report.stages.iter().filter(|item| item.stage_id != stage("formation")) {
        assert_eq!(item.progress.percentage, 0, "{}", item.stage_id);
    }
    assert_eq!(report.completed_stages().count(), 1);

    // 4. Undo the first step.
    svc.toggle_step_completion(&step("name-search"));
    assert_eq!(svc.global_progress().percentage, 17);
    assert_eq!(formation(&svc).percentage, 50);

    // 5. A recording step counts globally while formation stays selected.
    let snapshot = svc.toggle_step_completion(&step("producer-contract"));
    assert_eq!(snapshot.selected_stage(), &stage("formation"));
    assert_eq!(svc.global_progress(), Progress::from_counts(2, 6));
    assert_eq!(svc.global_progress().percentage, 33);

    // 6. Selecting an unknown stage keeps the current selection.
    let before = svc.snapshot();
    let after = svc.select_stage(&stage("nonexistent"));
    assert_eq!(after.selected_stage(), &stage("formation"));
    assert_eq!(after, before);
}

#[test]
fn textual_intents_drive_the_same_operations() {
    let mut svc = ChecklistService::from_source(&BuiltinCatalog).unwrap();
    let script = [
        "select-stage:recording",
        "toggle-task:producer-agreement",
        "toggle-template:producer-contract",
        "toggle-template:distributor",
        "toggle-section:0",
    ];
    for raw in script {
        let intent: ChecklistIntent = raw.parse().unwrap();
        svc.dispatch(&intent);
    }

    let state = svc.snapshot();
    assert_eq!(state.selected_stage(), &stage("recording"));
    assert_eq!(state.open_template(), Some(&step("distributor")));
    assert_eq!(state.open_section(), Some(0));
    assert_eq!(svc.revision(), 5);
}
