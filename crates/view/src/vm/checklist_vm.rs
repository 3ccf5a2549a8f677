use guide_core::model::Catalog;
use guide_core::{ChecklistState, global_progress};
use serde::Serialize;

use super::detail_vm::{StageDetailVm, map_stage_detail};
use super::progress_vm::{ProgressSummaryVm, map_progress_summary};
use super::stage_vm::{StageTabVm, map_stage_tabs};

/// Everything the rendering layer needs for one frame.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ChecklistVm {
    pub stages: Vec<StageTabVm>,
    pub detail: StageDetailVm,
    pub summary: ProgressSummaryVm,
}

/// Project catalog and state into a view model. Holds no state of its own.
#[must_use]
pub fn build_checklist_vm(catalog: &Catalog, state: &ChecklistState) -> ChecklistVm {
    let selected = catalog
        .stage(state.selected_stage())
        .unwrap_or_else(|| catalog.first_stage());

    ChecklistVm {
        stages: map_stage_tabs(catalog, state),
        detail: map_stage_detail(selected, state),
        summary: map_progress_summary(global_progress(catalog, state.completed_steps())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::vm::StepStatus;
    use guide_core::model::{StageId, StepId, TaskId};

    fn builtin() -> Catalog {
        catalog::builtin::catalog().unwrap()
    }

    #[test]
    fn initial_projection() {
        let catalog = builtin();
        let vm = build_checklist_vm(&catalog, &ChecklistState::initial(&catalog));

        assert_eq!(vm.stages.len(), 5);
        assert!(vm.stages[0].is_selected);
        assert!(vm.stages.iter().skip(1).all(|tab| !tab.is_selected));
        assert!(vm.stages.iter().all(|tab| tab.progress == 0));

        assert_eq!(vm.detail.id.as_str(), "formation");
        assert_eq!(vm.detail.sections.len(), 2);
        assert!(vm.detail.sections.iter().all(|section| !section.is_open));
        assert!(vm.detail.tasks.iter().all(|task| !task.is_expanded));

        assert_eq!(vm.summary.total, 6);
        assert_eq!(vm.summary.percentage, 0);
    }

    #[test]
    fn projection_reflects_flags() {
        let catalog = builtin();
        let name_search = StepId::new("name-search").unwrap();
        let agreement = StepId::new("basic-agreement").unwrap();
        let state = ChecklistState::initial(&catalog)
            .toggle_step_completion(&catalog, &name_search)
            .toggle_task_expansion(&catalog, &TaskId::new("protect-band-name").unwrap())
            .toggle_template_visibility(&catalog, &agreement)
            .toggle_section_visibility(&catalog, 1);

        let vm = build_checklist_vm(&catalog, &state);
        assert_eq!(vm.stages[0].progress, 50);
        assert_eq!(vm.summary.percentage, 17);

        let task = &vm.detail.tasks[0];
        assert!(task.is_expanded);
        assert_eq!((task.completed, task.total), (1, 2));
        assert_eq!(task.priority.as_deref(), Some("high"));
        assert_eq!(task.steps[0].status, StepStatus::Completed);
        assert_eq!(task.steps[1].status, StepStatus::Pending);
        assert!(task.steps[0].template.is_none());

        let template = task.steps[1].template.as_ref().unwrap();
        assert!(template.is_open);
        assert!(template.content.starts_with("# Band Partnership Agreement"));
        assert!(template.html.starts_with("<h1>Band Partnership Agreement</h1>"));

        assert!(!vm.detail.sections[0].is_open);
        assert!(vm.detail.sections[1].is_open);
        assert_eq!(vm.detail.sections[1].costs.len(), 3);
    }

    #[test]
    fn detail_follows_selection_and_serializes() {
        let catalog = builtin();
        let state = ChecklistState::initial(&catalog)
            .select_stage(&catalog, &StageId::new("distribution").unwrap());

        let vm = build_checklist_vm(&catalog, &state);
        assert_eq!(vm.detail.id.as_str(), "distribution");
        assert!(vm.stages[2].is_selected);

        let json = serde_json::to_value(&vm).unwrap();
        assert_eq!(json["detail"]["id"], "distribution");
        assert_eq!(json["detail"]["tasks"][0]["steps"][0]["status"], "pending");
    }

    #[test]
    fn serialized_templates_carry_only_sanitized_html() {
        use guide_core::model::{Stage, Step, Task, TemplateExample};

        let payload = "<p>Terms<script>alert(1)</script></p>\u{1b}[2J";
        let step = Step::new(StepId::new("s").unwrap(), "Sign", "detail")
            .with_template(TemplateExample::new("Contract", payload));
        let task = Task::new(TaskId::new("t").unwrap(), "Task", "", vec![step]);
        let stage = Stage::new(StageId::new("only").unwrap(), "Only", "", vec![task]);
        let catalog = Catalog::new(vec![stage]).unwrap();

        let vm = build_checklist_vm(&catalog, &ChecklistState::initial(&catalog));
        let template = vm.detail.tasks[0].steps[0].template.as_ref().unwrap();
        assert_eq!(template.content, payload);
        assert!(!template.html.contains("<script>"));
        assert!(template.html.starts_with("<p>Terms</p>"));

        let json = serde_json::to_string(&vm).unwrap();
        assert!(!json.contains("<script>"));
        assert!(!json.contains("\"content\""));
    }
}
