use guide_core::model::{Section, Stage, StageId, Step, StepId, Task, TaskId};
use guide_core::{ChecklistState, stage_progress, task_progress};
use serde::Serialize;

use crate::markup::render_template_html;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StepStatus {
    Completed,
    Pending,
}

/// Template attached to a step.
///
/// `content` is the payload verbatim and never leaves the process through
/// serialization; serialized views carry the sanitized `html` only.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TemplateVm {
    pub title: String,
    #[serde(skip_serializing)]
    pub content: String,
    pub html: String,
    pub is_open: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StepVm {
    pub id: StepId,
    pub title: String,
    pub detail: String,
    pub warning: Option<String>,
    pub status: StepStatus,
    pub template: Option<TemplateVm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TaskVm {
    pub id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Option<String>,
    pub is_expanded: bool,
    pub completed: usize,
    pub total: usize,
    pub steps: Vec<StepVm>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CostLineVm {
    pub item: String,
    pub amount: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct SectionVm {
    pub index: usize,
    pub title: String,
    pub description: String,
    pub is_open: bool,
    pub steps: Vec<String>,
    pub costs: Vec<CostLineVm>,
    pub warnings: Vec<String>,
}

/// Fully resolved view of the selected stage.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StageDetailVm {
    pub id: StageId,
    pub title: String,
    pub description: String,
    pub progress: u8,
    pub sections: Vec<SectionVm>,
    pub tasks: Vec<TaskVm>,
}

fn map_step(step: &Step, state: &ChecklistState) -> StepVm {
    let status = if state.is_step_completed(step.id()) {
        StepStatus::Completed
    } else {
        StepStatus::Pending
    };
    StepVm {
        id: step.id().clone(),
        title: step.title().to_owned(),
        detail: step.detail().to_owned(),
        warning: step.warning().map(str::to_owned),
        status,
        template: step.template().map(|template| TemplateVm {
            title: template.title().to_owned(),
            content: template.content().to_owned(),
            html: render_template_html(template.content()),
            is_open: state.is_template_open(step.id()),
        }),
    }
}

fn map_task(task: &Task, state: &ChecklistState) -> TaskVm {
    let progress = task_progress(task, state.completed_steps());
    TaskVm {
        id: task.id().clone(),
        title: task.title().to_owned(),
        description: task.description().to_owned(),
        priority: task.priority().map(str::to_owned),
        is_expanded: state.is_task_expanded(task.id()),
        completed: progress.completed,
        total: progress.total,
        steps: task.steps().iter().map(|step| map_step(step, state)).collect(),
    }
}

fn map_section(index: usize, section: &Section, state: &ChecklistState) -> SectionVm {
    let details = section.details();
    SectionVm {
        index,
        title: section.title().to_owned(),
        description: section.description().to_owned(),
        is_open: state.is_section_open(index),
        steps: details.map(|d| d.steps.clone()).unwrap_or_default(),
        costs: details
            .map(|d| {
                d.costs
                    .iter()
                    .map(|(item, amount)| CostLineVm {
                        item: item.clone(),
                        amount: amount.clone(),
                    })
                    .collect()
            })
            .unwrap_or_default(),
        warnings: details.map(|d| d.warnings.clone()).unwrap_or_default(),
    }
}

/// Resolve a stage against the current state.
#[must_use]
pub fn map_stage_detail(stage: &Stage, state: &ChecklistState) -> StageDetailVm {
    StageDetailVm {
        id: stage.id().clone(),
        title: stage.title().to_owned(),
        description: stage.description().to_owned(),
        progress: stage_progress(stage, state.completed_steps()).percentage,
        sections: stage
            .sections()
            .iter()
            .enumerate()
            .map(|(index, section)| map_section(index, section, state))
            .collect(),
        tasks: stage.tasks().iter().map(|task| map_task(task, state)).collect(),
    }
}
