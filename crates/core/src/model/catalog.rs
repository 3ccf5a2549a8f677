use std::collections::HashMap;

use thiserror::Error;

use crate::model::ids::{StageId, StepId, TaskId};
use crate::model::stage::Stage;
use crate::model::task::{Step, Task};

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CatalogError {
    #[error("catalog must contain at least one stage")]
    Empty,

    #[error("duplicate stage id: {0}")]
    DuplicateStage(StageId),

    #[error("duplicate task id: {0}")]
    DuplicateTask(TaskId),

    #[error("duplicate step id: {0}")]
    DuplicateStep(StepId),
}

//
// ─── CATALOG ───────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct StepLocation {
    stage: usize,
    task: usize,
    step: usize,
}

/// The fixed, read-only collection of stages, tasks and steps.
///
/// Built once and never mutated. Construction validates identifier
/// uniqueness so lookups by id are unambiguous.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    stages: Vec<Stage>,
    stage_index: HashMap<StageId, usize>,
    task_index: HashMap<TaskId, (usize, usize)>,
    step_index: HashMap<StepId, StepLocation>,
}

impl Catalog {
    /// Build a validated catalog.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Empty` if there are no stages, or a duplicate
    /// error naming the first identifier that appears twice.
    pub fn new(stages: Vec<Stage>) -> Result<Self, CatalogError> {
        if stages.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut stage_index = HashMap::with_capacity(stages.len());
        let mut task_index = HashMap::new();
        let mut step_index = HashMap::new();

        for (stage_pos, stage) in stages.iter().enumerate() {
            if stage_index.insert(stage.id().clone(), stage_pos).is_some() {
                return Err(CatalogError::DuplicateStage(stage.id().clone()));
            }
            for (task_pos, task) in stage.tasks().iter().enumerate() {
                if task_index
                    .insert(task.id().clone(), (stage_pos, task_pos))
                    .is_some()
                {
                    return Err(CatalogError::DuplicateTask(task.id().clone()));
                }
                for (step_pos, step) in task.steps().iter().enumerate() {
                    let location = StepLocation {
                        stage: stage_pos,
                        task: task_pos,
                        step: step_pos,
                    };
                    if step_index.insert(step.id().clone(), location).is_some() {
                        return Err(CatalogError::DuplicateStep(step.id().clone()));
                    }
                }
            }
        }

        Ok(Self {
            stages,
            stage_index,
            task_index,
            step_index,
        })
    }

    #[must_use]
    pub fn stages(&self) -> &[Stage] {
        &self.stages
    }

    #[must_use]
    pub fn stage(&self, id: &StageId) -> Option<&Stage> {
        self.stage_index.get(id).map(|&pos| &self.stages[pos])
    }

    /// The stage selected when a view starts. Always present.
    #[must_use]
    pub fn first_stage(&self) -> &Stage {
        &self.stages[0]
    }

    #[must_use]
    pub fn contains_stage(&self, id: &StageId) -> bool {
        self.stage_index.contains_key(id)
    }

    #[must_use]
    pub fn contains_task(&self, id: &TaskId) -> bool {
        self.task_index.contains_key(id)
    }

    #[must_use]
    pub fn contains_step(&self, id: &StepId) -> bool {
        self.step_index.contains_key(id)
    }

    #[must_use]
    pub fn task(&self, id: &TaskId) -> Option<&Task> {
        self.task_index
            .get(id)
            .map(|&(stage, task)| &self.stages[stage].tasks()[task])
    }

    #[must_use]
    pub fn step(&self, id: &StepId) -> Option<&Step> {
        self.step_index.get(id).map(|loc| {
            &self.stages[loc.stage].tasks()[loc.task].steps()[loc.step]
        })
    }

    /// The stage a step belongs to.
    #[must_use]
    pub fn stage_of_step(&self, id: &StepId) -> Option<&Stage> {
        self.step_index.get(id).map(|loc| &self.stages[loc.stage])
    }

    /// Total number of trackable steps across all stages.
    #[must_use]
    pub fn step_count(&self) -> usize {
        self.step_index.len()
    }
}
