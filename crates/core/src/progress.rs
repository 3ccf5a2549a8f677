//! Progress derivation over the catalog and the completed-step set.
//!
//! All functions are pure. Identifiers in the completed set that do not
//! belong to the scope being measured never count toward it.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::model::{Catalog, Stage, Step, StepId, Task};

/// Completion counts and the rounded percentage derived from them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub completed: usize,
    pub total: usize,
    pub percentage: u8,
}

impl Progress {
    /// Build progress from raw counts.
    ///
    /// `completed` is clamped to `total` so the percentage stays within 0..=100.
    #[must_use]
    pub fn from_counts(completed: usize, total: usize) -> Self {
        let completed = completed.min(total);
        Self {
            completed,
            total,
            percentage: percentage(completed, total),
        }
    }

    /// True when the scope has steps and every one of them is done.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.total > 0 && self.completed == self.total
    }

    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.completed)
    }
}

/// Round-half-up of `100 * completed / total`; zero for an empty scope.
#[must_use]
pub fn percentage(completed: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    let completed = completed.min(total) as u128;
    let total = total as u128;
    let rounded = (200 * completed + total) / (2 * total);
    u8::try_from(rounded.min(100)).unwrap_or(100)
}

fn count_completed<'a>(
    steps: impl Iterator<Item = &'a Step>,
    completed: &BTreeSet<StepId>,
) -> (usize, usize) {
    steps.fold((0, 0), |(done, total), step| {
        let done = done + usize::from(completed.contains(step.id()));
        (done, total + 1)
    })
}

/// Progress over one task's steps.
#[must_use]
pub fn task_progress(task: &Task, completed: &BTreeSet<StepId>) -> Progress {
    let (done, total) = count_completed(task.steps().iter(), completed);
    Progress::from_counts(done, total)
}

/// Progress over every step of one stage.
#[must_use]
pub fn stage_progress(stage: &Stage, completed: &BTreeSet<StepId>) -> Progress {
    let (done, total) = count_completed(stage.steps(), completed);
    Progress::from_counts(done, total)
}

/// Progress across the whole catalog, regardless of which stage is selected.
#[must_use]
pub fn global_progress(catalog: &Catalog, completed: &BTreeSet<StepId>) -> Progress {
    let (done, total) = catalog
        .stages()
        .iter()
        .map(|stage| count_completed(stage.steps(), completed))
        .fold((0, 0), |(done, total), (d, t)| (done + d, total + t));
    Progress::from_counts(done, total)
}
