use std::sync::Arc;

use catalog::CatalogSource;
use guide_core::model::{Catalog, StageId, StepId, TaskId};
use guide_core::{ChecklistIntent, ChecklistState, Progress, Transition};
use tracing::debug;

use crate::error::ChecklistServiceError;
use crate::progress::ProgressReport;

/// Owner of the current checklist snapshot for one view.
///
/// This service owns:
/// - the immutable catalog
/// - the latest `ChecklistState` snapshot
///
/// It is the single writer: every operation computes the next snapshot and
/// swaps the `Arc`. Snapshots handed out earlier never change, so callers
/// can compare old and new values between renders.
#[derive(Debug, Clone)]
pub struct ChecklistService {
    catalog: Arc<Catalog>,
    state: Arc<ChecklistState>,
    revision: u64,
}

impl ChecklistService {
    #[must_use]
    pub fn new(catalog: Arc<Catalog>) -> Self {
        let state = Arc::new(ChecklistState::initial(&catalog));
        Self {
            catalog,
            state,
            revision: 0,
        }
    }

    /// Load the catalog from a source and start a fresh view.
    ///
    /// # Errors
    ///
    /// Returns `ChecklistServiceError::Catalog` when the source fails to load.
    pub fn from_source(source: &dyn CatalogSource) -> Result<Self, ChecklistServiceError> {
        let catalog = source.load()?;
        Ok(Self::new(Arc::new(catalog)))
    }

    /// Start the view on a preferred stage. Unknown stages keep the default.
    #[must_use]
    pub fn with_initial_stage(mut self, stage: &StageId) -> Self {
        if !self.catalog.contains_stage(stage) {
            debug!(%stage, "initial stage not in catalog, keeping default");
        }
        self.state = Arc::new(ChecklistState::starting_at(&self.catalog, stage));
        self
    }

    #[must_use]
    pub fn catalog(&self) -> Arc<Catalog> {
        Arc::clone(&self.catalog)
    }

    /// The latest snapshot.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ChecklistState> {
        Arc::clone(&self.state)
    }

    /// Number of dispatches that produced a new snapshot.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Apply an intent and return the resulting snapshot.
    ///
    /// Absorbed intents (unknown ids, reselecting the current stage) return
    /// the same `Arc` as before.
    pub fn dispatch(&mut self, intent: &ChecklistIntent) -> Arc<ChecklistState> {
        let (next, transition) = self.state.apply(&self.catalog, intent);
        match transition {
            Transition::Changed => {
                self.state = Arc::new(next);
                self.revision += 1;
                debug!(%intent, revision = self.revision, "checklist state changed");
            }
            Transition::Unchanged(reason) => {
                debug!(%intent, %reason, "checklist intent absorbed");
            }
        }
        self.snapshot()
    }

    pub fn toggle_step_completion(&mut self, id: &StepId) -> Arc<ChecklistState> {
        self.dispatch(&ChecklistIntent::ToggleStep(id.clone()))
    }

    pub fn toggle_task_expansion(&mut self, id: &TaskId) -> Arc<ChecklistState> {
        self.dispatch(&ChecklistIntent::ToggleTask(id.clone()))
    }

    pub fn select_stage(&mut self, id: &StageId) -> Arc<ChecklistState> {
        self.dispatch(&ChecklistIntent::SelectStage(id.clone()))
    }

    pub fn toggle_template_visibility(&mut self, id: &StepId) -> Arc<ChecklistState> {
        self.dispatch(&ChecklistIntent::ToggleTemplate(id.clone()))
    }

    pub fn toggle_section_visibility(&mut self, index: usize) -> Arc<ChecklistState> {
        self.dispatch(&ChecklistIntent::ToggleSection(index))
    }

    /// Catalog-wide progress for the current snapshot.
    #[must_use]
    pub fn global_progress(&self) -> Progress {
        guide_core::global_progress(&self.catalog, self.state.completed_steps())
    }

    /// Progress of a single stage, or `None` if the stage is unknown.
    #[must_use]
    pub fn stage_progress(&self, id: &StageId) -> Option<Progress> {
        self.catalog
            .stage(id)
            .map(|stage| guide_core::stage_progress(stage, self.state.completed_steps()))
    }

    #[must_use]
    pub fn progress_report(&self) -> ProgressReport {
        ProgressReport::build(&self.catalog, &self.state)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::BuiltinCatalog;

    fn service() -> ChecklistService {
        ChecklistService::from_source(&BuiltinCatalog).unwrap()
    }

    #[test]
    fn absorbed_intent_keeps_the_same_snapshot() {
        let mut svc = service();
        let before = svc.snapshot();

        let after = svc.toggle_step_completion(&StepId::new("ghost").unwrap());
        assert!(Arc::ptr_eq(&before, &after));
        assert_eq!(svc.revision(), 0);
    }

    #[test]
    fn changed_intent_replaces_snapshot_and_keeps_old_one_intact() {
        let mut svc = service();
        let before = svc.snapshot();

        let after = svc.toggle_task_expansion(&TaskId::new("protect-band-name").unwrap());
        assert!(!Arc::ptr_eq(&before, &after));
        assert!(before.expanded_tasks().is_empty());
        assert_eq!(after.expanded_tasks().len(), 1);
        assert_eq!(svc.revision(), 1);
    }

    #[test]
    fn initial_stage_can_be_configured() {
        let svc = service().with_initial_stage(&StageId::new("merchandise").unwrap());
        assert_eq!(svc.snapshot().selected_stage().as_str(), "merchandise");

        let fallback = service().with_initial_stage(&StageId::new("touring").unwrap());
        assert_eq!(fallback.snapshot().selected_stage().as_str(), "formation");
    }

    #[test]
    fn stage_progress_for_unknown_stage_is_none() {
        let svc = service();
        assert_eq!(svc.stage_progress(&StageId::new("touring").unwrap()), None);
        assert_eq!(
            svc.stage_progress(&StageId::new("formation").unwrap()),
            Some(Progress::from_counts(0, 2))
        );
    }
}
