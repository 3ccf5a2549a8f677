use guide_core::ChecklistIntent;
use services::ChecklistService;

use crate::vm::{ChecklistVm, build_checklist_vm};

/// Presentation-facing facade: takes intents, hands back fresh view models.
///
/// The rendering layer never sees the state sets; it only calls `dispatch`
/// and renders whatever comes back.
#[derive(Debug, Clone)]
pub struct ChecklistPresenter {
    service: ChecklistService,
}

impl ChecklistPresenter {
    #[must_use]
    pub fn new(service: ChecklistService) -> Self {
        Self { service }
    }

    #[must_use]
    pub fn service(&self) -> &ChecklistService {
        &self.service
    }

    /// View model for the latest snapshot.
    #[must_use]
    pub fn current(&self) -> ChecklistVm {
        let catalog = self.service.catalog();
        let state = self.service.snapshot();
        build_checklist_vm(&catalog, &state)
    }

    /// Apply an intent and re-emit the view model.
    pub fn dispatch(&mut self, intent: &ChecklistIntent) -> ChecklistVm {
        self.service.dispatch(intent);
        self.current()
    }
}
