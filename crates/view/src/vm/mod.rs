mod checklist_vm;
mod detail_vm;
mod progress_vm;
mod stage_vm;

pub use checklist_vm::{ChecklistVm, build_checklist_vm};
pub use detail_vm::{
    CostLineVm, SectionVm, StageDetailVm, StepStatus, StepVm, TaskVm, TemplateVm,
    map_stage_detail,
};
pub use progress_vm::{ProgressSummaryVm, map_progress_summary};
pub use stage_vm::{StageTabVm, map_stage_tabs};
