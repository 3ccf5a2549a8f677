#![forbid(unsafe_code)]

pub mod markup;
pub mod presenter;
pub mod vm;

pub use presenter::ChecklistPresenter;
pub use vm::{ChecklistVm, build_checklist_vm};
