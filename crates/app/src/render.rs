use std::fmt::Write as _;

use services::ProgressReport;
use view::markup::strip_control_chars as clean;
use view::vm::{ChecklistVm, StepStatus};

/// Plain-text rendering of a view model for terminal output.
///
/// Catalog text may come from a user file, so every string taken from it
/// passes through `clean` before it is written.
#[must_use]
pub fn checklist_text(vm: &ChecklistVm) -> String {
    let mut out = String::new();

    for tab in &vm.stages {
        let marker = if tab.is_selected { ">" } else { " " };
        let _ = writeln!(out, "{marker} {:<20} {:>3}%", clean(&tab.title), tab.progress);
    }
    let _ = writeln!(out);

    let detail = &vm.detail;
    let _ = writeln!(out, "{} ({}%)", clean(&detail.title), detail.progress);
    let _ = writeln!(out, "{}", clean(&detail.description));

    for section in &detail.sections {
        let marker = if section.is_open { "-" } else { "+" };
        let _ = writeln!(out, "  {marker} [{}] {}", section.index, clean(&section.title));
        if section.is_open {
            let _ = writeln!(out, "      {}", clean(&section.description));
            for step in &section.steps {
                let _ = writeln!(out, "      * {}", clean(step));
            }
            for cost in &section.costs {
                let _ = writeln!(out, "      {}: {}", clean(&cost.item), clean(&cost.amount));
            }
            for warning in &section.warnings {
                let _ = writeln!(out, "      ! {}", clean(warning));
            }
        }
    }

    for task in &detail.tasks {
        let marker = if task.is_expanded { "-" } else { "+" };
        let priority = task
            .priority
            .as_deref()
            .map(|p| format!(" [{}]", clean(p)))
            .unwrap_or_default();
        let _ = writeln!(
            out,
            "  {marker} {}{priority} ({}/{})",
            clean(&task.title),
            task.completed,
            task.total
        );
        if !task.is_expanded {
            continue;
        }
        for step in &task.steps {
            let check = match step.status {
                StepStatus::Completed => "x",
                StepStatus::Pending => " ",
            };
            let _ = writeln!(
                out,
                "      [{check}] {} ({})",
                clean(&step.title),
                clean(step.id.as_str())
            );
            if let Some(warning) = &step.warning {
                let _ = writeln!(out, "          ! {}", clean(warning));
            }
            if let Some(template) = step.template.as_ref().filter(|t| t.is_open) {
                let _ = writeln!(out, "          --- {} ---", clean(&template.title));
                for line in clean(&template.content).lines() {
                    let _ = writeln!(out, "          {line}");
                }
            }
        }
    }

    let _ = writeln!(out);
    let _ = writeln!(out, "{} ({}%)", vm.summary.label, vm.summary.percentage);
    out
}

#[must_use]
pub fn progress_text(report: &ProgressReport) -> String {
    let mut out = String::new();
    for item in &report.stages {
        let _ = writeln!(
            out,
            "{:<20} {}/{} {:>3}%",
            clean(&item.title),
            item.progress.completed,
            item.progress.total,
            item.progress.percentage
        );
    }
    let _ = writeln!(
        out,
        "{:<20} {}/{} {:>3}%",
        "Overall", report.global.completed, report.global.total, report.global.percentage
    );
    out
}
